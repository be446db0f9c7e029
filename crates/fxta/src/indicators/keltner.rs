//! Keltner Channels.
//!
//! An EMA of the close with bands a multiple of the ATR away:
//!
//! ```text
//! Middle = EMA(close, ema_period)
//! Upper  = Middle + multiplier × ATR(atr_period)
//! Lower  = Middle - multiplier × ATR(atr_period)
//! ```
//!
//! A position is defined only where both the EMA and the ATR are.

use crate::error::Result;
use crate::indicators::atr::atr;
use crate::indicators::ema::ema;
use crate::series::BandOutput;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Computes Keltner Channels.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use fxta::indicators::keltner::keltner;
///
/// let high = vec![2.0_f64; 25];
/// let low = vec![1.0_f64; 25];
/// let close = vec![1.5_f64; 25];
///
/// let channels = keltner(&high, &low, &close, 20, 10, 2.0).unwrap();
/// assert!(channels.middle[18].is_none());
/// assert_eq!(channels.upper[19], Some(3.5));
/// assert_eq!(channels.lower[19], Some(-0.5));
/// ```
pub fn keltner<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    ema_period: usize,
    atr_period: usize,
    multiplier: T,
) -> Result<BandOutput<T>> {
    validate_period(ema_period, "keltner")?;
    validate_period(atr_period, "keltner")?;
    let len = validate_same_len(&[("high", high.len()), ("low", low.len()), ("close", close.len())])?;

    let middle = ema(close, ema_period)?;
    let range = atr(high, low, close, atr_period)?;

    let mut output = BandOutput::undefined(len);
    for i in 0..len {
        if let (Some(m), Some(r)) = (middle[i], range[i]) {
            let width = multiplier * r;
            output.set(i, m + width, m, m - width);
        }
    }
    Ok(output)
}

/// Keltner Channels configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keltner {
    ema_period: usize,
    atr_period: usize,
    multiplier: f64,
}

impl Default for Keltner {
    /// Standard parameters (EMA 20, ATR 10, multiplier 2).
    fn default() -> Self {
        Self {
            ema_period: 20,
            atr_period: 10,
            multiplier: 2.0,
        }
    }
}

impl Keltner {
    /// Creates a configuration with standard parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the EMA period of the middle line.
    #[must_use]
    pub const fn ema_period(mut self, period: usize) -> Self {
        self.ema_period = period;
        self
    }

    /// Sets the ATR period of the band width.
    #[must_use]
    pub const fn atr_period(mut self, period: usize) -> Self {
        self.atr_period = period;
        self
    }

    /// Sets the ATR multiplier.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Returns the EMA period.
    #[must_use]
    pub const fn get_ema_period(&self) -> usize {
        self.ema_period
    }

    /// Returns the ATR period.
    #[must_use]
    pub const fn get_atr_period(&self) -> usize {
        self.atr_period
    }

    /// Returns the ATR multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Computes Keltner Channels using the configured parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T], close: &[T]) -> Result<BandOutput<T>> {
        keltner(
            high,
            low,
            close,
            self.ema_period,
            self.atr_period,
            T::from_f64(self.multiplier)?,
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, count_undefined_prefix, EPSILON};

    #[test]
    fn test_keltner_defined_where_both_defined() {
        let high = vec![2.0_f64; 30];
        let low = vec![1.0_f64; 30];
        let close = vec![1.5_f64; 30];

        // ATR is the longer warm-up here.
        let out = keltner(&high, &low, &close, 5, 12, 2.0).unwrap();
        assert_eq!(count_undefined_prefix(&out.middle), 11);

        // EMA is the longer warm-up here.
        let out = keltner(&high, &low, &close, 20, 10, 2.0).unwrap();
        assert_eq!(count_undefined_prefix(&out.upper), 19);
    }

    #[test]
    fn test_keltner_band_width() {
        let high: Vec<f64> = (0..40).map(|i| 1.1 + (f64::from(i) * 0.2).sin() * 0.01).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 0.003).collect();
        let close: Vec<f64> = high.iter().map(|h| h - 0.001).collect();
        let out = keltner(&high, &low, &close, 20, 10, 2.0).unwrap();
        let range = atr(&high, &low, &close, 10).unwrap();
        for i in 19..40 {
            let width = out.upper[i].unwrap() - out.middle[i].unwrap();
            assert!(approx_eq(width, 2.0 * range[i].unwrap(), 1e-9));
            let lower_width = out.middle[i].unwrap() - out.lower[i].unwrap();
            assert!(approx_eq(width, lower_width, 1e-9));
        }
    }

    #[test]
    fn test_keltner_middle_is_ema() {
        let close: Vec<f64> = (0..30).map(f64::from).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let out = keltner(&high, &low, &close, 20, 10, 2.0).unwrap();
        let expected = ema(&close, 20).unwrap();
        for i in 19..30 {
            assert!(approx_eq(out.middle[i].unwrap(), expected[i].unwrap(), EPSILON));
        }
    }

    #[test]
    fn test_keltner_errors() {
        let x = [1.0_f64; 3];
        assert!(keltner(&x, &x, &x, 0, 10, 2.0).is_err());
        assert!(keltner(&x, &x, &x, 20, 0, 2.0).is_err());
        assert!(keltner(&x, &x[..1], &x, 20, 10, 2.0).is_err());
        let config = Keltner::default();
        assert_eq!((config.get_ema_period(), config.get_atr_period()), (20, 10));
        assert_eq!(config.get_multiplier(), 2.0);
    }
}
