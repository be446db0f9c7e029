//! Ichimoku Kinko Hyo (Ichimoku Cloud).
//!
//! Five lines built from range midpoints:
//!
//! ```text
//! midpoint(n)[i] = (highest high + lowest low) / 2 over the n bars ending at i
//!
//! Tenkan-sen     = midpoint(tenkan)
//! Kijun-sen      = midpoint(kijun)
//! Senkou Span A  = (Tenkan-sen + Kijun-sen) / 2
//! Senkou Span B  = midpoint(senkou_b)
//! Chikou Span    = Close
//! ```
//!
//! All lines are aligned to the candle they are computed from. Charting
//! conventions shift the Senkou spans forward and the Chikou span backward by
//! the Kijun period; that shift is left to the renderer.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::ichimoku::Ichimoku;
//!
//! let high: Vec<f64> = (0..60).map(|i| 1.1 + f64::from(i) * 0.001).collect();
//! let low: Vec<f64> = high.iter().map(|h| h - 0.002).collect();
//! let close: Vec<f64> = high.iter().map(|h| h - 0.001).collect();
//!
//! let cloud = Ichimoku::default().compute(&high, &low, &close).unwrap();
//! assert!(cloud.tenkan[7].is_none());
//! assert!(cloud.tenkan[8].is_some());
//! assert!(cloud.senkou_b[50].is_none());
//! assert!(cloud.senkou_b[51].is_some());
//! assert_eq!(cloud.chikou[0], Some(close[0]));
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::rolling_extrema;
use crate::series::{combine, Series};
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Output of the Ichimoku computation.
#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuOutput<T> {
    /// Tenkan-sen (conversion line).
    pub tenkan: Series<T>,
    /// Kijun-sen (base line).
    pub kijun: Series<T>,
    /// Senkou Span A (leading span A).
    pub senkou_a: Series<T>,
    /// Senkou Span B (leading span B).
    pub senkou_b: Series<T>,
    /// Chikou Span (lagging span), the close itself.
    pub chikou: Series<T>,
}

impl<T> IchimokuOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chikou.len()
    }

    /// Returns true if the output is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chikou.is_empty()
    }
}

/// Midpoint of the high/low range over the trailing `period` bars.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn range_midpoint<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Series<T>> {
    let extrema = rolling_extrema(high, low, period)?;
    Ok(combine(&extrema.max, &extrema.min, |hh, ll| (hh + ll) / T::two()))
}

/// Computes the Ichimoku lines.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if any period is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
pub fn ichimoku<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    tenkan_period: usize,
    kijun_period: usize,
    senkou_b_period: usize,
) -> Result<IchimokuOutput<T>> {
    validate_period(tenkan_period, "ichimoku")?;
    validate_period(kijun_period, "ichimoku")?;
    validate_period(senkou_b_period, "ichimoku")?;
    validate_same_len(&[("high", high.len()), ("low", low.len()), ("close", close.len())])?;

    let tenkan = range_midpoint(high, low, tenkan_period)?;
    let kijun = range_midpoint(high, low, kijun_period)?;
    let senkou_a = combine(&tenkan, &kijun, |t, k| (t + k) / T::two());
    let senkou_b = range_midpoint(high, low, senkou_b_period)?;
    let chikou = close.iter().copied().map(Some).collect();

    Ok(IchimokuOutput {
        tenkan,
        kijun,
        senkou_a,
        senkou_b,
        chikou,
    })
}

/// Ichimoku configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ichimoku {
    tenkan: usize,
    kijun: usize,
    senkou_b: usize,
}

impl Default for Ichimoku {
    /// Standard parameters (9, 26, 52).
    fn default() -> Self {
        Self {
            tenkan: 9,
            kijun: 26,
            senkou_b: 52,
        }
    }
}

impl Ichimoku {
    /// Creates a configuration with standard parameters (9, 26, 52).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Tenkan-sen period.
    #[must_use]
    pub const fn tenkan(mut self, period: usize) -> Self {
        self.tenkan = period;
        self
    }

    /// Sets the Kijun-sen period.
    #[must_use]
    pub const fn kijun(mut self, period: usize) -> Self {
        self.kijun = period;
        self
    }

    /// Sets the Senkou Span B period.
    #[must_use]
    pub const fn senkou_b(mut self, period: usize) -> Self {
        self.senkou_b = period;
        self
    }

    /// Returns the Tenkan-sen period.
    #[must_use]
    pub const fn get_tenkan(&self) -> usize {
        self.tenkan
    }

    /// Returns the Kijun-sen period.
    #[must_use]
    pub const fn get_kijun(&self) -> usize {
        self.kijun
    }

    /// Returns the Senkou Span B period.
    #[must_use]
    pub const fn get_senkou_b(&self) -> usize {
        self.senkou_b
    }

    /// Computes the Ichimoku lines using the configured periods.
    ///
    /// # Errors
    ///
    /// Returns an error if a period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
    ) -> Result<IchimokuOutput<T>> {
        ichimoku(high, low, close, self.tenkan, self.kijun, self.senkou_b)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::count_undefined_prefix;

    fn sample(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let high: Vec<f64> = (0..n).map(|i| 2.0 + ((i as f64) * 0.3).sin()).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
        let close: Vec<f64> = high.iter().map(|h| h - 0.2).collect();
        (high, low, close)
    }

    #[test]
    fn test_midpoint_uses_range_extremes() {
        let high = [3.0_f64, 5.0, 4.0];
        let low = [1.0_f64, 2.0, 0.5];
        let mid = range_midpoint(&high, &low, 3).unwrap();
        // (5 + 0.5) / 2; averaging per-column midpoints would give 2.625
        assert_eq!(mid[2], Some(2.75));
    }

    #[test]
    fn test_ichimoku_prefixes() {
        let (h, l, c) = sample(80);
        let out = ichimoku(&h, &l, &c, 9, 26, 52).unwrap();
        assert_eq!(out.len(), 80);
        assert_eq!(count_undefined_prefix(&out.tenkan), 8);
        assert_eq!(count_undefined_prefix(&out.kijun), 25);
        assert_eq!(count_undefined_prefix(&out.senkou_a), 25);
        assert_eq!(count_undefined_prefix(&out.senkou_b), 51);
        assert_eq!(count_undefined_prefix(&out.chikou), 0);
    }

    #[test]
    fn test_senkou_a_is_average() {
        let (h, l, c) = sample(40);
        let out = ichimoku(&h, &l, &c, 9, 26, 52).unwrap();
        for i in 25..40 {
            let expected = (out.tenkan[i].unwrap() + out.kijun[i].unwrap()) / 2.0;
            assert!((out.senkou_a[i].unwrap() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_chikou_is_close() {
        let (h, l, c) = sample(10);
        let out = ichimoku(&h, &l, &c, 9, 26, 52).unwrap();
        assert_eq!(out.chikou, c.iter().copied().map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_ichimoku_errors() {
        let (h, l, c) = sample(10);
        assert!(ichimoku(&h, &l, &c, 0, 26, 52).is_err());
        assert!(ichimoku(&h, &l[..9], &c, 9, 26, 52).is_err());
        let config = Ichimoku::default();
        assert_eq!((config.get_tenkan(), config.get_kijun(), config.get_senkou_b()), (9, 26, 52));
    }
}
