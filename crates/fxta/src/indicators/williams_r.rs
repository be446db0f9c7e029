//! Williams %R indicator.
//!
//! Williams %R is similar to the Stochastic oscillator but expressed on a
//! negative scale from -100 to 0.
//!
//! # Algorithm
//!
//! ```text
//! %R = -100 × (Highest High - Close) / (Highest High - Lowest Low)
//! ```
//!
//! # Interpretation
//!
//! - %R = 0: Close is at the highest high (overbought)
//! - %R = -100: Close is at the lowest low (oversold)
//! - %R > -20: Overbought territory
//! - %R < -80: Oversold territory
//!
//! # Edge Cases
//!
//! - When Highest High == Lowest Low (range = 0), %R = -50 (midpoint)
//!
//! # Example
//!
//! ```
//! use fxta::indicators::williams_r::williams_r;
//!
//! let high = vec![48.70_f64, 48.72, 48.90, 48.87, 48.82, 49.05, 49.20, 49.35];
//! let low = vec![47.79_f64, 48.14, 48.39, 48.37, 48.24, 48.64, 48.94, 48.86];
//! let close = vec![48.16_f64, 48.61, 48.75, 48.63, 48.74, 49.03, 49.07, 49.32];
//!
//! let result = williams_r(&high, &low, &close, 5).unwrap();
//!
//! assert!(result[3].is_none());
//! let r = result[4].unwrap();
//! assert!((-100.0..=0.0).contains(&r));
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::rolling_extrema;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the lookback period for Williams %R (`period - 1`).
///
/// ```
/// use fxta::indicators::williams_r::williams_r_lookback;
///
/// assert_eq!(williams_r_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn williams_r_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes Williams %R.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
pub fn williams_r<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Series<T>> {
    validate_period(period, "williams_r")?;
    let len = validate_same_len(&[("high", high.len()), ("low", low.len()), ("close", close.len())])?;

    let extrema = rolling_extrema(high, low, period)?;
    let hundred = T::hundred();
    let mut output = undefined(len);

    for (i, slot) in output.iter_mut().enumerate() {
        if let (Some(hh), Some(ll)) = (extrema.max[i], extrema.min[i]) {
            let range = hh - ll;
            *slot = Some(if range > T::zero() {
                (hh - close[i]) / range * -hundred
            } else {
                -T::fifty()
            });
        }
    }
    Ok(output)
}

/// Williams %R configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WilliamsR {
    period: usize,
}

impl Default for WilliamsR {
    /// Period 14.
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl WilliamsR {
    /// Creates a configuration with the default period (14).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        williams_r_lookback(self.period)
    }

    /// Computes Williams %R using the configured period.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T], close: &[T]) -> Result<Series<T>> {
        williams_r(high, low, close, self.period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    // ==================== Basic Tests ====================

    #[test]
    fn test_close_at_high_is_zero() {
        let high = [2.0_f64, 3.0, 4.0];
        let low = [1.0_f64, 1.0, 1.0];
        let close = [1.5_f64, 2.0, 4.0];
        let result = williams_r(&high, &low, &close, 3).unwrap();
        assert!(approx_eq(result[2].unwrap(), 0.0, EPSILON));
    }

    #[test]
    fn test_close_at_low_is_minus_hundred() {
        let high = [4.0_f64, 3.0, 2.0];
        let low = [1.0_f64, 1.0, 1.0];
        let close = [3.0_f64, 2.0, 1.0];
        let result = williams_r(&high, &low, &close, 3).unwrap();
        assert!(approx_eq(result[2].unwrap(), -100.0, EPSILON));
    }

    #[test]
    fn test_midpoint() {
        let high = [3.0_f64, 3.0];
        let low = [1.0_f64, 1.0];
        let close = [2.0_f64, 2.0];
        let result = williams_r(&high, &low, &close, 2).unwrap();
        assert!(approx_eq(result[1].unwrap(), -50.0, EPSILON));
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_flat_range_is_minus_fifty() {
        let x = [1.0_f64; 4];
        let result = williams_r(&x, &x, &x, 3).unwrap();
        assert_eq!(result, vec![None, None, Some(-50.0), Some(-50.0)]);
    }

    #[test]
    fn test_errors() {
        let x = [1.0_f64; 3];
        assert!(williams_r(&x, &x, &x, 0).is_err());
        assert!(williams_r(&x, &x, &x[..1], 2).is_err());
        assert_eq!(WilliamsR::default().lookback(), 13);
    }
}
