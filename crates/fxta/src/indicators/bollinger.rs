//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility envelope of three bands:
//! - **Middle Band**: Simple Moving Average (SMA) of the price
//! - **Upper Band**: Middle Band + (k × standard deviation)
//! - **Lower Band**: Middle Band - (k × standard deviation)
//!
//! Where `k` is typically 2.
//!
//! # Mathematical Conventions
//!
//! - **Population Standard Deviation**: Uses ÷n, not ÷(n-1).
//! - Mean and deviation are computed fresh for every window.
//!
//! # Formula
//!
//! ```text
//! Middle Band = SMA(price, period)
//! Standard Deviation = sqrt(sum((price - SMA)^2) / period)
//! Upper Band = Middle Band + (k × Standard Deviation)
//! Lower Band = Middle Band - (k × Standard Deviation)
//! ```
//!
//! # Example
//!
//! ```
//! use fxta::indicators::bollinger::bollinger;
//!
//! let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let result = bollinger(&data, 5, 2.0).unwrap();
//!
//! // First 4 values (period - 1) are undefined
//! assert!(result.middle[3].is_none());
//!
//! // Upper > Middle > Lower for any non-zero volatility
//! let (upper, middle, lower) = (result.upper[4].unwrap(), result.middle[4].unwrap(), result.lower[4].unwrap());
//! assert!(upper > middle && middle > lower);
//! ```

use crate::error::Result;
use crate::kernels::rolling::{window, window_mean, window_std_dev};
use crate::series::BandOutput;
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for Bollinger Bands (`period - 1`).
///
/// ```
/// use fxta::indicators::bollinger::bollinger_lookback;
///
/// assert_eq!(bollinger_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length required for Bollinger Bands.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize) -> usize {
    period
}

/// Computes Bollinger Bands for a data series.
///
/// # Arguments
///
/// * `data` - The input data series (typically closing prices)
/// * `period` - The number of periods for the SMA and standard deviation (commonly 20)
/// * `multiplier` - The number of standard deviations for the bands (commonly 2.0)
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    period: usize,
    multiplier: T,
) -> Result<BandOutput<T>> {
    validate_period(period, "bollinger")?;

    let mut output = BandOutput::undefined(data.len());
    if data.len() < period {
        return Ok(output);
    }

    let n = T::from_usize(period)?;
    for i in period - 1..data.len() {
        let w = window(data, i, period);
        let mean = window_mean(w, n);
        let width = multiplier * window_std_dev(w, mean, n);
        output.set(i, mean + width, mean, mean - width);
    }
    Ok(output)
}

/// Bollinger Bands configuration with a fluent API.
///
/// ```
/// use fxta::indicators::bollinger::Bollinger;
///
/// let prices: Vec<f64> = (0..30).map(|i| 1.1 + f64::from(i % 4) * 0.001).collect();
/// let result = Bollinger::new().period(10).multiplier(2.5).compute(&prices).unwrap();
/// assert_eq!(result.len(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
}

impl Default for Bollinger {
    /// Standard parameters (20, 2.0).
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a Bollinger Bands configuration with standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the standard deviation multiplier for the bands.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }

    /// Computes Bollinger Bands using the configured parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BandOutput<T>> {
        bollinger(data, self.period, T::from_f64(self.multiplier)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::indicators::sma::sma;
    use crate::indicators::stddev::stddev;
    use crate::utils::{approx_eq, series_approx_eq, EPSILON};

    // ==================== Basic Tests ====================

    #[test]
    fn test_bollinger_known_values() {
        let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = bollinger(&data, 8, 2.0).unwrap();
        assert!(approx_eq(result.middle[7].unwrap(), 5.0, EPSILON));
        assert!(approx_eq(result.upper[7].unwrap(), 9.0, EPSILON));
        assert!(approx_eq(result.lower[7].unwrap(), 1.0, EPSILON));
    }

    #[test]
    fn test_bollinger_middle_is_sma() {
        let data: Vec<f64> = (0..50).map(|i| 1.1 + (f64::from(i) * 0.3).cos() * 0.01).collect();
        let result = bollinger(&data, 20, 2.0).unwrap();
        assert!(series_approx_eq(&result.middle, &sma(&data, 20).unwrap(), EPSILON));
    }

    #[test]
    fn test_bollinger_width_is_multiple_of_stddev() {
        let data: Vec<f64> = (0..40).map(|i| f64::from(i % 5)).collect();
        let result = bollinger(&data, 10, 1.5).unwrap();
        let sd = stddev(&data, 10).unwrap();
        for i in 9..40 {
            let width = result.upper[i].unwrap() - result.middle[i].unwrap();
            assert!(approx_eq(width, 1.5 * sd[i].unwrap(), 1e-9));
        }
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let data: Vec<f64> = (0..60).map(|i| (f64::from(i) * 0.2).sin()).collect();
        let result = bollinger(&data, 20, 2.0).unwrap();
        for i in 19..60 {
            assert!(result.upper[i].unwrap() >= result.middle[i].unwrap());
            assert!(result.middle[i].unwrap() >= result.lower[i].unwrap());
        }
    }

    #[test]
    fn test_bollinger_constant_collapses() {
        let result = bollinger(&[1.0_f64; 5], 3, 2.0).unwrap();
        assert_eq!(result.upper[4], result.lower[4]);
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_bollinger_short_input() {
        let result = bollinger(&[1.0_f64, 2.0], 5, 2.0).unwrap();
        assert_eq!(result, BandOutput::undefined(2));
    }

    #[test]
    fn test_bollinger_zero_period() {
        assert!(bollinger(&[1.0_f64], 0, 2.0).is_err());
    }

    // ==================== Config Tests ====================

    #[test]
    fn test_bollinger_config() {
        let config = Bollinger::default();
        assert_eq!(config.get_period(), 20);
        assert_eq!(config.get_multiplier(), 2.0);
        assert_eq!(config.lookback(), 19);
        assert_eq!(bollinger_min_len(20), 20);
    }
}
