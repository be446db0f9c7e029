//! Rolling population standard deviation.
//!
//! Uses ÷n, not ÷(n-1), matching Bollinger Bands and most charting platforms.
//!
//! ```text
//! mean    = SMA(data, period)
//! STDDEV  = sqrt(Σ (data[i-j] - mean)² / period)
//! ```

use crate::error::Result;
use crate::kernels::rolling::{window, window_mean, window_std_dev};
use crate::series::{undefined, Series};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for the rolling standard deviation.
#[inline]
#[must_use]
pub const fn stddev_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the rolling population standard deviation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
///
/// # Example
///
/// ```
/// use fxta::indicators::stddev::stddev;
///
/// let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let result = stddev(&data, 8).unwrap();
/// assert!((result[7].unwrap() - 2.0).abs() < 1e-10);
/// ```
pub fn stddev<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "stddev")?;

    let mut output = undefined(data.len());
    if data.len() < period {
        return Ok(output);
    }

    let n = T::from_usize(period)?;
    for (i, slot) in output.iter_mut().enumerate().skip(period - 1) {
        let w = window(data, i, period);
        let mean = window_mean(w, n);
        *slot = Some(window_std_dev(w, mean, n));
    }
    Ok(output)
}

/// Standard deviation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StdDev {
    period: usize,
}

impl Default for StdDev {
    /// Period 20.
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl StdDev {
    /// Creates a configuration with the default period (20).
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
        stddev_lookback(self.period)
    }

    /// Computes the standard deviation using the configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Series<T>> {
        stddev(data, self.period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_stddev_known_value() {
        let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = stddev(&data, 8).unwrap();
        assert!(result[..7].iter().all(Option::is_none));
        assert!(approx_eq(result[7].unwrap(), 2.0, EPSILON));
    }

    #[test]
    fn test_stddev_constant_is_zero() {
        let result = stddev(&[3.0_f64; 10], 5).unwrap();
        for v in result.iter().skip(4) {
            assert!(approx_eq(v.unwrap(), 0.0, EPSILON));
        }
    }

    #[test]
    fn test_stddev_never_negative() {
        let data: Vec<f64> = (0..60).map(|i| ((i * 7) % 11) as f64 * 0.1).collect();
        let result = stddev(&data, 20).unwrap();
        assert!(result.iter().flatten().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_stddev_edge_cases() {
        assert_eq!(stddev(&[1.0_f64], 2).unwrap(), vec![None]);
        assert!(stddev(&[1.0_f64], 0).is_err());
        assert_eq!(StdDev::default().lookback(), 19);
    }
}
