//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the arithmetic mean of the last `period` values.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (data[i] + data[i-1] + ... + data[i-period+1]) / period
//! ```
//!
//! # Algorithm
//!
//! Each window is summed from scratch (O(n×k)). Periods on the dashboard are
//! small and a fresh sum per window keeps every output bit-for-bit independent
//! of the values that came before the window.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! ```

use crate::error::Result;
use crate::kernels::rolling::{window, window_mean};
use crate::series::{undefined, Series};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for SMA.
///
/// The lookback is the number of undefined values at the start of the output.
///
/// ```
/// use fxta::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(20), 19);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length that yields at least one defined value.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    period
}

/// Computes the Simple Moving Average of a series.
///
/// # Arguments
///
/// * `data` - The input series (typically closing prices)
/// * `period` - The number of values to average
///
/// # Returns
///
/// A series of the same length as `data`. Positions `0..period - 1` are
/// `None`; if `data` is shorter than `period`, every position is `None`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "sma")?;

    let mut output = undefined(data.len());
    if data.len() < period {
        return Ok(output);
    }

    let n = T::from_usize(period)?;
    for (i, slot) in output.iter_mut().enumerate().skip(period - 1) {
        *slot = Some(window_mean(window(data, i, period), n));
    }
    Ok(output)
}

/// SMA configuration.
///
/// ```
/// use fxta::indicators::sma::Sma;
///
/// let result = Sma::new().period(2).compute(&[1.0_f64, 3.0, 5.0]).unwrap();
/// assert_eq!(result, vec![None, Some(2.0), Some(4.0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sma {
    period: usize,
}

impl Default for Sma {
    /// Period 20.
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Sma {
    /// Creates an SMA configuration with the default period (20).
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
        sma_lookback(self.period)
    }

    /// Computes the SMA using the configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Series<T>> {
        sma(data, self.period)
    }
}
