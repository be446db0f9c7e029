//! Weighted Moving Average (WMA) indicator.
//!
//! A linearly weighted mean: the most recent value carries weight `period`,
//! the oldest value in the window carries weight 1.
//!
//! # Formula
//!
//! ```text
//! WMA[i] = Σ_{j=0}^{period-1} data[i-j] × (period - j)  /  Σ_{j=0}^{period-1} (period - j)
//! ```
//!
//! The weight sum is `period × (period + 1) / 2`.

use crate::error::Result;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for WMA (`period - 1`).
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Weighted Moving Average of a series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
///
/// # Example
///
/// ```
/// use fxta::indicators::wma::wma;
///
/// // (3×3 + 2×2 + 1×1) / 6
/// let result = wma(&[1.0_f64, 2.0, 3.0], 3).unwrap();
/// assert_eq!(result[2], Some(14.0 / 6.0));
/// ```
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "wma")?;

    let mut output = undefined(data.len());
    if data.len() < period {
        return Ok(output);
    }

    let weights = (0..period)
        .map(|j| T::from_usize(period - j))
        .collect::<Result<Vec<T>>>()?;
    let weight_sum = weights.iter().fold(T::zero(), |acc, &w| acc + w);

    for (i, slot) in output.iter_mut().enumerate().skip(period - 1) {
        let sum = weights
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (j, &w)| acc + data[i - j] * w);
        *slot = Some(sum / weight_sum);
    }
    Ok(output)
}

/// WMA configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wma {
    period: usize,
}

impl Default for Wma {
    /// Period 14.
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Wma {
    /// Creates a WMA configuration with the default period (14).
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
        wma_lookback(self.period)
    }

    /// Computes the WMA using the configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Series<T>> {
        wma(data, self.period)
    }
}
