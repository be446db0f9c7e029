//! Momentum indicator.
//!
//! Momentum compares the current price to the price `period` bars ago.
//!
//! ```text
//! MOM[i] = data[i] - data[i - period]
//! ```
//!
//! The first `period` values are undefined.

use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_period, SeriesElement};

/// Computes the lookback period for momentum (`period`).
#[inline]
#[must_use]
pub const fn mom_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length required for one defined value.
#[inline]
#[must_use]
pub const fn mom_min_len(period: usize) -> usize {
    period + 1
}

/// Computes momentum.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
///
/// # Example
///
/// ```
/// use fxta::indicators::mom::mom;
///
/// let result = mom(&[1.0_f64, 2.0, 4.0, 7.0], 2).unwrap();
/// assert_eq!(result, vec![None, None, Some(3.0), Some(5.0)]);
/// ```
pub fn mom<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "momentum")?;

    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &x)| (i >= period).then(|| x - data[i - period]))
        .collect())
}

/// Momentum configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Momentum {
    period: usize,
}

impl Default for Momentum {
    /// Period 10.
    fn default() -> Self {
        Self { period: 10 }
    }
}

impl Momentum {
    /// Creates a momentum configuration with the default period (10).
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
        mom_lookback(self.period)
    }

    /// Computes momentum using the configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Series<T>> {
        mom(data, self.period)
    }
}
