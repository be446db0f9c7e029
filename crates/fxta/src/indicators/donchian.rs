//! Donchian Channels.
//!
//! ```text
//! Upper  = highest high over the last `period` bars
//! Lower  = lowest low over the last `period` bars
//! Middle = (Upper + Lower) / 2
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::rolling_extrema;
use crate::series::BandOutput;
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the lookback period for Donchian Channels (`period - 1`).
#[inline]
#[must_use]
pub const fn donchian_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes Donchian Channels.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0, or
/// `Error::LengthMismatch` if `high` and `low` differ in length.
///
/// # Example
///
/// ```
/// use fxta::indicators::donchian::donchian;
///
/// let high = [3.0_f64, 5.0, 4.0];
/// let low = [1.0_f64, 2.0, 2.5];
///
/// let channels = donchian(&high, &low, 2).unwrap();
/// assert_eq!(channels.upper[2], Some(5.0));
/// assert_eq!(channels.lower[2], Some(2.0));
/// assert_eq!(channels.middle[2], Some(3.5));
/// ```
pub fn donchian<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<BandOutput<T>> {
    validate_period(period, "donchian")?;
    let len = validate_same_len(&[("high", high.len()), ("low", low.len())])?;

    let extrema = rolling_extrema(high, low, period)?;
    let mut output = BandOutput::undefined(len);
    for i in 0..len {
        if let (Some(upper), Some(lower)) = (extrema.max[i], extrema.min[i]) {
            output.set(i, upper, (upper + lower) / T::two(), lower);
        }
    }
    Ok(output)
}

/// Donchian Channels configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Donchian {
    period: usize,
}

impl Default for Donchian {
    /// Period 20.
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Donchian {
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
        donchian_lookback(self.period)
    }

    /// Computes Donchian Channels using the configured period.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T]) -> Result<BandOutput<T>> {
        donchian(high, low, self.period)
    }
}
