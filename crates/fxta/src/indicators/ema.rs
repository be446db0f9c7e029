//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent values more heavily than older ones using the
//! smoothing factor `α = 2 / (period + 1)`.
//!
//! # Seeding
//!
//! The running value starts at `data[0]`. For the first `period - 1` positions
//! the output is undefined and the running value is the cumulative mean of the
//! values seen so far. From position `period - 1` on, the standard update
//! applies and the value is emitted:
//!
//! ```text
//! i < period - 1:   ema = (data[i] + ema × i) / (i + 1)
//! i ≥ period - 1:   ema = (data[i] - ema) × α + ema
//! ```
//!
//! Note the first emitted value is therefore one EMA step applied to the mean
//! of the first `period - 1` values, not the SMA of the first `period` values.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert_eq!(result[0], None);
//! assert_eq!(result[1], None);
//! // mean(1, 2) = 1.5, then (3 - 1.5) × 0.5 + 1.5
//! assert_eq!(result[2], Some(2.25));
//! ```

use crate::error::Result;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for EMA (`period - 1`).
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length that yields at least one defined value.
#[inline]
#[must_use]
pub const fn ema_min_len(period: usize) -> usize {
    period
}

/// Computes the Exponential Moving Average of a series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "ema")?;

    let mut output = undefined(data.len());
    let Some(&first) = data.first() else {
        return Ok(output);
    };

    let alpha = T::two() / (T::from_usize(period)? + T::one());
    let mut value = first;
    let mut count = T::zero();

    for (i, &x) in data.iter().enumerate() {
        if i + 1 < period {
            value = (x + value * count) / (count + T::one());
        } else {
            value = (x - value) * alpha + value;
            output[i] = Some(value);
        }
        count = count + T::one();
    }

    Ok(output)
}

/// EMA configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ema {
    period: usize,
}

impl Default for Ema {
    /// Period 12.
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl Ema {
    /// Creates an EMA configuration with the default period (12).
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
        ema_lookback(self.period)
    }

    /// Computes the EMA using the configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Series<T>> {
        ema(data, self.period)
    }
}
