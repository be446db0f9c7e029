//! Average True Range (ATR) indicator.
//!
//! ATR measures volatility as the average of the True Range over a window.
//!
//! # Formula
//!
//! ```text
//! True Range[0] = High[0] - Low[0]
//! True Range[i] = max(
//!     High[i] - Low[i],                    // Current range
//!     |High[i] - Close[i-1]|,              // Gap up from previous close
//!     |Low[i] - Close[i-1]|                // Gap down from previous close
//! )
//!
//! ATR[i] = mean(True Range[i-period+1..=i])
//! ```
//!
//! The average is a simple mean rather than Wilder smoothing, so the first
//! defined value is at `period - 1`: the first bar contributes its own range.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::atr::{atr, true_range};
//!
//! let high = vec![48.70_f64, 48.72, 48.90, 48.87, 48.82];
//! let low = vec![47.79_f64, 48.14, 48.39, 48.37, 48.24];
//! let close = vec![48.16_f64, 48.61, 48.75, 48.63, 48.74];
//!
//! let tr = true_range(&high, &low, &close).unwrap();
//! assert!((tr[0] - 0.91).abs() < 1e-9);
//!
//! let result = atr(&high, &low, &close, 3).unwrap();
//! assert!(result[1].is_none());
//! assert!(result[2].is_some());
//! ```

use crate::error::Result;
use crate::kernels::rolling::{window, window_mean};
use crate::series::{undefined, Series};
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the lookback period for ATR (`period - 1`).
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the True Range of every bar.
///
/// Every position is defined; the first bar has no previous close and uses
/// its own high-low range.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    let len = validate_same_len(&[("high", high.len()), ("low", low.len()), ("close", close.len())])?;

    Ok((0..len)
        .map(|i| {
            let range = high[i] - low[i];
            if i == 0 {
                range
            } else {
                let prev = close[i - 1];
                range.max((high[i] - prev).abs()).max((low[i] - prev).abs())
            }
        })
        .collect())
}

/// Computes the Average True Range.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "atr")?;
    let tr = true_range(high, low, close)?;

    let mut output = undefined(tr.len());
    if tr.len() < period {
        return Ok(output);
    }

    let n = T::from_usize(period)?;
    for (i, slot) in output.iter_mut().enumerate().skip(period - 1) {
        *slot = Some(window_mean(window(&tr, i, period), n));
    }
    Ok(output)
}

/// ATR configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    /// Period 14.
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    /// Creates an ATR configuration with the default period (14).
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
        atr_lookback(self.period)
    }

    /// Computes ATR using the configured period.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T], close: &[T]) -> Result<Series<T>> {
        atr(high, low, close, self.period)
    }
}
