//! Relative Strength Index (RSI).
//!
//! RSI compares the size of recent gains to recent losses and maps the ratio
//! onto `[0, 100]`.
//!
//! # Formula
//!
//! Over the `period` price changes ending at `i`:
//!
//! ```text
//! change[t]  = data[t] - data[t-1]
//! avg_gain   = Σ max(change, 0) / period
//! avg_loss   = Σ max(-change, 0) / period
//! RSI        = 100                              if avg_loss = 0
//!            = 100 - 100 / (1 + avg_gain/avg_loss)  otherwise
//! ```
//!
//! Averages are simple means over the window, not Wilder smoothing. The first
//! `period` positions are undefined because `period` changes need
//! `period + 1` prices.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::rsi::rsi;
//!
//! let rising: Vec<f64> = (0..20).map(f64::from).collect();
//! let result = rsi(&rising, 14).unwrap();
//!
//! assert!(result[..14].iter().all(Option::is_none));
//! assert_eq!(result[14], Some(100.0));
//! ```

use crate::error::Result;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for RSI (`period`).
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length that yields a defined value.
#[inline]
#[must_use]
pub const fn rsi_min_len(period: usize) -> usize {
    period + 1
}

/// Computes the Relative Strength Index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "rsi")?;

    let mut output = undefined(data.len());
    if data.len() <= period {
        return Ok(output);
    }

    let n = T::from_usize(period)?;
    let hundred = T::hundred();

    for (i, slot) in output.iter_mut().enumerate().skip(period) {
        let mut gain = T::zero();
        let mut loss = T::zero();
        for t in i + 1 - period..=i {
            let change = data[t] - data[t - 1];
            if change > T::zero() {
                gain = gain + change;
            } else if change < T::zero() {
                loss = loss - change;
            }
        }
        let avg_gain = gain / n;
        let avg_loss = loss / n;

        *slot = Some(if avg_loss == T::zero() {
            hundred
        } else {
            let rs = avg_gain / avg_loss;
            hundred - hundred / (T::one() + rs)
        });
    }
    Ok(output)
}

/// RSI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    /// Period 14.
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    /// Creates an RSI configuration with the default period (14).
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
        rsi_lookback(self.period)
    }

    /// Computes RSI using the configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Series<T>> {
        rsi(data, self.period)
    }
}
