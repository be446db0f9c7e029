//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! The MACD shows the relationship between two exponential moving averages of
//! a price. It consists of three components:
//!
//! - **MACD Line**: fast EMA minus slow EMA
//! - **Signal Line**: an EMA of the MACD line (typically 9-period)
//! - **Histogram**: MACD line minus signal line
//!
//! # Algorithm
//!
//! 1. Calculate fast and slow EMAs ([`ema`](crate::indicators::ema::ema))
//! 2. MACD Line is defined wherever both EMAs are defined
//! 3. The signal EMA runs over the defined MACD values only, then is placed
//!    back at the positions those values came from
//! 4. Histogram is defined wherever both MACD and signal are defined
//!
//! # Formula
//!
//! ```text
//! MACD Line[i]   = EMA(fast)[i] - EMA(slow)[i]
//! Signal Line    = expand(EMA(compact(MACD Line), signal))
//! Histogram[i]   = MACD Line[i] - Signal Line[i]
//! ```
//!
//! # Undefined prefix
//!
//! - MACD Line: first `max(fast, slow) - 1` values
//! - Signal Line and Histogram: first `max(fast, slow) - 1 + signal - 1` values
//!
//! # Example
//!
//! ```
//! use fxta::indicators::macd::macd;
//!
//! let data: Vec<f64> = (0..40).map(|i| 1.1 + f64::from(i) * 0.001).collect();
//! let result = macd(&data, 12, 26, 9).unwrap();
//!
//! assert!(result.macd_line[24].is_none());
//! assert!(result.macd_line[25].is_some());
//! assert!(result.signal_line[32].is_none());
//! assert!(result.signal_line[33].is_some());
//! ```

use crate::error::Result;
use crate::indicators::ema::ema;
use crate::series::{combine, compact, expand, Series};
use crate::traits::{validate_period, SeriesElement};

/// The output of MACD calculation containing all three components.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// The MACD line (fast EMA - slow EMA).
    pub macd_line: Series<T>,
    /// The signal line (EMA of the MACD line).
    pub signal_line: Series<T>,
    /// The histogram (MACD line - signal line).
    pub histogram: Series<T>,
}

impl<T> MacdOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    /// Returns true if the output is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }
}

/// Lookback of the MACD line.
#[inline]
#[must_use]
pub const fn macd_line_lookback(fast: usize, slow: usize) -> usize {
    let longest = if fast > slow { fast } else { slow };
    longest.saturating_sub(1)
}

/// Lookback of the signal line and histogram.
#[inline]
#[must_use]
pub const fn macd_signal_lookback(fast: usize, slow: usize, signal: usize) -> usize {
    macd_line_lookback(fast, slow) + signal.saturating_sub(1)
}

/// Computes MACD.
///
/// # Arguments
///
/// * `data` - Input price series
/// * `fast_period` - Fast EMA period (commonly 12)
/// * `slow_period` - Slow EMA period (commonly 26)
/// * `signal_period` - Signal EMA period (commonly 9)
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if any period is 0.
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    validate_period(fast_period, "macd")?;
    validate_period(slow_period, "macd")?;
    validate_period(signal_period, "macd")?;

    let fast = ema(data, fast_period)?;
    let slow = ema(data, slow_period)?;
    let macd_line = combine(&fast, &slow, |f, s| f - s);

    let signal_compact = ema(&compact(&macd_line), signal_period)?;
    let signal_line = expand(&macd_line, &signal_compact);

    let histogram = combine(&macd_line, &signal_line, |m, s| m - s);

    Ok(MacdOutput {
        macd_line,
        signal_line,
        histogram,
    })
}

/// MACD configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Default for Macd {
    /// Standard parameters (12, 26, 9).
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl Macd {
    /// Creates a MACD configuration with standard parameters (12, 26, 9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA period.
    #[must_use]
    pub const fn fast_period(mut self, period: usize) -> Self {
        self.fast = period;
        self
    }

    /// Sets the slow EMA period.
    #[must_use]
    pub const fn slow_period(mut self, period: usize) -> Self {
        self.slow = period;
        self
    }

    /// Sets the signal EMA period.
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal = period;
        self
    }

    /// Returns the fast EMA period.
    #[must_use]
    pub const fn get_fast_period(&self) -> usize {
        self.fast
    }

    /// Returns the slow EMA period.
    #[must_use]
    pub const fn get_slow_period(&self) -> usize {
        self.slow
    }

    /// Returns the signal EMA period.
    #[must_use]
    pub const fn get_signal_period(&self) -> usize {
        self.signal
    }

    /// Returns the lookback of the signal line and histogram.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        macd_signal_lookback(self.fast, self.slow, self.signal)
    }

    /// Computes MACD using the configured periods.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if any period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MacdOutput<T>> {
        macd(data, self.fast, self.slow, self.signal)
    }
}
