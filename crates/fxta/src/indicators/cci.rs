//! Commodity Channel Index (CCI).
//!
//! ```text
//! TP      = (High + Low + Close) / 3
//! SMA_TP  = SMA(TP, period)
//! MD      = mean(|TP[j] - SMA_TP|) over the window
//! CCI     = (TP - SMA_TP) / (0.015 × MD)
//! ```
//!
//! A window with zero mean deviation (every typical price equal) yields 0.

use crate::candle::typical_prices;
use crate::error::Result;
use crate::kernels::rolling::{window, window_mean, window_mean_abs_deviation};
use crate::series::{undefined, Series};
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Lambert's constant scaling the mean deviation.
pub const CCI_CONSTANT: f64 = 0.015;

/// Returns the lookback period for CCI (`period - 1`).
#[inline]
#[must_use]
pub const fn cci_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Commodity Channel Index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use fxta::indicators::cci::cci;
///
/// let high = [2.0_f64, 3.0, 4.0];
/// let low = [1.0_f64, 2.0, 3.0];
/// let close = [1.5_f64, 2.5, 3.5];
///
/// let result = cci(&high, &low, &close, 3).unwrap();
/// // TP = [1.5, 2.5, 3.5], mean 2.5, MD 2/3
/// assert!((result[2].unwrap() - 100.0).abs() < 1e-9);
/// ```
pub fn cci<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "cci")?;
    let len = validate_same_len(&[("high", high.len()), ("low", low.len()), ("close", close.len())])?;

    let mut output = undefined(len);
    if len < period {
        return Ok(output);
    }

    let tp = typical_prices(high, low, close);
    let n = T::from_usize(period)?;
    let constant = T::from_f64(CCI_CONSTANT)?;

    for (i, slot) in output.iter_mut().enumerate().skip(period - 1) {
        let w = window(&tp, i, period);
        let mean = window_mean(w, n);
        let deviation = window_mean_abs_deviation(w, mean, n);
        *slot = Some(if deviation > T::zero() {
            (tp[i] - mean) / (constant * deviation)
        } else {
            T::zero()
        });
    }
    Ok(output)
}

/// CCI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cci {
    period: usize,
}

impl Default for Cci {
    /// Period 20.
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Cci {
    /// Creates a CCI configuration with the default period (20).
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
        cci_lookback(self.period)
    }

    /// Computes CCI using the configured period.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T], close: &[T]) -> Result<Series<T>> {
        cci(high, low, close, self.period)
    }
}
