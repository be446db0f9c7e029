//! Money Flow Index (MFI).
//!
//! A volume-weighted RSI computed on the typical price.
//!
//! # Formula
//!
//! ```text
//! TP[j]   = (High[j] + Low[j] + Close[j]) / 3
//! MF[j]   = TP[j] × Volume[j]
//!
//! over j in i-period+1..=i:
//!   positive += MF[j]   if TP[j] > TP[j-1]
//!   negative += MF[j]   otherwise
//!
//! MFI = 100                                   if negative = 0
//!     = 100 - 100 / (1 + positive / negative) otherwise
//! ```
//!
//! A bar whose typical price is unchanged counts as negative flow. The first
//! `period` positions are undefined.

use crate::candle::typical_prices;
use crate::error::Result;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Returns the lookback period for MFI (`period`).
#[inline]
#[must_use]
pub const fn mfi_lookback(period: usize) -> usize {
    period
}

/// Computes the Money Flow Index.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use fxta::indicators::mfi::mfi;
///
/// let high: Vec<f64> = (0..20).map(|i| 2.0 + f64::from(i) * 0.1).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
/// let close: Vec<f64> = high.iter().map(|h| h - 0.2).collect();
/// let volume = vec![1000.0_f64; 20];
///
/// let result = mfi(&high, &low, &close, &volume, 14).unwrap();
/// assert!(result[13].is_none());
/// // Steadily rising typical price: no negative flow
/// assert_eq!(result[14], Some(100.0));
/// ```
pub fn mfi<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Series<T>> {
    validate_period(period, "mfi")?;
    let len = validate_same_len(&[
        ("high", high.len()),
        ("low", low.len()),
        ("close", close.len()),
        ("volume", volume.len()),
    ])?;

    let mut output = undefined(len);
    if len <= period {
        return Ok(output);
    }

    let tp = typical_prices(high, low, close);
    let hundred = T::hundred();

    for (i, slot) in output.iter_mut().enumerate().skip(period) {
        let mut positive = T::zero();
        let mut negative = T::zero();
        for j in i + 1 - period..=i {
            let flow = tp[j] * volume[j];
            if tp[j] > tp[j - 1] {
                positive = positive + flow;
            } else {
                negative = negative + flow;
            }
        }
        *slot = Some(if negative == T::zero() {
            hundred
        } else {
            hundred - hundred / (T::one() + positive / negative)
        });
    }
    Ok(output)
}

/// MFI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mfi {
    period: usize,
}

impl Default for Mfi {
    /// Period 14.
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Mfi {
    /// Creates a configuration with the default period (14).
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
        mfi_lookback(self.period)
    }

    /// Computes MFI using the configured period.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
        volume: &[T],
    ) -> Result<Series<T>> {
        mfi(high, low, close, volume, self.period)
    }
}
