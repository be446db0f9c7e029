//! Stochastic Oscillator.
//!
//! The Stochastic Oscillator locates the close within the high/low range of
//! the last `k_period` bars.
//!
//! # Formula
//!
//! ```text
//! %K[i] = 100 × (Close[i] - LL) / (HH - LL)
//! %D[i] = mean(%K[i-d_period+1..=i])
//! ```
//!
//! where HH and LL are the highest high and lowest low over the `k_period`
//! bars ending at `i`.
//!
//! # Edge Cases
//!
//! - When HH == LL (flat range), %K = 50
//!
//! # Undefined prefix
//!
//! - %K: first `k_period - 1` values
//! - %D: first `k_period + d_period - 2` values
//!
//! # Example
//!
//! ```
//! use fxta::indicators::stochastic::stochastic;
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 13.0];
//! let low = vec![8.0_f64, 9.0, 10.0, 11.0];
//! let close = vec![9.0_f64, 10.5, 11.5, 12.5];
//!
//! let result = stochastic(&high, &low, &close, 3, 2).unwrap();
//! assert_eq!(result.k[1], None);
//! // (11.5 - 8) / (12 - 8)
//! assert_eq!(result.k[2], Some(87.5));
//! assert_eq!(result.d[2], None);
//! assert!(result.d[3].is_some());
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::rolling_extrema;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, validate_same_len, SeriesElement};

/// Output of the Stochastic Oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// %K line.
    pub k: Series<T>,
    /// %D line, the simple mean of the last `d_period` %K values.
    pub d: Series<T>,
}

impl<T> StochasticOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.k.len()
    }

    /// Returns true if the output is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }
}

/// Lookback of the %K line.
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(k_period: usize) -> usize {
    k_period.saturating_sub(1)
}

/// Lookback of the %D line.
#[inline]
#[must_use]
pub const fn stochastic_d_lookback(k_period: usize, d_period: usize) -> usize {
    (k_period + d_period).saturating_sub(2)
}

/// Computes the Stochastic Oscillator.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is 0, or
/// `Error::LengthMismatch` if the inputs differ in length.
pub fn stochastic<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    k_period: usize,
    d_period: usize,
) -> Result<StochasticOutput<T>> {
    validate_period(k_period, "stochastic")?;
    validate_period(d_period, "stochastic")?;
    let len = validate_same_len(&[("high", high.len()), ("low", low.len()), ("close", close.len())])?;

    let hundred = T::hundred();
    let extrema = rolling_extrema(high, low, k_period)?;

    let mut k = undefined(len);
    for (i, slot) in k.iter_mut().enumerate() {
        if let (Some(hh), Some(ll)) = (extrema.max[i], extrema.min[i]) {
            let range = hh - ll;
            *slot = Some(if range > T::zero() {
                (close[i] - ll) / range * hundred
            } else {
                T::fifty()
            });
        }
    }

    let d_n = T::from_usize(d_period)?;
    let mut d = undefined(len);
    let d_start = stochastic_d_lookback(k_period, d_period);
    for (i, slot) in d.iter_mut().enumerate().skip(d_start) {
        let sum = k[i + 1 - d_period..=i]
            .iter()
            .rev()
            .flatten()
            .fold(T::zero(), |acc, &v| acc + v);
        *slot = Some(sum / d_n);
    }

    Ok(StochasticOutput { k, d })
}

/// Stochastic configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
}

impl Default for Stochastic {
    /// Standard parameters (14, 3).
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
        }
    }
}

impl Stochastic {
    /// Creates a configuration with standard parameters (14, 3).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the %K period.
    #[must_use]
    pub const fn k_period(mut self, period: usize) -> Self {
        self.k_period = period;
        self
    }

    /// Sets the %D period.
    #[must_use]
    pub const fn d_period(mut self, period: usize) -> Self {
        self.d_period = period;
        self
    }

    /// Returns the %K period.
    #[must_use]
    pub const fn get_k_period(&self) -> usize {
        self.k_period
    }

    /// Returns the %D period.
    #[must_use]
    pub const fn get_d_period(&self) -> usize {
        self.d_period
    }

    /// Returns the %D lookback.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        stochastic_d_lookback(self.k_period, self.d_period)
    }

    /// Computes the oscillator using the configured periods.
    ///
    /// # Errors
    ///
    /// Returns an error if a period is 0 or the inputs differ in length.
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
    ) -> Result<StochasticOutput<T>> {
        stochastic(high, low, close, self.k_period, self.d_period)
    }
}
