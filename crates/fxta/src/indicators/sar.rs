//! Parabolic SAR (Stop and Reverse) indicator.
//!
//! The Parabolic SAR trails price: below it during an uptrend, above it during
//! a downtrend. It flips sides when price crosses it.
//!
//! # Formula
//!
//! ```text
//! SAR(i) = SAR(i-1) + AF × (EP - SAR(i-1))
//! ```
//!
//! Where:
//! - AF = Acceleration Factor, starts at `af_start` and increases by `af_step`
//!   each time a new extreme point is made, up to `af_max`
//! - EP = Extreme Point, the highest high in an uptrend or lowest low in a downtrend
//!
//! # Step order
//!
//! The walk starts in a downtrend with `SAR = High[0]`, `EP = Low[0]`. For
//! every bar from index 2:
//!
//! 1. Advance SAR toward EP.
//! 2. Clamp it so it does not enter the prior two bars' range (at most their
//!    lows in an uptrend, at least their highs in a downtrend).
//! 3. If the bar makes a new extreme, move EP there and accelerate AF.
//! 4. If the bar penetrates SAR, reverse: SAR jumps to EP, EP resets to this
//!    bar's opposite extreme and AF resets to `af_start`.
//!
//! Bars 0 and 1 are undefined.
//!
//! # Default Parameters
//!
//! - `af_start` = 0.02
//! - `af_step` = 0.02
//! - `af_max` = 0.20

use crate::error::Result;
use crate::series::{undefined, Series};
use crate::traits::{validate_same_len, SeriesElement};

/// Lookback of Parabolic SAR.
#[inline]
#[must_use]
pub const fn sar_lookback() -> usize {
    2
}

/// Computes Parabolic SAR.
///
/// The acceleration parameters are taken as given; callers supplying user
/// input are expected to have checked them for positivity.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high` and `low` differ in length.
///
/// # Example
///
/// ```
/// use fxta::indicators::sar::sar;
///
/// let high = [2.0_f64, 3.0, 4.0, 5.0, 6.0];
/// let low = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
///
/// let result = sar(&high, &low, 0.02, 0.02, 0.2).unwrap();
/// assert_eq!(result[1], None);
/// // Bar 2 breaks above the clamped SAR and flips to an uptrend at the old EP.
/// assert_eq!(result[2], Some(1.0));
/// ```
pub fn sar<T: SeriesElement>(
    high: &[T],
    low: &[T],
    af_start: T,
    af_step: T,
    af_max: T,
) -> Result<Series<T>> {
    let len = validate_same_len(&[("high", high.len()), ("low", low.len())])?;

    let mut output = undefined(len);
    if len <= sar_lookback() {
        return Ok(output);
    }

    let mut uptrend = false;
    let mut af = af_start;
    let mut ep = low[0];
    let mut value = high[0];

    for i in sar_lookback()..len {
        value = value + af * (ep - value);

        if uptrend {
            value = value.min(low[i - 1]).min(low[i - 2]);
            if high[i] > ep {
                ep = high[i];
                af = (af + af_step).min(af_max);
            }
            if low[i] < value {
                uptrend = false;
                value = ep;
                ep = low[i];
                af = af_start;
            }
        } else {
            value = value.max(high[i - 1]).max(high[i - 2]);
            if low[i] < ep {
                ep = low[i];
                af = (af + af_step).min(af_max);
            }
            if high[i] > value {
                uptrend = true;
                value = ep;
                ep = high[i];
                af = af_start;
            }
        }

        output[i] = Some(value);
    }

    Ok(output)
}

/// Parabolic SAR configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicSar {
    af_start: f64,
    af_step: f64,
    af_max: f64,
}

impl Default for ParabolicSar {
    /// Standard parameters (0.02, 0.02, 0.20).
    fn default() -> Self {
        Self {
            af_start: 0.02,
            af_step: 0.02,
            af_max: 0.2,
        }
    }
}

impl ParabolicSar {
    /// Creates a configuration with standard parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial acceleration factor.
    #[must_use]
    pub const fn af_start(mut self, value: f64) -> Self {
        self.af_start = value;
        self
    }

    /// Sets the acceleration increment.
    #[must_use]
    pub const fn af_step(mut self, value: f64) -> Self {
        self.af_step = value;
        self
    }

    /// Sets the acceleration cap.
    #[must_use]
    pub const fn af_max(mut self, value: f64) -> Self {
        self.af_max = value;
        self
    }

    /// Returns the initial acceleration factor.
    #[must_use]
    pub const fn get_af_start(&self) -> f64 {
        self.af_start
    }

    /// Returns the acceleration increment.
    #[must_use]
    pub const fn get_af_step(&self) -> f64 {
        self.af_step
    }

    /// Returns the acceleration cap.
    #[must_use]
    pub const fn get_af_max(&self) -> f64 {
        self.af_max
    }

    /// Returns the lookback (always 2).
    #[must_use]
    pub const fn lookback(&self) -> usize {
        sar_lookback()
    }

    /// Computes Parabolic SAR using the configured factors.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs differ in length or a factor cannot be
    /// represented in `T`.
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T]) -> Result<Series<T>> {
        sar(
            high,
            low,
            T::from_f64(self.af_start)?,
            T::from_f64(self.af_step)?,
            T::from_f64(self.af_max)?,
        )
    }
}
