//! Core traits for fxta numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and `f64`
//! for the indicator functions. The module also provides the parameter
//! validation helpers every indicator runs before computing.
//!
//! # Example
//!
//! ```
//! use fxta::traits::{validate_period, SeriesElement};
//!
//! fn mean_of_first<T: SeriesElement>(data: &[T], period: usize) -> fxta::Result<Option<T>> {
//!     validate_period(period, "mean_of_first")?;
//!     if data.len() < period {
//!         return Ok(None);
//!     }
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(Some(sum / T::from_usize(period)?))
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(mean_of_first(&data, 3).unwrap(), Some(2.0));
//! assert_eq!(mean_of_first(&data, 9).unwrap(), None);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// # Type Bounds
///
/// - `Float`: Standard floating-point operations
/// - `NumCast`: Conversion from periods and `f64` parameters
/// - `Copy + Default + Send + Sync`: cheap to move between threads
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting period parameters to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 3 as this type (typical price divisor).
    #[inline]
    #[must_use]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used by the percentage oscillators (RSI, Stochastic, Williams %R, MFI).
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        let ten = Self::two() * Self::two() * Self::two() + Self::two();
        ten * ten
    }

    /// Returns the constant 50 as this type.
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        Self::hundred() / Self::two()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is usable.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize, indicator: &'static str) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            indicator,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that every named input has the same length and returns it.
///
/// An empty list of inputs has length 0.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` naming the first input whose length differs
/// from the first one.
///
/// # Example
///
/// ```
/// use fxta::traits::validate_same_len;
///
/// let high = [2.0_f64, 3.0];
/// let low = [1.0_f64, 2.0];
/// assert_eq!(validate_same_len(&[("high", high.len()), ("low", low.len())]).unwrap(), 2);
/// assert!(validate_same_len(&[("high", 2), ("low", 1)]).is_err());
/// ```
pub fn validate_same_len(inputs: &[(&str, usize)]) -> Result<usize> {
    let Some(&(first_name, n)) = inputs.first() else {
        return Ok(0);
    };
    for &(name, len) in &inputs[1..] {
        if len != n {
            return Err(Error::LengthMismatch {
                description: format!("{first_name} has {n} elements, {name} has {len}"),
            });
        }
    }
    Ok(n)
}
