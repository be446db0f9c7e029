//! Accumulation/Distribution Line (A/D).
//!
//! A running total of volume weighted by where the close sits in the bar:
//!
//! ```text
//! CLV[i] = ((Close - Low) - (High - Close)) / (High - Low)
//! AD[i]  = AD[i-1] + CLV[i] × Volume[i]
//! ```
//!
//! A bar with `High == Low` divides by 1 instead, which makes its CLV zero
//! whenever the candle is well formed.

use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_same_len, SeriesElement};

/// Computes the Accumulation/Distribution Line.
///
/// Every position is defined.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use fxta::indicators::ad::ad;
///
/// let high = [2.0_f64, 2.0];
/// let low = [1.0_f64, 1.0];
/// let close = [2.0_f64, 1.0];
/// let volume = [100.0_f64, 40.0];
///
/// // Close at the high adds all volume, close at the low subtracts it.
/// assert_eq!(ad(&high, &low, &close, &volume).unwrap(), vec![Some(100.0), Some(60.0)]);
/// ```
pub fn ad<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Result<Series<T>> {
    let len = validate_same_len(&[
        ("high", high.len()),
        ("low", low.len()),
        ("close", close.len()),
        ("volume", volume.len()),
    ])?;

    let mut running = T::zero();
    Ok((0..len)
        .map(|i| {
            let range = high[i] - low[i];
            let divisor = if range == T::zero() { T::one() } else { range };
            let clv = ((close[i] - low[i]) - (high[i] - close[i])) / divisor;
            running = running + clv * volume[i];
            Some(running)
        })
        .collect())
}
