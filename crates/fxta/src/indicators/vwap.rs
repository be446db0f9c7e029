//! Volume Weighted Average Price (VWAP).
//!
//! Cumulative from the first candle of the input, with no session resets:
//!
//! ```text
//! TP[i]   = (High[i] + Low[i] + Close[i]) / 3
//! VWAP[i] = Σ_{j≤i} TP[j] × Volume[j]  /  Σ_{j≤i} Volume[j]
//! ```
//!
//! While the cumulative volume is still zero the ratio is undefined in
//! arithmetic terms; the output is then the current typical price so the
//! overlay stays on the price scale.

use crate::candle::typical_prices;
use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_same_len, SeriesElement};

/// Computes the cumulative VWAP.
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
/// use fxta::indicators::vwap::vwap;
///
/// let high = [3.0_f64, 6.0];
/// let low = [1.0_f64, 4.0];
/// let close = [2.0_f64, 5.0];
/// let volume = [1.0_f64, 3.0];
///
/// // TP = [2, 5]; (2×1 + 5×3) / 4
/// let result = vwap(&high, &low, &close, &volume).unwrap();
/// assert_eq!(result, vec![Some(2.0), Some(4.25)]);
/// ```
pub fn vwap<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Result<Series<T>> {
    validate_same_len(&[
        ("high", high.len()),
        ("low", low.len()),
        ("close", close.len()),
        ("volume", volume.len()),
    ])?;

    let tp = typical_prices(high, low, close);
    let mut cumulative_pv = T::zero();
    let mut cumulative_volume = T::zero();

    Ok(tp
        .iter()
        .zip(volume)
        .map(|(&p, &v)| {
            cumulative_pv = cumulative_pv + p * v;
            cumulative_volume = cumulative_volume + v;
            Some(if cumulative_volume > T::zero() {
                cumulative_pv / cumulative_volume
            } else {
                p
            })
        })
        .collect())
}
