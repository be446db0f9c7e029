//! On-Balance Volume (OBV).
//!
//! OBV starts at the first bar's volume and then adds the volume of up-closes
//! and subtracts the volume of down-closes. Unchanged closes carry the
//! previous value forward.
//!
//! ```text
//! OBV[0] = Volume[0]
//! OBV[i] = OBV[i-1] + Volume[i]   if Close[i] > Close[i-1]
//!        = OBV[i-1] - Volume[i]   if Close[i] < Close[i-1]
//!        = OBV[i-1]               otherwise
//! ```
//!
//! Every position is defined.
//!
//! # Example
//!
//! ```
//! use fxta::indicators::obv::obv;
//!
//! let close = [10.0_f64, 11.0, 10.0, 10.0, 12.0];
//! let volume = [100.0_f64, 100.0, 100.0, 100.0, 100.0];
//!
//! let result = obv(&close, &volume).unwrap();
//! assert_eq!(
//!     result,
//!     vec![Some(100.0), Some(200.0), Some(100.0), Some(100.0), Some(200.0)]
//! );
//! ```

use std::cmp::Ordering;

use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_same_len, SeriesElement};

/// Computes On-Balance Volume.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `close` and `volume` differ in length.
pub fn obv<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Series<T>> {
    validate_same_len(&[("close", close.len()), ("volume", volume.len())])?;

    let mut running = T::zero();
    Ok(close
        .iter()
        .zip(volume)
        .enumerate()
        .map(|(i, (&c, &v))| {
            if i == 0 {
                running = v;
            } else {
                match c.partial_cmp(&close[i - 1]) {
                    Some(Ordering::Greater) => running = running + v,
                    Some(Ordering::Less) => running = running - v,
                    _ => {}
                }
            }
            Some(running)
        })
        .collect())
}
