//! Index-aligned indicator series.
//!
//! A [`Series`] holds one entry per input candle. `None` marks a position
//! inside an indicator's warm-up period; it is never coerced to zero and
//! never dropped, so `series.len()` always equals the candle count.
//!
//! # Example
//!
//! ```
//! use fxta::series::{compact, expand, Series};
//!
//! let line: Series<f64> = vec![None, None, Some(1.0), Some(2.0), Some(3.0)];
//!
//! // Work on the defined values only...
//! let doubled: Vec<Option<f64>> = compact(&line).iter().map(|v| Some(v * 2.0)).collect();
//!
//! // ...and put them back where they came from.
//! let aligned = expand(&line, &doubled);
//! assert_eq!(aligned, vec![None, None, Some(2.0), Some(4.0), Some(6.0)]);
//! ```

/// An index-aligned sequence of optional values, one per input candle.
pub type Series<T = f64> = Vec<Option<T>>;

/// Returns a series of `len` undefined positions.
#[inline]
#[must_use]
pub fn undefined<T: Copy>(len: usize) -> Series<T> {
    vec![None; len]
}

/// Collects the defined values of a series in order, dropping warm-up gaps.
#[must_use]
pub fn compact<T: Copy>(series: &[Option<T>]) -> Vec<T> {
    series.iter().filter_map(|v| *v).collect()
}

/// Re-aligns `values` onto the defined positions of `template`.
///
/// The k-th defined position of `template` receives `values[k]`; positions
/// where `template` is undefined stay undefined, and defined positions beyond
/// the end of `values` are undefined as well. This is the inverse of
/// [`compact`] for indicators that are computed over a compacted input.
#[must_use]
pub fn expand<T: Copy, U: Copy>(template: &[Option<T>], values: &[Option<U>]) -> Series<U> {
    let mut next = values.iter();
    template
        .iter()
        .map(|slot| match slot {
            Some(_) => next.next().copied().flatten(),
            None => None,
        })
        .collect()
}

/// Combines two aligned series position by position.
///
/// The result is defined only where both inputs are defined.
#[must_use]
pub fn combine<T: Copy, F>(a: &[Option<T>], b: &[Option<T>], mut f: F) -> Series<T>
where
    F: FnMut(T, T) -> T,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}

/// Index of the first defined position, if any.
#[must_use]
pub fn first_defined<T>(series: &[Option<T>]) -> Option<usize> {
    series.iter().position(Option::is_some)
}

/// Output structure for channel indicators: upper, middle and lower bands.
///
/// Shared by Bollinger Bands, Keltner Channels and Donchian Channels. All
/// three bands are defined or undefined together.
#[derive(Debug, Clone, PartialEq)]
pub struct BandOutput<T> {
    /// Upper band.
    pub upper: Series<T>,
    /// Middle band.
    pub middle: Series<T>,
    /// Lower band.
    pub lower: Series<T>,
}

impl<T: Copy> BandOutput<T> {
    /// Creates an output of `len` undefined positions in every band.
    #[must_use]
    pub fn undefined(len: usize) -> Self {
        Self {
            upper: undefined(len),
            middle: undefined(len),
            lower: undefined(len),
        }
    }

    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true if the output is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Writes all three bands at `i`.
    #[inline]
    pub(crate) fn set(&mut self, i: usize, upper: T, middle: T, lower: T) {
        self.upper[i] = Some(upper);
        self.middle[i] = Some(middle);
        self.lower[i] = Some(lower);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined() {
        let s: Series<f64> = undefined(3);
        assert_eq!(s, vec![None, None, None]);
        assert!(undefined::<f64>(0).is_empty());
    }

    #[test]
    fn test_compact() {
        let s = vec![None, Some(1.0_f64), None, Some(3.0)];
        assert_eq!(compact(&s), vec![1.0, 3.0]);
    }

    #[test]
    fn test_expand_pads_missing_values() {
        let template = vec![None, None, Some(0.0_f64), Some(0.0), Some(0.0)];
        let values = vec![None, Some(7.0_f64)];
        assert_eq!(
            expand(&template, &values),
            vec![None, None, None, Some(7.0), None]
        );
    }

    #[test]
    fn test_combine_requires_both() {
        let a = vec![None, Some(2.0_f64), Some(3.0)];
        let b = vec![Some(1.0_f64), None, Some(1.0)];
        assert_eq!(combine(&a, &b, |x, y| x - y), vec![None, None, Some(2.0)]);
    }

    #[test]
    fn test_first_defined() {
        assert_eq!(first_defined(&[None, None, Some(1.0_f64)]), Some(2));
        assert_eq!(first_defined::<f64>(&[None, None]), None);
    }

    #[test]
    fn test_band_output_set() {
        let mut out = BandOutput::undefined(2);
        out.set(1, 3.0_f64, 2.0, 1.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out.upper, vec![None, Some(3.0)]);
        assert_eq!(out.middle, vec![None, Some(2.0)]);
        assert_eq!(out.lower, vec![None, Some(1.0)]);
    }
}
