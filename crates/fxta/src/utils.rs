//! Comparison and inspection helpers for indicator output.
//!
//! Floating-point results are compared with a tolerance rather than `==`.
//! The series helpers treat two undefined positions as equal and an undefined
//! position as different from any number.
//!
//! # Example
//!
//! ```
//! use fxta::utils::{approx_eq, series_approx_eq, EPSILON};
//!
//! assert!(approx_eq(1.0 / 3.0, 0.333_333_333_333_333, EPSILON));
//! assert!(series_approx_eq(&[None, Some(0.1 + 0.2)], &[None, Some(0.3)], EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results built from many accumulated operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or if
/// both are NaN.
///
/// ```
/// use fxta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Approximate equality of two optional values.
///
/// `None` equals only `None`.
#[inline]
#[must_use]
pub fn option_approx_eq<T: SeriesElement>(a: Option<T>, b: Option<T>, tolerance: T) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => approx_eq(a, b, tolerance),
        _ => false,
    }
}

/// Approximate equality of two series, position by position.
///
/// Series of different lengths are never equal.
#[must_use]
pub fn series_approx_eq<T: SeriesElement>(a: &[Option<T>], b: &[Option<T>], tolerance: T) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(&x, &y)| option_approx_eq(x, y, tolerance))
}

/// Number of defined positions in a series.
///
/// ```
/// use fxta::utils::count_defined;
///
/// assert_eq!(count_defined(&[None, Some(1.0), None, Some(2.0)]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_defined<T>(series: &[Option<T>]) -> usize {
    series.iter().filter(|v| v.is_some()).count()
}

/// Number of undefined positions at the start of a series.
///
/// This is the observed warm-up length of an indicator output.
///
/// ```
/// use fxta::utils::count_undefined_prefix;
///
/// assert_eq!(count_undefined_prefix(&[None, None, Some(1.0), None]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_undefined_prefix<T>(series: &[Option<T>]) -> usize {
    series.iter().take_while(|v| v.is_none()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0_f64, 1.0, EPSILON));
        assert!(approx_eq(1.0_f64, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0_f64, 2.0, EPSILON));
        assert!(approx_eq(1.0_f32, 1.0, 1e-5));
    }

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_option_approx_eq() {
        assert!(option_approx_eq::<f64>(None, None, EPSILON));
        assert!(option_approx_eq(Some(1.0_f64), Some(1.0 + 1e-12), EPSILON));
        assert!(!option_approx_eq(Some(1.0_f64), None, EPSILON));
        assert!(!option_approx_eq(None, Some(0.0_f64), EPSILON));
    }

    #[test]
    fn test_series_approx_eq() {
        let a = [None, Some(1.0_f64), Some(2.0)];
        assert!(series_approx_eq(&a, &[None, Some(1.0), Some(2.0 + 1e-12)], EPSILON));
        assert!(!series_approx_eq(&a, &[None, Some(1.0)], EPSILON));
        assert!(!series_approx_eq(&a, &[Some(0.0), Some(1.0), Some(2.0)], EPSILON));
    }

    #[test]
    fn test_counts() {
        let s = [None, None, Some(1.0_f64), None, Some(2.0)];
        assert_eq!(count_defined(&s), 2);
        assert_eq!(count_undefined_prefix(&s), 2);

        let empty: [Option<f64>; 0] = [];
        assert_eq!(count_defined(&empty), 0);
        assert_eq!(count_undefined_prefix(&empty), 0);

        let all_none: [Option<f64>; 3] = [None; 3];
        assert_eq!(count_undefined_prefix(&all_none), 3);
    }
}
