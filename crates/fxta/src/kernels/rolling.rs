//! Trailing-window statistics.
//!
//! Every helper here works on the window of `period` elements ending at index
//! `i` (inclusive). Sums are re-accumulated per window, most recent element
//! first, rather than maintained as a running total; this keeps each output
//! independent of earlier rounding error.
//!
//! Callers are responsible for only asking for windows that fit, i.e.
//! `i + 1 >= period`.

use crate::traits::SeriesElement;

/// The `period` elements ending at `i`.
///
/// # Panics
///
/// Panics if `i + 1 < period` or `i >= data.len()`.
#[inline]
#[must_use]
pub fn window<T>(data: &[T], i: usize, period: usize) -> &[T] {
    &data[i + 1 - period..=i]
}

/// Sum of a window, accumulated from its last element backwards.
#[inline]
#[must_use]
pub fn window_sum<T: SeriesElement>(window: &[T]) -> T {
    window.iter().rev().fold(T::zero(), |acc, &x| acc + x)
}

/// Arithmetic mean of a window whose length, as `T`, is `n`.
#[inline]
#[must_use]
pub fn window_mean<T: SeriesElement>(window: &[T], n: T) -> T {
    window_sum(window) / n
}

/// Population variance of a window around a precomputed `mean`.
#[inline]
#[must_use]
pub fn window_variance<T: SeriesElement>(window: &[T], mean: T, n: T) -> T {
    let squares = window.iter().rev().fold(T::zero(), |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    squares / n
}

/// Population standard deviation of a window around a precomputed `mean`.
#[inline]
#[must_use]
pub fn window_std_dev<T: SeriesElement>(window: &[T], mean: T, n: T) -> T {
    window_variance(window, mean, n).sqrt()
}

/// Mean absolute deviation of a window around a precomputed `mean`.
#[inline]
#[must_use]
pub fn window_mean_abs_deviation<T: SeriesElement>(window: &[T], mean: T, n: T) -> T {
    let total = window
        .iter()
        .rev()
        .fold(T::zero(), |acc, &x| acc + (x - mean).abs());
    total / n
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_window_bounds() {
        let data = [1.0_f64, 2.0, 3.0, 4.0];
        assert_eq!(window(&data, 2, 3), &[1.0, 2.0, 3.0]);
        assert_eq!(window(&data, 3, 1), &[4.0]);
        assert_eq!(window(&data, 3, 4), &data[..]);
    }

    #[test]
    fn test_sum_and_mean() {
        let w = [2.0_f64, 4.0, 6.0];
        assert_eq!(window_sum(&w), 12.0);
        assert_eq!(window_mean(&w, 3.0), 4.0);
    }

    #[test]
    fn test_variance_and_std_dev() {
        // Population variance of 2, 4, 4, 4, 5, 5, 7, 9 is 4.
        let w = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mean = window_mean(&w, 8.0);
        assert_eq!(mean, 5.0);
        assert!(approx_eq(window_variance(&w, mean, 8.0), 4.0, EPSILON));
        assert!(approx_eq(window_std_dev(&w, mean, 8.0), 2.0, EPSILON));
    }

    #[test]
    fn test_mean_abs_deviation() {
        let w = [1.0_f64, 2.0, 3.0, 4.0];
        let mean = window_mean(&w, 4.0);
        assert!(approx_eq(window_mean_abs_deviation(&w, mean, 4.0), 1.0, EPSILON));
    }

    #[test]
    fn test_constant_window_has_no_spread() {
        let w = [1.1_f64; 5];
        let mean = window_mean(&w, 5.0);
        assert!(window_std_dev(&w, mean, 5.0) < 1e-12);
        assert!(window_mean_abs_deviation(&w, mean, 5.0) < 1e-12);
    }
}
