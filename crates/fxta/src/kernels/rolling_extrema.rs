//! Rolling extrema using a monotonic deque.
//!
//! # Algorithm
//!
//! The deque holds indices whose values are monotonically ordered:
//! decreasing for rolling max, increasing for rolling min. The front is always
//! the extremum of the current window, so each element is pushed and popped at
//! most once.
//!
//! # Complexity
//!
//! - Time: O(n), amortized O(1) per element
//! - Space: O(k) for the deque, where k is the period
//!
//! Stochastic, Williams %R, Donchian Channels and Ichimoku all need the
//! highest high and lowest low over a trailing window and use this kernel.
//!
//! # Example
//!
//! ```
//! use fxta::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max = rolling_max(&data, 3).unwrap();
//! assert_eq!(max[1], None);
//! assert_eq!(max[2], Some(4.0)); // max of [3, 1, 4]
//! assert_eq!(max[5], Some(9.0)); // max of [1, 5, 9]
//!
//! let min = rolling_min(&data, 3).unwrap();
//! assert_eq!(min[2], Some(1.0));
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::Result;
use crate::series::{undefined, Series};
use crate::traits::{validate_period, SeriesElement};

/// Upper bound on the deque's initial allocation; larger windows grow on
/// demand.
const MAX_PREALLOCATED: usize = 4096;

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Rolling maximum.
    Max,
    /// Rolling minimum.
    Min,
}

/// A monotonic deque for tracking the extremum of a sliding window.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    deque: VecDeque<usize>,
    period: usize,
    extremum: Extremum,
    _phantom: PhantomData<T>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates a deque tracking `extremum` over windows of `period` elements.
    #[must_use]
    pub fn new(period: usize, extremum: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(period.min(MAX_PREALLOCATED)),
            period,
            extremum,
            _phantom: PhantomData,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Pushes `data[index]` and expires indices that left the window.
    ///
    /// Indices must be pushed in increasing order.
    #[inline]
    pub fn push(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        while let Some(&back) = self.deque.back() {
            let dominated = match self.extremum {
                Extremum::Max => value >= data[back],
                Extremum::Min => value <= data[back],
            };
            if dominated {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(index);

        if index >= self.period {
            let window_start = index + 1 - self.period;
            while let Some(&front) = self.deque.front() {
                if front < window_start {
                    self.deque.pop_front();
                } else {
                    break;
                }
            }
        }
    }

    /// Index of the current extremum, if any element has been pushed.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Current extremum value.
    #[inline]
    pub fn extremum(&self, data: &[T]) -> Option<T> {
        self.front_index().map(|idx| data[idx])
    }
}

/// Rolling extrema output: highest and lowest value per window.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingExtremaOutput<T> {
    /// Rolling maximum values.
    pub max: Series<T>,
    /// Rolling minimum values.
    pub min: Series<T>,
}

fn rolling<T: SeriesElement>(data: &[T], period: usize, extremum: Extremum) -> Series<T> {
    let mut output = undefined(data.len());
    if data.len() < period {
        return output;
    }
    let mut deque = MonotonicDeque::new(period, extremum);
    for i in 0..data.len() {
        deque.push(i, data);
        if i + 1 >= period {
            output[i] = deque.extremum(data);
        }
    }
    output
}

/// Rolling maximum over the trailing `period` elements.
///
/// Positions `0..period - 1` are undefined.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "rolling_max")?;
    Ok(rolling(data, period, Extremum::Max))
}

/// Rolling minimum over the trailing `period` elements.
///
/// Positions `0..period - 1` are undefined.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "rolling_min")?;
    Ok(rolling(data, period, Extremum::Min))
}

/// Highest of `high` and lowest of `low` over the same trailing window.
///
/// The caller guarantees `high` and `low` have equal lengths.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is 0.
pub fn rolling_extrema<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
) -> Result<RollingExtremaOutput<T>> {
    validate_period(period, "rolling_extrema")?;
    Ok(RollingExtremaOutput {
        max: rolling(high, period, Extremum::Max),
        min: rolling(low, period, Extremum::Min),
    })
}
