//! Shared computation kernels.
//!
//! - [`rolling`]: trailing-window sum, mean, variance and mean deviation
//! - [`rolling_extrema`]: monotonic deque for O(n) rolling max/min

pub mod rolling;
pub mod rolling_extrema;

pub use rolling::{
    window, window_mean, window_mean_abs_deviation, window_std_dev, window_sum, window_variance,
};
pub use rolling_extrema::{
    rolling_extrema, rolling_max, rolling_min, Extremum, MonotonicDeque, RollingExtremaOutput,
};
