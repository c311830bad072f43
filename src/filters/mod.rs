//! filters — reusable causal smoothing filters for daily series.
//!
//! This module collects the small, generic signal filters shared by the
//! estimation pipeline:
//! - [`box_filter`]: a trailing-window moving average with a configurable
//!   lookahead, used for smoothing cumulative counts, daily deltas, and raw
//!   reproduction-number series.
//! - [`FilterError`] / [`FilterResult`]: the shared error surface for filter
//!   routines.
//!
//! Conventions:
//! - Filters are pure functions over `ndarray` views; they never mutate
//!   their input and always return a series of the same length.
//! - Window arguments count the trailing samples ahead of the current index,
//!   so a window of `n` averages up to `n + 1` samples.
//! - This module performs no I/O and no logging.

pub mod box_filter;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::box_filter::box_filter;
pub use self::errors::{FilterError, FilterResult};
