//! Trailing-window box filter for daily series.
//!
//! This module provides [`box_filter`], a causal moving average used across
//! the estimation pipeline: cumulative counts and daily deltas are smoothed
//! with a short window, raw reproduction-number series with a longer one.
//!
//! Key ideas:
//! - The window at index `i` covers `[max(0, i − n + lookahead),
//!   min(len, i + lookahead + 1))`, i.e. the current sample plus up to `n`
//!   preceding ones when `lookahead = 0`.
//! - The divisor is the number of samples actually inside the window, so
//!   early indices average over fewer points instead of being dragged toward
//!   zero by synthetic padding.
//! - With `lookahead ≤ n` the window always contains the current index, so
//!   the divisor is never zero.
use crate::filters::errors::{FilterError, FilterResult};
use ndarray::{Array1, ArrayView1};

/// Apply a trailing-window moving average to `series`.
///
/// # Arguments
/// - `series`: input samples; must be non-empty and finite.
/// - `window`: number of trailing samples to include ahead of the current
///   index. `window = 0` returns the input unchanged.
/// - `lookahead`: forward shift of the window. The pipeline uses `0`
///   throughout; values up to `window` are accepted.
///
/// # Returns
/// A new series of the same length where each entry is the mean of the
/// samples inside its window.
///
/// # Errors
/// - [`FilterError::EmptyInput`] if `series` is empty.
/// - [`FilterError::NonFiniteValue`] at the first NaN/±inf sample.
/// - [`FilterError::LookaheadExceedsWindow`] if `lookahead > window`, which
///   would allow a window that excludes the current index.
pub fn box_filter(
    series: ArrayView1<'_, f64>, window: usize, lookahead: usize,
) -> FilterResult<Array1<f64>> {
    if series.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    if lookahead > window {
        return Err(FilterError::LookaheadExceedsWindow { lookahead, window });
    }
    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(FilterError::NonFiniteValue { index, value });
        }
    }

    let len = series.len();
    let mut smoothed = Array1::zeros(len);
    for i in 0..len {
        let start = (i + lookahead).saturating_sub(window);
        let end = (i + lookahead + 1).min(len);
        let mut acc = 0.0;
        for j in start..end {
            acc += series[j];
        }
        smoothed[i] = acc / ((end - start) as f64);
    }
    Ok(smoothed)
}
