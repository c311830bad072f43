//! Errors for reverse reproduction-number estimation (case-series validation,
//! kernel/smoothing/gating option checks, and filter failures).
//!
//! This module defines the estimator error type, [`EstimatorError`], used
//! across the Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Cumulative case counts must be **finite and non-negative**; they are not
//!   required to be monotonic (upstream corrections may lower the total).
//! - Dates must be **strictly increasing** with no duplicates.
//! - Filter failures from [`crate::filters`] are normalized into estimator
//!   variants via `From<FilterError>`.
use crate::filters::errors::FilterError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Crate-wide result alias for estimator operations that may produce
/// [`EstimatorError`].
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Unified error type for reverse reproduction-number estimation.
///
/// Covers input/data validation and configuration checks for the kernel,
/// smoothing, and gating options. Implements `Display`/`Error` and converts
/// to a Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorError {
    // ---- Input/data validation ----
    /// Series is empty.
    EmptySeries,

    /// Date and count sequences differ in length.
    LengthMismatch { dates: usize, counts: usize },

    /// A cumulative count is NaN/±inf.
    NonFiniteCount { index: usize, value: f64 },

    /// A cumulative count is negative.
    NegativeCount { index: usize, value: f64 },

    /// A date is not strictly after its predecessor.
    NonIncreasingDates { index: usize },

    // ---- Kernel options ----
    /// The infectious span must cover at least one day.
    InvalidInfectiousDays { value: usize },

    /// The kernel skew must lie inside the infectious span.
    CenterOutOfRange { center: usize, infectious_days: usize },

    // ---- Smoothing options ----
    /// Smoothing windows must cover at least one trailing sample.
    InvalidSmoothingWindow { window: usize },

    // ---- Gating options ----
    /// A gating threshold is out of range.
    InvalidGatingThreshold { name: &'static str, value: f64, reason: &'static str },

    /// The fallback reproduction number must be finite and > 0.
    InvalidFallbackR { value: f64 },

    // ---- Fallback ----
    /// An unexpected internal failure.
    UnknownError,
}

impl std::error::Error for EstimatorError {}

impl std::fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            EstimatorError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            EstimatorError::LengthMismatch { dates, counts } => {
                write!(f, "Date and count lengths differ: {dates} dates vs {counts} counts.")
            }
            EstimatorError::NonFiniteCount { index, value } => {
                write!(f, "Cumulative count at index {index} is non-finite: {value}")
            }
            EstimatorError::NegativeCount { index, value } => {
                write!(f, "Cumulative count at index {index} is negative: {value}")
            }
            EstimatorError::NonIncreasingDates { index } => {
                write!(f, "Dates must be strictly increasing; violation at index {index}.")
            }
            // ---- Kernel options ----
            EstimatorError::InvalidInfectiousDays { value } => {
                write!(f, "infectious_days must be >= 1; got: {value}")
            }
            EstimatorError::CenterOutOfRange { center, infectious_days } => {
                write!(f, "Kernel center ({center}) must lie in [0, {infectious_days}].")
            }
            // ---- Smoothing options ----
            EstimatorError::InvalidSmoothingWindow { window } => {
                write!(f, "Smoothing window must be >= 1; got: {window}")
            }
            // ---- Gating options ----
            EstimatorError::InvalidGatingThreshold { name, value, reason } => {
                write!(f, "Gating threshold {name} is invalid ({value}): {reason}")
            }
            EstimatorError::InvalidFallbackR { value } => {
                write!(f, "Fallback R must be finite and > 0; got: {value}")
            }
            EstimatorError::UnknownError => {
                write!(f, "An unknown error occurred during estimation.")
            }
        }
    }
}

/// Convert an [`EstimatorError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
impl std::convert::From<EstimatorError> for PyErr {
    fn from(err: EstimatorError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<FilterError> for EstimatorError {
    fn from(err: FilterError) -> EstimatorError {
        match err {
            FilterError::EmptyInput => EstimatorError::EmptySeries,
            FilterError::NonFiniteValue { index, value } => {
                EstimatorError::NonFiniteCount { index, value }
            }
            FilterError::LookaheadExceedsWindow { window, .. } => {
                EstimatorError::InvalidSmoothingWindow { window }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` output for representative variants.
    // - Conversion from `FilterError` into `EstimatorError`.
    //
    // These tests intentionally DO NOT cover:
    // - PyErr conversions (exercised by Python integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `Display` embeds the payload values for data-validation
    // variants.
    //
    // Given
    // -----
    // - A `NonFiniteCount` at index 3.
    //
    // Expect
    // ------
    // - The message names the index and the offending value.
    fn display_includes_payload_values() {
        let err = EstimatorError::NonFiniteCount { index: 3, value: f64::INFINITY };

        let msg = err.to_string();

        assert!(msg.contains("index 3"));
        assert!(msg.contains("inf"));
    }

    #[test]
    // Purpose
    // -------
    // Verify the mapping from filter errors into estimator variants.
    //
    // Given
    // -----
    // - Each `FilterError` variant in turn.
    //
    // Expect
    // ------
    // - `EmptyInput` maps to `EmptySeries`, `NonFiniteValue` keeps its
    //   payload, and `LookaheadExceedsWindow` surfaces as an invalid window.
    fn filter_errors_map_to_estimator_variants() {
        assert_eq!(EstimatorError::from(FilterError::EmptyInput), EstimatorError::EmptySeries);
        assert_eq!(
            EstimatorError::from(FilterError::NonFiniteValue { index: 2, value: -1.0 }),
            EstimatorError::NonFiniteCount { index: 2, value: -1.0 }
        );
        assert_eq!(
            EstimatorError::from(FilterError::LookaheadExceedsWindow { lookahead: 5, window: 3 }),
            EstimatorError::InvalidSmoothingWindow { window: 3 }
        );
    }
}
