//! Errors for the reusable series filters.
//!
//! This module defines [`FilterError`], the error type shared by the filter
//! routines in [`crate::filters`], together with the [`FilterResult`] alias.
//! The type implements `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Filter inputs must be non-empty and contain only finite values.
//! - Window arguments count the trailing samples preceding the current index;
//!   a window of `0` reduces a filter to the identity.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Result alias for filter routines that may produce [`FilterError`].
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type for the series filters.
///
/// Covers input validation (emptiness, finiteness) and window-configuration
/// checks. Implements `Display`/`Error` and converts to a Python `ValueError`
/// at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    // ---- Input validation ----
    /// Input series is empty.
    EmptyInput,

    /// An input value is NaN/±inf.
    NonFiniteValue { index: usize, value: f64 },

    // ---- Window configuration ----
    /// Lookahead reaches past the trailing window, so a window could exclude
    /// the current index.
    LookaheadExceedsWindow { lookahead: usize, window: usize },
}

impl std::error::Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::EmptyInput => {
                write!(f, "Filter input series is empty.")
            }
            FilterError::NonFiniteValue { index, value } => {
                write!(f, "Filter input at index {index} is non-finite: {value}")
            }
            FilterError::LookaheadExceedsWindow { lookahead, window } => {
                write!(
                    f,
                    "Lookahead ({lookahead}) must not exceed the trailing window ({window})."
                )
            }
        }
    }
}

/// Convert a [`FilterError`] into a Python `ValueError` with the error message.
impl std::convert::From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
