//! reverse_r — reverse reproduction-ratio estimation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the reverse reproduction-ratio pipeline to Python via the
//! `_reverse_r` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing classes and submodules
//! used by the `reverse_r` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`reproduction` and `filters`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_reverse_r` Python extension.
//! - Create and register the Python submodule (`reproduction_models`) under
//!   `reverse_r` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   `ReverseRModel`, `ReverseREstimate`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_reverse_r.reproduction_models` and
//!   are typically wrapped by thin pure-Python facades in the top-level
//!   `reverse_r` package.
//! - Indexing, alignment, and gating conventions follow the documentation
//!   of the underlying Rust modules (`reproduction::core`,
//!   `reproduction::models`, `filters`).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules
//!   and can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_reverse_r` module defined
//!   here and wraps its classes in user-facing Python APIs.
//! - External users are expected to interact with either the safe Rust APIs
//!   or the pure-Python wrappers; the PyO3 plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by integration tests that exercise the public crate surface.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod filters;
pub mod reproduction;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    reproduction::models::reverse_r::{ReverseREstimate, ReverseRModel},
    utils::{build_estimator_options, extract_case_series},
};

/// ReverseR — Python-facing wrapper for the reverse reproduction-ratio model.
///
/// Purpose
/// -------
/// Expose the [`ReverseRModel`] API to Python callers while preserving the
/// core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`ReverseRModel`] from Python-friendly keyword arguments with
///   the reference configuration as the default.
/// - Provide an `estimate` method that converts Python date and count
///   sequences into a validated case series and delegates to the core
///   pipeline.
/// - Return results as [`REstimate`] wrappers with whole-series accessors.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `ReverseR(infectious_days=10, center=7, offset=-4, count_window=7,
/// r_window=14, min_smoothed_total=100.0, min_attributable_weight=1e-10,
/// fallback_r=3.0)`; every argument is optional and validated.
///
/// Fields
/// ------
/// - `inner`: [`ReverseRModel`]
///   Fully configured model with its infectiousness kernel precomputed.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed [`ReverseRModel`] created through
///   [`build_estimator_options`]; its configuration satisfies the core
///   validation rules.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Native Rust callers should usually work with [`ReverseRModel`]
///   directly; this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "reverse_r.reproduction_models")]
pub struct ReverseR {
    /// Underlying Rust ReverseRModel.
    pub inner: ReverseRModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ReverseR {
    #[new]
    #[pyo3(
        signature = (
            infectious_days = None,
            center = None,
            offset = None,
            count_window = None,
            r_window = None,
            min_smoothed_total = None,
            min_attributable_weight = None,
            fallback_r = None,
        ),
        text_signature = "(/, infectious_days=10, center=7, offset=-4, count_window=7, \
                          r_window=14, min_smoothed_total=100.0, \
                          min_attributable_weight=1e-10, fallback_r=3.0)"
    )]
    pub fn reverse_r(
        infectious_days: Option<usize>, center: Option<usize>, offset: Option<isize>,
        count_window: Option<usize>, r_window: Option<usize>, min_smoothed_total: Option<f64>,
        min_attributable_weight: Option<f64>, fallback_r: Option<f64>,
    ) -> PyResult<ReverseR> {
        let options = build_estimator_options(
            infectious_days,
            center,
            offset,
            count_window,
            r_window,
            min_smoothed_total,
            min_attributable_weight,
            fallback_r,
        )?;
        Ok(ReverseR { inner: ReverseRModel::new(options) })
    }

    #[pyo3(
        signature = (dates, counts, region = None, source = None),
        text_signature = "(self, dates, counts, /, region=None, source=None)"
    )]
    pub fn estimate<'py>(
        &self, py: Python<'py>, dates: &Bound<'py, PyAny>, counts: &Bound<'py, PyAny>,
        region: Option<&str>, source: Option<&str>,
    ) -> PyResult<REstimate> {
        let series = extract_case_series(py, dates, counts, region, source)?;
        let estimate = self.inner.estimate(&series)?;
        Ok(REstimate { inner: estimate })
    }
}

/// REstimate — aligned estimation results exposed to Python.
///
/// Purpose
/// -------
/// Present the aligned result table from [`ReverseREstimate`] to Python code
/// in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the full result of one estimation pass: dates, cumulative counts,
///   deltas, smoothed series, attributable weights, raw and smoothed ratio
///   series, and the gate flags.
/// - Provide accessors that clone or copy the underlying values into
///   Python-owned containers; dates are returned as ISO strings.
///
/// Parameters
/// ----------
/// Instances are constructed internally by `ReverseR.estimate` and are not
/// created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`ReverseREstimate`]
///   Rust-side container holding the full aligned table used by the
///   accessors.
///
/// Invariants
/// ----------
/// - Every series has the same length and is index-aligned with `dates`, as
///   guaranteed by the core pipeline.
///
/// Performance
/// -----------
/// - Accessors are O(n) in the series length when cloning into Python;
///   `__len__` is O(1).
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`ReverseREstimate`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "reverse_r.reproduction_models")]
pub struct REstimate {
    /// Underlying Rust ReverseREstimate.
    pub inner: ReverseREstimate,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl REstimate {
    #[getter]
    pub fn dates(&self) -> Vec<String> {
        self.inner.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
    }

    #[getter]
    pub fn cumulative(&self) -> Vec<f64> {
        self.inner.cumulative.to_vec()
    }

    #[getter]
    pub fn deltas(&self) -> Vec<f64> {
        self.inner.deltas.to_vec()
    }

    #[getter]
    pub fn smoothed_cumulative(&self) -> Vec<f64> {
        self.inner.smoothed_cumulative.to_vec()
    }

    #[getter]
    pub fn smoothed_deltas(&self) -> Vec<f64> {
        self.inner.smoothed_deltas.to_vec()
    }

    #[getter]
    pub fn attributable(&self) -> Vec<f64> {
        self.inner.attributable.to_vec()
    }

    #[getter]
    pub fn r_raw(&self) -> Vec<f64> {
        self.inner.r_raw.to_vec()
    }

    #[getter]
    pub fn r_smoothed(&self) -> Vec<f64> {
        self.inner.r_smoothed.to_vec()
    }

    #[getter]
    pub fn gated(&self) -> Vec<bool> {
        self.inner.gated.clone()
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// _reverse_r — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_reverse_r` Python module and register the submodule used by
/// the public `reverse_r` package.
///
/// Key behaviors
/// -------------
/// - Create the `reproduction_models` submodule.
/// - Attach the submodule to the parent `_reverse_r` module.
/// - Register the submodule in `sys.modules` so it is importable via dotted
///   paths from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_reverse_r`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _reverse_r<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let reproduction_models_mod = PyModule::new(_py, "reproduction_models")?;
    reproduction_models(_py, m, &reproduction_models_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("reverse_r.reproduction_models", reproduction_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn reproduction_models<'py>(
    _py: Python, reverse_r: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ReverseR>()?;
    m.add_class::<REstimate>()?;
    reverse_r.add_submodule(m)?;
    Ok(())
}
