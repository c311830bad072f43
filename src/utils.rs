#[cfg(feature = "python-bindings")]
use chrono::NaiveDate;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::reproduction::core::{
    data::{CaseMeta, CaseSeries},
    options::{EstimatorOptions, GatingOptions, KernelOptions, SmoothingOptions},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_dates<'py>(raw_dates: &Bound<'py, PyAny>) -> PyResult<Vec<NaiveDate>> {
    let strings: Vec<String> = raw_dates.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a sequence of ISO date strings ('YYYY-MM-DD')",
        )
    })?;

    let mut dates = Vec::with_capacity(strings.len());
    for (index, raw) in strings.iter().enumerate() {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            PyValueError::new_err(format!(
                "invalid date {:?} at index {} (expected 'YYYY-MM-DD')",
                raw, index
            ))
        })?;
        dates.push(date);
    }
    Ok(dates)
}

#[cfg(feature = "python-bindings")]
pub fn extract_case_series<'py>(
    py: Python<'py>, raw_dates: &Bound<'py, PyAny>, raw_counts: &Bound<'py, PyAny>,
    region: Option<&str>, source: Option<&str>,
) -> PyResult<CaseSeries> {
    let dates = extract_dates(raw_dates)?;

    let counts_arr = extract_f64_array(py, raw_counts)?;
    let counts_slice = counts_arr.as_slice().map_err(|_| {
        PyValueError::new_err("counts must be a 1-D contiguous float64 array or sequence")
    })?;
    let counts = Array1::from(counts_slice.to_vec());

    let meta = CaseMeta::new(
        region.unwrap_or("unspecified").to_string(),
        source.map(|s| s.to_string()),
    );
    match CaseSeries::new(dates, counts, meta) {
        Ok(series) => Ok(series),
        Err(e) => Err(e.into()),
    }
}

#[cfg(feature = "python-bindings")]
pub fn build_estimator_options(
    infectious_days: Option<usize>, center: Option<usize>, offset: Option<isize>,
    count_window: Option<usize>, r_window: Option<usize>, min_smoothed_total: Option<f64>,
    min_attributable_weight: Option<f64>, fallback_r: Option<f64>,
) -> PyResult<EstimatorOptions> {
    let kernel_defaults = KernelOptions::default();
    let kernel = KernelOptions::new(
        infectious_days.unwrap_or(kernel_defaults.infectious_days),
        center.unwrap_or(kernel_defaults.center),
        offset.unwrap_or(kernel_defaults.offset),
    )?;

    let smoothing_defaults = SmoothingOptions::default();
    let smoothing = SmoothingOptions::new(
        count_window.unwrap_or(smoothing_defaults.count_window),
        r_window.unwrap_or(smoothing_defaults.r_window),
    )?;

    let gating_defaults = GatingOptions::default();
    let gating = GatingOptions::new(
        min_smoothed_total.unwrap_or(gating_defaults.min_smoothed_total),
        min_attributable_weight.unwrap_or(gating_defaults.min_attributable_weight),
        fallback_r.unwrap_or(gating_defaults.fallback_r),
    )?;

    Ok(EstimatorOptions::new(kernel, smoothing, gating))
}
