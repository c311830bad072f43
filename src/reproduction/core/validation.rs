//! Validation helpers for estimator configuration.
//!
//! Small, single-purpose checks used by the option constructors in
//! [`crate::reproduction::core::options`]. Each helper validates exactly one
//! constraint and reports violations as [`EstimatorError`] variants, so the
//! option types can assume well-formed values after construction.
use crate::reproduction::errors::{EstimatorError, EstimatorResult};

/// Validate the infectious span of the kernel.
///
/// # Arguments
/// - `value`: total span of infectiousness in days.
///
/// # Errors
/// - [`EstimatorError::InvalidInfectiousDays`] if `value < 1`.
pub fn validate_infectious_days(value: usize) -> EstimatorResult<()> {
    if value < 1 {
        return Err(EstimatorError::InvalidInfectiousDays { value });
    }
    Ok(())
}

/// Validate the kernel skew parameter against the infectious span.
///
/// # Arguments
/// - `center`: skew parameter selecting where the kernel bump peaks.
/// - `infectious_days`: total span of infectiousness in days.
///
/// # Errors
/// - [`EstimatorError::CenterOutOfRange`] if `center > infectious_days`.
pub fn validate_center(center: usize, infectious_days: usize) -> EstimatorResult<()> {
    if center > infectious_days {
        return Err(EstimatorError::CenterOutOfRange { center, infectious_days });
    }
    Ok(())
}

/// Validate a smoothing window size.
///
/// # Arguments
/// - `window`: trailing-window size used by the box filter.
///
/// # Errors
/// - [`EstimatorError::InvalidSmoothingWindow`] if `window < 1`.
pub fn validate_smoothing_window(window: usize) -> EstimatorResult<()> {
    if window < 1 {
        return Err(EstimatorError::InvalidSmoothingWindow { window });
    }
    Ok(())
}

/// Validate the minimum smoothed-total-cases gating threshold.
///
/// # Arguments
/// - `value`: smallest smoothed cumulative count at which ratio estimates
///   are published.
///
/// # Errors
/// - [`EstimatorError::InvalidGatingThreshold`] if `value` is non-finite or
///   negative.
pub fn validate_min_smoothed_total(value: f64) -> EstimatorResult<()> {
    if !value.is_finite() {
        return Err(EstimatorError::InvalidGatingThreshold {
            name: "min_smoothed_total",
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(EstimatorError::InvalidGatingThreshold {
            name: "min_smoothed_total",
            value,
            reason: "must be >= 0",
        });
    }
    Ok(())
}

/// Validate the minimum attributable-weight gating threshold.
///
/// # Arguments
/// - `value`: smallest attributable weight that is accepted as a ratio
///   denominator.
///
/// # Errors
/// - [`EstimatorError::InvalidGatingThreshold`] if `value` is non-finite or
///   not strictly positive.
pub fn validate_min_attributable_weight(value: f64) -> EstimatorResult<()> {
    if !value.is_finite() {
        return Err(EstimatorError::InvalidGatingThreshold {
            name: "min_attributable_weight",
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(EstimatorError::InvalidGatingThreshold {
            name: "min_attributable_weight",
            value,
            reason: "must be > 0",
        });
    }
    Ok(())
}

/// Validate the fallback reproduction number used for gated days.
///
/// # Arguments
/// - `value`: sentinel published when a ratio estimate is not trustworthy.
///
/// # Errors
/// - [`EstimatorError::InvalidFallbackR`] if `value` is non-finite or
///   not strictly positive.
pub fn validate_fallback_r(value: f64) -> EstimatorResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EstimatorError::InvalidFallbackR { value });
    }
    Ok(())
}
