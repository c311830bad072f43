//! Configuration surface for reverse reproduction-number estimation.
//!
//! Purpose
//! -------
//! Model every tunable of the pipeline as an explicit, immutable
//! configuration value: kernel shape ([`KernelOptions`]), smoothing windows
//! ([`SmoothingOptions`]), and gating thresholds ([`GatingOptions`]),
//! bundled into [`EstimatorOptions`]. Keeping the constants out of the
//! components makes each run a deterministic pure function of
//! (input series, configuration).
//!
//! Key behaviors
//! -------------
//! - Every option type validates its fields at construction time and is
//!   immutable afterwards.
//! - `Default` implementations reproduce the reference configuration:
//!   infectious span 10 with skew 7 and offset −4, smoothing windows 7 and
//!   14, gate at 100 smoothed cases and 1e-10 attributable weight, fallback
//!   R of 3.0.
//!
//! Invariants & assumptions
//! ------------------------
//! - `infectious_days >= 1` and `center <= infectious_days`.
//! - Smoothing windows are >= 1; the filter itself also accepts 0 (identity)
//!   but the pipeline configuration requires actual smoothing.
//! - `min_smoothed_total` is finite and >= 0; `min_attributable_weight` is
//!   finite and > 0; `fallback_r` is finite and > 0.
//!
//! Conventions
//! -----------
//! - The kernel `offset` may be negative, placing part of the window in the
//!   past relative to the report day; no validation is applied beyond the
//!   type, since any placement is meaningful.
//! - Validation lives in [`crate::reproduction::core::validation`]; the
//!   constructors here only orchestrate the checks.
//!
//! Downstream usage
//! ----------------
//! - Build an [`EstimatorOptions`] (usually via `Default` plus targeted
//!   overrides) and hand it to
//!   [`crate::reproduction::models::ReverseRModel::new`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, each rejection branch, and the
//!   `Default` values for all four option types.
use crate::reproduction::core::validation::{
    validate_center, validate_fallback_r, validate_infectious_days,
    validate_min_attributable_weight, validate_min_smoothed_total, validate_smoothing_window,
};
use crate::reproduction::errors::EstimatorResult;

/// `KernelOptions` — shape and placement of the infectiousness kernel.
///
/// Purpose
/// -------
/// Describe the binomial-bump kernel: the total span of infectiousness, the
/// skew parameter selecting where the bump peaks, and the index shift that
/// places the window relative to the report day.
///
/// Fields
/// ------
/// - `infectious_days`: `usize`
///   Total span of infectiousness in days; the kernel has
///   `infectious_days + 1` weights. Must be >= 1.
/// - `center`: `usize`
///   Skew parameter in `[0, infectious_days]`; larger values push the peak
///   toward the end of the window.
/// - `offset`: `isize`
///   Day shift of kernel index 0 relative to the source day; negative
///   values reach into the past.
///
/// Invariants
/// ----------
/// - `infectious_days >= 1`.
/// - `center <= infectious_days`.
///
/// Notes
/// -----
/// - The most recent `infectious_days + offset` days of any attribution are
///   necessarily incomplete until future days are observed; that property
///   follows from the placement, not from these options being invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelOptions {
    /// Total span of infectiousness in days (>= 1).
    pub infectious_days: usize,
    /// Skew parameter in [0, infectious_days].
    pub center: usize,
    /// Day shift of kernel index 0 relative to the source day.
    pub offset: isize,
}

impl KernelOptions {
    /// Construct validated [`KernelOptions`].
    ///
    /// Parameters
    /// ----------
    /// - `infectious_days`: total span of infectiousness in days (>= 1).
    /// - `center`: skew parameter; must lie in `[0, infectious_days]`.
    /// - `offset`: day shift of kernel index 0 relative to the source day.
    ///
    /// Returns
    /// -------
    /// `EstimatorResult<KernelOptions>`
    ///   Validated options, or the first failing check.
    ///
    /// Errors
    /// ------
    /// - `EstimatorError::InvalidInfectiousDays` if `infectious_days < 1`.
    /// - `EstimatorError::CenterOutOfRange` if `center > infectious_days`.
    pub fn new(infectious_days: usize, center: usize, offset: isize) -> EstimatorResult<Self> {
        validate_infectious_days(infectious_days)?;
        validate_center(center, infectious_days)?;
        Ok(KernelOptions { infectious_days, center, offset })
    }
}

impl Default for KernelOptions {
    /// Reference kernel: span 10, skew 7, offset −4.
    fn default() -> Self {
        KernelOptions { infectious_days: 10, center: 7, offset: -4 }
    }
}

/// `SmoothingOptions` — trailing-window sizes for the box filter.
///
/// Purpose
/// -------
/// Carry the two smoothing windows of the pipeline: a short window applied
/// to cumulative counts and daily deltas, and a longer window applied to the
/// raw reproduction-number series.
///
/// Fields
/// ------
/// - `count_window`: `usize`
///   Window for cumulative counts and deltas (>= 1).
/// - `r_window`: `usize`
///   Window for the raw R series (>= 1).
///
/// Invariants
/// ----------
/// - Both windows are >= 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingOptions {
    /// Window for cumulative counts and daily deltas (>= 1).
    pub count_window: usize,
    /// Window for the raw R series (>= 1).
    pub r_window: usize,
}

impl SmoothingOptions {
    /// Construct validated [`SmoothingOptions`].
    ///
    /// Parameters
    /// ----------
    /// - `count_window`: window for counts and deltas (>= 1).
    /// - `r_window`: window for the raw R series (>= 1).
    ///
    /// Returns
    /// -------
    /// `EstimatorResult<SmoothingOptions>`
    ///   Validated options, or the first failing check.
    ///
    /// Errors
    /// ------
    /// - `EstimatorError::InvalidSmoothingWindow` if either window is 0.
    pub fn new(count_window: usize, r_window: usize) -> EstimatorResult<Self> {
        validate_smoothing_window(count_window)?;
        validate_smoothing_window(r_window)?;
        Ok(SmoothingOptions { count_window, r_window })
    }
}

impl Default for SmoothingOptions {
    /// Reference windows: 7 for counts and deltas, 14 for R.
    fn default() -> Self {
        SmoothingOptions { count_window: 7, r_window: 14 }
    }
}

/// `GatingOptions` — validity thresholds and fallback for R estimation.
///
/// Purpose
/// -------
/// Decide when a per-day ratio estimate is trustworthy enough to publish.
/// Below the thresholds the estimator emits `fallback_r` and flags the day,
/// preventing small-sample noise or near-zero denominators from being
/// published as signal.
///
/// Fields
/// ------
/// - `min_smoothed_total`: `f64`
///   Smallest smoothed cumulative count at which ratios are published;
///   finite, >= 0.
/// - `min_attributable_weight`: `f64`
///   Smallest attributable weight accepted as a denominator; finite, > 0.
/// - `fallback_r`: `f64`
///   Sentinel published on gated days; finite, > 0. The value carries no
///   statistical meaning, which is why gated days are additionally flagged
///   in the output.
///
/// Invariants
/// ----------
/// - All three fields are finite; `min_smoothed_total >= 0`,
///   `min_attributable_weight > 0`, `fallback_r > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatingOptions {
    /// Smallest smoothed cumulative count at which ratios are published.
    pub min_smoothed_total: f64,
    /// Smallest attributable weight accepted as a ratio denominator.
    pub min_attributable_weight: f64,
    /// Sentinel published on gated days.
    pub fallback_r: f64,
}

impl GatingOptions {
    /// Construct validated [`GatingOptions`].
    ///
    /// Parameters
    /// ----------
    /// - `min_smoothed_total`: finite, >= 0.
    /// - `min_attributable_weight`: finite, > 0.
    /// - `fallback_r`: finite, > 0.
    ///
    /// Returns
    /// -------
    /// `EstimatorResult<GatingOptions>`
    ///   Validated options, or the first failing check.
    ///
    /// Errors
    /// ------
    /// - `EstimatorError::InvalidGatingThreshold` for an out-of-range
    ///   threshold.
    /// - `EstimatorError::InvalidFallbackR` for a non-finite or
    ///   non-positive fallback.
    pub fn new(
        min_smoothed_total: f64, min_attributable_weight: f64, fallback_r: f64,
    ) -> EstimatorResult<Self> {
        validate_min_smoothed_total(min_smoothed_total)?;
        validate_min_attributable_weight(min_attributable_weight)?;
        validate_fallback_r(fallback_r)?;
        Ok(GatingOptions { min_smoothed_total, min_attributable_weight, fallback_r })
    }
}

impl Default for GatingOptions {
    /// Reference gate: 100 smoothed cases, 1e-10 attributable weight,
    /// fallback R of 3.0.
    fn default() -> Self {
        GatingOptions { min_smoothed_total: 100.0, min_attributable_weight: 1e-10, fallback_r: 3.0 }
    }
}

/// `EstimatorOptions` — full configuration bundle for the pipeline.
///
/// Purpose
/// -------
/// Group kernel, smoothing, and gating configuration into the single
/// immutable value consumed by
/// [`crate::reproduction::models::ReverseRModel`].
///
/// Fields
/// ------
/// - `kernel`: [`KernelOptions`]
/// - `smoothing`: [`SmoothingOptions`]
/// - `gating`: [`GatingOptions`]
///
/// Notes
/// -----
/// - The fields are individually validated by their own constructors;
///   bundling performs no additional checks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimatorOptions {
    /// Kernel shape and placement.
    pub kernel: KernelOptions,
    /// Smoothing windows.
    pub smoothing: SmoothingOptions,
    /// Gating thresholds and fallback.
    pub gating: GatingOptions,
}

impl EstimatorOptions {
    /// Bundle validated option groups.
    ///
    /// Parameters
    /// ----------
    /// - `kernel`: validated kernel options.
    /// - `smoothing`: validated smoothing options.
    /// - `gating`: validated gating options.
    ///
    /// Returns
    /// -------
    /// `EstimatorOptions`
    ///   The combined configuration; no further validation is performed.
    pub fn new(
        kernel: KernelOptions, smoothing: SmoothingOptions, gating: GatingOptions,
    ) -> EstimatorOptions {
        EstimatorOptions { kernel, smoothing, gating }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reproduction::errors::EstimatorError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Happy-path construction and field preservation for each option type.
    // - Rejection branches for invalid parameters.
    // - The reference `Default` values.
    //
    // These tests intentionally DO NOT cover:
    // - Numerical behavior of the components consuming these options.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `KernelOptions::new` accepts the reference configuration
    // and preserves its fields.
    //
    // Given
    // -----
    // - Span 10, skew 7, offset -4.
    //
    // Expect
    // ------
    // - `Ok(..)` with all fields intact; equal to `Default`.
    fn kernel_options_accepts_reference_configuration() {
        let options = KernelOptions::new(10, 7, -4).unwrap();

        assert_eq!(options.infectious_days, 10);
        assert_eq!(options.center, 7);
        assert_eq!(options.offset, -4);
        assert_eq!(options, KernelOptions::default());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `KernelOptions::new` rejects a zero span and an out-of-range
    // skew.
    //
    // Given
    // -----
    // - `infectious_days = 0`, then `center = 11` against span 10.
    //
    // Expect
    // ------
    // - `InvalidInfectiousDays { value: 0 }` and
    //   `CenterOutOfRange { center: 11, infectious_days: 10 }`.
    fn kernel_options_rejects_invalid_parameters() {
        assert_eq!(
            KernelOptions::new(0, 0, 0).unwrap_err(),
            EstimatorError::InvalidInfectiousDays { value: 0 }
        );
        assert_eq!(
            KernelOptions::new(10, 11, 0).unwrap_err(),
            EstimatorError::CenterOutOfRange { center: 11, infectious_days: 10 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify smoothing-window construction and rejection of zero windows.
    //
    // Given
    // -----
    // - `(7, 14)`, then `(0, 14)` and `(7, 0)`.
    //
    // Expect
    // ------
    // - `Ok(..)` matching `Default`, then `InvalidSmoothingWindow` for each
    //   zero window.
    fn smoothing_options_validates_both_windows() {
        let options = SmoothingOptions::new(7, 14).unwrap();
        assert_eq!(options, SmoothingOptions::default());

        assert_eq!(
            SmoothingOptions::new(0, 14).unwrap_err(),
            EstimatorError::InvalidSmoothingWindow { window: 0 }
        );
        assert_eq!(
            SmoothingOptions::new(7, 0).unwrap_err(),
            EstimatorError::InvalidSmoothingWindow { window: 0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify gating-option construction and rejection of bad thresholds and
    // fallbacks.
    //
    // Given
    // -----
    // - The reference gate, then a negative total threshold, a zero weight
    //   threshold, and a zero fallback.
    //
    // Expect
    // ------
    // - `Ok(..)` matching `Default`, then the matching error variant for
    //   each invalid input.
    fn gating_options_validates_thresholds_and_fallback() {
        let options = GatingOptions::new(100.0, 1e-10, 3.0).unwrap();
        assert_eq!(options, GatingOptions::default());

        assert!(matches!(
            GatingOptions::new(-1.0, 1e-10, 3.0).unwrap_err(),
            EstimatorError::InvalidGatingThreshold { name: "min_smoothed_total", .. }
        ));
        assert!(matches!(
            GatingOptions::new(100.0, 0.0, 3.0).unwrap_err(),
            EstimatorError::InvalidGatingThreshold { name: "min_attributable_weight", .. }
        ));
        assert_eq!(
            GatingOptions::new(100.0, 1e-10, 0.0).unwrap_err(),
            EstimatorError::InvalidFallbackR { value: 0.0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that the bundled `Default` reproduces the reference
    // configuration in one value.
    //
    // Given
    // -----
    // - `EstimatorOptions::default()`.
    //
    // Expect
    // ------
    // - Kernel (10, 7, -4), windows (7, 14), gate (100.0, 1e-10, 3.0).
    fn estimator_options_default_is_the_reference_configuration() {
        let options = EstimatorOptions::default();

        assert_eq!(options.kernel, KernelOptions::default());
        assert_eq!(options.smoothing, SmoothingOptions::default());
        assert_eq!(options.gating, GatingOptions::default());
    }
}
