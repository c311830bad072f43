//! reproduction — reverse reproduction-ratio stack: core numerics, models,
//! and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive estimation layer that bundles validated case-series
//! containers, the infectiousness kernel and attribution numerics, the
//! model-level pipeline, and shared error types under a single namespace.
//! This is the main entry point for reverse reproduction-ratio estimation
//! in the crate, and is the surface most consumers (including Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerical and structural building blocks in [`core`]:
//!   case data containers, the infectiousness kernel, daily-delta
//!   extraction, kernel attribution, configuration bundles, and
//!   validation.
//! - Expose the user-facing estimator API in [`models`] via
//!   [`ReverseRModel`], producing aligned [`ReverseREstimate`] tables with
//!   per-day [`DailyEstimate`] records.
//! - Centralize estimation-specific error types in [`errors`]
//!   (`EstimatorError` and the `EstimatorResult` alias) so callers see a
//!   uniform error surface across the stack.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream crates and bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Case data are carried in validated [`CaseSeries`] instances: finite,
//!   non-negative cumulative counts under strictly increasing dates.
//!   Non-monotonic counts are legal; delta extraction clamps downward
//!   corrections to zero.
//! - Kernel weights are non-negative and sum to 1.0, so attribution
//!   conserves reported case mass except at the series edges where the
//!   window is truncated.
//! - Configuration inside a constructed [`EstimatorOptions`] satisfies the
//!   rules in [`core::validation`]; the pipeline does not re-check it.
//! - Every series produced by an estimation pass has the input's length
//!   and is index-aligned with its dates.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; series store the oldest observation
//!   at index 0, newest at the end.
//! - Kernel placement follows `target = source + offset + j`; a negative
//!   offset reaches into the past, and out-of-range targets are discarded.
//! - The stack itself performs no I/O and no logging; callers orchestrate
//!   data loading. Error conditions are surfaced as [`EstimatorResult`];
//!   panics indicate programming errors such as index-arithmetic bugs.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct a [`CaseSeries`] / [`CaseMeta`] from cumulative counts
//!      and report dates.
//!   2. Build an [`EstimatorOptions`] bundle ([`KernelOptions`],
//!      [`SmoothingOptions`], [`GatingOptions`]) or take the defaults.
//!   3. Construct a [`ReverseRModel`] via `ReverseRModel::new(options)`.
//!   4. Call `estimate(&series)` per series; read whole-series arrays or
//!      iterate `daily()` on the returned [`ReverseREstimate`].
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on `EstimatorError` conversions into `PyErr`
//!   defined in [`errors`].
//! - Advanced callers can work directly with submodules (e.g.,
//!   `core::attribution`, `core::kernel`) when they need lower-level
//!   control over the numerics.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover case-series validation, kernel
//!   normalization and shape, delta extraction and clamping, attribution
//!   placement / mass conservation / linearity, and option validation
//!   boundaries.
//! - Unit tests in [`models`] cover pipeline alignment, gate switching,
//!   causal ratio smoothing, determinism, and the per-day accessors.
//! - Unit tests in [`errors`] cover `Display` behavior and conversions
//!   from filter errors. Integration tests exercise full pipelines
//!   through the public crate surface.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the everyday types most users need. More specialized items
// (validation helpers, the raw attribution and delta transforms, etc.)
// remain under their respective submodules.

pub use self::core::{
    CaseMeta, CaseSeries, EstimatorOptions, GatingOptions, InfectionKernel, KernelOptions,
    SmoothingOptions,
};

pub use self::errors::{EstimatorError, EstimatorResult};

pub use self::models::{DailyEstimate, ReverseREstimate, ReverseRModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use reverse_r::reproduction::prelude::*;
//
// to import the main estimation surface in a single line, without pulling
// in lower-level internals.

pub mod prelude {
    pub use super::{
        CaseMeta, CaseSeries, DailyEstimate, EstimatorError, EstimatorOptions, EstimatorResult,
        GatingOptions, InfectionKernel, KernelOptions, ReverseREstimate, ReverseRModel,
        SmoothingOptions,
    };
}
