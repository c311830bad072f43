//! core — shared reverse-R data, kernel, and attribution primitives.
//!
//! Purpose
//! -------
//! Collect the core building blocks for reverse reproduction-ratio
//! estimation: validated case-series containers, the infectiousness kernel,
//! daily-delta extraction, kernel-weighted attribution, configuration
//! bundles, and validation helpers. The model layer builds the full
//! estimation pipeline on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Track cumulative case data and metadata ([`CaseSeries`], [`CaseMeta`])
//!   with validated dates and counts so downstream code can assume
//!   well-formed inputs.
//! - Build the normalized infectiousness kernel ([`InfectionKernel`]) from
//!   validated parameters and place it relative to the report day via its
//!   offset.
//! - Extract non-negative daily deltas from cumulative totals
//!   ([`daily_deltas`]) and spread them across the infectious window
//!   ([`attributable_weights`]).
//! - Bundle model configuration in [`EstimatorOptions`] ([`KernelOptions`],
//!   [`SmoothingOptions`], [`GatingOptions`]) with validation at
//!   construction time.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counts stored in [`CaseSeries`] are finite and non-negative, and dates
//!   are strictly increasing; violations are rejected at construction, not
//!   silently repaired. Non-monotonic cumulative counts are accepted and
//!   handled downstream by delta clamping.
//! - Kernel weights are non-negative and sum to 1.0, so attribution
//!   conserves reported case mass except where the series boundary
//!   truncates the window.
//! - Daily deltas are ≥ 0 by construction: downward corrections in the
//!   cumulative series clamp to zero rather than producing negative mass.
//! - Configuration values inside a successfully constructed
//!   [`EstimatorOptions`] satisfy the validation rules in [`validation`];
//!   downstream code does not re-check them.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout. Series store the oldest observation at
//!   index 0, newest at the end; day `t` of every derived series aligns
//!   with `dates[t]`.
//! - Kernel placement follows `target = source + offset + j` for kernel
//!   index `j`; a negative offset reaches into the past.
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers, `chrono` dates, and scalar values. Error conditions are
//!   reported via `EstimatorResult`; panics are reserved for logic bugs.
//!
//! Downstream usage
//! ----------------
//! - Data preparation code constructs [`CaseSeries`] / [`CaseMeta`] from
//!   raw cumulative counts and report dates.
//! - Model code builds an [`EstimatorOptions`] bundle, derives an
//!   [`InfectionKernel`] once, and runs [`daily_deltas`] plus
//!   [`attributable_weights`] on each estimation pass.
//! - Higher-level APIs (e.g., `reproduction::models`, Python bindings) are
//!   expected to depend primarily on the types and functions re-exported
//!   below or via the [`prelude`] rather than reaching into submodules
//!   directly.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: case-series validation and rejection
//!   paths, kernel normalization and shape, delta extraction and clamping,
//!   attribution placement / mass conservation / linearity, and option
//!   validation boundaries.
//! - Integration tests at the model layer exercise the full pipeline
//!   (series → deltas → attribution → gating → smoothing), treating this
//!   module as the underlying numerical core.

pub mod attribution;
pub mod data;
pub mod deltas;
pub mod kernel;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::attribution::attributable_weights;
pub use self::data::{CaseMeta, CaseSeries};
pub use self::deltas::daily_deltas;
pub use self::kernel::InfectionKernel;
pub use self::options::{EstimatorOptions, GatingOptions, KernelOptions, SmoothingOptions};
pub use self::validation::{
    validate_center, validate_fallback_r, validate_infectious_days, validate_min_attributable_weight,
    validate_min_smoothed_total, validate_smoothing_window,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use reverse_r::reproduction::core::prelude::*;
//
// to import the main estimation core surface in a single line.

pub mod prelude {
    pub use super::attribution::attributable_weights;
    pub use super::data::{CaseMeta, CaseSeries};
    pub use super::deltas::daily_deltas;
    pub use super::kernel::InfectionKernel;
    pub use super::options::{EstimatorOptions, GatingOptions, KernelOptions, SmoothingOptions};
}
