//! models — user-facing reverse reproduction-ratio estimation.
//!
//! Purpose
//! -------
//! Collect the high-level estimation API: the [`ReverseRModel`] pipeline and
//! its aligned result types. This layer sits on top of `reproduction::core`,
//! wiring together delta extraction, kernel attribution, gating, and causal
//! smoothing into one pass.
//!
//! Key behaviors
//! -------------
//! - Expose a complete estimator type [`ReverseRModel`] whose `estimate`
//!   method turns a validated [`CaseSeries`] into a [`ReverseREstimate`].
//! - Carry the full aligned result table ([`ReverseREstimate`]) with
//!   whole-series access for numerical consumers and per-day records
//!   ([`DailyEstimate`]) for tabular ones.
//! - Flag gated days explicitly so fallback sentinels are distinguishable
//!   from measured ratios without value comparisons.
//!
//! Invariants & assumptions
//! ------------------------
//! - Case data are carried in validated [`CaseSeries`] instances: finite,
//!   non-negative counts under strictly increasing dates.
//! - Configuration is carried in validated
//!   [`EstimatorOptions`]; the model re-checks nothing at estimation time.
//! - Every output series has the input's length and is index-aligned with
//!   its dates.
//! - Estimation is a pure function of (series, options); no state survives
//!   a call.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; day `t` of every series refers to `dates[t]`.
//! - Smoothing is strictly causal (lookahead 0) for both the count window
//!   and the ratio window.
//! - Errors are reported as [`EstimatorResult`]; panics indicate
//!   programming errors, not bad user data.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`EstimatorOptions`] bundle (or take the defaults), build
//!   a [`ReverseRModel`] via `ReverseRModel::new(options)`, and call
//!   `estimate(&series)` per case series.
//! - Numerical consumers read the whole-series arrays off
//!   [`ReverseREstimate`]; presentation layers iterate `daily()` for
//!   aligned per-day records.
//! - Front-ends (Python bindings, CLI tools) are expected to depend mainly
//!   on the items re-exported below or via the [`prelude`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`reverse_r`] cover alignment, gate switching on a
//!   growing outbreak, causal smoothing of the ratio series, determinism,
//!   threshold overrides, and the per-day accessors.
//! - Integration tests exercise the full pipeline through the public
//!   crate surface.
//!
//! [`CaseSeries`]: crate::reproduction::core::CaseSeries
//! [`EstimatorOptions`]: crate::reproduction::core::EstimatorOptions
//! [`EstimatorResult`]: crate::reproduction::errors::EstimatorResult

pub mod reverse_r;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::reverse_r::{DailyEstimate, ReverseREstimate, ReverseRModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use reverse_r::reproduction::models::prelude::*;
//
// to import the main estimation surface in a single line.

pub mod prelude {
    pub use super::reverse_r::{DailyEstimate, ReverseREstimate, ReverseRModel};
}
