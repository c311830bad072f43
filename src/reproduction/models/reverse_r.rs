//! Reverse reproduction-ratio model: the full estimation pipeline.
//!
//! This module wires the core primitives into a single estimator. A
//! [`ReverseRModel`] owns a validated configuration and the infectiousness
//! kernel derived from it; each call to [`ReverseRModel::estimate`] runs the
//! whole pipeline on one case series and returns an aligned result table.
//!
//! Key ideas:
//! - The ratio on day `t` is `deltas[t] / attributable[t]`: how many
//!   kernel-weighted infectious source-cases were needed to produce the
//!   cases actually reported on day `t`.
//! - The raw ratio is gated: when the smoothed cumulative total is below
//!   `min_smoothed_total`, or the attributable weight is at most
//!   `min_attributable_weight`, the day gets the configured fallback value
//!   and is flagged instead of publishing a noise-dominated ratio.
//! - Smoothed cumulative counts feed the gate; smoothed deltas are carried
//!   only as an output column. Both use the count window. The raw ratio
//!   series is smoothed with the wider ratio window.
//! - The pipeline is a deterministic pure function of (series, options):
//!   no internal state survives a call, so re-estimating after new days
//!   arrive recomputes every day, including retroactive changes inside the
//!   kernel window.
use crate::{
    filters::box_filter::box_filter,
    reproduction::{
        core::{
            attribution::attributable_weights, data::CaseSeries, deltas::daily_deltas,
            kernel::InfectionKernel, options::EstimatorOptions,
        },
        errors::EstimatorResult,
    },
};
use chrono::NaiveDate;
use ndarray::Array1;

/// Reverse reproduction-ratio estimator.
///
/// Holds the validated configuration and the infectiousness kernel built
/// from it. The kernel is derived once at construction and reused by every
/// estimation pass.
///
/// # Notes
/// - Construction cannot fail: `options` is already validated, and kernel
///   construction is total on validated parameters.
/// - The model is immutable; a single instance can serve any number of
///   series.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseRModel {
    /// Validated pipeline configuration.
    pub options: EstimatorOptions,
    /// Normalized infectiousness kernel derived from `options.kernel`.
    pub kernel: InfectionKernel,
}

impl ReverseRModel {
    /// Construct a model from validated options.
    ///
    /// # Arguments
    /// - `options`: validated configuration bundle (kernel shape, smoothing
    ///   windows, gating thresholds).
    ///
    /// # Returns
    /// A [`ReverseRModel`] with its kernel precomputed.
    pub fn new(options: EstimatorOptions) -> ReverseRModel {
        let kernel = InfectionKernel::new(&options.kernel);
        ReverseRModel { options, kernel }
    }

    /// Run the full estimation pipeline on one case series.
    ///
    /// ## Steps
    /// 1. Extract non-negative daily deltas from the cumulative counts.
    /// 2. Smooth cumulative counts and deltas with the count window
    ///    (the former feeds the gate, both are output columns).
    /// 3. Attribute the raw deltas across the infectious window to obtain
    ///    the attributable-weight series.
    /// 4. Gate: where the smoothed total reaches `min_smoothed_total` and
    ///    the attributable weight exceeds `min_attributable_weight`, the
    ///    raw ratio is `deltas[t] / attributable[t]`; elsewhere it is the
    ///    configured fallback and the day is flagged.
    /// 5. Smooth the raw ratio series with the ratio window.
    ///
    /// ## Arguments
    /// - `series`: validated cumulative case series.
    ///
    /// ## Returns
    /// A [`ReverseREstimate`] whose series are all the same length as the
    /// input and aligned with its dates.
    ///
    /// ## Errors
    /// Smoothing failures surface as [`crate::reproduction::errors::EstimatorError`];
    /// with a validated series and validated options none are expected.
    pub fn estimate(&self, series: &CaseSeries) -> EstimatorResult<ReverseREstimate> {
        let counts = series.counts.view();
        let count_window = self.options.smoothing.count_window;

        let deltas = daily_deltas(counts);
        let smoothed_cumulative = box_filter(counts, count_window, 0)?;
        let smoothed_deltas = box_filter(deltas.view(), count_window, 0)?;
        let attributable = attributable_weights(deltas.view(), &self.kernel);

        let gating = &self.options.gating;
        let len = deltas.len();
        let mut r_raw = Array1::zeros(len);
        let mut gated = vec![false; len];
        for i in 0..len {
            if smoothed_cumulative[i] >= gating.min_smoothed_total
                && attributable[i] > gating.min_attributable_weight
            {
                r_raw[i] = deltas[i] / attributable[i];
            } else {
                r_raw[i] = gating.fallback_r;
                gated[i] = true;
            }
        }
        let r_smoothed = box_filter(r_raw.view(), self.options.smoothing.r_window, 0)?;

        Ok(ReverseREstimate {
            dates: series.dates.clone(),
            cumulative: series.counts.clone(),
            deltas,
            smoothed_cumulative,
            smoothed_deltas,
            attributable,
            r_raw,
            r_smoothed,
            gated,
        })
    }
}

/// Aligned result table of one estimation pass.
///
/// Every series has the same length as the input cumulative series, and
/// index `t` of every series refers to `dates[t]`. Gated days carry the
/// configured fallback in `r_raw` and `true` in `gated`, so consumers can
/// distinguish sentinel values from measured ratios without comparing
/// against the fallback constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseREstimate {
    /// Report dates, strictly increasing.
    pub dates: Vec<NaiveDate>,
    /// Cumulative case counts as provided.
    pub cumulative: Array1<f64>,
    /// Non-negative daily new-case counts.
    pub deltas: Array1<f64>,
    /// Cumulative counts smoothed with the count window.
    pub smoothed_cumulative: Array1<f64>,
    /// Daily deltas smoothed with the count window.
    pub smoothed_deltas: Array1<f64>,
    /// Kernel-weighted infectious pressure per day.
    pub attributable: Array1<f64>,
    /// Raw reverse reproduction ratio, fallback on gated days.
    pub r_raw: Array1<f64>,
    /// Raw ratio smoothed with the ratio window.
    pub r_smoothed: Array1<f64>,
    /// `true` where the ratio was replaced by the fallback.
    pub gated: Vec<bool>,
}

impl ReverseREstimate {
    /// Number of days in the result table.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table is empty. Never true for results produced by
    /// [`ReverseRModel::estimate`], which requires a non-empty series.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The full record for day `index`, or `None` past the end.
    pub fn day(&self, index: usize) -> Option<DailyEstimate> {
        if index >= self.len() {
            return None;
        }
        Some(DailyEstimate {
            date: self.dates[index],
            cumulative: self.cumulative[index],
            delta: self.deltas[index],
            smoothed_cumulative: self.smoothed_cumulative[index],
            smoothed_delta: self.smoothed_deltas[index],
            attributable: self.attributable[index],
            r_raw: self.r_raw[index],
            r_smoothed: self.r_smoothed[index],
            gated: self.gated[index],
        })
    }

    /// Iterate over the per-day records in date order.
    pub fn daily(&self) -> impl Iterator<Item = DailyEstimate> + '_ {
        (0..self.len()).filter_map(|index| self.day(index))
    }
}

/// One row of the aligned result table.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEstimate {
    /// Report date.
    pub date: NaiveDate,
    /// Cumulative case count.
    pub cumulative: f64,
    /// Daily new-case count.
    pub delta: f64,
    /// Smoothed cumulative count (count window).
    pub smoothed_cumulative: f64,
    /// Smoothed daily delta (count window).
    pub smoothed_delta: f64,
    /// Attributable weight.
    pub attributable: f64,
    /// Raw reverse reproduction ratio.
    pub r_raw: f64,
    /// Smoothed reverse reproduction ratio (ratio window).
    pub r_smoothed: f64,
    /// Whether the raw ratio is the fallback sentinel.
    pub gated: bool,
}
