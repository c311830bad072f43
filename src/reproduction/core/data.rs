//! Case-series containers for reverse reproduction-number estimation.
//!
//! Purpose
//! -------
//! Provide small, validated containers for cumulative case series and their
//! metadata. This module centralizes input validation at the boundary where
//! normalized ingestion output enters the estimation pipeline, so downstream
//! stages can assume clean, aligned data.
//!
//! Key behaviors
//! -------------
//! - [`CaseSeries`] enforces basic data invariants (non-empty, equal date /
//!   count lengths, finite non-negative counts, strictly increasing dates).
//! - [`CaseMeta`] describes where the series comes from (region label and an
//!   optional source description) without affecting the numeric values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counts are cumulative totals: **finite and non-negative**, but not
//!   required to be monotonic (upstream corrections may lower the total;
//!   the delta stage clamps the resulting negative differences).
//! - Dates are strictly increasing with no duplicates; gaps are permitted
//!   and are treated as ordinary day-to-day steps by the pipeline.
//! - The series must be non-empty at construction time.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; `dates[i]` labels `counts[i]` for all `i`.
//! - Dates are plain calendar days ([`chrono::NaiveDate`]); no time zones.
//! - This module does **not** deduplicate, sort, or aggregate records; the
//!   ingestion collaborator is responsible for normalization.
//!
//! Downstream usage
//! ----------------
//! - Construct [`CaseSeries`] at the boundary where parsed case counts enter
//!   the estimation stack.
//! - Use [`CaseMeta`] to carry region labels through to output records.
//! - Consumers may safely rely on `CaseSeries` invariants when implementing
//!   delta extraction, attribution, and gating.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `CaseSeries::new` (happy
//!   path, empty series, length mismatch, non-finite counts, negative
//!   counts, duplicate and out-of-order dates).
//! - `CaseMeta::new` is a plain constructor with no additional validation
//!   and is tested implicitly via `CaseSeries` and higher-level modules.
use crate::reproduction::errors::{EstimatorError, EstimatorResult};
use chrono::NaiveDate;
use ndarray::Array1;

/// `CaseSeries` — validated cumulative case series plus metadata.
///
/// Purpose
/// -------
/// Represent a single, validated daily cumulative-case series together with
/// its date axis and interpretation metadata. This type centralizes basic
/// input checks so downstream code can assume aligned, finite, non-negative
/// data in strict date order.
///
/// Key behaviors
/// -------------
/// - Stores cumulative counts as an `ndarray::Array1<f64>` aligned 1:1 with
///   `dates`.
/// - Enforces non-emptiness, length agreement, finiteness, non-negativity,
///   and strict date order at construction time via [`CaseSeries::new`].
/// - Tolerates non-monotonic counts: a lower total than the day before is a
///   legal upstream correction, handled later by delta clamping.
///
/// Fields
/// ------
/// - `dates`: `Vec<NaiveDate>`
///   Calendar days labeling each observation; strictly increasing.
/// - `counts`: `Array1<f64>`
///   Cumulative case totals; finite and ≥ 0, same length as `dates`.
/// - `meta`: [`CaseMeta`]
///   Region label and optional source description.
///
/// Invariants
/// ----------
/// - `counts.len() > 0` and `dates.len() == counts.len()`.
/// - All entries in `counts` are finite and ≥ 0.
/// - `dates[i] < dates[i + 1]` for all valid `i`.
///
/// Performance
/// -----------
/// - Validation is O(n) in the number of observations due to a single scan
///   over `counts` and one over adjacent date pairs.
/// - After construction, this type is a lightweight container with no hidden
///   allocations.
///
/// Notes
/// -----
/// - This type does not transform the counts in any way; delta extraction
///   and smoothing are separate pipeline stages.
/// - Higher-level modules may rely on these invariants and avoid
///   re-validating basic properties.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSeries {
    /// Calendar days labeling each observation (strictly increasing).
    pub dates: Vec<NaiveDate>,
    /// Cumulative case totals (finite, >= 0).
    pub counts: Array1<f64>,
    /// Region label and optional source description.
    pub meta: CaseMeta,
}

impl CaseSeries {
    /// Construct a validated [`CaseSeries`] from raw dates and counts.
    ///
    /// Parameters
    /// ----------
    /// - `dates`: `Vec<NaiveDate>`
    ///   Calendar days labeling each observation. Must be strictly increasing
    ///   and the same length as `counts`.
    /// - `counts`: `Array1<f64>`
    ///   Cumulative case totals. Must be non-empty, finite, and ≥ 0. A value
    ///   lower than its predecessor is accepted (upstream correction).
    /// - `meta`: [`CaseMeta`]
    ///   Metadata describing the series origin.
    ///
    /// Returns
    /// -------
    /// `EstimatorResult<CaseSeries>`
    ///   - `Ok(CaseSeries)` if all invariants are satisfied.
    ///   - `Err(EstimatorError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `EstimatorError::EmptySeries`
    ///   Returned when `counts.len() == 0`.
    /// - `EstimatorError::LengthMismatch { dates, counts }`
    ///   Returned when the two sequences differ in length.
    /// - `EstimatorError::NonFiniteCount { index, value }`
    ///   Returned when any count is NaN or ±∞; `index` points to the first
    ///   offending element.
    /// - `EstimatorError::NegativeCount { index, value }`
    ///   Returned when any count is < 0; `index` points to the first
    ///   offending element.
    /// - `EstimatorError::NonIncreasingDates { index }`
    ///   Returned when `dates[index] <= dates[index - 1]`.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `EstimatorError`.
    ///
    /// Notes
    /// -----
    /// - Validation is performed in single passes, stopping at the first
    ///   invalid element.
    /// - `meta` is not validated beyond its own constructor; it is stored
    ///   as-is.
    pub fn new(
        dates: Vec<NaiveDate>, counts: Array1<f64>, meta: CaseMeta,
    ) -> EstimatorResult<Self> {
        if counts.is_empty() {
            return Err(EstimatorError::EmptySeries);
        }
        if dates.len() != counts.len() {
            return Err(EstimatorError::LengthMismatch {
                dates: dates.len(),
                counts: counts.len(),
            });
        }

        for (index, &value) in counts.iter().enumerate() {
            if !value.is_finite() {
                return Err(EstimatorError::NonFiniteCount { index, value });
            }
            if value < 0.0 {
                return Err(EstimatorError::NegativeCount { index, value });
            }
        }

        for index in 1..dates.len() {
            if dates[index] <= dates[index - 1] {
                return Err(EstimatorError::NonIncreasingDates { index });
            }
        }

        Ok(CaseSeries { dates, counts, meta })
    }
}

/// `CaseMeta` — origin metadata for a cumulative case series.
///
/// Purpose
/// -------
/// Describe where a case series comes from without altering its numeric
/// content. The region label travels through the pipeline unchanged so that
/// output records can be attributed back to their source.
///
/// Fields
/// ------
/// - `region`: `String`
///   Human-readable region or country label (e.g., "Germany").
/// - `source`: `Option<String>`
///   Optional free-form description of the upstream data source.
///
/// Notes
/// -----
/// - `CaseMeta` is intentionally lightweight and does not validate its
///   fields beyond the type system; aggregation and normalization policies
///   belong to the ingestion collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseMeta {
    /// Human-readable region or country label.
    pub region: String,
    /// Optional description of the upstream data source.
    pub source: Option<String>,
}

impl CaseMeta {
    /// Construct a new [`CaseMeta`] instance.
    ///
    /// Parameters
    /// ----------
    /// - `region`: `String`
    ///   Region or country label attached to the series.
    /// - `source`: `Option<String>`
    ///   Optional description of the upstream data source.
    ///
    /// Returns
    /// -------
    /// `CaseMeta`
    ///   A metadata value that can be attached to [`CaseSeries`].
    ///
    /// Errors
    /// ------
    /// - Never returns an error; this is a plain constructor.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(region: String, source: Option<String>) -> CaseMeta {
        CaseMeta { region, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `CaseSeries::new`.
    // - Enforcement of invariants:
    //   * non-empty series,
    //   * date/count length agreement,
    //   * finite, non-negative counts,
    //   * strictly increasing dates.
    //
    // These tests intentionally DO NOT cover:
    // - Semantics or validation of `CaseMeta` beyond being constructible.
    // -------------------------------------------------------------------------

    // Purpose
    // -------
    // Provide a minimal, consistent `CaseMeta` instance for use in tests.
    //
    // Given
    // -----
    // - A fixed region label and no source description.
    //
    // Expect
    // ------
    // - Returns a `CaseMeta` that can be safely reused across tests without
    //   affecting the invariants of `CaseSeries::new`.
    fn make_meta_stub() -> CaseMeta {
        CaseMeta::new("Testland".to_string(), None)
    }

    // Purpose
    // -------
    // Build a run of consecutive dates starting at 2020-03-01.
    //
    // Given
    // -----
    // - A length `n`.
    //
    // Expect
    // ------
    // - Returns `n` strictly increasing consecutive days.
    fn make_dates(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        (0..n).map(|i| start + chrono::Days::new(i as u64)).collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify that `CaseSeries::new` succeeds on a valid series, including a
    // non-monotonic count (upstream correction).
    //
    // Given
    // -----
    // - `counts = [0.0, 5.0, 4.0, 9.0]` (dips at index 2).
    // - Four consecutive dates and a valid `CaseMeta`.
    //
    // Expect
    // ------
    // - `CaseSeries::new` returns `Ok(..)` and preserves all fields.
    fn case_series_new_accepts_valid_and_non_monotonic_counts() {
        let counts = array![0.0, 5.0, 4.0, 9.0];
        let dates = make_dates(4);
        let meta = make_meta_stub();

        let result = CaseSeries::new(dates.clone(), counts.clone(), meta.clone());

        assert!(result.is_ok());
        let series = result.unwrap();
        assert_eq!(series.dates, dates);
        assert_eq!(series.counts, counts);
        assert_eq!(series.meta, meta);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CaseSeries::new` rejects an empty series.
    //
    // Given
    // -----
    // - `counts = []` and `dates = []`.
    //
    // Expect
    // ------
    // - `CaseSeries::new` returns `Err(EstimatorError::EmptySeries)`.
    fn case_series_new_rejects_empty_series() {
        let counts: Array1<f64> = array![];
        let meta = make_meta_stub();

        let result = CaseSeries::new(Vec::new(), counts, meta);

        assert_eq!(result.unwrap_err(), EstimatorError::EmptySeries);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CaseSeries::new` rejects mismatched date/count lengths.
    //
    // Given
    // -----
    // - Three dates but only two counts.
    //
    // Expect
    // ------
    // - `CaseSeries::new` returns
    //   `Err(EstimatorError::LengthMismatch { dates: 3, counts: 2 })`.
    fn case_series_new_rejects_length_mismatch() {
        let counts = array![0.0, 1.0];
        let dates = make_dates(3);
        let meta = make_meta_stub();

        let result = CaseSeries::new(dates, counts, meta);

        assert_eq!(result.unwrap_err(), EstimatorError::LengthMismatch { dates: 3, counts: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CaseSeries::new` rejects non-finite counts and reports the
    // first offending index.
    //
    // Given
    // -----
    // - `counts = [1.0, +∞, 3.0]`.
    //
    // Expect
    // ------
    // - `CaseSeries::new` returns
    //   `Err(EstimatorError::NonFiniteCount { index: 1, value })`.
    fn case_series_new_rejects_non_finite_counts() {
        let counts = array![1.0, f64::INFINITY, 3.0];
        let dates = make_dates(3);
        let meta = make_meta_stub();

        let result = CaseSeries::new(dates, counts.clone(), meta);

        assert_eq!(
            result.unwrap_err(),
            EstimatorError::NonFiniteCount { index: 1, value: counts[1] }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CaseSeries::new` rejects negative counts.
    //
    // Given
    // -----
    // - `counts = [1.0, -2.0, 3.0]`.
    //
    // Expect
    // ------
    // - `CaseSeries::new` returns
    //   `Err(EstimatorError::NegativeCount { index: 1, value: -2.0 })`.
    fn case_series_new_rejects_negative_counts() {
        let counts = array![1.0, -2.0, 3.0];
        let dates = make_dates(3);
        let meta = make_meta_stub();

        let result = CaseSeries::new(dates, counts, meta);

        assert_eq!(result.unwrap_err(), EstimatorError::NegativeCount { index: 1, value: -2.0 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CaseSeries::new` rejects duplicate and out-of-order dates.
    //
    // Given
    // -----
    // - A date sequence where index 2 repeats index 1.
    //
    // Expect
    // ------
    // - `CaseSeries::new` returns
    //   `Err(EstimatorError::NonIncreasingDates { index: 2 })`.
    fn case_series_new_rejects_non_increasing_dates() {
        let counts = array![0.0, 1.0, 2.0];
        let mut dates = make_dates(3);
        dates[2] = dates[1];
        let meta = make_meta_stub();

        let result = CaseSeries::new(dates, counts, meta);

        assert_eq!(result.unwrap_err(), EstimatorError::NonIncreasingDates { index: 2 });
    }
}
