//! Daily-delta extraction from cumulative case series.
//!
//! Converts a cumulative-count series into a non-negative daily-delta series.
//! Negative raw differences, caused by upstream corrections such as duplicate
//! removal or backdated recounts, are clamped to zero so they cannot inject
//! negative mass into the attribution step.
use ndarray::{Array1, ArrayView1};

/// Extract daily new-case counts from a cumulative series.
///
/// # Arguments
/// - `cumulative`: running case totals; validated upstream by
///   [`crate::reproduction::core::data::CaseSeries`].
///
/// # Returns
/// A series of the same length where `deltas[0] = cumulative[0]` and
/// `deltas[i] = max(0, cumulative[i] − cumulative[i − 1])` for `i > 0`.
/// All values are ≥ 0.
pub fn daily_deltas(cumulative: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut deltas = Array1::zeros(cumulative.len());
    if cumulative.is_empty() {
        return deltas;
    }
    deltas[0] = cumulative[0];
    for i in 1..cumulative.len() {
        deltas[i] = (cumulative[i] - cumulative[i - 1]).max(0.0);
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Delta extraction on increasing series.
    // - Zero-clamping of negative raw differences.
    // - The first-element convention and empty input.
    //
    // These tests intentionally DO NOT cover:
    // - Attribution of the extracted deltas (see `attribution.rs` tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify delta extraction on a plain increasing series.
    //
    // Given
    // -----
    // - `cumulative = [0.0, 10.0, 25.0, 45.0]`.
    //
    // Expect
    // ------
    // - `deltas = [0.0, 10.0, 15.0, 20.0]`.
    fn daily_deltas_differences_increasing_series() {
        let cumulative = array![0.0, 10.0, 25.0, 45.0];

        let deltas = daily_deltas(cumulative.view());

        assert_eq!(deltas, array![0.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a downward correction produces a zero delta, not a negative one.
    //
    // Given
    // -----
    // - `cumulative = [10.0, 20.0, 17.0, 30.0]` (correction at index 2).
    //
    // Expect
    // ------
    // - `deltas[2] = 0.0`; the following delta is the raw difference from
    //   the corrected total.
    fn daily_deltas_clamps_corrections_to_zero() {
        let cumulative = array![10.0, 20.0, 17.0, 30.0];

        let deltas = daily_deltas(cumulative.view());

        assert_eq!(deltas, array![10.0, 10.0, 0.0, 13.0]);
        assert!(deltas.iter().all(|&d| d >= 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify the first-element convention: the initial cumulative total is
    // taken as that day's delta.
    //
    // Given
    // -----
    // - `cumulative = [7.0, 7.0]`.
    //
    // Expect
    // ------
    // - `deltas = [7.0, 0.0]`.
    fn daily_deltas_takes_first_total_as_first_delta() {
        let cumulative = array![7.0, 7.0];

        let deltas = daily_deltas(cumulative.view());

        assert_eq!(deltas, array![7.0, 0.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the transform is total on empty input.
    //
    // Given
    // -----
    // - `cumulative = []`.
    //
    // Expect
    // ------
    // - An empty delta series.
    fn daily_deltas_handles_empty_input() {
        let cumulative: Array1<f64> = array![];

        let deltas = daily_deltas(cumulative.view());

        assert!(deltas.is_empty());
    }
}
