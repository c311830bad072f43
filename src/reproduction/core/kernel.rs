//! Infectiousness kernel for case attribution.
//!
//! This module provides [`InfectionKernel`], the normalized weight profile
//! describing how a single day's new cases are presumed to have been caused
//! by infectious activity across a window of surrounding days.
//!
//! Key ideas:
//! - The raw weight at day-offset `i` follows a binomial bump:
//!   `C(n, k) · p^k · (1 − p)^(n − k)` with `p = i / n`, where `n` is the
//!   infectious span and `k` the skew parameter. This is a smooth, skewed
//!   shape evaluated on a grid, not a probability distribution over trials.
//! - Weights are normalized so the kernel sums to 1.0; attribution therefore
//!   conserves reported case mass except where the series boundary truncates
//!   the window.
//! - `offset` places index 0 of the kernel relative to the report day; a
//!   negative offset reaches into the past.
use crate::reproduction::core::options::KernelOptions;
use ndarray::Array1;

/// Normalized infectiousness kernel plus its placement offset.
///
/// Built once from validated [`KernelOptions`] and shared by every
/// attribution pass. The weight vector has length `infectious_days + 1`.
///
/// # Notes
/// - Construction cannot fail: parameter validation happens in
///   [`KernelOptions::new`], and the raw weight sum is strictly positive for
///   every admissible `(infectious_days, center)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct InfectionKernel {
    /// Non-negative weights summing to 1.0, indexed by day offset.
    pub weights: Array1<f64>,
    /// Index shift applied when attributing: kernel index 0 lands at
    /// `source_day + offset`.
    pub offset: isize,
}

impl InfectionKernel {
    /// Build the normalized kernel described by `options`.
    ///
    /// # Arguments
    /// - `options`: validated kernel parameters (span, skew, offset).
    ///
    /// # Returns
    /// An [`InfectionKernel`] with `infectious_days + 1` weights summing
    /// to 1.0.
    pub fn new(options: &KernelOptions) -> InfectionKernel {
        let n = options.infectious_days;
        let k = options.center;
        let coefficient = n_choose_k(n as u64, k as u64);

        let mut weights = Array1::zeros(n + 1);
        for i in 0..=n {
            let p = i as f64 / n as f64;
            weights[i] = coefficient * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32);
        }
        let total: f64 = weights.sum();
        weights.mapv_inplace(|w| w / total);

        InfectionKernel { weights, offset: options.offset }
    }
}

/// Binomial coefficient `C(n, k)` via the multiplicative formula.
///
/// Uses the symmetric reduction `k = min(k, n − k)` to bound the number of
/// multiplications and keep intermediate magnitudes small.
fn n_choose_k(n: u64, k: u64) -> f64 {
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * ((n - i) as f64) / ((i + 1) as f64);
    }
    result
}
