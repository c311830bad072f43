//! Kernel-weighted attribution of daily cases across the infectious window.
//!
//! Each day's new cases are spread over surrounding days according to the
//! infectiousness kernel, producing the attributable-weight series used as
//! the denominator of the reverse reproduction ratio.
//!
//! Key ideas:
//! - For source day `i` and kernel index `j`, the target day is
//!   `i + offset + j`; out-of-range targets are discarded (boundary
//!   truncation), so total attributed mass near the series edges is slightly
//!   below the total reported deltas.
//! - Because the kernel support can straddle the report day, attribution to
//!   a given day keeps changing while later days are still being observed.
//!   The whole series is therefore recomputed from scratch on every call;
//!   there is no incremental state.
use crate::reproduction::core::kernel::InfectionKernel;
use ndarray::{Array1, ArrayView1};

/// Distribute daily deltas across the infectious window.
///
/// # Arguments
/// - `deltas`: non-negative daily new-case counts.
/// - `kernel`: normalized infectiousness kernel with its placement offset.
///
/// # Returns
/// The attributable-weight series, same length as `deltas`. Entry `t` holds
/// the kernel-weighted infectious pressure assigned to day `t` by all source
/// days whose window covers it.
pub fn attributable_weights(
    deltas: ArrayView1<'_, f64>, kernel: &InfectionKernel,
) -> Array1<f64> {
    let len = deltas.len() as isize;
    let mut attributable = Array1::zeros(deltas.len());
    for (i, &delta) in deltas.iter().enumerate() {
        if delta <= 0.0 {
            continue;
        }
        for (j, &weight) in kernel.weights.iter().enumerate() {
            let target = i as isize + kernel.offset + j as isize;
            if target < 0 || target >= len {
                continue;
            }
            attributable[target as usize] += weight * delta;
        }
    }
    attributable
}
