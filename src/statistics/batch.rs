//! Two-pass batch reference computation.
//!
//! The direct formula over a full sequence, used as a correctness oracle
//! for the streaming path. Never applied to unbounded streams.

use super::welford::MomentsSnapshot;

/// Computes mean and population variance with a direct two-pass formula.
///
/// First pass sums the values for the mean; second pass sums squared
/// deviations from that mean. An empty slice yields all-zero moments.
/// Does not touch any streaming state.
pub fn batch_moments(values: &[f64]) -> MomentsSnapshot {
    if values.is_empty() {
        return MomentsSnapshot {
            count: 0,
            mean: 0.0,
            variance: 0.0,
        };
    }

    let n = values.len() as f64;
    let mean: f64 = values.iter().sum::<f64>() / n;
    let variance: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;

    MomentsSnapshot {
        count: values.len() as u64,
        mean,
        variance,
    }
}
