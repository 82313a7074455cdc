//! Poisson process counting approximation.
//!
//! Approximates the count of a rate-λ Poisson process on `[0, 1]` by
//! splitting the interval into `n` Bernoulli subintervals with success
//! probability `λ / n`. As `n` grows the count distribution converges
//! to Poisson(λ); the exact PMF is provided for overlay comparison.

use std::collections::BTreeMap;

use super::{SimulationError, UniformSource};
use crate::combinatorics::factorial;

/// A validated Bernoulli-subinterval approximation of a Poisson process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonApproximation {
    rate: f64,
    subintervals: usize,
}

impl PoissonApproximation {
    /// Creates an approximation with rate `λ` over `subintervals` slots.
    ///
    /// The rate must be positive and finite, and `λ / n` must not exceed
    /// 1 (otherwise the per-slot success probability is meaningless).
    pub fn new(rate: f64, subintervals: usize) -> Result<Self, SimulationError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SimulationError::InvalidRate { value: rate });
        }
        if subintervals == 0 {
            return Err(SimulationError::InvalidStepCount);
        }
        let per_slot = rate / subintervals as f64;
        if per_slot > 1.0 {
            return Err(SimulationError::InvalidProbability { value: per_slot });
        }
        Ok(Self { rate, subintervals })
    }

    /// The process rate `λ`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The per-subinterval success probability `λ / n`.
    pub fn slot_probability(&self) -> f64 {
        self.rate / self.subintervals as f64
    }

    /// Simulates one run: the number of successes over all subintervals.
    pub fn simulate_count(&self, uniforms: &mut UniformSource) -> u64 {
        let p = self.slot_probability();
        (0..self.subintervals)
            .filter(|_| uniforms.bernoulli(p))
            .count() as u64
    }

    /// Simulates `runs` independent counts.
    pub fn simulate_counts(&self, runs: usize, uniforms: &mut UniformSource) -> Vec<u64> {
        tracing::debug!(
            rate = self.rate,
            subintervals = self.subintervals,
            runs,
            "Simulating Poisson counting runs"
        );
        (0..runs).map(|_| self.simulate_count(uniforms)).collect()
    }

    /// Exact Poisson PMF `e^-λ λ^k / k!` at the configured rate.
    pub fn pmf(&self, k: u64) -> f64 {
        (-self.rate).exp() * self.rate.powi(k as i32) / factorial(k)
    }
}

/// Collapses simulated counts into relative frequencies by count value.
///
/// Keys are the observed counts in ascending order; values sum to 1
/// for a non-empty input.
pub fn empirical_frequencies(counts: &[u64]) -> BTreeMap<u64, f64> {
    let mut histogram: BTreeMap<u64, u64> = BTreeMap::new();
    for &count in counts {
        *histogram.entry(count).or_insert(0) += 1;
    }
    let total = counts.len().max(1) as f64;
    histogram
        .into_iter()
        .map(|(count, occurrences)| (count, occurrences as f64 / total))
        .collect()
}
