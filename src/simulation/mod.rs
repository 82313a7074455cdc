//! Stochastic simulation kernels.
//!
//! Seeded uniform sources, Box-Muller normal variates, discretized
//! Wiener paths, Poisson counting approximations, and Bernoulli
//! random-walk experiments. Every generator is deterministic under a
//! fixed seed; all computation is synchronous and in-memory.

mod bernoulli;
mod normal;
mod poisson;
mod source;
mod wiener;

pub use bernoulli::{
    bernoulli_sequence, expected_final_scores, final_score_bins, running_frequency,
    to_random_walk,
};
pub use normal::{box_muller, NormalSource};
pub use poisson::{empirical_frequencies, PoissonApproximation};
pub use source::UniformSource;
pub use wiener::PathSpec;

use thiserror::Error;

/// Domain violations raised by the simulation kernels.
///
/// All of these stem from invalid caller input; none is transient and
/// none is retried internally. State is never partially mutated on
/// failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Box-Muller requires a uniform strictly greater than zero.
    #[error("uniform input must be in (0, 1], got {value}")]
    UniformOutOfRange {
        /// The rejected uniform value.
        value: f64,
    },

    /// An input that must be a finite real number was NaN or infinite.
    #[error("input is not a finite number: {value}")]
    NonFinite {
        /// The rejected value.
        value: f64,
    },

    /// A time horizon must be positive and finite.
    #[error("horizon must be positive and finite, got {value}")]
    InvalidHorizon {
        /// The rejected horizon.
        value: f64,
    },

    /// Discretizations need at least one step.
    #[error("step count must be at least 1")]
    InvalidStepCount,

    /// A Poisson rate must be positive and finite.
    #[error("rate must be positive and finite, got {value}")]
    InvalidRate {
        /// The rejected rate.
        value: f64,
    },

    /// A probability must lie in [0, 1].
    #[error("probability must be in [0, 1], got {value}")]
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },
}
