//! Probability Coursework Kernels
//!
//! Numeric kernels behind a set of classroom probability and toy
//! cryptography demonstrations: streaming statistics, stochastic
//! simulation, and small-integer RSA.
//!
//! # Architecture
//!
//! The crate is a set of leaf kernels with one shared spine:
//!
//! ```text
//! source (seeded uniforms) → normal → wiener
//!                          → poisson
//!                          → bernoulli
//! statistics (streaming + batch oracle)
//! rsa (big-integer modular arithmetic)
//! cipher (Caesar + chi-squared analysis)
//! ```
//!
//! # Design Principles
//!
//! - **Streaming first**: statistics run in O(1) memory via Welford's
//!   recurrence; the two-pass batch formula exists only as an oracle
//! - **Reproducible by seed**: every simulation accepts a seeded
//!   uniform source, so a lecture example replays exactly
//! - **Errors, not clamps**: out-of-domain input is rejected with a
//!   typed error and no partial state change
//! - **No security claims**: the RSA and Caesar kernels are teaching
//!   devices; their weaknesses are the curriculum
//!
//! # Example
//!
//! ```
//! use probkit::simulation::{NormalSource, PathSpec, UniformSource};
//! use probkit::statistics::RunningMoments;
//!
//! // Stream observations through Welford's recurrence
//! let mut moments = RunningMoments::new();
//! for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     moments.update(value).unwrap();
//! }
//! assert!((moments.variance() - 4.0).abs() < 1e-12);
//!
//! // Simulate a Brownian path from a reproducible seed
//! let mut normals = NormalSource::new(UniformSource::from_phrase("demo"));
//! let spec = PathSpec::new(1.0, 1000).unwrap();
//! let path = spec.sample_path(&mut normals);
//! assert_eq!(path.len(), 1001);
//! assert_eq!(path[0], 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod cipher;
pub mod combinatorics;
pub mod config;
pub mod rsa;
pub mod simulation;
pub mod statistics;

// Re-export commonly used types at crate root
pub use cipher::AutoDecoded;
pub use config::DemoConfig;
pub use rsa::KeyPair;
pub use simulation::{NormalSource, PathSpec, PoissonApproximation, UniformSource};
pub use statistics::{batch_moments, MomentsSnapshot, RunningMoments};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
