//! Streaming and batch moment estimation.
//!
//! This module maintains running mean and variance over an unbounded
//! observation stream using Welford's online recurrence, and provides a
//! direct two-pass computation used as a correctness oracle against the
//! streaming path.

mod batch;
mod welford;

pub use batch::batch_moments;
pub use welford::{MomentsSnapshot, ObservationError, RunningMoments};
