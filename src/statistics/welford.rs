//! Welford's online mean/variance algorithm.
//!
//! Maintains running moments in O(1) memory without retaining history.
//! The recurrence refines the mean estimate and accumulates squared
//! deviations against that evolving estimate, which avoids the
//! catastrophic cancellation of the naive sum/sum-of-squares formula
//! when the mean is large relative to the variance.

use thiserror::Error;

/// Errors raised by the streaming update.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObservationError {
    /// The observation was NaN or infinite; state is unchanged.
    #[error("observation is not a finite number: {value}")]
    NonFinite {
        /// The rejected value.
        value: f64,
    },
}

/// A point-in-time view of the accumulated moments.
///
/// `variance` is the population variance (division by `count`). See
/// [`RunningMoments::sample_variance`] for the Bessel-corrected alternate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentsSnapshot {
    /// Number of observations consumed.
    pub count: u64,
    /// Arithmetic mean of all observations, 0 when empty.
    pub mean: f64,
    /// Population variance, 0 when empty.
    pub variance: f64,
}

/// Streaming mean/variance accumulator.
///
/// Uses Welford's online algorithm: each observation updates the count,
/// the running mean, and the sum of squared deviations (`m2`) together.
/// A rejected observation leaves all three fields untouched.
///
/// The variance reported by this type is the **population** variance
/// (`m2 / count`) throughout. Sample variance is available under its own
/// name and is never substituted silently.
///
/// # Example
///
/// ```
/// use probkit::statistics::RunningMoments;
///
/// let mut moments = RunningMoments::new();
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     moments.update(value).unwrap();
/// }
///
/// assert!((moments.mean() - 5.0).abs() < 1e-12);
/// assert!((moments.variance() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningMoments {
    /// Number of observations consumed.
    count: u64,
    /// Running mean.
    mean: f64,
    /// Sum of squared deviations from the running mean (M2).
    m2: f64,
}

impl RunningMoments {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Consumes one observation and returns the updated moments.
    ///
    /// Rejects NaN and infinite values with [`ObservationError::NonFinite`];
    /// on rejection no field is modified.
    pub fn update(&mut self, value: f64) -> Result<MomentsSnapshot, ObservationError> {
        if !value.is_finite() {
            return Err(ObservationError::NonFinite { value });
        }

        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        Ok(self.snapshot())
    }

    /// Clears all accumulated state.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Running moments reset");
    }

    /// Number of observations consumed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns true if no observations have been consumed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean of the observations, 0 when empty.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (`m2 / count`), 0 when empty.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Sample variance with Bessel's correction (`m2 / (count - 1)`).
    ///
    /// Returns 0 for fewer than two observations. This is the named
    /// alternate convention; [`variance`](Self::variance) is the contract.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Population standard deviation.
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Current moments as a snapshot value.
    pub fn snapshot(&self) -> MomentsSnapshot {
        MomentsSnapshot {
            count: self.count,
            mean: self.mean,
            variance: self.variance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::batch_moments;

    #[test]
    fn test_empty_state_is_zero() {
        let moments = RunningMoments::new();
        assert!(moments.is_empty());
        assert_eq!(moments.mean(), 0.0);
        assert_eq!(moments.variance(), 0.0);
    }

    #[test]
    fn test_textbook_sequence() {
        let mut moments = RunningMoments::new();
        for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            moments.update(value).unwrap();
        }

        assert_eq!(moments.count(), 8);
        assert!((moments.mean() - 5.0).abs() < 1e-12);
        assert!((moments.variance() - 4.0).abs() < 1e-12);
        assert!((moments.stddev() - 2.0).abs() < 1e-12);
        // Sample variance applies Bessel's correction: 32/7
        assert!((moments.sample_variance() - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_observation() {
        let mut moments = RunningMoments::new();
        let snapshot = moments.update(42.0).unwrap();

        assert_eq!(snapshot.count, 1);
        assert!((snapshot.mean - 42.0).abs() < 1e-12);
        assert_eq!(snapshot.variance, 0.0);
        assert_eq!(moments.sample_variance(), 0.0);
    }

    #[test]
    fn test_non_finite_rejected_without_mutation() {
        let mut moments = RunningMoments::new();
        moments.update(1.0).unwrap();
        moments.update(2.0).unwrap();
        let before = moments.clone();

        assert!(matches!(
            moments.update(f64::NAN),
            Err(ObservationError::NonFinite { .. })
        ));
        assert!(matches!(
            moments.update(f64::INFINITY),
            Err(ObservationError::NonFinite { .. })
        ));
        assert!(matches!(
            moments.update(f64::NEG_INFINITY),
            Err(ObservationError::NonFinite { .. })
        ));

        // No partial update on failure
        assert_eq!(moments, before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut moments = RunningMoments::new();
        moments.update(3.0).unwrap();
        moments.update(7.0).unwrap();

        moments.reset();
        let once = moments.clone();
        moments.reset();

        assert_eq!(moments, once);
        assert_eq!(moments, RunningMoments::new());
        assert_eq!(moments.snapshot(), batch_moments(&[]));
    }

    #[test]
    fn test_matches_batch_with_large_outlier() {
        // A single large outlier among small values is where the naive
        // sum-of-squares formula loses precision; Welford must not.
        let mut values: Vec<f64> = (0..500).map(|i| (i % 7) as f64 * 0.25).collect();
        values.push(1.5e6);

        let mut moments = RunningMoments::new();
        for &v in &values {
            moments.update(v).unwrap();
        }
        let reference = batch_moments(&values);

        let mean_err = (moments.mean() - reference.mean).abs() / reference.mean.abs();
        let var_err = (moments.variance() - reference.variance).abs() / reference.variance;
        assert!(mean_err < 1e-9, "mean relative error {mean_err}");
        assert!(var_err < 1e-9, "variance relative error {var_err}");
    }

    #[test]
    fn test_shifted_data_stability() {
        // Large common offset, small spread
        let base = 1e9;
        let mut moments = RunningMoments::new();
        let values: Vec<f64> = (0..1000).map(|i| base + (i % 10) as f64).collect();
        for &v in &values {
            moments.update(v).unwrap();
        }
        let reference = batch_moments(&values);

        assert!((moments.mean() - reference.mean).abs() / reference.mean < 1e-12);
        assert!((moments.variance() - reference.variance).abs() < 1e-6 * reference.variance);
        assert!(moments.variance() > 0.0);
    }

    #[test]
    fn test_update_returns_running_snapshot() {
        let mut moments = RunningMoments::new();
        let first = moments.update(10.0).unwrap();
        assert_eq!(first.count, 1);
        assert!((first.mean - 10.0).abs() < 1e-12);

        let second = moments.update(20.0).unwrap();
        assert_eq!(second.count, 2);
        assert!((second.mean - 15.0).abs() < 1e-12);
        assert!((second.variance - 25.0).abs() < 1e-12);
    }
}
