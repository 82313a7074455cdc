//! Discretized Wiener process simulation.
//!
//! Euler–Maruyama discretization of standard Brownian motion: a path of
//! `n` steps over horizon `T` advances by `sqrt(T/n) * z` per step for
//! standard normal `z`. Each marginal increment is exactly
//! `Normal(0, dt)`; the path between grid points is not simulated.

use super::{NormalSource, SimulationError};

/// A validated Brownian path discretization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSpec {
    horizon: f64,
    steps: usize,
}

impl PathSpec {
    /// Creates a discretization of `steps` steps over `[0, horizon]`.
    ///
    /// The horizon must be positive and finite; at least one step is
    /// required.
    pub fn new(horizon: f64, steps: usize) -> Result<Self, SimulationError> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(SimulationError::InvalidHorizon { value: horizon });
        }
        if steps == 0 {
            return Err(SimulationError::InvalidStepCount);
        }
        Ok(Self { horizon, steps })
    }

    /// The time horizon `T`.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// The number of discrete steps `n`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step size `dt = T / n`.
    pub fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }

    /// The time grid `0, dt, 2dt, ..., T` (`n + 1` points).
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.dt();
        (0..=self.steps).map(|i| i as f64 * dt).collect()
    }

    /// Samples the `n` independent increments of one path.
    ///
    /// Each increment is `sqrt(dt) * z` for a standard normal `z`.
    pub fn sample_increments(&self, normals: &mut NormalSource) -> Vec<f64> {
        let scale = self.dt().sqrt();
        (0..self.steps)
            .map(|_| scale * normals.next_normal())
            .collect()
    }

    /// Samples one path as the running sum of increments, starting at 0.
    ///
    /// Returns `n + 1` values aligned with [`time_grid`](Self::time_grid).
    pub fn sample_path(&self, normals: &mut NormalSource) -> Vec<f64> {
        let mut path = Vec::with_capacity(self.steps + 1);
        let mut position = 0.0;
        path.push(position);
        for increment in self.sample_increments(normals) {
            position += increment;
            path.push(position);
        }
        path
    }

    /// Samples `count` independent paths from the same normal stream.
    pub fn sample_paths(&self, count: usize, normals: &mut NormalSource) -> Vec<Vec<f64>> {
        tracing::debug!(
            paths = count,
            steps = self.steps,
            horizon = self.horizon,
            "Sampling Brownian paths"
        );
        (0..count).map(|_| self.sample_path(normals)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::UniformSource;
    use crate::statistics::RunningMoments;

    fn normals(seed: u64) -> NormalSource {
        NormalSource::new(UniformSource::from_seed(seed))
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            PathSpec::new(0.0, 100),
            Err(SimulationError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            PathSpec::new(-1.0, 100),
            Err(SimulationError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            PathSpec::new(f64::NAN, 100),
            Err(SimulationError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            PathSpec::new(1.0, 0),
            Err(SimulationError::InvalidStepCount)
        ));
    }

    #[test]
    fn test_grid_shape() {
        let spec = PathSpec::new(2.0, 4).unwrap();
        assert!((spec.dt() - 0.5).abs() < 1e-12);

        let grid = spec.time_grid();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], 0.0);
        assert!((grid[4] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_path_starts_at_origin_and_has_full_length() {
        let spec = PathSpec::new(1.0, 1000).unwrap();
        let path = spec.sample_path(&mut normals(11));

        assert_eq!(path.len(), 1001);
        assert_eq!(path[0], 0.0);
    }

    #[test]
    fn test_path_is_cumulative_sum_of_increments() {
        let spec = PathSpec::new(1.0, 64).unwrap();

        // Identical seeds: the path must be the prefix sums of the increments
        let increments = spec.sample_increments(&mut normals(5));
        let path = spec.sample_path(&mut normals(5));

        let mut sum = 0.0;
        for (i, &inc) in increments.iter().enumerate() {
            sum += inc;
            assert!((path[i + 1] - sum).abs() < 1e-12);
        }
    }

    #[test]
    fn test_increment_distribution_matches_dt() {
        // Increments are exactly Normal(0, dt), so over 20000 draws the
        // empirical variance lands within 10% of dt and the mean within
        // 0.1*sqrt(dt) of zero.
        let spec = PathSpec::new(1.0, 20_000).unwrap();
        let dt = spec.dt();

        let mut moments = RunningMoments::new();
        for increment in spec.sample_increments(&mut normals(2024)) {
            moments.update(increment).unwrap();
        }

        assert!(moments.mean().abs() < 0.1 * dt.sqrt(), "mean {}", moments.mean());
        let ratio = moments.variance() / dt;
        assert!((0.9..1.1).contains(&ratio), "variance ratio {ratio}");
    }

    #[test]
    fn test_multiple_paths_are_independent_draws() {
        let spec = PathSpec::new(1.0, 128).unwrap();
        let paths = spec.sample_paths(3, &mut normals(77));

        assert_eq!(paths.len(), 3);
        assert_ne!(paths[0], paths[1]);
        assert_ne!(paths[1], paths[2]);
    }
}
