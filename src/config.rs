//! Demo run configuration.
//!
//! TOML-backed settings for the command-line demos, one section per
//! experiment. Every section has sensible classroom defaults so a
//! missing file or a partial file still runs.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation and loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("horizon must be positive and finite")]
    InvalidHorizon,
    #[error("step and run counts must be at least 1")]
    InvalidCounts,
    #[error("rate must be positive and finite")]
    InvalidRate,
    #[error("probability must be in [0, 1]")]
    InvalidProbability,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Brownian motion demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrownianConfig {
    /// Time horizon `T`.
    pub horizon: f64,
    /// Number of discretization steps.
    pub steps: usize,
    /// Number of independent paths.
    pub paths: usize,
}

impl Default for BrownianConfig {
    fn default() -> Self {
        Self {
            horizon: 1.0,
            steps: 2000,
            paths: 1,
        }
    }
}

/// Poisson counting demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoissonConfig {
    /// Process rate λ.
    pub rate: f64,
    /// Bernoulli subintervals per run.
    pub subintervals: usize,
    /// Number of simulation runs.
    pub runs: usize,
}

impl Default for PoissonConfig {
    fn default() -> Self {
        Self {
            rate: 4.0,
            subintervals: 5000,
            runs: 1000,
        }
    }
}

/// Random walk demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Steps per trajectory.
    pub trials: usize,
    /// Per-step success probability.
    pub probability: f64,
    /// Number of trajectories.
    pub simulations: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            trials: 50,
            probability: 0.3,
            simulations: 200,
        }
    }
}

/// Toy RSA demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsaConfig {
    /// First prime.
    pub p: u64,
    /// Second prime.
    pub q: u64,
}

impl Default for RsaConfig {
    fn default() -> Self {
        // The textbook example pair
        Self { p: 61, q: 53 }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    /// Optional seed phrase; empty means OS entropy.
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub brownian: BrownianConfig,
    #[serde(default)]
    pub poisson: PoissonConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub rsa: RsaConfig,
}

impl DemoConfig {
    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.brownian.horizon.is_finite() || self.brownian.horizon <= 0.0 {
            return Err(ConfigError::InvalidHorizon);
        }
        if self.brownian.steps == 0
            || self.brownian.paths == 0
            || self.poisson.subintervals == 0
            || self.poisson.runs == 0
            || self.walk.trials == 0
            || self.walk.simulations == 0
        {
            return Err(ConfigError::InvalidCounts);
        }
        if !self.poisson.rate.is_finite() || self.poisson.rate <= 0.0 {
            return Err(ConfigError::InvalidRate);
        }
        if !(0.0..=1.0).contains(&self.walk.probability) {
            return Err(ConfigError::InvalidProbability);
        }
        Ok(())
    }

    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: DemoConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
