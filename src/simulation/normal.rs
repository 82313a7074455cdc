//! Box-Muller normal variate generation.
//!
//! Converts two independent uniforms into two independent standard
//! normals via the polar-coordinate parameterization. Normals are
//! produced in pairs; [`NormalSource`] caches the spare so nothing is
//! wasted when callers ask for one at a time.

use super::{SimulationError, UniformSource};

/// Transforms two uniforms into two independent standard normals.
///
/// `r = sqrt(-2 ln u)`, `theta = 2π v`; returns `(r cos θ, r sin θ)`.
///
/// `u` must lie in `(0, 1]` — the logarithm is undefined at zero — and
/// both inputs must be finite. `u = 1, v = 0` yields exactly `(0, 0)`.
pub fn box_muller(u: f64, v: f64) -> Result<(f64, f64), SimulationError> {
    if !u.is_finite() {
        return Err(SimulationError::NonFinite { value: u });
    }
    if !v.is_finite() {
        return Err(SimulationError::NonFinite { value: v });
    }
    if u <= 0.0 || u > 1.0 {
        return Err(SimulationError::UniformOutOfRange { value: u });
    }

    let r = (-2.0 * u.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * v;
    Ok((r * theta.cos(), r * theta.sin()))
}

/// A stream of standard normal variates.
///
/// Draws uniforms from a [`UniformSource`] and applies [`box_muller`],
/// handing out the two resulting normals one at a time. Exactly one
/// pair is generated per two uniforms consumed; an odd demand leaves
/// the spare cached for the next call.
#[derive(Debug)]
pub struct NormalSource {
    /// Uniform supply.
    uniforms: UniformSource,
    /// Second half of the last generated pair, if unconsumed.
    spare: Option<f64>,
}

impl NormalSource {
    /// Wraps a uniform source.
    pub fn new(uniforms: UniformSource) -> Self {
        Self {
            uniforms,
            spare: None,
        }
    }

    /// Returns the next standard normal variate.
    pub fn next_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        let (z0, z1) = self.next_pair();
        self.spare = Some(z1);
        z0
    }

    /// Generates a fresh pair of independent standard normals.
    ///
    /// Bypasses the spare cache; both values come from the same
    /// transform invocation.
    pub fn next_pair(&mut self) -> (f64, f64) {
        let u = self.uniforms.next_open_unit();
        let v = self.uniforms.next_unit();
        // Inputs are in-domain by construction of the source.
        match box_muller(u, v) {
            Ok(pair) => pair,
            Err(_) => (0.0, 0.0),
        }
    }

    /// Discards any cached spare variate.
    pub fn clear_spare(&mut self) {
        self.spare = None;
    }
}
