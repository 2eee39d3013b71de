//! Fixed-step trajectory integration with ground contact and rest detection.

use log::{debug, trace};
use nalgebra::Vector3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::physics::{BallForces, BallState, PhysicsError};

/// Relative tolerance when checking the sample grid for uniform spacing.
const GRID_SPACING_TOLERANCE: f64 = 1e-6;

/// Ball position at one sample time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Sample time [s]
    pub time: f64,
    /// Position [yd]
    pub position: Vector3<f64>,
}

/// Time-indexed ball positions, one sample per requested time, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    pub fn position_at(&self, index: usize) -> Option<Vector3<f64>> {
        self.samples.get(index).map(|s| s.position)
    }

    pub fn final_position(&self) -> Option<Vector3<f64>> {
        self.samples.last().map(|s| s.position)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Explicit Euler integrator with bounce and rest handling.
///
/// Advances a [`BallState`] across a uniform time grid, recording the position
/// at every sample. Ground impacts reflect the vertical velocity with the
/// configured restitution; once a grounded ball drops below the rest speed
/// threshold it is frozen for the remainder of the run.
pub struct TrajectoryIntegrator {
    forces: BallForces,
    radius: f64,
    restitution: f64,
    min_rest_speed: f64,
    eps: f64,
    /// When false, the ball stops dead where it first touches the ground
    pub bounce: bool,
}

impl TrajectoryIntegrator {
    pub fn new(config: &SimConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self::with_forces(config, BallForces::new(config)))
    }

    /// Build an integrator around a custom force model, e.g. one with
    /// individual force terms disabled.
    pub fn with_forces(config: &SimConfig, forces: BallForces) -> Self {
        Self {
            forces,
            radius: config.ball.radius,
            restitution: config.contact.restitution,
            min_rest_speed: config.contact.min_rest_speed,
            eps: config.eps,
            bounce: true,
        }
    }

    /// Compute the ball position at every sample time.
    ///
    /// `sample_times` must hold at least two strictly increasing, uniformly
    /// spaced values; the fixed integration step is their common gap.
    pub fn compute_trajectory(
        &self,
        initial_state: &BallState,
        sample_times: &[f64],
    ) -> Result<Trajectory, PhysicsError> {
        let delta_t = validate_time_grid(sample_times)?;
        Ok(self.run(initial_state, sample_times, delta_t))
    }

    /// Compute many independent trajectories over the same time grid.
    ///
    /// Runs are parallelized across states; each individual run stays
    /// sequential because of the step-to-step data dependency.
    pub fn compute_trajectories(
        &self,
        initial_states: &[BallState],
        sample_times: &[f64],
    ) -> Result<Vec<Trajectory>, PhysicsError> {
        let delta_t = validate_time_grid(sample_times)?;
        Ok(initial_states
            .par_iter()
            .map(|state| self.run(state, sample_times, delta_t))
            .collect())
    }

    fn run(&self, initial_state: &BallState, sample_times: &[f64], delta_t: f64) -> Trajectory {
        let mut samples = Vec::with_capacity(sample_times.len());
        let mut state = *initial_state;
        let mut at_rest = false;

        for &time in sample_times {
            samples.push(TrajectorySample {
                time,
                position: state.position,
            });

            if !at_rest && self.is_at_rest(&state) {
                debug!(
                    "ball at rest at t={:.3}s, position=({:.3}, {:.3}, {:.3})",
                    time, state.position.x, state.position.y, state.position.z
                );
                at_rest = true;
            }
            if at_rest {
                continue;
            }

            let derivative = self.forces.derivative(&state);
            let mut new_state = state.advance(&derivative, delta_t);

            // Ball crossed ground level while still moving downward
            if new_state.position.z <= self.radius && new_state.velocity.z < 0.0 {
                if self.bounce {
                    self.apply_bounce(&mut new_state, time);
                } else {
                    new_state.velocity = Vector3::zeros();
                    new_state.position.z = self.radius;
                    at_rest = true;
                }
            }

            state = new_state;
        }

        Trajectory { samples }
    }

    /// The rest transition requires ground proximity: a slow ball at the apex
    /// of a bounce, or released motionless in mid-air, must keep integrating.
    fn is_at_rest(&self, state: &BallState) -> bool {
        state.speed() < self.min_rest_speed && state.position.z <= self.radius + self.eps
    }

    fn apply_bounce(&self, state: &mut BallState, time: f64) {
        state.velocity.z = -self.restitution * state.velocity.z;
        state.position.z = self.radius + self.restitution * (self.radius - state.position.z);

        // Kill residual bounce jitter near rest
        if state.velocity.z.abs() < self.min_rest_speed {
            state.velocity.z = 0.0;
            state.position.z = self.radius;
        }
        trace!(
            "bounce near t={:.3}s, rebound vz={:.3} yd/s",
            time,
            state.velocity.z
        );
    }
}

fn validate_time_grid(sample_times: &[f64]) -> Result<f64, PhysicsError> {
    if sample_times.len() < 2 {
        return Err(PhysicsError::InvalidTimeGrid(
            "at least two sample times are required".into(),
        ));
    }

    let delta_t = sample_times[1] - sample_times[0];
    if !delta_t.is_finite() || delta_t <= 0.0 {
        return Err(PhysicsError::InvalidTimeGrid(
            "sample times must be strictly increasing".into(),
        ));
    }

    for window in sample_times.windows(2) {
        let gap = window[1] - window[0];
        if !gap.is_finite() || gap <= 0.0 {
            return Err(PhysicsError::InvalidTimeGrid(
                "sample times must be strictly increasing".into(),
            ));
        }
        if ((gap - delta_t) / delta_t).abs() > GRID_SPACING_TOLERANCE {
            return Err(PhysicsError::InvalidTimeGrid(format!(
                "non-uniform sample spacing: expected {delta_t}, found {gap}"
            )));
        }
    }

    Ok(delta_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_needs_two_samples() {
        assert!(matches!(
            validate_time_grid(&[0.0]),
            Err(PhysicsError::InvalidTimeGrid(_))
        ));
        assert!(validate_time_grid(&[]).is_err());
    }

    #[test]
    fn test_grid_must_increase() {
        assert!(validate_time_grid(&[0.0, 0.0]).is_err());
        assert!(validate_time_grid(&[0.0, 0.1, 0.05]).is_err());
    }

    #[test]
    fn test_grid_must_be_uniform() {
        assert!(validate_time_grid(&[0.0, 0.1, 0.3]).is_err());
    }

    #[test]
    fn test_uniform_grid_yields_first_gap() {
        let delta_t = validate_time_grid(&[0.0, 0.01, 0.02, 0.03]).unwrap();
        assert!((delta_t - 0.01).abs() < 1e-12);
    }
}
