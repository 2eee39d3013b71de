use ballflight::{BallState, SimConfig, TrajectoryIntegrator};
use nalgebra::Vector3;

/// Uniform time grid from `start` to `end` inclusive with step `dt`.
pub fn uniform_grid(start: f64, end: f64, dt: f64) -> Vec<f64> {
    let steps = ((end - start) / dt).round() as usize;
    (0..=steps).map(|i| start + i as f64 * dt).collect()
}

pub fn default_integrator() -> TrajectoryIntegrator {
    TrajectoryIntegrator::new(&SimConfig::default()).expect("default config must be valid")
}

/// Motionless ball released at the given height above the origin.
pub fn drop_state(height: f64) -> BallState {
    BallState::at_rest(Vector3::new(0.0, 0.0, height))
}

pub fn ball_radius() -> f64 {
    SimConfig::default().ball.radius
}
