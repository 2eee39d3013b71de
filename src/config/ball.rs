use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::utils::constants;

/// Physical properties of the ball.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallConfig {
    /// Ball radius [yd]
    pub radius: f64,
    /// Ball mass [kg]
    pub mass: f64,
    /// Quadratic drag coefficient Cd
    pub drag_coefficient: f64,
    /// Magnus lift coefficient Cl
    pub lift_coefficient: f64,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: constants::BALL_RADIUS,
            mass: constants::BALL_MASS,
            drag_coefficient: constants::QUADRATIC_DRAG_COEFF,
            lift_coefficient: constants::MAGNUS_LIFT_COEFF,
        }
    }
}

impl BallConfig {
    /// Cross-sectional area [yd^2]
    pub fn cross_section(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
