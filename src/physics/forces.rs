use nalgebra::Vector3;

use crate::config::SimConfig;
use crate::physics::state::{BallState, StateDerivative};

/// Force model for a spinning ball in air.
///
/// Combines gravity, ground friction, quadratic drag and the Magnus effect.
/// All inputs are resolved from a [`SimConfig`] at construction, including the
/// `0.5 * rho * A` air factor which is computed exactly once.
pub struct BallForces {
    gravity: f64,
    mass: f64,
    radius: f64,
    drag_coefficient: f64,
    lift_coefficient: f64,
    friction_coefficient: f64,
    /// Precomputed `0.5 * air_density * cross_section` [kg/yd]
    air_ball_const: f64,
    eps: f64,

    /// Enable/disable individual force terms (useful for testing)
    pub enable_friction: bool,
    pub enable_drag: bool,
    pub enable_magnus: bool,
}

impl BallForces {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            gravity: config.gravity,
            mass: config.ball.mass,
            radius: config.ball.radius,
            drag_coefficient: config.ball.drag_coefficient,
            lift_coefficient: config.ball.lift_coefficient,
            friction_coefficient: config.contact.friction_coefficient,
            air_ball_const: 0.5 * config.atmosphere.air_density() * config.ball.cross_section(),
            eps: config.eps,
            enable_friction: true,
            enable_drag: true,
            enable_magnus: true,
        }
    }

    /// Create a force model with every aerodynamic and contact term disabled.
    pub fn gravity_only(config: &SimConfig) -> Self {
        Self {
            enable_friction: false,
            enable_drag: false,
            enable_magnus: false,
            ..Self::new(config)
        }
    }

    /// Constant gravitational acceleration, straight down.
    pub fn gravity_acceleration(&self) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, -self.gravity)
    }

    /// Rolling/sliding friction deceleration, opposing the horizontal velocity.
    ///
    /// Magnitude is `mu * g`; the vertical component is always zero. Returns
    /// zero when the ball has no horizontal motion.
    pub fn friction_acceleration(&self, velocity: &Vector3<f64>) -> Vector3<f64> {
        let v_norm_xy = (velocity.x.powi(2) + velocity.y.powi(2)).sqrt();
        if v_norm_xy == 0.0 {
            return Vector3::zeros();
        }
        let a_fric_mag = self.friction_coefficient * self.gravity;
        Vector3::new(
            -a_fric_mag * (velocity.x / v_norm_xy),
            -a_fric_mag * (velocity.y / v_norm_xy),
            0.0,
        )
    }

    /// Quadratic aerodynamic drag, opposing the velocity.
    ///
    /// `F = 0.5 * rho * Cd * A * v^2`, `a = F / m`. Returns zero below the
    /// epsilon speed so a motionless ball picks up no spurious acceleration.
    pub fn drag_acceleration(&self, velocity: &Vector3<f64>) -> Vector3<f64> {
        let v_norm = velocity.norm();
        if v_norm < self.eps {
            return Vector3::zeros();
        }
        let drag_force_mag = self.air_ball_const * self.drag_coefficient * v_norm.powi(2);
        let drag_acc_mag = drag_force_mag / self.mass;
        velocity * (-drag_acc_mag / v_norm)
    }

    /// Spin-induced Magnus lift: `Cl * 0.5 * rho * A * (omega x v) / m`.
    ///
    /// Direction follows the right-hand cross product of spin and velocity,
    /// so backspin on a horizontally moving ball lifts it upward.
    pub fn magnus_acceleration(&self, velocity: &Vector3<f64>, spin: &Vector3<f64>) -> Vector3<f64> {
        spin.cross(velocity) * (self.lift_coefficient * self.air_ball_const / self.mass)
    }

    /// Evaluate the full state derivative at `state`.
    ///
    /// When the ball is on the ground and not moving upward, gravity is
    /// cancelled by the normal force and friction applies while the vertical
    /// velocity is negligible. Airborne, gravity is in full effect and the
    /// ground exerts no friction. Drag and Magnus act in either regime.
    pub fn derivative(&self, state: &BallState) -> StateDerivative {
        let on_ground = state.position.z <= self.radius && state.velocity.z < self.eps;

        let mut acceleration = if on_ground {
            Vector3::zeros()
        } else {
            self.gravity_acceleration()
        };

        if on_ground && self.enable_friction && state.velocity.z.abs() < self.eps {
            acceleration += self.friction_acceleration(&state.velocity);
        }
        if self.enable_drag {
            acceleration += self.drag_acceleration(&state.velocity);
        }
        if self.enable_magnus {
            acceleration += self.magnus_acceleration(&state.velocity, &state.spin);
        }

        StateDerivative {
            velocity: state.velocity,
            spin: state.spin,
            acceleration,
            angular_acceleration: Vector3::zeros(),
        }
    }
}
