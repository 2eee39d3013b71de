use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Full kinematic state of the ball.
///
/// Twelve components, logically four 3-vectors. `orientation` is the raw
/// integral of angular velocity; it is carried through integration but never
/// consumed by the force model and is not renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    /// Position in yards, z = height above ground
    pub position: Vector3<f64>,
    /// Integrated angular displacement [rad]
    pub orientation: Vector3<f64>,
    /// Velocity [yd/s]
    pub velocity: Vector3<f64>,
    /// Angular velocity [rad/s]
    pub spin: Vector3<f64>,
}

impl BallState {
    /// Create a state with zero initial orientation.
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, spin: Vector3<f64>) -> Self {
        Self {
            position,
            orientation: Vector3::zeros(),
            velocity,
            spin,
        }
    }

    /// Create a motionless state at the given position.
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self::new(position, Vector3::zeros(), Vector3::zeros())
    }

    /// Total speed magnitude [yd/s].
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Advance every component by explicit Euler: `state + derivative * dt`.
    pub fn advance(&self, derivative: &StateDerivative, dt: f64) -> Self {
        Self {
            position: self.position + derivative.velocity * dt,
            orientation: self.orientation + derivative.spin * dt,
            velocity: self.velocity + derivative.acceleration * dt,
            spin: self.spin + derivative.angular_acceleration * dt,
        }
    }
}

/// Time derivative of a [`BallState`], same twelve-component shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDerivative {
    pub velocity: Vector3<f64>,
    pub spin: Vector3<f64>,
    pub acceleration: Vector3<f64>,
    /// Always zero: no torque is modeled, spin only changes through contact
    pub angular_acceleration: Vector3<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler_advance() {
        let state = BallState::new(
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 5.0, 0.0),
        );
        let derivative = StateDerivative {
            velocity: state.velocity,
            spin: state.spin,
            acceleration: Vector3::new(0.0, 0.0, -10.0),
            angular_acceleration: Vector3::zeros(),
        };

        let next = state.advance(&derivative, 0.1);

        assert_relative_eq!(next.position.x, 0.2);
        assert_relative_eq!(next.position.z, 1.0);
        assert_relative_eq!(next.velocity.z, -1.0);
        assert_relative_eq!(next.orientation.y, 0.5);
        assert_relative_eq!(next.spin.y, 5.0);
    }

    #[test]
    fn test_at_rest_has_no_motion() {
        let state = BallState::at_rest(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(state.speed(), 0.0);
        assert_eq!(state.spin, Vector3::zeros());
        assert_eq!(state.orientation, Vector3::zeros());
    }
}
