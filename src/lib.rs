//! Deterministic flight simulation for a spinning ball.
//!
//! Given an initial kinematic state and a uniform time grid, the crate
//! integrates gravity, quadratic drag, Magnus lift, ground friction and an
//! inelastic bounce model with a fixed-step explicit Euler scheme, producing
//! the ball position at every sample time.

pub mod config;
pub mod environment;
pub mod physics;
pub mod trajectory;
pub mod utils;

pub use config::{BallConfig, ContactConfig, SimConfig};
pub use environment::AtmosphereConfig;
pub use physics::{BallForces, BallState, PhysicsError, StateDerivative};
pub use trajectory::{Trajectory, TrajectoryIntegrator, TrajectorySample};
