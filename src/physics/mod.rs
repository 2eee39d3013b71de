mod error;
mod forces;
mod state;

pub use error::PhysicsError;
pub use forces::BallForces;
pub use state::{BallState, StateDerivative};
