mod ball;
mod contact;
mod sim;

pub use ball::BallConfig;
pub use contact::ContactConfig;
pub use sim::SimConfig;
