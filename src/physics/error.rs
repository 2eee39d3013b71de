use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid time grid: {0}")]
    InvalidTimeGrid(String),

    #[error("Model configuration error: {0}")]
    ConfigError(String),
}
