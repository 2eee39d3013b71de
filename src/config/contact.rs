use serde::{Deserialize, Serialize};

use crate::utils::constants;

/// Ground interaction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Fraction of vertical speed retained (and reversed) on each bounce
    pub restitution: f64,
    /// Rolling/sliding friction coefficient mu
    pub friction_coefficient: f64,
    /// Speed below which a grounded ball is frozen for the rest of the run [yd/s]
    pub min_rest_speed: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            restitution: constants::COEF_RESTITUTION,
            friction_coefficient: constants::MU_FRICTION,
            min_rest_speed: constants::MIN_REST_SPEED,
        }
    }
}
