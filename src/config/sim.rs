use serde::{Deserialize, Serialize};

use crate::config::ball::BallConfig;
use crate::config::contact::ContactConfig;
use crate::environment::AtmosphereConfig;
use crate::physics::PhysicsError;
use crate::utils::constants;

/// Complete configuration for a trajectory simulation.
///
/// Constructed once at startup and passed by reference into the model; the
/// defaults reproduce the standard soccer-ball parameter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ball: BallConfig,
    pub contact: ContactConfig,
    pub atmosphere: AtmosphereConfig,
    /// Gravitational acceleration magnitude [yd/s^2]
    pub gravity: f64,
    /// Guard for divisions and near-zero velocity comparisons
    pub eps: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball: BallConfig::default(),
            contact: ContactConfig::default(),
            atmosphere: AtmosphereConfig::default(),
            gravity: constants::GRAVITY_MAG,
            eps: constants::EPS,
        }
    }
}

impl SimConfig {
    /// Load a configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, PhysicsError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| PhysicsError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for physically meaningless values.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.ball.radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Ball radius must be positive".into(),
            ));
        }
        if self.ball.mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Ball mass must be positive".into(),
            ));
        }
        if self.ball.drag_coefficient < 0.0 || self.ball.lift_coefficient < 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Aerodynamic coefficients must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.contact.restitution) {
            return Err(PhysicsError::InvalidParameter(
                "Restitution must be within [0, 1]".into(),
            ));
        }
        if self.contact.friction_coefficient < 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Friction coefficient must be non-negative".into(),
            ));
        }
        if self.contact.min_rest_speed < 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Rest speed threshold must be non-negative".into(),
            ));
        }
        if self.gravity <= 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Gravity magnitude must be positive".into(),
            ));
        }
        if self.eps <= 0.0 {
            return Err(PhysicsError::InvalidParameter(
                "Epsilon must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let mut config = SimConfig::default();
        config.ball.mass = 0.0;
        assert!(matches!(
            config.validate(),
            Err(PhysicsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_restitution() {
        let mut config = SimConfig::default();
        config.contact.restitution = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SimConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded = SimConfig::from_yaml(&yaml).unwrap();

        assert_eq!(loaded.ball.radius, config.ball.radius);
        assert_eq!(loaded.contact.restitution, config.contact.restitution);
        assert_eq!(loaded.gravity, config.gravity);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loaded = SimConfig::from_yaml("gravity: 9.8\n").unwrap();
        assert_eq!(loaded.gravity, 9.8);
        assert_eq!(loaded.ball.mass, BallConfig::default().mass);
    }

    #[test]
    fn test_malformed_yaml_is_a_config_error() {
        assert!(matches!(
            SimConfig::from_yaml("gravity: [not a number"),
            Err(PhysicsError::ConfigError(_))
        ));
    }
}
