use serde::{Deserialize, Serialize};

use crate::utils::constants;

/// Ambient air conditions, used to derive air density once at setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    /// Air temperature [°C]
    pub temperature_c: f64,
    /// Air pressure [mb]
    pub pressure_mb: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            temperature_c: constants::STANDARD_TEMPERATURE_C,
            pressure_mb: constants::STANDARD_PRESSURE_MB,
        }
    }
}

impl AtmosphereConfig {
    /// Air density from the ideal gas law, in the model's yard unit system.
    ///
    /// `rho = P / (R_dry * T)` in kg/m^3, then rescaled by the yard-to-meter
    /// factor the rest of the model uses.
    pub fn air_density(&self) -> f64 {
        let p_pa = self.pressure_mb * constants::MB_TO_PA;
        let t_k = self.temperature_c + constants::CELSIUS_TO_KELVIN;
        let rho_kg_m3 = p_pa / (constants::DRY_AIR_GAS_CONSTANT * t_k);
        rho_kg_m3 / constants::METERS_PER_YARD.powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_density_is_positive() {
        let rho = AtmosphereConfig::default().air_density();
        assert!(rho > 0.0);
        assert!(rho.is_finite());
    }

    #[test]
    fn test_cold_air_is_denser() {
        let warm = AtmosphereConfig {
            temperature_c: 30.0,
            ..AtmosphereConfig::default()
        };
        let cold = AtmosphereConfig {
            temperature_c: -10.0,
            ..AtmosphereConfig::default()
        };
        assert!(cold.air_density() > warm.air_density());
    }

    #[test]
    fn test_density_scales_with_pressure() {
        let low = AtmosphereConfig {
            pressure_mb: 950.0,
            ..AtmosphereConfig::default()
        };
        let high = AtmosphereConfig {
            pressure_mb: 1040.0,
            ..AtmosphereConfig::default()
        };
        assert!(high.air_density() > low.air_density());
    }
}
