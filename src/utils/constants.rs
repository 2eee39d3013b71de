use std::f64::consts::PI;

// The model works in yards to match the pitch geometry it feeds.
pub const GRAVITY_MAG: f64 = 10.72; // yd/s^2

pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05; // J/(kg·K)
pub const STANDARD_TEMPERATURE_C: f64 = 20.0; // °C
pub const STANDARD_PRESSURE_MB: f64 = 1013.25; // mb
pub const MB_TO_PA: f64 = 100.0;
pub const CELSIUS_TO_KELVIN: f64 = 273.15;
pub const METERS_PER_YARD: f64 = 0.9144;

// Regulation soccer ball
pub const BALL_CIRCUMFERENCE: f64 = 29.5 / 36.0; // yd
pub const BALL_RADIUS: f64 = BALL_CIRCUMFERENCE / (2.0 * PI); // yd
pub const BALL_MASS: f64 = 0.62; // kg

// Aerodynamic and contact coefficients
pub const QUADRATIC_DRAG_COEFF: f64 = 0.47;
pub const MAGNUS_LIFT_COEFF: f64 = 0.1;
pub const MU_FRICTION: f64 = 0.1;
pub const COEF_RESTITUTION: f64 = 0.7;

// Speed below which a grounded ball is considered at rest. Must stay well
// above gravity * delta_t or near-ground bounces can cycle without settling.
pub const MIN_REST_SPEED: f64 = 1.5; // yd/s

// Guard for divisions and near-zero velocity comparisons
pub const EPS: f64 = 1e-3;
