//! Atmosphere and drag model for freefall.
//!
//! Air density follows the ISA troposphere barometric formula referenced to
//! sea level. The drop zone is assumed to be at sea level, so altitudes here
//! are heights above the DZ.

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DRAG_FACTOR, G_ACCEL_MPS2, ISA_LAPSE_RATE, ISA_SEA_LEVEL_TEMPERATURE,
    MOLAR_MASS_AIR, UNIVERSAL_GAS_CONSTANT,
};

/// Exponent of the temperature ratio in the barometric density equation
fn density_exponent() -> f64 {
    1.0 - G_ACCEL_MPS2 * MOLAR_MASS_AIR / UNIVERSAL_GAS_CONSTANT / ISA_LAPSE_RATE
}

/// Altitude (m) where the linear temperature profile reaches absolute zero
///
/// The density formula is only defined below this.
pub fn model_ceiling() -> f64 {
    ISA_SEA_LEVEL_TEMPERATURE / ISA_LAPSE_RATE
}

/// Air density (kg/m³) at the given altitude (m)
pub fn air_density(altitude_m: f64) -> f64 {
    let temperature_ratio =
        ISA_SEA_LEVEL_TEMPERATURE / (ISA_SEA_LEVEL_TEMPERATURE - ISA_LAPSE_RATE * altitude_m);
    AIR_DENSITY_SEA_LEVEL * temperature_ratio.powf(density_exponent())
}

/// Drag deceleration (m/s²) of a skydiver moving at `velocity_mps` through air at `altitude_m`
///
/// From the drag equation and Newton's second law:
/// a = 1/2 · ρ · v² · C_d · A / m, with everything but ρ and v folded into `DRAG_FACTOR`.
pub fn drag_acceleration(velocity_mps: f64, altitude_m: f64) -> f64 {
    DRAG_FACTOR * air_density(altitude_m) * velocity_mps * velocity_mps
}

/// Terminal velocity (m/s) at the given altitude, where drag balances gravity
pub fn terminal_velocity(altitude_m: f64) -> f64 {
    (G_ACCEL_MPS2 / (DRAG_FACTOR * air_density(altitude_m))).sqrt()
}
