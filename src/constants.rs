/// Physical and operational constants used in spot calculations

/// Gravitational acceleration in m/s² as used by the freefall model
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// ISA sea level temperature (K)
pub const ISA_SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// ISA troposphere temperature lapse rate (K/m)
pub const ISA_LAPSE_RATE: f64 = 0.0065;

/// Molar mass of dry air (kg/mol)
pub const MOLAR_MASS_AIR: f64 = 0.0289644;

/// Universal gas constant (J/(mol·K))
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.3144598;

/// Lumped drag factor for a belly-to-earth skydiver (m²/kg)
///
/// Combines 1/2 · C_d · A / m into a single coefficient so that
/// a_drag = DRAG_FACTOR · ρ · v².
///
/// Value: 0.003 was chosen for a terminal velocity of about 199 km/h at 1200 m,
/// the reference altitude used for standard freefall tables. The DZ is
/// assumed to be at sea level.
pub const DRAG_FACTOR: f64 = 0.003;

/// Reference altitude for the drag calibration (m)
pub const DRAG_REFERENCE_ALTITUDE: f64 = 1200.0;

/// Integration step for the freefall simulation (s)
pub const FREEFALL_TIME_STEP: f64 = 0.2;

/// Integration step for the canopy simulation (s)
pub const CANOPY_TIME_STEP: f64 = 1.0;

// Unit conversions

/// Conversion factor: nautical miles to meters
pub const NM_TO_M: f64 = 1852.0;

/// Conversion factor: knots to meters per second
pub const KT_TO_MPS: f64 = 1852.0 / 3600.0;

/// Conversion factor: feet to meters
pub const FT_TO_M: f64 = 0.3048;

// Rounding quanta for briefed values

/// Offsets and distances are briefed in tenths of a nautical mile
pub const OFFSET_ROUNDING_M: f64 = 0.1 * NM_TO_M;

/// Tracks are briefed in 5° increments
pub const TRACK_ROUNDING_RAD: f64 = 5.0 * std::f64::consts::PI / 180.0;
