//! Conversions between aviation briefing units and the SI units used internally.

use crate::constants::{FT_TO_M, NM_TO_M};

/// Knots to m/s
pub fn kt_to_mps(kt: f64) -> f64 {
    kt * NM_TO_M / 3600.0
}

/// m/s to knots
pub fn mps_to_kt(mps: f64) -> f64 {
    mps * 3600.0 / NM_TO_M
}

/// Feet to meters
pub fn ft_to_m(ft: f64) -> f64 {
    ft * FT_TO_M
}

/// Meters to feet
pub fn m_to_ft(m: f64) -> f64 {
    m / FT_TO_M
}

/// Nautical miles to meters
pub fn nm_to_m(nm: f64) -> f64 {
    nm * NM_TO_M
}

/// Meters to nautical miles
pub fn m_to_nm(m: f64) -> f64 {
    m / NM_TO_M
}

/// Bearing in whole-circle degrees for briefing, where north reads 360 rather than 0
pub fn bearing_deg(rad: f64) -> f64 {
    let deg = crate::angles::normalize_angle(rad).to_degrees();
    if deg == 0.0 {
        360.0
    } else {
        deg
    }
}

/// Unit system for CLI input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Meters, m/s, degrees
    #[default]
    Si,
    /// Feet, knots, degrees, nautical miles
    Aviation,
}

impl UnitSystem {
    pub fn altitude_to_m(self, value: f64) -> f64 {
        match self {
            UnitSystem::Si => value,
            UnitSystem::Aviation => ft_to_m(value),
        }
    }

    pub fn speed_to_mps(self, value: f64) -> f64 {
        match self {
            UnitSystem::Si => value,
            UnitSystem::Aviation => kt_to_mps(value),
        }
    }

    pub fn distance_to_m(self, value: f64) -> f64 {
        match self {
            UnitSystem::Si => value,
            UnitSystem::Aviation => nm_to_m(value),
        }
    }

    pub fn distance_from_m(self, value: f64) -> f64 {
        match self {
            UnitSystem::Si => value,
            UnitSystem::Aviation => m_to_nm(value),
        }
    }

    pub fn distance_label(self) -> &'static str {
        match self {
            UnitSystem::Si => "m",
            UnitSystem::Aviation => "NM",
        }
    }
}
