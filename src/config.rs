//! Jump configuration: altitudes, speeds and briefing lead times.

use serde::{Deserialize, Serialize};

use crate::atmosphere::model_ceiling;
use crate::error::{SpotError, SpotResult};
use crate::units::kt_to_mps;

/// Parameters of a jump run. All values are SI (meters, seconds, m/s).
///
/// Deployment altitude is where the canopy is fully open, not where the
/// jumper starts deploying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotConfig {
    pub exit_altitude: f64,           // meters
    pub deployment_altitude: f64,     // meters
    pub final_altitude: f64,          // meters, pattern entry
    pub jump_run_airspeed: f64,       // m/s, true airspeed on jump run
    pub red_light_time: f64,          // seconds before green light
    pub green_light_time: f64,        // seconds from green light to first exit
    pub horizontal_canopy_speed: f64, // m/s
    pub vertical_canopy_speed: f64,   // m/s
    pub meters_between_groups: f64,   // meters
    pub min_time_between_groups: f64, // seconds
}

impl Default for SpotConfig {
    fn default() -> Self {
        Self {
            exit_altitude: 4000.0,
            deployment_altitude: 700.0,
            final_altitude: 100.0,
            jump_run_airspeed: kt_to_mps(93.0),
            // Two minutes are wanted, but the aircraft flies faster than
            // jump_run_airspeed until it slows down for the run
            red_light_time: 150.0,
            green_light_time: 10.0,
            horizontal_canopy_speed: 9.0,
            vertical_canopy_speed: 4.0,
            meters_between_groups: 250.0,
            min_time_between_groups: 5.0,
        }
    }
}

impl SpotConfig {
    /// Check that every value is usable by the simulations
    pub fn validate(&self) -> SpotResult<()> {
        let fields = [
            ("exit_altitude", self.exit_altitude),
            ("deployment_altitude", self.deployment_altitude),
            ("final_altitude", self.final_altitude),
            ("jump_run_airspeed", self.jump_run_airspeed),
            ("red_light_time", self.red_light_time),
            ("green_light_time", self.green_light_time),
            ("horizontal_canopy_speed", self.horizontal_canopy_speed),
            ("vertical_canopy_speed", self.vertical_canopy_speed),
            ("meters_between_groups", self.meters_between_groups),
            ("min_time_between_groups", self.min_time_between_groups),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SpotError::InvalidInput(format!("{name} must be finite, got {value}")));
            }
        }

        // The canopy simulation climbs by this much per step
        if self.vertical_canopy_speed <= 0.0 {
            return Err(SpotError::InvalidInput(format!(
                "vertical_canopy_speed must be > 0, got {}",
                self.vertical_canopy_speed
            )));
        }

        if self.exit_altitude >= model_ceiling() {
            return Err(SpotError::InvalidInput(format!(
                "exit_altitude must be below {:.0} m, got {}",
                model_ceiling(),
                self.exit_altitude
            )));
        }

        let non_negative = [
            ("jump_run_airspeed", self.jump_run_airspeed),
            ("red_light_time", self.red_light_time),
            ("green_light_time", self.green_light_time),
            ("horizontal_canopy_speed", self.horizontal_canopy_speed),
            ("meters_between_groups", self.meters_between_groups),
            ("min_time_between_groups", self.min_time_between_groups),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(SpotError::InvalidInput(format!("{name} must be >= 0, got {value}")));
            }
        }

        Ok(())
    }
}
