//! Spot calculation: from a wind profile and jump configuration to the line
//! of flight, exit point, red light and group spacing.
//!
//! Conventions:
//! - Units are meters, seconds, m/s and radians.
//! - The origin is the DZ; x increases to the east and y to the north.
//! - Angles increase clockwise from north.
//! - Wind directions are where the wind is coming *from*.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::angles::normalize_angle;
use crate::canopy::{deployment_circle, landing_direction, Circle};
use crate::config::SpotConfig;
use crate::error::{SpotError, SpotResult};
use crate::freefall::simulate_freefall;
use crate::jump_run::{round_offset, solve_jump_run};
use crate::navigation::speed_over_ground;
use crate::wind::{Wind, WindEstimator};

/// Everything a single spot calculation needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotInput {
    pub winds: Vec<Wind>,
    pub fixed_track: Option<f64>,             // radians
    pub fixed_transverse_offset: Option<f64>, // meters, right of track
    /// Radians; the closest one to the ground wind is used
    pub allowed_landing_directions: Option<Vec<f64>>,
    pub config: SpotConfig,
}

/// Red light position relative to the DZ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedLight {
    pub bearing: f64,  // radians, from the DZ
    pub distance: f64, // meters
}

/// Result of a spot calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    /// Line of flight (radians)
    pub track: f64,
    /// Distance along track from abeam the DZ to the green light point
    /// (meters, positive past the DZ)
    pub longitudinal_offset: f64,
    /// Distance of the line of flight right of the DZ (meters)
    pub transverse_offset: f64,
    pub landing_direction: f64,
    pub deployment_circle: Circle,
    pub exit_circle: Circle,
    pub red_light: RedLight,
    /// Seconds between groups; infinite when groups cannot separate
    #[serde(with = "unbounded_seconds")]
    pub time_between_groups: f64,
    /// Seconds spent crossing the exit circle
    pub jump_run_duration: f64,
}

/// Spot calculator over one validated input
#[derive(Debug, Clone)]
pub struct SpotCalculator {
    wind: WindEstimator,
    config: SpotConfig,
    fixed_track: Option<f64>,
    fixed_transverse_offset: Option<f64>,
    allowed_landing_directions: Option<Vec<f64>>,
}

impl SpotCalculator {
    pub fn new(input: SpotInput) -> SpotResult<Self> {
        input.config.validate()?;
        check_finite("fixed_track", input.fixed_track)?;
        check_finite("fixed_transverse_offset", input.fixed_transverse_offset)?;
        if let Some(directions) = &input.allowed_landing_directions {
            if directions.iter().any(|d| !d.is_finite()) {
                return Err(SpotError::InvalidInput(
                    "allowed_landing_directions must be finite".to_string(),
                ));
            }
        }

        Ok(Self {
            wind: WindEstimator::new(input.winds)?,
            config: input.config,
            fixed_track: input.fixed_track,
            fixed_transverse_offset: input.fixed_transverse_offset,
            allowed_landing_directions: input.allowed_landing_directions,
        })
    }

    pub fn calculate(&self) -> SpotResult<Spot> {
        let config = &self.config;

        let landing_direction =
            landing_direction(&self.wind, self.allowed_landing_directions.as_deref());
        debug!(landing_direction, "landing direction");

        let deployment_circle = deployment_circle(&self.wind, config, landing_direction);
        let freefall = simulate_freefall(&self.wind, config);

        // Where the jumper would have to be if leaving with no forward speed
        let exit_circle = deployment_circle.translated(-freefall.drift);

        let exit_wind = self.wind.at(config.exit_altitude);
        let run = solve_jump_run(
            &exit_circle,
            exit_wind.direction,
            self.fixed_track,
            self.fixed_transverse_offset,
        )?;

        // Forward throw carries the jumper along the track after exit
        let throw = run.track_unit() * freefall.throw_distance;
        let exit_circle = exit_circle.translated(-throw);
        let mut longitudinal_offset = run.longitudinal_offset - freefall.throw_distance;

        let ground = speed_over_ground(run.track, config.jump_run_airspeed, &exit_wind);
        if ground.direction != run.track {
            warn!(
                track = run.track,
                wind_speed = exit_wind.speed,
                "aircraft cannot hold the jump-run track at exit altitude"
            );
        }
        let ground_speed = ground.speed;

        longitudinal_offset -= config.green_light_time * ground_speed;
        let longitudinal_offset = round_offset(longitudinal_offset);

        let red_light = RedLight {
            bearing: normalize_angle(run.track + std::f64::consts::PI),
            distance: round_offset(longitudinal_offset + config.red_light_time * ground_speed),
        };

        let spot = Spot {
            track: run.track,
            longitudinal_offset,
            transverse_offset: run.transverse_offset,
            landing_direction,
            deployment_circle,
            exit_circle,
            red_light,
            time_between_groups: self.time_between_groups(run.track, ground_speed),
            jump_run_duration: if ground_speed > 0.0 {
                run.length / ground_speed
            } else {
                0.0
            },
        };
        debug!(?spot, "spot calculated");
        Ok(spot)
    }

    /// Seconds to wait between groups for `meters_between_groups` of separation
    ///
    /// Separation builds up at the aircraft's ground speed plus the wind
    /// component along the track at deployment altitude, which carries the
    /// previous group's canopies away from or towards the next.
    fn time_between_groups(&self, track: f64, ground_speed: f64) -> f64 {
        let deployment_wind = self.wind.at(self.config.deployment_altitude);
        let separation_speed =
            ground_speed + deployment_wind.speed * (deployment_wind.direction - track).cos();
        if separation_speed == 0.0 {
            return f64::INFINITY;
        }
        let seconds = self.config.meters_between_groups / separation_speed;
        seconds.max(self.config.min_time_between_groups).ceil()
    }
}

fn check_finite(name: &str, value: Option<f64>) -> SpotResult<()> {
    match value {
        Some(v) if !v.is_finite() => {
            Err(SpotError::InvalidInput(format!("{name} must be finite, got {v}")))
        }
        _ => Ok(()),
    }
}

/// JSON has no infinity: an unbounded wait is written as `null` and read back as `f64::INFINITY`
mod unbounded_seconds {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if seconds.is_finite() {
            serializer.serialize_f64(*seconds)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Calculate the spot for one input
pub fn calculate_spot(input: SpotInput) -> SpotResult<Spot> {
    SpotCalculator::new(input)?.calculate()
}
