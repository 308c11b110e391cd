//! Fixed-step freefall integration from exit to deployment altitude.
//!
//! The jumper leaves the aircraft with its true airspeed as horizontal
//! velocity and no vertical velocity. Drag slows the horizontal motion (the
//! forward throw) while gravity builds up the vertical speed towards terminal
//! velocity. Independently, the wind at each altitude drifts the jumper.

use nalgebra::Vector2;
use tracing::debug;

use crate::atmosphere::drag_acceleration;
use crate::config::SpotConfig;
use crate::constants::{FREEFALL_TIME_STEP, G_ACCEL_MPS2};
use crate::wind::WindEstimator;

/// Outcome of the freefall simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreefallResult {
    /// Wind displacement [east, north] in meters
    pub drift: Vector2<f64>,
    /// Distance travelled along the jump-run track due to exit speed (m)
    pub throw_distance: f64,
    /// Time from exit to deployment altitude (s)
    pub duration: f64,
}

/// Integrate the freefall from `exit_altitude` down to `deployment_altitude`
pub fn simulate_freefall(wind: &WindEstimator, config: &SpotConfig) -> FreefallResult {
    let dt = FREEFALL_TIME_STEP;
    let mut altitude = config.exit_altitude;
    let mut horizontal_velocity = config.jump_run_airspeed;
    let mut vertical_velocity = 0.0;
    let mut drift: Vector2<f64> = Vector2::zeros();
    let mut throw_distance = 0.0;
    let mut steps: u32 = 0;

    while altitude > config.deployment_altitude {
        drift -= wind.at(altitude).upwind_vector() * dt;

        let velocity = horizontal_velocity.hypot(vertical_velocity);
        let drag = drag_acceleration(velocity, altitude);
        throw_distance += horizontal_velocity * dt;
        altitude -= vertical_velocity * dt;

        // Drag acts against the velocity vector
        if velocity > 0.0 {
            horizontal_velocity -= horizontal_velocity / velocity * drag * dt;
            vertical_velocity -= vertical_velocity / velocity * drag * dt;
        }
        vertical_velocity += G_ACCEL_MPS2 * dt;
        steps += 1;
    }

    let result = FreefallResult {
        drift,
        throw_distance,
        duration: f64::from(steps) * dt,
    };
    debug!(
        drift_x = result.drift.x,
        drift_y = result.drift.y,
        throw_distance = result.throw_distance,
        duration = result.duration,
        "freefall"
    );
    result
}
