//! Ground speed along a desired track for an aircraft or canopy crabbing into the wind.

use tracing::debug;

use crate::wind::Wind;

/// Resulting motion over the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundVector {
    pub speed: f64,     // m/s, negative when pushed backwards
    pub direction: f64, // radians
}

/// Speed over ground when flying `track` at `airspeed` through `wind`
///
/// The wind is split into a component along the track and one across it. The
/// crosswind is cancelled by crabbing, which costs speed along the track; the
/// head or tail component is then subtracted or added directly.
///
/// When the crosswind is stronger than the airspeed the track cannot be held.
/// The craft then points straight into the wind and moves along the wind
/// direction at `airspeed - wind.speed`.
pub fn speed_over_ground(track: f64, airspeed: f64, wind: &Wind) -> GroundVector {
    let relative = wind.direction - track;
    let crosswind = wind.speed * relative.sin();
    let radicand = airspeed * airspeed - crosswind * crosswind;

    if radicand < 0.0 {
        debug!(
            track,
            airspeed,
            wind_speed = wind.speed,
            altitude = wind.altitude,
            "crosswind exceeds airspeed, flying into the wind instead of holding track"
        );
        return GroundVector {
            speed: airspeed - wind.speed,
            direction: wind.direction,
        };
    }

    let headwind = wind.speed * relative.cos();
    GroundVector {
        speed: radicand.sqrt() - headwind,
        direction: track,
    }
}
