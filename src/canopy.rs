//! Canopy flight: landing direction and the circle of deployment points from
//! which the pattern entry can be reached.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angles::angle_between;
use crate::config::SpotConfig;
use crate::constants::CANOPY_TIME_STEP;
use crate::navigation::speed_over_ground;
use crate::wind::WindEstimator;

/// Circle in the DZ frame (meters, x east, y north, origin at the DZ)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Same radius, centre moved by `offset`
    pub fn translated(&self, offset: Vector2<f64>) -> Circle {
        Circle {
            x: self.x + offset.x,
            y: self.y + offset.y,
            radius: self.radius,
        }
    }
}

/// Pick the landing direction
///
/// Without restrictions canopies land into the ground wind. Otherwise the
/// allowed direction closest to the ground wind is used; the first one listed
/// wins a tie.
pub fn landing_direction(wind: &WindEstimator, allowed: Option<&[f64]>) -> f64 {
    let ground_wind = wind.at(0.0).direction;

    let Some(allowed) = allowed.filter(|a| !a.is_empty()) else {
        return ground_wind;
    };

    let mut best = allowed[0];
    let mut best_delta = angle_between(best, ground_wind).abs();
    for &candidate in &allowed[1..] {
        let delta = angle_between(candidate, ground_wind).abs();
        if delta < best_delta {
            best = candidate;
            best_delta = delta;
        }
    }
    best
}

/// Simulate the canopy from the ground up to deployment altitude
///
/// Below the final altitude the canopy flies the landing direction. Above it
/// the canopy is holding: it drifts with the wind and can reach anywhere
/// within `horizontal_canopy_speed` per second of holding time, which grows
/// the radius.
pub fn deployment_circle(
    wind: &WindEstimator,
    config: &SpotConfig,
    landing_direction: f64,
) -> Circle {
    let dt = CANOPY_TIME_STEP;
    let mut altitude = 0.0;
    let mut position: Vector2<f64> = Vector2::zeros();
    let mut radius = 0.0;

    while altitude < config.deployment_altitude {
        let w = wind.at(altitude);
        if altitude < config.final_altitude {
            let ground = speed_over_ground(landing_direction, config.horizontal_canopy_speed, &w);
            let heading = Vector2::new(ground.direction.sin(), ground.direction.cos());
            position -= heading * (ground.speed * dt);
        } else {
            position += w.upwind_vector() * dt;
            radius += config.horizontal_canopy_speed * dt;
        }
        altitude += config.vertical_canopy_speed * dt;
    }

    let circle = Circle {
        x: position.x,
        y: position.y,
        radius,
    };
    debug!(x = circle.x, y = circle.y, radius = circle.radius, "deployment circle");
    circle
}
