//! Jump-run geometry: line of flight, transverse offset and the point where
//! the jump run enters the exit circle.
//!
//! Offsets are measured in the jump-run frame. The longitudinal axis runs
//! along the track (positive past the DZ); the transverse axis is positive to
//! the right of the track.

use nalgebra::Vector2;
use tracing::debug;

use crate::angles::{normalize_angle, round_to_step};
use crate::canopy::Circle;
use crate::constants::{OFFSET_ROUNDING_M, TRACK_ROUNDING_RAD};
use crate::error::{SpotError, SpotResult};

/// Solved line of flight through a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpRun {
    pub track: f64,               // radians
    pub longitudinal_offset: f64, // meters to the circle entry point
    pub transverse_offset: f64,   // meters, right of track
    pub length: f64,              // meters of chord inside the circle
}

impl JumpRun {
    /// Unit vector [east, north] along the track
    pub fn track_unit(&self) -> Vector2<f64> {
        Vector2::new(self.track.sin(), self.track.cos())
    }
}

/// Track rounded to the nearest 5°
pub fn round_track(track: f64) -> f64 {
    normalize_angle(round_to_step(track, TRACK_ROUNDING_RAD))
}

/// Distance rounded to the nearest 0.1 NM
pub fn round_offset(distance: f64) -> f64 {
    round_to_step(distance, OFFSET_ROUNDING_M)
}

/// Transverse offset of a line on `track` that passes through the circle's centre
fn offset_through_center(circle: &Circle, track: f64) -> f64 {
    circle.x * track.cos() - circle.y * track.sin()
}

/// Track for which a line offset by `transverse_offset` passes through the circle's centre
fn track_through_center(circle: &Circle, transverse_offset: f64) -> SpotResult<f64> {
    let distance = circle.center().norm();
    let ratio = if transverse_offset == 0.0 {
        0.0
    } else {
        transverse_offset / distance
    };
    if !(-1.0..=1.0).contains(&ratio) {
        // The centre is closer to the DZ than the offset line can get
        return Err(SpotError::GeometryError {
            track: f64::NAN,
            transverse_offset,
        });
    }
    Ok(circle.x.atan2(circle.y) - ratio.asin())
}

/// Resolve track and transverse offset, then find where the jump run enters the circle
///
/// Precedence:
/// - fixed offset, no fixed track: the track is solved so the line crosses the centre
/// - no fixed offset: the track is `fixed_track` or `default_track`, and the offset
///   puts the line through the centre
/// - both fixed: used as given
///
/// `default_track` is only consulted when neither value is fixed; it is rounded
/// to 5°. Solved offsets are rounded to 0.1 NM and solved tracks to 5°.
pub fn solve_jump_run(
    circle: &Circle,
    default_track: f64,
    fixed_track: Option<f64>,
    fixed_transverse_offset: Option<f64>,
) -> SpotResult<JumpRun> {
    let (track, transverse_offset) = match (fixed_track, fixed_transverse_offset) {
        (track, None) => {
            let track = track.unwrap_or_else(|| round_track(default_track));
            (track, round_offset(offset_through_center(circle, track)))
        }
        (None, Some(offset)) => (round_track(track_through_center(circle, offset)?), offset),
        (Some(track), Some(offset)) => (track, offset),
    };

    // Circle centre relative to the point abeam the DZ on the offset line
    let dx = circle.x - transverse_offset * track.cos();
    let dy = circle.y + transverse_offset * track.sin();
    let along = dx * track.sin() + dy * track.cos();
    let discriminant = along * along - dx * dx - dy * dy + circle.radius * circle.radius;
    if discriminant.is_nan() || discriminant < 0.0 {
        return Err(SpotError::GeometryError {
            track,
            transverse_offset,
        });
    }

    let half_chord = discriminant.sqrt();
    let jump_run = JumpRun {
        track,
        longitudinal_offset: along - half_chord,
        transverse_offset,
        length: 2.0 * half_chord,
    };
    debug!(
        track = jump_run.track,
        longitudinal_offset = jump_run.longitudinal_offset,
        transverse_offset = jump_run.transverse_offset,
        length = jump_run.length,
        "jump run"
    );
    Ok(jump_run)
}
