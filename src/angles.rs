//! Angle helpers shared by every stage of the spot calculation.
//!
//! All angles are radians, increasing clockwise from true north.

use std::f64::consts::{PI, TAU};

/// Normalize an angle to `0 <= x < 2π`
pub fn normalize_angle(x: f64) -> f64 {
    let r = x.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Normalize an angle difference to `-π < x <= π`
pub fn normalize_angle_diff(x: f64) -> f64 {
    // Values already in range come back untouched
    let r = x % TAU;
    if r > PI {
        r - TAU
    } else if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// Signed shortest rotation from `from` to `to`
pub fn angle_between(from: f64, to: f64) -> f64 {
    normalize_angle_diff(to - from)
}

/// Round `x` to the nearest multiple of `step`, halves towards +∞
pub fn round_to_step(x: f64, step: f64) -> f64 {
    step * (x / step + 0.5).floor()
}
