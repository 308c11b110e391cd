//! Altitude-indexed wind profile.
//!
//! Winds follow the meteorological convention: `direction` is the bearing the
//! wind is blowing *from*, clockwise from true north.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::angles::{angle_between, normalize_angle};
use crate::error::{SpotError, SpotResult};

/// Wind at a single altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub altitude: f64,  // meters
    pub speed: f64,     // m/s
    pub direction: f64, // radians, blowing from
}

impl Wind {
    pub fn new(altitude: f64, speed: f64, direction: f64) -> Self {
        Self { altitude, speed, direction }
    }

    /// Horizontal wind vector [east, north] pointing towards where the wind
    /// comes from. Negate it to get the displacement of a drifting body.
    pub fn upwind_vector(&self) -> Vector2<f64> {
        Vector2::new(
            self.speed * self.direction.sin(),
            self.speed * self.direction.cos(),
        )
    }

    fn validate(&self) -> SpotResult<()> {
        if !self.altitude.is_finite() || !self.direction.is_finite() {
            return Err(SpotError::InvalidInput(format!(
                "wind sample at altitude {} has a non-finite value",
                self.altitude
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(SpotError::InvalidInput(format!(
                "wind speed at altitude {} must be a finite value >= 0, got {}",
                self.altitude, self.speed
            )));
        }
        Ok(())
    }
}

/// Wind estimator over a sorted set of wind samples
#[derive(Debug, Clone)]
pub struct WindEstimator {
    /// Samples sorted by ascending altitude, unique by altitude
    winds: Vec<Wind>,
}

impl WindEstimator {
    /// Create a new estimator from wind samples
    ///
    /// Samples are sorted by altitude. When two samples share an altitude the
    /// first one given wins.
    pub fn new(mut samples: Vec<Wind>) -> SpotResult<Self> {
        if samples.is_empty() {
            return Err(SpotError::EmptyProfile);
        }
        for sample in &samples {
            sample.validate()?;
        }

        // Altitudes are finite here, so total_cmp orders them numerically
        samples.sort_by(|a, b| a.altitude.total_cmp(&b.altitude));
        samples.dedup_by(|later, earlier| later.altitude == earlier.altitude);

        Ok(WindEstimator { winds: samples })
    }

    pub fn samples(&self) -> &[Wind] {
        &self.winds
    }

    pub fn lowest(&self) -> &Wind {
        &self.winds[0]
    }

    pub fn highest(&self) -> &Wind {
        &self.winds[self.winds.len() - 1]
    }

    /// Get the wind at a given altitude
    ///
    /// Altitudes outside the profile are clamped to the nearest sample. Between
    /// samples speed and direction are interpolated independently, the
    /// direction along the shortest arc.
    pub fn at(&self, altitude: f64) -> Wind {
        let lowest = self.lowest();
        if self.winds.len() == 1 || altitude <= lowest.altitude {
            return *lowest;
        }
        let highest = self.highest();
        if altitude >= highest.altitude {
            return *highest;
        }

        // First sample at or above the query; index >= 1 after the clamps above
        let idx = self.winds.partition_point(|w| w.altitude < altitude);
        let upper = &self.winds[idx];
        if upper.altitude == altitude {
            return *upper;
        }
        Self::interpolate(&self.winds[idx - 1], upper, altitude)
    }

    fn interpolate(lower: &Wind, upper: &Wind, altitude: f64) -> Wind {
        let alpha = (altitude - lower.altitude) / (upper.altitude - lower.altitude);
        let speed = (1.0 - alpha) * lower.speed + alpha * upper.speed;
        let turn = angle_between(lower.direction, upper.direction);
        let direction = normalize_angle(lower.direction + alpha * turn);

        Wind { altitude, speed, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn profile() -> Vec<Wind> {
        vec![
            Wind::new(0.0, 5.0, 350f64.to_radians()),
            Wind::new(600.0, 10.0, 10f64.to_radians()),
            Wind::new(3000.0, 25.0, 20f64.to_radians()),
        ]
    }

    #[test]
    fn test_empty_profile_rejected() {
        assert_eq!(WindEstimator::new(vec![]).unwrap_err(), SpotError::EmptyProfile);
    }

    #[test]
    fn test_negative_speed_rejected() {
        let err = WindEstimator::new(vec![Wind::new(0.0, -1.0, 0.0)]).unwrap_err();
        assert!(matches!(err, SpotError::InvalidInput(_)));
    }

    #[test]
    fn test_samples_sorted_and_deduplicated() {
        let mut winds = profile();
        winds.reverse();
        winds.push(Wind::new(600.0, 99.0, 0.0));
        let estimator = WindEstimator::new(winds).unwrap();

        let altitudes: Vec<f64> = estimator.samples().iter().map(|w| w.altitude).collect();
        assert_eq!(altitudes, vec![0.0, 600.0, 3000.0]);
        assert_eq!(estimator.at(600.0).speed, 10.0);
    }

    #[test]
    fn test_exact_matches() {
        let winds = profile();
        let estimator = WindEstimator::new(winds.clone()).unwrap();
        assert_eq!(estimator.at(0.0), winds[0]);
        assert_eq!(estimator.at(600.0), winds[1]);
        assert_eq!(estimator.at(3000.0), winds[2]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let winds = profile();
        let estimator = WindEstimator::new(winds.clone()).unwrap();
        assert_eq!(estimator.at(-10.0), winds[0]);
        assert_eq!(estimator.at(4000.0), winds[2]);
    }

    #[test]
    fn test_single_sample_everywhere() {
        let only = Wind::new(500.0, 7.0, 1.0);
        let estimator = WindEstimator::new(vec![only]).unwrap();
        assert_eq!(estimator.at(0.0), only);
        assert_eq!(estimator.at(10_000.0), only);
    }

    #[test]
    fn test_interpolation() {
        let estimator = WindEstimator::new(profile()).unwrap();
        let wind = estimator.at(1000.0);
        assert_eq!(wind.altitude, 1000.0);
        assert_abs_diff_eq!(wind.speed, 12.5, epsilon = 0.0005);
        assert_abs_diff_eq!(wind.direction, 0.204, epsilon = 0.0005);
    }

    #[test]
    fn test_interpolation_across_north() {
        let estimator = WindEstimator::new(profile()).unwrap();

        let low = estimator.at(200.0);
        assert_abs_diff_eq!(low.speed, 6.667, epsilon = 0.0005);
        assert_abs_diff_eq!(low.direction, 6.225, epsilon = 0.0005);

        let high = estimator.at(400.0);
        assert_abs_diff_eq!(high.speed, 8.333, epsilon = 0.0005);
        assert_abs_diff_eq!(high.direction, 0.058, epsilon = 0.0005);

        let mid = estimator.at(300.0);
        assert_abs_diff_eq!(mid.speed, 7.5, epsilon = 1e-12);
        // Exactly north, which may land on either side of the wrap
        assert_abs_diff_eq!(angle_between(0.0, mid.direction), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_upwind_vector() {
        // From the west: points west
        let vec = Wind::new(0.0, 10.0, 1.5 * std::f64::consts::PI).upwind_vector();
        assert_abs_diff_eq!(vec.x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(vec.y, 0.0, epsilon = 1e-9);
    }
}
