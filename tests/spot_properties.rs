use approx::assert_abs_diff_eq;
use rstest::rstest;
use std::f64::consts::PI;

use spot_engine::units::kt_to_mps;
use spot_engine::{
    calculate_spot, Circle, Spot, SpotConfig, SpotError, SpotInput, Wind, WindEstimator,
};

fn calm() -> Vec<Wind> {
    vec![Wind::new(0.0, 0.0, 0.0)]
}

fn layered() -> Vec<Wind> {
    vec![
        Wind::new(0.0, 5.0, 0.5),
        Wind::new(2000.0, 8.0, 0.8),
        Wind::new(10000.0, 12.0, 1.0),
    ]
}

#[rstest]
#[case(-500.0, 0)]
#[case(0.0, 0)]
#[case(3000.0, 2)]
#[case(9000.0, 2)]
fn wind_boundaries_are_returned_verbatim(#[case] altitude: f64, #[case] index: usize) {
    let samples = vec![
        Wind::new(0.0, 5.0, 350f64.to_radians()),
        Wind::new(600.0, 10.0, 10f64.to_radians()),
        Wind::new(3000.0, 25.0, 20f64.to_radians()),
    ];
    let estimator = WindEstimator::new(samples.clone()).unwrap();
    assert_eq!(estimator.at(altitude), samples[index]);
}

#[test]
fn wind_midpoint_takes_the_short_way_round() {
    let estimator = WindEstimator::new(vec![
        Wind::new(1000.0, 10.0, 10f64.to_radians()),
        Wind::new(0.0, 6.0, 350f64.to_radians()),
    ])
    .unwrap();
    let mid = estimator.at(500.0);
    assert_abs_diff_eq!(mid.speed, 8.0, epsilon = 1e-12);
    // Near north, never near south
    assert!(mid.direction.cos() > 0.9999, "direction {}", mid.direction);
}

#[test]
fn still_air_collapses_everything() {
    let spot = calculate_spot(SpotInput {
        winds: calm(),
        config: SpotConfig {
            jump_run_airspeed: 0.0,
            horizontal_canopy_speed: 0.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    assert_eq!(spot.track, 0.0);
    assert_eq!(spot.longitudinal_offset, 0.0);
    assert_eq!(spot.transverse_offset, 0.0);
    assert_eq!(spot.landing_direction, 0.0);
    assert_eq!(spot.deployment_circle, Circle::default());
    assert_eq!(spot.exit_circle, Circle::default());
    assert_eq!(spot.red_light.bearing, PI);
    assert_eq!(spot.red_light.distance, 0.0);
    assert_eq!(spot.time_between_groups, f64::INFINITY);
    assert_eq!(spot.jump_run_duration, 0.0);
}

#[test]
fn still_air_spot_survives_json() {
    let spot = calculate_spot(SpotInput {
        winds: calm(),
        config: SpotConfig {
            jump_run_airspeed: 0.0,
            horizontal_canopy_speed: 0.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let json = serde_json::to_value(&spot).unwrap();
    assert!(json["time_between_groups"].is_null());

    let back: Spot = serde_json::from_value(json).unwrap();
    assert_eq!(back, spot);
    assert_eq!(back.time_between_groups, f64::INFINITY);
}

#[test]
fn circle_radii_are_canopy_holding_distance() {
    let spot = calculate_spot(SpotInput {
        winds: layered(),
        config: SpotConfig {
            vertical_canopy_speed: 5.0,
            horizontal_canopy_speed: 10.0,
            deployment_altitude: 700.0,
            final_altitude: 100.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let flight_distance = (700.0 - 100.0) / 5.0 * 10.0;
    assert_abs_diff_eq!(spot.deployment_circle.radius, flight_distance, epsilon = 1e-4);
    assert_abs_diff_eq!(spot.exit_circle.radius, flight_distance, epsilon = 1e-4);
}

#[test]
fn forward_throw_at_90_knots() {
    let spot = calculate_spot(SpotInput {
        winds: calm(),
        config: SpotConfig {
            jump_run_airspeed: kt_to_mps(90.0),
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let throw = spot.deployment_circle.y - spot.exit_circle.y;
    assert_abs_diff_eq!(throw, 370.0, epsilon = 1.0);
}

#[test]
fn freefall_drift_in_storm_wind() {
    let from_west = 3.0 * PI / 2.0;
    let spot = calculate_spot(SpotInput {
        winds: vec![
            Wind::new(0.0, 24.5, from_west),
            Wind::new(2000.0, 24.5, from_west),
            Wind::new(10000.0, 24.5, from_west),
        ],
        config: SpotConfig {
            jump_run_airspeed: 0.0,
            exit_altitude: 4000.0,
            deployment_altitude: 700.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let drift = spot.deployment_circle.x - spot.exit_circle.x;
    assert_abs_diff_eq!(drift, 1494.5, epsilon = 1.0);
}

#[test]
fn fixed_offset_outside_exit_circle_is_geometry_error() {
    let err = calculate_spot(SpotInput {
        winds: calm(),
        fixed_track: Some(0.0),
        fixed_transverse_offset: Some(5000.0),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, SpotError::GeometryError { .. }), "{err:?}");

    // Same offset with the track left free: no track can put the line through the centre
    let err = calculate_spot(SpotInput {
        winds: calm(),
        fixed_transverse_offset: Some(5000.0),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, SpotError::GeometryError { .. }), "{err:?}");
}

#[test]
fn empty_profile_is_rejected() {
    let err = calculate_spot(SpotInput::default()).unwrap_err();
    assert_eq!(err, SpotError::EmptyProfile);
}

#[test]
fn identical_inputs_give_identical_results() {
    let input = SpotInput {
        winds: layered(),
        allowed_landing_directions: Some(vec![0.3, 3.4]),
        ..Default::default()
    };
    let first = calculate_spot(input.clone()).unwrap();
    let second = calculate_spot(input).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.track.to_bits(), second.track.to_bits());
    assert_eq!(first.exit_circle.x.to_bits(), second.exit_circle.x.to_bits());
}

#[test]
fn layered_wind_reference_spot() {
    let spot = calculate_spot(SpotInput {
        winds: layered(),
        config: SpotConfig {
            vertical_canopy_speed: 5.0,
            horizontal_canopy_speed: 10.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    assert_abs_diff_eq!(spot.track, 50f64.to_radians(), epsilon = 1e-9);
    assert_abs_diff_eq!(spot.transverse_offset, -185.2, epsilon = 1e-9);
    assert_abs_diff_eq!(spot.longitudinal_offset, -926.0, epsilon = 1e-6);
    assert_eq!(spot.landing_direction, 0.5);
    assert_abs_diff_eq!(spot.red_light.bearing, 230f64.to_radians(), epsilon = 1e-9);
    assert_abs_diff_eq!(spot.red_light.distance, 4815.2, epsilon = 1e-6);
    assert_eq!(spot.time_between_groups, 6.0);
    assert_abs_diff_eq!(spot.jump_run_duration, 61.77, epsilon = 0.01);
    // Deployment point upwind of the DZ
    assert!(spot.deployment_circle.x > 0.0 && spot.deployment_circle.y > 0.0);
}

#[test]
fn allowed_landing_direction_closest_to_ground_wind() {
    let spot = calculate_spot(SpotInput {
        winds: layered(),
        allowed_landing_directions: Some(vec![3.6, 0.2, 0.9]),
        ..Default::default()
    })
    .unwrap();
    // Ground wind from 0.5 rad: 0.2 is 0.3 away, 0.9 is 0.4 away
    assert_eq!(spot.landing_direction, 0.2);
}

#[test]
fn time_between_groups_respects_minimum() {
    let spot = calculate_spot(SpotInput {
        winds: calm(),
        config: SpotConfig {
            meters_between_groups: 10.0,
            min_time_between_groups: 8.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();
    assert_eq!(spot.time_between_groups, 8.0);
}
