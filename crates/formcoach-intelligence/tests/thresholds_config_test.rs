// ABOUTME: Tests for classifier threshold defaults, env overrides and validation
// ABOUTME: Env-mutating tests are serialized to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{squat_frame, t0};
use formcoach_core::errors::{AppError, ErrorCode};
use formcoach_core::models::{ExerciseType, Stage};
use formcoach_intelligence::{
    AngleThresholds, ClassifierRegistry, ClassifierThresholds, ConfigError, JumpingJackThresholds,
    SessionState,
};
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 4] = [
    "CLASSIFIER_SQUAT_DOWN_ANGLE",
    "CLASSIFIER_SQUAT_UP_ANGLE",
    "CLASSIFIER_MIN_VISIBILITY",
    "CLASSIFIER_YOGA_HOLD_SECONDS",
];

fn clear_overrides() {
    for key in OVERRIDES {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults_are_valid() {
    let thresholds = ClassifierThresholds::default();
    assert!(thresholds.validate().is_ok());
    assert!((thresholds.min_visibility - 0.5).abs() < f64::EPSILON);
    assert_eq!(thresholds.squats, AngleThresholds::new(100.0, 160.0));
    assert_eq!(thresholds.push_ups, AngleThresholds::new(90.0, 160.0));
    assert_eq!(thresholds.weightlifting, AngleThresholds::new(40.0, 160.0));
    assert_eq!(thresholds.deadlifts, AngleThresholds::new(90.0, 160.0));
    assert_eq!(thresholds.yoga_hold_seconds, 10);
}

#[test]
fn test_inverted_angles_rejected() {
    let thresholds = ClassifierThresholds {
        squats: AngleThresholds::new(170.0, 120.0),
        ..ClassifierThresholds::default()
    };
    assert!(matches!(
        thresholds.validate(),
        Err(ConfigError::InconsistentThresholds(_))
    ));
}

#[test]
fn test_out_of_range_values_rejected() {
    let thresholds = ClassifierThresholds {
        push_ups: AngleThresholds::new(90.0, 200.0),
        ..ClassifierThresholds::default()
    };
    assert!(matches!(thresholds.validate(), Err(ConfigError::InvalidRange(_))));

    let thresholds = ClassifierThresholds {
        min_visibility: 1.5,
        ..ClassifierThresholds::default()
    };
    assert!(matches!(thresholds.validate(), Err(ConfigError::InvalidRange(_))));

    let thresholds = ClassifierThresholds {
        yoga_hold_seconds: 0,
        ..ClassifierThresholds::default()
    };
    assert!(thresholds.validate().is_err());
}

#[test]
fn test_non_finite_jumping_jack_thresholds_rejected() {
    let defaults = ClassifierThresholds::default();
    let variants = [
        JumpingJackThresholds {
            head_stability: f64::NAN,
            ..defaults.jumping_jacks
        },
        JumpingJackThresholds {
            ankles_wide: f64::NAN,
            ..defaults.jumping_jacks
        },
        JumpingJackThresholds {
            ankles_together: f64::NAN,
            ..defaults.jumping_jacks
        },
        JumpingJackThresholds {
            ankles_wide: f64::INFINITY,
            ..defaults.jumping_jacks
        },
        JumpingJackThresholds {
            head_stability: 0.0,
            ..defaults.jumping_jacks
        },
    ];

    for jumping_jacks in variants {
        let thresholds = ClassifierThresholds {
            jumping_jacks,
            ..defaults
        };
        assert!(
            matches!(thresholds.validate(), Err(ConfigError::InvalidRange(_))),
            "{jumping_jacks:?} passed validation"
        );
    }
}

#[test]
#[serial]
fn test_nan_from_env_fails_validation() {
    clear_overrides();
    env::set_var("CLASSIFIER_JUMPING_JACKS_HEAD_STABILITY", "NaN");
    let thresholds = ClassifierThresholds::from_env();
    env::remove_var("CLASSIFIER_JUMPING_JACKS_HEAD_STABILITY");

    assert!(thresholds.jumping_jacks.head_stability.is_nan());
    assert!(thresholds.validate().is_err());
}

#[test]
fn test_config_error_maps_to_app_error() {
    let err: AppError = ConfigError::InvalidRange("bad").into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("bad"));
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_overrides();
    env::set_var("CLASSIFIER_SQUAT_DOWN_ANGLE", "110");
    env::set_var("CLASSIFIER_SQUAT_UP_ANGLE", "150");
    env::set_var("CLASSIFIER_YOGA_HOLD_SECONDS", "5");

    let thresholds = ClassifierThresholds::from_env();
    clear_overrides();

    assert_eq!(thresholds.squats, AngleThresholds::new(110.0, 150.0));
    assert_eq!(thresholds.yoga_hold_seconds, 5);
    assert_eq!(thresholds.push_ups, AngleThresholds::new(90.0, 160.0));
    assert!(thresholds.validate().is_ok());
}

#[test]
#[serial]
fn test_malformed_env_falls_back_to_default() {
    clear_overrides();
    env::set_var("CLASSIFIER_MIN_VISIBILITY", "very");

    let thresholds = ClassifierThresholds::from_env();
    clear_overrides();

    assert!((thresholds.min_visibility - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_custom_thresholds_change_classification() {
    let thresholds = ClassifierThresholds {
        squats: AngleThresholds::new(120.0, 150.0),
        ..ClassifierThresholds::default()
    };
    let registry = ClassifierRegistry::with_thresholds(&thresholds);
    let classifier = registry.get(ExerciseType::Squats).unwrap();
    let mut state = SessionState::new(ExerciseType::Squats, Stage::Up, t0());

    // A shallow 110 degree squat and a 155 degree stand count under the looser limits
    classifier.classify(&mut state, &squat_frame(110.0, 110.0), t0());
    classifier.classify(&mut state, &squat_frame(155.0, 155.0), t0());
    assert_eq!(state.counter, 1);
}
