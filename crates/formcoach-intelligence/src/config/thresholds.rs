// ABOUTME: Classifier threshold configuration types
// ABOUTME: Visibility cutoff, per-exercise angle/distance limits and yoga hold duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use super::ConfigError;
use crate::classifier_constants::{
    deadlifts, jumping_jacks, push_ups, squats, visibility, weightlifting, yoga,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Down/up angle pair for a two-stage joint-angle exercise (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleThresholds {
    /// Angle below which the joint counts as flexed
    pub down_angle: f64,
    /// Angle above which the joint counts as extended
    pub up_angle: f64,
}

impl AngleThresholds {
    /// Create an angle pair
    #[must_use]
    pub const fn new(down_angle: f64, up_angle: f64) -> Self {
        Self {
            down_angle,
            up_angle,
        }
    }

    fn from_env(prefix: &str, defaults: Self) -> Self {
        Self {
            down_angle: env_parse_or(&format!("{prefix}_DOWN_ANGLE"), defaults.down_angle),
            up_angle: env_parse_or(&format!("{prefix}_UP_ANGLE"), defaults.up_angle),
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let in_range = |angle: f64| (0.0..=180.0).contains(&angle);
        if !in_range(self.down_angle) || !in_range(self.up_angle) {
            return Err(ConfigError::InvalidRange(name));
        }
        if self.down_angle >= self.up_angle {
            return Err(ConfigError::InconsistentThresholds(name));
        }
        Ok(())
    }
}

/// Jumping jack position thresholds (normalized frame units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpingJackThresholds {
    /// Ankle spread above which legs are apart
    pub ankles_wide: f64,
    /// Ankle spread below which legs are together
    pub ankles_together: f64,
    /// Maximum nose offset from the shoulder midpoint
    pub head_stability: f64,
}

impl Default for JumpingJackThresholds {
    fn default() -> Self {
        Self {
            ankles_wide: jumping_jacks::ANKLES_WIDE,
            ankles_together: jumping_jacks::ANKLES_TOGETHER,
            head_stability: jumping_jacks::HEAD_STABILITY,
        }
    }
}

/// Tunable thresholds for every classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Minimum landmark visibility
    pub min_visibility: f64,
    /// Jumping jack limits
    pub jumping_jacks: JumpingJackThresholds,
    /// Squat knee angles
    pub squats: AngleThresholds,
    /// Push-up elbow angles
    pub push_ups: AngleThresholds,
    /// Curl elbow angles
    pub weightlifting: AngleThresholds,
    /// Deadlift hip angles
    pub deadlifts: AngleThresholds,
    /// Seconds of continuous hold per yoga rep
    pub yoga_hold_seconds: u64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            min_visibility: visibility::MIN_VISIBILITY,
            jumping_jacks: JumpingJackThresholds::default(),
            squats: AngleThresholds::new(squats::DOWN_ANGLE, squats::UP_ANGLE),
            push_ups: AngleThresholds::new(push_ups::DOWN_ANGLE, push_ups::UP_ANGLE),
            weightlifting: AngleThresholds::new(
                weightlifting::DOWN_ANGLE,
                weightlifting::UP_ANGLE,
            ),
            deadlifts: AngleThresholds::new(deadlifts::DOWN_ANGLE, deadlifts::UP_ANGLE),
            yoga_hold_seconds: yoga::HOLD_SECONDS,
        }
    }
}

impl ClassifierThresholds {
    /// Load thresholds from environment, falling back to the defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_visibility: env_parse_or("CLASSIFIER_MIN_VISIBILITY", defaults.min_visibility),
            jumping_jacks: JumpingJackThresholds {
                ankles_wide: env_parse_or(
                    "CLASSIFIER_JUMPING_JACKS_ANKLES_WIDE",
                    defaults.jumping_jacks.ankles_wide,
                ),
                ankles_together: env_parse_or(
                    "CLASSIFIER_JUMPING_JACKS_ANKLES_TOGETHER",
                    defaults.jumping_jacks.ankles_together,
                ),
                head_stability: env_parse_or(
                    "CLASSIFIER_JUMPING_JACKS_HEAD_STABILITY",
                    defaults.jumping_jacks.head_stability,
                ),
            },
            squats: AngleThresholds::from_env("CLASSIFIER_SQUAT", defaults.squats),
            push_ups: AngleThresholds::from_env("CLASSIFIER_PUSH_UP", defaults.push_ups),
            weightlifting: AngleThresholds::from_env("CLASSIFIER_CURL", defaults.weightlifting),
            deadlifts: AngleThresholds::from_env("CLASSIFIER_DEADLIFT", defaults.deadlifts),
            yoga_hold_seconds: env_parse_or(
                "CLASSIFIER_YOGA_HOLD_SECONDS",
                defaults.yoga_hold_seconds,
            ),
        }
    }

    /// Check that every threshold is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is out of range or a down/up pair is
    /// inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(ConfigError::InvalidRange(
                "min_visibility must be between 0 and 1",
            ));
        }

        let jj = &self.jumping_jacks;
        let normalized = |value: f64| (0.0..=1.0).contains(&value);
        if !normalized(jj.ankles_together)
            || !normalized(jj.ankles_wide)
            || !normalized(jj.head_stability)
            || jj.head_stability <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "jumping jack thresholds must lie within the normalized frame",
            ));
        }
        if jj.ankles_together >= jj.ankles_wide {
            return Err(ConfigError::InconsistentThresholds(
                "jumping jack ankles_together must be below ankles_wide",
            ));
        }

        self.squats.validate("squat down angle must be below up angle, both in 0-180")?;
        self.push_ups
            .validate("push-up down angle must be below up angle, both in 0-180")?;
        self.weightlifting
            .validate("curl down angle must be below up angle, both in 0-180")?;
        self.deadlifts
            .validate("deadlift down angle must be below up angle, both in 0-180")?;

        if self.yoga_hold_seconds == 0 {
            return Err(ConfigError::InvalidRange(
                "yoga hold must last at least one second",
            ));
        }

        Ok(())
    }
}

/// Parse an environment variable, keeping the default when unset or malformed
fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
