// ABOUTME: Derives sets, elapsed duration and calorie estimates from session state
// ABOUTME: Calories use MET x body weight x hours with Compendium MET values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use crate::classifier_constants::met;
use chrono::{DateTime, Utc};
use formcoach_core::constants::{defaults, limits};
use formcoach_core::models::ExerciseType;
use serde::{Deserialize, Serialize};

/// Per-user inputs to the stats derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSettings {
    /// Reps that make up one set
    pub reps_per_set: u32,
    /// Body weight used for the calorie estimate
    pub body_weight_kg: f64,
}

impl Default for WorkoutSettings {
    fn default() -> Self {
        Self {
            reps_per_set: defaults::REPS_PER_SET,
            body_weight_kg: defaults::BODY_WEIGHT_KG,
        }
    }
}

/// MET value for an exercise
#[must_use]
pub const fn met_value(exercise: ExerciseType) -> f64 {
    match exercise {
        ExerciseType::JumpingJacks => met::JUMPING_JACKS,
        ExerciseType::Squats => met::SQUATS,
        ExerciseType::PushUps => met::PUSH_UPS,
        ExerciseType::Weightlifting => met::WEIGHTLIFTING,
        ExerciseType::Deadlifts => met::DEADLIFTS,
        ExerciseType::Yoga => met::YOGA,
    }
}

/// Completed sets; zero when `reps_per_set` is zero
#[must_use]
pub const fn sets_completed(reps: u32, reps_per_set: u32) -> u32 {
    match reps.checked_div(reps_per_set) {
        Some(sets) => sets,
        None => 0,
    }
}

/// Whole seconds between `start` and `now`, never negative
#[must_use]
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - start).num_seconds()).unwrap_or(0)
}

/// Estimated kilocalories, rounded down
#[must_use]
pub fn estimate_calories(exercise: ExerciseType, body_weight_kg: f64, elapsed_secs: u64) -> u32 {
    let hours = elapsed_secs as f64 / limits::SECONDS_PER_HOUR;
    let kcal = met_value(exercise) * body_weight_kg.max(0.0) * hours;
    kcal.floor() as u32
}
