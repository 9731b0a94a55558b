// ABOUTME: Exercise type enumeration, catalog metadata and classifier stages
// ABOUTME: Parses exercise names from display form or snake_case aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Exercises the rep counter can track
///
/// Serialized with the display names used by the workout UI
/// (`"Jumping Jacks"`, `"Push Ups"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    /// Jump to spread legs and raise arms, then return
    #[default]
    #[serde(rename = "Jumping Jacks")]
    JumpingJacks,
    /// Bodyweight squat
    #[serde(rename = "Squats")]
    Squats,
    /// Push-up
    #[serde(rename = "Push Ups")]
    PushUps,
    /// Biceps curl
    #[serde(rename = "Weightlifting")]
    Weightlifting,
    /// Hip hinge deadlift
    #[serde(rename = "Deadlifts")]
    Deadlifts,
    /// Timed overhead yoga hold
    #[serde(rename = "Yoga")]
    Yoga,
}

impl ExerciseType {
    /// Every supported exercise, in catalog order
    pub const ALL: [Self; 6] = [
        Self::JumpingJacks,
        Self::Squats,
        Self::PushUps,
        Self::Weightlifting,
        Self::Deadlifts,
        Self::Yoga,
    ];

    /// Display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JumpingJacks => "Jumping Jacks",
            Self::Squats => "Squats",
            Self::PushUps => "Push Ups",
            Self::Weightlifting => "Weightlifting",
            Self::Deadlifts => "Deadlifts",
            Self::Yoga => "Yoga",
        }
    }

    /// Stable snake_case identifier
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::JumpingJacks => "jumping_jacks",
            Self::Squats => "squats",
            Self::PushUps => "push_ups",
            Self::Weightlifting => "weightlifting",
            Self::Deadlifts => "deadlifts",
            Self::Yoga => "yoga",
        }
    }

    /// Whether reps are earned by holding a pose rather than cycling stages
    #[must_use]
    pub const fn is_hold_based(self) -> bool {
        matches!(self, Self::Yoga)
    }

    /// Catalog entry shown to users picking an exercise
    #[must_use]
    pub const fn info(self) -> ExerciseInfo {
        let (description, target_reps, next_goal) = match self {
            Self::JumpingJacks => (
                "Jump to spread legs and raise arms overhead then return to start.",
                15,
                "15 reps",
            ),
            Self::Squats => (
                "Lower into a squat with knees bending then rise back up.",
                20,
                "20 reps",
            ),
            Self::PushUps => (
                "Lower your body by bending elbows then push back up.",
                15,
                "15 reps",
            ),
            Self::Weightlifting => ("Perform biceps curls with proper form.", 12, "12 reps"),
            Self::Deadlifts => (
                "Bend at the hips and straighten up to lift the weight.",
                10,
                "10 reps",
            ),
            Self::Yoga => (
                "Hold a yoga pose (e.g. mountain pose) for balance.",
                1,
                "Hold for 10 sec",
            ),
        };

        ExerciseInfo {
            exercise: self,
            name: self.display_name(),
            description,
            target_reps,
            next_goal,
            hold_based: self.is_hold_based(),
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "jumping_jacks" | "jumping_jack" => Ok(Self::JumpingJacks),
            "squats" | "squat" => Ok(Self::Squats),
            "push_ups" | "push_up" | "pushups" | "pushup" => Ok(Self::PushUps),
            "weightlifting" | "curls" | "biceps_curl" => Ok(Self::Weightlifting),
            "deadlifts" | "deadlift" => Ok(Self::Deadlifts),
            "yoga" => Ok(Self::Yoga),
            _ => Err(AppError::invalid_input(format!(
                "Unknown exercise: '{s}'. Valid options: Jumping Jacks, Squats, Push Ups, Weightlifting, Deadlifts, Yoga"
            ))
            .with_details(json!({
                "exercise": s,
                "valid_options": Self::ALL.map(Self::display_name),
            }))),
        }
    }
}

/// Catalog entry for one exercise
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseInfo {
    /// Exercise identifier
    pub exercise: ExerciseType,
    /// Display name
    pub name: &'static str,
    /// How to perform it
    pub description: &'static str,
    /// Target reps for one round
    pub target_reps: u32,
    /// Goal text shown next to the progress counter
    pub next_goal: &'static str,
    /// Whether reps come from timed holds
    pub hold_based: bool,
}

/// Classifier stage used to debounce rep counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Extended / standing / arms-spread position
    Up,
    /// Flexed / lowered / feet-together position
    Down,
    /// Neither terminal position
    Intermediate,
}

impl Stage {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
