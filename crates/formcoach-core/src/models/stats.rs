// ABOUTME: Externally reported workout statistics snapshot
// ABOUTME: Mirrors the JSON shape polled by the workout page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use super::ExerciseType;
use serde::{Deserialize, Serialize};

/// Stats snapshot reflecting the most recently processed frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStats {
    /// Active exercise
    pub exercise: ExerciseType,
    /// Reps completed since the session (or exercise) started
    pub reps: u32,
    /// Elapsed whole seconds
    pub duration: u64,
    /// Completed sets
    pub sets: u32,
    /// Estimated kilocalories burned
    pub calories: u32,
    /// Latest feedback text
    pub feedback: String,
}
