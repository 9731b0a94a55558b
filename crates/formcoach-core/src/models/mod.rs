// ABOUTME: Core data models for the FormCoach rep counter
// ABOUTME: Re-exports landmark, exercise and stats types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Data Models
//!
//! - `Landmark`, `LandmarkId`, `PoseFrame`: per-frame output of the pose oracle
//! - `ExerciseType`, `ExerciseInfo`, `Stage`: what is being tracked and how
//! - `WorkoutStats`: snapshot reported to callers

mod exercise;
mod landmark;
mod stats;

pub use exercise::{ExerciseInfo, ExerciseType, Stage};
pub use landmark::{Landmark, LandmarkId, PoseFrame};
pub use stats::WorkoutStats;
