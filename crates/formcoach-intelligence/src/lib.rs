// ABOUTME: Rep-counting engine: geometry, exercise classifiers and workout session state
// ABOUTME: Turns a stream of pose landmarks into rep, set, duration and calorie counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Exercise repetition detection.
//!
//! Frames of body landmarks go in through [`WorkoutSession::process_frame`];
//! the classifier registered for the session's exercise turns joint angles
//! and distances into stage transitions and rep counts.

#![deny(unsafe_code)]

// Re-export formcoach-core modules used throughout the engine
pub use formcoach_core::errors;
pub use formcoach_core::models;

/// Default classifier thresholds and MET values
pub mod classifier_constants;
/// Per-exercise rep detection strategies
pub mod classifiers;
/// Threshold configuration
pub mod config;
/// Angle and distance primitives
pub mod geometry;
/// Workout session state machine
pub mod session;
/// Sets, duration and calorie derivation
pub mod stats;

pub use classifiers::{Classification, ClassifierRegistry, ExerciseClassifier};
pub use config::{AngleThresholds, ClassifierThresholds, ConfigError, JumpingJackThresholds};
pub use session::{FrameReport, ProcessFrames, SessionState, WorkoutSession};
pub use stats::WorkoutSettings;
