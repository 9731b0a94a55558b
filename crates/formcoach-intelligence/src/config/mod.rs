// ABOUTME: Classifier configuration module
// ABOUTME: Threshold settings loaded from environment with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

/// Configuration error types
pub mod error;
/// Per-exercise geometry thresholds
pub mod thresholds;

pub use error::ConfigError;
pub use thresholds::{AngleThresholds, ClassifierThresholds, JumpingJackThresholds};
