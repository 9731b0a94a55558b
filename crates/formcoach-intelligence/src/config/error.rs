// ABOUTME: Configuration error types for classifier threshold validation
// ABOUTME: Defines error variants for invalid ranges and inconsistent threshold pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Configuration error types for classifier threshold validation.

use formcoach_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g. visibility not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A "down" threshold is not strictly below its "up" counterpart
    #[error("Inconsistent thresholds: {0}")]
    InconsistentThresholds(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
