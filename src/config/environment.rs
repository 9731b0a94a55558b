// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server port, session limits, workout settings and classifier thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Environment-based configuration management

use crate::constants::{defaults, limits, ports};
use crate::models::ExerciseType;
use anyhow::{bail, Context, Result};
use formcoach_intelligence::{ClassifierThresholds, WorkoutSettings};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Workout-level settings shared by every session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutConfig {
    /// Reps per completed set
    pub reps_per_set: u32,
    /// Body weight for calorie estimates
    pub body_weight_kg: f64,
    /// Exercise for sessions created without one
    pub default_exercise: ExerciseType,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            reps_per_set: defaults::REPS_PER_SET,
            body_weight_kg: defaults::BODY_WEIGHT_KG,
            default_exercise: ExerciseType::default(),
        }
    }
}

impl WorkoutConfig {
    /// Session settings derived from this config
    #[must_use]
    pub const fn settings(&self) -> WorkoutSettings {
        WorkoutSettings {
            reps_per_set: self.reps_per_set,
            body_weight_kg: self.body_weight_kg,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Maximum number of live workout sessions
    pub max_sessions: usize,
    /// Seconds without a request before a session is evicted
    pub session_idle_timeout_secs: u64,
    /// Workout settings
    pub workout: WorkoutConfig,
    /// Classifier thresholds
    pub classifier: ClassifierThresholds,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            max_sessions: limits::DEFAULT_MAX_SESSIONS,
            session_idle_timeout_secs: limits::DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
            workout: WorkoutConfig::default(),
            classifier: ClassifierThresholds::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            max_sessions: env_var_or(
                "MAX_WORKOUT_SESSIONS",
                &limits::DEFAULT_MAX_SESSIONS.to_string(),
            )
            .parse()
            .context("Invalid MAX_WORKOUT_SESSIONS value")?,
            session_idle_timeout_secs: env_var_or(
                "SESSION_IDLE_TIMEOUT_SECS",
                &limits::DEFAULT_SESSION_IDLE_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid SESSION_IDLE_TIMEOUT_SECS value")?,
            workout: WorkoutConfig {
                reps_per_set: env_var_or(
                    "WORKOUT_REPS_PER_SET",
                    &defaults::REPS_PER_SET.to_string(),
                )
                .parse()
                .context("Invalid WORKOUT_REPS_PER_SET value")?,
                body_weight_kg: env_var_or(
                    "WORKOUT_BODY_WEIGHT_KG",
                    &defaults::BODY_WEIGHT_KG.to_string(),
                )
                .parse()
                .context("Invalid WORKOUT_BODY_WEIGHT_KG value")?,
                default_exercise: env_var_or(
                    "WORKOUT_DEFAULT_EXERCISE",
                    defaults::DEFAULT_EXERCISE,
                )
                .parse()
                .context("Invalid WORKOUT_DEFAULT_EXERCISE value")?,
            },
            classifier: ClassifierThresholds::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is unusable
    pub fn validate(&self) -> Result<()> {
        if self.max_sessions == 0 {
            bail!("MAX_WORKOUT_SESSIONS must be at least 1");
        }
        if self.session_idle_timeout_secs == 0 {
            bail!("SESSION_IDLE_TIMEOUT_SECS must be at least 1");
        }
        if self.workout.reps_per_set == 0 {
            bail!("WORKOUT_REPS_PER_SET must be at least 1");
        }
        if !self.workout.body_weight_kg.is_finite() || self.workout.body_weight_kg <= 0.0 {
            bail!("WORKOUT_BODY_WEIGHT_KG must be a positive number");
        }
        self.classifier
            .validate()
            .context("Invalid classifier thresholds")?;
        Ok(())
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FormCoach Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Max Sessions: {}\n\
             - Session Idle Timeout: {} s\n\
             - Reps Per Set: {}\n\
             - Body Weight: {} kg\n\
             - Default Exercise: {}\n\
             - Min Visibility: {}\n\
             - Yoga Hold: {} s",
            self.http_port,
            self.environment,
            self.max_sessions,
            self.session_idle_timeout_secs,
            self.workout.reps_per_set,
            self.workout.body_weight_kg,
            self.workout.default_exercise,
            self.classifier.min_visibility,
            self.classifier.yoga_hold_seconds,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
