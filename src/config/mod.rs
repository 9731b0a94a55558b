// ABOUTME: Configuration module for the FormCoach server and replay tool
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig, WorkoutConfig};
