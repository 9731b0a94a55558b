// ABOUTME: Main library entry point for the FormCoach rep counter service
// ABOUTME: Wires configuration, logging, landmark sources, sessions and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![deny(unsafe_code)]

//! # FormCoach
//!
//! Real-time exercise repetition counting. An external pose oracle produces
//! body landmarks per camera frame; FormCoach turns that stream into reps,
//! sets, elapsed time and a calorie estimate, one stateful session per user.
//!
//! ## Architecture
//!
//! - **formcoach-core**: errors, constants and data models
//! - **formcoach-intelligence**: geometry, classifiers and the session state machine
//! - **this crate**: environment configuration, logging, landmark sources,
//!   the multi-session manager and the HTTP API
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use formcoach::config::environment::ServerConfig;
//! use formcoach::routes::build_router;
//! use formcoach::sessions::SessionManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let manager = Arc::new(SessionManager::from_config(&config));
//!     let app = build_router(manager);
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Re-export formcoach-core modules so `crate::errors::*` etc. resolve here too
pub use formcoach_core::constants;
pub use formcoach_core::errors;
pub use formcoach_core::models;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP route definitions
pub mod routes;

/// Multi-session registry
pub mod sessions;

/// Landmark sources and frame streams
pub mod sources;

/// Voice command parsing
pub mod voice;
