// ABOUTME: Route module organization for the FormCoach HTTP API
// ABOUTME: Merges health and workout routes into one traced router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Route module for FormCoach
//!
//! Each domain module owns its route definitions and thin handlers that
//! delegate to the session manager.

/// Health check and readiness routes
pub mod health;
/// Workout session routes
pub mod workout;

pub use health::HealthRoutes;
pub use workout::WorkoutRoutes;

use crate::sessions::SessionManager;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router
#[must_use]
pub fn build_router(manager: Arc<SessionManager>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&manager)))
        .merge(WorkoutRoutes::routes(manager))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
