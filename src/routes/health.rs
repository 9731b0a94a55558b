// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness reports service version, readiness reports live session load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Health check routes for service monitoring

use crate::{constants::routes, sessions::SessionManager};
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(manager: Arc<SessionManager>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(manager)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(manager): State<Arc<SessionManager>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "sessions": manager.len(),
            "max_sessions": manager.max_sessions(),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
