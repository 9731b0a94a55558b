// ABOUTME: HTTP server binary for the FormCoach rep counter
// ABOUTME: Loads environment configuration, initializes logging and serves the workout API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # FormCoach Server Binary
//!
//! Serves per-user workout sessions over HTTP. The pose oracle (a browser or
//! camera client) posts landmark frames; the server answers with reps, sets,
//! duration, calories and form feedback.

use anyhow::{Context, Result};
use clap::Parser;
use formcoach::{
    config::ServerConfig,
    constants::{limits, service_names},
    logging,
    routes::build_router,
    sessions::SessionManager,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "formcoach-server")]
#[command(about = "FormCoach - real-time exercise rep counter API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting {}", service_names::FORMCOACH_SERVER);
    info!("{}", config.summary());

    let manager = Arc::new(SessionManager::from_config(&config));
    let sweeper =
        manager.spawn_idle_sweeper(Duration::from_secs(limits::SESSION_SWEEP_INTERVAL_SECS));
    let app = build_router(manager);

    let listener = TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", config.http_port))?;
    info!("Server listening on port {}", config.http_port);
    display_available_endpoints(config.http_port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    sweeper.abort();
    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET    http://127.0.0.1:{port}/health");
    info!("   Readiness:         GET    http://127.0.0.1:{port}/ready");
    info!("   Exercises:         GET    http://127.0.0.1:{port}/workout/exercises");
    info!("   Create Session:    POST   http://127.0.0.1:{port}/workout/sessions");
    info!("   End Session:       DELETE http://127.0.0.1:{port}/workout/sessions/{{id}}");
    info!("   Stats:             GET    http://127.0.0.1:{port}/workout/sessions/{{id}}/stats");
    info!("   Switch Exercise:   POST   http://127.0.0.1:{port}/workout/sessions/{{id}}/exercise");
    info!("   Submit Frame:      POST   http://127.0.0.1:{port}/workout/sessions/{{id}}/frames");
    info!("   Toggle Camera:     POST   http://127.0.0.1:{port}/workout/sessions/{{id}}/camera/toggle");
    info!("   Voice Command:     POST   http://127.0.0.1:{port}/workout/sessions/{{id}}/voice");
    info!("=== End of Endpoint List ===");
}
