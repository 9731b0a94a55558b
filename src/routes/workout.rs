// ABOUTME: Route handlers for the workout session REST API
// ABOUTME: Session lifecycle, frame submission, exercise switch, camera toggle and voice commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Workout routes
//!
//! Every session-scoped endpoint locks exactly one session for the duration
//! of the request.

use crate::{
    constants::routes,
    errors::AppError,
    models::{ExerciseInfo, ExerciseType, PoseFrame, WorkoutStats},
    sessions::{SessionManager, SharedSession},
    voice::VoiceCommand,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Body for POST /workout/sessions
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Exercise to start with; the configured default when absent
    pub exercise: Option<String>,
}

/// Response for a newly created session
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// Session identifier
    pub session_id: Uuid,
    /// Initial stats
    pub stats: WorkoutStats,
}

/// Body for POST /workout/sessions/:id/exercise
#[derive(Debug, Deserialize)]
pub struct SwitchExerciseRequest {
    /// Display name or alias of the new exercise
    pub exercise: String,
}

/// Response for an exercise switch
#[derive(Debug, Serialize, Deserialize)]
pub struct SwitchExerciseResponse {
    /// Exercise now active
    pub exercise: ExerciseType,
    /// Stats after the reset
    pub stats: WorkoutStats,
}

/// Response for a camera toggle
#[derive(Debug, Serialize, Deserialize)]
pub struct CameraResponse {
    /// Camera state after the toggle
    pub camera_on: bool,
}

/// Body for POST /workout/sessions/:id/voice
#[derive(Debug, Deserialize)]
pub struct VoiceCommandRequest {
    /// Speech transcript
    pub command: String,
}

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    #[must_use]
    pub fn routes(manager: Arc<SessionManager>) -> Router {
        let session_path = format!("{}/:id", routes::SESSIONS);
        Router::new()
            .route(routes::EXERCISES, get(Self::handle_list_exercises))
            .route(routes::SESSIONS, post(Self::handle_create))
            .route(&session_path, delete(Self::handle_delete))
            .route(&format!("{session_path}/stats"), get(Self::handle_stats))
            .route(
                &format!("{session_path}/exercise"),
                post(Self::handle_switch_exercise),
            )
            .route(&format!("{session_path}/frames"), post(Self::handle_frame))
            .route(
                &format!("{session_path}/camera/toggle"),
                post(Self::handle_toggle_camera),
            )
            .route(&format!("{session_path}/voice"), post(Self::handle_voice))
            .with_state(manager)
    }

    fn parse_session_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| AppError::invalid_input(format!("Invalid session id: {id}")))
    }

    /// Resolve the session addressed by a path id, marking it active
    fn session(manager: &SessionManager, id: &str) -> Result<SharedSession, AppError> {
        manager.get(Self::parse_session_id(id)?, Utc::now())
    }

    /// Handle GET /workout/exercises - Exercise catalog
    async fn handle_list_exercises() -> Json<Vec<ExerciseInfo>> {
        Json(ExerciseType::ALL.map(ExerciseType::info).to_vec())
    }

    /// Handle POST /workout/sessions - Start a session
    async fn handle_create(
        State(manager): State<Arc<SessionManager>>,
        body: Option<Json<CreateSessionRequest>>,
    ) -> Result<Response, AppError> {
        let request = body.map(|Json(request)| request).unwrap_or_default();
        let exercise = request
            .exercise
            .as_deref()
            .map(str::parse::<ExerciseType>)
            .transpose()?;

        let now = Utc::now();
        let (session_id, session) = manager.create(exercise, now)?;
        let stats = session.lock().await.stats(now);

        Ok((
            StatusCode::CREATED,
            Json(CreateSessionResponse { session_id, stats }),
        )
            .into_response())
    }

    /// Handle DELETE /workout/sessions/:id - End a session
    async fn handle_delete(
        State(manager): State<Arc<SessionManager>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        manager.remove(Self::parse_session_id(&id)?)?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle GET /workout/sessions/:id/stats - Stats snapshot
    async fn handle_stats(
        State(manager): State<Arc<SessionManager>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let session = Self::session(&manager, &id)?;
        let stats = session.lock().await.stats(Utc::now());
        Ok((StatusCode::OK, Json(stats)).into_response())
    }

    /// Handle POST /workout/sessions/:id/exercise - Switch exercise
    async fn handle_switch_exercise(
        State(manager): State<Arc<SessionManager>>,
        Path(id): Path<String>,
        Json(body): Json<SwitchExerciseRequest>,
    ) -> Result<Response, AppError> {
        let session = Self::session(&manager, &id)?;
        let now = Utc::now();
        let mut workout = session.lock().await;
        let exercise = workout.switch_exercise(&body.exercise, now)?;

        Ok((
            StatusCode::OK,
            Json(SwitchExerciseResponse {
                exercise,
                stats: workout.stats(now),
            }),
        )
            .into_response())
    }

    /// Handle POST /workout/sessions/:id/frames - Classify one frame
    ///
    /// Live frames are classified at server receipt time. A client-supplied
    /// timestamp is ignored so holds, duration and `/stats` share one clock.
    async fn handle_frame(
        State(manager): State<Arc<SessionManager>>,
        Path(id): Path<String>,
        Json(frame): Json<PoseFrame>,
    ) -> Result<Response, AppError> {
        let session = Self::session(&manager, &id)?;
        let now = Utc::now();
        let report = session.lock().await.process_frame(&frame, now);

        debug!(session_id = %id, reps = report.stats.reps, stage = %report.stage, "frame processed");
        Ok((StatusCode::OK, Json(report)).into_response())
    }

    /// Handle POST /workout/sessions/:id/camera/toggle - Pause or resume
    async fn handle_toggle_camera(
        State(manager): State<Arc<SessionManager>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let session = Self::session(&manager, &id)?;
        let camera_on = session.lock().await.toggle_camera();
        Ok((StatusCode::OK, Json(CameraResponse { camera_on })).into_response())
    }

    /// Handle POST /workout/sessions/:id/voice - Apply a voice command
    async fn handle_voice(
        State(manager): State<Arc<SessionManager>>,
        Path(id): Path<String>,
        Json(body): Json<VoiceCommandRequest>,
    ) -> Result<Response, AppError> {
        let session = Self::session(&manager, &id)?;
        let command = VoiceCommand::parse(&body.command);
        let response = command.apply(&mut *session.lock().await);
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
