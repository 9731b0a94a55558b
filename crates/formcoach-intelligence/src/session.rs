// ABOUTME: Workout session state and the frame-processing orchestrator
// ABOUTME: Routes each frame to the active classifier, handles exercise switches and camera pause
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Workout Session
//!
//! A [`WorkoutSession`] owns one [`SessionState`] and classifies frames one
//! at a time, in arrival order. Sessions share nothing but the read-only
//! [`ClassifierRegistry`].

use crate::classifiers::{Classification, ClassifierRegistry};
use crate::stats::{elapsed_seconds, estimate_calories, sets_completed, WorkoutSettings};
use chrono::{DateTime, Utc};
use formcoach_core::errors::AppResult;
use formcoach_core::models::{ExerciseType, PoseFrame, Stage, WorkoutStats};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Mutable state of one workout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Active exercise
    pub exercise: ExerciseType,
    /// Debounce stage of the active classifier
    pub stage: Stage,
    /// Reps completed for the active exercise
    pub counter: u32,
    /// Start of the active exercise
    pub start_time: DateTime<Utc>,
    /// Start of the current hold, hold-based exercises only
    pub hold_start: Option<DateTime<Utc>>,
    /// Latest feedback text
    pub feedback: String,
}

impl SessionState {
    /// Fresh state for `exercise` starting at `now`
    #[must_use]
    pub const fn new(exercise: ExerciseType, initial_stage: Stage, now: DateTime<Utc>) -> Self {
        Self {
            exercise,
            stage: initial_stage,
            counter: 0,
            start_time: now,
            hold_start: None,
            feedback: String::new(),
        }
    }
}

/// Outcome of one submitted frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// What the classifier made of the frame
    pub classification: Classification,
    /// Stage after the frame
    pub stage: Stage,
    /// Stats snapshot after the frame
    pub stats: WorkoutStats,
}

/// One user's workout: state, settings and camera flag
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    state: SessionState,
    registry: Arc<ClassifierRegistry>,
    settings: WorkoutSettings,
    camera_enabled: bool,
    frames_processed: u64,
}

impl WorkoutSession {
    /// Start a session on `exercise` at `now`
    #[must_use]
    pub fn new(
        exercise: ExerciseType,
        registry: Arc<ClassifierRegistry>,
        settings: WorkoutSettings,
        now: DateTime<Utc>,
    ) -> Self {
        let stage = registry.initial_stage(exercise);
        Self {
            state: SessionState::new(exercise, stage, now),
            registry,
            settings,
            camera_enabled: true,
            frames_processed: 0,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Active exercise
    #[must_use]
    pub const fn exercise(&self) -> ExerciseType {
        self.state.exercise
    }

    /// Settings used for stats derivation
    #[must_use]
    pub const fn settings(&self) -> WorkoutSettings {
        self.settings
    }

    /// Frames classified so far (paused frames excluded)
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Whether frames are currently being classified
    #[must_use]
    pub const fn camera_enabled(&self) -> bool {
        self.camera_enabled
    }

    /// Enable or disable classification
    pub fn set_camera_enabled(&mut self, enabled: bool) {
        if self.camera_enabled != enabled {
            info!(camera_on = enabled, "camera state changed");
        }
        self.camera_enabled = enabled;
    }

    /// Flip the camera flag, returning the new value
    pub fn toggle_camera(&mut self) -> bool {
        self.set_camera_enabled(!self.camera_enabled);
        self.camera_enabled
    }

    /// Classify one frame observed at `now`
    pub fn process_frame(&mut self, frame: &PoseFrame, now: DateTime<Utc>) -> FrameReport {
        let classification = if self.camera_enabled {
            self.classify(frame, now)
        } else {
            Classification::Paused
        };

        FrameReport {
            classification,
            stage: self.state.stage,
            stats: self.stats(now),
        }
    }

    fn classify(&mut self, frame: &PoseFrame, now: DateTime<Utc>) -> Classification {
        let Some(classifier) = self.registry.get(self.state.exercise) else {
            warn!(exercise = %self.state.exercise, "no classifier registered");
            self.state.feedback = format!("{} is not supported", self.state.exercise);
            return Classification::Unmeasurable;
        };

        self.frames_processed += 1;
        let classification = classifier.classify(&mut self.state, frame, now);
        if classification.rep_completed() {
            debug!(
                exercise = %self.state.exercise,
                reps = self.state.counter,
                "rep completed"
            );
        }
        classification
    }

    /// Switch to the exercise named `name`
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for an unknown name; the session is
    /// left untouched in that case
    pub fn switch_exercise(&mut self, name: &str, now: DateTime<Utc>) -> AppResult<ExerciseType> {
        let exercise: ExerciseType = name.parse()?;
        self.set_exercise(exercise, now);
        Ok(exercise)
    }

    /// Reset the session onto `exercise`
    pub fn set_exercise(&mut self, exercise: ExerciseType, now: DateTime<Utc>) {
        info!(
            from = %self.state.exercise,
            to = %exercise,
            reps = self.state.counter,
            "exercise switched"
        );
        self.state = SessionState::new(exercise, self.registry.initial_stage(exercise), now);
    }

    /// Stats snapshot as of `now`
    #[must_use]
    pub fn stats(&self, now: DateTime<Utc>) -> WorkoutStats {
        let duration = elapsed_seconds(self.state.start_time, now);
        WorkoutStats {
            exercise: self.state.exercise,
            reps: self.state.counter,
            duration,
            sets: sets_completed(self.state.counter, self.settings.reps_per_set),
            calories: estimate_calories(
                self.state.exercise,
                self.settings.body_weight_kg,
                duration,
            ),
            feedback: self.state.feedback.clone(),
        }
    }

    /// Lazily classify `frames` in order
    ///
    /// Each frame is evaluated at its own timestamp, or the wall clock when
    /// it has none. Dropping the iterator stops consumption.
    pub fn process_frames<I>(&mut self, frames: I) -> ProcessFrames<'_, I::IntoIter>
    where
        I: IntoIterator<Item = PoseFrame>,
    {
        ProcessFrames {
            session: self,
            frames: frames.into_iter(),
        }
    }
}

/// Iterator returned by [`WorkoutSession::process_frames`]
#[derive(Debug)]
pub struct ProcessFrames<'a, I> {
    session: &'a mut WorkoutSession,
    frames: I,
}

impl<I> Iterator for ProcessFrames<'_, I>
where
    I: Iterator<Item = PoseFrame>,
{
    type Item = FrameReport;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next()?;
        let now = frame.timestamp.unwrap_or_else(Utc::now);
        Some(self.session.process_frame(&frame, now))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}
