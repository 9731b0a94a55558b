// ABOUTME: Exercise classifier strategy trait, landmark guard and classifier registry
// ABOUTME: One state machine per exercise, selected by the session's current exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! # Exercise Classifiers
//!
//! Every classifier follows the same shape:
//!
//! 1. Guard on the landmarks it needs: an empty frame or a required joint
//!    below the visibility threshold yields feedback only; stage and counter
//!    stay untouched.
//! 2. Measure one or more features (joint angle, ankle spread, wrist height).
//! 3. Map the frame to a position using the configured thresholds.
//! 4. Count a rep exactly once, on the transition into the completing stage
//!    from the other stage.
//! 5. Write the stage and the feedback text back into the session state.
//!
//! Classifiers are stateless strategy objects; all mutable state lives in
//! [`SessionState`], so one registry can serve any number of sessions.

mod angle_cycle;
mod jumping_jacks;
mod squats;
mod yoga;

pub use angle_cycle::AngleCycleClassifier;
pub use jumping_jacks::JumpingJackClassifier;
pub use squats::SquatClassifier;
pub use yoga::YogaHoldClassifier;

use crate::config::ClassifierThresholds;
use crate::session::SessionState;
use chrono::{DateTime, Utc};
use formcoach_core::constants::feedback;
use formcoach_core::models::{ExerciseType, Landmark, LandmarkId, PoseFrame, Stage};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Result of classifying one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// Frame mapped to a position of a two-stage exercise
    Position {
        /// Position of this frame alone (may be `intermediate`)
        position: Stage,
        /// Whether this frame completed a rep
        rep_completed: bool,
    },
    /// Hold condition satisfied
    Holding {
        /// Whole seconds held so far
        held_seconds: u64,
        /// Whether this frame completed a hold rep
        rep_completed: bool,
    },
    /// Hold condition not satisfied; timer cleared
    Released,
    /// A joint angle could not be measured
    Unmeasurable,
    /// Required landmarks missing or low-confidence
    NotVisible,
    /// The oracle found no pose at all
    NoPose,
    /// Camera paused; frame was not classified
    Paused,
}

impl Classification {
    /// Whether this frame incremented the rep counter
    #[must_use]
    pub const fn rep_completed(&self) -> bool {
        match self {
            Self::Position { rep_completed, .. } | Self::Holding { rep_completed, .. } => {
                *rep_completed
            }
            _ => false,
        }
    }
}

/// Per-exercise rep detection strategy
pub trait ExerciseClassifier: Send + Sync + fmt::Debug {
    /// Exercise handled by this classifier
    fn exercise(&self) -> ExerciseType;

    /// Stage a fresh session starts in
    fn initial_stage(&self) -> Stage;

    /// Classify one frame, mutating `state` in place
    fn classify(
        &self,
        state: &mut SessionState,
        frame: &PoseFrame,
        now: DateTime<Utc>,
    ) -> Classification;
}

/// Why a frame could not be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseGap {
    /// Empty frame
    NoPose,
    /// A required landmark is missing or below the visibility threshold
    NotVisible,
}

impl PoseGap {
    /// Record the gap in the session feedback and convert to a classification
    pub fn report(self, state: &mut SessionState) -> Classification {
        match self {
            Self::NoPose => {
                feedback::NO_POSE.clone_into(&mut state.feedback);
                Classification::NoPose
            }
            Self::NotVisible => {
                feedback::NOT_VISIBLE.clone_into(&mut state.feedback);
                Classification::NotVisible
            }
        }
    }
}

/// Fetch required landmarks, all at or above `min_visibility`
///
/// # Errors
///
/// Returns `PoseGap::NoPose` for an empty frame and `PoseGap::NotVisible`
/// when any requested joint is missing or not confident enough
pub fn visible_landmarks<const N: usize>(
    frame: &PoseFrame,
    ids: [LandmarkId; N],
    min_visibility: f64,
) -> Result<[Landmark; N], PoseGap> {
    if frame.is_empty() {
        return Err(PoseGap::NoPose);
    }

    let mut joints = [Landmark::new(0.0, 0.0, 0.0); N];
    for (slot, id) in joints.iter_mut().zip(ids) {
        *slot = *frame
            .get(id)
            .filter(|landmark| landmark.visibility >= min_visibility)
            .ok_or(PoseGap::NotVisible)?;
    }
    Ok(joints)
}

/// Classifier lookup keyed by exercise
#[derive(Debug)]
pub struct ClassifierRegistry {
    classifiers: HashMap<ExerciseType, Box<dyn ExerciseClassifier>>,
}

impl ClassifierRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn empty() -> Self {
        Self {
            classifiers: HashMap::new(),
        }
    }

    /// Registry with a classifier for every supported exercise
    #[must_use]
    pub fn with_thresholds(thresholds: &ClassifierThresholds) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(JumpingJackClassifier::new(
            thresholds.jumping_jacks,
            thresholds.min_visibility,
        )));
        registry.register(Box::new(SquatClassifier::new(
            thresholds.squats,
            thresholds.min_visibility,
        )));
        registry.register(Box::new(AngleCycleClassifier::push_ups(
            thresholds.push_ups,
            thresholds.min_visibility,
        )));
        registry.register(Box::new(AngleCycleClassifier::weightlifting(
            thresholds.weightlifting,
            thresholds.min_visibility,
        )));
        registry.register(Box::new(AngleCycleClassifier::deadlifts(
            thresholds.deadlifts,
            thresholds.min_visibility,
        )));
        registry.register(Box::new(YogaHoldClassifier::new(
            thresholds.yoga_hold_seconds,
            thresholds.min_visibility,
        )));
        registry
    }

    /// Register (or replace) the classifier for its exercise
    pub fn register(&mut self, classifier: Box<dyn ExerciseClassifier>) {
        self.classifiers.insert(classifier.exercise(), classifier);
    }

    /// Classifier for an exercise
    #[must_use]
    pub fn get(&self, exercise: ExerciseType) -> Option<&dyn ExerciseClassifier> {
        self.classifiers.get(&exercise).map(AsRef::as_ref)
    }

    /// Stage a session for `exercise` starts in
    #[must_use]
    pub fn initial_stage(&self, exercise: ExerciseType) -> Stage {
        self.get(exercise)
            .map_or(Stage::Up, ExerciseClassifier::initial_stage)
    }
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::with_thresholds(&ClassifierThresholds::default())
    }
}
