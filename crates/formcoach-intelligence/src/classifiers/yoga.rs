// ABOUTME: Timed hold classifier for overhead yoga poses
// ABOUTME: A rep is one uninterrupted hold with both wrists above the nose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use super::{visible_landmarks, Classification, ExerciseClassifier};
use crate::session::SessionState;
use chrono::{DateTime, TimeDelta, Utc};
use formcoach_core::models::{ExerciseType, LandmarkId, PoseFrame, Stage};

const JOINTS: [LandmarkId; 3] = [
    LandmarkId::LeftWrist,
    LandmarkId::RightWrist,
    LandmarkId::Nose,
];

/// Hold-based classifier
///
/// `stage` is `up` while the pose is held and `down` once it is broken. A
/// guarded frame drops the hold timer but keeps the stage.
#[derive(Debug, Clone)]
pub struct YogaHoldClassifier {
    hold_seconds: u64,
    min_visibility: f64,
}

impl YogaHoldClassifier {
    /// Create a classifier requiring `hold_seconds` of continuous hold
    #[must_use]
    pub const fn new(hold_seconds: u64, min_visibility: f64) -> Self {
        Self {
            hold_seconds,
            min_visibility,
        }
    }

    fn release(state: &mut SessionState) {
        state.hold_start = None;
        state.stage = Stage::Down;
    }
}

impl ExerciseClassifier for YogaHoldClassifier {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Yoga
    }

    fn initial_stage(&self) -> Stage {
        Stage::Down
    }


    fn classify(
        &self,
        state: &mut SessionState,
        frame: &PoseFrame,
        now: DateTime<Utc>,
    ) -> Classification {
        let [l_wrist, r_wrist, nose] = match visible_landmarks(frame, JOINTS, self.min_visibility)
        {
            Ok(joints) => joints,
            Err(gap) => {
                state.hold_start = None;
                return gap.report(state);
            }
        };

        if !(l_wrist.y < nose.y && r_wrist.y < nose.y) {
            Self::release(state);
            state.feedback = "Adjust pose".to_owned();
            return Classification::Released;
        }

        state.stage = Stage::Up;
        let started = *state.hold_start.get_or_insert(now);
        let held = (now - started).max(TimeDelta::zero());
        let held_seconds = u64::try_from(held.num_seconds()).unwrap_or(0);

        let rep_completed = held_seconds >= self.hold_seconds;
        if rep_completed {
            state.counter += 1;
            state.hold_start = None;
            state.feedback = format!("Yoga hold {} completed", state.counter);
        } else {
            state.feedback = format!("Holding pose for {held_seconds} seconds");
        }

        Classification::Holding {
            held_seconds,
            rep_completed,
        }
    }
}
