// ABOUTME: Squat classifier using both knee angles (hip-knee-ankle)
// ABOUTME: Counts a rep when the athlete stands back up out of a full squat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use super::{visible_landmarks, Classification, ExerciseClassifier};
use crate::config::AngleThresholds;
use crate::geometry::joint_angle;
use crate::session::SessionState;
use chrono::{DateTime, Utc};
use formcoach_core::constants::feedback;
use formcoach_core::models::{ExerciseType, LandmarkId, PoseFrame, Stage};
use tracing::trace;

const JOINTS: [LandmarkId; 6] = [
    LandmarkId::LeftHip,
    LandmarkId::LeftKnee,
    LandmarkId::LeftAnkle,
    LandmarkId::RightHip,
    LandmarkId::RightKnee,
    LandmarkId::RightAnkle,
];

/// Squat rep detector; both legs must agree on the position
#[derive(Debug, Clone)]
pub struct SquatClassifier {
    thresholds: AngleThresholds,
    min_visibility: f64,
}

impl SquatClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new(thresholds: AngleThresholds, min_visibility: f64) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }
}

impl ExerciseClassifier for SquatClassifier {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Squats
    }

    fn initial_stage(&self) -> Stage {
        Stage::Up
    }


    fn classify(
        &self,
        state: &mut SessionState,
        frame: &PoseFrame,
        _now: DateTime<Utc>,
    ) -> Classification {
        let [l_hip, l_knee, l_ankle, r_hip, r_knee, r_ankle] =
            match visible_landmarks(frame, JOINTS, self.min_visibility) {
                Ok(joints) => joints,
                Err(gap) => return gap.report(state),
            };

        let (Some(left), Some(right)) = (
            joint_angle(&l_hip, &l_knee, &l_ankle),
            joint_angle(&r_hip, &r_knee, &r_ankle),
        ) else {
            feedback::ANGLE_UNAVAILABLE.clone_into(&mut state.feedback);
            return Classification::Unmeasurable;
        };
        trace!(left_knee = left, right_knee = right, "squat knee angles");

        let down = self.thresholds.down_angle;
        let up = self.thresholds.up_angle;
        let mut rep_completed = false;

        let position = if left < down && right < down {
            if state.stage == Stage::Down {
                state.feedback = "Stay down or go lower".to_owned();
            } else {
                state.stage = Stage::Down;
                state.feedback = "Squat down detected".to_owned();
            }
            Stage::Down
        } else if left > up && right > up {
            if state.stage == Stage::Down {
                state.stage = Stage::Up;
                state.counter += 1;
                rep_completed = true;
                state.feedback = format!("Squat rep {} completed", state.counter);
            } else {
                state.feedback = "Stand straight".to_owned();
            }
            Stage::Up
        } else {
            state.feedback = "Perform a full squat (go lower or stand fully)".to_owned();
            Stage::Intermediate
        };

        Classification::Position {
            position,
            rep_completed,
        }
    }
}
