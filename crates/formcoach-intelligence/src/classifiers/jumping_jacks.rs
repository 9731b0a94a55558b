// ABOUTME: Jumping jack classifier driven by ankle spread, arm height and head stability
// ABOUTME: Counts a rep when the athlete lands back feet-together after an arms-up jump
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use super::{visible_landmarks, Classification, ExerciseClassifier};
use crate::config::JumpingJackThresholds;
use crate::geometry::horizontal_distance;
use crate::session::SessionState;
use chrono::{DateTime, Utc};
use formcoach_core::models::{ExerciseType, LandmarkId, PoseFrame, Stage};

const JOINTS: [LandmarkId; 7] = [
    LandmarkId::LeftAnkle,
    LandmarkId::RightAnkle,
    LandmarkId::LeftWrist,
    LandmarkId::RightWrist,
    LandmarkId::LeftShoulder,
    LandmarkId::RightShoulder,
    LandmarkId::Nose,
];

/// Jumping jack rep detector
///
/// Image y grows downward, so "arms up" means both wrists have a smaller y
/// than their shoulders.
#[derive(Debug, Clone)]
pub struct JumpingJackClassifier {
    thresholds: JumpingJackThresholds,
    min_visibility: f64,
}

impl JumpingJackClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new(thresholds: JumpingJackThresholds, min_visibility: f64) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }
}

impl ExerciseClassifier for JumpingJackClassifier {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::JumpingJacks
    }

    // A standing start is feet-together, so nothing counts until the first jump.
    fn initial_stage(&self) -> Stage {
        Stage::Down
    }


    fn classify(
        &self,
        state: &mut SessionState,
        frame: &PoseFrame,
        _now: DateTime<Utc>,
    ) -> Classification {
        let [l_ankle, r_ankle, l_wrist, r_wrist, l_shoulder, r_shoulder, nose] =
            match visible_landmarks(frame, JOINTS, self.min_visibility) {
                Ok(joints) => joints,
                Err(gap) => return gap.report(state),
            };

        let spread = horizontal_distance(&l_ankle, &r_ankle);
        let arms_up = l_wrist.y < l_shoulder.y && r_wrist.y < r_shoulder.y;
        let arms_down = l_wrist.y > l_shoulder.y && r_wrist.y > r_shoulder.y;
        let shoulder_mid_x = (l_shoulder.x + r_shoulder.x) / 2.0;
        let head_stable = (nose.x - shoulder_mid_x).abs() < self.thresholds.head_stability;

        let position = if head_stable && arms_up && spread > self.thresholds.ankles_wide {
            Stage::Up
        } else if head_stable && arms_down && spread < self.thresholds.ankles_together {
            Stage::Down
        } else {
            Stage::Intermediate
        };

        let mut rep_completed = false;
        match (position, state.stage) {
            (Stage::Up, Stage::Up) => {
                state.feedback = "Arms up, now jump back together".to_owned();
            }
            (Stage::Up, _) => {
                state.stage = Stage::Up;
                state.feedback = "Arms up, now jump back together".to_owned();
            }
            (Stage::Down, Stage::Up) => {
                state.stage = Stage::Down;
                state.counter += 1;
                rep_completed = true;
                state.feedback = format!("Jumping Jack rep {}", state.counter);
            }
            _ if state.stage == Stage::Up => {
                state.feedback = "Land with feet together and arms down".to_owned();
            }
            _ if state.counter > 0 => {
                state.feedback = format!("Jumping Jack rep {}", state.counter);
            }
            _ => {
                state.feedback = "Jump out with arms overhead".to_owned();
            }
        }

        Classification::Position {
            position,
            rep_completed,
        }
    }
}
