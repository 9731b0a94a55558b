// ABOUTME: Single-joint flex/extend classifier shared by push-ups, curls and deadlifts
// ABOUTME: Counts a rep on the extension that follows a full flexion
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

/// Text shown at each point of the cycle
#[derive(Debug, Clone, Copy)]
struct Cues {
    /// Prefix of the "<label> rep <n>" message
    rep_label: &'static str,
    /// Shown before the first flexion and between reps
    ready: &'static str,
    /// Shown while flexed, waiting for the extension
    flexed: &'static str,
}

/// Flex/extend cycle over one joint angle
///
/// The angle is measured at the middle landmark of `joints`. Falling below
/// the down angle enters `down`; rising above the up angle from `down` counts
/// a rep and returns to `up`.
#[derive(Debug, Clone)]
pub struct AngleCycleClassifier {
    exercise: ExerciseType,
    joints: [LandmarkId; 3],
    thresholds: AngleThresholds,
    min_visibility: f64,
    cues: Cues,
}

impl AngleCycleClassifier {
    /// Push-ups on the left elbow (shoulder-elbow-wrist)
    #[must_use]
    pub const fn push_ups(thresholds: AngleThresholds, min_visibility: f64) -> Self {
        Self {
            exercise: ExerciseType::PushUps,
            joints: [
                LandmarkId::LeftShoulder,
                LandmarkId::LeftElbow,
                LandmarkId::LeftWrist,
            ],
            thresholds,
            min_visibility,
            cues: Cues {
                rep_label: "Push-up",
                ready: "Lower your chest toward the floor",
                flexed: "Good depth, push back up",
            },
        }
    }

    /// Biceps curls on the left elbow (shoulder-elbow-wrist)
    #[must_use]
    pub const fn weightlifting(thresholds: AngleThresholds, min_visibility: f64) -> Self {
        Self {
            exercise: ExerciseType::Weightlifting,
            joints: [
                LandmarkId::LeftShoulder,
                LandmarkId::LeftElbow,
                LandmarkId::LeftWrist,
            ],
            thresholds,
            min_visibility,
            cues: Cues {
                rep_label: "Lift",
                ready: "Curl the weight up",
                flexed: "Full curl, lower the weight slowly",
            },
        }
    }

    /// Deadlifts on the left hip (shoulder-hip-knee)
    #[must_use]
    pub const fn deadlifts(thresholds: AngleThresholds, min_visibility: f64) -> Self {
        Self {
            exercise: ExerciseType::Deadlifts,
            joints: [
                LandmarkId::LeftShoulder,
                LandmarkId::LeftHip,
                LandmarkId::LeftKnee,
            ],
            thresholds,
            min_visibility,
            cues: Cues {
                rep_label: "Deadlift",
                ready: "Hinge at the hips",
                flexed: "Drive your hips forward to stand tall",
            },
        }
    }

    fn rep_message(&self, counter: u32) -> String {
        format!("{} rep {counter}", self.cues.rep_label)
    }
}

impl ExerciseClassifier for AngleCycleClassifier {
    fn exercise(&self) -> ExerciseType {
        self.exercise
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
        let [a, vertex, c] = match visible_landmarks(frame, self.joints, self.min_visibility) {
            Ok(joints) => joints,
            Err(gap) => return gap.report(state),
        };

        let Some(angle) = joint_angle(&a, &vertex, &c) else {
            feedback::ANGLE_UNAVAILABLE.clone_into(&mut state.feedback);
            return Classification::Unmeasurable;
        };

        let position = if angle < self.thresholds.down_angle {
            Stage::Down
        } else if angle > self.thresholds.up_angle {
            Stage::Up
        } else {
            Stage::Intermediate
        };

        let mut rep_completed = false;
        match (position, state.stage) {
            (Stage::Down, _) => {
                state.stage = Stage::Down;
                self.cues.flexed.clone_into(&mut state.feedback);
            }
            (Stage::Up, Stage::Down) => {
                state.stage = Stage::Up;
                state.counter += 1;
                rep_completed = true;
                state.feedback = self.rep_message(state.counter);
            }
            (_, Stage::Down) => self.cues.flexed.clone_into(&mut state.feedback),
            _ if state.counter > 0 => state.feedback = self.rep_message(state.counter),
            _ => self.cues.ready.clone_into(&mut state.feedback),
        }

        Classification::Position {
            position,
            rep_completed,
        }
    }
}
