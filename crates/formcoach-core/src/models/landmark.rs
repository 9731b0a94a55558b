// ABOUTME: Body landmark types produced by the external pose oracle
// ABOUTME: Defines LandmarkId (BlazePose 33-point layout), Landmark and PoseFrame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use crate::constants::limits::POSE_LANDMARK_COUNT;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named body joint in the 33-point `BlazePose` layout
///
/// Discriminants match the landmark index emitted by the pose model, so an
/// index-ordered landmark array can be mapped without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum LandmarkId {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkId {
    /// All landmark ids in model index order
    pub const ALL: [Self; POSE_LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Index of this landmark in the model output
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Landmark id for a model output index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A single body joint position with its detection confidence
///
/// `x` and `y` are normalized to [0, 1] relative to the frame, origin at the
/// top-left corner (y grows downward). `visibility` is in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Detection confidence
    #[serde(default = "full_visibility")]
    pub visibility: f64,
}

const fn full_visibility() -> f64 {
    1.0
}

impl Landmark {
    /// Create a landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self { x, y, visibility }
    }

    /// Create a fully visible landmark
    #[must_use]
    pub const fn visible(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }
}

/// Landmarks detected in one camera frame
///
/// An empty frame means the oracle found no pose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Detected joints
    #[serde(default)]
    pub landmarks: HashMap<LandmarkId, Landmark>,
    /// Capture time reported by the landmark source, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PoseFrame {
    /// Create an empty frame (no pose detected)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style landmark insertion
    #[must_use]
    pub fn with_landmark(mut self, id: LandmarkId, landmark: Landmark) -> Self {
        self.landmarks.insert(id, landmark);
        self
    }

    /// Builder-style capture timestamp
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build a frame from an index-ordered landmark array
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidFormat` if the array is longer than the
    /// 33-point layout
    pub fn from_indexed(landmarks: &[Landmark]) -> AppResult<Self> {
        if landmarks.len() > POSE_LANDMARK_COUNT {
            return Err(AppError::invalid_format(format!(
                "Expected at most {POSE_LANDMARK_COUNT} landmarks, got {}",
                landmarks.len()
            )));
        }

        let landmarks = landmarks
            .iter()
            .zip(LandmarkId::ALL)
            .map(|(landmark, id)| (id, *landmark))
            .collect();

        Ok(Self {
            landmarks,
            timestamp: None,
        })
    }

    /// Look up one joint
    #[must_use]
    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.landmarks.get(&id)
    }

    /// Whether the oracle detected no pose in this frame
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}
