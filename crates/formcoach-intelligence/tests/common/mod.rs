// ABOUTME: Synthetic pose builders shared by the engine integration tests
// ABOUTME: Produces frames with exact joint angles, spreads and wrist heights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use formcoach_core::models::{Landmark, LandmarkId, PoseFrame};

/// Fixed test epoch so durations are deterministic
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
}

/// `t0` plus whole seconds
pub fn at(seconds: i64) -> DateTime<Utc> {
    t0() + TimeDelta::seconds(seconds)
}

/// Three points forming `angle_deg` at the vertex, vertex at `origin`
fn hinge(origin: (f64, f64), angle_deg: f64) -> (Landmark, Landmark, Landmark) {
    let radians = angle_deg.to_radians();
    let upper = Landmark::visible(origin.0, origin.1 - 0.2);
    let vertex = Landmark::visible(origin.0, origin.1);
    let lower = Landmark::visible(
        0.2f64.mul_add(radians.sin(), origin.0),
        0.2f64.mul_add(-radians.cos(), origin.1),
    );
    (upper, vertex, lower)
}

/// Both legs with the given knee angles (hip-knee-ankle)
pub fn squat_frame(left_knee: f64, right_knee: f64) -> PoseFrame {
    let (l_hip, l_knee, l_ankle) = hinge((0.4, 0.6), left_knee);
    let (r_hip, r_knee, r_ankle) = hinge((0.6, 0.6), right_knee);
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftHip, l_hip)
        .with_landmark(LandmarkId::LeftKnee, l_knee)
        .with_landmark(LandmarkId::LeftAnkle, l_ankle)
        .with_landmark(LandmarkId::RightHip, r_hip)
        .with_landmark(LandmarkId::RightKnee, r_knee)
        .with_landmark(LandmarkId::RightAnkle, r_ankle)
}

/// Left arm with the given elbow angle (shoulder-elbow-wrist)
pub fn elbow_frame(angle: f64) -> PoseFrame {
    let (shoulder, elbow, wrist) = hinge((0.5, 0.5), angle);
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftShoulder, shoulder)
        .with_landmark(LandmarkId::LeftElbow, elbow)
        .with_landmark(LandmarkId::LeftWrist, wrist)
}

/// Left side with the given hip angle (shoulder-hip-knee)
pub fn hip_frame(angle: f64) -> PoseFrame {
    let (shoulder, hip, knee) = hinge((0.5, 0.5), angle);
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftShoulder, shoulder)
        .with_landmark(LandmarkId::LeftHip, hip)
        .with_landmark(LandmarkId::LeftKnee, knee)
}

/// Jumping jack pose: arms and legs spread when `open`, together otherwise
pub fn jack_frame(open: bool) -> PoseFrame {
    let (spread, wrist_y) = if open { (0.3, 0.1) } else { (0.02, 0.5) };
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftAnkle, Landmark::visible(0.5 - spread / 2.0, 0.9))
        .with_landmark(LandmarkId::RightAnkle, Landmark::visible(0.5 + spread / 2.0, 0.9))
        .with_landmark(LandmarkId::LeftShoulder, Landmark::visible(0.4, 0.3))
        .with_landmark(LandmarkId::RightShoulder, Landmark::visible(0.6, 0.3))
        .with_landmark(LandmarkId::LeftWrist, Landmark::visible(0.3, wrist_y))
        .with_landmark(LandmarkId::RightWrist, Landmark::visible(0.7, wrist_y))
        .with_landmark(LandmarkId::Nose, Landmark::visible(0.5, 0.2))
}

/// Yoga pose with both wrists above the nose when `holding`
pub fn yoga_frame(holding: bool) -> PoseFrame {
    let wrist_y = if holding { 0.05 } else { 0.6 };
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftWrist, Landmark::visible(0.45, wrist_y))
        .with_landmark(LandmarkId::RightWrist, Landmark::visible(0.55, wrist_y))
        .with_landmark(LandmarkId::Nose, Landmark::visible(0.5, 0.2))
}

/// Same frame with every landmark's visibility replaced
pub fn with_visibility(frame: &PoseFrame, visibility: f64) -> PoseFrame {
    frame
        .landmarks
        .iter()
        .fold(PoseFrame::empty(), |acc, (id, landmark)| {
            acc.with_landmark(*id, Landmark::new(landmark.x, landmark.y, visibility))
        })
}
