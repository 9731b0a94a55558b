// ABOUTME: Synthetic pose frames for server-level integration tests
// ABOUTME: Builds squat and push-up poses with exact joint angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors
#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use formcoach::models::{Landmark, LandmarkId, PoseFrame};

/// Fixed test epoch so durations are deterministic
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
}

/// `t0` plus whole seconds
pub fn at(seconds: i64) -> DateTime<Utc> {
    t0() + TimeDelta::seconds(seconds)
}

/// Upper, vertex and lower points forming `angle_deg` at the vertex
fn hinge(origin: (f64, f64), angle_deg: f64) -> [Landmark; 3] {
    let radians = angle_deg.to_radians();
    [
        Landmark::visible(origin.0, origin.1 - 0.2),
        Landmark::visible(origin.0, origin.1),
        Landmark::visible(
            0.2f64.mul_add(radians.sin(), origin.0),
            0.2f64.mul_add(-radians.cos(), origin.1),
        ),
    ]
}

/// Both legs bent to `knee_angle`
pub fn squat_frame(knee_angle: f64) -> PoseFrame {
    let [l_hip, l_knee, l_ankle] = hinge((0.4, 0.6), knee_angle);
    let [r_hip, r_knee, r_ankle] = hinge((0.6, 0.6), knee_angle);
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftHip, l_hip)
        .with_landmark(LandmarkId::LeftKnee, l_knee)
        .with_landmark(LandmarkId::LeftAnkle, l_ankle)
        .with_landmark(LandmarkId::RightHip, r_hip)
        .with_landmark(LandmarkId::RightKnee, r_knee)
        .with_landmark(LandmarkId::RightAnkle, r_ankle)
}

/// Left arm bent to `elbow_angle`
pub fn push_up_frame(elbow_angle: f64) -> PoseFrame {
    let [shoulder, elbow, wrist] = hinge((0.5, 0.5), elbow_angle);
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftShoulder, shoulder)
        .with_landmark(LandmarkId::LeftElbow, elbow)
        .with_landmark(LandmarkId::LeftWrist, wrist)
}

/// Stand, squat, stand: one full rep, one second apart
pub fn squat_rep() -> Vec<PoseFrame> {
    vec![
        squat_frame(170.0).at(at(1)),
        squat_frame(90.0).at(at(2)),
        squat_frame(170.0).at(at(3)),
    ]
}

/// Both wrists raised above the nose
pub fn yoga_hold_frame() -> PoseFrame {
    PoseFrame::empty()
        .with_landmark(LandmarkId::LeftWrist, Landmark::visible(0.45, 0.05))
        .with_landmark(LandmarkId::RightWrist, Landmark::visible(0.55, 0.05))
        .with_landmark(LandmarkId::Nose, Landmark::visible(0.5, 0.2))
}
