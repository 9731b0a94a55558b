// ABOUTME: Integration tests for the per-exercise rep classifiers
// ABOUTME: Covers debounce, monotonic counters, visibility guards and full rep cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, elbow_frame, hip_frame, jack_frame, squat_frame, t0, with_visibility, yoga_frame};
use formcoach_core::constants::feedback;
use formcoach_core::models::{ExerciseType, LandmarkId, PoseFrame, Stage};
use formcoach_intelligence::{Classification, ClassifierRegistry, SessionState};

fn run(exercise: ExerciseType, frames: &[PoseFrame]) -> (SessionState, Vec<u32>) {
    let registry = ClassifierRegistry::default();
    let classifier = registry.get(exercise).unwrap();
    let mut state = SessionState::new(exercise, classifier.initial_stage(), t0());
    let counters = frames
        .iter()
        .map(|frame| {
            classifier.classify(&mut state, frame, t0());
            state.counter
        })
        .collect();
    (state, counters)
}

#[test]
fn test_registry_covers_every_exercise() {
    let registry = ClassifierRegistry::default();
    for exercise in ExerciseType::ALL {
        let classifier = registry.get(exercise).unwrap();
        assert_eq!(classifier.exercise(), exercise);
    }
}

#[test]
fn test_squat_full_cycle_counts_one_rep() {
    let frames = [squat_frame(170.0, 170.0), squat_frame(90.0, 90.0), squat_frame(170.0, 170.0)];
    let (state, counters) = run(ExerciseType::Squats, &frames);

    assert_eq!(counters, vec![0, 0, 1]);
    assert_eq!(state.stage, Stage::Up);
    assert_eq!(state.feedback, "Squat rep 1 completed");
}

#[test]
fn test_squat_feedback_progression() {
    let registry = ClassifierRegistry::default();
    let classifier = registry.get(ExerciseType::Squats).unwrap();
    let mut state = SessionState::new(ExerciseType::Squats, Stage::Up, t0());

    classifier.classify(&mut state, &squat_frame(170.0, 170.0), t0());
    assert_eq!(state.feedback, "Stand straight");
    classifier.classify(&mut state, &squat_frame(130.0, 130.0), t0());
    assert_eq!(state.feedback, "Perform a full squat (go lower or stand fully)");
    classifier.classify(&mut state, &squat_frame(90.0, 90.0), t0());
    assert_eq!(state.feedback, "Squat down detected");
    classifier.classify(&mut state, &squat_frame(85.0, 85.0), t0());
    assert_eq!(state.feedback, "Stay down or go lower");
}

#[test]
fn test_squat_requires_both_knees() {
    let frames = [squat_frame(90.0, 140.0), squat_frame(170.0, 170.0)];
    let (state, counters) = run(ExerciseType::Squats, &frames);
    assert_eq!(counters, vec![0, 0]);
    assert_eq!(state.stage, Stage::Up);
}

#[test]
fn test_debounce_never_double_counts() {
    let cases: [(ExerciseType, fn(bool) -> PoseFrame); 5] = [
        (ExerciseType::Squats, |up| {
            if up {
                squat_frame(175.0, 175.0)
            } else {
                squat_frame(80.0, 80.0)
            }
        }),
        (ExerciseType::PushUps, |up| elbow_frame(if up { 175.0 } else { 70.0 })),
        (ExerciseType::Weightlifting, |up| elbow_frame(if up { 175.0 } else { 30.0 })),
        (ExerciseType::Deadlifts, |up| hip_frame(if up { 175.0 } else { 70.0 })),
        (ExerciseType::JumpingJacks, |up| jack_frame(!up)),
    ];

    for (exercise, pose) in cases {
        let frames = [pose(true), pose(false), pose(false), pose(true), pose(true), pose(true)];
        let (_, counters) = run(exercise, &frames);
        assert_eq!(counters.last(), Some(&1), "{exercise} counted {counters:?}");
    }
}

#[test]
fn test_counter_is_monotonic() {
    let angles = [170.0, 95.0, 60.0, 120.0, 170.0, 40.0, 175.0, 100.0, 0.5, 165.0, 80.0];
    let frames: Vec<PoseFrame> = angles.iter().map(|a| elbow_frame(*a)).collect();

    for exercise in [ExerciseType::PushUps, ExerciseType::Weightlifting] {
        let (_, counters) = run(exercise, &frames);
        assert!(counters.windows(2).all(|w| w[0] <= w[1]), "{counters:?}");
    }
    let (_, counters) = run(ExerciseType::PushUps, &frames);
    assert_eq!(counters.last(), Some(&3));
}

#[test]
fn test_deadlift_cycle() {
    let frames = [hip_frame(170.0), hip_frame(80.0), hip_frame(170.0)];
    let (state, counters) = run(ExerciseType::Deadlifts, &frames);
    assert_eq!(counters, vec![0, 0, 1]);
    assert_eq!(state.feedback, "Deadlift rep 1");
}

#[test]
fn test_jumping_jack_standing_start_does_not_count() {
    let frames = [jack_frame(false), jack_frame(false), jack_frame(true), jack_frame(false)];
    let (state, counters) = run(ExerciseType::JumpingJacks, &frames);
    assert_eq!(counters, vec![0, 0, 0, 1]);
    assert_eq!(state.feedback, "Jumping Jack rep 1");
}

#[test]
fn test_low_visibility_leaves_state_untouched() {
    let cases = [
        (ExerciseType::Squats, squat_frame(90.0, 90.0)),
        (ExerciseType::PushUps, elbow_frame(70.0)),
        (ExerciseType::Weightlifting, elbow_frame(30.0)),
        (ExerciseType::Deadlifts, hip_frame(70.0)),
        (ExerciseType::JumpingJacks, jack_frame(true)),
        (ExerciseType::Yoga, yoga_frame(true)),
    ];

    let registry = ClassifierRegistry::default();
    for (exercise, frame) in cases {
        let classifier = registry.get(exercise).unwrap();
        let mut state = SessionState::new(exercise, classifier.initial_stage(), t0());
        state.counter = 4;
        let before_stage = state.stage;

        let result = classifier.classify(&mut state, &with_visibility(&frame, 0.3), t0());

        assert_eq!(result, Classification::NotVisible);
        assert_eq!(state.feedback, feedback::NOT_VISIBLE);
        assert_eq!(state.stage, before_stage);
        assert_eq!(state.counter, 4);
    }
}

#[test]
fn test_yoga_guarded_frame_mid_hold_keeps_stage() {
    let registry = ClassifierRegistry::default();
    let classifier = registry.get(ExerciseType::Yoga).unwrap();
    let mut state = SessionState::new(ExerciseType::Yoga, classifier.initial_stage(), t0());

    classifier.classify(&mut state, &yoga_frame(true), t0());
    assert_eq!(state.stage, Stage::Up);
    assert_eq!(state.hold_start, Some(t0()));

    let result = classifier.classify(&mut state, &with_visibility(&yoga_frame(true), 0.3), at(2));
    assert_eq!(result, Classification::NotVisible);
    assert_eq!(state.stage, Stage::Up);
    assert_eq!(state.counter, 0);
    assert!(state.hold_start.is_none());

    let result = classifier.classify(&mut state, &PoseFrame::empty(), at(3));
    assert_eq!(result, Classification::NoPose);
    assert_eq!(state.stage, Stage::Up);

    // The hold restarts from the next satisfying frame
    classifier.classify(&mut state, &yoga_frame(true), at(4));
    assert_eq!(state.hold_start, Some(at(4)));
}

#[test]
fn test_empty_frame_reports_no_pose() {
    let registry = ClassifierRegistry::default();
    for exercise in ExerciseType::ALL {
        let classifier = registry.get(exercise).unwrap();
        let mut state = SessionState::new(exercise, classifier.initial_stage(), t0());
        let result = classifier.classify(&mut state, &PoseFrame::empty(), t0());
        assert_eq!(result, Classification::NoPose);
        assert_eq!(state.feedback, feedback::NO_POSE);
        assert_eq!(state.counter, 0);
    }
}

#[test]
fn test_missing_landmark_is_not_visible() {
    let registry = ClassifierRegistry::default();
    let classifier = registry.get(ExerciseType::Squats).unwrap();
    let mut state = SessionState::new(ExerciseType::Squats, Stage::Up, t0());

    let mut frame = squat_frame(90.0, 90.0);
    frame.landmarks.remove(&LandmarkId::RightAnkle);

    assert_eq!(
        classifier.classify(&mut state, &frame, t0()),
        Classification::NotVisible
    );
}
