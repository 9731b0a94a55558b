// ABOUTME: Default tuning values for the exercise classifiers and calorie model
// ABOUTME: Empirical thresholds kept as named defaults, overridable through configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Classifier defaults
//!
//! The angle and distance thresholds were tuned by hand against webcam
//! footage; they are starting points, not validated limits. Every value here
//! can be overridden through `ClassifierThresholds`.

/// Landmark detection confidence
pub mod visibility {
    /// Minimum visibility for a landmark to be trusted
    pub const MIN_VISIBILITY: f64 = 0.5;
}

/// Jumping jack position thresholds (normalized frame units)
pub mod jumping_jacks {
    /// Horizontal ankle spread above which legs count as apart
    pub const ANKLES_WIDE: f64 = 0.15;
    /// Horizontal ankle spread below which legs count as together
    pub const ANKLES_TOGETHER: f64 = 0.05;
    /// Maximum horizontal offset of the nose from the shoulder midpoint
    pub const HEAD_STABILITY: f64 = 0.1;
}

/// Squat knee angles (degrees, hip-knee-ankle)
pub mod squats {
    /// Both knees below this angle: bottom of the squat
    pub const DOWN_ANGLE: f64 = 100.0;
    /// Both knees above this angle: standing
    pub const UP_ANGLE: f64 = 160.0;
}

/// Push-up elbow angles (degrees, shoulder-elbow-wrist)
pub mod push_ups {
    /// Elbow below this angle: chest lowered
    pub const DOWN_ANGLE: f64 = 90.0;
    /// Elbow above this angle: arms locked out
    pub const UP_ANGLE: f64 = 160.0;
}

/// Biceps curl elbow angles (degrees, shoulder-elbow-wrist)
pub mod weightlifting {
    /// Elbow below this angle: weight curled up
    pub const DOWN_ANGLE: f64 = 40.0;
    /// Elbow above this angle: arm extended
    pub const UP_ANGLE: f64 = 160.0;
}

/// Deadlift hip angles (degrees, shoulder-hip-knee)
pub mod deadlifts {
    /// Hip below this angle: hinged over the bar
    pub const DOWN_ANGLE: f64 = 90.0;
    /// Hip above this angle: locked out
    pub const UP_ANGLE: f64 = 160.0;
}

/// Yoga hold timing
pub mod yoga {
    /// Seconds the pose must be held continuously to earn one rep
    pub const HOLD_SECONDS: u64 = 10;
}

/// Metabolic equivalents per exercise
///
/// Reference: Ainsworth, B.E., et al. (2011). "Compendium of Physical
/// Activities: a second update of codes and MET values."
/// *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
pub mod met {
    /// Calisthenics, vigorous (jumping jacks)
    pub const JUMPING_JACKS: f64 = 8.0;
    /// Calisthenics, moderate (squats)
    pub const SQUATS: f64 = 5.0;
    /// Calisthenics, moderate (push-ups)
    pub const PUSH_UPS: f64 = 3.8;
    /// Resistance training, light to moderate
    pub const WEIGHTLIFTING: f64 = 3.5;
    /// Resistance training, vigorous (deadlifts)
    pub const DEADLIFTS: f64 = 6.0;
    /// Hatha yoga
    pub const YOGA: f64 = 2.5;
}
