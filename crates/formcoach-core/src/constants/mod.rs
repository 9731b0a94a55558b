// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, limits, defaults and feedback text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace. Classifier tuning values live in the intelligence crate next
//! to the code that consumes them.

/// Service identity used in logs
pub mod service_names {
    /// Server binary / service name
    pub const FORMCOACH_SERVER: &str = "formcoach-server";
    /// Replay CLI name
    pub const FORMCOACH_REPLAY: &str = "formcoach-replay";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API routes
pub mod routes {
    /// Health route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
    /// Exercise catalog route
    pub const EXERCISES: &str = "/workout/exercises";
    /// Session collection route
    pub const SESSIONS: &str = "/workout/sessions";
}

/// Default limits
pub mod limits {
    /// Maximum number of live workout sessions held by one server
    pub const DEFAULT_MAX_SESSIONS: usize = 256;
    /// Seconds without a request after which a session is evicted
    pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 600;
    /// Period of the background idle-session sweep
    pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Number of landmarks in the `BlazePose` layout
    pub const POSE_LANDMARK_COUNT: usize = 33;
}

/// Workout defaults
pub mod defaults {
    /// Reps that make up one set
    pub const REPS_PER_SET: u32 = 15;
    /// Body weight used for calorie estimates when none is configured
    pub const BODY_WEIGHT_KG: f64 = 70.0;
    /// Exercise a fresh session starts with
    pub const DEFAULT_EXERCISE: &str = "Jumping Jacks";
}

/// Feedback strings shared by all classifiers
pub mod feedback {
    /// Frame carried no landmarks at all
    pub const NO_POSE: &str = "No pose detected. Please stand in the frame.";
    /// Required landmarks missing or below the visibility threshold
    pub const NOT_VISIBLE: &str = "Landmarks not visible.";
    /// Joint angle could not be measured (zero-length limb vector)
    pub const ANGLE_UNAVAILABLE: &str = "Joint angle unavailable. Adjust your position.";
}
