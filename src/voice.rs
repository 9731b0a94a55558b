// ABOUTME: Voice command parsing and application to a workout session
// ABOUTME: Recognizes camera on/off and play-song phrases inside free-form transcripts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

use formcoach_intelligence::WorkoutSession;
use serde::Serialize;
use tracing::debug;

/// Reply for commands the server does not understand
pub const UNRECOGNIZED_RESPONSE: &str = "Command not recognized by server";

/// A recognized (or unrecognized) voice command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    /// Resume frame classification
    CameraOn,
    /// Pause frame classification
    CameraOff,
    /// Start music; handled by the client
    PlaySong,
    /// Nothing matched
    Unrecognized,
}

/// Result of applying a voice command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceResponse {
    /// Whether the transcript matched a command
    pub recognized: bool,
    /// Human-readable action taken
    pub action: String,
    /// Camera state after the command
    pub camera_on: bool,
}

impl VoiceCommand {
    /// Match a transcript, case-insensitively, anywhere in the text
    #[must_use]
    pub fn parse(transcript: &str) -> Self {
        let text = transcript.to_lowercase();
        if text.contains("camera on") {
            Self::CameraOn
        } else if text.contains("camera off") {
            Self::CameraOff
        } else if text.contains("play song") {
            Self::PlaySong
        } else {
            Self::Unrecognized
        }
    }

    /// Reply text for this command
    #[must_use]
    pub const fn response_text(self) -> &'static str {
        match self {
            Self::CameraOn => "Camera turned on",
            Self::CameraOff => "Camera turned off",
            Self::PlaySong => "Triggered play song action",
            Self::Unrecognized => UNRECOGNIZED_RESPONSE,
        }
    }

    /// Apply to `session`
    pub fn apply(self, session: &mut WorkoutSession) -> VoiceResponse {
        match self {
            Self::CameraOn => session.set_camera_enabled(true),
            Self::CameraOff => session.set_camera_enabled(false),
            Self::PlaySong | Self::Unrecognized => {}
        }
        debug!(command = ?self, camera_on = session.camera_enabled(), "voice command applied");

        VoiceResponse {
            recognized: self != Self::Unrecognized,
            action: self.response_text().to_owned(),
            camera_on: session.camera_enabled(),
        }
    }
}
