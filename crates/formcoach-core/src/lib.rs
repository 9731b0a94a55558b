// ABOUTME: Core types and constants for the FormCoach rep counter
// ABOUTME: Foundation crate with error handling, data models and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![deny(unsafe_code)]

//! # FormCoach Core
//!
//! Foundation crate providing shared types and constants for the FormCoach
//! exercise repetition detector. It changes rarely, so the classifier and
//! server crates recompile independently of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Landmarks, pose frames, exercises, stages and stats

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
