// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the Axum request builder and synthetic pose frame builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod frames;
