// ABOUTME: Joint angle and distance primitives over normalized landmarks
// ABOUTME: Degenerate inputs yield 0 degrees (or None) instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Angle/distance geometry
//!
//! All functions work in the oracle's normalized 2D space and ignore
//! visibility; callers gate on confidence before measuring.

use formcoach_core::models::Landmark;

/// Angle at vertex `b` between rays `b->a` and `b->c`, in degrees
///
/// Returns `None` when either ray has zero length.
#[must_use]
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> Option<f64> {
    let ab = (a.x - b.x, a.y - b.y);
    let cb = (c.x - b.x, c.y - b.y);

    let mag_ab = ab.0.hypot(ab.1);
    let mag_cb = cb.0.hypot(cb.1);
    if mag_ab == 0.0 || mag_cb == 0.0 {
        return None;
    }

    let dot = ab.0.mul_add(cb.0, ab.1 * cb.1);
    // Rounding can push the cosine a hair outside [-1, 1] for collinear points.
    let cosine = (dot / (mag_ab * mag_cb)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

/// Angle at vertex `b`, in degrees, or `0.0` for degenerate input
///
/// A zero result is ambiguous: it can mean "folded shut" or "unmeasurable".
/// Classifiers use [`joint_angle`] to tell the two apart.
#[must_use]
pub fn angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    joint_angle(a, b, c).unwrap_or(0.0)
}

/// Euclidean distance between two landmarks
#[must_use]
pub fn distance(a: &Landmark, b: &Landmark) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Horizontal separation between two landmarks
#[must_use]
pub fn horizontal_distance(a: &Landmark, b: &Landmark) -> f64 {
    (a.x - b.x).abs()
}
