// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorzoom Math: pure zoom/pan functions for anchored surface transforms.
//!
//! Everything in this crate is stateless. Functions accept and return plain
//! numbers or small `Copy` values, so they can be tested in isolation and
//! reused by any engine or controller layered on top:
//! - [`clamp_scale`] keeps a scale candidate inside `[min, max]`.
//! - [`zoomed_scale`] turns a signed zoom step into a new scale.
//! - [`anchored_translation`] recomputes a translation so a view point stays
//!   fixed across a scale change.
//! - [`is_finite_triple`] validates a `(scale, tx, ty)` candidate.
//! - [`TransformDescriptor`] is the canonical `matrix(s, 0, 0, s, tx, ty)`
//!   output handed to a host surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use anchorzoom_math::{TransformDescriptor, clamp_scale, zoomed_scale};
//!
//! // One zoom-in step with sensitivity 10, clamped into [0.1, 30].
//! let scale = clamp_scale(zoomed_scale(1.0, 1.0, 10.0), 0.1, 30.0);
//! assert_eq!(scale, 1.1);
//!
//! let descriptor = TransformDescriptor::new(scale, 12.0, -4.5);
//! assert_eq!(descriptor.to_string(), "matrix(1.1, 0, 0, 1.1, 12, -4.5)");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod descriptor;

pub use descriptor::{ParseDescriptorError, TransformDescriptor};

use kurbo::{Point, Vec2};

/// Clamps a scale candidate into `[min, max]`.
///
/// This is `max(min, min(candidate, max))`. Infinite candidates clamp to the
/// nearest bound. A NaN candidate is returned unchanged so that callers'
/// validity checks can reject it instead of silently snapping to a bound.
#[must_use]
pub fn clamp_scale(candidate: f64, min: f64, max: f64) -> f64 {
    if candidate.is_nan() {
        return candidate;
    }
    candidate.min(max).max(min)
}

/// Computes the scale after one signed zoom step.
///
/// `delta_scale` is conventionally `+1.0` (zoom in) or `-1.0` (zoom out).
/// `sensitivity` is a plain divisor: larger values need more input for the
/// same change. The result is not clamped.
#[must_use]
pub fn zoomed_scale(current_scale: f64, delta_scale: f64, sensitivity: f64) -> f64 {
    current_scale + delta_scale / sensitivity
}

/// Returns the translation that keeps `anchor` fixed in view space when the
/// scale changes from `old_scale` to `new_scale`.
///
/// Assumes the transform maps a surface point `p` to `p * scale + translation`
/// (transform-origin at the surface's own origin). A zero `old_scale`
/// collapses the surface onto `translation`, which has no point to keep
/// fixed, so `translation` is returned unchanged.
#[must_use]
pub fn anchored_translation(
    translation: Vec2,
    anchor: Point,
    old_scale: f64,
    new_scale: f64,
) -> Vec2 {
    if old_scale == 0.0 {
        return translation;
    }
    let anchor = anchor.to_vec2();
    anchor - (anchor - translation) * (new_scale / old_scale)
}

/// Returns `true` if all three values are finite (not NaN or infinite).
#[must_use]
pub fn is_finite_triple(a: f64, b: f64, c: f64) -> bool {
    a.is_finite() && b.is_finite() && c.is_finite()
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{anchored_translation, clamp_scale, is_finite_triple, zoomed_scale};

    #[test]
    fn clamp_scale_is_two_sided() {
        assert_eq!(clamp_scale(0.5, 0.1, 30.0), 0.5);
        assert_eq!(clamp_scale(0.01, 0.1, 30.0), 0.1);
        assert_eq!(clamp_scale(100.0, 0.1, 30.0), 30.0);
        assert_eq!(clamp_scale(f64::INFINITY, 0.1, 30.0), 30.0);
        assert_eq!(clamp_scale(f64::NEG_INFINITY, 0.1, 30.0), 0.1);
    }

    #[test]
    fn clamp_scale_keeps_nan() {
        assert!(clamp_scale(f64::NAN, 0.1, 30.0).is_nan());
    }

    #[test]
    fn zoomed_scale_divides_by_sensitivity() {
        assert_eq!(zoomed_scale(1.0, 1.0, 10.0), 1.1);
        assert_eq!(zoomed_scale(2.0, -1.0, 4.0), 1.75);
        assert!(zoomed_scale(1.0, 0.0, 0.0).is_nan());
        assert_eq!(zoomed_scale(1.0, 1.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn anchored_translation_keeps_anchor_fixed() {
        let anchor = Point::new(200.0, 120.0);
        let translation = Vec2::new(15.0, -30.0);
        let (old_scale, new_scale) = (1.5, 2.25);

        // Surface point currently under the anchor.
        let surface = (anchor.to_vec2() - translation) / old_scale;

        let next = anchored_translation(translation, anchor, old_scale, new_scale);
        let projected = surface * new_scale + next;
        assert!((projected.x - anchor.x).abs() < 1e-9);
        assert!((projected.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn anchored_translation_is_identity_without_scale_change() {
        let translation = Vec2::new(3.0, 4.0);
        let next = anchored_translation(translation, Point::new(50.0, 60.0), 2.0, 2.0);
        assert_eq!(next, translation);
    }

    #[test]
    fn anchored_translation_from_zero_scale_keeps_translation() {
        let translation = Vec2::new(-4.0, 9.0);
        let next = anchored_translation(translation, Point::new(1.0, 2.0), 0.0, 1.5);
        assert_eq!(next, translation);
        assert_eq!(
            anchored_translation(translation, Point::new(1.0, 2.0), -0.0, 1.5),
            translation
        );
    }

    #[test]
    fn finite_triple_rejects_nan_and_infinity() {
        assert!(is_finite_triple(1.0, -2.0, 0.0));
        assert!(!is_finite_triple(f64::NAN, 0.0, 0.0));
        assert!(!is_finite_triple(1.0, f64::INFINITY, 0.0));
        assert!(!is_finite_triple(1.0, 0.0, f64::NEG_INFINITY));
    }
}
