// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anchorzoom_math::{TransformDescriptor, is_finite_triple};
use kurbo::{Point, Vec2};

/// Scale, translation and transform-origin of one surface.
///
/// The engine hands out copies of this value; mutating a copy never affects
/// the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal offset applied after scaling.
    pub translate_x: f64,
    /// Vertical offset applied after scaling.
    pub translate_y: f64,
    /// Horizontal transform-origin used by the last zoom.
    pub origin_x: f64,
    /// Vertical transform-origin used by the last zoom.
    pub origin_y: f64,
}

impl TransformState {
    /// State of a freshly constructed or reset engine.
    ///
    /// The scale is always `1.0`, even when it lies outside the configured
    /// scale limits. The next zoom or scaled `pan_to` clamps it into range.
    pub const INITIAL: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        origin_x: 0.0,
        origin_y: 0.0,
    };

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns the transform-origin as a point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    /// Returns the descriptor for this state's scale and translation.
    #[must_use]
    pub fn descriptor(&self) -> TransformDescriptor {
        TransformDescriptor::new(self.scale, self.translate_x, self.translate_y)
    }

    /// Returns `true` if scale, translation and origin are all finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_finite_triple(self.scale, self.translate_x, self.translate_y)
            && self.origin_x.is_finite()
            && self.origin_y.is_finite()
    }

    pub(crate) fn with_translation(self, translation: Vec2) -> Self {
        Self {
            translate_x: translation.x,
            translate_y: translation.y,
            ..self
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::INITIAL
    }
}
