// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Default lower bound for the scale.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Default upper bound for the scale.
pub const DEFAULT_MAX_SCALE: f64 = 30.0;

/// Default zoom sensitivity: one `+1.0` zoom step adds `0.1` to the scale.
pub const DEFAULT_SCALE_SENSITIVITY: f64 = 10.0;

/// How a zoom keeps the point under the cursor in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AnchorMode {
    /// Record the zoom target as the transform-origin and leave translation
    /// alone.
    ///
    /// The host's transform-origin handling does the anchoring. Because the
    /// origin moves with every zoom, content may shift when consecutive zooms
    /// target different points.
    #[default]
    Origin,
    /// Keep the transform-origin at `(0, 0)` and recompute translation so the
    /// zoom target stays fixed in view space.
    ///
    /// Zooming away from a scale of zero (reachable when `min_scale <= 0`)
    /// leaves translation unchanged.
    Compensated,
}

/// Immutable configuration for a [`crate::ZoomPanEngine`].
///
/// Bounds supplied through [`EngineConfig::with_scale_limits`] are normalized
/// so that `min_scale <= max_scale`. The engine never rejects a configuration;
/// call [`EngineConfig::validate`] to check one up front.
///
/// The limits bound every zoom and scaled pan. Construction and reset use
/// [`crate::TransformState::INITIAL`] as is, so a `min_scale` above `1.0`
/// only takes effect on the first scaling operation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    min_scale: f64,
    max_scale: f64,
    scale_sensitivity: f64,
    anchor_mode: AnchorMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            scale_sensitivity: DEFAULT_SCALE_SENSITIVITY,
            anchor_mode: AnchorMode::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the default limits and sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale bounds, swapping them if given in the wrong order.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the zoom sensitivity divisor. Larger values make each step smaller.
    #[must_use]
    pub fn with_scale_sensitivity(mut self, scale_sensitivity: f64) -> Self {
        self.scale_sensitivity = scale_sensitivity;
        self
    }

    /// Sets how zooms are anchored.
    #[must_use]
    pub fn with_anchor_mode(mut self, anchor_mode: AnchorMode) -> Self {
        self.anchor_mode = anchor_mode;
        self
    }

    /// Returns the lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the upper scale bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns the zoom sensitivity divisor.
    #[must_use]
    pub fn scale_sensitivity(&self) -> f64 {
        self.scale_sensitivity
    }

    /// Returns the anchor mode.
    #[must_use]
    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    /// Clamps `scale` into this configuration's bounds.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        anchorzoom_math::clamp_scale(scale, self.min_scale, self.max_scale)
    }

    /// Checks that the bounds and sensitivity are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() {
            return Err(ConfigError::NonFiniteScaleLimit);
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale);
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleLimits);
        }
        if !(self.scale_sensitivity.is_finite() && self.scale_sensitivity > 0.0) {
            return Err(ConfigError::InvalidSensitivity);
        }
        Ok(())
    }

    // Deserialized configs bypass the builder, so the engine re-normalizes.
    pub(crate) fn normalized(self) -> Self {
        self.with_scale_limits(self.min_scale, self.max_scale)
    }
}

/// Problems reported by [`EngineConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A scale bound is NaN or infinite.
    NonFiniteScaleLimit,
    /// The lower scale bound is zero or negative.
    NonPositiveMinScale,
    /// The lower scale bound exceeds the upper one.
    InvertedScaleLimits,
    /// The sensitivity is not a finite positive number.
    InvalidSensitivity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonFiniteScaleLimit => "scale limits must be finite",
            Self::NonPositiveMinScale => "minimum scale must be greater than zero",
            Self::InvertedScaleLimits => "minimum scale exceeds maximum scale",
            Self::InvalidSensitivity => "scale sensitivity must be a finite positive number",
        })
    }
}

impl core::error::Error for ConfigError {}
