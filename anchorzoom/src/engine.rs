// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use anchorzoom_math::{TransformDescriptor, anchored_translation, zoomed_scale};
use kurbo::{Affine, Point, Vec2};

use crate::config::{AnchorMode, EngineConfig};
use crate::state::TransformState;
use crate::surface::Surface;

/// Zoom/pan engine for one surface.
///
/// `ZoomPanEngine` is the only writer of its [`TransformState`]. Every
/// mutating operation:
/// - Builds a candidate state from the current one.
/// - Clamps the candidate scale into the configured range.
/// - Discards the candidate (keeping the previous state and logging a
///   warning) if any component is NaN or infinite.
/// - Otherwise commits it and hands the new descriptor to the surface.
///
/// Once [`ZoomPanEngine::destroy`] has been called, mutating operations are
/// silent no-ops. There is no way back to the active state.
#[derive(Clone, Debug)]
pub struct ZoomPanEngine<S> {
    config: EngineConfig,
    lifecycle: Lifecycle<S>,
}

#[derive(Clone, Debug)]
enum Lifecycle<S> {
    Active(Session<S>),
    Destroyed(TransformState),
}

/// Active half of the lifecycle; the only type with mutating methods.
#[derive(Clone, Debug)]
struct Session<S> {
    state: TransformState,
    surface: S,
}

impl<S: Surface> Session<S> {
    fn zoom(&mut self, config: &EngineConfig, target: Point, delta_scale: f64) {
        let current = self.state;
        let scale = config.clamp(zoomed_scale(
            current.scale,
            delta_scale,
            config.scale_sensitivity(),
        ));
        let candidate = match config.anchor_mode() {
            AnchorMode::Origin => TransformState {
                scale,
                origin_x: target.x,
                origin_y: target.y,
                ..current
            },
            AnchorMode::Compensated => TransformState {
                scale,
                ..current.with_translation(anchored_translation(
                    current.translation(),
                    target,
                    current.scale,
                    scale,
                ))
            },
        };
        self.commit("zoom", candidate);
    }

    fn pan_by(&mut self, delta: Vec2) {
        let candidate = self
            .state
            .with_translation(self.state.translation() + delta);
        self.commit("pan_by", candidate);
    }

    fn pan_to(&mut self, config: &EngineConfig, target: Vec2, scale: Option<f64>) {
        let mut candidate = self.state.with_translation(target);
        if let Some(scale) = scale {
            candidate.scale = config.clamp(scale);
        }
        self.commit("pan_to", candidate);
    }

    fn reset(&mut self) {
        self.commit("reset", TransformState::INITIAL);
    }

    fn commit(&mut self, operation: &str, candidate: TransformState) {
        if !candidate.is_valid() {
            log::warn!("{operation}: discarding non-finite transform {candidate:?}");
            return;
        }
        self.state = candidate;
        // The candidate was just validated, so emission cannot fail.
        let _ = self.emit();
    }

    fn emit(&mut self) -> Result<TransformDescriptor, InvalidTransform> {
        if !self.state.is_valid() {
            log::warn!("skipping emission of non-finite transform {:?}", self.state);
            return Err(InvalidTransform { state: self.state });
        }
        let descriptor = self.state.descriptor();
        self.surface.set_transform(descriptor, self.state.origin());
        Ok(descriptor)
    }
}

impl<S: Surface> ZoomPanEngine<S> {
    /// Creates an active engine driving `surface`.
    ///
    /// The state starts at [`TransformState::INITIAL`] and the matching
    /// identity descriptor is emitted immediately. Scale bounds are
    /// normalized so that `min_scale <= max_scale`.
    pub fn new(surface: S, config: EngineConfig) -> Self {
        let mut session = Session {
            state: TransformState::INITIAL,
            surface,
        };
        let _ = session.emit();
        Self {
            config: config.normalized(),
            lifecycle: Lifecycle::Active(session),
        }
    }

    /// Zooms one signed step towards (`delta_scale > 0`) or away from the
    /// content at `(target_x, target_y)`.
    ///
    /// The new scale is `scale + delta_scale / scale_sensitivity`, clamped to
    /// the configured bounds. See [`AnchorMode`] for how the target is used.
    pub fn zoom(&mut self, target_x: f64, target_y: f64, delta_scale: f64) {
        let config = self.config;
        if let Lifecycle::Active(session) = &mut self.lifecycle {
            session.zoom(&config, Point::new(target_x, target_y), delta_scale);
        }
    }

    /// Moves the content by `(delta_x, delta_y)`. Panning is unbounded.
    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) {
        if let Lifecycle::Active(session) = &mut self.lifecycle {
            session.pan_by(Vec2::new(delta_x, delta_y));
        }
    }

    /// Sets the translation to `(target_x, target_y)` and, if given, the
    /// scale (clamped to the configured bounds).
    pub fn pan_to(&mut self, target_x: f64, target_y: f64, scale: Option<f64>) {
        let config = self.config;
        if let Lifecycle::Active(session) = &mut self.lifecycle {
            session.pan_to(&config, Vec2::new(target_x, target_y), scale);
        }
    }

    /// Restores [`TransformState::INITIAL`].
    pub fn reset(&mut self) {
        if let Lifecycle::Active(session) = &mut self.lifecycle {
            session.reset();
        }
    }

    /// Re-validates the current state and hands its descriptor to the surface.
    ///
    /// Returns the emitted descriptor. If the state is not finite a warning
    /// is logged, the surface keeps its last descriptor, and the offending
    /// state is returned in the error. On a destroyed engine nothing is
    /// emitted and this returns `Ok(None)`.
    pub fn apply_transform(&mut self) -> Result<Option<TransformDescriptor>, InvalidTransform> {
        match &mut self.lifecycle {
            Lifecycle::Active(session) => session.emit().map(Some),
            Lifecycle::Destroyed(_) => Ok(None),
        }
    }

    /// Stops accepting mutations and detaches the surface.
    ///
    /// The first call returns the surface; later calls return `None` and have
    /// no other effect. The last state stays readable through
    /// [`ZoomPanEngine::state`].
    pub fn destroy(&mut self) -> Option<S> {
        let state = self.state();
        match core::mem::replace(&mut self.lifecycle, Lifecycle::Destroyed(state)) {
            Lifecycle::Active(session) => {
                log::debug!("engine destroyed at {state:?}");
                Some(session.surface)
            }
            Lifecycle::Destroyed(_) => None,
        }
    }
}

impl<S> ZoomPanEngine<S> {
    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        match &self.lifecycle {
            Lifecycle::Active(session) => session.state,
            Lifecycle::Destroyed(state) => *state,
        }
    }

    /// Returns `true` until [`ZoomPanEngine::destroy`] is called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Active(_))
    }

    /// Returns the configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the descriptor for the current state.
    #[must_use]
    pub fn descriptor(&self) -> TransformDescriptor {
        self.state().descriptor()
    }

    /// Returns the surface while the engine is active.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        match &self.lifecycle {
            Lifecycle::Active(session) => Some(&session.surface),
            Lifecycle::Destroyed(_) => None,
        }
    }

    /// Returns the transform the host ends up applying: the descriptor
    /// about the current transform-origin.
    #[must_use]
    pub fn effective_transform(&self) -> Affine {
        let state = self.state();
        state.descriptor().affine_about(state.origin())
    }

    /// Maps a point in the surface's own coordinates into view coordinates.
    #[must_use]
    pub fn surface_to_view_point(&self, pt: Point) -> Point {
        self.effective_transform() * pt
    }

    /// Maps a view point (for example a cursor position) into the surface's
    /// own coordinates.
    #[must_use]
    pub fn view_to_surface_point(&self, pt: Point) -> Point {
        self.effective_transform().inverse() * pt
    }

    /// Snapshot of the engine for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> EngineDebugInfo {
        let state = self.state();
        EngineDebugInfo {
            state,
            descriptor: state.descriptor(),
            config: self.config,
            active: self.is_active(),
        }
    }
}

/// Debug snapshot of a [`ZoomPanEngine`].
#[derive(Clone, Copy, Debug)]
pub struct EngineDebugInfo {
    /// Current state.
    pub state: TransformState,
    /// Descriptor built from `state`.
    pub descriptor: TransformDescriptor,
    /// Engine configuration.
    pub config: EngineConfig,
    /// Whether the engine still accepts mutations.
    pub active: bool,
}

/// Returned by [`ZoomPanEngine::apply_transform`] when the state is not
/// finite and nothing was emitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidTransform {
    /// The state that failed validation.
    pub state: TransformState,
}

impl fmt::Display for InvalidTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform is not finite: scale {}, translation ({}, {}), origin ({}, {})",
            self.state.scale,
            self.state.translate_x,
            self.state.translate_y,
            self.state.origin_x,
            self.state.origin_y
        )
    }
}

impl core::error::Error for InvalidTransform {}
