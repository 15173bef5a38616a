// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorzoom Controls: wheel and drag input for an anchorzoom engine.
//!
//! [`Controls`] wraps a [`ZoomPanEngine`] and offers two explicit ways in:
//!
//! - **Device events**: [`Controls::handle_pointer`] accepts a
//!   `ui_events::pointer::PointerEvent`. A scroll zooms one step at the
//!   pointer; pressing, moving and releasing the pointer pans by the
//!   movement. Device normalization (coordinates, modifiers, pointer type) is
//!   left to `ui-events`.
//! - **Parameter records**: [`Controls::zoom`], [`Controls::pan_by`] and
//!   [`Controls::pan_to`] take [`ZoomRequest`], [`PanByRequest`] and
//!   [`PanToRequest`] directly, for programmatic control.
//!
//! Hosts with their own event plumbing can also call the gesture helpers
//! ([`Controls::wheel_at`], [`Controls::drag_start`], [`Controls::drag_move`],
//! [`Controls::drag_end`]) with already-extracted positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use anchorzoom_controls::{Controls, ControlsConfig, PanToRequest};
//! use kurbo::{Point, Vec2};
//!
//! let mut controls = Controls::new((), ControlsConfig::default());
//!
//! // Wheel rolled away from the user (negative y in DOM convention): zoom in.
//! assert!(controls.wheel_at(Point::new(200.0, 100.0), Vec2::new(0.0, -3.0)));
//! assert_eq!(controls.state().scale, 1.02);
//!
//! // Drag by (10, 5).
//! controls.drag_start(Point::new(0.0, 0.0));
//! controls.drag_move(Point::new(10.0, 5.0));
//! controls.drag_end();
//! assert_eq!(controls.state().translation(), Vec2::new(10.0, 5.0));
//!
//! controls.pan_to(PanToRequest { target_x: 0.0, target_y: 0.0, scale: Some(2.0) });
//! assert_eq!(controls.state().scale, 2.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;

use alloc::rc::Rc;
use core::fmt;

use anchorzoom::{EngineConfig, Surface, TransformState, ZoomPanEngine};
use kurbo::{Point, Vec2};
use ui_events::{
    ScrollDelta,
    keyboard::Modifiers,
    pointer::{PointerButtonEvent, PointerEvent, PointerId, PointerScrollEvent, PointerType},
};

use crate::drag::DragTracker;

/// Zoom sensitivity used by [`ControlsConfig::default`].
///
/// Coarser than the engine's own default so one wheel notch is a small step.
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 50.0;

/// Zoom request: one signed step at a target point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRequest {
    /// Horizontal zoom target in view coordinates.
    pub target_x: f64,
    /// Vertical zoom target in view coordinates.
    pub target_y: f64,
    /// Signed step, conventionally `+1.0` (in) or `-1.0` (out).
    pub delta_scale: f64,
}

/// Relative pan request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanByRequest {
    /// Horizontal movement.
    pub delta_x: f64,
    /// Vertical movement.
    pub delta_y: f64,
}

/// Absolute pan request, optionally setting the scale too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanToRequest {
    /// New horizontal translation.
    pub target_x: f64,
    /// New vertical translation.
    pub target_y: f64,
    /// New scale, clamped by the engine.
    pub scale: Option<f64>,
}

/// Engine call decoded from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlAction {
    /// Zoom one step at a point.
    Zoom(ZoomRequest),
    /// Pan by a delta.
    PanBy(PanByRequest),
    /// Pan to an absolute position.
    PanTo(PanToRequest),
}

/// Which wheel direction zooms in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelDirection {
    /// Positive y deltas (DOM `deltaY > 0`, wheel rolled towards the user)
    /// zoom out; negative deltas zoom in.
    #[default]
    PositiveZoomsOut,
    /// Positive y deltas zoom in.
    PositiveZoomsIn,
}

impl WheelDirection {
    /// Returns the zoom step for a vertical wheel delta, or `None` when the
    /// delta has no vertical direction.
    #[must_use]
    pub fn step(self, delta_y: f64) -> Option<f64> {
        if delta_y.is_nan() || delta_y == 0.0 {
            return None;
        }
        let step = if delta_y > 0.0 { -1.0 } else { 1.0 };
        Some(match self {
            Self::PositiveZoomsOut => step,
            Self::PositiveZoomsIn => -step,
        })
    }
}

/// Configuration for [`Controls`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsConfig {
    engine: EngineConfig,
    wheel_direction: WheelDirection,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::new().with_scale_sensitivity(DEFAULT_WHEEL_SENSITIVITY),
            wheel_direction: WheelDirection::default(),
        }
    }
}

impl ControlsConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Sets which wheel direction zooms in.
    #[must_use]
    pub fn with_wheel_direction(mut self, wheel_direction: WheelDirection) -> Self {
        self.wheel_direction = wheel_direction;
        self
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the wheel direction.
    #[must_use]
    pub fn wheel_direction(&self) -> WheelDirection {
        self.wheel_direction
    }
}

/// Filter deciding whether a pointer gesture should be handled.
pub type PointerFilter = dyn Fn(Modifiers, PointerType) -> bool;

/// Input adapter owning a [`ZoomPanEngine`].
pub struct Controls<S> {
    engine: ZoomPanEngine<S>,
    drag: DragTracker,
    wheel_direction: WheelDirection,
    drag_filter: Rc<PointerFilter>,
    wheel_filter: Rc<PointerFilter>,
}

impl<S: fmt::Debug> fmt::Debug for Controls<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controls")
            .field("engine", &self.engine)
            .field("drag", &self.drag)
            .field("wheel_direction", &self.wheel_direction)
            .field("drag_filter", &"<function>")
            .field("wheel_filter", &"<function>")
            .finish()
    }
}

impl<S: Surface> Controls<S> {
    /// Creates controls and their engine. Every drag and wheel event is
    /// accepted until filters are installed.
    pub fn new(surface: S, config: ControlsConfig) -> Self {
        Self {
            engine: ZoomPanEngine::new(surface, config.engine),
            drag: DragTracker::default(),
            wheel_direction: config.wheel_direction,
            drag_filter: Rc::new(|_: Modifiers, _: PointerType| true),
            wheel_filter: Rc::new(|_: Modifiers, _: PointerType| true),
        }
    }

    /// Only start drags when `filter` accepts the modifiers and pointer type.
    #[must_use]
    pub fn with_drag_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Modifiers, PointerType) -> bool + 'static,
    {
        self.drag_filter = Rc::new(filter);
        self
    }

    /// Only zoom on scroll when `filter` accepts the modifiers and pointer
    /// type.
    #[must_use]
    pub fn with_wheel_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Modifiers, PointerType) -> bool + 'static,
    {
        self.wheel_filter = Rc::new(filter);
        self
    }

    /// Handles a pointer event.
    ///
    /// Returns `true` if the event was turned into an engine call on an
    /// active engine. While a drag is in progress, down, move, up and cancel
    /// events from other pointers are ignored.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) => {
                if self.drag.accepts(e.pointer.pointer_id)
                    && (self.drag_filter)(e.state.modifiers, e.pointer.pointer_type)
                {
                    self.begin_drag(e.pointer.pointer_id, e.state.logical_point());
                }
                false
            }
            PointerEvent::Move(e) => {
                self.drag.accepts(e.pointer.pointer_id)
                    && self.drag_move(e.current.logical_point())
            }
            PointerEvent::Up(PointerButtonEvent { pointer, .. }) | PointerEvent::Cancel(pointer) => {
                if self.drag.accepts(pointer.pointer_id) {
                    self.drag_end();
                }
                false
            }
            PointerEvent::Scroll(e) => {
                if !(self.wheel_filter)(e.state.modifiers, e.pointer.pointer_type) {
                    return false;
                }
                self.wheel_at(e.state.logical_point(), scroll_delta(e))
            }
            PointerEvent::Enter(_) | PointerEvent::Leave(_) | PointerEvent::Gesture(_) => false,
        }
    }

    /// Zooms one step at `pos` in the direction of the wheel `delta`.
    ///
    /// Only the sign of `delta.y` matters.
    pub fn wheel_at(&mut self, pos: Point, delta: Vec2) -> bool {
        let Some(delta_scale) = self.wheel_direction.step(delta.y) else {
            return false;
        };
        log::trace!("wheel step {delta_scale} at {pos:?}");
        self.zoom(ZoomRequest {
            target_x: pos.x,
            target_y: pos.y,
            delta_scale,
        })
    }

    /// Begins a pan drag at `pos` that follows any pointer.
    pub fn drag_start(&mut self, pos: Point) {
        self.begin_drag(None, pos);
    }

    fn begin_drag(&mut self, pointer: Option<PointerId>, pos: Point) {
        if self.engine.is_active() {
            self.drag.begin_pointer(pointer, pos);
        }
    }

    /// Pans by the movement since the last drag position. Does nothing when
    /// no drag is in progress.
    pub fn drag_move(&mut self, pos: Point) -> bool {
        match self.drag.advance(pos) {
            Some(delta) => self.pan_by(PanByRequest {
                delta_x: delta.x,
                delta_y: delta.y,
            }),
            None => false,
        }
    }

    /// Ends the current drag, if any.
    pub fn drag_end(&mut self) {
        self.drag.finish();
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Forwards a zoom request to the engine.
    pub fn zoom(&mut self, request: ZoomRequest) -> bool {
        self.apply(ControlAction::Zoom(request))
    }

    /// Forwards a relative pan request to the engine.
    pub fn pan_by(&mut self, request: PanByRequest) -> bool {
        self.apply(ControlAction::PanBy(request))
    }

    /// Forwards an absolute pan request to the engine.
    pub fn pan_to(&mut self, request: PanToRequest) -> bool {
        self.apply(ControlAction::PanTo(request))
    }

    /// Applies a decoded action. Returns `false` if the engine is destroyed.
    pub fn apply(&mut self, action: ControlAction) -> bool {
        if !self.engine.is_active() {
            return false;
        }
        match action {
            ControlAction::Zoom(r) => self.engine.zoom(r.target_x, r.target_y, r.delta_scale),
            ControlAction::PanBy(r) => self.engine.pan_by(r.delta_x, r.delta_y),
            ControlAction::PanTo(r) => self.engine.pan_to(r.target_x, r.target_y, r.scale),
        }
        true
    }

    /// Resets the engine to its initial state.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Destroys the engine, ending any drag, and returns the surface on the
    /// first call.
    pub fn destroy(&mut self) -> Option<S> {
        self.drag.finish();
        self.engine.destroy()
    }
}

impl<S> Controls<S> {
    /// Returns a copy of the engine state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.engine.state()
    }

    /// Returns the wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &ZoomPanEngine<S> {
        &self.engine
    }
}

// Only the direction is used, so line and page deltas need no unit conversion.
fn scroll_delta(event: &PointerScrollEvent) -> Vec2 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => Vec2::new(pos.x, pos.y),
        ScrollDelta::LineDelta(x, y) | ScrollDelta::PageDelta(x, y) => {
            Vec2::new(f64::from(*x), f64::from(*y))
        }
    }
}
