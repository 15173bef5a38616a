// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking for pan gestures.
//!
//! [`DragTracker::begin`] records where a drag started,
//! [`DragTracker::advance`] yields the movement since the previous position
//! (the amount to pan by), and [`DragTracker::finish`] ends the gesture.
//!
//! A drag started with [`DragTracker::begin_pointer`] belongs to that
//! pointer; [`DragTracker::accepts`] tells other pointers apart so a second
//! touch or pen cannot hijack it.
//!
//! ```
//! use anchorzoom_controls::drag::DragTracker;
//! use kurbo::{Point, Vec2};
//!
//! let mut drag = DragTracker::default();
//! assert_eq!(drag.advance(Point::new(5.0, 5.0)), None);
//!
//! drag.begin(Point::new(10.0, 20.0));
//! assert_eq!(drag.advance(Point::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
//! assert_eq!(drag.advance(Point::new(16.0, 18.0)), Some(Vec2::new(1.0, 0.0)));
//! assert_eq!(drag.offset(Point::new(16.0, 18.0)), Some(Vec2::new(6.0, -2.0)));
//!
//! drag.finish();
//! assert!(!drag.is_active());
//! ```

use kurbo::{Point, Vec2};
use ui_events::pointer::PointerId;

/// Start and latest pointer positions of an in-progress drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    start: Option<Point>,
    last: Option<Point>,
    pointer: Option<PointerId>,
}

impl DragTracker {
    /// Begins a drag at `pos` that follows any pointer, replacing any drag
    /// already in progress.
    pub fn begin(&mut self, pos: Point) {
        self.begin_pointer(None, pos);
    }

    /// Begins a drag at `pos` owned by `pointer`, replacing any drag already
    /// in progress. `None` follows any pointer.
    pub fn begin_pointer(&mut self, pointer: Option<PointerId>, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
        self.pointer = pointer;
    }

    /// Returns the pointer that owns the drag, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<PointerId> {
        self.pointer
    }

    /// Returns `true` if events from `pointer` may drive this tracker.
    ///
    /// An idle tracker, or a drag without an owner, accepts every pointer.
    #[must_use]
    pub fn accepts(&self, pointer: Option<PointerId>) -> bool {
        !self.is_active() || self.pointer.is_none() || self.pointer == pointer
    }

    /// Moves the drag to `pos` and returns the delta from the previous
    /// position, or `None` if no drag is in progress.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        if !self.is_active() {
            return None;
        }
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    /// Returns the offset of `pos` from where the drag began.
    #[must_use]
    pub fn offset(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|start| pos - start)
    }

    /// Ends the drag. Safe to call when no drag is in progress.
    pub fn finish(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between [`DragTracker::begin`] and
    /// [`DragTracker::finish`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
