// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press-to-release pointer tracking.
//!
//! [`DragState`] remembers where a press started and where the pointer was
//! last seen. Each [`DragState::update`] yields the step since the previous
//! position, which the view turns into a pan. It also keeps the squared
//! distance of the farthest point reached, so a release can be judged as a
//! click or a drag even after the pointer came back.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use quayside_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert_eq!(drag.update(Point::new(13.0, 24.0)), Some(Vec2::new(3.0, 4.0)));
//!
//! // Back at the press point, yet 5 px of travel are remembered.
//! drag.update(Point::new(10.0, 20.0));
//! assert_eq!(drag.total_offset(Point::new(10.0, 20.0)), Some(Vec2::ZERO));
//! assert_eq!(drag.max_travel_squared(), 25.0);
//! ```

use kurbo::{Point, Vec2};

/// Start, last position, and farthest travel of one press.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Where the press happened; `None` when idle.
    pub start_pos: Option<Point>,
    /// Most recent pointer position.
    pub last_pos: Option<Point>,
    max_travel2: f64,
}

impl DragState {
    /// Begins tracking at `pos`, discarding any earlier press.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.max_travel2 = 0.0;
    }

    /// Moves to `pos` and returns the step from the previous position.
    ///
    /// Returns `None` when no press is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        self.max_travel2 = self.max_travel2.max((pos - start).hypot2());
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `current_pos` from the press point.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Squared distance of the farthest position seen since [`Self::start`].
    pub fn max_travel_squared(&self) -> f64 {
        self.max_travel2
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Whether a press is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
