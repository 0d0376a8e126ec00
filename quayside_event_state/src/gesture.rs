// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press-drag-release recognition for a pannable canvas.
//!
//! [`GestureState`] is a two-state machine, `Idle → Dragging → Idle`:
//!
//! - `pointer_down` enters `Dragging` and records the press position,
//! - `pointer_move` while dragging yields the screen delta to pan by,
//! - `pointer_up` returns to `Idle` and reports a [`GestureEnd::Click`] when
//!   the pointer never strayed [`ClickTolerance`] or farther from the press,
//! - `cancel` (pointer left the canvas) returns to `Idle` silently.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use quayside_event_state::gesture::{GestureEnd, GestureState};
//!
//! let mut g = GestureState::default();
//! g.pointer_down(Point::new(10.0, 10.0));
//! assert_eq!(g.pointer_move(Point::new(11.0, 10.0)), Some(Vec2::new(1.0, 0.0)));
//! assert_eq!(g.pointer_up(Point::new(11.0, 10.0)), GestureEnd::Click(Point::new(11.0, 10.0)));
//! assert!(!g.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::drag::DragState;

/// Largest pointer travel, in screen pixels, that still counts as a click.
///
/// Travel equal to or beyond the tolerance makes the gesture a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickTolerance(f64);

impl ClickTolerance {
    /// Default tolerance in pixels.
    pub const DEFAULT_PX: f64 = 3.0;

    /// Creates a tolerance; negative or non-finite values fall back to the default.
    #[must_use]
    pub fn new(px: f64) -> Self {
        if px.is_finite() && px >= 0.0 {
            Self(px)
        } else {
            Self(Self::DEFAULT_PX)
        }
    }

    /// Tolerance in pixels.
    #[must_use]
    pub fn px(self) -> f64 {
        self.0
    }

    fn admits_squared(self, travel2: f64) -> bool {
        travel2 < self.0 * self.0
    }
}

impl Default for ClickTolerance {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}

/// Current phase of a [`GestureState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No button held.
    #[default]
    Idle,
    /// Button held since a `pointer_down`.
    Dragging,
}

/// How a gesture ended on `pointer_up`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    /// Released within tolerance of the press, at this screen position.
    Click(Point),
    /// Released after moving the tolerance or farther.
    Drag,
    /// Released without a prior press.
    Ignored,
}

/// Drag-versus-click state machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureState {
    drag: DragState,
    tolerance: ClickTolerance,
}

impl GestureState {
    /// Creates an idle state machine with the given click tolerance.
    #[must_use]
    pub fn new(tolerance: ClickTolerance) -> Self {
        Self {
            drag: DragState::default(),
            tolerance,
        }
    }

    /// The click tolerance in use.
    #[must_use]
    pub fn tolerance(&self) -> ClickTolerance {
        self.tolerance
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.drag.is_dragging() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    /// Returns `true` between a press and its release or cancellation.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Press at `pos`. A press while already dragging restarts the gesture.
    pub fn pointer_down(&mut self, pos: Point) {
        self.drag.start(pos);
    }

    /// Pointer moved to `pos`; returns the screen delta to pan by while dragging.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Vec2> {
        self.drag.update(pos)
    }

    /// Release at `pos`; always returns to [`GesturePhase::Idle`].
    pub fn pointer_up(&mut self, pos: Point) -> GestureEnd {
        if !self.drag.is_dragging() {
            return GestureEnd::Ignored;
        }
        // The release position counts toward travel without producing a pan.
        let travel2 = self
            .drag
            .total_offset(pos)
            .map_or(0.0, Vec2::hypot2)
            .max(self.drag.max_travel_squared());
        self.drag.end();
        if self.tolerance.admits_squared(travel2) {
            GestureEnd::Click(pos)
        } else {
            GestureEnd::Drag
        }
    }

    /// Abandons any gesture in progress, e.g. when the pointer leaves.
    pub fn cancel(&mut self) {
        self.drag.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_rejects_bad_values() {
        assert_eq!(ClickTolerance::new(-1.0).px(), 3.0);
        assert_eq!(ClickTolerance::new(f64::NAN).px(), 3.0);
        assert_eq!(ClickTolerance::new(0.0).px(), 0.0);
        assert_eq!(ClickTolerance::default().px(), 3.0);
    }

    #[test]
    fn press_release_in_place_is_click() {
        let mut g = GestureState::default();
        assert_eq!(g.phase(), GesturePhase::Idle);
        g.pointer_down(Point::new(5.0, 5.0));
        assert_eq!(g.phase(), GesturePhase::Dragging);
        assert_eq!(g.pointer_up(Point::new(5.0, 5.0)), GestureEnd::Click(Point::new(5.0, 5.0)));
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn travel_at_tolerance_is_drag() {
        let mut g = GestureState::default();
        g.pointer_down(Point::ZERO);
        assert_eq!(g.pointer_up(Point::new(3.0, 0.0)), GestureEnd::Drag);

        g.pointer_down(Point::ZERO);
        assert_eq!(
            g.pointer_up(Point::new(2.9, 0.0)),
            GestureEnd::Click(Point::new(2.9, 0.0))
        );
    }

    #[test]
    fn returning_to_press_point_is_still_drag() {
        let mut g = GestureState::default();
        g.pointer_down(Point::new(50.0, 50.0));
        assert_eq!(g.pointer_move(Point::new(60.0, 50.0)), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(g.pointer_move(Point::new(50.0, 50.0)), Some(Vec2::new(-10.0, 0.0)));
        assert_eq!(g.pointer_up(Point::new(50.0, 50.0)), GestureEnd::Drag);
    }

    #[test]
    fn moves_and_release_while_idle_do_nothing() {
        let mut g = GestureState::default();
        assert_eq!(g.pointer_move(Point::new(1.0, 1.0)), None);
        assert_eq!(g.pointer_up(Point::new(1.0, 1.0)), GestureEnd::Ignored);
    }

    #[test]
    fn cancel_returns_to_idle_without_click() {
        let mut g = GestureState::new(ClickTolerance::new(10.0));
        g.pointer_down(Point::new(1.0, 1.0));
        g.cancel();
        assert!(!g.is_dragging());
        assert_eq!(g.pointer_up(Point::new(1.0, 1.0)), GestureEnd::Ignored);
        assert_eq!(g.tolerance().px(), 10.0);
    }
}
