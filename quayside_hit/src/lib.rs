// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Hit: map a screen point to the section or stack under it.
//!
//! Hit testing runs in world space. The screen point is first carried through
//! the inverse of the [`ViewportTransform`], so the result matches what the
//! renderer painted at that pixel for any zoom, pan, or rotation.
//!
//! Resolution is two-level and ordered:
//! 1. The first section, in model order, whose footprint contains the point.
//! 2. Within that section only, the first stack in model order containing it.
//!
//! A stack hit wins over its section; no section hit means "nothing", which
//! callers treat as a deselect. Footprints are closed rectangles, so a point
//! on a shared edge belongs to the earlier of the two neighbors.
//!
//! Overlapping stacks are a data problem rather than something this crate
//! arbitrates: the earlier stack always wins inside the overlap. See
//! `Yard::overlapping_stacks` to detect them.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use quayside_hit::hit_test_world;
//! use quayside_yard::{Dimensions, Position, Section, Stack, Yard};
//!
//! let yard = Yard {
//!     sections: vec![Section {
//!         position: Position::new(0.0, 0.0),
//!         dimensions: Dimensions::new(50.0, 50.0),
//!         stacks: vec![Stack {
//!             stack_number: 7,
//!             position: Position::new(10.0, 10.0),
//!             dimensions: Dimensions::new(5.0, 20.0),
//!             ..Stack::default()
//!         }],
//!         ..Section::default()
//!     }],
//!     ..Yard::default()
//! };
//!
//! let hit = hit_test_world(Point::new(12.0, 15.0), &yard).unwrap();
//! assert_eq!(hit.stack().map(|s| s.stack_number), Some(7));
//! assert!(hit_test_world(Point::new(40.0, 40.0), &yard).unwrap().stack().is_none());
//! assert!(hit_test_world(Point::new(60.0, 0.0), &yard).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};
use quayside_view2d::ViewportTransform;
use quayside_yard::{Section, Stack, Yard};

/// Something with a world-space footprint that can be picked.
pub trait WorldHitTest {
    /// Returns `true` if `pt` lies inside or on the edge of the footprint.
    fn contains_world(&self, pt: Point) -> bool;
}

impl WorldHitTest for Section {
    fn contains_world(&self, pt: Point) -> bool {
        closed_contains(self.rect(), pt)
    }
}

impl WorldHitTest for Stack {
    fn contains_world(&self, pt: Point) -> bool {
        closed_contains(self.rect(), pt)
    }
}

/// Closed-interval containment.
///
/// `kurbo::Rect::contains` is half-open; picking treats both edges as inside.
#[must_use]
pub fn closed_contains(rect: Rect, pt: Point) -> bool {
    let rect = rect.abs();
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

/// The model element under a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit<'a> {
    /// A section, with no stack of that section under the point.
    Section(&'a Section),
    /// A stack and the section it was found in.
    Stack {
        /// Containing section.
        section: &'a Section,
        /// Picked stack.
        stack: &'a Stack,
    },
}

impl<'a> Hit<'a> {
    /// The section that was hit (for a stack hit, its containing section).
    #[must_use]
    pub fn section(&self) -> &'a Section {
        match *self {
            Self::Section(section) | Self::Stack { section, .. } => section,
        }
    }

    /// The stack that was hit, if any.
    #[must_use]
    pub fn stack(&self) -> Option<&'a Stack> {
        match *self {
            Self::Section(_) => None,
            Self::Stack { stack, .. } => Some(stack),
        }
    }
}

/// Finds the stack or section under a world-space point.
#[must_use]
pub fn hit_test_world(world: Point, yard: &Yard) -> Option<Hit<'_>> {
    if !world.is_finite() {
        return None;
    }
    let section = yard.sections.iter().find(|s| s.contains_world(world))?;
    Some(
        match section.stacks.iter().find(|s| s.contains_world(world)) {
            Some(stack) => Hit::Stack { section, stack },
            None => Hit::Section(section),
        },
    )
}

/// Finds the stack or section under a screen pixel position.
#[must_use]
pub fn hit_test<'a>(
    screen: Point,
    canvas: Size,
    transform: &ViewportTransform,
    yard: &'a Yard,
) -> Option<Hit<'a>> {
    hit_test_world(transform.screen_to_world(screen, canvas), yard)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::closed_contains;

    #[test]
    fn edges_are_inside() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(closed_contains(r, Point::new(0.0, 0.0)));
        assert!(closed_contains(r, Point::new(10.0, 5.0)));
        assert!(!closed_contains(r, Point::new(10.000_001, 5.0)));
        assert!(!closed_contains(r, Point::new(-0.1, 2.0)));
    }
}
