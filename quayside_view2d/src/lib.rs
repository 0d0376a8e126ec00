// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside View 2D: the viewport transform of a yard view.
//!
//! [`ViewportTransform`] holds zoom, pan, and rotation and converts points
//! between world space (yard meters) and screen space (surface pixels). The
//! same composed [`kurbo::Affine`] drives drawing and the inverse drives hit
//! testing, so what is under the cursor is always what was painted there.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use quayside_view2d::ViewportTransform;
//!
//! let canvas = Size::new(800.0, 600.0);
//! let mut view = ViewportTransform::new();
//!
//! // Frame a 200 x 100 m yard.
//! view.fit_to_bounds(Rect::new(0.0, 0.0, 200.0, 100.0), canvas, 5.0);
//!
//! // Drag by 40 px.
//! view.pan_by(Vec2::new(40.0, 0.0));
//!
//! let screen = view.world_to_screen(Point::new(10.0, 10.0), canvas);
//! let world = view.screen_to_world(screen, canvas);
//! assert!((world.x - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and clamped into [`ZoomLimits`] (`0.1..=5.0` by
//!   default) at every mutation, so a degenerate scale is unreachable.
//! - Pan accumulates in world units: a screen delta is divided by zoom.
//! - Zoom is always about the canvas center. Cursor-anchored zoom is not
//!   provided.
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod transform;

pub use limits::ZoomLimits;
pub use transform::{ViewportDebugInfo, ViewportTransform};
