// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Yard View: an interactive, pannable, zoomable yard canvas.
//!
//! [`InteractionController`] ties the pieces together:
//!
//! - the model, held as `Arc<Yard>` and only ever replaced whole,
//! - a [`ViewportTransform`](quayside_view2d::ViewportTransform) driven by
//!   drags and the wheel,
//! - a drag-versus-click [`GestureState`](quayside_event_state::gesture::GestureState),
//! - hit testing and a [`YardSelection`] with toggle semantics,
//! - a [`Renderer`](quayside_render::Renderer) that paints onto a
//!   caller-owned surface.
//!
//! Selection changes are reported through [`SelectionListener`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kurbo::{Point, Size};
//! use quayside_imaging::RecordingSurface;
//! use quayside_yard::{Dimensions, Position, Section, Stack, Yard};
//! use quayside_yard_view::InteractionController;
//!
//! let yard = Yard {
//!     sections: vec![Section {
//!         id: "A".into(),
//!         position: Position::new(0.0, 0.0),
//!         dimensions: Dimensions::new(40.0, 20.0),
//!         stacks: vec![Stack {
//!             id: "s1".into(),
//!             position: Position::new(5.0, 5.0),
//!             dimensions: Dimensions::new(6.0, 10.0),
//!             ..Stack::default()
//!         }],
//!         ..Section::default()
//!     }],
//!     ..Yard::default()
//! };
//! let canvas = Size::new(400.0, 200.0);
//! let mut view = InteractionController::new(Arc::new(yard), canvas);
//!
//! // Click the stack center.
//! let at = view.transform().world_to_screen(Point::new(8.0, 10.0), canvas);
//! view.pointer_down(at);
//! view.pointer_up(at, &mut ());
//! assert_eq!(view.selection().stack(), Some("s1"));
//!
//! if view.take_redraw() {
//!     let mut surface = RecordingSurface::new(canvas);
//!     view.render(&mut surface);
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: trace events for pan, zoom, and clicks, plus the renderer's
//!   draw span.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod selection;

pub use controller::{
    ControllerDebugInfo, InteractionController, SelectionListener, ViewConfig, WheelZoom,
};
pub use selection::YardSelection;
