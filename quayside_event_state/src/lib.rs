// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Event State: pointer state machines for the yard view.
//!
//! - [`drag`]: per-move steps, offset from the press point, and the farthest
//!   travel reached.
//! - [`gesture`]: tell a click from a drag with an explicit
//!   `Idle → Dragging → Idle` machine and a pixel [`gesture::ClickTolerance`].
//!
//! Both accept raw screen positions and know nothing about yards or
//! viewports; the controller decides what a pan delta or a click means.
//!
//! ```rust
//! use kurbo::Point;
//! use quayside_event_state::gesture::{GestureEnd, GestureState};
//!
//! let mut g = GestureState::default();
//! g.pointer_down(Point::new(0.0, 0.0));
//! g.pointer_move(Point::new(40.0, 0.0));
//! assert_eq!(g.pointer_up(Point::new(40.0, 0.0)), GestureEnd::Drag);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod gesture;
