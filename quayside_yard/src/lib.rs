// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quayside Yard: the spatial model of a container yard and its occupancy engine.
//!
//! A [`Yard`] is a hierarchy of [`Section`]s, each holding [`Stack`]s, each
//! holding [`ContainerPosition`] slots. All coordinates are world units
//! (meters) with Y growing downward. The model is a plain snapshot: it is
//! built once from data supplied by a data-access layer and replaced
//! wholesale when that data changes, never edited in place.
//!
//! [`OccupancyEngine`] derives per-stack occupancy counts, rates, and a color
//! class ([`StackTint`]), optionally restricted to one client's containers.
//! Yards with the [`YardLayout::Tantarelli`] scheme have fixed-purpose
//! stacks whose tint comes from a [`SpecialStackTable`] instead of occupancy.
//!
//! ## Minimal example
//!
//! ```rust
//! use quayside_yard::{OccupancyEngine, OccupancyLevel, Stack, StackTint, YardLayout};
//!
//! let stack = Stack {
//!     stack_number: 12,
//!     capacity: 10,
//!     current_occupancy: 9,
//!     ..Stack::default()
//! };
//!
//! let engine = OccupancyEngine::default();
//! let status = engine.status(YardLayout::Grid, &stack, None);
//! assert_eq!(status.tint, StackTint::Occupancy(OccupancyLevel::High));
//! ```
//!
//! ## Defensive behavior
//!
//! Presentation code never fails on bad data: a stack without capacity has a
//! rate of zero, and a negative or NaN rate is treated as empty. Collaborators
//! that want to reject malformed snapshots up front can call
//! [`Yard::validate`].
//!
//! ## Features
//!
//! - `serde` (default): derive `Serialize`/`Deserialize` on the model using
//!   the camelCase field names of the yard snapshot JSON.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod model;
mod occupancy;

pub use error::ModelError;
pub use model::{
    ContainerPosition, ContainerSize, Dimensions, Position, Section, Stack, Yard, YardLayout,
};
pub use occupancy::{
    OccupancyEngine, OccupancyLevel, SpecialStack, SpecialStackTable, StackStatus, StackTint,
    YardOccupancy,
};
