// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// A yard snapshot invariant violation reported by [`Yard::validate`](crate::Yard::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A section has no stacks.
    #[error("section `{section_id}` has no stacks")]
    EmptySection {
        /// Offending section.
        section_id: String,
    },
    /// Two stacks share a stack number.
    #[error("stack number {stack_number} is used more than once")]
    DuplicateStackNumber {
        /// Repeated number.
        stack_number: u32,
    },
    /// A stack reports more occupied slots than it has.
    #[error("stack `{stack_id}` holds {occupancy} containers but has capacity {capacity}")]
    OccupancyExceedsCapacity {
        /// Offending stack.
        stack_id: String,
        /// Reported occupancy.
        occupancy: u32,
        /// Reported capacity.
        capacity: u32,
    },
    /// A stack lists more slots than its capacity.
    #[error("stack `{stack_id}` lists {positions} positions but has capacity {capacity}")]
    TooManyPositions {
        /// Offending stack.
        stack_id: String,
        /// Number of listed positions.
        positions: usize,
        /// Reported capacity.
        capacity: u32,
    },
}
