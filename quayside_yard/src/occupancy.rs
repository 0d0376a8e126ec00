// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Occupancy counts, rates, and the color class they map to.
//!
//! Everything here is a pure function of a [`Stack`] (or [`Yard`]) plus an
//! optional client filter. A `None` filter means the viewer may see every
//! container; `Some(code)` restricts counts to containers owned by `code`.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::model::{Stack, Yard, YardLayout};

/// Occupancy color class derived from a rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OccupancyLevel {
    /// No occupied slots.
    Empty,
    /// Below 70%.
    Low,
    /// 70% up to (not including) 90%.
    Medium,
    /// 90% and above.
    High,
}

/// Fixed-purpose stack in a Tantarelli yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialStack {
    /// Gate-side entry stack.
    Entry,
    /// Last stack of the lane.
    End,
    /// Reserved high-capacity block.
    HighCapacity,
    /// Other reserved stacks.
    Special,
}

impl SpecialStack {
    /// Short label drawn next to the stack number.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Entry => "ENTRY",
            Self::End => "END",
            Self::HighCapacity => "HC",
            Self::Special => "SPECIAL",
        }
    }
}

/// The color class a renderer should use for a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackTint {
    /// Color by occupancy.
    Occupancy(OccupancyLevel),
    /// Layout override, regardless of occupancy.
    Special(SpecialStack),
}

/// Lookup of stack numbers with a fixed purpose in a Tantarelli yard.
///
/// Entries are checked in order and the first matching range wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialStackTable {
    entries: Vec<(RangeInclusive<u32>, SpecialStack)>,
}

impl SpecialStackTable {
    /// Creates an empty table; no stack is special.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a range of stack numbers. Earlier entries take priority.
    #[must_use]
    pub fn with(mut self, numbers: RangeInclusive<u32>, kind: SpecialStack) -> Self {
        self.entries.push((numbers, kind));
        self
    }

    /// Returns the special purpose of `stack_number`, if any.
    #[must_use]
    pub fn lookup(&self, stack_number: u32) -> Option<SpecialStack> {
        self.entries
            .iter()
            .find(|(range, _)| range.contains(&stack_number))
            .map(|(_, kind)| *kind)
    }
}

impl Default for SpecialStackTable {
    /// Stack 1 is the entry, 31 the end, 61–71 the high-capacity block, and
    /// 101 and 103 are reserved.
    fn default() -> Self {
        Self {
            entries: vec![
                (1..=1, SpecialStack::Entry),
                (31..=31, SpecialStack::End),
                (61..=71, SpecialStack::HighCapacity),
                (101..=101, SpecialStack::Special),
                (103..=103, SpecialStack::Special),
            ],
        }
    }
}

/// Resolved occupancy of one stack for one filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackStatus {
    /// Occupied slots visible under the filter.
    pub occupancy: u32,
    /// Stack capacity.
    pub capacity: u32,
    /// `occupancy / capacity`, or `0.0` when capacity is zero.
    pub rate: f64,
    /// Color class, with layout overrides applied.
    pub tint: StackTint,
}

/// Per-level stack counts and totals for a whole yard under one filter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct YardOccupancy {
    /// Stacks with no visible containers.
    pub empty: usize,
    /// Stacks below 70%.
    pub low: usize,
    /// Stacks between 70% and 90%.
    pub medium: usize,
    /// Stacks at or above 90%.
    pub high: usize,
    /// Sum of visible occupancy.
    pub occupied: u64,
    /// Sum of stack capacities.
    pub capacity: u64,
}

impl YardOccupancy {
    /// `occupied / capacity`, or `0.0` when capacity is zero.
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.occupied as f64 / self.capacity as f64
    }
}

/// Computes occupancy and color classes for stacks.
#[derive(Clone, Debug, Default)]
pub struct OccupancyEngine {
    special: SpecialStackTable,
}

impl OccupancyEngine {
    /// Creates an engine with the given special-stack table.
    #[must_use]
    pub fn new(special: SpecialStackTable) -> Self {
        Self { special }
    }

    /// Returns the special-stack table in use.
    #[must_use]
    pub fn special_stacks(&self) -> &SpecialStackTable {
        &self.special
    }

    /// Occupied slots of `stack` visible under `client_filter`.
    ///
    /// Without a filter this trusts the stack's reported occupancy. With one,
    /// it counts occupied positions owned by that client.
    #[must_use]
    pub fn compute_occupancy(stack: &Stack, client_filter: Option<&str>) -> u32 {
        match client_filter {
            None => stack.current_occupancy,
            Some(client) => {
                let count = stack
                    .container_positions
                    .iter()
                    .filter(|p| p.is_occupied && p.client_code.as_deref() == Some(client))
                    .count();
                u32::try_from(count).unwrap_or(u32::MAX)
            }
        }
    }

    /// Occupancy over capacity, `0.0` for a stack without capacity.
    #[must_use]
    pub fn compute_rate(stack: &Stack, client_filter: Option<&str>) -> f64 {
        if stack.capacity == 0 {
            return 0.0;
        }
        f64::from(Self::compute_occupancy(stack, client_filter)) / f64::from(stack.capacity)
    }

    /// Maps a rate onto a color class. Negative and NaN rates count as empty.
    #[must_use]
    pub fn level_for_rate(rate: f64) -> OccupancyLevel {
        if rate >= 0.9 {
            OccupancyLevel::High
        } else if rate >= 0.7 {
            OccupancyLevel::Medium
        } else if rate > 0.0 {
            OccupancyLevel::Low
        } else {
            OccupancyLevel::Empty
        }
    }

    /// Color class for `stack`, applying the layout override first.
    #[must_use]
    pub fn tint(
        &self,
        layout: YardLayout,
        stack: &Stack,
        client_filter: Option<&str>,
    ) -> StackTint {
        self.status(layout, stack, client_filter).tint
    }

    /// Full occupancy status of `stack` under `client_filter`.
    #[must_use]
    pub fn status(
        &self,
        layout: YardLayout,
        stack: &Stack,
        client_filter: Option<&str>,
    ) -> StackStatus {
        let occupancy = Self::compute_occupancy(stack, client_filter);
        let rate = Self::compute_rate(stack, client_filter);
        let special = match layout {
            YardLayout::Tantarelli => self.special.lookup(stack.stack_number),
            YardLayout::Grid => None,
        };
        let tint = match special {
            Some(kind) => StackTint::Special(kind),
            None => StackTint::Occupancy(Self::level_for_rate(rate)),
        };
        StackStatus {
            occupancy,
            capacity: stack.capacity,
            rate,
            tint,
        }
    }

    /// Summarizes every stack of `yard` under `client_filter`.
    ///
    /// Level counts use occupancy only; layout overrides do not apply.
    #[must_use]
    pub fn summarize(yard: &Yard, client_filter: Option<&str>) -> YardOccupancy {
        let mut summary = YardOccupancy::default();
        for stack in yard.stacks() {
            summary.occupied += u64::from(Self::compute_occupancy(stack, client_filter));
            summary.capacity += u64::from(stack.capacity);
            match Self::level_for_rate(Self::compute_rate(stack, client_filter)) {
                OccupancyLevel::Empty => summary.empty += 1,
                OccupancyLevel::Low => summary.low += 1,
                OccupancyLevel::Medium => summary.medium += 1,
                OccupancyLevel::High => summary.high += 1,
            }
        }
        summary
    }
}
