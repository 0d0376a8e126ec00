// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::ModelError;

/// Yard layout scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum YardLayout {
    /// Plain rows of stacks; colors come from occupancy only.
    #[default]
    Grid,
    /// Alternate scheme with fixed special-purpose stacks.
    ///
    /// See [`SpecialStackTable`](crate::SpecialStackTable).
    Tantarelli,
}

/// ISO container length class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerSize {
    /// 20 ft container.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "20ft"))]
    Feet20,
    /// 40 ft container.
    #[cfg_attr(feature = "serde", serde(rename = "40ft"))]
    Feet40,
    /// 45 ft high-cube container.
    #[cfg_attr(feature = "serde", serde(rename = "45ft"))]
    Feet45,
}

/// A point in world space (meters).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// World X.
    pub x: f64,
    /// World Y. Grows downward.
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to a kurbo point.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Footprint of a section or stack in world units.
///
/// `width` runs along world X and `length` along world Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Extent along world X.
    pub width: f64,
    /// Extent along world Y.
    pub length: f64,
}

impl Dimensions {
    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

fn footprint(position: Position, dimensions: Dimensions) -> Rect {
    Rect::new(
        position.x,
        position.y,
        position.x + dimensions.width,
        position.y + dimensions.length,
    )
}

/// A concrete container slot within a stack.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerPosition {
    /// Owning stack id.
    pub stack_id: String,
    /// Slot location in world space.
    pub position: Position,
    /// Whether a container currently sits in this slot.
    pub is_occupied: bool,
    /// Owner of the container, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub client_code: Option<String>,
    /// Length class of the container in this slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub container_size: ContainerSize,
}

/// A storage unit holding containers at discrete slot positions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Stack {
    /// Stack id.
    pub id: String,
    /// Human-facing number, unique within a yard.
    pub stack_number: u32,
    /// Owning section id.
    pub section_id: String,
    /// Top-left corner in world space.
    pub position: Position,
    /// Footprint in world units.
    pub dimensions: Dimensions,
    /// Number of container rows.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rows: u32,
    /// Maximum stacking height.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_tiers: u32,
    /// Total slot capacity.
    pub capacity: u32,
    /// Occupied slot count as reported by the data store.
    pub current_occupancy: u32,
    /// Known slots. May be fewer than `capacity`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub container_positions: Vec<ContainerPosition>,
    /// Odd stacks are laid out on the opposite side of an aisle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_odd_stack: bool,
}

impl Stack {
    /// World-space footprint.
    #[must_use]
    pub fn rect(&self) -> Rect {
        footprint(self.position, self.dimensions)
    }

    /// Center of the footprint in world space.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

/// A named spatial zone of a yard containing stacks.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Section {
    /// Section id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Top-left corner in world space.
    pub position: Position,
    /// Footprint in world units.
    pub dimensions: Dimensions,
    /// CSS color string (for example `"#3b82f6"`), if the data store has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
    /// Stacks in model order. Model order is hit-test priority.
    pub stacks: Vec<Stack>,
}

impl Section {
    /// World-space footprint.
    #[must_use]
    pub fn rect(&self) -> Rect {
        footprint(self.position, self.dimensions)
    }
}

/// Immutable snapshot of a yard's geometry and occupancy.
///
/// A `Yard` is built once per yard selection or data refresh and is never
/// mutated while it is being drawn. Holders keep it behind an `Arc` and swap
/// the whole reference when new data arrives.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Yard {
    /// Yard id.
    pub id: String,
    /// Layout scheme.
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout: YardLayout,
    /// Sections in model order.
    pub sections: Vec<Section>,
    /// Yard-wide slot capacity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_capacity: u32,
    /// Yard-wide occupied slot count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_occupancy: u32,
}

impl Yard {
    /// Iterates every stack in model order (section by section).
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> + '_ {
        self.sections.iter().flat_map(|s| s.stacks.iter())
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn section_by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Looks up a stack by id.
    #[must_use]
    pub fn stack_by_id(&self, id: &str) -> Option<&Stack> {
        self.stacks().find(|s| s.id == id)
    }

    /// Looks up a stack by its yard-unique number.
    #[must_use]
    pub fn stack_by_number(&self, stack_number: u32) -> Option<&Stack> {
        self.stacks().find(|s| s.stack_number == stack_number)
    }

    /// Yard-wide occupancy rate, `0.0` when the yard reports no capacity.
    #[must_use]
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_capacity == 0 {
            return 0.0;
        }
        f64::from(self.current_occupancy) / f64::from(self.total_capacity)
    }

    /// Union of every section and stack footprint, or `None` for an empty yard.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        let mut rects = self
            .sections
            .iter()
            .flat_map(|s| core::iter::once(s.rect()).chain(s.stacks.iter().map(Stack::rect)));
        let first = rects.next()?;
        Some(rects.fold(first, |acc, r| acc.union(r)))
    }

    /// Checks the snapshot invariants, reporting the first violation found.
    ///
    /// Drawing and hit testing never call this; they tolerate bad data.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen: Vec<u32> = Vec::new();
        for section in &self.sections {
            if section.stacks.is_empty() {
                return Err(ModelError::EmptySection {
                    section_id: section.id.clone(),
                });
            }
            for stack in &section.stacks {
                if seen.contains(&stack.stack_number) {
                    return Err(ModelError::DuplicateStackNumber {
                        stack_number: stack.stack_number,
                    });
                }
                seen.push(stack.stack_number);
                if stack.current_occupancy > stack.capacity {
                    return Err(ModelError::OccupancyExceedsCapacity {
                        stack_id: stack.id.clone(),
                        occupancy: stack.current_occupancy,
                        capacity: stack.capacity,
                    });
                }
                if stack.container_positions.len() > stack.capacity as usize {
                    return Err(ModelError::TooManyPositions {
                        stack_id: stack.id.clone(),
                        positions: stack.container_positions.len(),
                        capacity: stack.capacity,
                    });
                }
            }
        }
        Ok(())
    }

    /// Pairs of stack ids whose footprints overlap with positive area.
    ///
    /// Hit testing resolves overlaps by model order, so any pair reported here
    /// has a region where the later stack can never be picked.
    #[must_use]
    pub fn overlapping_stacks(&self) -> Vec<(&str, &str)> {
        let stacks: Vec<&Stack> = self.stacks().collect();
        let mut out = Vec::new();
        for (i, a) in stacks.iter().enumerate() {
            for b in &stacks[i + 1..] {
                let overlap = a.rect().intersect(b.rect());
                if overlap.width() > 0.0 && overlap.height() > 0.0 {
                    out.push((a.id.as_str(), b.id.as_str()));
                }
            }
        }
        out
    }
}
