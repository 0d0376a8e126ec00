// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current section and stack selection of a yard view.

use alloc::string::String;

use quayside_yard::Yard;

/// At most one selected section and at most one selected stack, by id.
///
/// The two are independent: picking a stack leaves the section selection
/// alone and vice versa. The revision counter bumps on every change so views
/// can cheaply tell whether anything needs repainting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YardSelection {
    section: Option<String>,
    stack: Option<String>,
    revision: u64,
}

impl YardSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            section: None,
            stack: None,
            revision: 0,
        }
    }

    /// Id of the selected section.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Id of the selected stack.
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Returns the current revision counter.
    ///
    /// Starts at 0 and wraps on overflow.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.section.is_none() && self.stack.is_none()
    }

    /// Selects `id`, or clears the section selection if `id` is already selected.
    ///
    /// Returns the new selected section id.
    pub fn toggle_section(&mut self, id: &str) -> Option<&str> {
        toggle(&mut self.section, id);
        self.bump_revision();
        self.section.as_deref()
    }

    /// Selects `id`, or clears the stack selection if `id` is already selected.
    ///
    /// Returns the new selected stack id.
    pub fn toggle_stack(&mut self, id: &str) -> Option<&str> {
        toggle(&mut self.stack, id);
        self.bump_revision();
        self.stack.as_deref()
    }

    /// Clears both selections.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.section = None;
        self.stack = None;
        self.bump_revision();
    }

    /// Drops selected ids that no longer exist in `yard`.
    ///
    /// Returns `true` if anything was dropped.
    pub fn retain_existing(&mut self, yard: &Yard) -> bool {
        let stale_section = self
            .section
            .as_deref()
            .is_some_and(|id| yard.section_by_id(id).is_none());
        let stale_stack = self
            .stack
            .as_deref()
            .is_some_and(|id| yard.stack_by_id(id).is_none());
        if stale_section {
            self.section = None;
        }
        if stale_stack {
            self.stack = None;
        }
        let changed = stale_section || stale_stack;
        if changed {
            self.bump_revision();
        }
        changed
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn toggle(slot: &mut Option<String>, id: &str) {
    if slot.as_deref() == Some(id) {
        *slot = None;
    } else {
        *slot = Some(String::from(id));
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use quayside_yard::{Section, Stack, Yard};

    use super::YardSelection;

    #[test]
    fn toggling_same_id_twice_clears() {
        let mut sel = YardSelection::new();
        assert_eq!(sel.toggle_stack("s1"), Some("s1"));
        assert_eq!(sel.toggle_stack("s1"), None);
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn toggling_other_id_replaces() {
        let mut sel = YardSelection::new();
        sel.toggle_section("A");
        assert_eq!(sel.toggle_section("B"), Some("B"));
        assert_eq!(sel.section(), Some("B"));
        assert_eq!(sel.stack(), None);
    }

    #[test]
    fn clear_only_bumps_when_not_empty() {
        let mut sel = YardSelection::new();
        sel.clear();
        assert_eq!(sel.revision(), 0);

        sel.toggle_stack("s1");
        sel.toggle_section("A");
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 3);
    }

    #[test]
    fn retain_existing_drops_vanished_ids() {
        let yard = Yard {
            sections: vec![Section {
                id: "A".to_string(),
                stacks: vec![Stack {
                    id: "s1".to_string(),
                    ..Stack::default()
                }],
                ..Section::default()
            }],
            ..Yard::default()
        };

        let mut sel = YardSelection::new();
        sel.toggle_section("A");
        sel.toggle_stack("s1");
        assert!(!sel.retain_existing(&yard));
        assert_eq!(sel.revision(), 2);

        sel.toggle_stack("s9");
        assert!(sel.retain_existing(&yard));
        assert_eq!(sel.section(), Some("A"));
        assert_eq!(sel.stack(), None);
    }
}
