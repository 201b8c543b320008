// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical ↔ display index mapping.
//!
//! ## Overview
//!
//! A *logical* index is an item's position in the caller's list and never
//! changes during a drag. A *display* index is where the item currently
//! appears. Outside a drag the two are equal.
//!
//! During a drag exactly one item, the dragged one, is relocated: it is removed
//! from its start slot and reinserted at the current slot, shifting the items in
//! between by one.
//!
//! [`DisplayOrder`] is rebuilt from `(len, drag)` every pass and carries no
//! other state, so rebuilding twice with the same inputs yields the same
//! permutation.
//!
//! ## Example
//!
//! ```
//! use understory_reorder::mapper::DisplayOrder;
//!
//! let order = DisplayOrder::new(6, Some((0, 3)));
//! assert_eq!(order.display_to_logical(), &[1, 2, 3, 0, 4, 5]);
//! assert_eq!(order.display_of(0), Some(3));
//! assert_eq!(order.logical_at(0), Some(1));
//! ```

use alloc::vec::Vec;

/// A permutation between logical and display indices, plus its inverse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayOrder {
    logical_to_display: Vec<usize>,
    display_to_logical: Vec<usize>,
}

impl DisplayOrder {
    /// Identity order for `len` items.
    pub fn identity(len: usize) -> Self {
        Self::new(len, None)
    }

    /// Build the order for `len` items with an optional `(start, current)` relocation.
    pub fn new(len: usize, drag: Option<(usize, usize)>) -> Self {
        let mut order = Self::default();
        order.rebuild(len, drag);
        order
    }

    /// Recompute in place, reusing allocations.
    ///
    /// `drag` is `(drag_start_display, current_display)`. A start past the end
    /// leaves the order at identity; a current index past the end is clamped to
    /// the last slot. Both arise only when the item count changes mid-drag.
    pub fn rebuild(&mut self, len: usize, drag: Option<(usize, usize)>) {
        self.display_to_logical.clear();
        self.display_to_logical.extend(0..len);

        if let Some((start, current)) = drag
            && start < len
        {
            let current = current.min(len - 1);
            if start != current {
                let moved = self.display_to_logical.remove(start);
                self.display_to_logical.insert(current, moved);
            }
        }

        self.logical_to_display.clear();
        self.logical_to_display.resize(len, 0);
        for (display, &logical) in self.display_to_logical.iter().enumerate() {
            self.logical_to_display[logical] = display;
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.display_to_logical.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.display_to_logical.is_empty()
    }

    /// Display slot of `logical`.
    pub fn display_of(&self, logical: usize) -> Option<usize> {
        self.logical_to_display.get(logical).copied()
    }

    /// Logical index shown at `display`.
    pub fn logical_at(&self, display: usize) -> Option<usize> {
        self.display_to_logical.get(display).copied()
    }

    /// Logical → display, indexed by logical index.
    pub fn logical_to_display(&self) -> &[usize] {
        &self.logical_to_display
    }

    /// Display → logical, indexed by display slot.
    pub fn display_to_logical(&self) -> &[usize] {
        &self.display_to_logical
    }

    /// True if every item sits at its logical index.
    pub fn is_identity(&self) -> bool {
        self.display_to_logical
            .iter()
            .enumerate()
            .all(|(d, &l)| d == l)
    }
}
