// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and assistive-technology move actions.
//!
//! Each action moves one item without a drag. Targets use the same convention
//! as [`ReorderEvent::Reorder`](crate::types::ReorderEvent::Reorder): the index
//! the item ends up at after removal and reinsertion. `MoveBefore` and
//! `MoveAfter` are symmetric single-step moves.

use alloc::vec::Vec;

use understory_wrap::Axis;

/// A move an item can offer to assistive technology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReorderAction {
    /// Move to the first slot.
    MoveToStart,
    /// Move to the last slot.
    MoveToEnd,
    /// Swap with the previous item.
    MoveBefore,
    /// Swap with the next item.
    MoveAfter,
}

impl ReorderAction {
    /// Every action, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::MoveToStart,
        Self::MoveBefore,
        Self::MoveAfter,
        Self::MoveToEnd,
    ];

    /// Where the item at `index` ends up, or `None` if the action is unavailable.
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        if !self.is_available(index, len) {
            return None;
        }
        Some(match self {
            Self::MoveToStart => 0,
            Self::MoveToEnd => len - 1,
            Self::MoveBefore => index - 1,
            Self::MoveAfter => index + 1,
        })
    }

    /// Start and before need a predecessor; end and after need a successor.
    pub fn is_available(self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        match self {
            Self::MoveToStart | Self::MoveBefore => index > 0,
            Self::MoveToEnd | Self::MoveAfter => index + 1 < len,
        }
    }

    /// Human-readable label. Single-step moves name the direction along `axis`.
    pub fn label(self, axis: Axis) -> &'static str {
        match (self, axis) {
            (Self::MoveToStart, _) => "Move to the start",
            (Self::MoveToEnd, _) => "Move to the end",
            (Self::MoveBefore, Axis::Horizontal) => "Move left",
            (Self::MoveBefore, Axis::Vertical) => "Move up",
            (Self::MoveAfter, Axis::Horizontal) => "Move right",
            (Self::MoveAfter, Axis::Vertical) => "Move down",
        }
    }
}

/// Actions available to the item at `index` in a list of `len`.
pub fn available_actions(index: usize, len: usize) -> Vec<ReorderAction> {
    ReorderAction::ALL
        .into_iter()
        .filter(|a| a.is_available(index, len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn availability_at_edges() {
        assert_eq!(
            available_actions(0, 3),
            vec![ReorderAction::MoveAfter, ReorderAction::MoveToEnd]
        );
        assert_eq!(
            available_actions(2, 3),
            vec![ReorderAction::MoveToStart, ReorderAction::MoveBefore]
        );
        assert_eq!(available_actions(1, 3).len(), 4);
        assert!(available_actions(0, 1).is_empty());
        assert!(available_actions(5, 3).is_empty());
    }

    #[test]
    fn targets_are_symmetric() {
        assert_eq!(ReorderAction::MoveBefore.target(2, 5), Some(1));
        assert_eq!(ReorderAction::MoveAfter.target(2, 5), Some(3));
        assert_eq!(ReorderAction::MoveToStart.target(2, 5), Some(0));
        assert_eq!(ReorderAction::MoveToEnd.target(2, 5), Some(4));
        assert_eq!(ReorderAction::MoveAfter.target(4, 5), None);
    }

    #[test]
    fn labels_follow_axis() {
        assert_eq!(ReorderAction::MoveBefore.label(Axis::Horizontal), "Move left");
        assert_eq!(ReorderAction::MoveAfter.label(Axis::Vertical), "Move down");
        assert_eq!(
            ReorderAction::MoveToEnd.label(Axis::Vertical),
            "Move to the end"
        );
    }
}
