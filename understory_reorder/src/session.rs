// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine.
//!
//! ## States
//!
//! `Idle → Dragging → Idle`. A session enters `Dragging` through
//! [`DragSession::start`] and leaves it through [`DragSession::end`], whether
//! the drag completed or was cancelled.
//!
//! While dragging, four display indices evolve:
//!
//! - `start`: where the dragged item was when the drag began. Fixed for the session.
//! - `current`: where the dragged item is shown now.
//! - `next`: the most recently accepted target, not yet committed to `current`.
//! - `ghost`: the slot most recently vacated, where a shrinking placeholder is drawn.
//!
//! ## Hover decisions
//!
//! [`DragSession::hover_accept`] maps a hover over the leading or trailing half
//! of a target slot to a candidate `next` and accepts it only when it would move
//! the item. Moves to an adjacent slot additionally wait for the previous
//! entrance animation to settle, which keeps the item from oscillating between
//! two neighbors while the layout is still moving under the pointer.
//!
//! ## Commit
//!
//! [`DragSession::advance_to_next`] is the only place `current` changes. The
//! engine calls it on accept and again whenever the entrance animation settles.

use alloc::vec::Vec;

use kurbo::Size;
use understory_wrap::RunAssignment;

use crate::types::ReorderEvent;

/// State of an active drag.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag {
    dragged: usize,
    start: usize,
    current: usize,
    ghost: usize,
    next: usize,
    sizes: Vec<Option<Size>>,
    runs: Option<RunAssignment>,
}

impl ActiveDrag {
    /// Logical index of the dragged item.
    pub fn dragged(&self) -> usize {
        self.dragged
    }

    /// Display index where the drag began.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Display index where the dragged item is shown.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Display index of the vacated slot.
    pub fn ghost(&self) -> usize {
        self.ghost
    }

    /// Most recently accepted target.
    pub fn next(&self) -> usize {
        self.next
    }

    /// Item sizes captured at drag start, indexed by logical index.
    ///
    /// Hit testing during the drag uses these. Entries that were unmeasured at
    /// drag start are filled in as sizes arrive; measured entries never change.
    pub fn sizes(&self) -> &[Option<Size>] {
        &self.sizes
    }

    /// Size of the dragged item, if it was measured.
    pub fn dragged_size(&self) -> Option<Size> {
        self.sizes.get(self.dragged).copied().flatten()
    }

    /// Run assignment for the snapshot, once every item has been measured.
    pub fn runs(&self) -> Option<&RunAssignment> {
        self.runs.as_ref()
    }

    /// Number of items the snapshot covers.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True if the snapshot covers no items.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Resize the snapshot after the item count changed mid-drag.
    ///
    /// New items are unmeasured. Indices past the end are clamped to the last slot.
    pub(crate) fn fit_to(&mut self, len: usize, runs: Option<RunAssignment>) {
        self.sizes.resize(len, None);
        self.runs = runs;
        let last = len.saturating_sub(1);
        self.start = self.start.min(last);
        self.current = self.current.min(last);
        self.ghost = self.ghost.min(last);
        self.next = self.next.min(last);
    }

    /// Fill unmeasured snapshot entries from `live`. Returns true if any changed.
    pub(crate) fn fill_missing(&mut self, live: &[Option<Size>]) -> bool {
        let mut changed = false;
        for (slot, size) in self.sizes.iter_mut().zip(live) {
            if slot.is_none() && size.is_some() {
                *slot = *size;
                changed = true;
            }
        }
        changed
    }

    /// Adopt `runs` if the snapshot has none yet.
    pub(crate) fn refresh_runs(&mut self, runs: Option<&RunAssignment>) {
        if self.runs.is_none() {
            self.runs = runs.cloned();
        }
    }
}

/// Whether a session is idle or dragging.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(ActiveDrag),
}

/// Why a hover was not accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// No drag is in progress.
    NotDragging,
    /// The hovering payload is not the dragged item.
    ForeignDrag,
    /// The target slot does not exist.
    OutOfRange,
    /// The target slot is occupied by the dragged item itself.
    OwnSlot,
    /// Some item sizes have not been measured yet.
    GeometryUnavailable,
    /// The target is adjacent and the previous move is still animating.
    Settling,
    /// The target would leave the item where it is.
    NoMovement,
}

/// Outcome of [`DragSession::hover_accept`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverDecision {
    /// The target was accepted; `next` is the new pending display index.
    Accepted {
        /// The pending display index.
        next: usize,
    },
    /// The target was rejected and nothing changed.
    Rejected(RejectReason),
}

impl HoverDecision {
    /// True for [`HoverDecision::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// The slot a hover over `target` would move the dragged item to.
///
/// Moving forward, the leading half of `target` means "just before it", which
/// after removal from `current` is `target - 1`; the trailing half is `target`.
/// Moving backward, the leading half is `target` and the trailing half `target + 1`.
pub fn next_display_index(current: usize, target: usize, is_pre_edge: bool) -> usize {
    if current < target {
        if is_pre_edge { target - 1 } else { target }
    } else if is_pre_edge {
        target
    } else {
        target + 1
    }
}

/// Drag state machine for a single pointer.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// True while dragging.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The active drag, if any.
    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ActiveDrag> {
        match &mut self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    /// Begin dragging `logical`, currently shown at `display`.
    ///
    /// `sizes` is indexed by logical index; `runs` is the assignment in effect
    /// when the drag begins, or `None` if geometry is unavailable.
    /// Returns [`ReorderEvent::Started`], or `None` if a drag is already in
    /// progress.
    pub fn start(
        &mut self,
        logical: usize,
        display: usize,
        sizes: Vec<Option<Size>>,
        runs: Option<RunAssignment>,
    ) -> Option<ReorderEvent> {
        if self.is_dragging() {
            return None;
        }
        self.state = DragState::Dragging(ActiveDrag {
            dragged: logical,
            start: display,
            current: display,
            ghost: display,
            next: display,
            sizes,
            runs,
        });
        Some(ReorderEvent::Started(logical))
    }

    /// Decide whether a hover over one half of `target_display` moves the item.
    ///
    /// `target_logical` is the item shown at `target_display`, or `None` if the
    /// slot does not exist. On acceptance `next` is updated; the caller is
    /// expected to follow up with [`DragSession::advance_to_next`].
    pub fn hover_accept(
        &mut self,
        candidate: usize,
        target_display: usize,
        target_logical: Option<usize>,
        is_pre_edge: bool,
        entrance_settled: bool,
    ) -> HoverDecision {
        let Some(drag) = self.active_mut() else {
            return HoverDecision::Rejected(RejectReason::NotDragging);
        };
        if drag.dragged != candidate {
            return HoverDecision::Rejected(RejectReason::ForeignDrag);
        }
        let Some(target_logical) = target_logical else {
            return HoverDecision::Rejected(RejectReason::OutOfRange);
        };
        if target_logical == drag.dragged || target_display == drag.current {
            return HoverDecision::Rejected(RejectReason::OwnSlot);
        }
        if drag.runs.is_none() {
            return HoverDecision::Rejected(RejectReason::GeometryUnavailable);
        }

        let next = next_display_index(drag.current, target_display, is_pre_edge);
        let adjacent = next + 1 >= drag.current && next <= drag.current + 1;
        if adjacent && !entrance_settled {
            return HoverDecision::Rejected(RejectReason::Settling);
        }
        if next == drag.current {
            return HoverDecision::Rejected(RejectReason::NoMovement);
        }

        drag.next = next;
        HoverDecision::Accepted { next }
    }

    /// Commit `next` to `current` once the entrance animation has settled.
    ///
    /// Always records `ghost = current` first. Returns true if `current` moved,
    /// meaning the caller should start a new transition. Outside an explicit
    /// accept, a settled session with `next == current` does nothing further.
    pub fn advance_to_next(&mut self, entrance_settled: bool, accepting_new_target: bool) -> bool {
        let Some(drag) = self.active_mut() else {
            return false;
        };
        if !entrance_settled {
            return false;
        }
        drag.ghost = drag.current;
        if !accepting_new_target && drag.next == drag.current {
            return false;
        }
        drag.current = drag.next;
        true
    }

    /// Drop the drag without reporting anything. Used when the dragged item
    /// disappears from the list.
    pub(crate) fn abandon(&mut self) {
        self.state = DragState::Idle;
    }

    /// End the drag and report where the item landed.
    ///
    /// Completion and cancellation commit identically; `_cancelled` only affects
    /// host-side feedback. Returns `None` if no drag was in progress.
    pub fn end(&mut self, _cancelled: bool) -> Option<ReorderEvent> {
        let DragState::Dragging(drag) = core::mem::take(&mut self.state) else {
            return None;
        };
        Some(if drag.start != drag.current {
            ReorderEvent::Reorder {
                from: drag.start,
                to: drag.current,
            }
        } else {
            ReorderEvent::NoReorder(drag.start)
        })
    }
}
