// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outward events and the handler trait that receives them.

use alloc::vec::Vec;

use crate::scroll::ScrollRequest;

/// Notifications emitted to the host.
///
/// Indices in [`ReorderEvent::Reorder`] are display positions: `from` is where
/// the item was before the drag and `to` is where it should end up once the
/// host has removed it from `from` and reinserted it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReorderEvent {
    /// A drag began on the item at this logical index.
    Started(usize),
    /// A drag ended with the item in a new position.
    Reorder {
        /// Position before the drag.
        from: usize,
        /// Position after the drag.
        to: usize,
    },
    /// A drag ended where it began.
    NoReorder(usize),
    /// The host should animate its scroll position.
    ScrollTo(ScrollRequest),
}

/// Receives [`ReorderEvent`]s as they happen.
///
/// Every method has a no-op default so hosts implement only what they use.
/// `on_reorder` is where the host moves the item in its backing list.
pub trait ReorderHandler {
    /// A drag began on `logical`.
    fn on_reorder_started(&mut self, logical: usize) {
        let _ = logical;
    }

    /// Move the item at `from` so it ends up at `to`.
    fn on_reorder(&mut self, from: usize, to: usize) {
        let _ = (from, to);
    }

    /// A drag ended without moving the item at `index`.
    fn on_no_reorder(&mut self, index: usize) {
        let _ = index;
    }

    /// Animate the scroll position. Call
    /// [`LayoutEngine::scroll_finished`](crate::engine::LayoutEngine::scroll_finished)
    /// when the animation ends.
    fn scroll_to(&mut self, request: ScrollRequest) {
        let _ = request;
    }

    /// Route an event to the matching method.
    fn dispatch(&mut self, event: ReorderEvent) {
        match event {
            ReorderEvent::Started(i) => self.on_reorder_started(i),
            ReorderEvent::Reorder { from, to } => self.on_reorder(from, to),
            ReorderEvent::NoReorder(i) => self.on_no_reorder(i),
            ReorderEvent::ScrollTo(r) => self.scroll_to(r),
        }
    }
}

/// Ignores every event.
impl ReorderHandler for () {}

/// Records every event in order.
impl ReorderHandler for Vec<ReorderEvent> {
    fn dispatch(&mut self, event: ReorderEvent) {
        self.push(event);
    }
}

impl<H: ReorderHandler + ?Sized> ReorderHandler for &mut H {
    fn on_reorder_started(&mut self, logical: usize) {
        (**self).on_reorder_started(logical);
    }

    fn on_reorder(&mut self, from: usize, to: usize) {
        (**self).on_reorder(from, to);
    }

    fn on_no_reorder(&mut self, index: usize) {
        (**self).on_no_reorder(index);
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        (**self).scroll_to(request);
    }

    fn dispatch(&mut self, event: ReorderEvent) {
        (**self).dispatch(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Default)]
    struct Moves(Vec<(usize, usize)>);

    impl ReorderHandler for Moves {
        fn on_reorder(&mut self, from: usize, to: usize) {
            self.0.push((from, to));
        }
    }

    #[test]
    fn dispatch_routes_to_methods() {
        let mut m = Moves::default();
        m.dispatch(ReorderEvent::Started(1));
        m.dispatch(ReorderEvent::Reorder { from: 1, to: 3 });
        m.dispatch(ReorderEvent::NoReorder(2));
        assert_eq!(m.0, vec![(1, 3)]);
    }

    #[test]
    fn vec_records_everything() {
        fn feed<H: ReorderHandler>(mut h: H) {
            h.dispatch(ReorderEvent::Started(0));
        }

        let mut v: Vec<ReorderEvent> = Vec::new();
        feed(&mut v);
        v.dispatch(ReorderEvent::NoReorder(0));
        assert_eq!(
            v,
            vec![ReorderEvent::Started(0), ReorderEvent::NoReorder(0)]
        );
    }
}
