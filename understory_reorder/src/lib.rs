// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a deterministic, `no_std` drag-to-reorder engine for wrapping rows.
//!
//! ## Overview
//!
//! This crate tracks a row of items that wraps onto multiple runs and lets the
//! user drag one item at a time to a new position, with live feedback: the
//! dragged item is shown at its prospective slot, a shrinking ghost marks the
//! slot it left, and the hosting viewport is asked to scroll when the target is
//! off screen.
//! It does not render anything or read pointer events. The host reports drag
//! gestures, item sizes, and frame ticks, and paints the [`Slot`](crate::engine::Slot)
//! sequence the engine emits.
//!
//! ## Indices
//!
//! A *logical* index is an item's position in the item list. A *display* index
//! is where it appears on screen. They differ only during a drag, and only for
//! the items between the drag's start and its current slot.
//! See [`DisplayOrder`](crate::mapper::DisplayOrder).
//!
//! ## Pieces
//!
//! - [`DragSession`](crate::session::DragSession): the drag state machine and hover acceptance rules.
//! - [`AnimationDriver`](crate::animation::AnimationDriver): entrance and ghost progress on a cooperative tick.
//! - [`AutoScroller`](crate::scroll::AutoScroller): scroll-into-view decisions, one request at a time.
//! - [`ReorderAction`](crate::actions::ReorderAction): keyboard and assistive-technology moves.
//! - [`LayoutEngine`](crate::engine::LayoutEngine): owns the items and wires the pieces together.
//!
//! Run assignment and geometry come from `understory_wrap`.
//!
//! ## Workflow
//!
//! 1) Build a [`LayoutEngine`](crate::engine::LayoutEngine) with items, a
//!    [`WrapConfig`](crate::config::WrapConfig), and a [`ReorderHandler`](crate::types::ReorderHandler).
//! 2) Report measured sizes and the viewport. Paint [`LayoutEngine::layout`](crate::engine::LayoutEngine::layout).
//! 3) Forward drag start, hover, and end. Call [`LayoutEngine::tick`](crate::engine::LayoutEngine::tick) every frame.
//! 4) Apply `on_reorder(from, to)` to your list, or let the engine do it with
//!    [`LayoutEngine::reorder_items`](crate::engine::LayoutEngine::reorder_items).
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Size;
//! use understory_reorder::{LayoutEngine, ReorderEvent, WrapConfig};
//!
//! let items = vec!['a', 'b', 'c', 'd'];
//! let mut engine = LayoutEngine::new(items, WrapConfig::default(), Vec::<ReorderEvent>::new());
//! engine.set_item_sizes([Size::new(20.0, 20.0); 4]);
//!
//! assert!(engine.drag_start(0));
//! // Trailing half of the item at display slot 2.
//! assert!(engine.drag_hover(0, 2, false));
//! let _ = engine.tick(Duration::from_millis(200));
//!
//! if let Some(ReorderEvent::Reorder { from, to }) = engine.drag_end(0, false) {
//!     engine.reorder_items(from, to);
//! }
//! assert_eq!(engine.items(), &['b', 'c', 'a', 'd']);
//! assert_eq!(
//!     engine.handler(),
//!     &vec![ReorderEvent::Started(0), ReorderEvent::Reorder { from: 0, to: 2 }]
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `tracing`: structured `debug!`/`trace!` events for drags, hovers,
//!   transitions, and scroll requests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod actions;
pub mod animation;
pub mod config;
pub mod engine;
pub mod mapper;
pub mod scroll;
pub mod session;
pub mod types;

pub use actions::{ReorderAction, available_actions};
pub use animation::{AnimationDriver, AnimationKind, Settled};
pub use config::{ConfigError, WrapConfig};
pub use engine::{
    DragHandle, GhostPlacement, GhostSlot, ItemSlot, LayoutEngine, Slot, SlotFlags,
};
pub use mapper::DisplayOrder;
pub use scroll::{AutoScroller, RevealOffsets, ScrollRequest, ScrollViewport};
pub use session::{DragSession, DragState, HoverDecision, RejectReason};
pub use types::{ReorderEvent, ReorderHandler};

pub use understory_wrap::{Axis, HoverZone, RunAssignment, RunConstraints};
