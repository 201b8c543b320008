// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: owns items and wires the reorder pieces together.
//!
//! ## Passes
//!
//! Every mutation ends with a sync pass that:
//!
//! 1. pads or truncates per-item sizes to the item count,
//! 2. rebuilds the [`DisplayOrder`] from the drag state,
//! 3. recomputes runs and geometry if the item count, drag indices, sizes, or
//!    configuration changed since the last pass.
//!
//! [`LayoutEngine::layout`] then reads the synced state and emits the
//! display-ordered [`Slot`] sequence without further work.
//!
//! ## Events
//!
//! Outward notifications go to the engine's [`ReorderHandler`] as they happen.
//! Terminal drag and action events are also returned so a host that keeps its
//! items in the engine can apply them with [`LayoutEngine::reorder_items`].

use alloc::vec::Vec;
use core::time::Duration;

use bitflags::bitflags;
use kurbo::{Point, Rect, Size};
use understory_wrap::{HoverZone, RunAssignment, WrapLayout, compute_runs, fixed_runs};

use crate::actions::{ReorderAction, available_actions};
use crate::animation::{AnimationDriver, AnimationKind, Settled};
use crate::config::{ConfigError, WrapConfig};
use crate::mapper::DisplayOrder;
use crate::scroll::{AutoScroller, RevealOffsets, ScrollViewport};
use crate::session::{DragSession, HoverDecision};
use crate::types::{ReorderEvent, ReorderHandler};

bitflags! {
    /// Render state of an item slot.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// The item accepts drags and move actions.
        const REORDERABLE = 0b0000_0001;
        /// The item is being dragged.
        const DRAGGED     = 0b0000_0010;
        /// The item's entrance transition is playing.
        const ENTERING    = 0b0000_0100;
    }
}

/// Which side of the displaced item a ghost is drawn on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GhostPlacement {
    /// Before the item at the ghost's display index (the drag moved forward).
    Before,
    /// After the item at the ghost's display index (the drag moved backward).
    After,
}

/// Drag affordances bound to one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragHandle {
    logical: usize,
}

impl DragHandle {
    /// Logical index of the bound item.
    pub fn logical(self) -> usize {
        self.logical
    }

    /// See [`LayoutEngine::drag_start`].
    pub fn start<T, H: ReorderHandler>(self, engine: &mut LayoutEngine<T, H>) -> bool {
        engine.drag_start(self.logical)
    }

    /// See [`LayoutEngine::drag_hover`].
    pub fn hover<T, H: ReorderHandler>(
        self,
        engine: &mut LayoutEngine<T, H>,
        target_display: usize,
        is_pre_edge: bool,
    ) -> bool {
        engine.drag_hover(self.logical, target_display, is_pre_edge)
    }

    /// See [`LayoutEngine::drag_hover_at`].
    pub fn hover_at<T, H: ReorderHandler>(
        self,
        engine: &mut LayoutEngine<T, H>,
        point: Point,
    ) -> bool {
        engine.drag_hover_at(self.logical, point)
    }

    /// See [`LayoutEngine::drag_end`].
    pub fn end<T, H: ReorderHandler>(
        self,
        engine: &mut LayoutEngine<T, H>,
        cancelled: bool,
    ) -> Option<ReorderEvent> {
        engine.drag_end(self.logical, cancelled)
    }
}

/// An item in display order.
#[derive(Debug)]
pub struct ItemSlot<'a, T> {
    /// The item.
    pub item: &'a T,
    /// Position in the item list.
    pub logical: usize,
    /// Position on screen.
    pub display: usize,
    /// Run the slot occupies, if runs are known.
    pub run: Option<usize>,
    /// Placed rectangle, if every item has been measured.
    pub rect: Option<Rect>,
    /// Render state.
    pub flags: SlotFlags,
    /// Entrance progress for the dragged item, `1.0` for everything else.
    pub presence: f64,
    /// Drag affordances for this item.
    pub handle: DragHandle,
}

/// The shrinking placeholder left in a vacated slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GhostSlot {
    /// Display index of the vacated slot.
    pub display: usize,
    /// Logical index of the dragged item.
    pub logical: usize,
    /// Size of the dragged item when the drag began.
    pub size: Option<Size>,
    /// Ghost progress, shrinking from `1.0` to `0.0`.
    pub presence: f64,
    /// Side of the displaced item to draw on.
    pub placement: GhostPlacement,
}

/// One entry of the emitted sequence.
#[derive(Debug)]
pub enum Slot<'a, T> {
    /// Leading decoration.
    Header(&'a T),
    /// A list item.
    Item(ItemSlot<'a, T>),
    /// A ghost placeholder.
    Ghost(GhostSlot),
    /// Trailing decoration.
    Footer(&'a T),
}

impl<'a, T> Slot<'a, T> {
    /// The item slot, if this is one.
    pub fn as_item(&self) -> Option<&ItemSlot<'a, T>> {
        match self {
            Self::Item(slot) => Some(slot),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct RunsKey {
    len: usize,
    drag: Option<(usize, usize)>,
    epoch: u64,
}

/// Reorderable wrap engine.
///
/// `T` is the item payload; `H` receives [`ReorderEvent`]s.
pub struct LayoutEngine<T, H = ()> {
    items: Vec<T>,
    header: Option<T>,
    footer: Option<T>,
    config: WrapConfig,
    // Measured sizes by logical index.
    sizes: Vec<Option<Size>>,
    // Bumped whenever sizes or config change.
    epoch: u64,
    order: DisplayOrder,
    runs: Option<RunAssignment>,
    geometry: Option<WrapLayout>,
    runs_key: Option<RunsKey>,
    session: DragSession,
    animation: AnimationDriver,
    scroller: AutoScroller,
    viewport: ScrollViewport,
    handler: H,
}

impl<T, H> core::fmt::Debug for LayoutEngine<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let measured = self.sizes.iter().filter(|s| s.is_some()).count();
        f.debug_struct("LayoutEngine")
            .field("items", &self.items.len())
            .field("measured", &measured)
            .field("config", &self.config)
            .field("order", &self.order)
            .field("runs", &self.runs)
            .field("session", &self.session)
            .field("animation", &self.animation)
            .field("scroller", &self.scroller)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl<T, H: ReorderHandler> LayoutEngine<T, H> {
    /// Create an engine over `items`.
    ///
    /// An invalid `config` is a caller error: it asserts in debug builds and is
    /// repaired with [`WrapConfig::normalized`] otherwise.
    pub fn new(items: Vec<T>, config: WrapConfig, handler: H) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid wrap config: {:?}",
            config.validate()
        );
        let config = config.normalized();
        let len = items.len();
        let sizes = alloc::vec![None; len];
        let mut engine = Self {
            items,
            header: None,
            footer: None,
            config,
            sizes,
            epoch: 0,
            order: DisplayOrder::identity(len),
            runs: None,
            geometry: None,
            runs_key: None,
            session: DragSession::new(),
            animation: AnimationDriver::new(config.reorder_duration),
            scroller: AutoScroller::new(config.scroll_duration),
            viewport: ScrollViewport::default(),
            handler,
        };
        engine.sync();
        engine
    }

    /// Create an engine, rejecting an invalid `config`.
    pub fn try_new(items: Vec<T>, config: WrapConfig, handler: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(items, config, handler))
    }

    /// Set a leading decoration emitted before every item.
    pub fn with_header(mut self, header: T) -> Self {
        self.header = Some(header);
        self
    }

    /// Set a trailing decoration emitted after every item.
    pub fn with_footer(mut self, footer: T) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Replace the leading decoration.
    pub fn set_header(&mut self, header: Option<T>) {
        self.header = header;
    }

    /// Replace the trailing decoration.
    pub fn set_footer(&mut self, footer: Option<T>) {
        self.footer = footer;
    }

    /// Items in logical order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to items. The count cannot change; use
    /// [`LayoutEngine::set_items`] for that.
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active configuration.
    pub fn config(&self) -> &WrapConfig {
        &self.config
    }

    /// Current display order.
    pub fn display_order(&self) -> &DisplayOrder {
        &self.order
    }

    /// Run of each display slot, if known.
    pub fn runs(&self) -> Option<&RunAssignment> {
        self.runs.as_ref()
    }

    /// Placed geometry in display order, once every item has been measured.
    pub fn geometry(&self) -> Option<&WrapLayout> {
        self.geometry.as_ref()
    }

    /// Measured size of `logical`.
    pub fn item_size(&self, logical: usize) -> Option<Size> {
        self.sizes.get(logical).copied().flatten()
    }

    /// Drag state.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// True while dragging without the geometry needed to accept hovers.
    pub fn is_geometry_pending(&self) -> bool {
        self.session.active().is_some_and(|d| d.runs().is_none())
    }

    /// Entrance and ghost progress.
    pub fn animation(&self) -> &AnimationDriver {
        &self.animation
    }

    /// Scroll request state.
    pub fn scroller(&self) -> &AutoScroller {
        &self.scroller
    }

    /// Last reported viewport.
    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// The event handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the event handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the engine, returning items and handler.
    pub fn into_parts(self) -> (Vec<T>, H) {
        (self.items, self.handler)
    }

    /// Replace the item list.
    ///
    /// Sizes are kept by position and padded with unmeasured entries or
    /// truncated. A drag in progress survives with its indices clamped, unless
    /// the dragged item itself is gone, in which case the drag is dropped
    /// without an event.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let len = self.items.len();
        if self.session.active().is_some_and(|d| d.dragged() >= len) {
            #[cfg(feature = "tracing")]
            tracing::debug!(len, "dragged item removed; drag abandoned");
            self.session.abandon();
            self.animation.reset();
        }
        self.sync();
        let runs = self.runs.clone();
        if let Some(drag) = self.session.active_mut()
            && drag.len() != len
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = drag.len(), to = len, "drag snapshot resized");
            drag.fit_to(len, runs);
            self.epoch = self.epoch.wrapping_add(1);
        }
        self.sync();
    }

    /// Record the measured size of `logical`. Returns false if out of range.
    pub fn set_item_size(&mut self, logical: usize, size: Size) -> bool {
        let Some(slot) = self.sizes.get_mut(logical) else {
            return false;
        };
        if *slot != Some(size) {
            *slot = Some(size);
            self.epoch = self.epoch.wrapping_add(1);
            self.sync();
        }
        true
    }

    /// Record sizes in logical order. Extra sizes are ignored.
    pub fn set_item_sizes(&mut self, sizes: impl IntoIterator<Item = Size>) {
        let mut changed = false;
        for (slot, size) in self.sizes.iter_mut().zip(sizes) {
            if *slot != Some(size) {
                *slot = Some(size);
                changed = true;
            }
        }
        if changed {
            self.epoch = self.epoch.wrapping_add(1);
            self.sync();
        }
    }

    /// Forget the measured size of `logical`.
    pub fn clear_item_size(&mut self, logical: usize) {
        if let Some(slot) = self.sizes.get_mut(logical)
            && slot.take().is_some()
        {
            self.epoch = self.epoch.wrapping_add(1);
            self.sync();
        }
    }

    /// Replace the configuration.
    ///
    /// Disabling reordering cancels a drag in progress.
    pub fn set_config(&mut self, config: WrapConfig) {
        debug_assert!(
            config.validate().is_ok(),
            "invalid wrap config: {:?}",
            config.validate()
        );
        self.config = config.normalized();
        self.animation.set_duration(self.config.reorder_duration);
        self.scroller.set_duration(self.config.scroll_duration);
        self.epoch = self.epoch.wrapping_add(1);
        if !self.config.enable_reorder
            && let Some(logical) = self.session.active().map(|d| d.dragged())
        {
            let _ = self.drag_end(logical, true);
        }
        self.sync();
    }

    /// Change the space available along the main axis.
    pub fn set_main_axis_extent(&mut self, extent: f64) {
        let mut config = self.config;
        config.main_axis_extent = extent;
        self.set_config(config);
    }

    /// Report the hosting viewport's scroll state.
    pub fn set_viewport(&mut self, viewport: ScrollViewport) {
        self.viewport = viewport;
    }

    /// The host finished animating the last scroll request.
    pub fn scroll_finished(&mut self) {
        self.scroller.finish();
    }

    /// Hover zone under `point`, in wrap coordinates.
    ///
    /// During a drag this reflects the sizes captured at drag start. Sizes
    /// reported mid-drag take effect once the drag ends, except for items that
    /// were still unmeasured.
    pub fn hit_test(&self, point: Point) -> Option<HoverZone> {
        self.geometry.as_ref()?.hit_test(point)
    }

    /// Begin dragging `logical`.
    ///
    /// Returns false if reordering is disabled, the index is out of range, or a
    /// drag is already in progress.
    pub fn drag_start(&mut self, logical: usize) -> bool {
        if !self.config.enable_reorder {
            return false;
        }
        let Some(display) = self.order.display_of(logical) else {
            return false;
        };
        let Some(event) =
            self.session
                .start(logical, display, self.sizes.clone(), self.runs.clone())
        else {
            #[cfg(feature = "tracing")]
            tracing::debug!(logical, "drag start rejected: another drag is active");
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(logical, display, "drag started");
        self.animation.reset();
        self.handler.dispatch(event);
        self.sync();
        true
    }

    /// Hover the dragged item over one half of `target_display`.
    ///
    /// Returns true if the hover was accepted.
    pub fn drag_hover(&mut self, logical: usize, target_display: usize, is_pre_edge: bool) -> bool {
        self.hover_decision(logical, target_display, is_pre_edge)
            .is_accepted()
    }

    /// Like [`LayoutEngine::drag_hover`], reporting why a hover was rejected.
    pub fn hover_decision(
        &mut self,
        logical: usize,
        target_display: usize,
        is_pre_edge: bool,
    ) -> HoverDecision {
        let target_logical = self.order.logical_at(target_display);
        let decision = self.session.hover_accept(
            logical,
            target_display,
            target_logical,
            is_pre_edge,
            self.animation.is_entrance_settled(),
        );
        match decision {
            HoverDecision::Accepted { next } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(logical, target_display, is_pre_edge, next, "hover accepted");
                self.scroll_toward(target_display);
                self.request_animation_to_next(true);
            }
            HoverDecision::Rejected(_reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(logical, target_display, is_pre_edge, reason = ?_reason, "hover rejected");
            }
        }
        decision
    }

    /// Resolve `point` to a hover zone and hover over it.
    pub fn drag_hover_at(&mut self, logical: usize, point: Point) -> bool {
        match self.hit_test(point) {
            Some(zone) => self.drag_hover(logical, zone.display_index, zone.is_pre_edge),
            None => false,
        }
    }

    /// End the drag on `logical`.
    ///
    /// Completion and cancellation both report where the item currently is.
    /// Returns the event sent to the handler, or `None` if `logical` is not
    /// being dragged.
    pub fn drag_end(&mut self, logical: usize, cancelled: bool) -> Option<ReorderEvent> {
        if self.session.active()?.dragged() != logical {
            return None;
        }
        let event = self.session.end(cancelled)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(logical, cancelled, ?event, "drag ended");
        self.animation.reset();
        self.handler.dispatch(event);
        self.sync();
        Some(event)
    }

    /// Advance animations by `elapsed`.
    ///
    /// Ignored while idle. An entrance settle commits any pending target.
    pub fn tick(&mut self, elapsed: Duration) -> Settled {
        if !self.session.is_dragging() {
            return Settled::empty();
        }
        let settled = self.animation.tick(elapsed);
        if settled.contains(Settled::ENTRANCE) {
            self.animation_settled(AnimationKind::Entrance);
        }
        settled
    }

    /// Report that `kind` finished animating.
    ///
    /// Safe to call repeatedly. Returns true if a new transition started.
    pub fn animation_settled(&mut self, kind: AnimationKind) -> bool {
        if !self.session.is_dragging() {
            return false;
        }
        let _ = self.animation.settle(kind);
        match kind {
            AnimationKind::Entrance => self.request_animation_to_next(false),
            AnimationKind::Ghost => false,
        }
    }

    /// Move actions the item at `index` currently offers.
    pub fn actions_for(&self, index: usize) -> Vec<ReorderAction> {
        if !self.config.enable_reorder || self.session.is_dragging() {
            return Vec::new();
        }
        available_actions(index, self.items.len())
    }

    /// Perform `action` on the item at `index`, reporting the move to the handler.
    ///
    /// Returns `None` if the action is unavailable, reordering is disabled, or a
    /// drag is in progress.
    pub fn perform_action(&mut self, index: usize, action: ReorderAction) -> Option<ReorderEvent> {
        if !self.config.enable_reorder || self.session.is_dragging() {
            return None;
        }
        let to = action.target(index, self.items.len())?;
        let event = ReorderEvent::Reorder { from: index, to };
        #[cfg(feature = "tracing")]
        tracing::debug!(index, ?action, to, "move action");
        self.handler.dispatch(event);
        Some(event)
    }

    /// Move the item at `from` so it ends up at `to`, carrying its size along.
    ///
    /// Returns false while dragging or if either index is out of range.
    pub fn reorder_items(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if self.session.is_dragging() || from >= len || to >= len {
            return false;
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
            let size = self.sizes.remove(from);
            self.sizes.insert(to, size);
            self.epoch = self.epoch.wrapping_add(1);
            self.sync();
        }
        true
    }

    /// The display-ordered sequence to render.
    ///
    /// The header comes first and the footer last. While a transition is in
    /// flight a [`Slot::Ghost`] is spliced next to the item at the ghost index.
    pub fn layout(&self) -> Vec<Slot<'_, T>> {
        let mut out = Vec::with_capacity(self.items.len() + 3);
        if let Some(header) = &self.header {
            out.push(Slot::Header(header));
        }

        let drag = self.session.active();
        let ghost = drag.and_then(|d| {
            let (ghost, current) = (d.ghost(), d.current());
            (ghost != current && ghost < self.order.len()).then(|| GhostSlot {
                display: ghost,
                logical: d.dragged(),
                size: d.dragged_size(),
                presence: self.animation.ghost().value(),
                placement: if ghost < current {
                    GhostPlacement::Before
                } else {
                    GhostPlacement::After
                },
            })
        });
        let base = if self.config.enable_reorder {
            SlotFlags::REORDERABLE
        } else {
            SlotFlags::empty()
        };

        for (display, &logical) in self.order.display_to_logical().iter().enumerate() {
            let Some(item) = self.items.get(logical) else {
                continue;
            };
            let mut flags = base;
            let mut presence = 1.0;
            if drag.is_some_and(|d| d.dragged() == logical) {
                flags |= SlotFlags::DRAGGED;
                if self.animation.entrance().is_animating() {
                    flags |= SlotFlags::ENTERING;
                }
                presence = self.animation.entrance().value();
            }
            let slot = Slot::Item(ItemSlot {
                item,
                logical,
                display,
                run: self.runs.as_ref().and_then(|r| r.run_of(display)),
                rect: self.geometry.as_ref().and_then(|g| g.item_rect(display)),
                flags,
                presence,
                handle: DragHandle { logical },
            });
            match ghost {
                Some(g) if g.display == display => match g.placement {
                    GhostPlacement::Before => {
                        out.push(Slot::Ghost(g));
                        out.push(slot);
                    }
                    GhostPlacement::After => {
                        out.push(slot);
                        out.push(Slot::Ghost(g));
                    }
                },
                _ => out.push(slot),
            }
        }

        if let Some(footer) = &self.footer {
            out.push(Slot::Footer(footer));
        }
        out
    }

    fn request_animation_to_next(&mut self, accepting_new_target: bool) -> bool {
        let settled = self.animation.is_entrance_settled();
        if !self
            .session
            .advance_to_next(settled, accepting_new_target)
        {
            return false;
        }
        #[cfg(feature = "tracing")]
        if let Some(d) = self.session.active() {
            tracing::debug!(current = d.current(), ghost = d.ghost(), "transition started");
        }
        self.animation.start_transition();
        self.sync();
        true
    }

    fn scroll_toward(&mut self, display: usize) {
        let Some(rect) = self.geometry.as_ref().and_then(|g| g.item_rect(display)) else {
            return;
        };
        let axis = self.config.scroll_axis;
        let margin = self
            .session
            .active()
            .and_then(|d| d.dragged_size())
            .map_or(0.0, |s| axis.main(s));
        let (start, end) = axis.span(rect);
        let reveal = RevealOffsets::for_span(start, end, &self.viewport);
        if let Some(request) = self
            .scroller
            .maybe_scroll_into_view(margin, &self.viewport, reveal)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(offset = request.offset, "scroll requested");
            self.handler.dispatch(ReorderEvent::ScrollTo(request));
        }
    }

    fn sync(&mut self) {
        let len = self.items.len();
        if self.sizes.len() != len {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = self.sizes.len(), to = len, "sizes resized");
            self.sizes.resize(len, None);
            self.epoch = self.epoch.wrapping_add(1);
        }
        let drag = self.session.active().map(|d| (d.start(), d.current()));
        let key = RunsKey {
            len,
            drag,
            epoch: self.epoch,
        };
        if self.runs_key == Some(key) {
            return;
        }
        self.order.rebuild(len, drag);
        if let Some(active) = self.session.active_mut()
            && active.fill_missing(&self.sizes)
        {
            #[cfg(feature = "tracing")]
            tracing::trace!("drag snapshot measured");
        }
        self.recompute_runs();
        if let Some(active) = self.session.active_mut() {
            active.refresh_runs(self.runs.as_ref());
        }
        self.runs_key = Some(key);
    }

    /// Rebuild runs and geometry in display order. During a drag the snapshot
    /// sizes are used, so hover zones stay put until the drag ends.
    fn recompute_runs(&mut self) {
        let sizes = match self.session.active() {
            Some(active) => active.sizes(),
            None => self.sizes.as_slice(),
        };
        let measured: Option<Vec<Size>> = self
            .order
            .display_to_logical()
            .iter()
            .map(|&logical| sizes.get(logical).copied().flatten())
            .collect();
        match measured {
            Some(sizes) => {
                let runs = compute_runs(&sizes, &self.config.run_params());
                self.geometry = Some(WrapLayout::compute(
                    &sizes,
                    &runs,
                    self.config.axis,
                    self.config.spacing,
                    self.config.run_spacing,
                ));
                self.runs = Some(runs);
            }
            None => {
                self.geometry = None;
                self.runs = fixed_runs(self.order.len(), &self.config.constraints);
            }
        }
    }
}
