// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-into-view requests for the hovered item.
//!
//! ## Overview
//!
//! While dragging over a list that overflows its viewport, the engine asks the
//! host to scroll so the hovered item, plus a margin the size of the dragged
//! item, stays visible.
//!
//! Offsets follow the usual scroll convention: `reveal_leading` is the scroll
//! offset that puts the target's leading edge at the viewport's leading edge, and
//! `reveal_trailing` the offset that puts its trailing edge at the viewport's
//! trailing edge. For a target smaller than the viewport,
//! `reveal_trailing <= reveal_leading`, and any offset between the two shows the
//! whole target.
//!
//! ## Serialization
//!
//! At most one request is in flight. [`AutoScroller::maybe_scroll_into_view`]
//! returns `None` while a previous request has not been acknowledged with
//! [`AutoScroller::finish`]; the dropped request is not queued.

use core::time::Duration;

/// Default scroll animation duration.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(200);

/// Scroll state of the viewport hosting the wrap.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollViewport {
    /// Current scroll offset.
    pub offset: f64,
    /// Visible extent along the scroll axis.
    pub extent: f64,
    /// Smallest reachable offset.
    pub min_scroll_extent: f64,
    /// Largest reachable offset.
    pub max_scroll_extent: f64,
    /// Position of the wrap's leading edge within the scrolled content.
    pub content_offset: f64,
}

/// The pair of offsets that reveal a target at either edge of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RevealOffsets {
    /// Offset placing the target's leading edge at the viewport's leading edge.
    pub leading: f64,
    /// Offset placing the target's trailing edge at the viewport's trailing edge.
    pub trailing: f64,
}

impl RevealOffsets {
    /// Reveal offsets for a target spanning `start..end` in wrap coordinates.
    pub fn for_span(start: f64, end: f64, viewport: &ScrollViewport) -> Self {
        Self {
            leading: viewport.content_offset + start,
            trailing: viewport.content_offset + end - viewport.extent,
        }
    }
}

/// A request for the host to animate its scroll position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Target scroll offset.
    pub offset: f64,
    /// Animation duration.
    pub duration: Duration,
}

/// Decides when to scroll and serializes requests.
#[derive(Clone, Debug)]
pub struct AutoScroller {
    in_flight: bool,
    duration: Duration,
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_DURATION)
    }
}

impl AutoScroller {
    /// Create an idle scroller.
    pub fn new(duration: Duration) -> Self {
        Self {
            in_flight: false,
            duration,
        }
    }

    /// Duration attached to issued requests.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration for later requests.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// True while a request awaits [`AutoScroller::finish`].
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Issue a request if the target, padded by `margin` on both sides, is not
    /// fully visible.
    ///
    /// The padded window is clamped to the scrollable range:
    /// `top = max(min_scroll_extent, reveal.leading - margin)` and
    /// `bottom = min(max_scroll_extent, reveal.trailing + margin)`.
    /// The target counts as on screen when `bottom <= offset <= top`. Otherwise
    /// the request scrolls to `bottom` if the offset is below it, else to `top`.
    pub fn maybe_scroll_into_view(
        &mut self,
        margin: f64,
        viewport: &ScrollViewport,
        reveal: RevealOffsets,
    ) -> Option<ScrollRequest> {
        if self.in_flight {
            return None;
        }
        let top = viewport.min_scroll_extent.max(reveal.leading - margin);
        let bottom = viewport.max_scroll_extent.min(reveal.trailing + margin);
        let offset = viewport.offset;
        let on_screen = offset <= top && offset >= bottom;
        if on_screen {
            return None;
        }
        let target = if offset < bottom { bottom } else { top };
        self.in_flight = true;
        Some(ScrollRequest {
            offset: target,
            duration: self.duration,
        })
    }

    /// Acknowledge completion of the in-flight request. Harmless when idle.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}
