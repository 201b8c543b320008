// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap geometry: place assigned items and hit-test hover zones.
//!
//! Items are placed start-aligned within their run, separated by `spacing`
//! along the main axis. Runs are stacked along the cross axis, separated by
//! `run_spacing`; each run is as thick as its thickest item.
//!
//! Every placed item carries two hover zones split at the midpoint of its main
//! axis extent: the leading half (`is_pre_edge == true`) and the trailing half.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect, Size};

use crate::types::{Axis, RunAssignment};

/// Metrics for one run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunMetrics {
    /// Slots in this run.
    pub slots: (usize, usize),
    /// Sum of item extents plus inner spacing along the main axis.
    pub main_extent: f64,
    /// Largest item extent along the cross axis.
    pub cross_extent: f64,
    /// Offset of the run's leading edge along the cross axis.
    pub cross_offset: f64,
}

impl RunMetrics {
    /// Slot range covered by this run.
    pub fn slot_range(&self) -> Range<usize> {
        self.slots.0..self.slots.1
    }
}

/// One of the two hover zones attached to a placed item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoverZone {
    /// Display slot of the hovered item.
    pub display_index: usize,
    /// True for the leading half, false for the trailing half.
    pub is_pre_edge: bool,
}

/// Placed items and runs for one layout pass.
#[derive(Clone, Debug, Default)]
pub struct WrapLayout {
    axis: Axis,
    rects: Vec<Rect>,
    runs: Vec<RunMetrics>,
    size: Size,
}

impl WrapLayout {
    /// Place `sizes` (in slot order) according to `runs`.
    ///
    /// `sizes` and `runs` should have the same length; extra entries on either
    /// side are ignored.
    pub fn compute(
        sizes: &[Size],
        runs: &RunAssignment,
        axis: Axis,
        spacing: f64,
        run_spacing: f64,
    ) -> Self {
        debug_assert_eq!(
            sizes.len(),
            runs.len(),
            "every slot needs both a size and a run"
        );
        let len = sizes.len().min(runs.len());

        let mut metrics: Vec<RunMetrics> = Vec::with_capacity(runs.run_count());
        let mut mains: Vec<f64> = Vec::with_capacity(len);
        for (slot, size) in sizes.iter().take(len).enumerate() {
            let run = runs.as_slice()[slot];
            let main = axis.main(*size);
            let cross = axis.cross(*size);
            let open = if metrics.len() == run + 1 {
                metrics.last_mut()
            } else {
                None
            };
            match open {
                Some(m) => {
                    m.main_extent += spacing;
                    mains.push(m.main_extent);
                    m.main_extent += main;
                    m.cross_extent = m.cross_extent.max(cross);
                    m.slots.1 = slot + 1;
                }
                _ => {
                    debug_assert_eq!(metrics.len(), run, "runs must not skip indices");
                    mains.push(0.0);
                    metrics.push(RunMetrics {
                        slots: (slot, slot + 1),
                        main_extent: main,
                        cross_extent: cross,
                        cross_offset: 0.0,
                    });
                }
            }
        }

        let mut cross_cursor = 0.0;
        let mut main_total = 0.0_f64;
        for (i, m) in metrics.iter_mut().enumerate() {
            if i > 0 {
                cross_cursor += run_spacing;
            }
            m.cross_offset = cross_cursor;
            cross_cursor += m.cross_extent;
            main_total = main_total.max(m.main_extent);
        }

        let rects = sizes
            .iter()
            .take(len)
            .enumerate()
            .map(|(slot, size)| {
                let run = &metrics[runs.as_slice()[slot]];
                let origin = axis.point(mains[slot], run.cross_offset);
                Rect::from_origin_size(origin, *size)
            })
            .collect();

        Self {
            axis,
            rects,
            runs: metrics,
            size: axis.size(main_total, cross_cursor),
        }
    }

    /// Main axis used for placement.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of placed slots.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Rectangle of the item at `slot`.
    pub fn item_rect(&self, slot: usize) -> Option<Rect> {
        self.rects.get(slot).copied()
    }

    /// All item rectangles in slot order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Per-run metrics in run order.
    pub fn runs(&self) -> &[RunMetrics] {
        &self.runs
    }

    /// Bounding size of all runs.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resolve a point to the hover zone under it.
    ///
    /// Points in the spacing between items or runs, or past the end of a run,
    /// hit nothing.
    pub fn hit_test(&self, pt: Point) -> Option<HoverZone> {
        let main = self.axis.main_of(pt);
        let cross = self.axis.cross_of(pt);
        let run = self
            .runs
            .iter()
            .find(|m| cross >= m.cross_offset && cross < m.cross_offset + m.cross_extent)?;
        run.slot_range().find_map(|slot| {
            let rect = self.rects[slot];
            if !rect.contains(pt) {
                return None;
            }
            let (start, end) = self.axis.span(rect);
            debug_assert!(main >= start && main < end, "contained point is inside span");
            Some(HoverZone {
                display_index: slot,
                is_pre_edge: main < (start + end) * 0.5,
            })
        })
    }
}
