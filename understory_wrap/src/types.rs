// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for run assignment: axes, per-run constraints, and the assignment itself.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect, Size};

/// The axis along which items are laid out before wrapping into a new run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items flow left to right; runs stack top to bottom.
    #[default]
    Horizontal,
    /// Items flow top to bottom; runs stack left to right.
    Vertical,
}

impl Axis {
    /// Extent of `size` along this axis.
    #[inline]
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub fn main_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Coordinate of `point` across this axis.
    #[inline]
    pub fn cross_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.y,
            Self::Vertical => point.x,
        }
    }

    /// Leading and trailing coordinates of `rect` along this axis.
    #[inline]
    pub fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }

    /// Build a point from main/cross coordinates.
    #[inline]
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Build a size from main/cross extents.
    #[inline]
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// The other axis.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Rejected [`RunConstraints`] combinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// A per-run count of zero can never be satisfied.
    #[error("items per run must be at least 1")]
    ZeroItemsPerRun,
    /// The maximum is below the minimum.
    #[error("max items per run ({max}) is below min items per run ({min})")]
    MaxBelowMin {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },
}

/// Optional bounds on the number of items placed in one run.
///
/// When both bounds are set and equal, runs are assigned arithmetically and item
/// sizes are never consulted. See [`RunConstraints::fixed_run_size`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunConstraints {
    /// Minimum items per run (default 1). The final run may hold fewer.
    pub min_per_run: Option<usize>,
    /// Maximum items per run (default unbounded).
    pub max_per_run: Option<usize>,
}

impl RunConstraints {
    /// No bounds: runs are determined purely by geometry.
    pub const UNBOUNDED: Self = Self {
        min_per_run: None,
        max_per_run: None,
    };

    /// Create constraints without validation.
    ///
    /// Invalid combinations are caught by `debug_assert!` when used and
    /// normalized in release builds; use [`RunConstraints::try_new`] to surface them.
    pub const fn new(min_per_run: Option<usize>, max_per_run: Option<usize>) -> Self {
        Self {
            min_per_run,
            max_per_run,
        }
    }

    /// Exactly `per_run` items in every run (the last may hold fewer).
    pub const fn fixed(per_run: usize) -> Self {
        Self::new(Some(per_run), Some(per_run))
    }

    /// Create validated constraints.
    pub fn try_new(
        min_per_run: Option<usize>,
        max_per_run: Option<usize>,
    ) -> Result<Self, ConstraintError> {
        let c = Self::new(min_per_run, max_per_run);
        c.validate()?;
        Ok(c)
    }

    /// Check the constraints for contradictions.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if self.min_per_run == Some(0) || self.max_per_run == Some(0) {
            return Err(ConstraintError::ZeroItemsPerRun);
        }
        if let (Some(min), Some(max)) = (self.min_per_run, self.max_per_run)
            && max < min
        {
            return Err(ConstraintError::MaxBelowMin { min, max });
        }
        Ok(())
    }

    /// Repair contradictions: zero bounds are dropped and a maximum below the
    /// minimum is raised to it.
    pub fn normalized(self) -> Self {
        let min_per_run = self.min_per_run.filter(|&n| n > 0);
        let max_per_run = self
            .max_per_run
            .filter(|&n| n > 0)
            .map(|max| max.max(min_per_run.unwrap_or(1)));
        Self {
            min_per_run,
            max_per_run,
        }
    }

    /// Returns the run size when both bounds are set and equal.
    pub fn fixed_run_size(&self) -> Option<usize> {
        match (self.min_per_run, self.max_per_run) {
            (Some(min), Some(max)) if min == max && min > 0 => Some(min),
            _ => None,
        }
    }

    /// Minimum items per run, normalized to at least 1.
    pub fn effective_min(&self) -> usize {
        self.min_per_run.unwrap_or(1).max(1)
    }

    /// Maximum items per run, normalized to be no smaller than [`Self::effective_min`].
    pub fn effective_max(&self) -> usize {
        debug_assert!(
            self.validate().is_ok(),
            "invalid run constraints: {:?}",
            self
        );
        self.max_per_run
            .unwrap_or(usize::MAX)
            .max(self.effective_min())
    }
}

/// Run membership for each display slot.
///
/// Run indices start at `0` and are weakly increasing with the slot index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunAssignment {
    runs: Vec<usize>,
}

impl RunAssignment {
    /// An assignment with no items.
    pub const fn empty() -> Self {
        Self { runs: Vec::new() }
    }

    pub(crate) fn from_vec(runs: Vec<usize>) -> Self {
        debug_assert!(
            runs.windows(2).all(|w| w[0] <= w[1]),
            "run indices must be weakly increasing"
        );
        Self { runs }
    }

    /// Fixed-grid assignment: slot `i` is in run `i / per_run`.
    ///
    /// A `per_run` of zero is a caller error; it is treated as one item per run.
    pub fn fixed_grid(len: usize, per_run: usize) -> Self {
        debug_assert!(per_run > 0, "fixed grid needs at least one item per run");
        let per_run = per_run.max(1);
        Self {
            runs: (0..len).map(|i| i / per_run).collect(),
        }
    }

    /// Number of assigned slots.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// True if no slots are assigned.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The run of the slot at `index`, if any.
    pub fn run_of(&self, index: usize) -> Option<usize> {
        self.runs.get(index).copied()
    }

    /// Number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.last().map_or(0, |last| last + 1)
    }

    /// Slot indices belonging to `run`. Empty if the run does not exist.
    pub fn slots_in_run(&self, run: usize) -> Range<usize> {
        let start = self.runs.partition_point(|&r| r < run);
        let end = self.runs.partition_point(|&r| r <= run);
        start..end
    }

    /// Run indices in slot order.
    pub fn as_slice(&self) -> &[usize] {
        &self.runs
    }

    /// True if the slots at `a` and `b` share a run.
    pub fn same_run(&self, a: usize, b: usize) -> bool {
        matches!((self.run_of(a), self.run_of(b)), (Some(x), Some(y)) if x == y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn constraints_reject_contradictions() {
        assert_eq!(
            RunConstraints::try_new(Some(3), Some(2)),
            Err(ConstraintError::MaxBelowMin { min: 3, max: 2 })
        );
        assert_eq!(
            RunConstraints::try_new(Some(0), None),
            Err(ConstraintError::ZeroItemsPerRun)
        );
        assert!(RunConstraints::try_new(Some(2), Some(2)).is_ok());
        assert!(RunConstraints::try_new(None, None).is_ok());
    }

    #[test]
    fn normalized_repairs() {
        assert_eq!(
            RunConstraints::new(Some(3), Some(2)).normalized(),
            RunConstraints::fixed(3)
        );
        assert_eq!(
            RunConstraints::new(Some(0), Some(0)).normalized(),
            RunConstraints::UNBOUNDED
        );
        let ok = RunConstraints::new(Some(2), Some(5));
        assert_eq!(ok.normalized(), ok);
        assert!(RunConstraints::new(Some(7), Some(1)).normalized().validate().is_ok());
    }

    #[test]
    fn fixed_run_size_needs_both_bounds() {
        assert_eq!(RunConstraints::fixed(4).fixed_run_size(), Some(4));
        assert_eq!(RunConstraints::new(Some(4), None).fixed_run_size(), None);
        assert_eq!(RunConstraints::new(Some(2), Some(4)).fixed_run_size(), None);
        assert_eq!(RunConstraints::UNBOUNDED.fixed_run_size(), None);
    }

    #[test]
    fn slots_in_run_partitions() {
        let a = RunAssignment::from_vec(vec![0, 0, 1, 1, 1, 2]);
        assert_eq!(a.run_count(), 3);
        assert_eq!(a.slots_in_run(0), 0..2);
        assert_eq!(a.slots_in_run(1), 2..5);
        assert_eq!(a.slots_in_run(2), 5..6);
        assert!(a.slots_in_run(3).is_empty());
        assert!(a.same_run(2, 4));
        assert!(!a.same_run(1, 2));
        assert!(!a.same_run(0, 9));
    }

    #[test]
    fn fixed_grid_divides() {
        let a = RunAssignment::fixed_grid(7, 3);
        assert_eq!(a.as_slice(), &[0, 0, 0, 1, 1, 1, 2]);
        assert_eq!(RunAssignment::fixed_grid(0, 3).run_count(), 0);
    }

    #[test]
    fn axis_swaps_components() {
        let s = Size::new(10.0, 20.0);
        assert_eq!(Axis::Horizontal.main(s), 10.0);
        assert_eq!(Axis::Vertical.main(s), 20.0);
        assert_eq!(Axis::Vertical.size(1.0, 2.0), Size::new(2.0, 1.0));
        assert_eq!(Axis::Vertical.point(1.0, 2.0), Point::new(2.0, 1.0));
        assert_eq!(Axis::Horizontal.flip(), Axis::Vertical);
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Axis::Horizontal.span(r), (1.0, 3.0));
        assert_eq!(Axis::Vertical.span(r), (2.0, 4.0));
    }
}
