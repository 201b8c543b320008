// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run assignment: decide which wrapped line each item occupies.
//!
//! ## Greedy filling
//!
//! Items are visited in slot order. An item joins the current run when
//! `run_extent + spacing + item_extent <= main_axis_limit`, with two overrides:
//!
//! - a run below [`RunConstraints::effective_min`] always accepts the next item;
//! - a run at [`RunConstraints::effective_max`] never does.
//!
//! The first item of a run is always placed, so an item larger than the limit
//! still gets a run of its own rather than being split.
//!
//! ## Fixed grid
//!
//! When [`RunConstraints::fixed_run_size`] is `Some(k)`, sizes are ignored and
//! slot `i` lands in run `i / k`. [`fixed_runs`] exposes that path directly for
//! callers whose items have not been measured yet.

use alloc::vec::Vec;

use kurbo::Size;

use crate::types::{Axis, RunAssignment, RunConstraints};

/// Parameters shared by run assignment and geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunParams {
    /// Axis along which items flow.
    pub axis: Axis,
    /// Available extent along the main axis.
    pub main_axis_limit: f64,
    /// Gap between adjacent items in one run.
    pub spacing: f64,
    /// Per-run item bounds.
    pub constraints: RunConstraints,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            main_axis_limit: f64::INFINITY,
            spacing: 0.0,
            constraints: RunConstraints::UNBOUNDED,
        }
    }
}

/// Assign a run to every item in `sizes`.
///
/// The output has exactly `sizes.len()` entries, in input order.
pub fn compute_runs(sizes: &[Size], params: &RunParams) -> RunAssignment {
    if let Some(per_run) = params.constraints.fixed_run_size() {
        return RunAssignment::fixed_grid(sizes.len(), per_run);
    }
    assign(
        sizes.iter().map(|s| params.axis.main(*s)),
        sizes.len(),
        params,
    )
}

/// Assign runs from main-axis extents directly.
pub fn compute_runs_from_extents(extents: &[f64], params: &RunParams) -> RunAssignment {
    if let Some(per_run) = params.constraints.fixed_run_size() {
        return RunAssignment::fixed_grid(extents.len(), per_run);
    }
    assign(extents.iter().copied(), extents.len(), params)
}

/// Fixed-grid assignment, available without any measurement.
///
/// Returns `None` unless `constraints` pins an exact run size.
pub fn fixed_runs(len: usize, constraints: &RunConstraints) -> Option<RunAssignment> {
    constraints
        .fixed_run_size()
        .map(|per_run| RunAssignment::fixed_grid(len, per_run))
}

fn assign(
    extents: impl Iterator<Item = f64>,
    len: usize,
    params: &RunParams,
) -> RunAssignment {
    let min = params.constraints.effective_min();
    let max = params.constraints.effective_max();

    let mut runs = Vec::with_capacity(len);
    let mut run = 0_usize;
    let mut run_extent = 0.0_f64;
    let mut count = 0_usize;

    for extent in extents {
        let joins = if count == 0 {
            true
        } else if count >= max {
            false
        } else if count < min {
            true
        } else {
            run_extent + params.spacing + extent <= params.main_axis_limit
        };

        if joins {
            if count > 0 {
                run_extent += params.spacing;
            }
            run_extent += extent;
            count += 1;
        } else {
            run += 1;
            run_extent = extent;
            count = 1;
        }
        runs.push(run);
    }

    RunAssignment::from_vec(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn squares(n: usize, side: f64) -> Vec<Size> {
        vec![Size::new(side, side); n]
    }

    fn params(limit: f64, spacing: f64, constraints: RunConstraints) -> RunParams {
        RunParams {
            axis: Axis::Horizontal,
            main_axis_limit: limit,
            spacing,
            constraints,
        }
    }

    #[test]
    fn six_equal_items_fit_one_run() {
        let runs = compute_runs(
            &squares(6, 10.0),
            &params(1000.0, 4.0, RunConstraints::UNBOUNDED),
        );
        assert_eq!(runs.as_slice(), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn wraps_when_spacing_pushes_past_limit() {
        // Three items need 3*10 + 2*5 = 40; a limit of 39 fits only two.
        let runs = compute_runs(
            &squares(5, 10.0),
            &params(39.0, 5.0, RunConstraints::UNBOUNDED),
        );
        assert_eq!(runs.as_slice(), &[0, 0, 1, 1, 2]);

        let runs = compute_runs(
            &squares(5, 10.0),
            &params(40.0, 5.0, RunConstraints::UNBOUNDED),
        );
        assert_eq!(runs.as_slice(), &[0, 0, 0, 1, 1]);
    }

    #[test]
    fn oversized_item_gets_its_own_run() {
        let sizes = [
            Size::new(10.0, 10.0),
            Size::new(500.0, 10.0),
            Size::new(10.0, 10.0),
        ];
        let runs = compute_runs(&sizes, &params(100.0, 0.0, RunConstraints::UNBOUNDED));
        assert_eq!(runs.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn min_per_run_overrides_geometry() {
        let runs = compute_runs(
            &squares(5, 60.0),
            &params(100.0, 0.0, RunConstraints::new(Some(2), None)),
        );
        assert_eq!(runs.as_slice(), &[0, 0, 1, 1, 2]);
    }

    #[test]
    fn max_per_run_caps_even_when_space_remains() {
        let runs = compute_runs(
            &squares(7, 1.0),
            &params(1000.0, 0.0, RunConstraints::new(None, Some(3))),
        );
        assert_eq!(runs.as_slice(), &[0, 0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn fixed_grid_ignores_sizes() {
        let sizes = [
            Size::new(900.0, 1.0),
            Size::new(1.0, 1.0),
            Size::new(1.0, 1.0),
            Size::new(900.0, 1.0),
            Size::new(1.0, 1.0),
        ];
        let runs = compute_runs(&sizes, &params(10.0, 0.0, RunConstraints::fixed(2)));
        assert_eq!(runs.as_slice(), &[0, 0, 1, 1, 2]);
        assert_eq!(fixed_runs(5, &RunConstraints::fixed(2)), Some(runs));
        assert_eq!(fixed_runs(5, &RunConstraints::UNBOUNDED), None);
    }

    #[test]
    fn vertical_axis_reads_heights() {
        let sizes = [
            Size::new(100.0, 10.0),
            Size::new(100.0, 10.0),
            Size::new(100.0, 10.0),
        ];
        let p = RunParams {
            axis: Axis::Vertical,
            ..params(25.0, 0.0, RunConstraints::UNBOUNDED)
        };
        assert_eq!(compute_runs(&sizes, &p).as_slice(), &[0, 0, 1]);
    }

    #[test]
    fn empty_input_has_no_runs() {
        let runs = compute_runs(&[], &RunParams::default());
        assert!(runs.is_empty());
        assert_eq!(runs.run_count(), 0);
    }

    #[test]
    fn extents_match_sizes() {
        let p = params(25.0, 2.0, RunConstraints::UNBOUNDED);
        let extents = [10.0, 10.0, 10.0, 3.0];
        let sizes: Vec<Size> = extents.iter().map(|&w| Size::new(w, 1.0)).collect();
        assert_eq!(compute_runs_from_extents(&extents, &p), compute_runs(&sizes, &p));
    }
}
