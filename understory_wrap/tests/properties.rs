// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for run assignment and placement.

use kurbo::Size;
use proptest::prelude::*;
use understory_wrap::{Axis, RunConstraints, RunParams, WrapLayout, compute_runs};

fn sizes_strategy() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec((1.0_f64..200.0, 1.0_f64..80.0), 0..64)
        .prop_map(|v| v.into_iter().map(|(w, h)| Size::new(w, h)).collect())
}

fn constraints_strategy() -> impl Strategy<Value = RunConstraints> {
    (prop::option::of(1_usize..6), prop::option::of(0_usize..6)).prop_map(|(min, extra)| {
        let max = extra.map(|e| min.unwrap_or(1) + e);
        RunConstraints::new(min, max)
    })
}

proptest! {
    #[test]
    fn one_run_per_item_weakly_increasing(
        sizes in sizes_strategy(),
        limit in 1.0_f64..1000.0,
        spacing in 0.0_f64..20.0,
        constraints in constraints_strategy(),
    ) {
        let params = RunParams { axis: Axis::Horizontal, main_axis_limit: limit, spacing, constraints };
        let runs = compute_runs(&sizes, &params);
        prop_assert_eq!(runs.len(), sizes.len());
        prop_assert!(runs.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(runs.as_slice().windows(2).all(|w| w[1] - w[0] <= 1));
        if let Some(first) = runs.as_slice().first() {
            prop_assert_eq!(*first, 0);
        }
    }

    #[test]
    fn runs_respect_max_and_min(
        sizes in sizes_strategy(),
        limit in 1.0_f64..1000.0,
        constraints in constraints_strategy(),
    ) {
        let params = RunParams { axis: Axis::Horizontal, main_axis_limit: limit, spacing: 0.0, constraints };
        let runs = compute_runs(&sizes, &params);
        let count = runs.run_count();
        for run in 0..count {
            let n = runs.slots_in_run(run).len();
            prop_assert!(n <= constraints.effective_max());
            // Only the final run may fall short of the minimum.
            if run + 1 < count {
                prop_assert!(n >= constraints.effective_min());
            }
        }
    }

    #[test]
    fn fixed_grid_is_division(sizes in sizes_strategy(), k in 1_usize..8, limit in 1.0_f64..50.0) {
        let params = RunParams {
            axis: Axis::Vertical,
            main_axis_limit: limit,
            spacing: 3.0,
            constraints: RunConstraints::fixed(k),
        };
        let runs = compute_runs(&sizes, &params);
        for (i, run) in runs.as_slice().iter().enumerate() {
            prop_assert_eq!(*run, i / k);
        }
    }

    #[test]
    fn unconstrained_runs_fit_the_limit(sizes in sizes_strategy(), limit in 1.0_f64..1000.0) {
        let params = RunParams { axis: Axis::Horizontal, main_axis_limit: limit, spacing: 4.0, constraints: RunConstraints::UNBOUNDED };
        let runs = compute_runs(&sizes, &params);
        let layout = WrapLayout::compute(&sizes, &runs, Axis::Horizontal, 4.0, 0.0);
        for m in layout.runs() {
            // A run over the limit must hold a single oversized item.
            if m.main_extent > limit {
                prop_assert_eq!(m.slot_range().len(), 1);
            }
        }
    }
}
