// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run assignment and hover zones for a row of chips.
//!
//! This example wraps chips of varying width into a 200px row, prints each
//! run, then resolves a few pointer positions to hover zones.
//!
//! Run:
//! - `cargo run -p understory_demos --example wrap_runs`

use kurbo::{Point, Size};
use understory_wrap::{Axis, RunConstraints, RunParams, WrapLayout, compute_runs, fixed_runs};

fn main() {
    let labels = ["alpha", "be", "gamma-ray", "delta", "eps", "zeta", "eta", "theta"];
    let sizes: Vec<Size> = labels
        .iter()
        .map(|l| Size::new(12.0 + 8.0 * l.len() as f64, 24.0))
        .collect();

    let params = RunParams {
        axis: Axis::Horizontal,
        main_axis_limit: 200.0,
        spacing: 6.0,
        constraints: RunConstraints::UNBOUNDED,
    };
    let runs = compute_runs(&sizes, &params);
    let layout = WrapLayout::compute(&sizes, &runs, params.axis, params.spacing, 4.0);

    for (i, m) in layout.runs().iter().enumerate() {
        let names: Vec<&str> = m.slot_range().map(|s| labels[s]).collect();
        println!(
            "run {i}: {:?} main={} cross_offset={}",
            names, m.main_extent, m.cross_offset
        );
    }
    println!("total size: {:?}", layout.size());

    for pt in [
        Point::new(10.0, 10.0),
        Point::new(90.0, 10.0),
        Point::new(5.0, 40.0),
        Point::new(199.0, 80.0),
    ] {
        match layout.hit_test(pt) {
            Some(z) => println!(
                "{pt:?} -> slot {} ({})",
                z.display_index,
                if z.is_pre_edge { "leading" } else { "trailing" }
            ),
            None => println!("{pt:?} -> nothing"),
        }
    }

    // Before anything is measured, a pinned run size still yields runs.
    let grid = fixed_runs(labels.len(), &RunConstraints::fixed(3));
    println!("fixed grid of 3: {:?}", grid.map(|g| g.as_slice().to_vec()));
}
