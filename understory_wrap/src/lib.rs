// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_wrap --heading-base-level=0

//! Understory Wrap: run assignment and geometry for wrapping rows of items.
//!
//! Understory Wrap answers two questions for a row of items that wraps onto
//! multiple lines ("runs"):
//!
//! - Which run does each item occupy? See [`compute_runs`].
//! - Where does each item sit, and which half of which item is under a point? See [`WrapLayout`].
//!
//! It is the measurement layer underneath a reorderable wrap: the reorder engine
//! feeds it display-ordered sizes and uses the results to decide run membership,
//! hover zones, and scroll targets.
//!
//! ## Not a flow layout
//!
//! This crate does not measure content, justify runs, or align items within a
//! run. Items are placed start-aligned with fixed spacing.
//! Upstream code measures items and hands their sizes in.
//!
//! ## Constraints
//!
//! [`RunConstraints`] bounds how many items a run may hold.
//! When the minimum and maximum are equal, run assignment becomes a fixed grid
//! and sizes are never consulted, so it works before anything is measured
//! (see [`fixed_runs`]).
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_wrap::{Axis, RunConstraints, RunParams, WrapLayout, compute_runs};
//!
//! let sizes = vec![Size::new(40.0, 40.0); 5];
//! let params = RunParams {
//!     axis: Axis::Horizontal,
//!     main_axis_limit: 100.0,
//!     spacing: 8.0,
//!     constraints: RunConstraints::UNBOUNDED,
//! };
//! let runs = compute_runs(&sizes, &params);
//! assert_eq!(runs.as_slice(), &[0, 0, 1, 1, 2]);
//!
//! let layout = WrapLayout::compute(&sizes, &runs, params.axis, params.spacing, 8.0);
//! let zone = layout.hit_test(Point::new(50.0, 10.0)).unwrap();
//! assert_eq!(zone.display_index, 1);
//! assert!(zone.is_pre_edge);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;
pub mod runs;
pub mod types;

pub use geometry::{HoverZone, RunMetrics, WrapLayout};
pub use runs::{RunParams, compute_runs, compute_runs_from_extents, fixed_runs};
pub use types::{Axis, ConstraintError, RunAssignment, RunConstraints};
