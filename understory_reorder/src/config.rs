// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use core::time::Duration;

use understory_wrap::{Axis, ConstraintError, RunConstraints, RunParams};

use crate::animation::DEFAULT_REORDER_DURATION;
use crate::scroll::DEFAULT_SCROLL_DURATION;

/// Rejected [`WrapConfig`] values.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The main axis extent is NaN or negative. Infinity means "never wrap".
    #[error("main axis extent must be a non-negative number, got {0}")]
    InvalidExtent(f64),
    /// A spacing value is NaN, infinite, or negative.
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),
    /// The per-run constraints contradict each other.
    #[error(transparent)]
    Constraints(#[from] ConstraintError),
}

/// Layout and behavior settings for a [`LayoutEngine`](crate::engine::LayoutEngine).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WrapConfig {
    /// Direction items flow in before wrapping.
    pub axis: Axis,
    /// Space available along `axis`.
    pub main_axis_extent: f64,
    /// Gap between items in a run.
    pub spacing: f64,
    /// Gap between runs.
    pub run_spacing: f64,
    /// Per-run item bounds.
    pub constraints: RunConstraints,
    /// Axis the hosting viewport scrolls along.
    pub scroll_axis: Axis,
    /// Duration of the entrance and ghost transition.
    pub reorder_duration: Duration,
    /// Duration attached to scroll requests.
    pub scroll_duration: Duration,
    /// When false, drags and move actions are rejected.
    pub enable_reorder: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            main_axis_extent: f64::INFINITY,
            spacing: 0.0,
            run_spacing: 0.0,
            constraints: RunConstraints::UNBOUNDED,
            scroll_axis: Axis::Vertical,
            reorder_duration: DEFAULT_REORDER_DURATION,
            scroll_duration: DEFAULT_SCROLL_DURATION,
            enable_reorder: true,
        }
    }
}

impl WrapConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.main_axis_extent.is_nan() || self.main_axis_extent < 0.0 {
            return Err(ConfigError::InvalidExtent(self.main_axis_extent));
        }
        for s in [self.spacing, self.run_spacing] {
            if !s.is_finite() || s < 0.0 {
                return Err(ConfigError::InvalidSpacing(s));
            }
        }
        self.constraints.validate()?;
        Ok(())
    }

    /// Replace invalid values with usable ones.
    ///
    /// A NaN or negative extent becomes `0.0` (one item per run), bad spacing
    /// becomes `0.0`, and constraints are repaired with
    /// [`RunConstraints::normalized`].
    pub fn normalized(mut self) -> Self {
        if self.main_axis_extent.is_nan() || self.main_axis_extent < 0.0 {
            self.main_axis_extent = 0.0;
        }
        for s in [&mut self.spacing, &mut self.run_spacing] {
            if !s.is_finite() || *s < 0.0 {
                *s = 0.0;
            }
        }
        self.constraints = self.constraints.normalized();
        self
    }

    /// Parameters for [`understory_wrap::compute_runs`].
    pub fn run_params(&self) -> RunParams {
        RunParams {
            axis: self.axis,
            main_axis_limit: self.main_axis_extent,
            spacing: self.spacing,
            constraints: self.constraints,
        }
    }
}
