// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart styling and animation configuration.

use core::time::Duration;

use crate::animation::Curve;
use crate::arc::DEFAULT_TOLERANCE;
use crate::layout::DEFAULT_GAP_SCALE;

/// Scale applied to the selected segment.
pub const DEFAULT_SELECTED_SCALE: f64 = 1.12;

/// Scale and opacity a hidden segment animates from.
///
/// Kept above zero so a hidden segment still has a non-degenerate transform.
pub const DEFAULT_ENTER_FLOOR: f64 = 0.001;

/// Delay added per segment index during reveal.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

/// Animation configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationStyle {
    /// When `false`, segments are always fully visible and selection emphasis snaps.
    pub enabled: bool,
    /// Curve for the staggered reveal and exit.
    pub reveal: Curve,
    /// Curve for selection emphasis.
    pub selection: Curve,
    /// Delay added per segment index.
    pub stagger: Duration,
    /// Scale and opacity of a fully hidden segment.
    pub enter_floor: f64,
}

impl AnimationStyle {
    /// Animation turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for AnimationStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            reveal: Curve::SPRING,
            selection: Curve::FAST_EASE_IN_OUT,
            stagger: DEFAULT_STAGGER,
            enter_floor: DEFAULT_ENTER_FLOOR,
        }
    }
}

/// Visual configuration shared by every segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    /// Ring stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Scale applied to the selected segment.
    pub selected_scale: f64,
    /// Factor converting the stroke width into an angular gap, see [`crate::angular_gap`].
    pub gap_scale: f64,
    /// Curve flattening tolerance used for `BezPath` conversion.
    pub tolerance: f64,
    /// Animation configuration.
    pub animation: AnimationStyle,
}

impl ChartStyle {
    /// Creates a style with the given stroke width and default everything else.
    pub fn new(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            ..Self::default()
        }
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the selected segment's scale.
    pub fn with_selected_scale(mut self, scale: f64) -> Self {
        self.selected_scale = scale;
        self
    }

    /// Overrides the gap tuning factor.
    pub fn with_gap_scale(mut self, gap_scale: f64) -> Self {
        self.gap_scale = gap_scale;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the animation configuration.
    pub fn with_animation(mut self, animation: AnimationStyle) -> Self {
        self.animation = animation;
        self
    }

    /// Turns animation off.
    pub fn without_animation(mut self) -> Self {
        self.animation.enabled = false;
        self
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            stroke_width: 24.0,
            selected_scale: DEFAULT_SELECTED_SCALE,
            gap_scale: DEFAULT_GAP_SCALE,
            tolerance: DEFAULT_TOLERANCE,
            animation: AnimationStyle::default(),
        }
    }
}
