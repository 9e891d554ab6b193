// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring layout: chart radius, angular gap and center content bounds.

use kurbo::{Point, Rect, Size};

/// Empirical factor converting a stroke-width-sized gap at the ring into an angle.
///
/// It is a tuning value, not a derived one; override it through
/// [`ChartStyle::with_gap_scale`](crate::ChartStyle::with_gap_scale).
pub const DEFAULT_GAP_SCALE: f64 = 1.15;

/// Angular gap (radians) between neighbouring segments.
///
/// `gap * radius` stays at `stroke_width * gap_scale`, so the gap looks the same on every
/// chart size. A zero, negative or non-finite radius yields no gap.
pub fn angular_gap(stroke_width: f64, radius: f64, gap_scale: f64) -> f64 {
    if !radius.is_finite() || radius <= 0.0 {
        return 0.0;
    }
    let gap = stroke_width / radius * gap_scale;
    if gap.is_finite() { gap.max(0.0) } else { 0.0 }
}

/// Geometry shared by every segment of a chart for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    /// Chart bounds (origin at the top-left of the chart area).
    pub bounds: Rect,
    /// Ring center.
    pub center: Point,
    /// Chart radius, `min(width, height) / 2`.
    pub radius: f64,
    /// Stroke width of every segment.
    pub stroke_width: f64,
    /// Angular gap applied to every segment.
    pub gap: f64,
}

impl RingLayout {
    /// Lays out a ring inside `size`.
    pub fn new(size: Size, stroke_width: f64, gap_scale: f64) -> Self {
        let bounds = size.to_rect();
        let radius = (size.width.min(size.height) * 0.5).max(0.0);
        Self {
            bounds,
            center: bounds.center(),
            radius,
            stroke_width,
            gap: angular_gap(stroke_width, radius, gap_scale),
        }
    }

    /// Radius of the stroke's midline once the stroke is inset to sit inside the bounds.
    pub fn stroke_radius(&self) -> f64 {
        self.radius - self.stroke_width * 0.5
    }

    /// Square centered in the ring that never overlaps the stroke.
    ///
    /// Its side is `min(width, height) - 2 * stroke_width`, clamped at zero.
    pub fn center_bounds(&self) -> Rect {
        let side = (2.0 * self.radius - 2.0 * self.stroke_width).max(0.0);
        Rect::from_center_size(self.center, (side, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_times_radius_is_constant() {
        for radius in [50.0, 100.0, 200.0] {
            let gap = angular_gap(42.0, radius, DEFAULT_GAP_SCALE);
            assert!(
                (gap * radius - 42.0 * DEFAULT_GAP_SCALE).abs() < 1e-9,
                "radius {radius}: gap {gap}"
            );
        }
    }

    #[test]
    fn zero_radius_yields_zero_gap() {
        assert_eq!(angular_gap(10.0, 0.0, DEFAULT_GAP_SCALE), 0.0);
        assert_eq!(angular_gap(10.0, -5.0, DEFAULT_GAP_SCALE), 0.0);
        assert_eq!(angular_gap(10.0, f64::NAN, DEFAULT_GAP_SCALE), 0.0);
        assert_eq!(angular_gap(10.0, f64::INFINITY, DEFAULT_GAP_SCALE), 0.0);
    }

    #[test]
    fn gap_scale_is_overridable() {
        let gap = angular_gap(10.0, 100.0, 2.0);
        assert!((gap - 0.2).abs() < 1e-12, "gap {gap}");
    }

    #[test]
    fn center_bounds_fit_inside_the_stroke() {
        let layout = RingLayout::new(Size::new(300.0, 250.0), 42.0, DEFAULT_GAP_SCALE);
        assert_eq!(layout.radius, 125.0);
        assert_eq!(layout.center, Point::new(150.0, 125.0));
        let inner = layout.center_bounds();
        assert!((inner.width() - (250.0 - 84.0)).abs() < 1e-9, "inner {inner:?}");
        assert_eq!(inner.center(), layout.center);
        assert!((layout.stroke_radius() - 104.0).abs() < 1e-9, "stroke radius");
    }

    #[test]
    fn collapsed_layout_has_empty_center() {
        let layout = RingLayout::new(Size::new(0.0, 0.0), 12.0, DEFAULT_GAP_SCALE);
        assert_eq!(layout.gap, 0.0);
        assert_eq!(layout.center_bounds().area(), 0.0);
    }
}
