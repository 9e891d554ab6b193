// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gap-trimmed ring arc geometry.
//!
//! A ring segment is a single open circular arc meant to be stroked with round caps. The
//! segment's angular share is trimmed by a gap, half at each end, so neighbouring segments
//! stay visually separated once their strokes are capped.

use core::f64::consts::TAU;

use kurbo::{Arc, BezPath, Point, Shape, Vec2};

/// Default curve flattening tolerance used when converting arcs to `BezPath`s.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// An insettable ring segment.
///
/// Angles are in radians, in kurbo's convention (0 along +x, positive sweep is clockwise on a
/// y-down canvas).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingArc {
    /// Center of the ring.
    pub center: Point,
    /// Radius before any inset is applied.
    pub outer_radius: f64,
    /// Accumulated inset; the drawn radius is `outer_radius - inset_amount`.
    pub inset_amount: f64,
    /// Start angle of the untrimmed segment.
    pub start_angle: f64,
    /// Angular share of the untrimmed segment.
    pub angular_share: f64,
    /// Total angle to trim, split evenly between both ends.
    pub gap: f64,
}

impl RingArc {
    /// Creates a segment with no inset.
    pub fn new(
        center: Point,
        outer_radius: f64,
        start_angle: f64,
        angular_share: f64,
        gap: f64,
    ) -> Self {
        Self {
            center,
            outer_radius,
            inset_amount: 0.0,
            start_angle,
            angular_share,
            gap,
        }
    }

    /// Returns a copy shrunk by `amount`, on top of any existing inset.
    #[must_use]
    pub fn inset(mut self, amount: f64) -> Self {
        self.inset_amount += amount;
        self
    }

    /// Radius the arc is actually drawn at.
    pub fn radius(&self) -> f64 {
        self.outer_radius - self.inset_amount
    }

    /// Start angle after trimming half the gap.
    pub fn trimmed_start(&self) -> f64 {
        self.start_angle + self.gap * 0.5
    }

    /// Sweep after trimming the full gap. May be zero or negative.
    pub fn trimmed_span(&self) -> f64 {
        self.angular_share - self.gap
    }

    /// Returns `true` when this segment produces no geometry.
    pub fn is_collapsed(&self) -> bool {
        let span = self.trimmed_span();
        let radius = self.radius();
        !(span.is_finite() && radius.is_finite() && self.trimmed_start().is_finite())
            || span <= 0.0
            || radius <= 0.0
    }

    /// Converts the segment to a path.
    ///
    /// The path is empty iff [`RingArc::is_collapsed`]; otherwise it is a single open sub-path.
    pub fn path(&self, tolerance: f64) -> BezPath {
        if self.is_collapsed() {
            tracing::trace!(
                start = self.start_angle,
                share = self.angular_share,
                gap = self.gap,
                "ring segment collapsed"
            );
            return BezPath::new();
        }
        let radius = self.radius();
        let sweep = self.trimmed_span().min(TAU);
        Arc::new(
            self.center,
            Vec2::new(radius, radius),
            self.trimmed_start(),
            sweep,
            0.0,
        )
        .to_path(tolerance)
    }
}

/// Builds the path for one gap-trimmed ring segment.
///
/// This is the free-function form of [`RingArc::new`] followed by [`RingArc::inset`] and
/// [`RingArc::path`], using [`DEFAULT_TOLERANCE`].
pub fn arc_path(
    center: Point,
    outer_radius: f64,
    inset_amount: f64,
    start_angle: f64,
    angular_share: f64,
    gap: f64,
) -> BezPath {
    RingArc::new(center, outer_radius, start_angle, angular_share, gap)
        .inset(inset_amount)
        .path(DEFAULT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::PI;

    use kurbo::{ParamCurve, PathEl, PathSeg};

    use super::*;

    fn move_count(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn gap_larger_than_share_collapses_to_empty_path() {
        let path = arc_path(Point::new(0.0, 0.0), 100.0, 0.0, 0.0, 0.01, 0.05);
        assert!(path.elements().is_empty(), "expected an empty path");
    }

    #[test]
    fn gap_equal_to_share_collapses() {
        let arc = RingArc::new(Point::ZERO, 50.0, 1.0, 0.3, 0.3);
        assert!(arc.is_collapsed(), "zero span must collapse");
        assert!(arc.path(DEFAULT_TOLERANCE).elements().is_empty(), "path should be empty");
    }

    #[test]
    fn negative_share_and_radius_collapse() {
        assert!(
            arc_path(Point::ZERO, 100.0, 0.0, 0.0, -1.0, 0.0)
                .elements()
                .is_empty(),
            "negative share"
        );
        assert!(
            arc_path(Point::ZERO, 10.0, 12.0, 0.0, 1.0, 0.0)
                .elements()
                .is_empty(),
            "inset past the radius"
        );
        assert!(
            arc_path(Point::ZERO, f64::NAN, 0.0, 0.0, 1.0, 0.0)
                .elements()
                .is_empty(),
            "non-finite radius"
        );
    }

    #[test]
    fn visible_segment_is_a_single_trimmed_sub_path() {
        let center = Point::new(50.0, 50.0);
        let path = arc_path(center, 40.0, 0.0, 0.0, PI / 2.0, 0.2);
        assert_eq!(move_count(&path), 1, "expected exactly one sub-path");

        let segs: std::vec::Vec<PathSeg> = path.segments().collect();
        let first = segs.first().expect("at least one segment").eval(0.0);
        let last = segs.last().expect("at least one segment").eval(1.0);

        let start = center + Vec2::from_angle(0.1) * 40.0;
        let end = center + Vec2::from_angle(PI / 2.0 - 0.1) * 40.0;
        assert!(first.distance(start) < 1e-6, "start {first:?} != {start:?}");
        assert!(last.distance(end) < 1e-3, "end {last:?} != {end:?}");
    }

    #[test]
    fn oversized_share_is_clamped_to_one_turn() {
        let path = arc_path(Point::ZERO, 10.0, 0.0, 0.0, 3.0 * TAU, 0.0);
        assert_eq!(move_count(&path), 1, "expected exactly one sub-path");
        let bbox = path.bounding_box();
        assert!((bbox.width() - 20.0).abs() < 0.5, "bbox {bbox:?}");
    }

    #[test]
    fn insets_accumulate() {
        let base = RingArc::new(Point::new(5.0, 5.0), 100.0, 0.0, 1.0, 0.1);
        let twice = base.inset(3.0).inset(4.5);
        let once = base.inset(7.5);
        assert_eq!(twice.radius(), once.radius());
        assert_eq!(twice, once);
        assert_eq!(twice.radius(), 92.5);
    }

    #[test]
    fn inset_shrinks_drawn_radius() {
        let center = Point::new(0.0, 0.0);
        let path = arc_path(center, 30.0, 10.0, 0.0, PI, 0.0);
        let first = path.segments().next().expect("a segment").eval(0.0);
        assert!((first.distance(center) - 20.0).abs() < 1e-9, "got {first:?}");
    }
}
