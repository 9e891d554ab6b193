// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable chart output.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use peniko::Brush;
use smallvec::SmallVec;

use crate::accessibility::SegmentAccessibility;
use crate::arc::RingArc;
use crate::data::PointId;
use crate::layout::RingLayout;

/// One ring segment, ready to stroke.
#[derive(Clone, Debug)]
pub struct SegmentFrame {
    /// Point identity.
    pub id: PointId,
    /// Position in the data source.
    pub index: usize,
    /// Geometry the path was built from (stroke inset included).
    pub arc: RingArc,
    /// Arc path; empty if the segment collapsed.
    pub path: BezPath,
    /// Stroke style (round caps).
    pub stroke: Stroke,
    /// Stroke paint.
    pub brush: Brush,
    /// Combined reveal and emphasis scale.
    pub scale: f64,
    /// Scale about the ring center, to be applied to `path`.
    pub transform: Affine,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
    /// `true` for the selected segment.
    pub selected: bool,
    /// Accessibility description.
    pub accessibility: SegmentAccessibility,
}

impl SegmentFrame {
    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }
}

/// Content placed inside the ring.
#[derive(Clone, Debug)]
pub struct CenterFrame<T> {
    /// Bounds the content must fit in.
    pub bounds: Rect,
    /// Rendering order hint.
    pub z_index: i32,
    /// Caller-rendered content.
    pub content: T,
}

/// A full chart snapshot.
#[derive(Clone, Debug)]
pub struct ChartFrame<T> {
    /// Layout shared by every segment.
    pub layout: RingLayout,
    /// Area whose taps clear the selection when no segment absorbs them.
    pub background: Rect,
    /// Segments in data order.
    pub segments: SmallVec<[SegmentFrame; 8]>,
    /// Center content.
    pub center: CenterFrame<T>,
}

impl<T> ChartFrame<T> {
    /// Segments sorted by `(z_index, index)`, back to front.
    pub fn paint_order(&self) -> Vec<&SegmentFrame> {
        let mut out: Vec<_> = self.segments.iter().collect();
        out.sort_by_key(|s| (s.z_index, s.index));
        out
    }

    /// The segment drawn at `point`, if any. The top-most segment wins.
    pub fn hit(&self, point: Point) -> Option<&SegmentFrame> {
        let id = crate::hit_test::top_most(&self.segments, point)?;
        self.segments.iter().find(|s| s.id == id)
    }
}
