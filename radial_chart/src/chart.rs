// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radial chart controller.
//!
//! [`RadialChart`] owns selection and animation state. Hosts forward discrete events (taps,
//! appearance, resize, data changes) to it and then ask for a [`ChartFrame`], which is a pure
//! function of the current state and the supplied time. Every event handler reports whether
//! the host should redraw.

use core::time::Duration;

use hashbrown::HashMap;
use kurbo::{Affine, Point, Size, Stroke};
use peniko::Brush;
use smallvec::SmallVec;

use crate::accessibility::SegmentAccessibility;
use crate::animation::Tween;
use crate::arc::RingArc;
use crate::center::CenterRenderer;
use crate::data::{DataPoint, DataSource, PointId};
use crate::frame::{CenterFrame, ChartFrame, SegmentFrame};
use crate::layout::RingLayout;
use crate::reveal::RevealScheduler;
use crate::selection::{Selection, SelectionChange};
use crate::style::ChartStyle;
use crate::z_order;

/// What a tap landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapTarget {
    /// A segment absorbed the tap.
    Segment(PointId),
    /// No segment was hit; the selection was cleared.
    Background,
    /// The point lies outside the chart area; nothing changed.
    Outside,
}

/// Interactive radial chart state.
#[derive(Debug)]
pub struct RadialChart<S, C> {
    source: S,
    center: C,
    size: Size,
    visible: bool,
    selection: Selection,
    reveal: RevealScheduler,
    emphasis: HashMap<PointId, Tween>,
}

impl<S: DataSource, C: CenterRenderer> RadialChart<S, C> {
    /// Creates a chart with a zero size, not yet on screen.
    ///
    /// If the source's style disables animation, segments are fully visible right away.
    pub fn new(source: S, center: C) -> Self {
        let reveal = scheduler_for(source.style());
        Self {
            source,
            center,
            size: Size::ZERO,
            visible: false,
            selection: Selection::default(),
            reveal,
            emphasis: HashMap::new(),
        }
    }

    /// Sets the initial size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// The data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The center content renderer.
    pub fn center(&self) -> &C {
        &self.center
    }

    /// Current chart size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current selection, unresolved.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected point, if it still exists in the source.
    pub fn selected(&self) -> Option<&DataPoint> {
        self.selection.resolve(self.source.points())
    }

    /// Returns `true` once the reveal has been triggered (always `true` without animation).
    pub fn has_entered(&self) -> bool {
        self.reveal.has_entered()
    }

    /// Layout for the current size and style. Recomputed on every call.
    pub fn layout(&self) -> RingLayout {
        let style = self.source.style();
        RingLayout::new(self.size, style.stroke_width, style.gap_scale)
    }

    /// Angular gap applied to every segment at the current size.
    pub fn angular_gap(&self) -> f64 {
        self.layout().gap
    }

    /// Changes the chart size.
    pub fn resize(&mut self, size: Size) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }

    /// The chart came on screen: starts the staggered reveal.
    pub fn appear(&mut self, now: Duration) -> bool {
        self.visible = true;
        let count = self.source.points().len();
        let started = self.reveal.set_entered(true, now, count);
        if started {
            tracing::debug!(segments = count, "radial chart entering");
        }
        started
    }

    /// The chart left the screen: starts the staggered exit.
    pub fn disappear(&mut self, now: Duration) -> bool {
        self.visible = false;
        let count = self.source.points().len();
        let started = self.reveal.set_entered(false, now, count);
        if started {
            tracing::debug!(segments = count, "radial chart exiting");
        }
        started
    }

    /// A tap on the segment for `id`: selects it, or clears it if already selected.
    ///
    /// Ids that are not in the source are ignored.
    pub fn tap_segment(&mut self, id: PointId, now: Duration) -> bool {
        if !self.source.points().iter().any(|p| p.id == id) {
            return false;
        }
        let change = self.selection.toggle(id);
        self.apply_selection_change(change, now)
    }

    /// A tap no segment absorbed: clears the selection.
    pub fn tap_background(&mut self, now: Duration) -> bool {
        let change = self.selection.clear();
        self.apply_selection_change(change, now)
    }

    /// Routes a tap at `point` (chart coordinates) to the top-most segment under it, or to the
    /// background.
    pub fn tap(&mut self, point: Point, now: Duration) -> TapTarget {
        let layout = self.layout();
        let segments = self.segments(&layout, now);
        match crate::hit_test::top_most(&segments, point) {
            Some(id) => {
                self.tap_segment(id, now);
                TapTarget::Segment(id)
            }
            // The selected segment may be scaled past the bounds, so hits win over this check.
            None if !layout.bounds.contains(point) => TapTarget::Outside,
            None => {
                self.tap_background(now);
                TapTarget::Background
            }
        }
    }

    /// The source's data set changed identity: drops the selection and emphasis.
    pub fn data_changed(&mut self) -> bool {
        let change = self.selection.clear();
        self.emphasis.clear();
        self.reveal.resize(self.source.points().len());
        if change.is_change() {
            tracing::debug!(previous = ?change.previous, "selection reset by data change");
        }
        true
    }

    /// Swaps in a new source and treats it as a data change. Returns the old source.
    pub fn replace_source(&mut self, source: S, now: Duration) -> S {
        let old = core::mem::replace(&mut self.source, source);
        // Animation was switched on or off by the new style.
        if self.source.style().animation.enabled == self.reveal.is_pinned() {
            self.reveal = scheduler_for(self.source.style());
            if self.visible {
                self.reveal.set_entered(true, now, self.source.points().len());
            }
        }
        self.data_changed();
        old
    }

    /// Returns `true` while any segment is still moving.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.reveal.is_settled(now) || self.emphasis.values().any(|t| !t.is_settled(now))
    }

    /// Renders the chart at `now`.
    pub fn frame(&self, now: Duration) -> ChartFrame<C::Output> {
        let layout = self.layout();
        let segments = self.segments(&layout, now);
        let bounds = layout.center_bounds();
        let content = self.center.render(self.selected(), bounds);
        ChartFrame {
            layout,
            background: layout.bounds,
            segments,
            center: CenterFrame {
                bounds,
                z_index: z_order::CENTER_CONTENT,
                content,
            },
        }
    }

    fn segments(&self, layout: &RingLayout, now: Duration) -> SmallVec<[SegmentFrame; 8]> {
        let style: &ChartStyle = self.source.style();
        let metadata = self.source.metadata();
        let formatter = self.source.formatter();
        let selected = self.selected().map(|p| p.id);
        let floor = style.animation.enter_floor.clamp(0.0, 1.0);
        let stroke = Stroke::new(style.stroke_width).with_caps(kurbo::Cap::Round);

        self.source
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let arc = RingArc::new(
                    layout.center,
                    layout.radius,
                    point.start_angle,
                    point.amount,
                    layout.gap,
                )
                .inset(style.stroke_width * 0.5);
                let reveal = 1.0 - (1.0 - floor) * (1.0 - self.reveal.progress(index, now));
                let emphasis = self.emphasis.get(&point.id).map_or(1.0, |t| t.value(now));
                let scale = reveal * emphasis;
                let is_selected = selected == Some(point.id);
                SegmentFrame {
                    id: point.id,
                    index,
                    arc,
                    path: arc.path(style.tolerance),
                    stroke: stroke.clone(),
                    brush: Brush::Solid(point.color),
                    scale,
                    transform: scale_about(scale, layout.center),
                    opacity: reveal.clamp(0.0, 1.0),
                    z_index: if is_selected {
                        z_order::SELECTED_SEGMENT
                    } else {
                        z_order::SEGMENTS
                    },
                    selected: is_selected,
                    accessibility: SegmentAccessibility::describe(point, metadata, formatter),
                }
            })
            .collect()
    }

    fn apply_selection_change(&mut self, change: SelectionChange, now: Duration) -> bool {
        if !change.is_change() {
            return false;
        }
        tracing::debug!(previous = ?change.previous, current = ?change.current, "selection changed");
        let style = *self.source.style();
        if let Some(previous) = change.previous {
            self.set_emphasis(previous, 1.0, &style, now);
        }
        if let Some(current) = change.current {
            self.set_emphasis(current, style.selected_scale, &style, now);
        }
        true
    }

    fn set_emphasis(&mut self, id: PointId, target: f64, style: &ChartStyle, now: Duration) {
        let tween = self.emphasis.entry(id).or_insert_with(|| Tween::settled(1.0));
        if style.animation.enabled {
            tween.retarget(target, now, Duration::ZERO, style.animation.selection);
        } else {
            tween.snap(target);
        }
    }
}

fn scheduler_for(style: &ChartStyle) -> RevealScheduler {
    if style.animation.enabled {
        RevealScheduler::new(style.animation.reveal, style.animation.stagger)
    } else {
        RevealScheduler::pinned()
    }
}

fn scale_about(scale: f64, center: Point) -> Affine {
    let c = center.to_vec2();
    Affine::translate(c) * Affine::scale(scale) * Affine::translate(-c)
}
