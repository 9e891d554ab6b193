// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial (pie/doughnut) chart building blocks.
//!
//! This crate turns an ordered set of weighted categories into ring segments:
//! - **Geometry**: [`arc_path`] / [`RingArc`] build gap-trimmed, insettable arcs, and
//!   [`angular_gap`] keeps the gap visually constant across chart sizes.
//! - **Interaction**: [`RadialChart`] tracks the selected segment, routes taps, and emphasizes
//!   the selection.
//! - **Animation**: segments reveal with a staggered spring ([`RevealScheduler`]) and selection
//!   emphasis eases in and out ([`Tween`]).
//!
//! Output is a [`ChartFrame`]: `kurbo` paths with strokes, transforms and opacities, plus
//! caller-rendered center content. Painting and text shaping are out of scope.
//!
//! The crate never reads a clock; every time-dependent call takes the current time as a
//! [`core::time::Duration`] since an epoch of the caller's choosing.

#![no_std]

extern crate alloc;

mod accessibility;
mod animation;
mod arc;
mod center;
mod chart;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod layout;
mod reveal;
mod selection;
mod style;
mod z_order;

pub use accessibility::SegmentAccessibility;
pub use animation::{Curve, Tween};
pub use arc::{DEFAULT_TOLERANCE, RingArc, arc_path};
pub use center::{CenterFn, CenterRenderer, NoCenter, center_fn};
pub use chart::{RadialChart, TapTarget};
pub use data::{ChartMetadata, DataPoint, DataSource, PieData, PieSlice, PointId};
pub use format::{DecimalFormatter, ValueFormatter};
pub use frame::{CenterFrame, ChartFrame, SegmentFrame};
pub use layout::{DEFAULT_GAP_SCALE, RingLayout, angular_gap};
pub use reveal::RevealScheduler;
pub use selection::{Selection, SelectionChange};
pub use style::{
    AnimationStyle, ChartStyle, DEFAULT_ENTER_FLOOR, DEFAULT_SELECTED_SCALE, DEFAULT_STAGGER,
};
pub use z_order::*;
