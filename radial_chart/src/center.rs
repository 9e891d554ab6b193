// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center content rendering.
//!
//! The area inside the ring shows caller-defined content, typically a summary of the selected
//! point. The chart only decides where that content goes and when it is recomputed.

use kurbo::Rect;

use crate::data::DataPoint;

/// Produces the content drawn inside the ring.
pub trait CenterRenderer {
    /// Content type handed back to the host.
    type Output;

    /// Renders content for the current selection, sized to fit `bounds`.
    fn render(&self, selected: Option<&DataPoint>, bounds: Rect) -> Self::Output;
}

/// A [`CenterRenderer`] backed by a closure; see [`center_fn`].
#[derive(Clone, Copy, Debug)]
pub struct CenterFn<F>(F);

/// Wraps a closure as a [`CenterRenderer`].
pub fn center_fn<F, T>(f: F) -> CenterFn<F>
where
    F: Fn(Option<&DataPoint>, Rect) -> T,
{
    CenterFn(f)
}

impl<F, T> CenterRenderer for CenterFn<F>
where
    F: Fn(Option<&DataPoint>, Rect) -> T,
{
    type Output = T;

    fn render(&self, selected: Option<&DataPoint>, bounds: Rect) -> T {
        (self.0)(selected, bounds)
    }
}

/// Renders nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCenter;

impl CenterRenderer for NoCenter {
    type Output = ();

    fn render(&self, _selected: Option<&DataPoint>, _bounds: Rect) {}
}
