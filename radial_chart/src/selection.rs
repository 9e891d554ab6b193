// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state.

use crate::data::{DataPoint, PointId};

/// A change in the selected point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// Previously selected point.
    pub previous: Option<PointId>,
    /// Newly selected point.
    pub current: Option<PointId>,
}

/// The selected point, if any.
///
/// The selection stores an id, not a reference: a stale id that no longer matches any point
/// resolves to "no selection".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<PointId>,
}

impl Selection {
    /// The selected id, unresolved.
    pub fn id(&self) -> Option<PointId> {
        self.selected
    }

    /// Looks up the selected point among `points`.
    pub fn resolve<'a>(&self, points: &'a [DataPoint]) -> Option<&'a DataPoint> {
        let id = self.selected?;
        points.iter().find(|p| p.id == id)
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: PointId) -> bool {
        self.selected == Some(id)
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    ///
    /// Moving from one point to another is a single change; it never passes through "none".
    pub fn toggle(&mut self, id: PointId) -> SelectionChange {
        let next = if self.is_selected(id) { None } else { Some(id) };
        self.set(next)
    }

    /// Clears the selection.
    pub fn clear(&mut self) -> SelectionChange {
        self.set(None)
    }

    fn set(&mut self, next: Option<PointId>) -> SelectionChange {
        let previous = core::mem::replace(&mut self.selected, next);
        SelectionChange {
            previous,
            current: next,
        }
    }
}

impl SelectionChange {
    /// Returns `true` if the selected id changed.
    pub fn is_change(&self) -> bool {
        self.previous != self.current
    }
}
