// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart output.
//!
//! Renderers should sort by `(z_index, index)` for a deterministic tie-break.

/// Background hit area.
pub const BACKGROUND: i32 = -100;

/// Ring segments.
pub const SEGMENTS: i32 = 0;
/// The selected segment, raised so it overlaps its neighbours.
pub const SELECTED_SEGMENT: i32 = 10;

/// Content inside the ring.
pub const CENTER_CONTENT: i32 = 80;
