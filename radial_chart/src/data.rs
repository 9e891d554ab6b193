// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data contract a chart consumes.
//!
//! Points arrive with precomputed angles. [`PieData`] is a ready-made [`DataSource`] that derives
//! contiguous angles from raw values; any other source only has to implement the trait.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};
use core::fmt;

use peniko::Color;

use crate::format::{DecimalFormatter, ValueFormatter};
use crate::style::ChartStyle;

/// Stable identity of a data point.
///
/// Selection compares points by this id, never by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

/// One weighted category.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Stable identity.
    pub id: PointId,
    /// Non-negative data value.
    pub value: f64,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Segment color.
    pub color: Color,
    /// Start angle in radians.
    pub start_angle: f64,
    /// Angular share in radians.
    pub amount: f64,
}

impl DataPoint {
    /// Creates a point with no description.
    pub fn new(id: PointId, value: f64, color: Color, start_angle: f64, amount: f64) -> Self {
        Self {
            id,
            value,
            description: None,
            color,
            start_angle,
            amount,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// End angle, `start_angle + amount`.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.amount
    }
}

/// Chart-level text shared by every segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartMetadata {
    /// Chart title; used as every segment's accessibility label.
    pub title: String,
    /// Specifier handed to the [`ValueFormatter`].
    pub value_specifier: String,
}

impl ChartMetadata {
    /// Creates metadata with an empty value specifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value_specifier: String::new(),
        }
    }

    /// Sets the value specifier.
    pub fn with_value_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.value_specifier = specifier.into();
        self
    }
}

/// Everything a chart reads from its data model.
pub trait DataSource {
    /// Points in draw order.
    fn points(&self) -> &[DataPoint];
    /// Visual configuration.
    fn style(&self) -> &ChartStyle;
    /// Title and value specifier.
    fn metadata(&self) -> &ChartMetadata;
    /// Formatter for accessibility values.
    fn formatter(&self) -> &dyn ValueFormatter;
}

/// Raw input for one [`PieData`] slice.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Stable identity.
    pub id: PointId,
    /// Data value; negative and non-finite values count as zero.
    pub value: f64,
    /// Segment color.
    pub color: Color,
    /// Optional description.
    pub description: Option<String>,
}

impl PieSlice {
    /// Creates a slice with no description.
    pub fn new(id: u64, value: f64, color: Color) -> Self {
        Self {
            id: PointId(id),
            value,
            color,
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A [`DataSource`] backed by owned points.
pub struct PieData {
    points: Vec<DataPoint>,
    style: ChartStyle,
    metadata: ChartMetadata,
    formatter: Box<dyn ValueFormatter>,
}

impl fmt::Debug for PieData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieData")
            .field("points", &self.points)
            .field("style", &self.style)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl PieData {
    /// Angle of the first slice: 12 o'clock on a y-down canvas.
    pub const START_ANGLE: f64 = -FRAC_PI_2;

    /// Lays out `slices` as contiguous shares of a full turn.
    ///
    /// A zero total gives every slice a zero share.
    pub fn from_slices(
        metadata: ChartMetadata,
        slices: impl IntoIterator<Item = PieSlice>,
    ) -> Self {
        let slices: Vec<PieSlice> = slices.into_iter().collect();
        let total: f64 = slices.iter().map(|s| clean_value(s.value)).sum();
        let mut angle = Self::START_ANGLE;
        let points = slices
            .into_iter()
            .map(|slice| {
                let value = clean_value(slice.value);
                let amount = if total > 0.0 {
                    value / total * TAU
                } else {
                    0.0
                };
                let point = DataPoint {
                    id: slice.id,
                    value,
                    description: slice.description,
                    color: slice.color,
                    start_angle: angle,
                    amount,
                };
                angle += amount;
                point
            })
            .collect();
        Self::from_points(metadata, points)
    }

    /// Wraps points whose angles are already computed.
    pub fn from_points(metadata: ChartMetadata, points: Vec<DataPoint>) -> Self {
        Self {
            points,
            style: ChartStyle::default(),
            metadata,
            formatter: Box::new(DecimalFormatter),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the value formatter.
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Sum of all point values.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

impl DataSource for PieData {
    fn points(&self) -> &[DataPoint] {
        &self.points
    }

    fn style(&self) -> &ChartStyle {
        &self.style
    }

    fn metadata(&self) -> &ChartMetadata {
        &self.metadata
    }

    fn formatter(&self) -> &dyn ValueFormatter {
        &*self.formatter
    }
}

fn clean_value(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn slices_are_contiguous_and_cover_a_turn() {
        let data = PieData::from_slices(
            ChartMetadata::new("Budget"),
            [
                PieSlice::new(1, 800.0, css::CORNFLOWER_BLUE),
                PieSlice::new(2, 450.0, css::TOMATO),
                PieSlice::new(3, 250.0, css::GOLD),
            ],
        );
        let points = data.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].start_angle, PieData::START_ANGLE);
        for pair in points.windows(2) {
            assert!(
                (pair[1].start_angle - pair[0].end_angle()).abs() < 1e-12,
                "gap between {:?} and {:?}",
                pair[0].id,
                pair[1].id
            );
        }
        let turn: f64 = points.iter().map(|p| p.amount).sum();
        assert!((turn - TAU).abs() < 1e-12, "turn {turn}");
        assert!((points[2].amount - TAU / 6.0).abs() < 1e-12, "250 of 1500");
        assert_eq!(data.total(), 1500.0);
    }

    #[test]
    fn zero_total_gives_zero_shares() {
        let data = PieData::from_slices(
            ChartMetadata::default(),
            [
                PieSlice::new(1, 0.0, css::GOLD),
                PieSlice::new(2, -3.0, css::GOLD),
                PieSlice::new(3, f64::NAN, css::GOLD),
            ],
        );
        assert!(
            data.points().iter().all(|p| p.amount == 0.0 && p.value == 0.0),
            "all shares should be zero"
        );
    }
}
