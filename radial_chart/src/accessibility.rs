// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-segment accessibility descriptions.

extern crate alloc;

use alloc::string::String;

use crate::data::{ChartMetadata, DataPoint};
use crate::format::ValueFormatter;

/// What assistive technology announces for one segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentAccessibility {
    /// The chart title.
    pub label: String,
    /// The point's formatted value.
    pub value: String,
    /// The point's description, or empty.
    pub hint: String,
}

impl SegmentAccessibility {
    /// Describes `point` using the chart's metadata and formatter.
    pub fn describe(
        point: &DataPoint,
        metadata: &ChartMetadata,
        formatter: &dyn ValueFormatter,
    ) -> Self {
        Self {
            label: metadata.title.clone(),
            value: formatter.format(point.value, &metadata.value_specifier),
            hint: point.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;
    use crate::data::PointId;
    use crate::format::DecimalFormatter;

    #[test]
    fn describes_title_value_and_description() {
        let point = DataPoint::new(PointId(1), 450.0, css::TOMATO, 0.0, 1.0)
            .with_description("Rent");
        let metadata = ChartMetadata::new("Spending").with_value_specifier("$.0");
        let a11y = SegmentAccessibility::describe(&point, &metadata, &DecimalFormatter);
        assert_eq!(a11y.label, "Spending");
        assert_eq!(a11y.value, "$450");
        assert_eq!(a11y.hint, "Rent");
    }

    #[test]
    fn missing_text_is_empty() {
        let point = DataPoint::new(PointId(2), 1.0, css::GOLD, 0.0, 1.0);
        let metadata = ChartMetadata::default();
        let a11y = SegmentAccessibility::describe(&point, &metadata, &DecimalFormatter);
        assert_eq!(a11y.label, "");
        assert_eq!(a11y.hint, "");
    }
}
