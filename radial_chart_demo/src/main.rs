// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted radial chart demo.
//!
//! Drives a [`RadialChart`] through appearance, taps and resizes, and writes the resulting
//! frames to `radial_chart_demo.html`. Set `RUST_LOG=radial_chart=debug` to trace state
//! transitions.

mod html;
mod svg;

use std::time::Duration;

use kurbo::{Rect, Size, Vec2};
use peniko::color::palette::css;
use radial_chart::{
    AnimationStyle, CenterRenderer, ChartMetadata, ChartStyle, Curve, DataPoint, DataSource,
    DecimalFormatter, PieData, PieSlice, PointId, RadialChart, ValueFormatter,
};
use tracing_subscriber::EnvFilter;

/// Two lines of text shown inside the ring.
#[derive(Clone, Debug, Default)]
pub(crate) struct CenterText {
    pub(crate) headline: String,
    pub(crate) detail: String,
}

/// Shows the selected point's value, or the chart total when nothing is selected.
#[derive(Debug)]
struct SummaryCenter {
    title: String,
    total: f64,
}

impl CenterRenderer for SummaryCenter {
    type Output = CenterText;

    fn render(&self, selected: Option<&DataPoint>, _bounds: Rect) -> CenterText {
        match selected {
            Some(point) => CenterText {
                headline: DecimalFormatter.format(point.value, "$.0"),
                detail: point.description.clone().unwrap_or_default(),
            },
            None => CenterText {
                headline: DecimalFormatter.format(self.total, "$.0"),
                detail: self.title.clone(),
            },
        }
    }
}

type DemoChart = RadialChart<PieData, SummaryCenter>;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sections = vec![reveal_demo(), selection_demo(), gap_demo(), exit_demo()];

    let html = html::render_report("Radial chart demo", &sections);
    std::fs::write("radial_chart_demo.html", html)?;
    tracing::info!(sections = sections.len(), "wrote radial_chart_demo.html");
    Ok(())
}

fn budget(style: ChartStyle) -> PieData {
    PieData::from_slices(
        ChartMetadata::new("Monthly budget").with_value_specifier("$.0"),
        [
            PieSlice::new(1, 800.0, css::CORNFLOWER_BLUE).with_description("Rent"),
            PieSlice::new(2, 450.0, css::TOMATO).with_description("Food"),
            PieSlice::new(3, 250.0, css::GOLD).with_description("Transport"),
        ],
    )
    .with_style(style)
}

fn demo_chart(style: ChartStyle, size: f64) -> DemoChart {
    let data = budget(style);
    let center = SummaryCenter {
        title: data.metadata().title.clone(),
        total: data.total(),
    };
    RadialChart::new(data, center).with_size(Size::new(size, size))
}

fn snapshot(chart: &DemoChart, now: Duration, caption: impl Into<String>) -> html::Snapshot {
    html::Snapshot {
        caption: caption.into(),
        svg: svg::frame_to_svg(&chart.frame(now)),
    }
}

fn reveal_demo() -> html::HtmlSection {
    let mut chart = demo_chart(ChartStyle::new(42.0), 250.0);
    let mut snapshots = vec![snapshot(&chart, Duration::ZERO, "before appear")];

    chart.appear(Duration::ZERO);
    for t in [60, 150, 250, 400, 1_500] {
        let now = Duration::from_millis(t);
        snapshots.push(snapshot(&chart, now, format!("t = {t} ms")));
    }

    html::HtmlSection {
        title: "Staggered reveal",
        description: "Segments spring in one after another, each delayed by its index.",
        snapshots,
    }
}

fn selection_demo() -> html::HtmlSection {
    let mut chart = demo_chart(ChartStyle::new(42.0), 250.0);
    chart.appear(Duration::ZERO);
    let mut now = Duration::from_secs(2);
    let mut snapshots = vec![snapshot(&chart, now, "nothing selected")];

    let layout = chart.layout();
    let food = chart
        .source()
        .points()
        .iter()
        .find(|p| p.id == PointId(2))
        .map(|p| p.start_angle + p.amount / 2.0)
        .unwrap_or_default();
    let tap = layout.center + Vec2::from_angle(food) * layout.stroke_radius();

    let target = chart.tap(tap, now);
    tracing::info!(?target, "tap on the ring");
    snapshots.push(snapshot(&chart, now + Duration::from_millis(100), "easing in"));
    now += Duration::from_millis(500);
    snapshots.push(snapshot(&chart, now, "Food selected"));

    chart.tap_segment(PointId(1), now);
    now += Duration::from_millis(500);
    snapshots.push(snapshot(&chart, now, "Rent selected"));

    let target = chart.tap(layout.center, now);
    tracing::info!(?target, "tap in the middle");
    now += Duration::from_millis(500);
    snapshots.push(snapshot(&chart, now, "background tap clears"));

    html::HtmlSection {
        title: "Selection",
        description: "Tapping a segment raises and scales it; tapping it again or the background clears it.",
        snapshots,
    }
}

fn gap_demo() -> html::HtmlSection {
    let style = ChartStyle::new(24.0).without_animation();
    let mut chart = demo_chart(style, 250.0);
    let mut snapshots = Vec::new();
    for size in [250.0, 160.0, 90.0] {
        chart.resize(Size::new(size, size));
        snapshots.push(snapshot(
            &chart,
            Duration::ZERO,
            format!("{size} px, gap {:.3} rad", chart.angular_gap()),
        ));
    }

    let wide = budget(style.with_stroke_width(200.0));
    chart.replace_source(wide, Duration::ZERO);
    chart.resize(Size::new(250.0, 250.0));
    snapshots.push(snapshot(&chart, Duration::ZERO, "stroke 200: thin segments collapse"));

    html::HtmlSection {
        title: "Gap scaling",
        description: "The angular gap scales with stroke width over radius, so it looks constant across sizes.",
        snapshots,
    }
}

fn exit_demo() -> html::HtmlSection {
    let style = ChartStyle::new(30.0).with_animation(AnimationStyle {
        reveal: Curve::EaseInOut {
            duration: Duration::from_millis(300),
        },
        ..AnimationStyle::default()
    });
    let mut chart = demo_chart(style, 200.0);
    chart.appear(Duration::ZERO);
    let start = Duration::from_secs(1);
    chart.disappear(start);

    let snapshots = [0, 150, 300, 700]
        .into_iter()
        .map(|t| {
            let now = start + Duration::from_millis(t);
            snapshot(&chart, now, format!("exit + {t} ms"))
        })
        .collect();

    html::HtmlSection {
        title: "Exit",
        description: "Disappearing runs the reveal in reverse with the same stagger.",
        snapshots,
    }
}
