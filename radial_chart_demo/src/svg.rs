// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a chart frame.

use std::borrow::Cow;

use kurbo::{Affine, Rect};
use peniko::Brush;
use radial_chart::ChartFrame;

use crate::CenterText;

pub(crate) fn frame_to_svg(frame: &ChartFrame<CenterText>) -> String {
    // Leave room for the selected segment's emphasis, which grows past the chart bounds.
    let view_box = frame.background.inflate(20.0, 20.0);
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');

    write_background(&mut out, frame.background);

    for segment in frame.paint_order() {
        if segment.is_empty() {
            continue;
        }
        let d = segment.path.to_svg();
        out.push_str(&format!(r#"<path d="{d}" fill="none""#));
        write_stroke_paint(&mut out, &segment.brush);
        out.push_str(&format!(
            r#" stroke-width="{}" stroke-linecap="round" opacity="{:.3}""#,
            segment.stroke.width, segment.opacity
        ));
        write_transform_attr(&mut out, segment.transform);
        out.push('>');
        out.push_str(&format!(
            "<title>{}: {} {}</title>",
            escape_xml(&segment.accessibility.label),
            escape_xml(&segment.accessibility.hint),
            escape_xml(&segment.accessibility.value),
        ));
        out.push_str("</path>\n");
    }

    write_center(&mut out, frame.center.bounds, &frame.center.content);

    out.push_str("</svg>\n");
    out
}

fn write_background(out: &mut String, rect: Rect) {
    out.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#eeeeee"/>"##,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height(),
    ));
    out.push('\n');
}

fn write_center(out: &mut String, bounds: Rect, content: &CenterText) {
    if bounds.area() <= 0.0 {
        return;
    }
    let center = bounds.center();
    let size = (bounds.height() / 6.0).clamp(8.0, 28.0);
    out.push_str(&format!(
        r##"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="#222222">{}</text>"##,
        center.x,
        center.y - size * 0.6,
        size,
        escape_xml(&content.headline),
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="#666666">{}</text>"##,
        center.x,
        center.y + size * 0.6,
        size * 0.6,
        escape_xml(&content.detail),
    ));
    out.push('\n');
}

fn write_transform_attr(out: &mut String, transform: Affine) {
    if transform == Affine::IDENTITY {
        return;
    }
    let [a, b, c, d, e, f] = transform.as_coeffs();
    out.push_str(&format!(
        r#" transform="matrix({a} {b} {c} {d} {e} {f})""#
    ));
}

/// Segment strokes only carry solid colors; anything else is left unpainted.
fn write_stroke_paint(out: &mut String, brush: &Brush) {
    let Brush::Solid(color) = brush else {
        out.push_str(r#" stroke="none""#);
        return;
    };
    let [r, g, b, alpha] = color.to_rgba8().to_u8_array();
    out.push_str(&format!(r##" stroke="#{r:02x}{g:02x}{b:02x}""##));
    if alpha < u8::MAX {
        let opacity = f64::from(alpha) / f64::from(u8::MAX);
        out.push_str(&format!(r#" stroke-opacity="{opacity}""#));
    }
}

/// Escapes text for use in element content and quoted attributes.
pub(crate) fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        let entity = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&apos;",
            _ => {
                escaped.push(ch);
                continue;
            }
        };
        escaped.push_str(entity);
    }
    Cow::Owned(escaped)
}
