// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for the demo.

use crate::svg::escape_xml;

/// One captioned frame.
#[derive(Debug)]
pub(crate) struct Snapshot {
    pub(crate) caption: String,
    pub(crate) svg: String,
}

/// A titled row of snapshots.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) snapshots: Vec<Snapshot>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(
        "<style>\
         body{font-family:sans-serif;margin:24px;color:#222}\
         .row{display:flex;flex-wrap:wrap;gap:16px}\
         figure{margin:0}\
         figcaption{font-size:12px;color:#555;text-align:center}\
         </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));

    for section in sections {
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_xml(section.description)));
        out.push_str("<div class=\"row\">\n");
        for snapshot in &section.snapshots {
            out.push_str("<figure>\n");
            out.push_str(&snapshot.svg);
            out.push_str(&format!(
                "<figcaption>{}</figcaption>\n",
                escape_xml(&snapshot.caption)
            ));
            out.push_str("</figure>\n");
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
