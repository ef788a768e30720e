// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Single-page PDF export.
//!
//! Writes a US Letter page with one filled and stroked circle per node and
//! its label centered above the node center, using the base-14 Helvetica
//! fonts so nothing has to be embedded. Canvas y grows downwards and PDF y
//! grows upwards; node y is flipped against `PAGE_FLIP_Y`.

use super::ExportError;
use crate::model::{Diagram, Node, TextStyle};
use crate::settings::pdf::{FONT_SIZE, LABEL_RISE, PAGE_FLIP_Y, PAGE_HEIGHT, PAGE_WIDTH};
use kurbo::{PathEl, Point, Shape};
use std::fmt::Write as _;
use std::path::Path;

/// Font resources, in object order after the content stream
const FONTS: [(&str, &str); 3] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
];

/// Write the diagram as a one-page PDF
pub fn export(path: &Path, diagram: &Diagram) -> Result<(), ExportError> {
    std::fs::write(path, render(diagram))?;
    tracing::info!(
        "Exported {} nodes to PDF {}",
        diagram.nodes().len(),
        path.display()
    );
    Ok(())
}

/// Render the diagram to PDF bytes
pub fn render(diagram: &Diagram) -> Vec<u8> {
    let content = page_content(diagram);

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 5 0 R /F2 6 0 R /F3 7 0 R >> >> /Contents 4 0 R >>",
            PAGE_WIDTH, PAGE_HEIGHT
        ),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
    ];
    for (_, base) in FONTS {
        objects.push(format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{base} /Encoding /WinAnsiEncoding >>"
        ));
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = writeln!(xref, "{offset:010} 00000 n ");
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    );
    out.extend_from_slice(xref.as_bytes());
    out
}

/// Page coordinates of a canvas point
fn to_page(p: Point) -> Point {
    Point::new(p.x, PAGE_FLIP_Y - p.y)
}

fn page_content(diagram: &Diagram) -> String {
    let mut ops = String::new();

    ops.push_str("0 0 0 RG 1 w\n");
    for line in diagram.lines() {
        let (a, b) = (to_page(line.start), to_page(line.end));
        let _ = writeln!(ops, "{:.2} {:.2} m {:.2} {:.2} l S", a.x, a.y, b.x, b.y);
    }

    for node in diagram.nodes() {
        push_node(&mut ops, node);
    }
    ops
}

fn push_node(ops: &mut String, node: &Node) {
    let center = to_page(node.center);
    let (r, g, b) = node.fill.rgb_f64();
    let _ = writeln!(ops, "{r:.3} {g:.3} {b:.3} rg");

    let circle = kurbo::Circle::new(center, node.radius);
    let mut last = center;
    for el in circle.path_elements(0.1) {
        let _ = match el {
            PathEl::MoveTo(p) => {
                last = p;
                writeln!(ops, "{:.2} {:.2} m", p.x, p.y)
            }
            PathEl::LineTo(p) => {
                last = p;
                writeln!(ops, "{:.2} {:.2} l", p.x, p.y)
            }
            PathEl::QuadTo(c, p) => {
                // PDF has no quadratic segments; raise to cubic
                let c1 = last + (c - last) * (2.0 / 3.0);
                let c2 = p + (c - p) * (2.0 / 3.0);
                last = p;
                writeln!(
                    ops,
                    "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                )
            }
            PathEl::CurveTo(c1, c2, p) => {
                last = p;
                writeln!(
                    ops,
                    "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                )
            }
            PathEl::ClosePath => writeln!(ops, "h"),
        };
    }
    ops.push_str("B\n");

    // Label, black as on paper
    let font = match node.style {
        TextStyle::Bold => "F2",
        TextStyle::Italic => "F3",
        TextStyle::Plain | TextStyle::Underline => "F1",
    };
    let width = text_width(&node.label, node.style, FONT_SIZE);
    let x = center.x - width / 2.0;
    let y = center.y + LABEL_RISE;
    let _ = writeln!(
        ops,
        "0 g BT /{font} {FONT_SIZE} Tf {x:.2} {y:.2} Td ({}) Tj ET",
        escape_text(&node.label)
    );
    if node.style == TextStyle::Underline {
        let under = y - 1.5;
        let _ = writeln!(
            ops,
            "0.6 w {:.2} {under:.2} m {:.2} {under:.2} l S 1 w",
            x,
            x + width
        );
    }
}

/// Helvetica advance widths (1/1000 em) for WinAnsi codes 32..=126, from
/// the Adobe core font metrics. Helvetica-Oblique shares these.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for WinAnsi codes 32..=126
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for Latin-1 letters outside the ASCII table
const FALLBACK_WIDTH: u16 = 556;

/// Advance of `text` in points, as the label font draws it
fn text_width(text: &str, style: TextStyle, size: f64) -> f64 {
    let widths = match style {
        TextStyle::Bold => &HELVETICA_BOLD_WIDTHS,
        TextStyle::Plain | TextStyle::Italic | TextStyle::Underline => &HELVETICA_WIDTHS,
    };
    let units: u32 = text
        .chars()
        .map(|c| {
            // Characters outside Latin-1 are written as '?'
            let c = if (c as u32) > 0xff { '?' } else { c };
            match c {
                ' '..='~' => u32::from(widths[c as usize - 32]),
                _ => u32::from(FALLBACK_WIDTH),
            }
        })
        .sum();
    f64::from(units) * size / 1000.0
}

/// Escape a label for a PDF string literal in WinAnsi encoding.
///
/// Characters outside Latin-1 are replaced with `?`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            '\u{a0}'..='\u{ff}' => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            _ => out.push('?'),
        }
    }
    out
}
