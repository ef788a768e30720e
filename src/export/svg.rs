// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! SVG rendering of a frame.
//!
//! Used directly for File > Export SVG, and as the intermediate format for
//! raster export.

use super::ExportError;
use crate::model::{Diagram, TextStyle};
use crate::render::{Frame, NodeVisual};
use crate::settings;
use crate::theme::{self, ThemeMode};
use kurbo::{Affine, Point, Rect, Size};
use std::path::Path;
use svg::Document;
use svg::node::element as svg_element;

const FONT_FAMILY: &str = "sans-serif";

/// Render a frame into an SVG document of `size`, mapping canvas
/// coordinates through `transform`
pub fn render_frame(frame: &Frame<'_>, transform: Affine, size: Size, font_size: f32) -> Document {
    let background = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size.width)
        .set("height", size.height)
        .set("fill", frame.background.to_hex());

    let [a, b, c, d, e, f] = transform.as_coeffs();
    let mut content =
        svg_element::Group::new().set("transform", format!("matrix({a} {b} {c} {d} {e} {f})"));

    let line_stroke = frame.line_color.to_hex();
    for line in frame.lines {
        content = content.add(line_element(line.start, line.end, &line_stroke));
    }
    for visual in &frame.nodes {
        content = content.add(node_group(visual, font_size));
    }
    if let Some((start, end)) = frame.preview {
        content = content.add(line_element(start, end, &theme_hex(theme::canvas::LINE_PREVIEW)));
    }

    Document::new()
        .set("viewBox", format!("0 0 {} {}", size.width, size.height))
        .set("width", size.width)
        .set("height", size.height)
        .add(background)
        .add(content)
}

/// Render the whole diagram, framed by its bounds plus a margin
pub fn diagram_document(diagram: &Diagram, theme: ThemeMode, font_size: f32) -> Document {
    let margin = settings::export::SVG_MARGIN;
    let bounds = diagram
        .bounds()
        .unwrap_or(Rect::ZERO)
        .inflate(margin, margin);
    let transform = Affine::translate((-bounds.x0, -bounds.y0));
    render_frame(
        &Frame::document(diagram, theme),
        transform,
        bounds.size(),
        font_size,
    )
}

/// Write the diagram as an SVG file
pub fn export(path: &Path, diagram: &Diagram, theme: ThemeMode, font_size: f32) -> Result<(), ExportError> {
    let document = diagram_document(diagram, theme, font_size);
    svg::save(path, &document)?;
    tracing::info!("Exported SVG to {}", path.display());
    Ok(())
}

fn line_element(start: Point, end: Point, stroke: &str) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", start.x)
        .set("y1", start.y)
        .set("x2", end.x)
        .set("y2", end.y)
        .set("stroke", stroke)
        .set("stroke-width", theme::size::LINE_WIDTH)
}

fn node_group(visual: &NodeVisual<'_>, font_size: f32) -> svg_element::Group {
    let node = visual.node;
    let circle = svg_element::Circle::new()
        .set("cx", node.center.x)
        .set("cy", node.center.y)
        .set("r", node.radius)
        .set("fill", node.fill.to_hex())
        .set("stroke", node.outline.to_hex())
        .set("stroke-width", theme::size::NODE_OUTLINE_WIDTH);

    let mut label = svg_element::Text::new(node.label.clone())
        .set("x", node.center.x)
        .set("y", node.center.y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", font_size)
        .set("fill", visual.label_color.to_hex());
    label = match node.style {
        TextStyle::Plain => label,
        TextStyle::Bold => label.set("font-weight", "bold"),
        TextStyle::Italic => label.set("font-style", "italic"),
        TextStyle::Underline => label.set("text-decoration", "underline"),
    };

    let mut group = svg_element::Group::new().add(circle).add(label);
    if visual.selected {
        let ring = svg_element::Circle::new()
            .set("cx", node.center.x)
            .set("cy", node.center.y)
            .set("r", node.radius + theme::size::SELECTION_RING_WIDTH * 2.0)
            .set("fill", "none")
            .set("stroke", theme_hex(theme::canvas::SELECTION_RING))
            .set("stroke-width", theme::size::SELECTION_RING_WIDTH);
        group = group.add(ring);
    }
    group
}

fn theme_hex(color: peniko::Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorSpec;

    fn sample() -> Diagram {
        let mut d = Diagram::new();
        let fill = ColorSpec::parse("lightblue").unwrap();
        let outline = ColorSpec::parse("black").unwrap();
        let id = d.create_node(Point::new(100.0, 100.0), fill.clone(), outline.clone(), "Plan");
        d.set_text_style(id, TextStyle::Bold);
        d.create_node(Point::new(300.0, 150.0), fill, outline, "Ship");
        d.add_line(Point::new(100.0, 100.0), Point::new(300.0, 150.0));
        d
    }

    #[test]
    fn document_contains_nodes_lines_and_labels() {
        let svg = diagram_document(&sample(), ThemeMode::Light, 12.0).to_string();
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(svg.contains("Plan"));
        assert!(svg.contains("Ship"));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("#add8e6"));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn document_is_framed_by_bounds_and_margin() {
        // Bounds are (70, 70)-(330, 180); the margin adds 40 on each side
        let svg = diagram_document(&sample(), ThemeMode::Dark, 12.0).to_string();
        assert!(svg.contains("viewBox=\"0 0 340 190\""));
        assert!(svg.contains("stroke=\"#00ff00\""));
        assert!(svg.contains("matrix(1 0 0 1 -30 -30)"));
    }

    #[test]
    fn empty_diagram_still_renders() {
        let svg = diagram_document(&Diagram::new(), ThemeMode::Dark, 12.0).to_string();
        assert!(svg.contains("<rect"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        export(&path, &sample(), ThemeMode::Dark, 12.0).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
    }
}
