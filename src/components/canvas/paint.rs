// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for CanvasWidget

use super::CanvasWidget;
use crate::model::TextStyle;
use crate::render::{Frame, NodeVisual};
use crate::theme;
use kurbo::{Affine, Circle, Line, Point, Stroke};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};
use parley::{FontContext, FontFamily, FontStack, FontStyle, FontWeight, GenericFamily, LayoutContext};

impl CanvasWidget {
    /// Background, lines, nodes in creation order, then overlays
    pub(super) fn paint_canvas(&self, scene: &mut Scene, canvas_size: Size) {
        let frame = Frame::view(&self.session);
        let transform = self.session.viewport.affine();
        let zoom = self.session.viewport.zoom;

        fill_color(scene, &canvas_size.to_rect(), frame.background.color());

        let line_brush = Brush::Solid(frame.line_color.color());
        for line in frame.lines {
            let segment = transform * Line::new(line.start, line.end);
            scene.stroke(
                &Stroke::new(theme::size::LINE_WIDTH),
                Affine::IDENTITY,
                &line_brush,
                None,
                &segment,
            );
        }

        for visual in &frame.nodes {
            self.paint_node(scene, visual, transform, zoom);
        }

        if let Some((start, end)) = frame.preview {
            let segment = transform * Line::new(start, end);
            scene.stroke(
                &Stroke::new(theme::size::LINE_WIDTH).with_dashes(0.0, [4.0, 4.0]),
                Affine::IDENTITY,
                &Brush::Solid(theme::canvas::LINE_PREVIEW),
                None,
                &segment,
            );
        }
    }

    fn paint_node(&self, scene: &mut Scene, visual: &NodeVisual<'_>, transform: Affine, zoom: f64) {
        let node = visual.node;
        let center = transform * node.center;
        let circle = Circle::new(center, node.radius * zoom);

        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(node.fill.color()),
            None,
            &circle,
        );
        scene.stroke(
            &Stroke::new(theme::size::NODE_OUTLINE_WIDTH),
            Affine::IDENTITY,
            &Brush::Solid(node.outline.color()),
            None,
            &circle,
        );

        if visual.selected {
            let ring = Circle::new(
                center,
                node.radius * zoom + theme::size::SELECTION_RING_WIDTH * 2.0,
            );
            scene.stroke(
                &Stroke::new(theme::size::SELECTION_RING_WIDTH),
                Affine::IDENTITY,
                &Brush::Solid(theme::canvas::SELECTION_RING),
                None,
                &ring,
            );
        }

        let font_size = self.session.label_font_size * zoom as f32;
        paint_label(
            scene,
            &node.label,
            node.style,
            font_size,
            visual.label_color.color(),
            center,
        );
    }
}

/// Draw a label centered on `center` (screen coordinates)
fn paint_label(
    scene: &mut Scene,
    text: &str,
    style: TextStyle,
    font_size: f32,
    color: Color,
    center: Point,
) {
    if text.is_empty() {
        return;
    }

    let mut font_cx = FontContext::default();
    let mut layout_cx = LayoutContext::new();

    let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
    builder.push_default(StyleProperty::FontSize(font_size));
    builder.push_default(StyleProperty::FontStack(FontStack::Single(
        FontFamily::Generic(GenericFamily::SansSerif),
    )));
    builder.push_default(StyleProperty::Brush(BrushIndex(0)));
    match style {
        TextStyle::Plain => {}
        TextStyle::Bold => builder.push_default(StyleProperty::FontWeight(FontWeight::BOLD)),
        TextStyle::Italic => builder.push_default(StyleProperty::FontStyle(FontStyle::Italic)),
        TextStyle::Underline => builder.push_default(StyleProperty::Underline(true)),
    }
    let mut layout = builder.build(text);
    layout.break_all_lines(None);

    let width = layout.width() as f64;
    let height = layout.height() as f64;
    let brushes = vec![Brush::Solid(color)];
    render_text(
        scene,
        Affine::translate((center.x - width / 2.0, center.y - height / 2.0)),
        &layout,
        &brushes,
        false,
    );
}
