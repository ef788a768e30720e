// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Backend-neutral description of what a diagram looks like.
//!
//! The canvas widget, the SVG writer and the raster exporter all draw from
//! a `Frame`, so the screen and the exported images agree on colors, label
//! styles and paint order (background, lines, nodes in creation order).

use crate::editing::EditorSession;
use crate::model::{ColorSpec, Diagram, Line, Node};
use crate::theme::{self, ThemeMode};
use kurbo::Point;

/// One node ready to be painted
#[derive(Debug, Clone)]
pub struct NodeVisual<'a> {
    pub node: &'a Node,
    /// Outline color, or red while the node matches the search
    pub label_color: ColorSpec,
    pub selected: bool,
}

/// Everything visible, in canvas coordinates
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub background: ColorSpec,
    /// Stroke of lines, the palette's outline color
    pub line_color: ColorSpec,
    pub lines: &'a [Line],
    pub nodes: Vec<NodeVisual<'a>>,
    /// Rubber band of a line being drawn
    pub preview: Option<(Point, Point)>,
}

impl<'a> Frame<'a> {
    /// What the canvas shows: search highlights, the selection ring and the
    /// line preview included
    pub fn view(session: &'a EditorSession) -> Self {
        let highlight = theme::highlight_spec();
        let nodes = session
            .diagram
            .nodes()
            .iter()
            .map(|node| NodeVisual {
                node,
                label_color: if session.is_highlighted(node.id) {
                    highlight.clone()
                } else {
                    node.outline.clone()
                },
                selected: session.selection.contains(node.id),
            })
            .collect();

        Self {
            background: session.theme.background_spec(),
            line_color: session.theme.line_spec(),
            lines: session.diagram.lines(),
            nodes,
            preview: session.line_preview(),
        }
    }

    /// The diagram alone, for document exports
    pub fn document(diagram: &'a Diagram, theme: ThemeMode) -> Self {
        let nodes = diagram
            .nodes()
            .iter()
            .map(|node| NodeVisual {
                node,
                label_color: node.outline.clone(),
                selected: false,
            })
            .collect();

        Self {
            background: theme.background_spec(),
            line_color: theme.line_spec(),
            lines: diagram.lines(),
            nodes,
            preview: None,
        }
    }

    /// Drop the selection ring and the line preview
    pub fn without_overlays(mut self) -> Self {
        for visual in &mut self.nodes {
            visual.selected = false;
        }
        self.preview = None;
        self
    }
}
