// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor session - the diagram, its history, selection and view state.
//!
//! An `EditorSession` is an ordinary value: every UI handler receives the
//! session it works on, several sessions can live side by side, and the
//! whole editor can be driven from tests without a window.
//!
//! Commands that target "the selected node" are silent no-ops while nothing
//! is selected. Every command that changes the diagram records an
//! [`ActionRecord`] so it can be undone.

mod hit_testing;
mod pointer;
mod search;

use super::gesture::Gesture;
use super::selection::Selection;
use super::undo::{ActionLog, ActionRecord};
use super::viewport::ViewPort;
use crate::config::EditorConfig;
use crate::model::{ColorError, ColorSpec, Diagram, Group, GroupId, NodeId, TextStyle};
use crate::settings;
use crate::theme::ThemeMode;
use kurbo::Point;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct EditorSession {
    /// The diagram being edited
    pub diagram: Diagram,

    /// Undo/redo history
    pub log: ActionLog,

    /// The selected node, if any
    pub selection: Selection,

    /// Nodes whose label matched the last search
    pub highlighted: BTreeSet<NodeId>,

    /// Zoom and pan
    pub viewport: ViewPort,

    /// Primary pointer gesture state
    pub gesture: Gesture,

    /// Canvas palette
    pub theme: ThemeMode,

    /// When on, dragging the canvas pans the view instead of editing
    pub pan_mode: bool,

    /// Label given to new nodes
    pub default_label: String,

    /// Label font size on the canvas
    pub label_font_size: f32,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            diagram: Diagram::new(),
            log: ActionLog::new(),
            selection: Selection::new(),
            highlighted: BTreeSet::new(),
            viewport: ViewPort::new(),
            gesture: Gesture::Idle,
            theme: config.theme_mode(),
            pan_mode: false,
            default_label: config.default_label.clone(),
            label_font_size: config.label_font_size,
        }
    }

    // ===== Node commands =====

    /// Create a node and record it
    pub fn create_node(&mut self, position: Point, fill: ColorSpec, label: &str) -> NodeId {
        let id = self
            .diagram
            .create_node(position, fill, self.theme.outline_spec(), label);
        if let Some(node) = self.diagram.node(id) {
            self.log.record(ActionRecord::AddNode { node: node.clone() });
        }
        tracing::debug!("Created {} at ({}, {})", id, position.x, position.y);
        id
    }

    /// Create a node with the theme's default fill and label
    pub fn create_default_node(&mut self, position: Point) -> NodeId {
        let fill = self.theme.node_fill_spec();
        let label = self.default_label.clone();
        self.create_node(position, fill, &label)
    }

    /// Move a node and record the move; no-op when it is already there
    pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
        match self.diagram.move_node(id, position) {
            Some(from) if from != position => {
                self.log.record(ActionRecord::MoveNode {
                    id,
                    from,
                    to: position,
                });
                true
            }
            _ => false,
        }
    }

    /// Relabel the selected node. `None` (cancelled dialog) and empty text
    /// leave the model unchanged.
    pub fn relabel_selected(&mut self, text: Option<&str>) -> bool {
        let (Some(id), Some(text)) = (self.selection.get(), text) else {
            return false;
        };
        match self.diagram.relabel_node(id, text) {
            Some(before) => {
                self.log.record(ActionRecord::EditNode {
                    id,
                    before,
                    after: text.to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// Recolor the selected node with a CSS color string.
    ///
    /// Returns `Ok(false)` when nothing is selected and an error when the
    /// string is not a color; the model is unchanged in both cases.
    pub fn recolor_selected(&mut self, spec: &str) -> Result<bool, ColorError> {
        match self.selection.get() {
            Some(id) => self.recolor_node(id, spec),
            None => Ok(false),
        }
    }

    /// Recolor one node with a CSS color string; same contract as
    /// [`recolor_selected`](Self::recolor_selected)
    pub fn recolor_node(&mut self, id: NodeId, spec: &str) -> Result<bool, ColorError> {
        let color = ColorSpec::parse(spec)?;
        match self.diagram.recolor_node(id, color.clone()) {
            Some(before) => {
                self.log.record(ActionRecord::ChangeColor {
                    id,
                    before,
                    after: color,
                });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply a label style to the selected node
    pub fn format_selected(&mut self, style: TextStyle) -> bool {
        match self.selection.get() {
            Some(id) => self.format_node(id, style),
            None => false,
        }
    }

    /// Apply a label style to one node
    pub fn format_node(&mut self, id: NodeId, style: TextStyle) -> bool {
        match self.diagram.set_text_style(id, style) {
            Some(before) => {
                self.log.record(ActionRecord::FormatText {
                    id,
                    before,
                    after: style,
                });
                true
            }
            None => false,
        }
    }

    /// Delete the selected node
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.get() else {
            return false;
        };
        self.selection.clear();
        self.highlighted.remove(&id);
        match self.diagram.delete_node(id) {
            Some((index, node)) => {
                self.log.record(ActionRecord::DeleteNode { index, node });
                tracing::debug!("Deleted {}", id);
                true
            }
            None => false,
        }
    }

    // ===== Lines =====

    /// Append a line and record it
    pub fn add_line(&mut self, start: Point, end: Point) {
        self.diagram.add_line(start, end);
        self.log.record(ActionRecord::AddLine {
            line: crate::model::Line::new(start, end),
        });
    }

    // ===== Groups =====

    /// Group the selected node with everything overlapping it, then clear the
    /// selection
    pub fn group_selected(&mut self) -> Option<GroupId> {
        let pivot = self.selection.get()?;
        let group = self.diagram.group_by_overlap(pivot)?;
        self.selection.clear();
        Some(group)
    }

    /// Dissolve the most recent group, whatever is selected
    pub fn ungroup_last(&mut self) -> Option<Group> {
        self.diagram.ungroup_last()
    }

    // ===== Whole map =====

    /// Clear the diagram (File > New). The clear itself is recorded, so the
    /// undo history survives and the previous diagram can be restored.
    pub fn new_map(&mut self) {
        self.replace_diagram(Diagram::new());
    }

    /// Swap in another diagram (File > Load), recorded like New
    pub fn replace_diagram(&mut self, diagram: Diagram) {
        let before = std::mem::replace(&mut self.diagram, diagram);
        self.log.record(ActionRecord::NewMap {
            before,
            after: self.diagram.clone(),
        });
        self.selection.clear();
        self.highlighted.clear();
        self.gesture = Gesture::Idle;
    }

    // ===== History =====

    pub fn undo(&mut self) -> Option<&'static str> {
        let name = self.log.undo(&mut self.diagram)?;
        self.forget_stale_ids();
        tracing::info!("Undo: {}", name);
        Some(name)
    }

    pub fn redo(&mut self) -> Option<&'static str> {
        let name = self.log.redo(&mut self.diagram)?;
        self.forget_stale_ids();
        tracing::info!("Redo: {}", name);
        Some(name)
    }

    /// Drop selection and highlight entries whose node is gone
    fn forget_stale_ids(&mut self) {
        if let Some(id) = self.selection.get()
            && self.diagram.node(id).is_none()
        {
            self.selection.clear();
        }
        let diagram = &self.diagram;
        self.highlighted.retain(|id| diagram.node(*id).is_some());
        if let Gesture::Dragging { id, .. } | Gesture::EditingLabel { id } | Gesture::Prompting { id } =
            self.gesture
            && self.diagram.node(id).is_none()
        {
            self.gesture = Gesture::Idle;
        }
    }

    // ===== View =====

    /// Switch between the dark and light palettes.
    ///
    /// Outlines of existing nodes follow the palette; fills are kept.
    pub fn toggle_dark_mode(&mut self) {
        self.theme = self.theme.toggled();
        self.diagram.set_all_outlines(&self.theme.outline_spec());
        tracing::info!("Theme: {:?}", self.theme);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Mouse wheel zoom around the pointer (screen coordinates)
    pub fn zoom_wheel(&mut self, anchor: Point, scroll_up: bool) {
        let factor = if scroll_up {
            settings::zoom::WHEEL_IN_STEP
        } else {
            settings::zoom::WHEEL_OUT_STEP
        };
        self.viewport.zoom_about(anchor, factor);
    }

    pub fn toggle_pan_mode(&mut self) {
        self.pan_mode = !self.pan_mode;
    }

    /// Automatic layout is not implemented; the command is accepted and
    /// leaves the diagram as it is.
    pub fn auto_layout(&mut self) {
        tracing::info!("Auto layout requested; no layout engine is available");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::default()
    }

    fn green() -> ColorSpec {
        ColorSpec::parse("#00ff00").unwrap()
    }

    #[test]
    fn create_then_undo_removes_exactly_one_node() {
        let mut s = session();
        s.create_default_node(Point::new(10.0, 10.0));
        let before = s.diagram.nodes().len();
        let redo_before = s.log.redo_len();

        let id = s.create_node(Point::new(300.0, 300.0), green(), "x");
        assert_eq!(s.diagram.nodes().len(), before + 1);

        assert_eq!(s.undo(), Some("add_node"));
        assert_eq!(s.diagram.nodes().len(), before);
        assert_eq!(s.log.redo_len(), redo_before + 1);
        assert!(matches!(
            s.log.peek_redo(),
            Some(ActionRecord::AddNode { node }) if node.id == id
        ));
    }

    #[test]
    fn example_scenario() {
        let mut s = session();
        let a = s.create_node(Point::new(100.0, 100.0), green(), "Idea");
        let b = s.create_node(Point::new(110.0, 110.0), green(), "Idea");

        s.selection.select(a);
        s.group_selected().unwrap();
        assert_eq!(s.diagram.groups()[0].members, vec![a, b]);
        assert!(s.selection.is_empty());

        s.ungroup_last().unwrap();
        assert!(s.diagram.groups().is_empty());

        let count = s.diagram.nodes().len();
        let c = s.create_node(Point::new(400.0, 50.0), green(), "Idea");
        let created = s.diagram.node(c).unwrap().clone();
        s.undo();
        assert_eq!(s.diagram.nodes().len(), count);
        s.redo();
        let restored = s.diagram.node(c).unwrap();
        assert_eq!(restored.center, created.center);
        assert_eq!(restored.label, created.label);
        assert_eq!(restored.fill, created.fill);
    }

    #[test]
    fn selection_scoped_commands_need_a_selection() {
        let mut s = session();
        s.create_default_node(Point::new(0.0, 0.0));
        let snapshot = s.diagram.clone();
        let history = s.log.undo_len();

        assert!(!s.delete_selected());
        assert!(!s.relabel_selected(Some("x")));
        assert_eq!(s.recolor_selected("red"), Ok(false));
        assert!(!s.format_selected(TextStyle::Bold));
        assert!(s.group_selected().is_none());

        assert_eq!(s.diagram, snapshot);
        assert_eq!(s.log.undo_len(), history);
    }

    #[test]
    fn cancelled_or_empty_relabel_is_noop() {
        let mut s = session();
        let id = s.create_default_node(Point::ZERO);
        s.selection.select(id);
        let history = s.log.undo_len();
        assert!(!s.relabel_selected(None));
        assert!(!s.relabel_selected(Some("")));
        assert_eq!(s.log.undo_len(), history);
        assert!(s.relabel_selected(Some("Plan")));
        assert_eq!(s.diagram.node(id).unwrap().label, "Plan");
    }

    #[test]
    fn invalid_color_is_rejected() {
        let mut s = session();
        let id = s.create_default_node(Point::ZERO);
        s.selection.select(id);
        assert!(s.recolor_selected("definitely not a color").is_err());
        assert_eq!(s.diagram.node(id).unwrap().fill.as_str(), "#00ff00");
    }

    #[test]
    fn undo_redo_is_identity_for_every_kind() {
        let mut s = session();
        let id = s.create_default_node(Point::new(50.0, 50.0));
        s.selection.select(id);
        s.relabel_selected(Some("Plan"));
        s.recolor_selected("red").unwrap();
        s.format_selected(TextStyle::Italic);
        s.move_node(id, Point::new(80.0, 90.0));
        s.add_line(Point::ZERO, Point::new(10.0, 10.0));
        s.delete_selected();
        s.new_map();

        let mut states = Vec::new();
        loop {
            states.push(s.diagram.clone());
            if s.undo().is_none() {
                break;
            }
        }
        assert!(s.diagram.is_empty());

        // Walk forward again and compare against the recorded states
        states.pop();
        while let Some(expected) = states.pop() {
            s.redo().unwrap();
            assert_eq!(s.diagram, expected);
        }
        assert!(s.redo().is_none());
    }

    #[test]
    fn delete_undo_then_redo() {
        let mut s = session();
        let id = s.create_default_node(Point::ZERO);
        s.selection.select(id);
        assert!(s.delete_selected());
        assert!(s.diagram.node(id).is_none());
        assert_eq!(s.undo(), Some("delete_node"));
        assert!(s.diagram.node(id).is_some());
        assert_eq!(s.redo(), Some("delete_node"));
        assert!(s.diagram.node(id).is_none());
    }

    #[test]
    fn new_map_clears_redo_but_keeps_undo() {
        let mut s = session();
        s.create_default_node(Point::ZERO);
        let id = s.create_default_node(Point::new(5.0, 5.0));
        s.undo();
        assert_eq!(s.log.redo_len(), 1);
        let undo_before = s.log.undo_len();

        s.selection.select(s.diagram.nodes()[0].id);
        s.new_map();
        assert!(s.diagram.is_empty());
        assert!(s.selection.is_empty());
        assert_eq!(s.log.redo_len(), 0);
        assert_eq!(s.log.undo_len(), undo_before + 1);

        s.undo();
        assert_eq!(s.diagram.nodes().len(), 1);
        assert!(s.diagram.node(id).is_none());
    }

    #[test]
    fn new_map_undo_restores_lines_and_groups() {
        let mut s = session();
        let a = s.create_default_node(Point::new(100.0, 100.0));
        s.create_default_node(Point::new(110.0, 110.0));
        s.add_line(Point::ZERO, Point::new(1.0, 1.0));
        s.selection.select(a);
        s.group_selected();
        let before = s.diagram.clone();

        s.new_map();
        s.undo();
        assert_eq!(s.diagram, before);
        s.redo();
        assert!(s.diagram.is_empty());
        // redo replays without recording a second clear
        assert_eq!(s.log.peek_undo().map(ActionRecord::name), Some("new_map"));
        s.undo();
        assert_eq!(s.diagram, before);
    }

    #[test]
    fn undo_drops_stale_selection() {
        let mut s = session();
        let id = s.create_default_node(Point::ZERO);
        s.selection.select(id);
        s.undo();
        assert!(s.selection.is_empty());
    }

    #[test]
    fn dark_mode_restyles_outlines_only() {
        let mut s = session();
        let id = s.create_node(Point::ZERO, ColorSpec::parse("orange").unwrap(), "x");
        s.toggle_dark_mode();
        let node = s.diagram.node(id).unwrap();
        assert_eq!(node.fill.as_str(), "orange");
        assert_eq!(node.outline.as_str(), ThemeMode::Light.outline());

        let fresh = s.create_default_node(Point::new(200.0, 0.0));
        assert_eq!(s.diagram.node(fresh).unwrap().fill.as_str(), "lightblue");
    }

    #[test]
    fn move_to_same_place_is_not_recorded() {
        let mut s = session();
        let id = s.create_default_node(Point::new(1.0, 1.0));
        let history = s.log.undo_len();
        assert!(!s.move_node(id, Point::new(1.0, 1.0)));
        assert_eq!(s.log.undo_len(), history);
        assert!(s.move_node(id, Point::new(2.0, 1.0)));
        assert_eq!(s.log.undo_len(), history + 1);
    }

    #[test]
    fn undo_restores_an_empty_label() {
        let mut s = session();
        let id = s.create_node(Point::new(50.0, 50.0), green(), "");
        s.selection.select(id);
        assert!(s.relabel_selected(Some("Plan")));

        assert_eq!(s.undo(), Some("edit_node"));
        assert_eq!(s.diagram.node(id).unwrap().label, "");
        assert_eq!(s.redo(), Some("edit_node"));
        assert_eq!(s.diagram.node(id).unwrap().label, "Plan");
    }

    #[test]
    fn auto_layout_changes_nothing() {
        let mut s = session();
        s.create_default_node(Point::new(3.0, 4.0));
        let before = s.diagram.clone();
        s.auto_layout();
        assert_eq!(s.diagram, before);
    }

    #[test]
    fn sessions_are_independent() {
        let mut one = session();
        let mut two = session();
        one.create_default_node(Point::ZERO);
        assert_eq!(one.diagram.nodes().len(), 1);
        assert!(two.diagram.nodes().is_empty());
        assert!(two.undo().is_none());
    }
}
