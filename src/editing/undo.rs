// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Undo/redo history as two stacks of reversible action records.
//!
//! Each record stores value snapshots (the pre-image and the post-image of
//! the change), never references into the live diagram. Undo pops a record,
//! reverts it and pushes it on the redo stack; redo does the opposite.
//! Recording a new action invalidates the redo stack.

use crate::model::{ColorSpec, Diagram, Line, Node, NodeId, TextStyle};
use kurbo::Point;

/// One reversible edit
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRecord {
    /// A node was created; holds the node as created
    AddNode { node: Node },
    /// A node was deleted from `index` in creation order
    DeleteNode { index: usize, node: Node },
    /// A label changed
    EditNode {
        id: NodeId,
        before: String,
        after: String,
    },
    /// A fill color changed
    ChangeColor {
        id: NodeId,
        before: ColorSpec,
        after: ColorSpec,
    },
    /// The whole diagram was replaced (New, or Load)
    NewMap { before: Diagram, after: Diagram },
    /// A label style changed
    FormatText {
        id: NodeId,
        before: TextStyle,
        after: TextStyle,
    },
    /// A node was dragged
    MoveNode { id: NodeId, from: Point, to: Point },
    /// A line was drawn
    AddLine { line: Line },
}

impl ActionRecord {
    /// Short tag used in logs and menus
    pub fn name(&self) -> &'static str {
        match self {
            ActionRecord::AddNode { .. } => "add_node",
            ActionRecord::DeleteNode { .. } => "delete_node",
            ActionRecord::EditNode { .. } => "edit_node",
            ActionRecord::ChangeColor { .. } => "change_color",
            ActionRecord::NewMap { .. } => "new_map",
            ActionRecord::FormatText { .. } => "format_text",
            ActionRecord::MoveNode { .. } => "move_node",
            ActionRecord::AddLine { .. } => "add_line",
        }
    }

    /// Apply the inverse of this action
    fn revert(&self, diagram: &mut Diagram) {
        match self {
            ActionRecord::AddNode { node } => {
                diagram.delete_node(node.id);
            }
            ActionRecord::DeleteNode { index, node } => {
                diagram.insert_node(*index, node.clone());
            }
            ActionRecord::EditNode { id, before, .. } => {
                diagram.set_label(*id, before);
            }
            ActionRecord::ChangeColor { id, before, .. } => {
                diagram.recolor_node(*id, before.clone());
            }
            ActionRecord::NewMap { before, .. } => {
                *diagram = before.clone();
            }
            ActionRecord::FormatText { id, before, .. } => {
                diagram.set_text_style(*id, *before);
            }
            ActionRecord::MoveNode { id, from, .. } => {
                diagram.move_node(*id, *from);
            }
            ActionRecord::AddLine { line } => {
                diagram.remove_line(line);
            }
        }
    }

    /// Apply this action again
    fn replay(&self, diagram: &mut Diagram) {
        match self {
            ActionRecord::AddNode { node } => {
                diagram.push_node(node.clone());
            }
            ActionRecord::DeleteNode { node, .. } => {
                diagram.delete_node(node.id);
            }
            ActionRecord::EditNode { id, after, .. } => {
                diagram.set_label(*id, after);
            }
            ActionRecord::ChangeColor { id, after, .. } => {
                diagram.recolor_node(*id, after.clone());
            }
            ActionRecord::NewMap { after, .. } => {
                *diagram = after.clone();
            }
            ActionRecord::FormatText { id, after, .. } => {
                diagram.set_text_style(*id, *after);
            }
            ActionRecord::MoveNode { id, to, .. } => {
                diagram.move_node(*id, *to);
            }
            ActionRecord::AddLine { line } => {
                diagram.add_line(line.start, line.end);
            }
        }
    }
}

/// The two-stack history
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    undo: Vec<ActionRecord>,
    redo: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new action and invalidate the redo stack
    pub fn record(&mut self, action: ActionRecord) {
        tracing::debug!("Recorded {}", action.name());
        self.undo.push(action);
        self.redo.clear();
    }

    /// Revert the most recent action. Returns its name, or `None` when there
    /// is nothing to undo.
    pub fn undo(&mut self, diagram: &mut Diagram) -> Option<&'static str> {
        let action = self.undo.pop()?;
        action.revert(diagram);
        let name = action.name();
        self.redo.push(action);
        Some(name)
    }

    /// Re-apply the most recently undone action
    pub fn redo(&mut self, diagram: &mut Diagram) -> Option<&'static str> {
        let action = self.redo.pop()?;
        action.replay(diagram);
        let name = action.name();
        self.undo.push(action);
        Some(name)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// The action the next undo would revert
    pub fn peek_undo(&self) -> Option<&ActionRecord> {
        self.undo.last()
    }

    /// The action the next redo would replay
    pub fn peek_redo(&self) -> Option<&ActionRecord> {
        self.redo.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> ColorSpec {
        ColorSpec::parse(s).unwrap()
    }

    fn diagram_with_node() -> (Diagram, NodeId) {
        let mut d = Diagram::new();
        let id = d.create_node(Point::new(10.0, 10.0), color("#00ff00"), color("black"), "Idea");
        (d, id)
    }

    #[test]
    fn empty_log_undo_redo_are_noops() {
        let mut log = ActionLog::new();
        let mut d = Diagram::new();
        assert_eq!(log.undo(&mut d), None);
        assert_eq!(log.redo(&mut d), None);
        assert!(d.is_empty());
    }

    #[test]
    fn record_clears_redo() {
        let (mut d, id) = diagram_with_node();
        let mut log = ActionLog::new();
        log.record(ActionRecord::AddNode {
            node: d.node(id).unwrap().clone(),
        });
        log.undo(&mut d);
        assert_eq!(log.redo_len(), 1);

        log.record(ActionRecord::AddLine {
            line: Line::new(Point::ZERO, Point::new(1.0, 1.0)),
        });
        assert_eq!(log.redo_len(), 0);
        assert_eq!(log.undo_len(), 1);
    }

    #[test]
    fn add_node_undo_moves_record_to_redo() {
        let (mut d, id) = diagram_with_node();
        let node = d.node(id).unwrap().clone();
        let mut log = ActionLog::new();
        log.record(ActionRecord::AddNode { node: node.clone() });

        assert_eq!(log.undo(&mut d), Some("add_node"));
        assert!(d.nodes().is_empty());
        assert_eq!(log.redo_len(), 1);
        assert_eq!(log.peek_redo(), Some(&ActionRecord::AddNode { node: node.clone() }));

        assert_eq!(log.redo(&mut d), Some("add_node"));
        assert_eq!(d.node(id), Some(&node));
        assert_eq!(log.undo_len(), 1);
        assert_eq!(log.redo_len(), 0);
    }

    #[test]
    fn edit_color_format_move_round_trip() {
        let (mut d, id) = diagram_with_node();
        let original = d.clone();
        let mut log = ActionLog::new();

        let before = d.relabel_node(id, "Plan").unwrap();
        log.record(ActionRecord::EditNode {
            id,
            before,
            after: "Plan".into(),
        });
        let before = d.recolor_node(id, color("red")).unwrap();
        log.record(ActionRecord::ChangeColor {
            id,
            before,
            after: color("red"),
        });
        let before = d.set_text_style(id, TextStyle::Bold).unwrap();
        log.record(ActionRecord::FormatText {
            id,
            before,
            after: TextStyle::Bold,
        });
        let from = d.move_node(id, Point::new(50.0, 60.0)).unwrap();
        log.record(ActionRecord::MoveNode {
            id,
            from,
            to: Point::new(50.0, 60.0),
        });
        let edited = d.clone();

        while log.undo(&mut d).is_some() {}
        assert_eq!(d, original);

        while log.redo(&mut d).is_some() {}
        assert_eq!(d, edited);
    }

    #[test]
    fn delete_undo_restores_position() {
        let mut d = Diagram::new();
        let a = d.create_node(Point::ZERO, color("red"), color("black"), "a");
        let b = d.create_node(Point::new(100.0, 0.0), color("red"), color("black"), "b");
        let original = d.clone();
        let mut log = ActionLog::new();

        let (index, node) = d.delete_node(a).unwrap();
        log.record(ActionRecord::DeleteNode { index, node });
        assert_eq!(d.nodes()[0].id, b);

        log.undo(&mut d);
        assert_eq!(d, original);
        log.redo(&mut d);
        assert!(d.node(a).is_none());
    }

    #[test]
    fn new_map_restores_everything() {
        let (mut d, id) = diagram_with_node();
        d.add_line(Point::ZERO, Point::new(5.0, 5.0));
        d.group_by_overlap(id);
        let before = d.clone();
        let mut log = ActionLog::new();

        d.clear();
        log.record(ActionRecord::NewMap {
            before: before.clone(),
            after: d.clone(),
        });

        log.undo(&mut d);
        assert_eq!(d, before);
        log.redo(&mut d);
        assert!(d.is_empty());
    }

    #[test]
    fn add_line_round_trip() {
        let mut d = Diagram::new();
        let line = Line::new(Point::ZERO, Point::new(3.0, 4.0));
        d.add_line(line.start, line.end);
        let mut log = ActionLog::new();
        log.record(ActionRecord::AddLine { line });
        log.undo(&mut d);
        assert!(d.lines().is_empty());
        log.redo(&mut d);
        assert_eq!(d.lines(), &[line]);
    }
}
