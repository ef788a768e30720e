// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Primary pointer gestures for EditorSession.
//!
//! Positions arrive in screen coordinates; the session converts them through
//! the viewport before touching the diagram.

use super::EditorSession;
use crate::editing::gesture::{Gesture, PointerPress, PressOutcome};
use crate::model::NodeId;
use kurbo::Point;

impl EditorSession {
    /// Handle a primary button press
    pub fn pointer_down(&mut self, press: PointerPress) -> PressOutcome {
        if self.gesture.is_modal() {
            return PressOutcome::Ignored;
        }

        if self.pan_mode {
            self.gesture = Gesture::Panning {
                last: press.position,
            };
            return PressOutcome::PanStarted;
        }

        let canvas_pos = self.viewport.to_canvas(press.position);

        if press.shift {
            self.gesture = Gesture::DrawingLine {
                start: canvas_pos,
                current: canvas_pos,
            };
            return PressOutcome::LineStarted;
        }

        if let Some(id) = self.select_at(canvas_pos) {
            if press.double {
                self.gesture = Gesture::EditingLabel { id };
                return PressOutcome::EditLabel(id);
            }
            self.grab(id, canvas_pos);
            return PressOutcome::NodeGrabbed(id);
        }

        let id = self.create_default_node(canvas_pos);
        self.selection.select(id);
        self.grab(id, canvas_pos);
        PressOutcome::NodeCreated(id)
    }

    fn grab(&mut self, id: NodeId, canvas_pos: Point) {
        if let Some(node) = self.diagram.node(id) {
            self.gesture = Gesture::Dragging {
                id,
                origin: node.center,
                grab: node.center - canvas_pos,
            };
        }
    }

    /// Handle pointer motion. Returns true when something visible changed.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        let canvas_pos = self.viewport.to_canvas(position);
        match self.gesture {
            Gesture::Dragging { id, grab, .. } => {
                // Live preview; the move is recorded once on release
                self.diagram.move_node(id, canvas_pos + grab).is_some()
            }
            Gesture::DrawingLine { start, .. } => {
                self.gesture = Gesture::DrawingLine {
                    start,
                    current: canvas_pos,
                };
                true
            }
            Gesture::Panning { last } => {
                self.viewport.pan(position - last);
                self.gesture = Gesture::Panning { last: position };
                true
            }
            Gesture::Idle | Gesture::EditingLabel { .. } | Gesture::Prompting { .. } => false,
        }
    }

    /// Handle a primary button release
    pub fn pointer_up(&mut self, position: Point) {
        let canvas_pos = self.viewport.to_canvas(position);
        match self.gesture {
            Gesture::Dragging { id, origin, grab } => {
                let target = canvas_pos + grab;
                // Put the node back so the move is recorded from its origin
                self.diagram.move_node(id, origin);
                self.move_node(id, target);
                self.gesture = Gesture::Idle;
            }
            Gesture::DrawingLine { start, .. } => {
                self.add_line(start, canvas_pos);
                self.gesture = Gesture::Idle;
            }
            Gesture::Panning { .. } => {
                self.gesture = Gesture::Idle;
            }
            Gesture::Idle => self.deselect(),
            Gesture::EditingLabel { .. } | Gesture::Prompting { .. } => {}
        }
    }

    /// Abandon the current gesture; a dragged node returns to where it was
    pub fn pointer_cancel(&mut self) {
        match self.gesture {
            Gesture::Dragging { id, origin, .. } => {
                self.diagram.move_node(id, origin);
                self.gesture = Gesture::Idle;
            }
            Gesture::DrawingLine { .. } | Gesture::Panning { .. } => {
                self.gesture = Gesture::Idle;
            }
            Gesture::Idle | Gesture::EditingLabel { .. } | Gesture::Prompting { .. } => {}
        }
    }

    /// Open the label dialog for the selected node (context menu Edit)
    pub fn begin_label_edit(&mut self) -> bool {
        match self.selection.get() {
            Some(id) if self.gesture.is_idle() => {
                self.gesture = Gesture::EditingLabel { id };
                true
            }
            _ => false,
        }
    }

    /// Close the label dialog. `None` means it was cancelled.
    pub fn finish_label_edit(&mut self, text: Option<&str>) -> bool {
        let Gesture::EditingLabel { id } = self.gesture else {
            return false;
        };
        self.gesture = Gesture::Idle;
        self.selection.select(id);
        self.relabel_selected(text)
    }

    /// Open the color or format dialog for the selected node. The dialog
    /// keeps the returned id as its target.
    pub fn begin_prompt(&mut self) -> Option<NodeId> {
        let id = self.selection.get()?;
        if !self.gesture.is_idle() {
            return None;
        }
        self.gesture = Gesture::Prompting { id };
        Some(id)
    }

    /// Close the color or format dialog, returning its target
    pub fn finish_prompt(&mut self) -> Option<NodeId> {
        let Gesture::Prompting { id } = self.gesture else {
            return None;
        };
        self.gesture = Gesture::Idle;
        Some(id)
    }

    /// The line being drawn, for the rubber band preview (canvas units)
    pub fn line_preview(&self) -> Option<(Point, Point)> {
        match self.gesture {
            Gesture::DrawingLine { start, current } => Some((start, current)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::undo::ActionRecord;
    use crate::model::Line;

    #[test]
    fn press_on_empty_canvas_creates_and_selects() {
        let mut s = EditorSession::default();
        let outcome = s.pointer_down(PointerPress::at(Point::new(50.0, 60.0)));
        let PressOutcome::NodeCreated(id) = outcome else {
            panic!("expected a new node, got {outcome:?}");
        };
        assert!(s.selection.contains(id));
        let node = s.diagram.node(id).unwrap();
        assert_eq!(node.center, Point::new(50.0, 60.0));
        assert_eq!(node.label, "Idea");
        assert_eq!(node.fill.as_str(), s.theme.node_fill());

        s.pointer_up(Point::new(50.0, 60.0));
        assert!(s.selection.contains(id));
        assert!(s.gesture.is_idle());
        assert_eq!(s.log.undo_len(), 1);
    }

    #[test]
    fn drag_records_one_move() {
        let mut s = EditorSession::default();
        let PressOutcome::NodeCreated(id) = s.pointer_down(PointerPress::at(Point::new(100.0, 100.0)))
        else {
            panic!("expected a new node");
        };
        s.pointer_up(Point::new(100.0, 100.0));

        // Grab off-center and drag
        assert_eq!(
            s.pointer_down(PointerPress::at(Point::new(110.0, 100.0))),
            PressOutcome::NodeGrabbed(id)
        );
        s.pointer_move(Point::new(150.0, 120.0));
        s.pointer_move(Point::new(210.0, 140.0));
        s.pointer_up(Point::new(210.0, 140.0));

        assert_eq!(s.diagram.node(id).unwrap().center, Point::new(200.0, 140.0));
        assert_eq!(
            s.log.peek_undo(),
            Some(&ActionRecord::MoveNode {
                id,
                from: Point::new(100.0, 100.0),
                to: Point::new(200.0, 140.0),
            })
        );
        s.undo();
        assert_eq!(s.diagram.node(id).unwrap().center, Point::new(100.0, 100.0));
    }

    #[test]
    fn cancel_reverts_drag() {
        let mut s = EditorSession::default();
        let id = s.create_default_node(Point::new(100.0, 100.0));
        s.pointer_down(PointerPress::at(Point::new(100.0, 100.0)));
        s.pointer_move(Point::new(300.0, 300.0));
        s.pointer_cancel();
        assert_eq!(s.diagram.node(id).unwrap().center, Point::new(100.0, 100.0));
        assert!(s.gesture.is_idle());
    }

    #[test]
    fn shift_press_draws_a_line() {
        let mut s = EditorSession::default();
        let press = PointerPress::at(Point::new(10.0, 10.0)).with_shift();
        assert_eq!(s.pointer_down(press), PressOutcome::LineStarted);
        s.pointer_move(Point::new(40.0, 50.0));
        assert_eq!(
            s.line_preview(),
            Some((Point::new(10.0, 10.0), Point::new(40.0, 50.0)))
        );
        s.pointer_up(Point::new(40.0, 50.0));
        assert_eq!(
            s.diagram.lines(),
            &[Line::new(Point::new(10.0, 10.0), Point::new(40.0, 50.0))]
        );
        assert!(s.diagram.nodes().is_empty());
        assert_eq!(s.undo(), Some("add_line"));
        assert!(s.diagram.lines().is_empty());
    }

    #[test]
    fn release_without_gesture_deselects() {
        let mut s = EditorSession::default();
        let id = s.create_default_node(Point::ZERO);
        s.selection.select(id);
        s.pointer_up(Point::new(500.0, 500.0));
        assert!(s.selection.is_empty());
    }

    #[test]
    fn pan_mode_moves_view_not_nodes() {
        let mut s = EditorSession::default();
        s.toggle_pan_mode();
        assert_eq!(
            s.pointer_down(PointerPress::at(Point::new(10.0, 10.0))),
            PressOutcome::PanStarted
        );
        s.pointer_move(Point::new(30.0, 25.0));
        s.pointer_up(Point::new(30.0, 25.0));
        assert!(s.diagram.nodes().is_empty());
        assert_eq!(s.viewport.offset, kurbo::Vec2::new(20.0, 15.0));
    }

    #[test]
    fn double_press_opens_label_editor() {
        let mut s = EditorSession::default();
        let id = s.create_default_node(Point::new(100.0, 100.0));
        let press = PointerPress::at(Point::new(100.0, 100.0)).as_double();
        assert_eq!(s.pointer_down(press), PressOutcome::EditLabel(id));
        assert!(s.gesture.is_modal());

        // Modal: other presses are dropped
        assert_eq!(
            s.pointer_down(PointerPress::at(Point::new(400.0, 400.0))),
            PressOutcome::Ignored
        );
        assert_eq!(s.diagram.nodes().len(), 1);

        assert!(s.finish_label_edit(Some("Roadmap")));
        assert_eq!(s.diagram.node(id).unwrap().label, "Roadmap");
        assert!(s.gesture.is_idle());
    }

    #[test]
    fn cancelled_label_edit_changes_nothing() {
        let mut s = EditorSession::default();
        let id = s.create_default_node(Point::ZERO);
        s.selection.select(id);
        assert!(s.begin_label_edit());
        let history = s.log.undo_len();
        assert!(!s.finish_label_edit(None));
        assert_eq!(s.diagram.node(id).unwrap().label, "Idea");
        assert_eq!(s.log.undo_len(), history);
    }

    #[test]
    fn presses_go_through_the_viewport() {
        let mut s = EditorSession::default();
        s.zoom_in();
        let PressOutcome::NodeCreated(id) = s.pointer_down(PointerPress::at(Point::new(120.0, 60.0)))
        else {
            panic!("expected a new node");
        };
        let center = s.diagram.node(id).unwrap().center;
        assert!((center - Point::new(100.0, 50.0)).hypot() < 1e-9);
    }
}
