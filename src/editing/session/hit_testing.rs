// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing and selection methods for EditorSession

use super::EditorSession;
use crate::model::{Node, NodeId};
use kurbo::Point;

impl EditorSession {
    /// Hit test at canvas coordinates.
    ///
    /// Returns the first node in creation order whose bounding box contains
    /// the point, edges included.
    pub fn hit_test(&self, canvas_pos: Point) -> Option<NodeId> {
        self.diagram.node_at(canvas_pos)
    }

    /// Hit test at screen coordinates
    pub fn hit_test_screen(&self, screen_pos: Point) -> Option<NodeId> {
        self.hit_test(self.viewport.to_canvas(screen_pos))
    }

    /// Select the node under a canvas point.
    ///
    /// A miss leaves the current selection as it is.
    pub fn select_at(&mut self, canvas_pos: Point) -> Option<NodeId> {
        let hit = self.hit_test(canvas_pos)?;
        tracing::debug!("[select_at] ({}, {}) -> {}", canvas_pos.x, canvas_pos.y, hit);
        self.selection.select(hit);
        Some(hit)
    }

    /// Right-click target at screen coordinates.
    ///
    /// Selects the node under the pointer, then returns the selection. The
    /// context menu only opens when this is `Some`.
    pub fn context_menu_at(&mut self, screen_pos: Point) -> Option<NodeId> {
        self.select_at(self.viewport.to_canvas(screen_pos));
        self.selected_node().map(|node| node.id)
    }

    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// The selected node, if it still exists
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.get().and_then(|id| self.diagram.node(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorSpec;

    fn session_with(centers: &[(f64, f64)]) -> (EditorSession, Vec<NodeId>) {
        let mut s = EditorSession::default();
        let fill = ColorSpec::parse("#00ff00").unwrap();
        let ids = centers
            .iter()
            .map(|&(x, y)| s.create_node(Point::new(x, y), fill.clone(), "Idea"))
            .collect();
        (s, ids)
    }

    #[test]
    fn box_edges_are_inclusive() {
        let (s, ids) = session_with(&[(100.0, 100.0)]);
        assert_eq!(s.hit_test(Point::new(70.0, 70.0)), Some(ids[0]));
        assert_eq!(s.hit_test(Point::new(130.0, 130.0)), Some(ids[0]));
        assert_eq!(s.hit_test(Point::new(130.01, 100.0)), None);
    }

    #[test]
    fn hit_test_uses_bounding_box_corners() {
        // The box corner is outside the circle but still hits
        let (s, ids) = session_with(&[(0.0, 0.0)]);
        assert_eq!(s.hit_test(Point::new(29.0, 29.0)), Some(ids[0]));
    }

    #[test]
    fn overlapping_nodes_resolve_to_first_created() {
        let (s, ids) = session_with(&[(100.0, 100.0), (110.0, 110.0)]);
        assert_eq!(s.hit_test(Point::new(115.0, 115.0)), Some(ids[0]));
        assert_eq!(s.hit_test(Point::new(135.0, 135.0)), Some(ids[1]));
    }

    #[test]
    fn miss_keeps_selection() {
        let (mut s, ids) = session_with(&[(100.0, 100.0)]);
        assert_eq!(s.select_at(Point::new(100.0, 100.0)), Some(ids[0]));
        assert_eq!(s.select_at(Point::new(500.0, 500.0)), None);
        assert!(s.selection.contains(ids[0]));
        s.deselect();
        assert!(s.selected_node().is_none());
    }

    #[test]
    fn context_menu_needs_a_selection() {
        let (mut s, ids) = session_with(&[(100.0, 100.0)]);
        assert_eq!(s.context_menu_at(Point::new(400.0, 400.0)), None);

        assert_eq!(s.context_menu_at(Point::new(100.0, 100.0)), Some(ids[0]));
        // A miss keeps the earlier selection as the target
        assert_eq!(s.context_menu_at(Point::new(400.0, 400.0)), Some(ids[0]));
    }

    #[test]
    fn screen_hit_test_respects_zoom() {
        let (mut s, ids) = session_with(&[(100.0, 100.0)]);
        s.zoom_in();
        // (100, 100) on canvas is (120, 120) on screen
        assert_eq!(s.hit_test_screen(Point::new(120.0, 120.0)), Some(ids[0]));
        assert_eq!(s.hit_test_screen(Point::new(160.0, 160.0)), None);
    }
}
