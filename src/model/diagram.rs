// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! The diagram model: the single owner of nodes, lines and groups.
//!
//! Nodes are kept in creation order. That order is significant: hit testing
//! returns the first node whose box contains the pointer, and grouping lists
//! members in the same order. Mutators return the value they replaced so the
//! editor session can record undo pre-images without a second lookup.

use super::color::ColorSpec;
use super::entity_id::{GroupId, NodeId};
use super::node::{Group, Line, Node, TextStyle};
use kurbo::{Point, Rect};

/// Nodes, lines and groups of one diagram
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    nodes: Vec<Node>,
    lines: Vec<Line>,
    groups: Vec<Group>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.lines.is_empty() && self.groups.is_empty()
    }

    // ===== Nodes =====

    /// Insert a new node with the default radius and return its id
    pub fn create_node(
        &mut self,
        position: Point,
        fill: ColorSpec,
        outline: ColorSpec,
        label: &str,
    ) -> NodeId {
        let node = Node::new(position, fill, outline, label);
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Append an existing node record (load, redo)
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Re-insert a node at its former position in creation order
    pub fn insert_node(&mut self, index: usize, node: Node) {
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
    }

    /// Move a node, returning its previous center
    pub fn move_node(&mut self, id: NodeId, position: Point) -> Option<Point> {
        let node = self.node_mut(id)?;
        Some(std::mem::replace(&mut node.center, position))
    }

    /// Replace a node's label, returning the previous one.
    ///
    /// Empty text leaves the node untouched and returns `None`.
    pub fn relabel_node(&mut self, id: NodeId, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }
        self.set_label(id, text)
    }

    /// Replace a node's label unconditionally, returning the previous one.
    /// History replay goes through here so empty labels can be restored.
    pub fn set_label(&mut self, id: NodeId, text: &str) -> Option<String> {
        let node = self.node_mut(id)?;
        Some(std::mem::replace(&mut node.label, text.to_string()))
    }

    /// Replace a node's fill, returning the previous one
    pub fn recolor_node(&mut self, id: NodeId, color: ColorSpec) -> Option<ColorSpec> {
        let node = self.node_mut(id)?;
        Some(std::mem::replace(&mut node.fill, color))
    }

    /// Replace a node's label style, returning the previous one
    pub fn set_text_style(&mut self, id: NodeId, style: TextStyle) -> Option<TextStyle> {
        let node = self.node_mut(id)?;
        Some(std::mem::replace(&mut node.style, style))
    }

    /// Set the outline of every node
    pub fn set_all_outlines(&mut self, outline: &ColorSpec) {
        for node in &mut self.nodes {
            node.outline = outline.clone();
        }
    }

    /// Remove a node, returning its index in creation order and the record.
    ///
    /// Groups keep the id; [`Diagram::group_members`] skips ids that no
    /// longer resolve, so undoing the delete restores the membership.
    pub fn delete_node(&mut self, id: NodeId) -> Option<(usize, Node)> {
        let index = self.index_of(id)?;
        Some((index, self.nodes.remove(index)))
    }

    // ===== Lines =====

    pub fn add_line(&mut self, start: Point, end: Point) {
        self.lines.push(Line::new(start, end));
    }

    /// Remove the most recent line equal to `line`
    pub fn remove_line(&mut self, line: &Line) -> bool {
        match self.lines.iter().rposition(|l| l == line) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    // ===== Groups =====

    /// Group the pivot with every node whose box strictly overlaps it.
    ///
    /// The pivot comes first, followed by the other members in creation
    /// order. Existing groups are not consulted: a node can be a member of
    /// any number of groups.
    pub fn group_by_overlap(&mut self, pivot: NodeId) -> Option<GroupId> {
        let pivot_node = self.node(pivot)?;
        let pivot_box = pivot_node.bounds();

        let mut members = vec![pivot];
        members.extend(
            self.nodes
                .iter()
                .filter(|n| n.id != pivot)
                .filter(|n| super::node::boxes_overlap(n.bounds(), pivot_box))
                .map(|n| n.id),
        );

        let id = GroupId::next();
        tracing::debug!("Grouped {} nodes around {} as {}", members.len(), pivot, id);
        self.groups.push(Group { id, members });
        Some(id)
    }

    /// Remove the most recently created group
    pub fn ungroup_last(&mut self) -> Option<Group> {
        self.groups.pop()
    }

    /// Live members of a group, in group order
    pub fn group_members<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Node> + 'a {
        group.members.iter().filter_map(|id| self.node(*id))
    }

    // ===== Whole diagram =====

    /// Remove everything
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.lines.clear();
        self.groups.clear();
    }

    /// First node, in creation order, whose bounding box contains `point`
    pub fn node_at(&self, point: Point) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.contains(point)).map(|n| n.id)
    }

    /// Union of all node boxes and line endpoints
    pub fn bounds(&self) -> Option<Rect> {
        let node_boxes = self.nodes.iter().map(Node::bounds);
        let line_boxes = self
            .lines
            .iter()
            .map(|l| Rect::from_points(l.start, l.end));
        node_boxes.chain(line_boxes).reduce(|acc, r| acc.union(r))
    }
}
