// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Label search for EditorSession

use super::EditorSession;
use crate::model::NodeId;

impl EditorSession {
    /// Highlight every node whose label contains `query`, ignoring case.
    ///
    /// Nodes that do not match lose their highlight. The query is taken
    /// as typed, so an empty query matches every node. Returns the number
    /// of matches.
    pub fn search_highlight(&mut self, query: &str) -> usize {
        self.highlighted.clear();
        let query = query.to_lowercase();
        self.highlighted.extend(
            self.diagram
                .nodes()
                .iter()
                .filter(|n| n.label.to_lowercase().contains(&query))
                .map(|n| n.id),
        );
        tracing::debug!("Search '{}' matched {} nodes", query, self.highlighted.len());
        self.highlighted.len()
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted.clear();
    }

    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.highlighted.contains(&id)
    }
}
