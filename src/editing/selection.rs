// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! The current selection: at most one node.
//!
//! The selected node is the implicit target of the edit, delete, recolor,
//! format and group commands. Those commands are silent no-ops while the
//! selection is empty.

use crate::model::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    inner: Option<NodeId>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self { inner: None }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// The selected node, if any
    pub fn get(&self) -> Option<NodeId> {
        self.inner
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.inner == Some(id)
    }

    /// Replace the selection
    pub fn select(&mut self, id: NodeId) {
        self.inner = Some(id);
    }

    pub fn clear(&mut self) {
        self.inner = None;
    }
}
