// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for nodes and groups.
//!
//! Ids come from process-wide atomic counters, so ids handed out by two
//! independent editor sessions never collide. They are never reused: an undo
//! that re-inserts a deleted node brings back the very same id, and groups
//! that still list it resolve to it again.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NODE_COUNTER: AtomicU64 = AtomicU64::new(1);
static GROUP_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a node in a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a fresh node id
    pub fn next() -> Self {
        Self(NODE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Identity of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u64);

impl GroupId {
    /// Allocate a fresh group id
    pub fn next() -> Self {
        Self(GROUP_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}
