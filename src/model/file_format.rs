// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! JSON diagram files.
//!
//! A diagram file is a JSON array with one object per node:
//!
//! ```json
//! [{ "x": 100.0, "y": 100.0, "text": "Idea", "color": "#00ff00" }]
//! ```
//!
//! Only nodes are stored. Lines, groups, outlines and label styles are not
//! part of the format, so loading always yields a diagram without lines or
//! groups and with plain labels.

use super::color::ColorSpec;
use super::diagram::Diagram;
use super::node::Node;
use anyhow::{Context, Result};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One node as it appears on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: ColorSpec,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            x: node.center.x,
            y: node.center.y,
            text: node.label.clone(),
            color: node.fill.clone(),
        }
    }
}

/// Serialize the nodes of a diagram
pub fn to_json(diagram: &Diagram) -> Result<String> {
    let records: Vec<NodeRecord> = diagram.nodes().iter().map(NodeRecord::from).collect();
    serde_json::to_string(&records).context("Failed to serialize diagram")
}

/// Build a diagram from JSON; every node gets `outline` and a fresh id
pub fn from_json(json: &str, outline: &ColorSpec) -> Result<Diagram> {
    let records: Vec<NodeRecord> =
        serde_json::from_str(json).context("Diagram file is not a valid node list")?;

    let mut diagram = Diagram::new();
    for record in records {
        diagram.push_node(Node::new(
            Point::new(record.x, record.y),
            record.color,
            outline.clone(),
            record.text,
        ));
    }
    Ok(diagram)
}

/// Write a diagram file
pub fn save(path: &Path, diagram: &Diagram) -> Result<()> {
    let json = to_json(diagram)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(
        "Saved {} nodes to {}",
        diagram.nodes().len(),
        path.display()
    );
    Ok(())
}

/// Read a diagram file
pub fn load(path: &Path, outline: &ColorSpec) -> Result<Diagram> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let diagram = from_json(&json, outline)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::info!(
        "Loaded {} nodes from {}",
        diagram.nodes().len(),
        path.display()
    );
    Ok(diagram)
}
