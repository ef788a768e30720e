// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Diagram elements: nodes, lines and groups.
//!
//! These are plain data records. Nothing here knows about a rendering
//! surface; `crate::render` maps them to drawable primitives.

use super::color::ColorSpec;
use super::entity_id::{GroupId, NodeId};
use crate::settings;
use kurbo::{Point, Rect};
use std::fmt;
use std::str::FromStr;

/// Label text style. The styles are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    Underline,
}

impl TextStyle {
    /// The styles offered by the Format Text command
    pub const CHOICES: [TextStyle; 3] = [TextStyle::Bold, TextStyle::Italic, TextStyle::Underline];

    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::Plain => "plain",
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::Underline => "underline",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextStyle {
    type Err = ();

    /// Accepts the style names case-insensitively, surrounding blanks ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(TextStyle::Plain),
            "bold" => Ok(TextStyle::Bold),
            "italic" => Ok(TextStyle::Italic),
            "underline" => Ok(TextStyle::Underline),
            _ => Err(()),
        }
    }
}

/// A circular diagram element with a label
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub center: Point,
    pub radius: f64,
    pub fill: ColorSpec,
    pub outline: ColorSpec,
    pub label: String,
    pub style: TextStyle,
}

impl Node {
    /// Create a node with the default radius and a fresh id
    pub fn new(center: Point, fill: ColorSpec, outline: ColorSpec, label: impl Into<String>) -> Self {
        Self {
            id: NodeId::next(),
            center,
            radius: settings::node::RADIUS,
            fill,
            outline,
            label: label.into(),
            style: TextStyle::Plain,
        }
    }

    /// Axis-aligned bounding box (center ± radius)
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Whether `point` lies inside the bounding box, edges included
    pub fn contains(&self, point: Point) -> bool {
        let b = self.bounds();
        b.x0 <= point.x && point.x <= b.x1 && b.y0 <= point.y && point.y <= b.y1
    }

    /// Strict bounding box overlap; boxes that only touch do not overlap
    pub fn overlaps(&self, other: &Node) -> bool {
        boxes_overlap(self.bounds(), other.bounds())
    }
}

/// `a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top`
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// A straight segment between two fixed points.
///
/// Endpoints are captured at draw time and do not follow nodes around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Nodes clustered by overlap with a pivot at grouping time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    /// Pivot first, then the overlapping nodes in creation order
    pub members: Vec<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_at(x: f64, y: f64) -> Node {
        Node::new(
            Point::new(x, y),
            ColorSpec::parse("#00ff00").unwrap(),
            ColorSpec::parse("black").unwrap(),
            "Idea",
        )
    }

    #[test]
    fn bounds_use_fixed_radius() {
        let n = node_at(100.0, 100.0);
        assert_eq!(n.radius, 30.0);
        assert_eq!(n.bounds(), Rect::new(70.0, 70.0, 130.0, 130.0));
    }

    #[test]
    fn contains_includes_edges() {
        let n = node_at(100.0, 100.0);
        assert!(n.contains(Point::new(70.0, 130.0)));
        assert!(n.contains(Point::new(100.0, 100.0)));
        assert!(!n.contains(Point::new(130.1, 100.0)));
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = node_at(100.0, 100.0);
        let b = node_at(160.0, 100.0);
        assert!(!a.overlaps(&b));
        let c = node_at(159.0, 100.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn text_style_parsing() {
        assert_eq!(" Bold ".parse::<TextStyle>(), Ok(TextStyle::Bold));
        assert_eq!("italic".parse::<TextStyle>(), Ok(TextStyle::Italic));
        assert!("strikethrough".parse::<TextStyle>().is_err());
        assert_eq!(TextStyle::Underline.to_string(), "underline");
    }
}
