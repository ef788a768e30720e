// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Primary pointer gesture states.
//!
//! ```text
//! Idle --press on empty canvas--> (node created) Dragging --release--> Idle
//! Idle --press on node----------> Dragging --release--> Idle
//! Idle --shift+press------------> DrawingLine --release--> Idle (+ line)
//! Idle --press in pan mode------> Panning --release--> Idle
//! Idle --double press on node---> EditingLabel --confirm/cancel--> Idle
//! Idle --color/format dialog----> Prompting --confirm/cancel--> Idle
//! ```
//!
//! `EditingLabel` and `Prompting` are modal: pointer and keyboard input is
//! ignored until the dialog is confirmed or cancelled.

use crate::model::NodeId;
use kurbo::{Point, Vec2};

/// Where the primary pointer gesture currently is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving a node; `origin` is its center when the press happened and
    /// `grab` the offset from the pointer to that center (canvas units)
    Dragging {
        id: NodeId,
        origin: Point,
        grab: Vec2,
    },
    /// Rubber-banding a new line (canvas units)
    DrawingLine { start: Point, current: Point },
    /// Moving the view; `last` is the previous pointer position (screen)
    Panning { last: Point },
    /// The label dialog is open for this node
    EditingLabel { id: NodeId },
    /// The color or format dialog is open for this node
    Prompting { id: NodeId },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// True while a dialog blocks other gestures
    pub fn is_modal(&self) -> bool {
        matches!(self, Gesture::EditingLabel { .. } | Gesture::Prompting { .. })
    }
}

/// A primary button press, already translated by the canvas widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    /// Position in screen (widget-local) coordinates
    pub position: Point,
    /// Shift held: start drawing a line
    pub shift: bool,
    /// Second press of a double press
    pub double: bool,
}

impl PointerPress {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            shift: false,
            double: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn as_double(mut self) -> Self {
        self.double = true;
        self
    }
}

/// What a press turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A new node was placed and selected
    NodeCreated(NodeId),
    /// An existing node was selected and can be dragged
    NodeGrabbed(NodeId),
    LineStarted,
    PanStarted,
    /// The label dialog should open for this node
    EditLabel(NodeId),
    /// A modal gesture is active; the press was dropped
    Ignored,
}
