// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! UI colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB).
//! Diagram defaults are CSS strings because they end up inside nodes and
//! are written to diagram files verbatim.

use crate::model::ColorSpec;
use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x1e, 0x1e, 0x1e);
const BASE_B: Color = Color::from_rgb8(0x2d, 0x2d, 0x2d);
const BASE_C: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_D: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_E: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// Hacker green
const NEON: Color = Color::from_rgb8(0x00, 0xff, 0x00);

// ============================================================================
// MENUS AND PANELS
// ============================================================================
const MENU_BACKGROUND: Color = BASE_B;
const MENU_TEXT: Color = NEON;
const PANEL_BACKGROUND: Color = BASE_A;
const PANEL_OUTLINE: Color = NEON;
const STATUS_TEXT: Color = BASE_D;
const ERROR_TEXT: Color = Color::from_rgb8(0xff, 0x55, 0x55);

// ============================================================================
// CANVAS
// ============================================================================
const DARK_BACKGROUND: &str = "#1e1e1e";
const DARK_NODE_FILL: &str = "#00ff00";
const DARK_OUTLINE: &str = "#000000";
const DARK_LINE: &str = "#00ff00";

const LIGHT_BACKGROUND: &str = "white";
const LIGHT_NODE_FILL: &str = "lightblue";
const LIGHT_OUTLINE: &str = "black";
const LIGHT_LINE: &str = "black";

/// Label color of nodes matching the current search
const HIGHLIGHT_TEXT: &str = "red";

/// Rubber band shown while drawing a line
const LINE_PREVIEW: Color = BASE_D;

/// Ring around the selected node
const SELECTION_RING: Color = Color::from_rgb8(0xff, 0xaa, 0x33);

// ============================================================================
// SIZES
// ============================================================================
const NODE_OUTLINE_WIDTH: f64 = 1.0;
const LINE_WIDTH: f64 = 1.0;
const SELECTION_RING_WIDTH: f64 = 2.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const PANEL_RADIUS: f64 = 6.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Dark (default) or light canvas palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Canvas background as a CSS color
    pub fn background(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_BACKGROUND,
            ThemeMode::Light => LIGHT_BACKGROUND,
        }
    }

    /// Fill given to new nodes
    pub fn node_fill(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_NODE_FILL,
            ThemeMode::Light => LIGHT_NODE_FILL,
        }
    }

    /// Node outline and label color
    pub fn outline(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_OUTLINE,
            ThemeMode::Light => LIGHT_OUTLINE,
        }
    }

    /// Connector lines; neon in the dark palette so they stand out from
    /// the background
    pub fn line(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_LINE,
            ThemeMode::Light => LIGHT_LINE,
        }
    }

    pub fn line_spec(self) -> ColorSpec {
        palette_color(self.line())
    }

    pub fn node_fill_spec(self) -> ColorSpec {
        palette_color(self.node_fill())
    }

    pub fn outline_spec(self) -> ColorSpec {
        palette_color(self.outline())
    }

    pub fn background_spec(self) -> ColorSpec {
        palette_color(self.background())
    }
}

/// Label color of nodes matching the search
pub fn highlight_spec() -> ColorSpec {
    palette_color(HIGHLIGHT_TEXT)
}

fn palette_color(spec: &'static str) -> ColorSpec {
    ColorSpec::parse(spec).expect("palette colors are valid CSS colors")
}

/// Menu bar and context menu
pub mod menu {
    use super::Color;
    pub const BACKGROUND: Color = super::MENU_BACKGROUND;
    pub const TEXT: Color = super::MENU_TEXT;
}

/// Floating panels (dialogs, context menu)
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    pub const RADIUS: f64 = super::PANEL_RADIUS;
    pub const SEPARATOR: Color = super::BASE_C;
    pub const INPUT_TEXT: Color = super::BASE_E;
}

/// Status line
pub mod status {
    use super::Color;
    pub const TEXT: Color = super::STATUS_TEXT;
    pub const ERROR: Color = super::ERROR_TEXT;
}

/// Canvas drawing
pub mod canvas {
    use super::Color;
    pub const HIGHLIGHT_TEXT: &str = super::HIGHLIGHT_TEXT;
    pub const LINE_PREVIEW: Color = super::LINE_PREVIEW;
    pub const SELECTION_RING: Color = super::SELECTION_RING;
}

/// Stroke widths and font sizes
pub mod size {
    pub const NODE_OUTLINE_WIDTH: f64 = super::NODE_OUTLINE_WIDTH;
    pub const LINE_WIDTH: f64 = super::LINE_WIDTH;
    pub const SELECTION_RING_WIDTH: f64 = super::SELECTION_RING_WIDTH;
    pub const LABEL_FONT_SIZE: f32 = super::LABEL_FONT_SIZE;
}
