// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`, and
//! user-tunable values are read at startup by `config.rs`.

// ============================================================================
// NODE SETTINGS
// ============================================================================
/// Radius of every node (canvas units)
const NODE_RADIUS: f64 = 30.0;

/// Label given to freshly created nodes
const NODE_DEFAULT_LABEL: &str = "Idea";

// ============================================================================
// ZOOM SETTINGS
// ============================================================================
/// Zoom In menu command factor
const ZOOM_IN_STEP: f64 = 1.2;

/// Zoom Out menu command factor
const ZOOM_OUT_STEP: f64 = 0.8;

/// Mouse wheel factor (scroll up)
const WHEEL_IN_STEP: f64 = 1.1;

/// Mouse wheel factor (scroll down)
const WHEEL_OUT_STEP: f64 = 0.9;

/// Minimum zoom level (5% of original size)
const MIN_ZOOM: f64 = 0.05;

/// Maximum zoom level (20x original size)
const MAX_ZOOM: f64 = 20.0;

// ============================================================================
// GESTURE SETTINGS
// ============================================================================
/// Two presses within this time count as a double press
const DOUBLE_CLICK_TIME_MS: u128 = 500;

/// ...and within this distance (screen pixels)
const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

// ============================================================================
// PDF EXPORT SETTINGS
// ============================================================================
// US Letter in points. Node y is flipped against PAGE_FLIP_Y rather than the
// page height, which leaves a top margin of 42pt.
const PDF_PAGE_WIDTH: f64 = 612.0;
const PDF_PAGE_HEIGHT: f64 = 792.0;
const PDF_PAGE_FLIP_Y: f64 = 750.0;
const PDF_LABEL_RISE: f64 = 5.0;
const PDF_FONT_SIZE: f64 = 12.0;

// ============================================================================
// IMAGE EXPORT SETTINGS
// ============================================================================
/// Margin around the diagram bounds in SVG export (canvas units)
const SVG_MARGIN: f64 = 40.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Node geometry and defaults
pub mod node {
    /// Fixed radius of every node
    pub const RADIUS: f64 = super::NODE_RADIUS;

    /// Label given to freshly created nodes
    pub const DEFAULT_LABEL: &str = super::NODE_DEFAULT_LABEL;
}

/// Zoom steps and limits
pub mod zoom {
    pub const IN_STEP: f64 = super::ZOOM_IN_STEP;
    pub const OUT_STEP: f64 = super::ZOOM_OUT_STEP;
    pub const WHEEL_IN_STEP: f64 = super::WHEEL_IN_STEP;
    pub const WHEEL_OUT_STEP: f64 = super::WHEEL_OUT_STEP;
    pub const MIN: f64 = super::MIN_ZOOM;
    pub const MAX: f64 = super::MAX_ZOOM;
}

/// Pointer gesture thresholds
pub mod gesture {
    pub const DOUBLE_CLICK_TIME_MS: u128 = super::DOUBLE_CLICK_TIME_MS;
    pub const DOUBLE_CLICK_DISTANCE_PX: f64 = super::DOUBLE_CLICK_DISTANCE_PX;
}

/// PDF page layout
pub mod pdf {
    pub const PAGE_WIDTH: f64 = super::PDF_PAGE_WIDTH;
    pub const PAGE_HEIGHT: f64 = super::PDF_PAGE_HEIGHT;
    pub const PAGE_FLIP_Y: f64 = super::PDF_PAGE_FLIP_Y;
    pub const LABEL_RISE: f64 = super::PDF_LABEL_RISE;
    pub const FONT_SIZE: f64 = super::PDF_FONT_SIZE;
}

/// SVG and raster export
pub mod export {
    pub const SVG_MARGIN: f64 = super::SVG_MARGIN;
}
