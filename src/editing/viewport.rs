// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Zoom and pan transform between screen and canvas coordinates.
//!
//! `screen = canvas * zoom + offset`. The diagram itself always stays in
//! canvas coordinates, so zooming never rewrites node positions.

use crate::settings;
use kurbo::{Affine, Point, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    pub zoom: f64,
    pub offset: Vec2,
}

impl Default for ViewPort {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas to screen transform
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    pub fn to_screen(&self, canvas: Point) -> Point {
        self.affine() * canvas
    }

    pub fn to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    /// Scale by `factor` keeping the canvas point under `anchor` (screen
    /// coordinates) fixed
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        let canvas = self.to_canvas(anchor);
        self.zoom = (self.zoom * factor).clamp(settings::zoom::MIN, settings::zoom::MAX);
        self.offset = anchor.to_vec2() - canvas.to_vec2() * self.zoom;
    }

    /// Menu Zoom In: scale about the top-left corner of the view
    pub fn zoom_in(&mut self) {
        self.zoom_about(Point::ZERO, settings::zoom::IN_STEP);
    }

    /// Menu Zoom Out: scale about the top-left corner of the view
    pub fn zoom_out(&mut self) {
        self.zoom_about(Point::ZERO, settings::zoom::OUT_STEP);
    }

    /// Shift the view by a screen-space delta
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}
