// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for CanvasWidget

use super::{CanvasRequest, CanvasWidget};
use crate::editing::{PointerPress, PressOutcome};
use crate::settings;
use kurbo::Point;
use masonry::core::{EventCtx, PointerState, ScrollDelta};
use std::time::Instant;

impl CanvasWidget {
    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.capture_pointer();

        let local_pos = ctx.local_position(state.position);
        let mut press = PointerPress::at(local_pos);
        if state.modifiers.shift() {
            press = press.with_shift();
        }
        if self.is_double_click(local_pos) {
            press = press.as_double();
        }

        let outcome = self.session.pointer_down(press);
        tracing::debug!("[CanvasWidget] Down at {:?} -> {:?}", local_pos, outcome);

        let request = match outcome {
            PressOutcome::Ignored => return,
            PressOutcome::EditLabel(id) => Some(CanvasRequest::EditLabel(id)),
            _ => Some(CanvasRequest::DismissMenu),
        };
        self.emit_session_update(ctx, request);
        ctx.request_render();
    }

    /// Right click: select what is under the pointer and open the context
    /// menu if a node is selected
    pub(super) fn handle_context_click(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        if self.session.gesture.is_modal() {
            return;
        }
        let local_pos = ctx.local_position(state.position);
        let request = match self.session.context_menu_at(local_pos) {
            Some(_) => CanvasRequest::ContextMenu(local_pos),
            None => CanvasRequest::DismissMenu,
        };
        self.emit_session_update(ctx, Some(request));
        ctx.request_render();
        ctx.set_handled();
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        let local_pos = ctx.local_position(current.position);
        if self.session.pointer_move(local_pos) {
            ctx.request_render();
        }
    }

    pub(super) fn handle_pointer_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        if self.session.gesture.is_modal() {
            return;
        }
        let local_pos = ctx.local_position(state.position);
        self.session.pointer_up(local_pos);
        self.emit_session_update(ctx, None);
        ctx.request_render();
    }

    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        self.session.pointer_cancel();
        self.emit_session_update(ctx, None);
        ctx.request_render();
    }

    /// Wheel zoom around the pointer
    pub(super) fn handle_scroll_zoom(
        &mut self,
        ctx: &mut EventCtx<'_>,
        delta: &ScrollDelta,
        state: &PointerState,
    ) {
        // Negative y = scroll up = zoom in
        let scroll_y = match delta {
            ScrollDelta::LineDelta(_x, y) => *y,
            ScrollDelta::PixelDelta(pos) => (pos.y / 10.0) as f32,
            ScrollDelta::PageDelta(_x, y) => *y * 3.0,
        };

        if scroll_y.abs() < 0.001 {
            return;
        }

        let anchor = ctx.local_position(state.position);
        self.session.zoom_wheel(anchor, scroll_y < 0.0);
        tracing::debug!("Scroll zoom: new zoom={:.2}", self.session.viewport.zoom);

        self.emit_session_update(ctx, None);
        ctx.request_render();
    }

    /// Whether this press completes a double press
    fn is_double_click(&mut self, position: Point) -> bool {
        let now = Instant::now();

        let is_double = match (self.last_click_time, self.last_click_position) {
            (Some(last_time), Some(last_pos)) => {
                now.duration_since(last_time).as_millis() < settings::gesture::DOUBLE_CLICK_TIME_MS
                    && (position - last_pos).hypot() < settings::gesture::DOUBLE_CLICK_DISTANCE_PX
            }
            _ => false,
        };

        if is_double {
            // Start fresh so a third press is not another double
            self.last_click_time = None;
            self.last_click_position = None;
        } else {
            self.last_click_time = Some(now);
            self.last_click_position = Some(position);
        }

        is_double
    }
}
