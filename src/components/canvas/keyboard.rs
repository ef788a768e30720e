// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard shortcuts for CanvasWidget

use super::{CanvasRequest, CanvasWidget};
use masonry::core::EventCtx;
use masonry::core::keyboard::{Key, NamedKey};

impl CanvasWidget {
    /// Returns true if the key was handled
    pub(super) fn handle_keyboard_shortcuts(
        &mut self,
        ctx: &mut EventCtx<'_>,
        key: &Key,
        cmd: bool,
        shift: bool,
    ) -> bool {
        // The label dialog owns the keyboard while it is open
        if self.session.gesture.is_modal() {
            return false;
        }

        let request = if self.handle_undo_redo(cmd, shift, key) {
            None
        } else if cmd && is_char(key, "s") {
            Some(CanvasRequest::Save)
        } else if self.handle_zoom_keys(key) {
            None
        } else if matches!(key, Key::Named(NamedKey::Backspace | NamedKey::Delete)) {
            if !self.session.delete_selected() {
                return false;
            }
            None
        } else if matches!(key, Key::Named(NamedKey::Escape)) {
            self.session.pointer_cancel();
            Some(CanvasRequest::DismissMenu)
        } else {
            return false;
        };

        self.emit_session_update(ctx, request);
        ctx.request_render();
        ctx.set_handled();
        true
    }

    /// Cmd+Z undoes; Cmd+Shift+Z and Cmd+Y redo
    fn handle_undo_redo(&mut self, cmd: bool, shift: bool, key: &Key) -> bool {
        if !cmd {
            return false;
        }
        if is_char(key, "z") {
            if shift {
                self.session.redo();
            } else {
                self.session.undo();
            }
            true
        } else if is_char(key, "y") {
            self.session.redo();
            true
        } else {
            false
        }
    }

    fn handle_zoom_keys(&mut self, key: &Key) -> bool {
        if is_char(key, "+") || is_char(key, "=") {
            self.session.zoom_in();
            true
        } else if is_char(key, "-") {
            self.session.zoom_out();
            true
        } else {
            false
        }
    }
}

/// Case-insensitive match, since Shift turns "z" into "Z"
fn is_char(key: &Key, expected: &str) -> bool {
    matches!(key, Key::Character(c) if c.eq_ignore_ascii_case(expected))
}
