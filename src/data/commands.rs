// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing commands, menus and dialogs for AppState

use super::{AppState, Dialog, Menu, StatusMessage};
use crate::components::{CanvasRequest, SessionUpdate};
use crate::model::TextStyle;
use chrono::Local;

impl AppState {
    /// Mark the session as changed outside the canvas
    pub(super) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            time: Local::now().format("%I:%M %p").to_string(),
        });
    }

    pub(super) fn set_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::error!("{}", text);
        self.status = Some(StatusMessage {
            text,
            is_error: true,
            time: Local::now().format("%I:%M %p").to_string(),
        });
    }

    // ===== Canvas =====

    /// Take over the session edited by the canvas and act on its request
    pub fn apply_canvas_update(&mut self, update: SessionUpdate) {
        self.session = update.session;
        self.canvas_size = update.canvas_size;
        self.status = None;
        self.open_menu = None;

        match update.request {
            Some(CanvasRequest::Save) => self.save(),
            Some(CanvasRequest::EditLabel(id)) => {
                let text = self
                    .session
                    .diagram
                    .node(id)
                    .map(|n| n.label.clone())
                    .unwrap_or_default();
                self.context_menu = None;
                self.dialog = Some(Dialog::EditLabel { id, text });
            }
            Some(CanvasRequest::ContextMenu(position)) => {
                self.context_menu = Some(position);
            }
            Some(CanvasRequest::DismissMenu) => {
                self.context_menu = None;
            }
            None => {}
        }
    }

    // ===== Menu bar =====

    /// Open `menu`, or close it if it is already open
    pub fn toggle_menu(&mut self, menu: Menu) {
        self.context_menu = None;
        self.open_menu = if self.open_menu == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    /// Run a menu entry: close all menus first
    pub fn run_menu_command(&mut self, command: fn(&mut AppState)) {
        self.open_menu = None;
        self.context_menu = None;
        command(self);
    }

    // ===== Edit menu =====

    pub fn undo(&mut self) {
        match self.session.undo() {
            Some(name) => self.set_status(format!("Undid {name}")),
            None => self.set_status("Nothing to undo"),
        }
        self.touch();
    }

    pub fn redo(&mut self) {
        match self.session.redo() {
            Some(name) => self.set_status(format!("Redid {name}")),
            None => self.set_status("Nothing to redo"),
        }
        self.touch();
    }

    // ===== View menu =====

    pub fn toggle_dark_mode(&mut self) {
        self.session.toggle_dark_mode();
        self.touch();
    }

    pub fn zoom_in(&mut self) {
        self.session.zoom_in();
        self.touch();
    }

    pub fn zoom_out(&mut self) {
        self.session.zoom_out();
        self.touch();
    }

    pub fn toggle_pan_mode(&mut self) {
        self.session.toggle_pan_mode();
        self.touch();
    }

    pub fn auto_layout(&mut self) {
        self.session.auto_layout();
        self.set_status("Auto layout is not available");
    }

    // ===== Search =====

    pub fn set_search_query(&mut self, query: String) {
        if query.is_empty() {
            self.session.clear_highlight();
            self.status = None;
        } else {
            let matches = self.session.search_highlight(&query);
            self.set_status(format!("{matches} matching nodes"));
        }
        self.search_query = query;
        self.touch();
    }

    // ===== Context menu =====

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    /// Context menu Edit: ask for a new label
    pub fn open_label_dialog(&mut self) {
        self.context_menu = None;
        let Some(node) = self.session.selected_node() else {
            return;
        };
        let (id, text) = (node.id, node.label.clone());
        if self.session.begin_label_edit() {
            self.dialog = Some(Dialog::EditLabel { id, text });
            self.touch();
        }
    }

    /// Context menu Color: ask for a CSS color
    pub fn open_color_dialog(&mut self) {
        self.context_menu = None;
        let Some(text) = self
            .session
            .selected_node()
            .map(|node| node.fill.as_str().to_string())
        else {
            return;
        };
        if let Some(id) = self.session.begin_prompt() {
            self.dialog = Some(Dialog::Color { id, text });
            self.touch();
        }
    }

    /// Context menu Format Text: ask for a style
    pub fn open_format_dialog(&mut self) {
        self.context_menu = None;
        if let Some(id) = self.session.begin_prompt() {
            self.dialog = Some(Dialog::FormatText { id });
            self.touch();
        }
    }

    pub fn delete_selected(&mut self) {
        self.context_menu = None;
        if self.session.delete_selected() {
            self.touch();
        }
    }

    pub fn group_selected(&mut self) {
        self.context_menu = None;
        if let Some(id) = self.session.group_selected() {
            let size = self
                .session
                .diagram
                .groups()
                .last()
                .map_or(0, |g| g.members.len());
            self.set_status(format!("Created {id} with {size} nodes"));
            self.touch();
        }
    }

    pub fn ungroup_last(&mut self) {
        self.context_menu = None;
        match self.session.ungroup_last() {
            Some(group) => self.set_status(format!("Removed {}", group.id)),
            None => self.set_status("No groups to remove"),
        }
        self.touch();
    }

    // ===== Dialogs =====

    /// Keep the dialog's text field in sync
    pub fn set_dialog_text(&mut self, value: String) {
        match &mut self.dialog {
            Some(Dialog::EditLabel { text, .. } | Dialog::Color { text, .. }) => *text = value,
            Some(Dialog::FormatText { .. }) | None => {}
        }
    }

    /// OK on the label or color dialog
    pub fn confirm_dialog(&mut self) {
        match self.dialog.take() {
            Some(Dialog::EditLabel { text, .. }) => {
                self.session.finish_label_edit(Some(&text));
            }
            Some(Dialog::Color { id, text }) => {
                self.session.finish_prompt();
                if let Err(e) = self.session.recolor_node(id, &text) {
                    self.set_error(e.to_string());
                }
            }
            Some(Dialog::FormatText { .. }) | None => {}
        }
        self.touch();
    }

    /// Pick a style in the format dialog
    pub fn choose_format(&mut self, style: TextStyle) {
        if let Some(Dialog::FormatText { id }) = self.dialog {
            self.dialog = None;
            self.session.finish_prompt();
            self.session.format_node(id, style);
            self.touch();
        }
    }

    /// Cancel or close any dialog; the model is left as it was
    pub fn cancel_dialog(&mut self) {
        match self.dialog.take() {
            Some(Dialog::EditLabel { .. }) => {
                self.session.finish_label_edit(None);
            }
            Some(Dialog::Color { .. } | Dialog::FormatText { .. }) => {
                self.session.finish_prompt();
            }
            None => {}
        }
        self.touch();
    }
}
