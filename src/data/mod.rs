// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the editor session, the open dialog, the status line and
//! window metadata. Every UI rebuild reads from `AppState`; mutations happen
//! in event callbacks. Sub-modules split the methods by domain: editing
//! commands and dialogs, and file I/O.

mod commands;
mod file_io;

use crate::config::EditorConfig;
use crate::editing::EditorSession;
use crate::model::NodeId;
use kurbo::{Point, Size};
use std::path::PathBuf;
use xilem::WindowId;

/// The modal prompt currently shown over the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// New label for a node; `text` is the field contents
    EditLabel { id: NodeId, text: String },
    /// New fill color for a node
    Color { id: NodeId, text: String },
    /// Label style for a node
    FormatText { id: NodeId },
}

/// Drop-down menus in the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Edit,
    View,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::File, Menu::Edit, Menu::View];

    pub fn title(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Edit => "Edit",
            Menu::View => "View",
        }
    }
}

/// One line of feedback under the menu bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// Local time the message was posted, "%I:%M %p"
    pub time: String,
}

/// Main application state
pub struct AppState {
    /// The editor session shown on the canvas
    pub session: EditorSession,

    /// Bumped whenever `session` changes outside the canvas widget
    pub revision: u64,

    /// Last size reported by the canvas, used for image export
    pub canvas_size: Size,

    /// Startup preferences
    pub config: EditorConfig,

    /// Open dialog, if any
    pub dialog: Option<Dialog>,

    /// Drop-down menu currently open in the menu bar
    pub open_menu: Option<Menu>,

    /// Context menu anchor (canvas-local), if the menu is open
    pub context_menu: Option<Point>,

    /// Contents of the search field
    pub search_query: String,

    /// Status line
    pub status: Option<StatusMessage>,

    /// File the diagram was last saved to or loaded from
    pub current_file: Option<PathBuf>,

    /// When the file was last saved (formatted time string for UI)
    pub last_saved: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            session: EditorSession::new(&config),
            revision: 0,
            canvas_size: Size::new(1280.0, 760.0),
            config,
            dialog: None,
            open_menu: None,
            context_menu: None,
            search_query: String::new(),
            status: None,
            current_file: None,
            last_saved: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Window title: file name and unsaved marker
    pub fn title(&self) -> String {
        match &self.current_file {
            Some(path) => format!(
                "HackMap - {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ),
            None => "HackMap".to_string(),
        }
    }

    /// Text for the status line
    pub fn status_text(&self) -> String {
        if let Some(status) = &self.status {
            return format!("[{}] {}", status.time, status.text);
        }
        let nodes = self.session.diagram.nodes().len();
        let mut text = format!("{nodes} nodes, zoom {:.0}%", self.session.viewport.zoom * 100.0);
        if self.session.pan_mode {
            text.push_str(", pan mode");
        }
        if let Some(saved) = &self.last_saved {
            text.push_str(&format!(", saved {saved}"));
        }
        text
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
