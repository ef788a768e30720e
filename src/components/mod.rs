// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the HackMap mind-map editor

pub mod canvas;
pub mod context_menu;
pub mod dialogs;
pub mod menu_bar;

// Re-export commonly used widget views and types
pub use canvas::{CanvasRequest, SessionUpdate, canvas_view};
pub use context_menu::context_menu;
pub use dialogs::dialog_view;
pub use menu_bar::{MENU_BAR_HEIGHT, STATUS_BAR_HEIGHT, dropdown_offset, menu_bar, menu_dropdown};
