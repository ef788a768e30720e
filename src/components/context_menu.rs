// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Right-click menu for the selected node

use xilem::WidgetView;

use super::menu_bar::{MenuItem, menu_panel};
use crate::data::AppState;

const CONTEXT_MENU_WIDTH: f64 = 140.0;

const CONTEXT_ITEMS: &[MenuItem] = &[
    MenuItem { label: "Edit", run: AppState::open_label_dialog },
    MenuItem { label: "Delete", run: AppState::delete_selected },
    MenuItem { label: "Color", run: AppState::open_color_dialog },
    MenuItem { label: "Format Text", run: AppState::open_format_dialog },
    MenuItem { label: "Group", run: AppState::group_selected },
    MenuItem { label: "Ungroup", run: AppState::ungroup_last },
];

pub fn context_menu_items() -> &'static [MenuItem] {
    CONTEXT_ITEMS
}

/// The context menu panel; the caller positions it at the click
pub fn context_menu() -> impl WidgetView<AppState> + use<> {
    menu_panel(CONTEXT_ITEMS, CONTEXT_MENU_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dialog;
    use kurbo::Point;

    fn entry(name: &str) -> MenuItem {
        *context_menu_items()
            .iter()
            .find(|i| i.label == name)
            .unwrap()
    }

    #[test]
    fn entries_act_on_selected_node() {
        let mut state = AppState::default();
        let a = state.session.create_default_node(Point::new(50.0, 50.0));
        let b = state.session.create_default_node(Point::new(150.0, 50.0));

        state.session.selection.select(a);
        state.context_menu = Some(Point::new(50.0, 50.0));
        state.run_menu_command(entry("Color").run);
        assert!(state.context_menu.is_none());
        assert!(matches!(state.dialog, Some(Dialog::Color { .. })));
        state.cancel_dialog();

        state.run_menu_command(entry("Delete").run);
        assert!(state.session.diagram.node(a).is_none());
        assert!(state.session.diagram.node(b).is_some());
    }

    #[test]
    fn group_and_ungroup_entries() {
        let mut state = AppState::default();
        let a = state.session.create_default_node(Point::new(50.0, 50.0));
        state.session.selection.select(a);

        state.run_menu_command(entry("Group").run);
        assert_eq!(state.session.diagram.groups().len(), 1);
        state.run_menu_command(entry("Ungroup").run);
        assert!(state.session.diagram.groups().is_empty());
    }
}
