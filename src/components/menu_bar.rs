// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Menu bar: File/Edit/View drop-downs, search field and status line

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use masonry::vello::peniko::Color;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, flex_row, label, sized_box};

use crate::data::{AppState, Menu};
use crate::theme;

/// Height of the row holding the menu titles and the search field
pub const MENU_BAR_HEIGHT: f64 = 36.0;

/// Height of the status line under the menu bar
pub const STATUS_BAR_HEIGHT: f64 = 22.0;

/// Width of a menu title button; drop-downs open under their title
pub const MENU_TITLE_WIDTH: f64 = 72.0;

const DROPDOWN_WIDTH: f64 = 160.0;
const SEARCH_WIDTH: f64 = 220.0;

/// A clickable entry in a drop-down or context menu
#[derive(Clone, Copy)]
pub struct MenuItem {
    pub label: &'static str,
    pub run: fn(&mut AppState),
}

const fn item(label: &'static str, run: fn(&mut AppState)) -> MenuItem {
    MenuItem { label, run }
}

const FILE_ITEMS: &[MenuItem] = &[
    item("New", AppState::new_map),
    item("Save", AppState::save),
    item("Load", AppState::load_dialog),
    item("Export PDF", AppState::export_pdf_dialog),
    item("Export Image", AppState::export_image_dialog),
    item("Export SVG", AppState::export_svg_dialog),
    item("Quit", AppState::quit),
];

const EDIT_ITEMS: &[MenuItem] = &[
    item("Undo", AppState::undo),
    item("Redo", AppState::redo),
];

const VIEW_ITEMS: &[MenuItem] = &[
    item("Dark Mode", AppState::toggle_dark_mode),
    item("Zoom In", AppState::zoom_in),
    item("Zoom Out", AppState::zoom_out),
    item("Pan", AppState::toggle_pan_mode),
    item("Auto Layout", AppState::auto_layout),
];

/// Entries of a drop-down menu, top to bottom
pub fn menu_items(menu: Menu) -> &'static [MenuItem] {
    match menu {
        Menu::File => FILE_ITEMS,
        Menu::Edit => EDIT_ITEMS,
        Menu::View => VIEW_ITEMS,
    }
}

/// Horizontal offset of a drop-down, so it opens under its title
pub fn dropdown_offset(menu: Menu) -> f64 {
    let index = Menu::ALL.iter().position(|m| *m == menu).unwrap_or(0);
    index as f64 * MENU_TITLE_WIDTH
}

/// Top bar: menu titles, search field, then the status line
pub fn menu_bar(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let titles: Vec<_> = Menu::ALL
        .iter()
        .map(|&menu| menu_title(menu, state.open_menu == Some(menu)))
        .collect();

    let search = sized_box(
        xilem::view::text_input(
            state.search_query.clone(),
            |state: &mut AppState, query| {
                state.set_search_query(query);
            },
        )
        .placeholder("Search nodes"),
    )
    .width(SEARCH_WIDTH.px());

    let status_color = match &state.status {
        Some(status) if status.is_error => theme::status::ERROR,
        _ => theme::status::TEXT,
    };

    flex_col((
        sized_box(
            flex_row((flex_row(titles).gap(0.px()), search))
                .gap(16.px())
                .cross_axis_alignment(CrossAxisAlignment::Center),
        )
        .expand_width()
        .height(MENU_BAR_HEIGHT.px())
        .background_color(theme::menu::BACKGROUND)
        .padding(Padding::from_vh(0.0, 4.0)),
        sized_box(
            label(state.status_text())
                .text_size(12.0)
                .color(status_color),
        )
        .expand_width()
        .height(STATUS_BAR_HEIGHT.px())
        .background_color(theme::panel::BACKGROUND)
        .padding(Padding::from_vh(2.0, 8.0)),
    ))
    .gap(0.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
}

fn menu_title(menu: Menu, is_open: bool) -> impl WidgetView<AppState> + use<> {
    let bg_color = if is_open {
        theme::panel::SEPARATOR
    } else {
        theme::menu::BACKGROUND
    };

    sized_box(
        button(
            label(menu.title())
                .text_size(14.0)
                .color(theme::menu::TEXT),
            move |state: &mut AppState| {
                state.toggle_menu(menu);
            },
        )
        .background_color(bg_color)
        .border_color(Color::TRANSPARENT),
    )
    .width(MENU_TITLE_WIDTH.px())
}

/// The open drop-down, as a floating panel
pub fn menu_dropdown(menu: Menu) -> impl WidgetView<AppState> + use<> {
    menu_panel(menu_items(menu), DROPDOWN_WIDTH)
}

/// Vertical list of menu entries in a bordered panel. Shared with the
/// context menu.
pub fn menu_panel(items: &'static [MenuItem], width: f64) -> impl WidgetView<AppState> + use<> {
    let buttons: Vec<_> = items.iter().map(|&entry| menu_entry(entry)).collect();

    sized_box(
        flex_col(buttons)
            .gap(0.px())
            .cross_axis_alignment(CrossAxisAlignment::Fill),
    )
    .width(width.px())
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.0)
    .corner_radius(theme::panel::RADIUS)
    .padding(Padding::from_vh(4.0, 0.0))
}

fn menu_entry(entry: MenuItem) -> impl WidgetView<AppState> + use<> {
    sized_box(
        button(
            label(entry.label)
                .text_size(13.0)
                .color(theme::menu::TEXT),
            move |state: &mut AppState| {
                state.run_menu_command(entry.run);
            },
        )
        .background_color(theme::panel::BACKGROUND)
        .border_color(Color::TRANSPARENT),
    )
    .expand_width()
    .padding(Padding::from_vh(1.0, 4.0))
}
