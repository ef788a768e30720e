// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor view - menu bar over the canvas, with floating menus and dialogs

use masonry::properties::types::{AsUnit, UnitPoint};
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::view::{
    ChildAlignment, CrossAxisAlignment, FlexExt, ZStackExt, flex_col, label, transformed,
    zstack,
};

use crate::components::{
    MENU_BAR_HEIGHT, STATUS_BAR_HEIGHT, canvas_view, context_menu, dialog_view,
    dropdown_offset, menu_bar, menu_dropdown,
};
use crate::data::AppState;

/// Distance from the window top to the canvas origin
const CANVAS_TOP: f64 = MENU_BAR_HEIGHT + STATUS_BAR_HEIGHT;

/// Main window content
pub fn editor_view(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let dropdown_x = state.open_menu.map_or(0.0, dropdown_offset);
    let menu_anchor = state.context_menu.unwrap_or_default();

    // Use zstack to layer menus and dialogs over the canvas
    zstack((
        flex_col((
            menu_bar(state),
            canvas_view(
                state.session.clone(),
                state.revision,
                |state: &mut AppState, update| {
                    state.apply_canvas_update(update);
                },
            )
            .flex(1.0),
        ))
        .gap(0.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill),
        // Open drop-down, under its title
        transformed(match state.open_menu {
            Some(menu) => Either::A(menu_dropdown(menu)),
            None => Either::B(label("")),
        })
        .translate((dropdown_x, MENU_BAR_HEIGHT))
        .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP_LEFT)),
        // Context menu at the right-click position
        transformed(match state.context_menu {
            Some(_) => Either::A(context_menu()),
            None => Either::B(label("")),
        })
        .translate((menu_anchor.x, menu_anchor.y + CANVAS_TOP))
        .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP_LEFT)),
        // Modal dialog, centered
        transformed(match &state.dialog {
            Some(dialog) => Either::A(dialog_view(dialog)),
            None => Either::B(label("")),
        })
        .alignment(ChildAlignment::SelfAligned(UnitPoint::CENTER)),
    ))
}
