// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Modal prompts: node label, node color and text style

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use masonry::vello::peniko::Color;
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, flex_row, label, sized_box};

use crate::data::{AppState, Dialog};
use crate::model::TextStyle;
use crate::theme;

const DIALOG_WIDTH: f64 = 300.0;

/// Styles offered by the format dialog, in button order
pub const FORMAT_CHOICES: [(&str, TextStyle); 4] = [
    ("Bold", TextStyle::Bold),
    ("Italic", TextStyle::Italic),
    ("Underline", TextStyle::Underline),
    ("Plain", TextStyle::Plain),
];

/// The panel for an open dialog
pub fn dialog_view(dialog: &Dialog) -> impl WidgetView<AppState> + use<> {
    let body = match dialog {
        Dialog::EditLabel { text, .. } => Either::A(text_prompt("Edit node label", text.clone(), "Label")),
        Dialog::Color { text, .. } => Either::A(text_prompt(
            "Node color (name or #rrggbb)",
            text.clone(),
            "Color",
        )),
        Dialog::FormatText { .. } => Either::B(format_prompt()),
    };

    sized_box(body)
        .width(DIALOG_WIDTH.px())
        .background_color(theme::panel::BACKGROUND)
        .border_color(theme::panel::OUTLINE)
        .border_width(1.5)
        .corner_radius(theme::panel::RADIUS)
        .padding(Padding::from_vh(12.0, 12.0))
}

fn text_prompt(
    title: &'static str,
    value: String,
    placeholder: &'static str,
) -> impl WidgetView<AppState> + use<> {
    flex_col((
        dialog_title(title),
        xilem::view::text_input(value, |state: &mut AppState, new_value| {
            state.set_dialog_text(new_value);
        })
        .placeholder(placeholder),
        flex_row((
            dialog_button("OK", |state: &mut AppState| state.confirm_dialog()),
            dialog_button("Cancel", |state: &mut AppState| state.cancel_dialog()),
        ))
        .gap(8.px()),
    ))
    .gap(8.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
}

fn format_prompt() -> impl WidgetView<AppState> + use<> {
    let choices: Vec<_> = FORMAT_CHOICES
        .iter()
        .map(|&(name, style)| {
            dialog_button(name, move |state: &mut AppState| state.choose_format(style))
        })
        .collect();

    flex_col((
        dialog_title("Format text"),
        flex_row(choices).gap(6.px()),
        dialog_button("Cancel", |state: &mut AppState| state.cancel_dialog()),
    ))
    .gap(8.px())
    .cross_axis_alignment(CrossAxisAlignment::Start)
}

fn dialog_title(title: &'static str) -> impl WidgetView<AppState> + use<> {
    label(title).text_size(14.0).color(theme::menu::TEXT)
}

fn dialog_button(
    name: &'static str,
    on_click: impl Fn(&mut AppState) + Send + Sync + 'static,
) -> impl WidgetView<AppState> {
    button(
        label(name).text_size(13.0).color(theme::panel::INPUT_TEXT),
        on_click,
    )
    .background_color(theme::menu::BACKGROUND)
    .border_color(Color::TRANSPARENT)
}
