// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/pick_size.rs
//
// Pick-size page: preset tabs, size/quality choices of the active tab,
// optional filename prefix, and the postpone checkbox.

use cosmic::iced::Length;
use cosmic::iced::widget::radio;
use cosmic::widget::{self, container, segmented_button, tab_bar, text_input};
use cosmic::Element;

use super::{action_row, margin_below};
use crate::app::message::{AppMessage, DialogMessage};
use crate::app::model::PickSizeState;
use crate::app::FNAME_PFX_INPUT;
use crate::constant::PAGE_SPACING;
use crate::layout::SizeSelection;

pub fn view<'a>(
    state: &'a PickSizeState,
    tabs: Option<&'a segmented_button::SingleSelectModel>,
) -> Element<'a, AppMessage> {
    let h = &state.handles;
    let mut page = widget::column().spacing(PAGE_SPACING);

    if let Some(model) = tabs {
        page = page.push(
            tab_bar::horizontal(model)
                .on_activate(AppMessage::TabActivated)
                .width(Length::Shrink),
        );
    }

    let selected = state
        .visible_choices()
        .find(|(_, c)| c.active)
        .map(|(index, _)| index);

    let choices = state.visible_choices().fold(
        widget::column().spacing(PAGE_SPACING / 2),
        |col, (index, choice)| {
            let label = choice.handle.label.as_str();
            match h.selection {
                SizeSelection::Exclusive => col.push(radio(label, index, selected, |i| {
                    AppMessage::Dialog(DialogMessage::ChoiceToggled(i, true))
                })),
                SizeSelection::Independent => col.push(
                    widget::checkbox(label, choice.active).on_toggle(move |on| {
                        AppMessage::Dialog(DialogMessage::ChoiceToggled(index, on))
                    }),
                ),
            }
        },
    );
    page = page.push(choices);

    page = page.push(
        container(
            widget::checkbox(h.fname_pfx_toggle.label.as_str(), state.prefix_enabled)
                .on_toggle(|on| AppMessage::Dialog(DialogMessage::FnamePrefixToggled(on))),
        )
        .padding(margin_below(state.prefix_entry.margin())),
    );

    if state.prefix_entry.visible {
        page = page.push(
            text_input(h.fname_pfx.placeholder.as_str(), state.prefix.as_str())
                .id(FNAME_PFX_INPUT.clone())
                .on_input(|value| AppMessage::Dialog(DialogMessage::FnamePrefixChanged(value))),
        );
    }

    page = page.push(
        widget::checkbox(h.postpone.label.as_str(), state.postpone)
            .on_toggle(|on| AppMessage::Dialog(DialogMessage::PostponeToggled(on))),
    );

    page.push(action_row(&h.accept, &h.cancel, state.can_accept()))
        .into()
}
