// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop.rs
//
// Crop-and-predictor page: crop checkbox with its settings panel, predictor
// switch, and the pick/install actions.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text, text_input, toggler};
use cosmic::Element;

use super::{action_row, margin_below};
use crate::app::message::{AppMessage, DialogMessage};
use crate::app::model::{CropField, CropState};
use crate::constant::PAGE_SPACING;
use crate::layout::handles::Entry;

pub fn view(state: &CropState) -> Element<'_, AppMessage> {
    let h = &state.handles;

    let crop_toggle = container(
        widget::checkbox(h.crop.label.as_str(), state.crop_enabled)
            .on_toggle(|on| AppMessage::Dialog(DialogMessage::CropToggled(on))),
    )
    .padding(margin_below(state.settings.margin()));

    let mut page = widget::column().push(crop_toggle).spacing(PAGE_SPACING);

    if state.settings.visible {
        page = page.push(settings_panel(state));
    }

    page = page.push(
        widget::row()
            .push(text::body(h.predictor.label.as_str()))
            .push(widget::horizontal_space())
            .push(
                toggler(state.predictor)
                    .on_toggle(|on| AppMessage::Dialog(DialogMessage::PredictorToggled(on))),
            )
            .align_y(Alignment::Center),
    );

    page.push(action_row(&h.accept, &h.cancel, true)).into()
}

fn settings_panel(state: &CropState) -> Element<'_, AppMessage> {
    let h = &state.handles;

    let fields = [
        (CropField::Width, &h.width),
        (CropField::Height, &h.height),
        (CropField::X, &h.x),
        (CropField::Y, &h.y),
    ]
    .into_iter()
    .fold(widget::row().spacing(PAGE_SPACING), |row, (field, entry)| {
        row.push(dimension_input(state, field, entry))
    });

    let mut panel = widget::column().spacing(PAGE_SPACING);
    if let Some(label) = &h.crop_settings.label {
        panel = panel.push(text::caption(label.as_str()));
    }
    panel = panel.push(fields);

    if state.pick_visible {
        panel = panel.push(
            button::standard(h.pick.label.as_str()).on_press_maybe(
                h.pick
                    .sensitive
                    .then_some(AppMessage::Dialog(DialogMessage::PickCropDimensions)),
            ),
        );
    }

    if state.install_visible {
        let mut group = widget::row().spacing(PAGE_SPACING).align_y(Alignment::Center);
        if let Some(label) = &h.install_group.label {
            group = group.push(text::caption(label.as_str()));
        }
        panel = panel.push(
            group.push(
                button::link(h.install.label.as_str())
                    .on_press(AppMessage::Dialog(DialogMessage::InstallCroptool)),
            ),
        );
    }

    container(panel).width(Length::Fill).into()
}

fn dimension_input<'a>(
    state: &'a CropState,
    field: CropField,
    entry: &'a Entry,
) -> Element<'a, AppMessage> {
    let input = text_input(entry.placeholder.as_str(), state.dimension(field))
        .on_input(move |value| AppMessage::Dialog(DialogMessage::CropFieldChanged(field, value)))
        .width(Length::Fixed(72.0));

    match &entry.label {
        Some(label) => widget::column()
            .push(text::caption(label.as_str()))
            .push(input)
            .spacing(4)
            .into(),
        None => input.into(),
    }
}
