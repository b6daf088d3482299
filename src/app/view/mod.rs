// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Render the page being shown. Hidden widgets are simply not emitted.

mod crop;
mod cropping;
mod pick_size;
mod socket;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, segmented_button};
use cosmic::Element;

use crate::app::message::{AppMessage, DialogMessage};
use crate::app::model::PageState;
use crate::app::update::Controller;
use crate::constant::{PAGE_PADDING, PAGE_SPACING};
use crate::layout::handles::Button;

/// Render the active page.
pub fn view<'a>(
    controller: &'a Controller,
    tabs: Option<&'a segmented_button::SingleSelectModel>,
) -> Element<'a, AppMessage> {
    let body = match controller.state() {
        PageState::ChooseSocket(s) => socket::view(s),
        PageState::CropAndPredictor(s) => crop::view(s),
        PageState::Cropping(s) => cropping::view(s),
        PageState::PickSize(s) => pick_size::view(s, tabs),
    };

    let mut page = widget::column().spacing(PAGE_SPACING);
    if let Some(title) = controller.state().title() {
        page = page.push(widget::text::title4(title));
    }

    container(page.push(body))
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Cancel on the left, the page's accept button on the right.
fn action_row<'a>(
    accept: &'a Button,
    cancel: &'a Button,
    can_accept: bool,
) -> Element<'a, AppMessage> {
    let cancel = button::standard(cancel.label.as_str())
        .on_press(AppMessage::Dialog(DialogMessage::Cancel));
    let accept = button::suggested(accept.label.as_str()).on_press_maybe(
        (accept.sensitive && can_accept).then_some(AppMessage::Dialog(DialogMessage::Accept)),
    );

    widget::row()
        .push(widget::horizontal_space())
        .push(cancel)
        .push(accept)
        .spacing(PAGE_SPACING)
        .align_y(Alignment::Center)
        .into()
}

/// Bottom padding under a checkbox gating a group: `[top, right, bottom, left]`.
fn margin_below(margin: u16) -> [u16; 4] {
    [0, 0, margin, 0]
}
