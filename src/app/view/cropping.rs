// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/cropping.rs
//
// Cropping overlay: a note only, the window itself is the control.

use cosmic::iced::Length;
use cosmic::widget::{container, text};
use cosmic::Element;

use crate::app::message::AppMessage;
use crate::app::model::CroppingState;

pub fn view(state: &CroppingState) -> Element<'_, AppMessage> {
    container(text::body(state.handles.note.text.as_str()))
        .width(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
