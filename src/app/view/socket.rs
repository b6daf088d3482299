// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/socket.rs
//
// Choose-socket page: two radio choices.

use cosmic::iced::widget::radio;
use cosmic::widget;
use cosmic::Element;

use super::action_row;
use crate::app::message::{AppMessage, DialogMessage};
use crate::app::model::SocketState;
use crate::constant::PAGE_SPACING;

pub fn view(state: &SocketState) -> Element<'_, AppMessage> {
    let choices = state
        .handles
        .choices()
        .into_iter()
        .enumerate()
        .fold(widget::column().spacing(PAGE_SPACING), |col, (index, socket)| {
            col.push(radio(
                socket.label.as_str(),
                index,
                Some(state.selected),
                |i| AppMessage::Dialog(DialogMessage::SocketSelected(i)),
            ))
        });

    widget::column()
        .push(choices)
        .push(action_row(
            &state.handles.accept,
            &state.handles.cancel,
            true,
        ))
        .spacing(PAGE_SPACING * 2)
        .into()
}
