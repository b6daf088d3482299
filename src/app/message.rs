// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: user actions on the dialogue and window events.

use cosmic::iced::Size;
use cosmic::widget::segmented_button;

use super::model::CropField;

/// User intent, handled by the dialogue controller.
#[derive(Debug, Clone)]
pub enum DialogMessage {
    // Terminal actions.
    Accept,
    Cancel,
    CloseRequested,

    // Keyboard routing to the focused widget.
    StepFocused { forward: bool },
    ToggleFocused,

    // Choose socket.
    SocketSelected(usize),

    // Crop and predictor.
    CropToggled(bool),
    CropFieldChanged(CropField, String),
    PredictorToggled(bool),
    PickCropDimensions,
    InstallCroptool,

    // Pick size.
    TabSelected(usize),
    ChoiceToggled(usize, bool),
    FnamePrefixToggled(bool),
    FnamePrefixChanged(String),
    PostponeToggled(bool),
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    Dialog(DialogMessage),

    // Preset tab bar, translated to `DialogMessage::TabSelected`.
    TabActivated(segmented_button::Entity),

    // Overlay placement.
    MonitorMeasured(Option<Size>),
    WindowMeasured(Size),
}
