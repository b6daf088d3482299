// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and the dialogue app struct.

pub mod message;
pub mod model;
pub mod placement;
pub mod update;
mod view;

use std::sync::LazyLock;

use cosmic::app::Core;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::{Size, Subscription, window};
use cosmic::widget::{self, segmented_button, text_input};
use cosmic::{Action, ApplicationExt, Element, Task};

use self::message::{AppMessage, DialogMessage};
use self::model::{Focus, PageState, PickSizeState};
use self::placement::Placement;
use self::update::{Controller, Outcome};
use crate::config::RunConstants;
use crate::domain::{Page, TerminationSlot};
use crate::layout::PageHandles;
use crate::layout::description::WindowDescription;

/// Identifier of the filename-prefix entry, used to move focus to it.
pub static FNAME_PFX_INPUT: LazyLock<widget::Id> =
    LazyLock::new(|| widget::Id::new("entry_fname_pfx"));

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub struct Flags {
    pub handles: PageHandles,
    pub constants: RunConstants,
    pub title: String,
    pub slot: TerminationSlot,
}

/// Window settings for the page about to be shown.
pub fn settings(window: &WindowDescription, page: Page) -> cosmic::app::Settings {
    let size = if page == Page::Cropping {
        Size::new(window.overlay_width, window.overlay_height)
    } else {
        Size::new(window.width, window.height)
    };
    cosmic::app::Settings::default()
        .size(size)
        .exit_on_close(false)
}

pub struct DialogApp {
    core: Core,
    controller: Controller,
    tabs: Option<segmented_button::SingleSelectModel>,
    placement: Placement,
    slot: TerminationSlot,
}

impl cosmic::Application for DialogApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.nadeshiko.Dialogues";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let controller = Controller::new(flags.handles, &flags.constants);

        let tabs = match controller.state() {
            PageState::PickSize(state) => Some(tab_model(state)),
            _ => None,
        };
        let page = controller.page();

        let mut app = Self {
            core,
            controller,
            tabs,
            placement: Placement::default(),
            slot: flags.slot,
        };

        let mut tasks = Vec::new();
        if let Some(id) = app.core.main_window_id() {
            tasks.push(app.set_window_title(flags.title, id));

            // Stay out of the way of the crop tool: bottom-right, above others.
            if page == Page::Cropping {
                tasks.push(window::change_level(id, window::Level::AlwaysOnTop));
                tasks.push(
                    window::monitor_size(id)
                        .map(|size| Action::App(AppMessage::MonitorMeasured(size))),
                );
                tasks.push(
                    window::get_size(id).map(|size| Action::App(AppMessage::WindowMeasured(size))),
                );
            }
        }

        (app, Task::batch(tasks))
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        Some(AppMessage::Dialog(DialogMessage::CloseRequested))
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match message {
            AppMessage::Dialog(message) => self.dispatch(&message),

            AppMessage::TabActivated(entity) => {
                let Some(tabs) = self.tabs.as_mut() else {
                    return Task::none();
                };
                tabs.activate(entity);
                match tabs.data::<usize>(entity).copied() {
                    Some(index) => self.dispatch(&DialogMessage::TabSelected(index)),
                    None => Task::none(),
                }
            }

            AppMessage::MonitorMeasured(Some(size)) => {
                self.placement.set_monitor(size);
                self.place_overlay()
            }
            AppMessage::MonitorMeasured(None) => {
                log::warn!("Monitor size unknown, leaving the overlay where it is");
                Task::none()
            }
            AppMessage::WindowMeasured(size) => {
                self.placement.set_window(size);
                self.place_overlay()
            }
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.controller, self.tabs.as_ref())
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl DialogApp {
    /// Hand a message to the controller and turn its outcome into a task.
    fn dispatch(&mut self, message: &DialogMessage) -> Task<Action<AppMessage>> {
        match self.controller.update(message) {
            Outcome::Continue => Task::none(),
            Outcome::Focus(Focus::FnamePrefix) => text_input::focus(FNAME_PFX_INPUT.clone()),
            Outcome::Focus(_) => Task::none(),
            Outcome::Finish(termination) => {
                self.slot.fill(termination);
                cosmic::iced::exit()
            }
        }
    }

    fn place_overlay(&mut self) -> Task<Action<AppMessage>> {
        let (Some(id), Some(target)) = (self.core.main_window_id(), self.placement.take_target())
        else {
            return Task::none();
        };
        log::debug!("Moving the overlay to {target:?}");
        window::move_to(id, target)
    }
}

/// Tab bar model; each tab carries its index into the page's tab list.
fn tab_model(state: &PickSizeState) -> segmented_button::SingleSelectModel {
    let mut model = segmented_button::SingleSelectModel::default();
    for (index, tab) in state.handles.tabs.iter().enumerate() {
        let entity = model.insert().text(tab.label.clone()).data(index).id();
        if index == state.active_tab {
            model.activate(entity);
        }
    }
    model
}

/// Map key presses to dialogue messages. Enter accepts, Escape closes.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    let message = match key.as_ref() {
        Key::Named(Named::Enter) => DialogMessage::Accept,
        Key::Named(Named::Escape) => DialogMessage::CloseRequested,
        Key::Named(Named::ArrowUp | Named::ArrowLeft) => {
            DialogMessage::StepFocused { forward: false }
        }
        Key::Named(Named::ArrowDown | Named::ArrowRight) => {
            DialogMessage::StepFocused { forward: true }
        }
        Key::Named(Named::Space) => DialogMessage::ToggleFocused,
        _ => return None,
    };
    Some(AppMessage::Dialog(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_escape_are_terminal() {
        assert!(matches!(
            handle_key_press(Key::Named(Named::Enter), Modifiers::empty()),
            Some(AppMessage::Dialog(DialogMessage::Accept))
        ));
        assert!(matches!(
            handle_key_press(Key::Named(Named::Escape), Modifiers::empty()),
            Some(AppMessage::Dialog(DialogMessage::CloseRequested))
        ));
    }

    #[test]
    fn modified_keys_are_left_alone() {
        assert!(handle_key_press(Key::Named(Named::Enter), Modifiers::CTRL).is_none());
    }

    #[test]
    fn escape_on_the_cropping_overlay_leaves_the_marker() {
        let layout = crate::layout::embedded().unwrap();
        let constants = RunConstants {
            croptool_installed: true,
            tmpdir: std::path::PathBuf::from("/tmp/nadeshiko-escape"),
        };
        let handles = PageHandles::resolve(&layout, Page::Cropping).unwrap();
        let mut controller = Controller::new(handles, &constants);

        let Some(AppMessage::Dialog(message)) =
            handle_key_press(Key::Named(Named::Escape), Modifiers::empty())
        else {
            panic!("Escape should map to a dialogue message");
        };
        let Outcome::Finish(termination) = controller.update(&message) else {
            panic!("Escape should end the run");
        };
        assert_eq!(termination.status, crate::domain::ExitStatus::Cancelled);
        assert_eq!(
            termination.marker,
            Some(constants.tmpdir.join(crate::constant::CROPTOOL_CANCELLED_MARKER))
        );
        assert!(termination.report.is_empty());
    }
}
