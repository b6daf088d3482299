// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Dialogue controller: applies messages to the page state and decides when
// the run ends. Never touches the process; `main` performs the exit.

use std::path::PathBuf;

use super::message::DialogMessage;
use super::model::{Focus, PageState};
use crate::config::RunConstants;
use crate::domain::{CropChoice, Page, Termination};
use crate::layout::PageHandles;

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Keep running and move keyboard focus.
    Focus(Focus),
    Finish(Termination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    PageShown,
    Terminated,
}

pub struct Controller {
    state: PageState,
    focus: Option<Focus>,
    tmpdir: PathBuf,
    lifecycle: Lifecycle,
}

impl Controller {
    pub fn new(handles: PageHandles, constants: &RunConstants) -> Self {
        let state = PageState::new(handles, constants);
        let focus = state.initial_focus();
        log::info!("Showing page {}", state.page());
        Self {
            state,
            focus,
            tmpdir: constants.tmpdir.clone(),
            lifecycle: Lifecycle::PageShown,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn page(&self) -> Page {
        self.state.page()
    }

    pub fn update(&mut self, message: &DialogMessage) -> Outcome {
        if self.lifecycle == Lifecycle::Terminated {
            log::debug!("Ignoring {message:?} after termination");
            return Outcome::Continue;
        }

        let outcome = self.apply(message);
        if let Outcome::Finish(termination) = &outcome {
            log::info!(
                "Finishing page {} with status {:?}",
                self.page(),
                termination.status
            );
            self.lifecycle = Lifecycle::Terminated;
        }
        outcome
    }

    fn apply(&mut self, message: &DialogMessage) -> Outcome {
        match message {
            DialogMessage::CloseRequested => {
                return Outcome::Finish(Termination::window_closed(self.page(), &self.tmpdir));
            }
            DialogMessage::Cancel => return Outcome::Finish(Termination::cancelled()),
            _ => {}
        }

        match (&mut self.state, message) {
            // Choose socket.
            (PageState::ChooseSocket(s), DialogMessage::SocketSelected(index)) => {
                s.select(*index);
            }
            (PageState::ChooseSocket(s), DialogMessage::StepFocused { forward }) => {
                if self.focus == Some(Focus::SocketChoice) {
                    s.step(*forward);
                }
            }
            (PageState::ChooseSocket(s), DialogMessage::Accept) => {
                return Outcome::Finish(Termination::accepted(s.report()));
            }

            // Crop and predictor.
            (PageState::CropAndPredictor(s), DialogMessage::CropToggled(enabled)) => {
                s.toggle_crop(*enabled);
            }
            (PageState::CropAndPredictor(s), DialogMessage::ToggleFocused) => {
                if self.focus == Some(Focus::CropToggle) {
                    let enabled = !s.crop_enabled;
                    s.toggle_crop(enabled);
                }
            }
            (PageState::CropAndPredictor(s), DialogMessage::CropFieldChanged(field, text)) => {
                if !s.set_dimension(*field, text) {
                    log::debug!("Rejected non-numeric input {text:?} for {field:?}");
                }
            }
            (PageState::CropAndPredictor(s), DialogMessage::PredictorToggled(on)) => {
                s.predictor = *on;
            }
            (PageState::CropAndPredictor(s), DialogMessage::Accept) => {
                let choice = s.crop_choice();
                return Outcome::Finish(Termination::accepted(s.report(choice)));
            }
            (PageState::CropAndPredictor(s), DialogMessage::PickCropDimensions) => {
                if s.pick_visible && s.handles.pick.sensitive {
                    return Outcome::Finish(Termination::accepted(s.report(CropChoice::Pick)));
                }
            }
            (PageState::CropAndPredictor(s), DialogMessage::InstallCroptool) => {
                if s.install_visible {
                    return Outcome::Finish(Termination::accepted(
                        s.report(CropChoice::InstallCroptool),
                    ));
                }
            }

            // Pick size.
            (PageState::PickSize(s), DialogMessage::TabSelected(index)) => {
                s.select_tab(*index);
            }
            (PageState::PickSize(s), DialogMessage::ChoiceToggled(index, active)) => {
                s.toggle_choice(*index, *active);
            }
            (PageState::PickSize(s), DialogMessage::FnamePrefixToggled(enabled)) => {
                s.toggle_prefix(*enabled);
                if *enabled {
                    self.focus = Some(Focus::FnamePrefix);
                    return Outcome::Focus(Focus::FnamePrefix);
                }
            }
            (PageState::PickSize(s), DialogMessage::FnamePrefixChanged(text)) => {
                s.prefix.clone_from(text);
            }
            (PageState::PickSize(s), DialogMessage::PostponeToggled(postpone)) => {
                s.postpone = *postpone;
            }
            (PageState::PickSize(s), DialogMessage::Accept) => {
                if s.can_accept() {
                    return Outcome::Finish(Termination::accepted(s.report()));
                }
                log::debug!("No size chosen on the active tab yet");
            }

            (state, message) => {
                log::debug!("Message {message:?} does not apply to page {}", state.page());
            }
        }

        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::CROPTOOL_CANCELLED_MARKER;
    use crate::domain::ExitStatus;
    use crate::layout;

    fn controller(page: Page) -> Controller {
        let layout = layout::embedded().unwrap();
        let constants = RunConstants {
            croptool_installed: false,
            tmpdir: PathBuf::from("/tmp/nadeshiko-test"),
        };
        Controller::new(PageHandles::resolve(&layout, page).unwrap(), &constants)
    }

    fn finish(outcome: Outcome) -> Termination {
        match outcome {
            Outcome::Finish(t) => t,
            other => panic!("expected a termination, got {other:?}"),
        }
    }

    #[test]
    fn cancel_ends_every_page_with_status_4() {
        for page in Page::ALL {
            let mut c = controller(page);
            let t = finish(c.update(&DialogMessage::Cancel));
            assert_eq!(t.status, ExitStatus::Cancelled);
            assert!(t.report.is_empty());
            assert!(t.marker.is_none());
        }
    }

    #[test]
    fn only_the_cropping_page_requests_a_marker_on_close() {
        for page in Page::ALL {
            let mut c = controller(page);
            let t = finish(c.update(&DialogMessage::CloseRequested));
            assert_eq!(t.status, ExitStatus::Cancelled);
            let expected = (page == Page::Cropping)
                .then(|| PathBuf::from("/tmp/nadeshiko-test").join(CROPTOOL_CANCELLED_MARKER));
            assert_eq!(t.marker, expected);
        }
    }

    #[test]
    fn messages_after_termination_are_ignored() {
        let mut c = controller(Page::ChooseSocket);
        finish(c.update(&DialogMessage::Accept));
        assert_eq!(c.lifecycle, Lifecycle::Terminated);
        assert_eq!(c.update(&DialogMessage::Cancel), Outcome::Continue);
    }

    #[test]
    fn socket_keyboard_selection() {
        let mut c = controller(Page::ChooseSocket);
        assert_eq!(c.focus, Some(Focus::SocketChoice));
        c.update(&DialogMessage::StepFocused { forward: false });
        let t = finish(c.update(&DialogMessage::Accept));
        assert_eq!(t.report.lines(), ["/tmp/mpv-socket-2"]);
        assert_eq!(t.status, ExitStatus::Success);
    }

    #[test]
    fn crop_toggle_twice_restores_the_panel() {
        let mut c = controller(Page::CropAndPredictor);
        let before = match c.state() {
            PageState::CropAndPredictor(s) => s.settings,
            _ => unreachable!(),
        };
        assert_eq!(c.update(&DialogMessage::ToggleFocused), Outcome::Continue);
        assert_eq!(c.update(&DialogMessage::ToggleFocused), Outcome::Continue);
        let PageState::CropAndPredictor(s) = c.state() else {
            unreachable!()
        };
        assert_eq!(s.settings, before);
        assert_eq!(s.settings.margin(), before.margin());
    }

    #[test]
    fn accept_with_region() {
        use crate::app::model::CropField;

        let mut c = controller(Page::CropAndPredictor);
        c.update(&DialogMessage::CropToggled(true));
        c.update(&DialogMessage::CropFieldChanged(CropField::Width, "10".into()));
        c.update(&DialogMessage::CropFieldChanged(CropField::Height, "20".into()));
        c.update(&DialogMessage::CropFieldChanged(CropField::X, "0".into()));
        c.update(&DialogMessage::CropFieldChanged(CropField::Y, "0".into()));
        let t = finish(c.update(&DialogMessage::Accept));
        assert_eq!(t.report.lines(), ["crop=10:20:0:0", "predictor=on"]);
    }

    #[test]
    fn unchecked_crop_never_reports_coordinates() {
        let mut c = controller(Page::CropAndPredictor);
        c.update(&DialogMessage::PredictorToggled(false));
        let t = finish(c.update(&DialogMessage::Accept));
        assert_eq!(t.report.lines(), ["crop=nocrop", "predictor=off"]);
    }

    #[test]
    fn install_croptool_action() {
        // Built-in layout: pick button insensitive, crop tool absent.
        let mut c = controller(Page::CropAndPredictor);
        assert_eq!(c.update(&DialogMessage::PickCropDimensions), Outcome::Continue);
        let t = finish(c.update(&DialogMessage::InstallCroptool));
        assert_eq!(t.report.lines(), ["crop=install_croptool", "predictor=on"]);
    }

    #[test]
    fn pick_crop_dimensions_action() {
        let mut layout = layout::embedded().unwrap();
        let page = layout.pages.get_mut(Page::CropAndPredictor.id()).unwrap();
        for widget in &mut page.widgets {
            if widget.id == "but_pick_cropdims" {
                widget.sensitive = true;
            }
        }
        let handles = PageHandles::resolve(&layout, Page::CropAndPredictor).unwrap();
        let mut c = Controller::new(handles, &RunConstants::default());

        assert_eq!(c.update(&DialogMessage::InstallCroptool), Outcome::Continue);
        let t = finish(c.update(&DialogMessage::PickCropDimensions));
        assert_eq!(t.report.lines(), ["crop=pick", "predictor=on"]);
    }

    #[test]
    fn pick_size_accept_and_prefix_focus() {
        let mut c = controller(Page::PickSize);
        assert_eq!(c.focus, None);
        assert_eq!(
            c.update(&DialogMessage::FnamePrefixToggled(true)),
            Outcome::Focus(Focus::FnamePrefix)
        );
        c.update(&DialogMessage::FnamePrefixChanged("opening".into()));
        c.update(&DialogMessage::PostponeToggled(true));
        let t = finish(c.update(&DialogMessage::Accept));
        assert_eq!(
            t.report.lines(),
            ["nadeshiko.rc.sh", "720p", "opening", "postpone"]
        );
    }

    #[test]
    fn pick_size_second_tab_uses_its_own_default() {
        let mut c = controller(Page::PickSize);
        c.update(&DialogMessage::TabSelected(1));
        let t = finish(c.update(&DialogMessage::Accept));
        assert_eq!(
            t.report.lines(),
            ["nadeshiko_small.rc.sh", "480p", " ", "run_now"]
        );
    }

    #[test]
    fn cropping_page_ignores_accept() {
        let mut c = controller(Page::Cropping);
        assert_eq!(c.update(&DialogMessage::Accept), Outcome::Continue);
        assert_eq!(c.lifecycle, Lifecycle::PageShown);
    }
}
