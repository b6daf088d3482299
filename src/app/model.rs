// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Dialogue state: one variant per page, built once from the page's handles.

use crate::config::RunConstants;
use crate::constant::{
    CROP_PANEL_HIDDEN_MARGIN, DEFAULT_CHOICE_MARKER, EMPTY_PREFIX_PLACEHOLDER,
    FNAME_PFX_HIDDEN_MARGIN,
};
use crate::domain::crop::{is_dimension, parse_dimension, predictor_line};
use crate::domain::{CropChoice, CropRegion, Page, Report};
use crate::layout::SizeSelection;
use crate::layout::handles::{
    Choice, CropHandles, CroppingHandles, PageHandles, PickSizeHandles, SocketHandles,
};

// =============================================================================
// Shared pieces
// =============================================================================

/// Visibility of a checkbox-gated group and the margin kept under the
/// checkbox while the group is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub visible: bool,
    hidden_margin: u16,
}

impl Reveal {
    pub fn new(visible: bool, hidden_margin: u16) -> Self {
        Self {
            visible,
            hidden_margin,
        }
    }

    pub fn set(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn margin(&self) -> u16 {
        if self.visible { 0 } else { self.hidden_margin }
    }
}

/// Widget that receives keyboard input when the page opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SocketChoice,
    CropToggle,
    FnamePrefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropField {
    Width,
    Height,
    X,
    Y,
}

impl CropField {
    fn index(self) -> usize {
        match self {
            CropField::Width => 0,
            CropField::Height => 1,
            CropField::X => 2,
            CropField::Y => 3,
        }
    }
}

// =============================================================================
// Pages
// =============================================================================

#[derive(Debug, Clone)]
pub struct SocketState {
    pub handles: SocketHandles,
    pub selected: usize,
}

impl SocketState {
    fn new(handles: SocketHandles) -> Self {
        // Like a radio group: the last radio flagged active wins, else the first.
        let selected = handles
            .choices()
            .iter()
            .rposition(|radio| radio.active)
            .unwrap_or(0);
        Self { handles, selected }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.handles.choices().len() {
            self.selected = index;
        }
    }

    /// Move the selection by one, wrapping around.
    pub fn step(&mut self, forward: bool) {
        let len = self.handles.choices().len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    pub fn report(&self) -> Report {
        Report::new().line(self.handles.choices()[self.selected].name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct CropState {
    pub handles: CropHandles,
    pub crop_enabled: bool,
    pub settings: Reveal,
    dims: [String; 4],
    pub predictor: bool,
    pub pick_visible: bool,
    pub install_visible: bool,
}

impl CropState {
    fn new(handles: CropHandles, constants: &RunConstants) -> Self {
        let crop_enabled = handles.crop.active;

        // The pick button and the install group never show together.
        let (pick_visible, install_visible) = if handles.pick.sensitive {
            (true, false)
        } else if !constants.croptool_installed {
            (false, true)
        } else {
            (true, false)
        };

        let dims = [
            digits_only(&handles.width.text),
            digits_only(&handles.height.text),
            digits_only(&handles.x.text),
            digits_only(&handles.y.text),
        ];

        Self {
            crop_enabled,
            settings: Reveal::new(crop_enabled, CROP_PANEL_HIDDEN_MARGIN),
            dims,
            predictor: handles.predictor.active,
            pick_visible,
            install_visible,
            handles,
        }
    }

    pub fn toggle_crop(&mut self, enabled: bool) {
        self.crop_enabled = enabled;
        self.settings.set(enabled);
    }

    pub fn dimension(&self, field: CropField) -> &str {
        &self.dims[field.index()]
    }

    /// Accept the edit only if it stays a numeric value that fits the region.
    pub fn set_dimension(&mut self, field: CropField, text: &str) -> bool {
        if is_dimension(text) {
            self.dims[field.index()] = text.to_string();
            true
        } else {
            false
        }
    }

    /// Crop choice for the plain accept button.
    pub fn crop_choice(&self) -> CropChoice {
        if self.crop_enabled {
            CropChoice::Region(CropRegion::new(
                parse_dimension(self.dimension(CropField::Width)),
                parse_dimension(self.dimension(CropField::Height)),
                parse_dimension(self.dimension(CropField::X)),
                parse_dimension(self.dimension(CropField::Y)),
            ))
        } else {
            CropChoice::NoCrop
        }
    }

    pub fn report(&self, choice: CropChoice) -> Report {
        Report::new()
            .line(choice.to_string())
            .line(predictor_line(self.predictor))
    }
}

/// Digits of a layout-provided entry text, dropped entirely if out of range.
fn digits_only(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if is_dimension(&digits) {
        digits
    } else {
        String::new()
    }
}

#[derive(Debug, Clone)]
pub struct CroppingState {
    pub handles: CroppingHandles,
}

#[derive(Debug, Clone)]
pub struct ChoiceState {
    pub handle: Choice,
    pub tab: usize,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PickSizeState {
    pub handles: PickSizeHandles,
    pub active_tab: usize,
    pub choices: Vec<ChoiceState>,
    pub prefix_enabled: bool,
    pub prefix_entry: Reveal,
    pub prefix: String,
    pub postpone: bool,
}

impl PickSizeState {
    fn new(handles: PickSizeHandles) -> Self {
        let active_tab = handles.tabs.iter().rposition(|t| t.active).unwrap_or(0);

        let mut choices: Vec<ChoiceState> = handles
            .choices
            .iter()
            .map(|choice| ChoiceState {
                tab: handles
                    .tabs
                    .iter()
                    .position(|t| Some(t.id.as_str()) == choice.tab.as_deref())
                    .unwrap_or(0),
                active: false,
                handle: choice.clone(),
            })
            .collect();

        for index in 0..choices.len() {
            if choices[index].handle.label.ends_with(DEFAULT_CHOICE_MARKER) {
                activate(&mut choices, index, handles.selection);
            }
        }
        if handles.selection == SizeSelection::Exclusive {
            // A radio group always has a member on: fall back to the tab's first.
            for tab in 0..handles.tabs.len() {
                let has_active = choices.iter().any(|c| c.tab == tab && c.active);
                let first = choices.iter().position(|c| c.tab == tab);
                if let (false, Some(first)) = (has_active, first) {
                    choices[first].active = true;
                }
            }
        }

        let prefix_enabled = handles.fname_pfx_toggle.active;
        Self {
            active_tab,
            choices,
            prefix_enabled,
            prefix_entry: Reveal::new(prefix_enabled, FNAME_PFX_HIDDEN_MARGIN),
            prefix: handles.fname_pfx.text.clone(),
            postpone: handles.postpone.active,
            handles,
        }
    }

    pub fn select_tab(&mut self, index: usize) {
        if index < self.handles.tabs.len() {
            self.active_tab = index;
        }
    }

    /// Indices of the choices shown on the active tab.
    pub fn visible_choices(&self) -> impl Iterator<Item = (usize, &ChoiceState)> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, c)| c.tab == self.active_tab)
    }

    pub fn toggle_choice(&mut self, index: usize, active: bool) {
        if index >= self.choices.len() {
            return;
        }
        if active {
            activate(&mut self.choices, index, self.handles.selection);
        } else if self.handles.selection == SizeSelection::Independent {
            // A radio cannot be switched off directly.
            self.choices[index].active = false;
        }
    }

    pub fn toggle_prefix(&mut self, enabled: bool) {
        self.prefix_enabled = enabled;
        self.prefix_entry.set(enabled);
    }

    /// Exclusive selection needs a choice on the active tab before accepting.
    pub fn can_accept(&self) -> bool {
        match self.handles.selection {
            SizeSelection::Exclusive => self.visible_choices().any(|(_, c)| c.active),
            SizeSelection::Independent => true,
        }
    }

    pub fn report(&self) -> Report {
        let mut report = Report::new().line(self.handles.tabs[self.active_tab].name.clone());

        for (_, choice) in self.visible_choices().filter(|(_, c)| c.active) {
            report.push(choice.handle.name.clone());
        }

        // The entry text is reported whether or not its checkbox is on.
        if !self.prefix.is_empty() {
            report.push(self.prefix.clone());
        } else {
            report.push(EMPTY_PREFIX_PLACEHOLDER);
        }

        report.push(if self.postpone { "postpone" } else { "run_now" });
        report
    }
}

fn activate(choices: &mut [ChoiceState], index: usize, selection: SizeSelection) {
    if selection == SizeSelection::Exclusive {
        let tab = choices[index].tab;
        for choice in choices.iter_mut().filter(|c| c.tab == tab) {
            choice.active = false;
        }
    }
    choices[index].active = true;
}

// =============================================================================
// Model
// =============================================================================

/// State of the one page being shown.
#[derive(Debug, Clone)]
pub enum PageState {
    ChooseSocket(SocketState),
    CropAndPredictor(CropState),
    Cropping(CroppingState),
    PickSize(PickSizeState),
}

impl PageState {
    pub fn new(handles: PageHandles, constants: &RunConstants) -> Self {
        match handles {
            PageHandles::ChooseSocket(h) => PageState::ChooseSocket(SocketState::new(h)),
            PageHandles::CropAndPredictor(h) => {
                PageState::CropAndPredictor(CropState::new(h, constants))
            }
            PageHandles::Cropping(h) => PageState::Cropping(CroppingState { handles: h }),
            PageHandles::PickSize(h) => PageState::PickSize(PickSizeState::new(h)),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PageState::ChooseSocket(_) => Page::ChooseSocket,
            PageState::CropAndPredictor(_) => Page::CropAndPredictor,
            PageState::Cropping(_) => Page::Cropping,
            PageState::PickSize(_) => Page::PickSize,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            PageState::ChooseSocket(s) => s.handles.title.as_deref(),
            PageState::CropAndPredictor(s) => s.handles.title.as_deref(),
            PageState::Cropping(s) => s.handles.title.as_deref(),
            PageState::PickSize(s) => s.handles.title.as_deref(),
        }
    }

    /// Focus given to the page when it opens. Pick-size is left to automation.
    pub fn initial_focus(&self) -> Option<Focus> {
        match self {
            PageState::ChooseSocket(_) => Some(Focus::SocketChoice),
            PageState::CropAndPredictor(_) => Some(Focus::CropToggle),
            PageState::Cropping(_) | PageState::PickSize(_) => None,
        }
    }
}
