// SPDX-License-Identifier: GPL-3.0-or-later
// src/layout/handles.rs
//
// Typed, validated handles for the widgets of the active page.

use std::collections::HashSet;

use crate::domain::Page;

use super::LayoutError;
use super::description::{
    LayoutDescription, PageDescription, SizeSelection, WidgetDescription, WidgetKind,
};

/// A widget kind that can be looked up by identifier.
pub trait Handle: Sized {
    const KIND: WidgetKind;

    fn from_widget(widget: &WidgetDescription) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
    pub name: String,
    pub label: String,
    pub active: bool,
}

impl Handle for Radio {
    const KIND: WidgetKind = WidgetKind::Radio;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            name: w.report_name(),
            label: label_or_id(w),
            active: w.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub label: String,
    pub active: bool,
}

impl Handle for Check {
    const KIND: WidgetKind = WidgetKind::Check;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            label: label_or_id(w),
            active: w.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub label: String,
    pub active: bool,
}

impl Handle for Switch {
    const KIND: WidgetKind = WidgetKind::Switch;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            label: label_or_id(w),
            active: w.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: Option<String>,
    pub text: String,
    pub placeholder: String,
}

impl Handle for Entry {
    const KIND: WidgetKind = WidgetKind::Entry;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            label: w.label.clone(),
            text: w.text.clone().unwrap_or_default(),
            placeholder: w.placeholder.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub sensitive: bool,
}

impl Handle for Button {
    const KIND: WidgetKind = WidgetKind::Button;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            label: label_or_id(w),
            sensitive: w.sensitive,
        }
    }
}

/// Container whose visibility is toggled as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub label: Option<String>,
}

impl Handle for Panel {
    const KIND: WidgetKind = WidgetKind::Panel;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            label: w.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
}

impl Handle for Label {
    const KIND: WidgetKind = WidgetKind::Label;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            text: w.text.clone().or_else(|| w.label.clone()).unwrap_or_default(),
        }
    }
}

/// A preset tab of the pick-size page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub name: String,
    pub label: String,
    pub active: bool,
}

impl Handle for Tab {
    const KIND: WidgetKind = WidgetKind::Tab;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            id: w.id.clone(),
            name: w.report_name(),
            label: label_or_id(w),
            active: w.active,
        }
    }
}

/// A size/quality choice belonging to one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: String,
    pub name: String,
    pub label: String,
    pub tab: Option<String>,
}

impl Handle for Choice {
    const KIND: WidgetKind = WidgetKind::Choice;

    fn from_widget(w: &WidgetDescription) -> Self {
        Self {
            id: w.id.clone(),
            name: w.report_name(),
            label: label_or_id(w),
            tab: w.tab.clone(),
        }
    }
}

fn label_or_id(w: &WidgetDescription) -> String {
    w.label.clone().unwrap_or_else(|| w.id.clone())
}

/// Read-only view of one page of the layout, resolving widgets by identifier.
pub struct PageScope<'a> {
    page: Page,
    desc: &'a PageDescription,
}

impl<'a> PageScope<'a> {
    pub fn new(layout: &'a LayoutDescription, page: Page) -> Result<Self, LayoutError> {
        let desc = layout
            .pages
            .get(page.id())
            .ok_or_else(|| LayoutError::MissingPage(page.id().to_string()))?;

        let mut seen = HashSet::new();
        for widget in &desc.widgets {
            if !seen.insert(widget.id.as_str()) {
                return Err(LayoutError::DuplicateWidget {
                    page: page.id().to_string(),
                    id: widget.id.clone(),
                });
            }
        }

        Ok(Self { page, desc })
    }

    pub fn title(&self) -> Option<String> {
        self.desc.title.clone()
    }

    pub fn size_selection(&self) -> SizeSelection {
        self.desc.size_selection
    }

    /// Look up a required widget and check its kind.
    pub fn require<T: Handle>(&self, id: &str) -> Result<T, LayoutError> {
        let widget = self
            .desc
            .widgets
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| LayoutError::MissingWidget {
                page: self.page.id().to_string(),
                id: id.to_string(),
            })?;

        if widget.kind != T::KIND {
            return Err(LayoutError::WrongKind {
                page: self.page.id().to_string(),
                id: id.to_string(),
                expected: T::KIND,
                found: widget.kind,
            });
        }

        Ok(T::from_widget(widget))
    }

    /// All widgets of one kind, in declaration order.
    pub fn all<T: Handle>(&self) -> Vec<T> {
        self.desc
            .widgets
            .iter()
            .filter(|w| w.kind == T::KIND)
            .map(T::from_widget)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SocketHandles {
    pub title: Option<String>,
    pub socket1: Radio,
    pub socket2: Radio,
    pub accept: Button,
    pub cancel: Button,
}

impl SocketHandles {
    pub fn choices(&self) -> [&Radio; 2] {
        [&self.socket1, &self.socket2]
    }
}

#[derive(Debug, Clone)]
pub struct CropHandles {
    pub title: Option<String>,
    pub crop: Check,
    pub crop_settings: Panel,
    pub width: Entry,
    pub height: Entry,
    pub x: Entry,
    pub y: Entry,
    pub predictor: Switch,
    pub pick: Button,
    pub install_group: Panel,
    pub install: Button,
    pub accept: Button,
    pub cancel: Button,
}

#[derive(Debug, Clone)]
pub struct CroppingHandles {
    pub title: Option<String>,
    pub note: Label,
}

#[derive(Debug, Clone)]
pub struct PickSizeHandles {
    pub title: Option<String>,
    pub tabs: Vec<Tab>,
    pub choices: Vec<Choice>,
    pub selection: SizeSelection,
    pub fname_pfx_toggle: Check,
    pub fname_pfx: Entry,
    pub postpone: Check,
    pub accept: Button,
    pub cancel: Button,
}

/// Handles of the one page being shown. The other pages are never resolved.
#[derive(Debug, Clone)]
pub enum PageHandles {
    ChooseSocket(SocketHandles),
    CropAndPredictor(CropHandles),
    Cropping(CroppingHandles),
    PickSize(PickSizeHandles),
}

impl PageHandles {
    pub fn resolve(layout: &LayoutDescription, page: Page) -> Result<Self, LayoutError> {
        let scope = PageScope::new(layout, page)?;
        let handles = match page {
            Page::ChooseSocket => PageHandles::ChooseSocket(SocketHandles {
                title: scope.title(),
                socket1: scope.require("rb_socket1")?,
                socket2: scope.require("rb_socket2")?,
                accept: scope.require("but_choose_socket")?,
                cancel: scope.require("but_cancel")?,
            }),
            Page::CropAndPredictor => PageHandles::CropAndPredictor(CropHandles {
                title: scope.title(),
                crop: scope.require("cb_crop")?,
                crop_settings: scope.require("box_crop_settings")?,
                width: scope.require("entry_crop_width")?,
                height: scope.require("entry_crop_height")?,
                x: scope.require("entry_crop_x")?,
                y: scope.require("entry_crop_y")?,
                predictor: scope.require("switch_predictor")?,
                pick: scope.require("but_pick_cropdims")?,
                install_group: scope.require("box_install_croptool")?,
                install: scope.require("but_install_croptool")?,
                accept: scope.require("but_crop_and_predictor")?,
                cancel: scope.require("but_cancel")?,
            }),
            Page::Cropping => PageHandles::Cropping(CroppingHandles {
                title: scope.title(),
                note: scope.require("label_cropping")?,
            }),
            Page::PickSize => PageHandles::PickSize(resolve_pick_size(&scope)?),
        };
        log::debug!("Resolved widgets of page {page}");
        Ok(handles)
    }

    pub fn page(&self) -> Page {
        match self {
            PageHandles::ChooseSocket(_) => Page::ChooseSocket,
            PageHandles::CropAndPredictor(_) => Page::CropAndPredictor,
            PageHandles::Cropping(_) => Page::Cropping,
            PageHandles::PickSize(_) => Page::PickSize,
        }
    }
}

fn resolve_pick_size(scope: &PageScope<'_>) -> Result<PickSizeHandles, LayoutError> {
    let page = Page::PickSize.id().to_string();
    let tabs: Vec<Tab> = scope.all();
    if tabs.is_empty() {
        return Err(LayoutError::NoTabs(page));
    }

    let choices: Vec<Choice> = scope.all();
    for choice in &choices {
        let owner = choice.tab.as_deref().unwrap_or_default();
        if !tabs.iter().any(|t| t.id == owner) {
            return Err(LayoutError::OrphanChoice {
                page,
                id: choice.id.clone(),
                tab: owner.to_string(),
            });
        }
    }
    for tab in &tabs {
        if !choices.iter().any(|c| c.tab.as_deref() == Some(tab.id.as_str())) {
            return Err(LayoutError::EmptyTab {
                page,
                tab: tab.id.clone(),
            });
        }
    }

    Ok(PickSizeHandles {
        title: scope.title(),
        tabs,
        choices,
        selection: scope.size_selection(),
        fname_pfx_toggle: scope.require("cb_set_fname_pfx")?,
        fname_pfx: scope.require("entry_fname_pfx")?,
        postpone: scope.require("cb_postpone")?,
        accept: scope.require("but_encode")?,
        cancel: scope.require("but_cancel")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(text: &str) -> LayoutDescription {
        LayoutDescription::parse(text).unwrap()
    }

    #[test]
    fn missing_page_fails_fast() {
        let layout = layout("[pages.box_pick_size]\n");
        assert!(matches!(
            PageHandles::resolve(&layout, Page::Cropping),
            Err(LayoutError::MissingPage(id)) if id == "box_cropping"
        ));
    }

    #[test]
    fn missing_widget_names_the_identifier() {
        let layout = layout(
            r#"
            [pages.box_choose_socket]
            widgets = [
                { id = "rb_socket1", kind = "radio" },
                { id = "but_choose_socket", kind = "button" },
                { id = "but_cancel", kind = "button" },
            ]
            "#,
        );
        assert!(matches!(
            PageHandles::resolve(&layout, Page::ChooseSocket),
            Err(LayoutError::MissingWidget { id, .. }) if id == "rb_socket2"
        ));
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let layout = layout(
            r#"
            [pages.box_cropping]
            widgets = [{ id = "label_cropping", kind = "button" }]
            "#,
        );
        assert!(matches!(
            PageHandles::resolve(&layout, Page::Cropping),
            Err(LayoutError::WrongKind { expected: WidgetKind::Label, found: WidgetKind::Button, .. })
        ));
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let layout = layout(
            r#"
            [pages.box_cropping]
            widgets = [
                { id = "label_cropping", kind = "label" },
                { id = "label_cropping", kind = "label" },
            ]
            "#,
        );
        assert!(matches!(
            PageHandles::resolve(&layout, Page::Cropping),
            Err(LayoutError::DuplicateWidget { .. })
        ));
    }

    #[test]
    fn other_pages_are_never_resolved() {
        // The socket page is broken, but only the cropping page is requested.
        let layout = layout(
            r#"
            [pages.box_choose_socket]
            widgets = []

            [pages.box_cropping]
            widgets = [{ id = "label_cropping", kind = "label", text = "Cropping…" }]
            "#,
        );
        let handles = PageHandles::resolve(&layout, Page::Cropping).unwrap();
        assert_eq!(handles.page(), Page::Cropping);
    }

    #[test]
    fn choices_must_belong_to_a_known_tab() {
        let layout = layout(
            r#"
            [pages.box_pick_size]
            widgets = [
                { id = "tab_small", kind = "tab" },
                { id = "rb_size1", kind = "choice", tab = "tab_small" },
                { id = "rb_size2", kind = "choice", tab = "tab_large" },
            ]
            "#,
        );
        assert!(matches!(
            PageHandles::resolve(&layout, Page::PickSize),
            Err(LayoutError::OrphanChoice { id, .. }) if id == "rb_size2"
        ));
    }

    #[test]
    fn tabs_without_choices_are_rejected() {
        let layout = layout(
            r#"
            [pages.box_pick_size]
            widgets = [
                { id = "tab_small", kind = "tab" },
                { id = "tab_large", kind = "tab" },
                { id = "rb_size1", kind = "choice", tab = "tab_small" },
            ]
            "#,
        );
        assert!(matches!(
            PageHandles::resolve(&layout, Page::PickSize),
            Err(LayoutError::EmptyTab { tab, .. }) if tab == "tab_large"
        ));
    }
}
