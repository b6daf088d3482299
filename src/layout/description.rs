// SPDX-License-Identifier: GPL-3.0-or-later
// src/layout/description.rs
//
// Serde model of the declarative layout description.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use super::LayoutError;

/// Whole layout file: window geometry, caller-injected constants and the
/// stack of pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDescription {
    #[serde(default)]
    pub window: WindowDescription,
    #[serde(default)]
    pub constants: ConstantsDescription,
    /// Stack children, keyed by page identifier.
    #[serde(default)]
    pub pages: BTreeMap<String, PageDescription>,
}

impl LayoutDescription {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowDescription {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Size of the window while the cropping overlay page is shown.
    pub overlay_width: f32,
    pub overlay_height: f32,
}

impl Default for WindowDescription {
    fn default() -> Self {
        Self {
            title: "Nadeshiko-mpv".to_string(),
            width: 520.0,
            height: 360.0,
            overlay_width: 340.0,
            overlay_height: 110.0,
        }
    }
}

/// Values the caller prepares before launch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConstantsDescription {
    /// Whether the external crop-pick tool exists on this system.
    pub croptool_installed: bool,
    /// Directory the caller watches for the cancellation marker.
    pub tmpdir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageDescription {
    pub title: Option<String>,
    /// Cardinality of the size/quality choices (pick-size page only).
    pub size_selection: SizeSelection,
    pub widgets: Vec<WidgetDescription>,
}

/// Whether size/quality choices behave like radio buttons or checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeSelection {
    #[default]
    Exclusive,
    Independent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Radio,
    Check,
    Switch,
    Entry,
    Button,
    Panel,
    Label,
    Tab,
    Choice,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetKind::Radio => "radio",
            WidgetKind::Check => "check",
            WidgetKind::Switch => "switch",
            WidgetKind::Entry => "entry",
            WidgetKind::Button => "button",
            WidgetKind::Panel => "panel",
            WidgetKind::Label => "label",
            WidgetKind::Tab => "tab",
            WidgetKind::Choice => "choice",
        };
        f.write_str(s)
    }
}

/// One named widget of a page.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetDescription {
    /// Object identifier used for lookup.
    pub id: String,
    pub kind: WidgetKind,
    /// Identifier printed in the report. Falls back to `id`.
    pub name: Option<String>,
    pub label: Option<String>,
    /// Initial text of entries and labels.
    pub text: Option<String>,
    pub placeholder: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default = "default_sensitive")]
    pub sensitive: bool,
    /// Owning tab of a size/quality choice.
    pub tab: Option<String>,
}

fn default_sensitive() -> bool {
    true
}

impl WidgetDescription {
    pub fn report_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widgets_default_to_sensitive_and_inactive() {
        let layout = LayoutDescription::parse(
            r#"
            [pages.box_choose_socket]
            widgets = [{ id = "rb_socket1", kind = "radio", label = "mpv" }]
            "#,
        )
        .unwrap();
        let widget = &layout.pages["box_choose_socket"].widgets[0];
        assert!(widget.sensitive);
        assert!(!widget.active);
        assert_eq!(widget.report_name(), "rb_socket1");
    }

    #[test]
    fn unknown_widget_kinds_are_rejected() {
        let err = LayoutDescription::parse(
            r#"
            [pages.box_choose_socket]
            widgets = [{ id = "x", kind = "slider" }]
            "#,
        );
        assert!(matches!(err, Err(LayoutError::Parse(_))));
    }

    #[test]
    fn size_selection_defaults_to_exclusive() {
        let layout = LayoutDescription::parse("[pages.box_pick_size]\n").unwrap();
        assert_eq!(
            layout.pages["box_pick_size"].size_selection,
            SizeSelection::Exclusive
        );
    }
}
