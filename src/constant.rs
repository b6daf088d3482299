// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Prefix of the single positional argument (`startpage=<PAGE_ID>`).
pub const STARTPAGE_PREFIX: &str = "startpage=";

/// File name of the layout description, looked up next to the caller and in
/// the config directory.
pub const LAYOUT_FILE: &str = "nadeshiko-mpv_dialogues.toml";

/// Subdirectory of the user config dir that may hold a layout override.
pub const CONFIG_DIR: &str = "nadeshiko";

/// Marker file created in the caller's temporary directory when the cropping
/// overlay is closed instead of letting the crop tool finish.
pub const CROPTOOL_CANCELLED_MARKER: &str = "croptool_cancelled";

/// Note written into the marker file.
pub const CROPTOOL_CANCELLED_NOTE: &str =
    "The cropping dialogue was closed by the user before the crop tool finished.\n";

/// Bottom margin under the crop checkbox while the crop settings are hidden.
pub const CROP_PANEL_HIDDEN_MARGIN: u16 = 30;

/// Bottom margin under the prefix checkbox while the prefix entry is hidden.
pub const FNAME_PFX_HIDDEN_MARGIN: u16 = 14;

/// Label suffix marking the size choice that is preselected.
pub const DEFAULT_CHOICE_MARKER: &str = "default";

/// Placeholder reported for an empty filename prefix, keeps line positions stable.
pub const EMPTY_PREFIX_PLACEHOLDER: &str = " ";

/// Spacing between widgets of a page, in pixels.
pub const PAGE_SPACING: u16 = 12;

/// Padding around a page, in pixels.
pub const PAGE_PADDING: u16 = 18;
