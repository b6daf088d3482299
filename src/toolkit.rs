// SPDX-License-Identifier: GPL-3.0-or-later
// src/toolkit.rs
//
// Checks that a display server is reachable before anything else runs.

use std::ffi::OsString;

use crate::domain::DialogError;

/// Fail with `ToolkitUnavailable` when no display can be opened.
pub fn probe() -> Result<(), DialogError> {
    check(
        std::env::var_os("WAYLAND_DISPLAY"),
        std::env::var_os("DISPLAY"),
    )
}

#[cfg(all(unix, not(target_os = "macos")))]
fn check(wayland: Option<OsString>, x11: Option<OsString>) -> Result<(), DialogError> {
    let present = |var: &Option<OsString>| var.as_ref().is_some_and(|v| !v.is_empty());
    if present(&wayland) || present(&x11) {
        Ok(())
    } else {
        Err(DialogError::ToolkitUnavailable(
            "neither WAYLAND_DISPLAY nor DISPLAY is set".to_string(),
        ))
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn check(_wayland: Option<OsString>, _x11: Option<OsString>) -> Result<(), DialogError> {
    Ok(())
}

#[cfg(all(test, unix, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn either_display_is_enough() {
        assert!(check(Some("wayland-0".into()), None).is_ok());
        assert!(check(None, Some(":0".into())).is_ok());
    }

    #[test]
    fn no_display_means_no_toolkit() {
        assert!(matches!(
            check(None, Some("".into())),
            Err(DialogError::ToolkitUnavailable(_))
        ));
    }
}
