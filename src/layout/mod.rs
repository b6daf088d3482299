// SPDX-License-Identifier: GPL-3.0-or-later
// src/layout/mod.rs
//
// Layout description: lookup, parsing and typed widget handles.

pub mod description;
pub mod handles;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use rust_embed::RustEmbed;
use thiserror::Error;

use crate::constant::{CONFIG_DIR, LAYOUT_FILE};
use crate::domain::DialogError;

pub use description::{LayoutDescription, SizeSelection, WidgetKind};
pub use handles::PageHandles;

/// Built-in layout used when no file overrides it.
#[derive(RustEmbed)]
#[folder = "resources/"]
struct Resources;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("page {0:?} is not part of the stack")]
    MissingPage(String),

    #[error("page {page:?} has no widget {id:?}")]
    MissingWidget { page: String, id: String },

    #[error("widget {id:?} on page {page:?} is a {found}, expected a {expected}")]
    WrongKind {
        page: String,
        id: String,
        expected: WidgetKind,
        found: WidgetKind,
    },

    #[error("widget {id:?} is declared twice on page {page:?}")]
    DuplicateWidget { page: String, id: String },

    #[error("page {0:?} declares no preset tabs")]
    NoTabs(String),

    #[error("choice {id:?} on page {page:?} refers to unknown tab {tab:?}")]
    OrphanChoice {
        page: String,
        id: String,
        tab: String,
    },

    #[error("tab {tab:?} on page {page:?} has no size choices")]
    EmptyTab { page: String, tab: String },
}

/// Find the layout file to use. `None` means the embedded default.
///
/// An explicit path is returned as is, so a typo fails loudly instead of
/// silently falling back.
pub fn locate(explicit: Option<&Path>, config_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LAYOUT_FILE);
    if local.is_file() {
        return Some(local);
    }

    config_dir
        .map(|dir| dir.join(CONFIG_DIR).join(LAYOUT_FILE))
        .filter(|path| path.is_file())
}

/// Load and parse the layout description.
pub fn load(explicit: Option<&Path>) -> Result<LayoutDescription, DialogError> {
    let config_dir = dirs::config_dir();
    match locate(explicit, config_dir.as_deref()) {
        Some(path) => {
            log::info!("Loading layout from {}", path.display());
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            Ok(LayoutDescription::parse(&text)?)
        }
        None => {
            log::info!("Using the built-in layout");
            Ok(embedded()?)
        }
    }
}

/// The layout compiled into the binary.
pub fn embedded() -> anyhow::Result<LayoutDescription> {
    let file = Resources::get(LAYOUT_FILE).ok_or_else(|| anyhow!("built-in layout missing"))?;
    let text = std::str::from_utf8(&file.data).context("built-in layout is not UTF-8")?;
    LayoutDescription::parse(text).context("built-in layout is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;

    #[test]
    fn embedded_layout_resolves_every_page() {
        let layout = embedded().unwrap();
        for page in Page::ALL {
            let handles = PageHandles::resolve(&layout, page).unwrap();
            assert_eq!(handles.page(), page);
        }
    }

    #[test]
    fn explicit_path_wins_even_if_missing() {
        let path = Path::new("/nonexistent/layout.toml");
        assert_eq!(locate(Some(path), None), Some(path.to_path_buf()));
    }

    #[test]
    fn config_dir_copy_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(LAYOUT_FILE), "").unwrap();

        let found = locate(None, Some(dir.path()));
        // A copy in the working directory would take precedence.
        if !Path::new(LAYOUT_FILE).is_file() {
            assert_eq!(found, Some(nested.join(LAYOUT_FILE)));
        }
    }

    #[test]
    fn unreadable_explicit_layout_is_an_internal_fault() {
        let err = load(Some(Path::new("/nonexistent/layout.toml"))).unwrap_err();
        assert_eq!(
            err.exit_status(),
            crate::domain::ExitStatus::InternalFault
        );
    }
}
