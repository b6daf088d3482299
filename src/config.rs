// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Per-run constants injected by the calling script.

use std::path::PathBuf;

use crate::layout::description::ConstantsDescription;

/// Values the dialogue only branches on; it never computes them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConstants {
    /// Whether the external crop-pick tool exists on this system.
    pub croptool_installed: bool,
    /// Directory that receives the cancellation marker.
    pub tmpdir: PathBuf,
}

impl Default for RunConstants {
    fn default() -> Self {
        Self {
            croptool_installed: false,
            tmpdir: std::env::temp_dir(),
        }
    }
}

/// Command-line overrides for the layout's `[constants]` table.
#[derive(Debug, Clone, Default)]
pub struct ConstantOverrides {
    pub croptool_installed: Option<bool>,
    pub tmpdir: Option<PathBuf>,
}

impl RunConstants {
    /// Command line first, then the layout file, then built-in defaults.
    pub fn resolve(layout: &ConstantsDescription, overrides: ConstantOverrides) -> Self {
        let defaults = Self::default();
        Self {
            croptool_installed: overrides
                .croptool_installed
                .unwrap_or(layout.croptool_installed),
            tmpdir: overrides
                .tmpdir
                .or_else(|| layout.tmpdir.clone())
                .unwrap_or(defaults.tmpdir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_beats_layout() {
        let layout = ConstantsDescription {
            croptool_installed: false,
            tmpdir: Some(PathBuf::from("/tmp/from-layout")),
        };
        let resolved = RunConstants::resolve(
            &layout,
            ConstantOverrides {
                croptool_installed: Some(true),
                tmpdir: Some(PathBuf::from("/tmp/from-cli")),
            },
        );
        assert!(resolved.croptool_installed);
        assert_eq!(resolved.tmpdir, PathBuf::from("/tmp/from-cli"));
    }

    #[test]
    fn layout_beats_defaults() {
        let layout = ConstantsDescription {
            croptool_installed: true,
            tmpdir: Some(PathBuf::from("/tmp/from-layout")),
        };
        let resolved = RunConstants::resolve(&layout, ConstantOverrides::default());
        assert!(resolved.croptool_installed);
        assert_eq!(resolved.tmpdir, PathBuf::from("/tmp/from-layout"));
    }

    #[test]
    fn falls_back_to_system_temp_dir() {
        let resolved =
            RunConstants::resolve(&ConstantsDescription::default(), ConstantOverrides::default());
        assert_eq!(resolved.tmpdir, std::env::temp_dir());
        assert!(!resolved.croptool_installed);
    }
}
