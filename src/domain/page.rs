// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/page.rs
//
// The dialogue pages and startpage argument parsing.

use std::fmt;

use crate::constant::STARTPAGE_PREFIX;
use crate::domain::error::DialogError;

/// One modal screen of the dialogue. Exactly one is shown per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    ChooseSocket,
    CropAndPredictor,
    Cropping,
    PickSize,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::ChooseSocket,
        Page::CropAndPredictor,
        Page::Cropping,
        Page::PickSize,
    ];

    /// Identifier of the page inside the layout description's stack.
    pub fn id(self) -> &'static str {
        match self {
            Page::ChooseSocket => "box_choose_socket",
            Page::CropAndPredictor => "box_crop_and_predictor",
            Page::Cropping => "box_cropping",
            Page::PickSize => "box_pick_size",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.id() == id)
    }

    /// Parse the `startpage=<PAGE_ID>` command-line token.
    pub fn from_argument(arg: &str) -> Result<Self, DialogError> {
        let id = arg
            .strip_prefix(STARTPAGE_PREFIX)
            .ok_or_else(|| DialogError::UnknownPage(arg.to_string()))?;
        Self::from_id(id).ok_or_else(|| DialogError::UnknownPage(id.to_string()))
    }

    /// Whether closing the window must leave the cancellation marker behind.
    pub fn signals_cancel_with_marker(self) -> bool {
        self == Page::Cropping
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
