// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error taxonomy and the exit statuses the calling script relies on.

use std::process::ExitCode;

use thiserror::Error;

use crate::layout::LayoutError;

/// Exit statuses understood by the calling script.
///
/// 127 and 137 belong to the process launcher and are never produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    InternalFault = 1,
    ToolkitUnavailable = 2,
    MissingStartpage = 3,
    Cancelled = 4,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Fatal conditions. None of them is retried; each ends the process.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("GUI toolkit not available: {0}")]
    ToolkitUnavailable(String),

    #[error("Pass startpage!\nExample: startpage=STACK1_CHILD_OBJECT")]
    MissingStartpage,

    #[error("unknown startpage: {0:?}")]
    UnknownPage(String),

    #[error("invalid layout description: {0}")]
    Layout(#[from] LayoutError),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DialogError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            DialogError::ToolkitUnavailable(_) => ExitStatus::ToolkitUnavailable,
            DialogError::MissingStartpage => ExitStatus::MissingStartpage,
            DialogError::UnknownPage(_)
            | DialogError::Layout(_)
            | DialogError::Usage(_)
            | DialogError::Io(_)
            | DialogError::Other(_) => ExitStatus::InternalFault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_the_caller_contract() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::InternalFault.code(), 1);
        assert_eq!(ExitStatus::ToolkitUnavailable.code(), 2);
        assert_eq!(ExitStatus::MissingStartpage.code(), 3);
        assert_eq!(ExitStatus::Cancelled.code(), 4);
    }

    #[test]
    fn only_dedicated_errors_get_dedicated_codes() {
        assert_eq!(
            DialogError::ToolkitUnavailable("no display".into()).exit_status(),
            ExitStatus::ToolkitUnavailable
        );
        assert_eq!(
            DialogError::MissingStartpage.exit_status(),
            ExitStatus::MissingStartpage
        );
        assert_eq!(
            DialogError::UnknownPage("box_nope".into()).exit_status(),
            ExitStatus::InternalFault
        );
        assert_eq!(
            DialogError::Usage("bad flag".into()).exit_status(),
            ExitStatus::InternalFault
        );
    }
}
