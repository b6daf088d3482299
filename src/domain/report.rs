// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/report.rs
//
// Report lines and the termination handed from the controller to `main`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constant::{CROPTOOL_CANCELLED_MARKER, CROPTOOL_CANCELLED_NOTE};
use crate::domain::error::ExitStatus;
use crate::domain::page::Page;

/// Newline-delimited stdout payload. Field order is positional for the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write all lines at once, each terminated by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut buf = String::new();
        for line in &self.lines {
            buf.push_str(line);
            buf.push('\n');
        }
        out.write_all(buf.as_bytes())?;
        out.flush()
    }
}

/// How a run ends: what to print, whether to leave the cancel marker, and the
/// exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Termination {
    pub report: Report,
    pub marker: Option<PathBuf>,
    pub status: ExitStatus,
}

impl Termination {
    pub fn accepted(report: Report) -> Self {
        Self {
            report,
            marker: None,
            status: ExitStatus::Success,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            report: Report::new(),
            marker: None,
            status: ExitStatus::Cancelled,
        }
    }

    /// The user closed the window of `page`.
    pub fn window_closed(page: Page, tmpdir: &Path) -> Self {
        let marker = page
            .signals_cancel_with_marker()
            .then(|| tmpdir.join(CROPTOOL_CANCELLED_MARKER));
        Self {
            report: Report::new(),
            marker,
            status: ExitStatus::Cancelled,
        }
    }

    /// Perform the side effects: marker first, then the report.
    pub fn deliver<W: Write>(&self, out: &mut W) -> io::Result<ExitStatus> {
        if let Some(path) = &self.marker {
            fs::write(path, CROPTOOL_CANCELLED_NOTE)?;
            log::info!("Left cancellation marker at {}", path.display());
        }
        if !self.report.is_empty() {
            log::debug!("Reporting {:?}", self.report.lines());
            self.report.write_to(out)?;
        }
        Ok(self.status)
    }
}

/// Slot through which the event loop hands its termination back to `main`.
#[derive(Debug, Clone, Default)]
pub struct TerminationSlot(Arc<Mutex<Option<Termination>>>);

impl TerminationSlot {
    /// Store the first termination; later ones are dropped.
    pub fn fill(&self, termination: Termination) {
        if let Ok(mut slot) = self.0.lock() {
            if slot.is_none() {
                *slot = Some(termination);
            }
        }
    }

    pub fn take(&self) -> Option<Termination> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}
