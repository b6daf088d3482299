// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: argument handling, logging, and the single exit point.

mod app;
mod config;
mod constant;
mod domain;
mod layout;
mod toolkit;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::app::{DialogApp, Flags};
use crate::config::{ConstantOverrides, RunConstants};
use crate::domain::{DialogError, ExitStatus, Page, Termination, TerminationSlot};
use crate::layout::PageHandles;

/// Dialogues for nadeshiko-mpv. The choice is printed on stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "nadeshiko-dialogues", version, about)]
pub struct Args {
    /// Page to show: startpage=<PAGE_ID>
    pub startpage: Option<String>,

    /// Layout description to load instead of the usual lookup
    #[arg(long, value_name = "PATH")]
    pub layout: Option<PathBuf>,

    /// Directory that receives the cancellation marker
    #[arg(long, value_name = "DIR")]
    pub tmpdir: Option<PathBuf>,

    /// Whether the external crop tool is installed
    #[arg(long, value_name = "BOOL")]
    pub croptool_installed: Option<bool>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let parsed = Args::try_parse();

    let verbose = parsed.as_ref().is_ok_and(|args| args.verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "info" } else { "warn" }),
    )
    .init();

    match run(parsed, toolkit::probe) {
        Ok(status) => status.into(),
        Err(err) => {
            log::error!("{err:#}");
            // The caller shows whatever we print when the exit status is not 0.
            println!("{err:#}");
            err.exit_status().into()
        }
    }
}

/// Validate in order (toolkit, then arguments), show the page, report.
fn run(
    parsed: Result<Args, clap::Error>,
    probe: impl FnOnce() -> Result<(), DialogError>,
) -> Result<ExitStatus, DialogError> {
    if let Err(err) = &parsed {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.print()?;
            return Ok(ExitStatus::Success);
        }
    }

    probe()?;

    let args = parsed.map_err(|err| DialogError::Usage(err.to_string()))?;
    let startpage = args
        .startpage
        .as_deref()
        .ok_or(DialogError::MissingStartpage)?;
    let page = Page::from_argument(startpage)?;

    let layout = layout::load(args.layout.as_deref())?;
    let constants = RunConstants::resolve(
        &layout.constants,
        ConstantOverrides {
            croptool_installed: args.croptool_installed,
            tmpdir: args.tmpdir.clone(),
        },
    );
    log::debug!("Run constants: {constants:?}");

    let handles = PageHandles::resolve(&layout, page)?;

    let slot = TerminationSlot::default();
    let flags = Flags {
        handles,
        constants: constants.clone(),
        title: layout.window.title.clone(),
        slot: slot.clone(),
    };
    cosmic::app::run::<DialogApp>(app::settings(&layout.window, page), flags)
        .map_err(|err| DialogError::ToolkitUnavailable(err.to_string()))?;

    // The event loop can end without a message, e.g. when the window is destroyed.
    let termination = slot.take().unwrap_or_else(|| {
        log::info!("Window went away without an action");
        Termination::window_closed(page, &constants.tmpdir)
    });

    let mut stdout = io::stdout().lock();
    Ok(termination.deliver(&mut stdout)?)
}
