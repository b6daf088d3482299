// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Toolkit-independent domain types: pages, crop choices, reports, errors.

pub mod crop;
pub mod error;
pub mod page;
pub mod report;

pub use crop::{CropChoice, CropRegion};
pub use error::{DialogError, ExitStatus};
pub use page::Page;
pub use report::{Report, Termination, TerminationSlot};
