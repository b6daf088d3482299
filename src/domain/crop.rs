// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop.rs
//
// Crop choice domain model.

use std::fmt;

/// Crop region in pixel coordinates, as typed into the four crop entries.
///
/// Pure domain model: no UI concerns, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl CropRegion {
    pub fn new(width: u32, height: u32, x: u32, y: u32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

/// What the user decided about cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropChoice {
    NoCrop,
    Region(CropRegion),
    /// Hand over to the external crop tool.
    Pick,
    /// Ask the caller to install the crop tool.
    InstallCroptool,
}

impl fmt::Display for CropChoice {
    /// Renders the `crop=...` report line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropChoice::NoCrop => f.write_str("crop=nocrop"),
            CropChoice::Region(r) => {
                write!(f, "crop={}:{}:{}:{}", r.width, r.height, r.x, r.y)
            }
            CropChoice::Pick => f.write_str("crop=pick"),
            CropChoice::InstallCroptool => f.write_str("crop=install_croptool"),
        }
    }
}

/// Renders the `predictor=...` report line.
pub fn predictor_line(enabled: bool) -> String {
    if enabled {
        "predictor=on".to_string()
    } else {
        "predictor=off".to_string()
    }
}

/// Parse one crop entry. Entries only ever hold digits; empty means zero.
pub fn parse_dimension(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Whether `text` can be held by a crop entry: digits that fit a `u32`, or
/// nothing at all.
pub fn is_dimension(text: &str) -> bool {
    text.is_empty() || (text.bytes().all(|b| b.is_ascii_digit()) && text.parse::<u32>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_reported_as_w_h_x_y() {
        let choice = CropChoice::Region(CropRegion::new(10, 20, 0, 0));
        assert_eq!(choice.to_string(), "crop=10:20:0:0");
    }

    #[test]
    fn action_choices_render_their_keywords() {
        assert_eq!(CropChoice::NoCrop.to_string(), "crop=nocrop");
        assert_eq!(CropChoice::Pick.to_string(), "crop=pick");
        assert_eq!(
            CropChoice::InstallCroptool.to_string(),
            "crop=install_croptool"
        );
    }

    #[test]
    fn empty_dimension_is_zero() {
        assert_eq!(parse_dimension(""), 0);
        assert_eq!(parse_dimension("1280"), 1280);
    }

    #[test]
    fn dimensions_must_fit_u32() {
        assert!(is_dimension(""));
        assert!(is_dimension("4294967295"));
        assert!(!is_dimension("4294967296"));
        assert!(!is_dimension("12a"));
        assert!(!is_dimension("+5"));
    }
}
