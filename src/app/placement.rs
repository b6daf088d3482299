// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/placement.rs
//
// Bottom-right placement of the cropping overlay.

use cosmic::iced::{Point, Size};

/// Collects the monitor and window sizes, which arrive as separate messages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    monitor: Option<Size>,
    window: Option<Size>,
    done: bool,
}

impl Placement {
    pub fn set_monitor(&mut self, size: Size) {
        self.monitor = Some(size);
    }

    pub fn set_window(&mut self, size: Size) {
        self.window = Some(size);
    }

    /// Target position once both sizes are known. Yields only once.
    pub fn take_target(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let target = bottom_right(self.monitor?, self.window?);
        self.done = true;
        Some(target)
    }
}

/// Top-left corner that puts `window` in the bottom-right corner of `monitor`.
pub fn bottom_right(monitor: Size, window: Size) -> Point {
    Point::new(
        (monitor.width - window.width).max(0.0),
        (monitor.height - window.height).max(0.0),
    )
}
