// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wall-space geometry.
//!
//! Wall-space units are pixels at zoom 1.0. Everything stored on a wall is in these units;
//! only the interaction layer ever sees screen coordinates.

pub const NOTE_MIN_WIDTH: f64 = 120.0;
pub const NOTE_MAX_WIDTH: f64 = 400.0;
pub const NOTE_MIN_HEIGHT: f64 = 80.0;
pub const NOTE_MAX_HEIGHT: f64 = 400.0;

pub const DEFAULT_NOTE_WIDTH: f64 = 200.0;
pub const DEFAULT_NOTE_HEIGHT: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamps both axes into non-negative wall space. Non-finite components become 0.
    pub fn clamp_to_wall(self) -> Self {
        Self {
            x: non_negative(self.x),
            y: non_negative(self.y),
        }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_NOTE_WIDTH,
            height: DEFAULT_NOTE_HEIGHT,
        }
    }
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamps into the note size bounds `[120, 400] x [80, 400]`.
    pub fn clamp_to_note_bounds(self) -> Self {
        Self {
            width: clamp_finite(self.width, NOTE_MIN_WIDTH, NOTE_MAX_WIDTH),
            height: clamp_finite(self.height, NOTE_MIN_HEIGHT, NOTE_MAX_HEIGHT),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
