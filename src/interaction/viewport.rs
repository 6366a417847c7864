// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Point;
use crate::ui::clamp_zoom;

/// Maps between wall space and screen space. Screen = wall × zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Viewport {
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn to_screen(&self, wall: Point) -> Point {
        Point::new(wall.x * self.zoom, wall.y * self.zoom)
    }

    pub fn to_wall(&self, screen: Point) -> Point {
        Point::new(screen.x / self.zoom, screen.y / self.zoom)
    }

    /// Screen-space delta to wall-space delta.
    pub fn delta_to_wall(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.zoom, dy / self.zoom)
    }
}

/// Terminal cell to screen pixel mapping for pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Column/row where the wall canvas starts.
    pub origin_column: u16,
    pub origin_row: u16,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            origin_column: 0,
            origin_row: 0,
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl CellMetrics {
    /// Screen point at the center of a cell, relative to the canvas origin.
    pub fn cell_to_screen(&self, column: u16, row: u16) -> Point {
        let column = f64::from(column.saturating_sub(self.origin_column));
        let row = f64::from(row.saturating_sub(self.origin_row));
        Point::new(
            (column + 0.5) * self.cell_width,
            (row + 0.5) * self.cell_height,
        )
    }
}
