// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transient UI state held next to the walls.
//!
//! None of this is persisted: zoom, the search box, and an in-progress connection all reset
//! when the store is rebuilt.

use crate::model::{NoteId, Point};

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Clamps a zoom factor into `[0.25, 2.0]`. NaN resets to the default.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return DEFAULT_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Rubber-band line drawn while dragging from a note's link control.
#[derive(Debug, Clone, PartialEq)]
pub struct TempConnection {
    pub from_note_id: NoteId,
    /// Free end of the line, in wall space.
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    rev: u64,
    zoom: f64,
    search_query: String,
    connection_source: Option<NoteId>,
    temp_connection: Option<TempConnection>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            rev: 0,
            zoom: DEFAULT_ZOOM,
            search_query: String::new(),
            connection_source: None,
            temp_connection: None,
        }
    }
}

impl UiState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn connection_source(&self) -> Option<&NoteId> {
        self.connection_source.as_ref()
    }

    pub fn temp_connection(&self) -> Option<&TempConnection> {
        self.temp_connection.as_ref()
    }

    /// Returns the clamped zoom that was stored.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        let zoom = clamp_zoom(zoom);
        if self.zoom != zoom {
            self.zoom = zoom;
            self.bump();
        }
        zoom
    }

    /// Returns whether the query changed.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.search_query == query {
            return false;
        }
        self.search_query = query;
        self.bump();
        true
    }

    /// Returns whether the source changed.
    pub fn set_connection_source(&mut self, note_id: Option<NoteId>) -> bool {
        if self.connection_source == note_id {
            return false;
        }
        self.connection_source = note_id;
        self.bump();
        true
    }

    /// Returns whether the temp connection changed.
    pub fn set_temp_connection(&mut self, temp: Option<TempConnection>) -> bool {
        if self.temp_connection == temp {
            return false;
        }
        self.temp_connection = temp;
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
