// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Walls own notes and connections; everything is positioned in wall-space units.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;
pub mod note;
pub mod wall;

pub use geometry::{
    Point, Size, DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH, NOTE_MAX_HEIGHT, NOTE_MAX_WIDTH,
    NOTE_MIN_HEIGHT, NOTE_MIN_WIDTH,
};
pub use ids::{ConnectionId, Id, IdError, IdGenerator, NoteId, WallId};
pub use note::{Note, NoteDate, NoteDateError, NotePatch, DEFAULT_NOTE_COLOR, NOTE_COLORS};
pub use wall::{Connection, ThemeId, UnknownThemeError, Wall, WallPatch, DEFAULT_WALL_NAME};
