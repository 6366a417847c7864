// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{ConnectionId, NoteId, WallId};
use super::note::Note;

pub const DEFAULT_WALL_NAME: &str = "My Wall";

/// Visual theme of a wall. Only one theme exists; unknown names fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    SkyBlue,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkyBlue => "skyblue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SkyBlue => "Sky Blue",
        }
    }

    /// Lenient parse used when reading documents: anything unknown becomes the default.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownThemeError(pub String);

impl FromStr for ThemeId {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skyblue" | "sky-blue" | "sky blue" => Ok(Self::SkyBlue),
            other => Err(UnknownThemeError(other.to_owned())),
        }
    }
}

/// Undirected link between two notes of the same wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    connection_id: ConnectionId,
    from_note_id: NoteId,
    to_note_id: NoteId,
}

impl Connection {
    pub fn new(connection_id: ConnectionId, from_note_id: NoteId, to_note_id: NoteId) -> Self {
        Self {
            connection_id,
            from_note_id,
            to_note_id,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn from_note_id(&self) -> &NoteId {
        &self.from_note_id
    }

    pub fn to_note_id(&self) -> &NoteId {
        &self.to_note_id
    }

    pub fn touches(&self, note_id: &NoteId) -> bool {
        &self.from_note_id == note_id || &self.to_note_id == note_id
    }

    /// Order-independent endpoint match.
    pub fn joins(&self, a: &NoteId, b: &NoteId) -> bool {
        (&self.from_note_id == a && &self.to_note_id == b)
            || (&self.from_note_id == b && &self.to_note_id == a)
    }
}

/// Partial wall update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallPatch {
    pub name: Option<String>,
    pub theme: Option<ThemeId>,
}

impl WallPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.theme.is_none()
    }
}

/// A named workspace of notes and connections.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    wall_id: WallId,
    name: String,
    theme: ThemeId,
    notes: Vec<Note>,
    connections: Vec<Connection>,
    created_at: i64,
    updated_at: i64,
}

impl Wall {
    pub fn new(wall_id: WallId, name: impl Into<String>, theme: ThemeId, now_millis: i64) -> Self {
        Self {
            wall_id,
            name: name.into(),
            theme,
            notes: Vec::new(),
            connections: Vec::new(),
            created_at: now_millis,
            updated_at: now_millis,
        }
    }

    pub fn wall_id(&self) -> &WallId {
        &self.wall_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connections_mut(&mut self) -> &mut Vec<Connection> {
        &mut self.connections
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    pub fn note(&self, note_id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.note_id() == note_id)
    }

    pub fn note_mut(&mut self, note_id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.note_id() == note_id)
    }

    pub fn connection(&self, connection_id: &ConnectionId) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|conn| conn.connection_id() == connection_id)
    }

    pub fn has_connection_between(&self, a: &NoteId, b: &NoteId) -> bool {
        self.connections.iter().any(|conn| conn.joins(a, b))
    }

    /// Connections with at least one endpoint on `note_id`.
    pub fn connections_of<'a>(
        &'a self,
        note_id: &'a NoteId,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |conn| conn.touches(note_id))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
    }

    pub(crate) fn set_timestamps(&mut self, created_at: i64, updated_at: i64) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    pub(crate) fn touch(&mut self, now_millis: i64) {
        self.updated_at = now_millis;
    }
}
