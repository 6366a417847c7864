// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON shapes for the persisted document and for wall export/import files.
//!
//! Keys are camelCase so documents written by the browser board load unchanged. The model
//! types never derive serde themselves; everything goes through the `*Json` structs here.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::{
    Connection, ConnectionId, IdError, Note, NoteDate, NoteId, Point, Size, ThemeId, Wall,
    WallId, DEFAULT_NOTE_COLOR, DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH,
};

/// Version written into every persisted document. Documents without one are version 1.
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {field} {value:?}: {source}")]
    InvalidId {
        field: &'static str,
        value: String,
        #[source]
        source: IdError,
    },
    #[error("unsupported document version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// `{ walls, activeWallId }` plus the schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDocumentJson {
    #[serde(default = "legacy_version")]
    pub version: u32,
    #[serde(default, deserialize_with = "salvage_walls")]
    #[schemars(with = "Vec<WallJson>")]
    pub walls: Vec<WallJson>,
    #[serde(default)]
    pub active_wall_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WallJson {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub notes: Vec<NoteJson>,
    #[serde(default)]
    pub connections: Vec<ConnectionJson>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteJson {
    pub id: String,
    #[serde(default)]
    pub wall_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionJson {
    #[serde(default)]
    pub id: String,
    pub from_note_id: String,
    pub to_note_id: String,
}

/// Reads persisted walls one entry at a time. A malformed wall, note or connection is
/// dropped on its own; the rest of the document still loads.
fn salvage_walls<'de, D>(deserializer: D) -> Result<Vec<WallJson>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| salvage_wall(index, value))
        .collect())
}

fn salvage_wall(index: usize, value: Value) -> Option<WallJson> {
    let Value::Object(mut fields) = value else {
        tracing::warn!(index, "dropping persisted wall that is not an object");
        return None;
    };
    let notes = salvage_entries::<NoteJson>(&mut fields, "notes", index);
    let connections = salvage_entries::<ConnectionJson>(&mut fields, "connections", index);

    match serde_json::from_value::<WallJson>(Value::Object(fields)) {
        Ok(mut wall) => {
            wall.notes = notes;
            wall.connections = connections;
            Some(wall)
        }
        Err(err) => {
            tracing::warn!(index, %err, "dropping unreadable persisted wall");
            None
        }
    }
}

fn salvage_entries<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &'static str,
    wall_index: usize,
) -> Vec<T> {
    let items = match fields.remove(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!(wall_index, key, "dropping persisted entries that are not a list");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(wall_index, key, %err, "dropping malformed persisted entry");
                None
            }
        })
        .collect()
}

fn legacy_version() -> u32 {
    1
}

fn default_theme() -> String {
    ThemeId::default().as_str().to_owned()
}

fn default_color() -> String {
    DEFAULT_NOTE_COLOR.to_owned()
}

fn default_width() -> f64 {
    DEFAULT_NOTE_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_NOTE_HEIGHT
}

pub fn note_to_json(note: &Note) -> NoteJson {
    NoteJson {
        id: note.note_id().to_string(),
        wall_id: note.wall_id().to_string(),
        content: note.content().to_owned(),
        color: note.color().to_owned(),
        x: note.x(),
        y: note.y(),
        width: note.size().width,
        height: note.size().height,
        created_at: note.created_at(),
        updated_at: note.updated_at(),
        is_pinned: Some(note.is_pinned()),
        date: note.date().map(|date| date.to_string()),
        checked: note.is_checked().then_some(true),
    }
}

pub fn wall_to_json(wall: &Wall) -> WallJson {
    WallJson {
        id: wall.wall_id().to_string(),
        name: wall.name().to_owned(),
        theme: wall.theme().as_str().to_owned(),
        notes: wall.notes().iter().map(note_to_json).collect(),
        connections: wall
            .connections()
            .iter()
            .map(|conn| ConnectionJson {
                id: conn.connection_id().to_string(),
                from_note_id: conn.from_note_id().to_string(),
                to_note_id: conn.to_note_id().to_string(),
            })
            .collect(),
        created_at: wall.created_at(),
        updated_at: wall.updated_at(),
    }
}

/// Builds a model note. Sizes are clamped into note bounds, positions into non-negative
/// wall space, and a malformed date is dropped rather than failing the whole document.
pub fn note_from_json(json: NoteJson, wall_id: &WallId) -> Result<Note, DocumentError> {
    let note_id = parse_id::<NoteId>("note id", json.id)?;
    let position = Point::new(json.x, json.y).clamp_to_wall();
    let mut note = Note::new(note_id, wall_id.clone(), json.color, position, json.created_at);
    note.set_timestamps(json.created_at, json.updated_at);
    note.set_content(json.content);
    note.set_size(Size::new(json.width, json.height).clamp_to_note_bounds());
    note.set_pinned(json.is_pinned.unwrap_or(false));
    note.set_checked(json.checked.unwrap_or(false));

    if let Some(raw) = json.date.as_deref().filter(|raw| !raw.trim().is_empty()) {
        match raw.parse::<NoteDate>() {
            Ok(date) => note.set_date(Some(date)),
            Err(err) => {
                tracing::warn!(note_id = %note.note_id(), %err, "dropping malformed note date");
            }
        }
    }

    Ok(note)
}

/// Builds a model wall, keeping every id as written.
pub fn wall_from_json(json: WallJson) -> Result<Wall, DocumentError> {
    let wall_id = parse_id::<WallId>("wall id", json.id)?;
    let theme = ThemeId::from_name_or_default(&json.theme);
    let mut wall = Wall::new(wall_id.clone(), json.name, theme, json.created_at);
    wall.set_timestamps(json.created_at, json.updated_at);

    for note in json.notes {
        let note = note_from_json(note, &wall_id)?;
        wall.notes_mut().push(note);
    }

    for conn in json.connections {
        let connection = Connection::new(
            parse_id::<ConnectionId>("connection id", conn.id)?,
            parse_id::<NoteId>("connection fromNoteId", conn.from_note_id)?,
            parse_id::<NoteId>("connection toNoteId", conn.to_note_id)?,
        );
        wall.connections_mut().push(connection);
    }

    Ok(wall)
}

pub fn document_to_json(walls: &[Wall], active_wall_id: Option<&WallId>) -> PersistedDocumentJson {
    PersistedDocumentJson {
        version: DOCUMENT_VERSION,
        walls: walls.iter().map(wall_to_json).collect(),
        active_wall_id: active_wall_id.map(ToString::to_string),
    }
}

pub fn parse_document(input: &str) -> Result<PersistedDocumentJson, DocumentError> {
    let document: PersistedDocumentJson = serde_json::from_str(input)?;
    if document.version > DOCUMENT_VERSION {
        return Err(DocumentError::UnsupportedVersion {
            found: document.version,
            supported: DOCUMENT_VERSION,
        });
    }
    Ok(document)
}

pub fn parse_wall(input: &str) -> Result<WallJson, DocumentError> {
    Ok(serde_json::from_str(input)?)
}

pub fn export_wall_pretty(wall: &Wall) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&wall_to_json(wall))
}

/// JSON Schema of the persisted document.
pub fn document_schema() -> schemars::Schema {
    schemars::schema_for!(PersistedDocumentJson)
}

fn parse_id<I>(field: &'static str, value: String) -> Result<I, DocumentError>
where
    I: TryFrom<String, Error = IdError>,
{
    I::try_from(value.clone()).map_err(|source| DocumentError::InvalidId {
        field,
        value,
        source,
    })
}
