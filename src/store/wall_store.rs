// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::format::{
    document_to_json, export_wall_pretty, note_from_json, parse_wall, wall_from_json,
    DocumentError, WallJson,
};
use crate::model::{
    Connection, ConnectionId, IdGenerator, Note, NoteDate, NoteId, NotePatch, Point, Size,
    ThemeId, Wall, WallId, WallPatch, DEFAULT_WALL_NAME, NOTE_COLORS,
};
use crate::query::{search_notes, SearchError, SearchMode};
use crate::ui::{TempConnection, UiState};

use super::clock::{Clock, SystemClock};
use super::events::{Listener, Listeners, StoreEvent, SubscriptionId};
use super::storage::{load_document, save_document, Storage};

pub const IMPORTED_WALL_NAME: &str = "Imported Wall";
pub const IMPORTED_SUFFIX: &str = " (imported)";
pub const DUPLICATE_OFFSET: f64 = 24.0;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid file: {0}")]
    Document(#[from] DocumentError),
}

impl ImportError {
    /// Short message meant for the person who picked the file.
    pub fn user_message(&self) -> &'static str {
        "Invalid file"
    }
}

/// Result of [`WallStore::add_connection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Added(ConnectionId),
    SelfLoop,
    Duplicate,
    MissingWall,
    MissingNote,
}

/// Result of one click on a note's link control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClick {
    /// Drawing started from this note.
    Pending(NoteId),
    /// Clicked the pending source again.
    Cancelled,
    /// Clicked a second note; drawing is over either way.
    Attempted(ConnectOutcome),
}

/// Owns every wall, the active-wall selection and the transient UI state.
///
/// Each mutation runs to completion, writes the whole document through the injected
/// [`Storage`], then notifies listeners. Unknown ids are no-ops.
pub struct WallStore {
    walls: Vec<Wall>,
    active_wall_id: Option<WallId>,
    ui: UiState,
    storage: Box<dyn Storage>,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    listeners: Listeners,
}

impl fmt::Debug for WallStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WallStore")
            .field("walls", &self.walls)
            .field("active_wall_id", &self.active_wall_id)
            .field("ui", &self.ui)
            .field("storage", &self.storage.describe())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WallStore {
    /// Empty store over `storage`. Call [`WallStore::hydrate`] to load it.
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            walls: Vec::new(),
            active_wall_id: None,
            ui: UiState::default(),
            storage: Box::new(storage),
            ids: IdGenerator::new(),
            clock: Box::new(SystemClock),
            listeners: Listeners::default(),
        }
    }

    /// Builds and hydrates in one go.
    pub fn open(storage: impl Storage + 'static) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn wall(&self, wall_id: &WallId) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.wall_id() == wall_id)
    }

    pub fn note(&self, wall_id: &WallId, note_id: &NoteId) -> Option<&Note> {
        self.wall(wall_id).and_then(|wall| wall.note(note_id))
    }

    pub fn active_wall_id(&self) -> Option<&WallId> {
        self.active_wall_id.as_ref()
    }

    pub fn active_wall(&self) -> Option<&Wall> {
        self.active_wall_id
            .as_ref()
            .and_then(|wall_id| self.wall(wall_id))
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn zoom(&self) -> f64 {
        self.ui.zoom()
    }

    pub fn search_query(&self) -> &str {
        self.ui.search_query()
    }

    pub fn connection_source(&self) -> Option<&NoteId> {
        self.ui.connection_source()
    }

    pub fn temp_connection(&self) -> Option<&TempConnection> {
        self.ui.temp_connection()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let listener: Listener = Box::new(listener);
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    /// Replaces in-memory state with the persisted document.
    ///
    /// Every persisted wall is adopted. Unusable or repeated ids get fresh ones and
    /// connections to missing notes are dropped, each with a warning. With no wall at all,
    /// one empty "My Wall" is created and made active. A stale active id falls back to the
    /// first wall.
    pub fn hydrate(&mut self) {
        let now = self.now();
        let mut walls: Vec<Wall> = Vec::new();
        let mut requested_active = None;

        if let Some(document) = load_document(self.storage.as_ref()) {
            requested_active = document.active_wall_id;
            for json in document.walls {
                let mut json = self.repair_ids(json, now);
                if walls.iter().any(|known| known.wall_id().as_str() == json.id) {
                    let fresh: WallId = self.ids.next_id(now);
                    tracing::warn!(raw = %json.id, wall_id = %fresh, "re-identifying wall with repeated id");
                    json.id = fresh.into_string();
                }
                match wall_from_json(json) {
                    Ok(mut wall) => {
                        wall.set_theme(ThemeId::default());
                        walls.push(wall);
                    }
                    Err(err) => tracing::warn!(%err, "skipping unreadable wall"),
                }
            }
        }

        if walls.is_empty() {
            let wall = Wall::new(self.ids.next_id(now), DEFAULT_WALL_NAME, ThemeId::default(), now);
            tracing::info!(wall_id = %wall.wall_id(), "starting with a fresh wall");
            walls.push(wall);
        }

        let active = requested_active
            .and_then(|wanted| {
                walls
                    .iter()
                    .find(|wall| wall.wall_id().as_str() == wanted)
                    .map(|wall| wall.wall_id().clone())
            })
            .or_else(|| walls.first().map(|wall| wall.wall_id().clone()));

        tracing::info!(walls = walls.len(), active = ?active, "hydrated");
        self.walls = walls;
        self.active_wall_id = active;
        self.ui.set_connection_source(None);
        self.ui.set_temp_connection(None);
        self.emit(StoreEvent::Hydrated {
            wall_count: self.walls.len(),
        });
    }

    /// Gives unusable or repeated note and connection ids fresh ones, rewrites connection
    /// endpoints to match, and drops connections whose endpoints are not on the wall.
    fn repair_ids(&mut self, mut json: WallJson, now: i64) -> WallJson {
        if WallId::new(json.id.clone()).is_err() {
            let fresh: WallId = self.ids.next_id(now);
            tracing::warn!(raw = %json.id, wall_id = %fresh, "re-identifying wall with unusable id");
            json.id = fresh.into_string();
        }

        let mut endpoints: HashMap<String, String> = HashMap::with_capacity(json.notes.len());
        let mut note_ids: HashSet<String> = HashSet::with_capacity(json.notes.len());
        for note in &mut json.notes {
            let usable = NoteId::new(note.id.clone()).is_ok() && !note_ids.contains(&note.id);
            if !usable {
                let fresh: NoteId = self.ids.next_id(now);
                tracing::warn!(wall_id = %json.id, raw = %note.id, note_id = %fresh, "re-identifying note");
                let raw = std::mem::replace(&mut note.id, fresh.into_string());
                endpoints.entry(raw).or_insert_with(|| note.id.clone());
            } else {
                endpoints.insert(note.id.clone(), note.id.clone());
            }
            note_ids.insert(note.id.clone());
        }

        let mut connection_ids: HashSet<String> = HashSet::with_capacity(json.connections.len());
        let connections = std::mem::take(&mut json.connections);
        for mut conn in connections {
            let (Some(from), Some(to)) = (
                endpoints.get(&conn.from_note_id),
                endpoints.get(&conn.to_note_id),
            ) else {
                tracing::warn!(
                    wall_id = %json.id,
                    from = %conn.from_note_id,
                    to = %conn.to_note_id,
                    "dropping connection to a missing note"
                );
                continue;
            };
            conn.from_note_id = from.clone();
            conn.to_note_id = to.clone();
            if ConnectionId::new(conn.id.clone()).is_err() || connection_ids.contains(&conn.id) {
                let fresh: ConnectionId = self.ids.next_id(now);
                tracing::warn!(wall_id = %json.id, raw = %conn.id, connection_id = %fresh, "re-identifying connection");
                conn.id = fresh.into_string();
            }
            connection_ids.insert(conn.id.clone());
            json.connections.push(conn);
        }

        json
    }

    /// Writes the whole document. Returns whether storage accepted it.
    pub fn persist(&mut self) -> bool {
        let document = document_to_json(&self.walls, self.active_wall_id.as_ref());
        save_document(self.storage.as_mut(), &document)
    }

    /// `None` clears the selection. Unknown ids are ignored.
    pub fn set_active_wall(&mut self, wall_id: Option<&WallId>) -> bool {
        if let Some(wall_id) = wall_id {
            if self.wall(wall_id).is_none() {
                tracing::debug!(%wall_id, "set_active_wall: unknown wall");
                return false;
            }
        }
        self.active_wall_id = wall_id.cloned();
        self.clear_connection_drawing();
        self.commit(StoreEvent::ActiveWallChanged {
            wall_id: self.active_wall_id.clone(),
        });
        true
    }

    /// Appends an empty wall and makes it active. A blank name becomes "My Wall".
    pub fn create_wall(&mut self, name: Option<&str>, theme: Option<ThemeId>) -> Wall {
        let now = self.now();
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_WALL_NAME);
        let wall = Wall::new(self.ids.next_id(now), name, theme.unwrap_or_default(), now);
        tracing::debug!(wall_id = %wall.wall_id(), name, "create wall");

        self.walls.push(wall.clone());
        self.active_wall_id = Some(wall.wall_id().clone());
        self.clear_connection_drawing();
        self.commit(StoreEvent::WallCreated {
            wall_id: wall.wall_id().clone(),
        });
        wall
    }

    /// Renames and/or re-themes a wall. Blank names are ignored.
    pub fn update_wall(&mut self, wall_id: &WallId, patch: WallPatch) -> bool {
        let now = self.now();
        let Some(wall) = self.wall_mut(wall_id) else {
            tracing::debug!(%wall_id, "update_wall: unknown wall");
            return false;
        };

        if let Some(name) = patch.name.as_deref().map(str::trim) {
            if name.is_empty() {
                tracing::warn!(%wall_id, "ignoring blank wall name");
            } else {
                wall.set_name(name);
            }
        }
        if let Some(theme) = patch.theme {
            wall.set_theme(theme);
        }
        wall.touch(now);

        self.commit(StoreEvent::WallUpdated {
            wall_id: wall_id.clone(),
        });
        true
    }

    /// Removes a wall. If it was active, the first remaining wall (or none) takes over.
    pub fn delete_wall(&mut self, wall_id: &WallId) -> bool {
        let Some(index) = self.walls.iter().position(|wall| wall.wall_id() == wall_id) else {
            tracing::debug!(%wall_id, "delete_wall: unknown wall");
            return false;
        };
        let removed = self.walls.remove(index);

        let source_was_here = self
            .ui
            .connection_source()
            .is_some_and(|source| removed.note(source).is_some());
        let drag_was_here = self
            .ui
            .temp_connection()
            .is_some_and(|temp| removed.note(&temp.from_note_id).is_some());
        if source_was_here || drag_was_here {
            self.clear_connection_drawing();
        }

        if self.active_wall_id.as_ref() == Some(wall_id) {
            self.active_wall_id = self.walls.first().map(|wall| wall.wall_id().clone());
        }

        tracing::debug!(%wall_id, next_active = ?self.active_wall_id, "delete wall");
        self.commit(StoreEvent::WallDeleted {
            wall_id: wall_id.clone(),
        });
        true
    }

    /// Appends a note with the default size and empty content.
    ///
    /// Without a color a random palette color is used. An invalid date is logged and the
    /// note is created without one. Unknown walls yield `None`.
    pub fn add_note(
        &mut self,
        wall_id: &WallId,
        position: Point,
        color: Option<&str>,
        date: Option<&str>,
    ) -> Option<Note> {
        if self.wall(wall_id).is_none() {
            tracing::debug!(%wall_id, "add_note: unknown wall");
            return None;
        }

        let now = self.now();
        let color = match color.map(str::trim).filter(|color| !color.is_empty()) {
            Some(color) => color.to_owned(),
            None => NOTE_COLORS[self.ids.pick(NOTE_COLORS.len())].to_owned(),
        };
        let mut note = Note::new(
            self.ids.next_id(now),
            wall_id.clone(),
            color,
            position.clamp_to_wall(),
            now,
        );
        if let Some(raw) = date {
            note.set_date(parse_note_date(raw, note.note_id()).flatten());
        }

        let wall = self.wall_mut(wall_id)?;
        wall.notes_mut().push(note.clone());
        wall.touch(now);

        tracing::debug!(%wall_id, note_id = %note.note_id(), "add note");
        self.commit(StoreEvent::NoteAdded {
            wall_id: wall_id.clone(),
            note_id: note.note_id().clone(),
        });
        Some(note)
    }

    /// Shallow-merges `patch` into the note. Position and size are clamped; a malformed
    /// date leaves the current date in place.
    pub fn update_note(&mut self, wall_id: &WallId, note_id: &NoteId, patch: NotePatch) -> bool {
        self.edit_note(wall_id, note_id, |note| {
            if let Some(content) = patch.content {
                note.set_content(content);
            }
            if let Some(color) = patch.color {
                let color = color.trim();
                if color.is_empty() {
                    tracing::warn!(note_id = %note.note_id(), "ignoring blank note color");
                } else {
                    note.set_color(color);
                }
            }
            if let Some(position) = patch.position {
                note.set_position(position.clamp_to_wall());
            }
            if let Some(size) = patch.size {
                note.set_size(size.clamp_to_note_bounds());
            }
            if let Some(pinned) = patch.pinned {
                note.set_pinned(pinned);
            }
            if let Some(checked) = patch.checked {
                note.set_checked(checked);
            }
            match patch.date {
                None => {}
                Some(None) => note.set_date(None),
                Some(Some(raw)) => {
                    if let Some(date) = parse_note_date(&raw, note.note_id()) {
                        note.set_date(date);
                    }
                }
            }
        })
    }

    /// Removes a note and every connection touching it.
    pub fn delete_note(&mut self, wall_id: &WallId, note_id: &NoteId) -> bool {
        let now = self.now();
        let Some(wall) = self.wall_mut(wall_id) else {
            tracing::debug!(%wall_id, "delete_note: unknown wall");
            return false;
        };
        let Some(index) = wall.notes().iter().position(|note| note.note_id() == note_id) else {
            tracing::debug!(%wall_id, %note_id, "delete_note: unknown note");
            return false;
        };

        wall.notes_mut().remove(index);
        wall.connections_mut().retain(|conn| !conn.touches(note_id));
        wall.touch(now);

        if self.ui.connection_source() == Some(note_id) {
            self.set_connection_source(None);
        }
        if self
            .ui
            .temp_connection()
            .is_some_and(|temp| &temp.from_note_id == note_id)
        {
            self.set_temp_connection(None);
        }

        tracing::debug!(%wall_id, %note_id, "delete note");
        self.commit(StoreEvent::NoteDeleted {
            wall_id: wall_id.clone(),
            note_id: note_id.clone(),
        });
        true
    }

    /// Absolute move; negative coordinates are clamped to zero.
    pub fn move_note(&mut self, wall_id: &WallId, note_id: &NoteId, position: Point) -> bool {
        self.edit_note(wall_id, note_id, |note| {
            note.set_position(position.clamp_to_wall());
        })
    }

    /// Absolute resize, clamped into note bounds.
    pub fn resize_note(&mut self, wall_id: &WallId, note_id: &NoteId, size: Size) -> bool {
        self.edit_note(wall_id, note_id, |note| {
            note.set_size(size.clamp_to_note_bounds());
        })
    }

    pub fn toggle_pin_note(&mut self, wall_id: &WallId, note_id: &NoteId) -> bool {
        self.edit_note(wall_id, note_id, |note| note.set_pinned(!note.is_pinned()))
    }

    pub fn toggle_check_note(&mut self, wall_id: &WallId, note_id: &NoteId) -> bool {
        self.edit_note(wall_id, note_id, |note| note.set_checked(!note.is_checked()))
    }

    /// Copies a note under a fresh id, offset down and to the right.
    pub fn duplicate_note(&mut self, wall_id: &WallId, note_id: &NoteId) -> Option<Note> {
        let now = self.now();
        let new_id: NoteId = self.ids.next_id(now);

        let wall = self.wall_mut(wall_id)?;
        let mut copy = wall.note(note_id)?.clone();
        copy.set_note_id(new_id);
        copy.set_position(
            copy.position()
                .offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET)
                .clamp_to_wall(),
        );
        copy.set_timestamps(now, now);
        wall.notes_mut().push(copy.clone());
        wall.touch(now);

        tracing::debug!(%wall_id, from = %note_id, note_id = %copy.note_id(), "duplicate note");
        self.commit(StoreEvent::NoteAdded {
            wall_id: wall_id.clone(),
            note_id: copy.note_id().clone(),
        });
        Some(copy)
    }

    /// Transient; not persisted.
    pub fn set_connection_source(&mut self, note_id: Option<NoteId>) {
        if self.ui.set_connection_source(note_id.clone()) {
            self.emit(StoreEvent::ConnectionSourceChanged { note_id });
        }
    }

    /// Transient; not persisted.
    pub fn set_temp_connection(&mut self, temp: Option<TempConnection>) {
        if self.ui.set_temp_connection(temp) {
            self.emit(StoreEvent::TempConnectionChanged);
        }
    }

    /// One click on a note's link control.
    ///
    /// Idle: the note becomes the pending source. Pending on the same note: back to idle.
    /// Pending on another note: try to connect the two, then back to idle.
    pub fn click_link(&mut self, wall_id: &WallId, note_id: &NoteId) -> LinkClick {
        match self.ui.connection_source().cloned() {
            None => {
                self.set_connection_source(Some(note_id.clone()));
                LinkClick::Pending(note_id.clone())
            }
            Some(source) if &source == note_id => {
                self.set_connection_source(None);
                LinkClick::Cancelled
            }
            Some(source) => {
                let outcome = self.add_connection(wall_id, &source, note_id);
                self.set_connection_source(None);
                LinkClick::Attempted(outcome)
            }
        }
    }

    /// Back to idle: no pending source, no rubber band.
    pub fn cancel_connection(&mut self) {
        self.clear_connection_drawing();
    }

    /// Connects two notes of a wall.
    ///
    /// A self-loop changes nothing. An existing connection between the pair (either
    /// direction) or a missing endpoint only ends drawing. Otherwise the connection is
    /// appended and drawing ends.
    pub fn add_connection(&mut self, wall_id: &WallId, from: &NoteId, to: &NoteId) -> ConnectOutcome {
        if from == to {
            return ConnectOutcome::SelfLoop;
        }
        let now = self.now();

        let rejected = match self.wall(wall_id) {
            None => Some(ConnectOutcome::MissingWall),
            Some(wall) if wall.note(from).is_none() || wall.note(to).is_none() => {
                Some(ConnectOutcome::MissingNote)
            }
            Some(wall) if wall.has_connection_between(from, to) => Some(ConnectOutcome::Duplicate),
            Some(_) => None,
        };
        if let Some(outcome) = rejected {
            tracing::debug!(%wall_id, %from, %to, ?outcome, "connection not added");
            self.set_connection_source(None);
            return outcome;
        }

        let connection_id: ConnectionId = self.ids.next_id(now);
        let Some(wall) = self.wall_mut(wall_id) else {
            return ConnectOutcome::MissingWall;
        };
        wall.connections_mut().push(Connection::new(
            connection_id.clone(),
            from.clone(),
            to.clone(),
        ));
        wall.touch(now);

        self.set_connection_source(None);
        tracing::debug!(%wall_id, %from, %to, %connection_id, "add connection");
        self.commit(StoreEvent::ConnectionAdded {
            wall_id: wall_id.clone(),
            connection_id: connection_id.clone(),
        });
        ConnectOutcome::Added(connection_id)
    }

    pub fn remove_connection(&mut self, wall_id: &WallId, connection_id: &ConnectionId) -> bool {
        let now = self.now();
        let Some(wall) = self.wall_mut(wall_id) else {
            return false;
        };
        let before = wall.connections().len();
        wall.connections_mut()
            .retain(|conn| conn.connection_id() != connection_id);
        if wall.connections().len() == before {
            tracing::debug!(%wall_id, %connection_id, "remove_connection: unknown connection");
            return false;
        }
        wall.touch(now);

        self.commit(StoreEvent::ConnectionRemoved {
            wall_id: wall_id.clone(),
            connection_id: connection_id.clone(),
        });
        true
    }

    /// Pretty JSON of one wall; empty when the wall does not exist.
    pub fn export_wall_as_json(&self, wall_id: &WallId) -> String {
        let Some(wall) = self.wall(wall_id) else {
            return String::new();
        };
        match export_wall_pretty(wall) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%wall_id, %err, "cannot export wall");
                String::new()
            }
        }
    }

    /// Like [`WallStore::try_import_wall`] but collapses failures to `None`.
    pub fn import_wall(&mut self, json: &str) -> Option<Wall> {
        match self.try_import_wall(json) {
            Ok(wall) => Some(wall),
            Err(err) => {
                tracing::warn!(%err, "import rejected");
                None
            }
        }
    }

    /// Adds a wall from an exported file under fresh ids.
    ///
    /// Every note and connection gets a new id, connection endpoints follow their notes,
    /// and connections whose endpoints are not in the file are dropped. Nothing changes
    /// unless the whole file converts.
    pub fn try_import_wall(&mut self, json: &str) -> Result<Wall, ImportError> {
        let data = parse_wall(json)?;
        let now = self.now();

        let wall_id: WallId = self.ids.next_id(now);
        let name = match data.name.trim() {
            "" => IMPORTED_WALL_NAME,
            name => name,
        };
        let mut wall = Wall::new(
            wall_id.clone(),
            format!("{name}{IMPORTED_SUFFIX}"),
            ThemeId::default(),
            now,
        );

        let mut remap: HashMap<String, NoteId> = HashMap::with_capacity(data.notes.len());
        for mut note_json in data.notes {
            let new_id: NoteId = self.ids.next_id(now);
            let old_id = std::mem::replace(&mut note_json.id, new_id.to_string());
            note_json.created_at = now;
            note_json.updated_at = now;
            wall.notes_mut().push(note_from_json(note_json, &wall_id)?);
            remap.insert(old_id, new_id);
        }

        let mut dropped = 0usize;
        for conn in data.connections {
            let (Some(from), Some(to)) = (remap.get(&conn.from_note_id), remap.get(&conn.to_note_id))
            else {
                dropped += 1;
                continue;
            };
            if from == to || wall.has_connection_between(from, to) {
                dropped += 1;
                continue;
            }
            let connection_id: ConnectionId = self.ids.next_id(now);
            wall.connections_mut()
                .push(Connection::new(connection_id, from.clone(), to.clone()));
        }

        tracing::info!(
            %wall_id,
            notes = wall.notes().len(),
            connections = wall.connections().len(),
            dropped,
            "imported wall"
        );
        self.walls.push(wall.clone());
        self.active_wall_id = Some(wall_id.clone());
        self.clear_connection_drawing();
        self.commit(StoreEvent::WallImported { wall_id });
        Ok(wall)
    }

    /// Stores the zoom clamped into `[0.25, 2.0]` and returns it.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        let before = self.ui.zoom();
        let zoom = self.ui.set_zoom(zoom);
        if zoom != before {
            self.emit(StoreEvent::ZoomChanged { zoom });
        }
        zoom
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        if self.ui.set_search_query(query) {
            self.emit(StoreEvent::SearchQueryChanged);
        }
    }

    /// Notes of the active wall matching the current search query.
    pub fn search_active_wall(&self, mode: SearchMode) -> Result<Vec<&Note>, SearchError> {
        match self.active_wall() {
            Some(wall) => search_notes(wall.notes(), self.ui.search_query(), mode),
            None => Ok(Vec::new()),
        }
    }

    fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    fn wall_mut(&mut self, wall_id: &WallId) -> Option<&mut Wall> {
        self.walls.iter_mut().find(|wall| wall.wall_id() == wall_id)
    }

    fn edit_note(
        &mut self,
        wall_id: &WallId,
        note_id: &NoteId,
        edit: impl FnOnce(&mut Note),
    ) -> bool {
        let now = self.now();
        let Some(wall) = self.wall_mut(wall_id) else {
            tracing::debug!(%wall_id, %note_id, "edit note: unknown wall");
            return false;
        };
        let Some(note) = wall.note_mut(note_id) else {
            tracing::debug!(%wall_id, %note_id, "edit note: unknown note");
            return false;
        };
        edit(note);
        note.touch(now);
        wall.touch(now);

        self.commit(StoreEvent::NoteUpdated {
            wall_id: wall_id.clone(),
            note_id: note_id.clone(),
        });
        true
    }

    fn clear_connection_drawing(&mut self) {
        self.set_connection_source(None);
        self.set_temp_connection(None);
    }

    fn commit(&mut self, event: StoreEvent) {
        self.persist();
        self.emit(event);
    }

    fn emit(&mut self, event: StoreEvent) {
        self.listeners.notify(&event);
    }
}

/// `Some(None)` for a blank date (clears it), `Some(Some(_))` for a valid one, `None` for
/// a malformed one.
fn parse_note_date(raw: &str, note_id: &NoteId) -> Option<Option<NoteDate>> {
    if raw.trim().is_empty() {
        return Some(None);
    }
    match raw.parse::<NoteDate>() {
        Ok(date) => Some(Some(date)),
        Err(err) => {
            tracing::warn!(%note_id, %err, "rejecting note date");
            None
        }
    }
}
