// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{NoteId, Point, Wall, WallId};
use crate::store::WallStore;
use crate::ui::TempConnection;

use super::gesture::{ConnectGesture, DragGesture, Gesture, ResizeGesture};
use super::input::{Command, Input, PointerEvent};
use super::placement::{next_note_position, note_origin_for_pointer};
use super::viewport::Viewport;

/// Side of the square resize handle in a note's bottom-right corner, wall units.
pub const RESIZE_HANDLE: f64 = 16.0;
/// Side of the square link control in a note's top-right corner, wall units.
pub const LINK_HANDLE: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Canvas,
    Note(NoteId),
    ResizeHandle(NoteId),
    LinkHandle(NoteId),
}

impl PointerTarget {
    pub fn note_id(&self) -> Option<&NoteId> {
        match self {
            Self::Canvas => None,
            Self::Note(id) | Self::ResizeHandle(id) | Self::LinkHandle(id) => Some(id),
        }
    }
}

/// What sits under a wall-space point. Later notes are drawn on top, so they win.
pub fn hit_test(wall: &Wall, at: Point) -> PointerTarget {
    for note in wall.notes().iter().rev() {
        let (left, top) = (note.x(), note.y());
        let (right, bottom) = (left + note.size().width, top + note.size().height);
        if at.x < left || at.x > right || at.y < top || at.y > bottom {
            continue;
        }
        let id = note.note_id().clone();
        if at.x >= right - LINK_HANDLE && at.y <= top + LINK_HANDLE {
            return PointerTarget::LinkHandle(id);
        }
        if at.x >= right - RESIZE_HANDLE && at.y >= bottom - RESIZE_HANDLE {
            return PointerTarget::ResizeHandle(id);
        }
        return PointerTarget::Note(id);
    }
    PointerTarget::Canvas
}

/// Applies pointer gestures and commands to the active wall of a store.
#[derive(Debug, Clone, Default)]
pub struct WallController {
    gesture: Option<Gesture>,
    selected: Option<NoteId>,
}

impl WallController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Note last pressed; target of [`Command::DeleteSelected`].
    pub fn selected(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    pub fn handle(&mut self, store: &mut WallStore, input: Input) {
        match input {
            Input::Pointer(event) => self.handle_pointer(store, event),
            Input::Command(command) => self.handle_command(store, command),
        }
    }

    fn handle_pointer(&mut self, store: &mut WallStore, event: PointerEvent) {
        let Some(wall_id) = store.active_wall_id().cloned() else {
            return;
        };
        let viewport = Viewport::new(store.zoom());

        match event {
            PointerEvent::Down(pointer) => self.pointer_down(store, &wall_id, pointer, &viewport),
            PointerEvent::Move(pointer) => self.pointer_move(store, &wall_id, pointer, &viewport),
            PointerEvent::Up(pointer) => self.pointer_up(store, &wall_id, pointer, &viewport),
            PointerEvent::DoubleClick(pointer) => {
                if target_at(store, &wall_id, viewport.to_wall(pointer)) == PointerTarget::Canvas {
                    let origin = note_origin_for_pointer(pointer, &viewport);
                    if let Some(note) = store.add_note(&wall_id, origin, None, None) {
                        self.selected = Some(note.note_id().clone());
                    }
                }
            }
        }
    }

    fn pointer_down(&mut self, store: &mut WallStore, wall_id: &WallId, pointer: Point, viewport: &Viewport) {
        let at = viewport.to_wall(pointer);
        let target = target_at(store, wall_id, at);
        self.selected = target.note_id().cloned();

        self.gesture = match target {
            PointerTarget::Canvas => None,
            PointerTarget::Note(note_id) => store
                .note(wall_id, &note_id)
                .map(|note| note.position())
                .map(|position| Gesture::Drag(DragGesture::begin(note_id, position, pointer, viewport))),
            PointerTarget::ResizeHandle(note_id) => store
                .note(wall_id, &note_id)
                .map(|note| note.size())
                .map(|size| Gesture::Resize(ResizeGesture::begin(note_id, size, pointer))),
            PointerTarget::LinkHandle(note_id) => {
                store.set_temp_connection(Some(TempConnection {
                    from_note_id: note_id.clone(),
                    to: at,
                }));
                Some(Gesture::Connect(ConnectGesture::begin(note_id)))
            }
        };
    }

    fn pointer_move(&mut self, store: &mut WallStore, wall_id: &WallId, pointer: Point, viewport: &Viewport) {
        match &self.gesture {
            None => {}
            Some(Gesture::Drag(drag)) => {
                store.move_note(wall_id, drag.note_id(), drag.position_at(pointer, viewport));
            }
            Some(Gesture::Resize(resize)) => {
                store.resize_note(wall_id, resize.note_id(), resize.size_at(pointer, viewport));
            }
            Some(Gesture::Connect(connect)) => {
                store.set_temp_connection(Some(TempConnection {
                    from_note_id: connect.from_note_id().clone(),
                    to: connect.endpoint_at(pointer, viewport),
                }));
            }
        }
    }

    /// Releasing a connect drag over another note connects the two; releasing it on its
    /// own link control counts as a link click.
    fn pointer_up(&mut self, store: &mut WallStore, wall_id: &WallId, pointer: Point, viewport: &Viewport) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        match gesture {
            Gesture::Drag(drag) => {
                let position = drag.position_at(pointer, viewport);
                if store.note(wall_id, drag.note_id()).map(|note| note.position()) != Some(position) {
                    store.move_note(wall_id, drag.note_id(), position);
                }
            }
            Gesture::Resize(resize) => {
                let size = resize.size_at(pointer, viewport);
                if store.note(wall_id, resize.note_id()).map(|note| note.size()) != Some(size) {
                    store.resize_note(wall_id, resize.note_id(), size);
                }
            }
            Gesture::Connect(connect) => {
                let from = connect.from_note_id();
                match target_at(store, wall_id, viewport.to_wall(pointer)) {
                    PointerTarget::LinkHandle(note_id) if &note_id == from => {
                        store.click_link(wall_id, &note_id);
                    }
                    target => {
                        if let Some(to) = target.note_id().filter(|to| *to != from) {
                            store.add_connection(wall_id, from, to);
                        }
                    }
                }
                store.set_temp_connection(None);
            }
        }
    }

    fn handle_command(&mut self, store: &mut WallStore, command: Command) {
        match command {
            Command::AddNote => {
                let Some(wall) = store.active_wall() else {
                    return;
                };
                let wall_id = wall.wall_id().clone();
                let position = next_note_position(wall);
                if let Some(note) = store.add_note(&wall_id, position, None, None) {
                    self.selected = Some(note.note_id().clone());
                }
            }
            Command::Cancel => {
                if matches!(self.gesture, Some(Gesture::Connect(_))) {
                    self.gesture = None;
                }
                store.cancel_connection();
            }
            Command::DeleteSelected => {
                let (Some(wall_id), Some(note_id)) =
                    (store.active_wall_id().cloned(), self.selected.take())
                else {
                    return;
                };
                store.delete_note(&wall_id, &note_id);
            }
            Command::ZoomBy(step) => {
                store.set_zoom(store.zoom() + step);
            }
        }
    }
}

fn target_at(store: &WallStore, wall_id: &WallId, at: Point) -> PointerTarget {
    store
        .wall(wall_id)
        .map_or(PointerTarget::Canvas, |wall| hit_test(wall, at))
}

#[cfg(test)]
mod tests;
