// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer gestures on notes. Pointers are in screen space; results are in wall space.

use crate::model::{NoteId, Point, Size};

use super::viewport::Viewport;

/// Moving a note. Holds the pointer's offset from the note's screen position so the note
/// does not jump under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    note_id: NoteId,
    offset: Point,
}

impl DragGesture {
    pub fn begin(note_id: NoteId, note_position: Point, pointer: Point, viewport: &Viewport) -> Self {
        let on_screen = viewport.to_screen(note_position);
        Self {
            note_id,
            offset: Point::new(pointer.x - on_screen.x, pointer.y - on_screen.y),
        }
    }

    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    /// Wall position for the current pointer, clamped to non-negative space.
    pub fn position_at(&self, pointer: Point, viewport: &Viewport) -> Point {
        viewport
            .to_wall(Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y))
            .clamp_to_wall()
    }
}

/// Resizing a note from its corner handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    note_id: NoteId,
    start_pointer: Point,
    start_size: Size,
}

impl ResizeGesture {
    pub fn begin(note_id: NoteId, size: Size, pointer: Point) -> Self {
        Self {
            note_id,
            start_pointer: pointer,
            start_size: size,
        }
    }

    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    /// Start size grown by the wall-space pointer delta, clamped into note bounds.
    pub fn size_at(&self, pointer: Point, viewport: &Viewport) -> Size {
        let (dx, dy) = viewport.delta_to_wall(
            pointer.x - self.start_pointer.x,
            pointer.y - self.start_pointer.y,
        );
        Size::new(self.start_size.width + dx, self.start_size.height + dy).clamp_to_note_bounds()
    }
}

/// Dragging a rubber band out of a note's link control.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectGesture {
    from_note_id: NoteId,
}

impl ConnectGesture {
    pub fn begin(from_note_id: NoteId) -> Self {
        Self { from_note_id }
    }

    pub fn from_note_id(&self) -> &NoteId {
        &self.from_note_id
    }

    /// Free end of the band in wall space.
    pub fn endpoint_at(&self, pointer: Point, viewport: &Viewport) -> Point {
        viewport.to_wall(pointer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Drag(DragGesture),
    Resize(ResizeGesture),
    Connect(ConnectGesture),
}

#[cfg(test)]
mod tests {
    use super::{ConnectGesture, DragGesture, ResizeGesture};
    use crate::interaction::Viewport;
    use crate::model::fixtures::nid;
    use crate::model::{Point, Size};

    #[test]
    fn drag_keeps_the_grab_offset() {
        let viewport = Viewport::new(2.0);
        let drag = DragGesture::begin(nid("a"), Point::new(100.0, 50.0), Point::new(210.0, 110.0), &viewport);
        assert_eq!(drag.position_at(Point::new(210.0, 110.0), &viewport), Point::new(100.0, 50.0));
        assert_eq!(drag.position_at(Point::new(250.0, 90.0), &viewport), Point::new(120.0, 40.0));
    }

    #[test]
    fn drag_clamps_at_the_wall_edge() {
        let viewport = Viewport::new(1.0);
        let drag = DragGesture::begin(nid("a"), Point::new(10.0, 10.0), Point::new(15.0, 15.0), &viewport);
        assert_eq!(drag.position_at(Point::new(0.0, 3.0), &viewport), Point::new(0.0, 0.0));
    }

    #[test]
    fn resize_scales_delta_by_zoom_and_clamps() {
        let viewport = Viewport::new(0.5);
        let resize = ResizeGesture::begin(nid("a"), Size::new(200.0, 180.0), Point::new(100.0, 100.0));
        assert_eq!(resize.size_at(Point::new(120.0, 90.0), &viewport), Size::new(240.0, 160.0));
        assert_eq!(resize.size_at(Point::new(500.0, 0.0), &viewport), Size::new(400.0, 80.0));
    }

    #[test]
    fn connect_endpoint_is_in_wall_space() {
        let viewport = Viewport::new(0.25);
        let connect = ConnectGesture::begin(nid("a"));
        assert_eq!(connect.endpoint_at(Point::new(10.0, 20.0), &viewport), Point::new(40.0, 80.0));
    }
}
