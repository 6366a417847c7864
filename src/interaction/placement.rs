// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Point, Wall};

use super::viewport::Viewport;

pub const NOTE_SLOT_WIDTH: f64 = 220.0;
pub const NOTE_SLOT_GAP: f64 = 24.0;
pub const EMPTY_WALL_ORIGIN: Point = Point::new(80.0, 80.0);

/// Half the footprint of a note placed at a pointer, so the pointer lands mid-note.
const POINTER_ANCHOR: (f64, f64) = (110.0, 100.0);

/// Slot for a note added from the keyboard: one slot left of the leftmost note, on the row
/// of the first note. Empty walls start at (80, 80).
pub fn next_note_position(wall: &Wall) -> Point {
    let Some(first) = wall.notes().first() else {
        return EMPTY_WALL_ORIGIN;
    };
    let leftmost = wall
        .notes()
        .iter()
        .map(|note| note.x())
        .fold(f64::INFINITY, f64::min);
    Point::new(leftmost - NOTE_SLOT_WIDTH - NOTE_SLOT_GAP, first.y()).clamp_to_wall()
}

/// Wall position of a note created at a screen-space pointer.
pub fn note_origin_for_pointer(pointer: Point, viewport: &Viewport) -> Point {
    viewport
        .to_wall(pointer)
        .offset(-POINTER_ANCHOR.0, -POINTER_ANCHOR.1)
        .clamp_to_wall()
}

#[cfg(test)]
mod tests {
    use super::{next_note_position, note_origin_for_pointer, EMPTY_WALL_ORIGIN};
    use crate::interaction::Viewport;
    use crate::model::fixtures::{planning_wall, wid};
    use crate::model::{Point, ThemeId, Wall};

    #[test]
    fn empty_wall_uses_the_default_origin() {
        let wall = Wall::new(wid("w"), "Empty", ThemeId::SkyBlue, 0);
        assert_eq!(next_note_position(&wall), EMPTY_WALL_ORIGIN);
    }

    #[test]
    fn next_slot_is_left_of_the_leftmost_note() {
        let mut wall = planning_wall();
        wall.notes_mut()[1].set_position(Point::new(400.0, 60.0));
        wall.notes_mut()[0].set_position(Point::new(500.0, 30.0));
        assert_eq!(next_note_position(&wall), Point::new(156.0, 30.0));
    }

    #[test]
    fn next_slot_never_goes_negative() {
        let wall = planning_wall();
        assert_eq!(next_note_position(&wall), Point::new(0.0, 40.0));
    }

    #[test]
    fn pointer_placement_centers_the_note() {
        let viewport = Viewport::new(2.0);
        assert_eq!(
            note_origin_for_pointer(Point::new(600.0, 400.0), &viewport),
            Point::new(190.0, 100.0)
        );
        assert_eq!(
            note_origin_for_pointer(Point::new(20.0, 20.0), &viewport),
            Point::new(0.0, 0.0)
        );
    }
}
