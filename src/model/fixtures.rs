// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geometry::{Point, Size};
use super::ids::{ConnectionId, NoteId, WallId};
use super::note::{Note, NoteDate};
use super::wall::{Connection, ThemeId, Wall};

pub(crate) fn nid(value: &str) -> NoteId {
    NoteId::new(value).expect("note id")
}

pub(crate) fn wid(value: &str) -> WallId {
    WallId::new(value).expect("wall id")
}

fn note(wall_id: &WallId, id: &str, content: &str, x: f64, y: f64) -> Note {
    let mut note = Note::new(nid(id), wall_id.clone(), "#bfdbfe", Point::new(x, y), 1_000);
    note.set_content(content);
    note
}

/// Three notes (one dated, one pinned) and a single connection `a - b`.
pub(crate) fn planning_wall() -> Wall {
    let wall_id = wid("w-planning");
    let mut wall = Wall::new(wall_id.clone(), "Planning", ThemeId::SkyBlue, 1_000);

    let a = note(&wall_id, "n-a", "Ship the release notes", 100.0, 40.0);

    let mut b = note(&wall_id, "n-b", "Book the venue", 300.0, 60.0);
    b.set_date(Some("2026-03-09".parse::<NoteDate>().expect("date")));
    b.set_size(Size::new(240.0, 160.0));

    let mut c = note(&wall_id, "n-c", "Groceries: oat milk, release candles", 520.0, 200.0);
    c.set_pinned(true);
    c.set_date(Some("2026-03-21".parse::<NoteDate>().expect("date")));

    wall.notes_mut().extend([a, b, c]);
    wall.connections_mut().push(Connection::new(
        ConnectionId::new("c-ab").expect("connection id"),
        nid("n-a"),
        nid("n-b"),
    ));
    wall
}
