// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use pinwall::format::document_to_json;
use pinwall::model::{
    Connection, ConnectionId, Note, NoteDate, NoteId, Point, Size, ThemeId, Wall, WallId,
    NOTE_COLORS,
};
use pinwall::store::{MemoryStorage, WallStore};

const WORDS: [&str; 12] = [
    "release", "venue", "groceries", "standup", "retro", "budget", "invoice", "design",
    "deploy", "review", "hiring", "roadmap",
];

pub fn checksum_wall(wall: &Wall) -> u64 {
    let mut acc = 0u64;
    for note in wall.notes() {
        acc = acc.wrapping_mul(131).wrapping_add(note.content().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(note.x() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(note.y() as u64);
    }
    acc.wrapping_mul(131)
        .wrapping_add(wall.connections().len() as u64)
}

pub mod walls {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub walls: usize,
        pub notes_per_wall: usize,
        /// Each note links to this many of the notes that follow it.
        pub fan_out: usize,
        pub words_per_note: usize,
    }

    impl Params {
        pub const fn new(walls: usize, notes_per_wall: usize, fan_out: usize, words_per_note: usize) -> Self {
            Self {
                walls,
                notes_per_wall,
                fan_out,
                words_per_note,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        LargeDense,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::LargeDense => "large_dense",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(1, 12, 1, 4),
                Self::Medium => Params::new(4, 80, 2, 12),
                Self::LargeDense => Params::new(8, 400, 4, 32),
            }
        }
    }

    fn content(seed: usize, words: usize) -> String {
        (0..words)
            .map(|offset| WORDS[(seed * 7 + offset * 3) % WORDS.len()])
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn wall(wall_idx: usize, params: Params) -> Wall {
        let wall_id = WallId::new(format!("w-{wall_idx:03}")).expect("valid wall id");
        let mut wall = Wall::new(wall_id.clone(), format!("Wall {wall_idx:03}"), ThemeId::default(), 1_000);

        for idx in 0..params.notes_per_wall {
            let note_id = NoteId::new(format!("n-{wall_idx:03}-{idx:04}")).expect("valid note id");
            let position = Point::new((idx % 20) as f64 * 220.0, (idx / 20) as f64 * 200.0);
            let mut note = Note::new(note_id, wall_id.clone(), NOTE_COLORS[idx % NOTE_COLORS.len()], position, 1_000);
            note.set_content(content(idx, params.words_per_note));
            note.set_size(Size::new(200.0 + (idx % 5) as f64 * 20.0, 180.0));
            if idx % 3 == 0 {
                let day = 1 + (idx % 28);
                note.set_date(Some(format!("2026-03-{day:02}").parse::<NoteDate>().expect("valid date")));
            }
            wall.notes_mut().push(note);
        }

        let ids: Vec<NoteId> = wall.notes().iter().map(|note| note.note_id().clone()).collect();
        let mut next_connection = 0usize;
        for (idx, from) in ids.iter().enumerate() {
            for step in 1..=params.fan_out {
                let Some(to) = ids.get(idx + step) else {
                    break;
                };
                let connection_id = ConnectionId::new(format!("c-{wall_idx:03}-{next_connection:05}"))
                    .expect("valid connection id");
                wall.connections_mut()
                    .push(Connection::new(connection_id, from.clone(), to.clone()));
                next_connection += 1;
            }
        }
        wall
    }

    pub fn fixture(case: Case) -> Vec<Wall> {
        let params = case.params();
        (0..params.walls).map(|idx| wall(idx, params)).collect()
    }

    /// Serialized persisted document for `case`.
    pub fn document(case: Case) -> String {
        let walls = fixture(case);
        let active = walls.first().map(|wall| wall.wall_id().clone());
        serde_json::to_string(&document_to_json(&walls, active.as_ref())).expect("serialize document")
    }

    pub fn store(case: Case) -> WallStore {
        WallStore::open(MemoryStorage::with_contents(document(case)))
    }
}
