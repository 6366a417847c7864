// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Date views over dated notes.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::model::{Note, NoteDate, Point, WallId};
use crate::store::WallStore;

pub const AGENDA_DAYS: u64 = 14;

/// Where notes created from the calendar land.
pub const CALENDAR_NOTE_ORIGIN: Point = Point::new(80.0, 80.0);

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaDay<'a> {
    pub date: NaiveDate,
    pub notes: Vec<&'a Note>,
}

/// Every dated note keyed by day, days in chronological order, notes in wall order.
pub fn notes_by_date(notes: &[Note]) -> BTreeMap<NaiveDate, Vec<&Note>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Note>> = BTreeMap::new();
    for note in notes {
        if let Some(date) = note.date() {
            by_date.entry(date.as_naive()).or_default().push(note);
        }
    }
    by_date
}

pub fn notes_on(notes: &[Note], day: NaiveDate) -> Vec<&Note> {
    notes
        .iter()
        .filter(|note| note.date().is_some_and(|date| date.as_naive() == day))
        .collect()
}

/// Dated notes of one month grouped by day. An invalid month yields nothing.
pub fn notes_in_month(notes: &[Note], year: i32, month: u32) -> BTreeMap<NaiveDate, Vec<&Note>> {
    let mut by_date = notes_by_date(notes);
    by_date.retain(|date, _| date.year() == year && date.month() == month);
    by_date
}

/// `days` consecutive days starting at `start`, each with its notes; empty days included.
pub fn agenda(notes: &[Note], start: NaiveDate, days: u64) -> Vec<AgendaDay<'_>> {
    let mut by_date = notes_by_date(notes);
    (0..days)
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| AgendaDay {
            date,
            notes: by_date.remove(&date).unwrap_or_default(),
        })
        .collect()
}

/// Adds an empty note dated `day` at the calendar origin.
pub fn add_note_for_date(store: &mut WallStore, wall_id: &WallId, day: NaiveDate) -> Option<Note> {
    let date = NoteDate::new(day).to_string();
    store.add_note(wall_id, CALENDAR_NOTE_ORIGIN, None, Some(&date))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{add_note_for_date, agenda, notes_by_date, notes_in_month, notes_on, AGENDA_DAYS};
    use crate::model::fixtures::planning_wall;
    use crate::model::{IdGenerator, Point};
    use crate::store::{MemoryStorage, WallStore};

    fn day(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn groups_dated_notes_by_day() {
        let wall = planning_wall();
        let by_date = notes_by_date(wall.notes());
        let days: Vec<String> = by_date.keys().map(ToString::to_string).collect();
        assert_eq!(days, ["2026-03-09", "2026-03-21"]);
        assert_eq!(notes_on(wall.notes(), day("2026-03-21")).len(), 1);
        assert!(notes_on(wall.notes(), day("2026-03-22")).is_empty());
    }

    #[test]
    fn month_view_filters_by_year_and_month() {
        let wall = planning_wall();
        assert_eq!(notes_in_month(wall.notes(), 2026, 3).len(), 2);
        assert!(notes_in_month(wall.notes(), 2025, 3).is_empty());
        assert!(notes_in_month(wall.notes(), 2026, 13).is_empty());
    }

    #[test]
    fn agenda_covers_fourteen_days_including_empty_ones() {
        let wall = planning_wall();
        let days = agenda(wall.notes(), day("2026-03-08"), AGENDA_DAYS);
        assert_eq!(days.len(), 14);
        assert_eq!(days[0].date, day("2026-03-08"));
        assert!(days[0].notes.is_empty());
        assert_eq!(days[1].notes.len(), 1);
        assert_eq!(days[13].date, day("2026-03-21"));
        assert_eq!(days[13].notes[0].note_id().as_str(), "n-c");
    }

    #[test]
    fn adding_for_a_date_places_note_at_origin() {
        let mut store = WallStore::new(MemoryStorage::new()).with_ids(IdGenerator::seeded(3));
        store.hydrate();
        let wall_id = store.active_wall_id().unwrap().clone();
        let note = add_note_for_date(&mut store, &wall_id, day("2026-07-04")).unwrap();
        assert_eq!(note.position(), Point::new(80.0, 80.0));
        assert_eq!(note.date().unwrap().to_string(), "2026-07-04");
    }
}
