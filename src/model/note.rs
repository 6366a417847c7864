// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use smol_str::SmolStr;

use super::geometry::{Point, Size};
use super::ids::{NoteId, WallId};

/// Fixed palette new notes draw their color from.
pub const NOTE_COLORS: [&str; 8] = [
    "#fef08a", // yellow
    "#bbf7d0", // green
    "#bfdbfe", // blue
    "#fbcfe8", // pink
    "#e9d5ff", // purple
    "#fed7aa", // orange
    "#e0e7ff", // indigo
    "#fce7f3", // rose
];

pub const DEFAULT_NOTE_COLOR: &str = NOTE_COLORS[0];

/// Calendar day a note is scheduled on, written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteDate(NaiveDate);

impl NoteDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for NoteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid note date {value:?} (expected YYYY-MM-DD)")]
pub struct NoteDateError {
    pub value: String,
}

impl FromStr for NoteDate {
    type Err = NoteDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the stored form is always zero-padded.
        if trimmed.len() != 10 {
            return Err(NoteDateError {
                value: s.to_owned(),
            });
        }
        NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map(Self)
            .map_err(|_| NoteDateError {
                value: s.to_owned(),
            })
    }
}

impl From<NaiveDate> for NoteDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// A positioned, sized, colored text card on a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    note_id: NoteId,
    wall_id: WallId,
    content: String,
    color: SmolStr,
    position: Point,
    size: Size,
    created_at: i64,
    updated_at: i64,
    pinned: bool,
    date: Option<NoteDate>,
    checked: bool,
}

impl Note {
    pub fn new(
        note_id: NoteId,
        wall_id: WallId,
        color: impl Into<SmolStr>,
        position: Point,
        now_millis: i64,
    ) -> Self {
        Self {
            note_id,
            wall_id,
            content: String::new(),
            color: color.into(),
            position,
            size: Size::default(),
            created_at: now_millis,
            updated_at: now_millis,
            pinned: false,
            date: None,
            checked: false,
        }
    }

    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    pub fn wall_id(&self) -> &WallId {
        &self.wall_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn date(&self) -> Option<NoteDate> {
        self.date
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn set_note_id(&mut self, note_id: NoteId) {
        self.note_id = note_id;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_color(&mut self, color: impl Into<SmolStr>) {
        self.color = color.into();
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn set_date(&mut self, date: Option<NoteDate>) {
        self.date = date;
    }

    pub(crate) fn set_timestamps(&mut self, created_at: i64, updated_at: i64) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    pub(crate) fn touch(&mut self, now_millis: i64) {
        self.updated_at = now_millis;
    }
}

/// Partial note update. `None` leaves a field untouched.
///
/// `date: Some(None)` clears the date; dates travel as text so the store can reject
/// malformed ones instead of the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub content: Option<String>,
    pub color: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub pinned: Option<bool>,
    pub checked: Option<bool>,
    pub date: Option<Option<String>>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteDate;

    #[test]
    fn note_date_round_trips_through_text() {
        let date: NoteDate = "2026-03-09".parse().expect("date");
        assert_eq!(date.to_string(), "2026-03-09");
    }

    #[test]
    fn note_date_rejects_unpadded_and_impossible_dates() {
        assert!("2026-3-9".parse::<NoteDate>().is_err());
        assert!("2026-02-30".parse::<NoteDate>().is_err());
        assert!("tomorrow".parse::<NoteDate>().is_err());
    }
}
