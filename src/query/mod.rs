// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over walls.
//!
//! Derived views (search hits, calendar days) that the CLI and the interaction layer use.

pub mod calendar;
pub mod search;

pub use calendar::{
    add_note_for_date, agenda, notes_by_date, notes_in_month, notes_on, AgendaDay, AGENDA_DAYS,
    CALENDAR_NOTE_ORIGIN,
};
pub use search::{search_notes, SearchError, SearchMode};
