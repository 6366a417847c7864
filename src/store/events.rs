// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ConnectionId, NoteId, WallId};

/// Emitted after each store mutation, once the document has been handed to storage.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Hydrated { wall_count: usize },
    ActiveWallChanged { wall_id: Option<WallId> },
    WallCreated { wall_id: WallId },
    WallUpdated { wall_id: WallId },
    WallDeleted { wall_id: WallId },
    WallImported { wall_id: WallId },
    NoteAdded { wall_id: WallId, note_id: NoteId },
    NoteUpdated { wall_id: WallId, note_id: NoteId },
    NoteDeleted { wall_id: WallId, note_id: NoteId },
    ConnectionAdded { wall_id: WallId, connection_id: ConnectionId },
    ConnectionRemoved { wall_id: WallId, connection_id: ConnectionId },
    ZoomChanged { zoom: f64 },
    SearchQueryChanged,
    ConnectionSourceChanged { note_id: Option<NoteId> },
    TempConnectionChanged,
}

impl StoreEvent {
    /// Whether the event reflects a change to persisted state (as opposed to UI state).
    pub fn is_persistent(&self) -> bool {
        !matches!(
            self,
            Self::Hydrated { .. }
                | Self::ZoomChanged { .. }
                | Self::SearchQueryChanged
                | Self::ConnectionSourceChanged { .. }
                | Self::TempConnectionChanged
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&StoreEvent)>;

#[derive(Default)]
pub(crate) struct Listeners {
    next: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next = self.next.wrapping_add(1);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}
