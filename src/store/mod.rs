// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The wall store and its persistence.
//!
//! [`WallStore`] is the single writer of the persisted document; [`Storage`] is the medium
//! it writes to (a JSON file for the CLI, memory for tests).

pub mod clock;
pub mod events;
pub mod storage;
mod wall_store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{Listener, StoreEvent, SubscriptionId};
pub use storage::{
    load_document, save_document, FileStorage, MemoryStorage, Storage, StoreError,
    UnavailableStorage, WriteDurability,
};
pub use wall_store::{
    ConnectOutcome, ImportError, LinkClick, WallStore, DUPLICATE_OFFSET, IMPORTED_SUFFIX,
    IMPORTED_WALL_NAME,
};
