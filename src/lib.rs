// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pinwall: walls of sticky notes joined by connections.
//!
//! - [`model`]: walls, notes, connections and their ids.
//! - [`store`]: the [`store::WallStore`] that owns every wall, persists the whole document
//!   through a [`store::Storage`] and notifies subscribers.
//! - [`format`]: the persisted JSON document and wall export/import files.
//! - [`query`]: search and calendar views.
//! - [`interaction`]: pointer gestures and keyboard commands driven from crossterm events.
//! - [`ui`]: transient view state (zoom, search text, in-progress connections).

pub mod format;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
pub mod ui;
