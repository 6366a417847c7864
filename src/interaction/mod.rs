// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer and keyboard interaction with a wall.
//!
//! Wall-space coordinates never depend on zoom; the [`Viewport`] converts to and from screen
//! space. [`InputDecoder`] turns crossterm events into [`Input`], which [`WallController`]
//! applies to a [`crate::store::WallStore`].

pub mod controller;
pub mod gesture;
pub mod input;
pub mod placement;
pub mod viewport;

pub use controller::{hit_test, PointerTarget, WallController, LINK_HANDLE, RESIZE_HANDLE};
pub use gesture::{ConnectGesture, DragGesture, Gesture, ResizeGesture};
pub use input::{Command, Input, InputDecoder, PointerEvent, DOUBLE_CLICK_WINDOW, ZOOM_STEP};
pub use placement::{
    next_note_position, note_origin_for_pointer, EMPTY_WALL_ORIGIN, NOTE_SLOT_GAP,
    NOTE_SLOT_WIDTH,
};
pub use viewport::{CellMetrics, Viewport};
