// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document formats: the persisted JSON document, wall export files, and export file names.

mod file_name;
pub mod wall_json;

pub use file_name::export_file_name;
pub use wall_json::{
    document_schema, document_to_json, export_wall_pretty, parse_document, parse_wall,
    note_from_json, note_to_json, wall_from_json, wall_to_json, ConnectionJson, DocumentError, NoteJson,
    PersistedDocumentJson, WallJson, DOCUMENT_VERSION,
};
