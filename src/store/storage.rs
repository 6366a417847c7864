// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Key-value media holding the single persisted document, and the adapter that reads and
//! writes it.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::format::{parse_document, PersistedDocumentJson};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("refusing to write through symlink at {path:?}")]
    SymlinkRefused { path: PathBuf },
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: &'static str },
    #[error("storage quota exceeded ({needed} bytes needed, {limit} allowed)")]
    QuotaExceeded { needed: usize, limit: usize },
}

/// A medium that holds one document under one key.
pub trait Storage {
    /// `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replaces the whole document.
    fn write(&mut self, contents: &str) -> Result<(), StoreError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Reads the persisted document. Absent, unreadable, unparsable or too-new documents all
/// come back as `None`; callers treat that as "no prior state".
pub fn load_document(storage: &dyn Storage) -> Option<PersistedDocumentJson> {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(storage = %storage.describe(), "no persisted document");
            return None;
        }
        Err(err) => {
            tracing::warn!(storage = %storage.describe(), %err, "cannot read persisted document");
            return None;
        }
    };

    match parse_document(&raw) {
        Ok(document) => Some(document),
        Err(err) => {
            tracing::warn!(storage = %storage.describe(), %err, "ignoring unreadable persisted document");
            None
        }
    }
}

/// Writes the whole document. Failures are logged and swallowed; returns whether the write
/// went through.
pub fn save_document(storage: &mut dyn Storage, document: &PersistedDocumentJson) -> bool {
    let contents = match serde_json::to_string(document) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(%err, "cannot serialize persisted document");
            return false;
        }
    };

    match storage.write(&contents) {
        Ok(()) => {
            tracing::trace!(storage = %storage.describe(), bytes = contents.len(), "persisted");
            true
        }
        Err(err) => {
            tracing::warn!(storage = %storage.describe(), %err, "persisting failed; state kept in memory only");
            false
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush file contents and the rename to stable storage where possible.
    /// Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// A JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    durability: WriteDurability,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        write_atomic(&self.path, format!("{contents}\n").as_bytes(), self.durability)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|source| StoreError::Io {
        path: parent.clone(),
        source,
    })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".pinwall.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    let staged = fill_temp_file(file, &tmp_path, contents, durability).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    });
    discard_temp_on_error(&tmp_path, staged)?;

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(&parent).map_err(|source| StoreError::Io {
                path: parent.clone(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.clone(),
                source,
            })?;
        }
    }

    Ok(())
}

fn fill_temp_file(
    mut file: fs::File,
    tmp_path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.to_path_buf(),
        source,
    })?;
    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Removes the temp file when staging or the rename failed.
fn discard_temp_on_error<T>(tmp_path: &Path, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if result.is_err() {
        if let Err(err) = fs::remove_file(tmp_path) {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %tmp_path.display(), %err, "cannot remove temp file");
            }
        }
    }
    result
}

/// In-memory medium. Clones share the same slot, so a test can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(contents.into()))),
            quota: None,
        }
    }

    /// Rejects writes larger than `bytes`, like a full browser storage area.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.quota {
            if contents.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    needed: contents.len(),
                    limit,
                });
            }
        }
        *self.slot.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}

/// A medium that is never there, like storage in a context without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl Storage for UnavailableStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable {
            reason: "no storage medium",
        })
    }

    fn write(&mut self, _contents: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable {
            reason: "no storage medium",
        })
    }

    fn describe(&self) -> String {
        "unavailable".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::{
        discard_temp_on_error, load_document, save_document, FileStorage, MemoryStorage, Storage,
        StoreError, UnavailableStorage,
    };
    use crate::format::document_to_json;
    use crate::model::fixtures::planning_wall;

    #[test]
    fn memory_storage_round_trips_the_document() {
        let mut storage = MemoryStorage::new();
        let wall = planning_wall();
        let document = document_to_json(std::slice::from_ref(&wall), Some(wall.wall_id()));
        assert!(save_document(&mut storage, &document));
        assert_eq!(load_document(&storage), Some(document));
    }

    #[test]
    fn corrupt_document_loads_as_none() {
        let storage = MemoryStorage::with_contents("{ not json");
        assert_eq!(load_document(&storage), None);
    }

    #[test]
    fn unavailable_storage_loads_as_none_and_swallows_writes() {
        let mut storage = UnavailableStorage;
        assert_eq!(load_document(&storage), None);
        let document = document_to_json(&[], None);
        assert!(!save_document(&mut storage, &document));
    }

    #[test]
    fn quota_rejects_large_writes_and_keeps_previous_contents() {
        let mut storage = MemoryStorage::with_contents("{}").with_quota(4);
        let document = document_to_json(&[planning_wall()], None);
        assert!(!save_document(&mut storage, &document));
        assert_eq!(storage.contents().as_deref(), Some("{}"));
    }

    #[test]
    fn file_storage_reads_missing_file_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("absent.json"));
        assert!(storage.read().expect("read").is_none());
    }

    fn temp_leftovers(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .expect("read dir")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".pinwall.tmp."))
            .count()
    }

    #[test]
    fn failed_rename_removes_the_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("board.json");
        std::fs::create_dir(&path).expect("directory in the way");
        std::fs::write(path.join("keep"), "x").expect("fill directory");

        let mut storage = FileStorage::new(&path);
        assert!(matches!(storage.write("{}"), Err(StoreError::Io { .. })));
        assert_eq!(temp_leftovers(dir.path()), 0);
    }

    #[test]
    fn staging_errors_remove_the_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tmp_path = dir.path().join(".pinwall.tmp.board.json.1");
        std::fs::write(&tmp_path, "partial").expect("partial temp file");

        let failed: Result<(), StoreError> = Err(StoreError::Io {
            path: tmp_path.clone(),
            source: io::Error::other("no space left on device"),
        });
        assert!(discard_temp_on_error(&tmp_path, failed).is_err());
        assert!(!tmp_path.exists());

        std::fs::write(&tmp_path, "complete").expect("temp file");
        assert!(discard_temp_on_error(&tmp_path, Ok(())).is_ok());
        assert!(tmp_path.exists());
    }

    #[test]
    fn file_storage_writes_atomically_into_nested_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("board.json");
        let mut storage = FileStorage::new(&path);
        storage.write("{\"walls\":[]}").expect("write");
        storage.write("{\"walls\":[],\"activeWallId\":null}").expect("overwrite");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "{\"walls\":[],\"activeWallId\":null}\n");

        assert_eq!(temp_leftovers(path.parent().expect("parent")), 0);
    }
}
