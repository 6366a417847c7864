// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stable identifier for walls, notes and connections.
///
/// Ids are opaque strings. Generated ids look like `<epoch-millis>-<9 base36 chars>`, but
/// anything non-empty without whitespace or control characters is accepted so that
/// documents written by other tools still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id must not contain whitespace or control characters")]
    InvalidChar,
}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(IdError::InvalidChar);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WallIdTag {}
pub type WallId = Id<WallIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteIdTag {}
pub type NoteId = Id<NoteIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectionIdTag {}
pub type ConnectionId = Id<ConnectionIdTag>;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Source of fresh ids and of the random choices the store makes (note colors).
///
/// Seeded generators are reproducible apart from the millisecond prefix.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_id<T>(&mut self, now_millis: i64) -> Id<T> {
        let mut value = String::with_capacity(24);
        value.push_str(&now_millis.max(0).to_string());
        value.push('-');
        for _ in 0..SUFFIX_LEN {
            let idx = self.rng.random_range(0..BASE36.len());
            value.push(BASE36[idx] as char);
        }
        Id {
            value,
            _marker: PhantomData,
        }
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::{Id, IdError, IdGenerator, NoteId};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_whitespace() {
        let result: Result<Id<()>, _> = Id::new("a b");
        assert_eq!(result, Err(IdError::InvalidChar));
    }

    #[test]
    fn generated_ids_have_millis_prefix_and_base36_suffix() {
        let mut ids = IdGenerator::seeded(7);
        let id: NoteId = ids.next_id(1_700_000_000_000);
        let (prefix, suffix) = id.as_str().split_once('-').expect("dash separator");
        assert_eq!(prefix, "1700000000000");
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_ascii_lowercase()));
        assert!(NoteId::new(id.as_str()).is_ok());
    }

    #[test]
    fn generated_ids_differ_within_the_same_millisecond() {
        let mut ids = IdGenerator::seeded(1);
        let a: NoteId = ids.next_id(5);
        let b: NoteId = ids.next_id(5);
        assert_ne!(a, b);
    }
}
