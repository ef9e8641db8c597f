// SPDX-License-Identifier: MPL-2.0
//! Client-local key-value storage for user preferences.
//!
//! The [`PreferenceStore`] trait is the seam between locale policy and the
//! place preferences actually live. Two implementations ship with the crate:
//!
//! - [`FileStore`] persists entries to a CBOR file in the app data directory
//!   and survives restarts.
//! - [`MemoryStore`] keeps entries in memory, for tests and for contexts where
//!   durable storage is disabled.

pub mod file;

pub use file::FileStore;

use crate::error::Result;
use std::collections::BTreeMap;

/// String-keyed, string-valued durable storage.
///
/// Writes take `&mut self`; a store shared between threads must sit behind a
/// lock so that the last write wins.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used to seed a store, e.g. with a foreign or corrupted value.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("anything").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn write_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.write("key", "first").unwrap();
        store.write("key", "second").unwrap();
        assert_eq!(store.read("key").unwrap(), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn with_entry_seeds_value() {
        let store = MemoryStore::new().with_entry("a", "1");
        assert_eq!(store.read("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.read("b").unwrap(), None);
    }
}
