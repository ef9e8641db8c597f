// SPDX-License-Identifier: MPL-2.0
//! Durable preference storage using CBOR format.
//!
//! Entries are kept as a flat string map in `storage.cbor` inside the app data
//! directory. The file is rewritten as a whole on every write, through a
//! temporary file and a rename, so readers never observe a partial write.
//!
//! # Path Resolution
//!
//! 1. Use `open_in()` / `at_path()` with an explicit location
//! 2. Set `PORTFOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::PreferenceStore;
use crate::config::STORAGE_FILE;
use crate::error::{Error, Result};
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// [`PreferenceStore`] backed by a CBOR file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store in the default data directory.
    pub fn open() -> Result<Self> {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. `--data-dir` CLI override
    /// 3. `PORTFOLIO_DATA_DIR` environment variable
    /// 4. Platform-specific data directory
    ///
    /// Nothing is created on disk until the first write.
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))?;
        path.push(STORAGE_FILE);
        Ok(Self::at_path(path))
    }

    /// Uses an exact file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let file = fs::File::open(&self.path)?;
        let entries = ciborium::from_reader(BufReader::new(file))?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("cbor.tmp");
        {
            let file = fs::File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            ciborium::into_writer(entries, &mut writer)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.load_entries()?;
        Ok(entries.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.load_entries() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "replacing unreadable storage file"
                );
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }
}
