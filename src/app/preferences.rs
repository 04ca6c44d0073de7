// SPDX-License-Identifier: MPL-2.0
//! Durable key/value storage for user preferences.
//!
//! The site stores exactly one value, the chosen locale under
//! [`PREFERRED_LANGUAGE_KEY`]. Writes are last-writer-wins with no
//! transactional guarantee.
//!
//! [`FileStore`] keeps the map in CBOR (`storage.cbor`) inside the data
//! directory resolved by [`paths`](super::paths). A missing file reads as an
//! empty store; a corrupt one reads as empty and reports a warning key.

use super::paths;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Key under which the chosen locale code is stored.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Store file name within the data directory.
const STORAGE_FILE: &str = "storage.cbor";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, used by tests and when no data directory exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// CBOR-backed store persisted on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns the store and an optional warning key (see [`open_at`](Self::open_at)).
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store inside `base_dir`, or the default data directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        match paths::get_app_data_dir_with_override(base_dir) {
            Some(mut path) => {
                path.push(STORAGE_FILE);
                Self::open_at(path)
            }
            None => (
                Self {
                    path: None,
                    entries: BTreeMap::new(),
                },
                Some("notification-storage-path-error".to_string()),
            ),
        }
    }

    /// Opens the store file at `path`.
    ///
    /// Unreadable or corrupt files yield an empty store plus a warning key;
    /// the next write replaces them.
    pub fn open_at(path: PathBuf) -> (Self, Option<String>) {
        let (entries, warning) = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => (entries, None),
                Err(Error::Io(_)) => (
                    BTreeMap::new(),
                    Some("notification-storage-read-error".to_string()),
                ),
                Err(_) => (
                    BTreeMap::new(),
                    Some("notification-storage-parse-error".to_string()),
                ),
            }
        } else {
            (BTreeMap::new(), None)
        };

        if let Some(key) = &warning {
            tracing::warn!(path = %path.display(), warning = %key, "preference store unreadable, starting empty");
        }

        (
            Self {
                path: Some(path),
                entries,
            },
            warning,
        )
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(Error::Storage("no data directory available".into()));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_entries(&self.entries, fs::File::create(path)?)
    }
}

/// Encodes `entries` as CBOR, surfacing flush failures instead of losing
/// them when the buffer drops.
fn write_entries(entries: &BTreeMap<String, String>, out: impl Write) -> Result<()> {
    let mut writer = BufWriter::new(out);
    ciborium::into_writer(entries, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(ciborium::from_reader(reader)?)
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
