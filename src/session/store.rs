//! Persistence for the remaining-draws counter.
//!
//! The only persisted state is one integer under one key. `DrawStore`
//! abstracts where it lives; `MemoryStore` keeps it in process and
//! `JsonFileStore` keeps a flat JSON object of key → integer on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::Result;

/// Key/value storage for integer counters.
pub trait DrawStore {
    /// Stored value for `key`, `None` if never saved.
    fn load(&self, key: &str) -> Result<Option<i64>>;

    /// Store `value` under `key`.
    fn save(&mut self, key: &str, value: i64) -> Result<()>;
}

/// In-process store. Values are lost when it is dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, i64>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: i64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value);
        store
    }
}

impl DrawStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: i64) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON file.
///
/// A missing file reads as empty. Saving writes a sibling temporary file and
/// renames it over the original, keeping any other keys already in it.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, i64>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = std::fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl DrawStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn save(&mut self, key: &str, value: i64) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(staged.as_file_mut(), &values)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        debug!(path = %self.path.display(), key, value, "saved counter");
        Ok(())
    }
}
