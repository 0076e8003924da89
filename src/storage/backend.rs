//! Key/value persistence backends
//!
//! The budget lives under a handful of string keys, the same layout a
//! browser's local storage would hold. `FileStore` keeps one file per key;
//! `MemoryStore` keeps everything in memory and counts writes, which tests
//! use to prove that a failed import never touches storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_text, remove_if_exists, write_text_atomic};

/// Key holding the serialized budget document
pub const BUDGET_KEY: &str = "terminalBudget";

/// Key holding the background image reference
pub const BACKGROUND_KEY: &str = "terminalBackground";

/// String key/value persistence
pub trait KeyValueStore {
    /// Read the value under `key`
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> BudgetResult<()>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> BudgetResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BudgetError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        remove_if_exists(self.path_for(key)?)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    /// Number of `set`/`remove` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        self.writes += 1;
        self.values.remove(key);
        Ok(())
    }
}
