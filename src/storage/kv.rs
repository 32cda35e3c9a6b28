//! Key-value stores
//!
//! The budget data lives under a handful of fixed string keys, each holding a
//! complete JSON snapshot. `FileStore` keeps one file per key on disk;
//! `MemoryStore` keeps everything in a map and is what tests run against.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;

use super::file_io::{read_text, remove_file, write_text_atomic};

/// A string-to-string persistent store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError>;

    /// Delete `key`, returning whether it was present
    fn remove(&self, key: &str) -> Result<bool, BudgetError>;

    fn contains(&self, key: &str) -> Result<bool, BudgetError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Store backed by `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File backing a key
    pub fn path_for(&self, key: &str) -> Result<PathBuf, BudgetError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BudgetError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> Result<bool, BudgetError> {
        remove_file(self.path_for(key)?)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, BudgetError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(entries.remove(key).is_some())
    }
}
