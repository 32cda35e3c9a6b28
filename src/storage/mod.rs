//! Storage layer for the budget tracker
//!
//! A key-value store holds one JSON snapshot per fixed key; the repositories
//! here encode and decode those snapshots.

pub mod categories;
pub mod file_io;
pub mod kv;
pub mod ledger;

pub use categories::{CategoryRepository, CATEGORIES_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use ledger::{LedgerRepository, LoadedLedger, LEDGER_KEY};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Storage coordinator that hands out repositories over one store
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Storage backed by files in the data directory
    pub fn open(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;
        Ok(Self::with_store(FileStore::new(paths.data_dir())))
    }

    /// Storage over any key-value store
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Storage that keeps everything in memory
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn ledger(&self) -> LedgerRepository<'_> {
        LedgerRepository::new(self.store.as_ref())
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self.store.as_ref())
    }
}
