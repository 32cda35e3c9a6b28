//! Category repository
//!
//! Keeps the user's copy of the category lists under a fixed key, seeded from
//! the bundled defaults on first run.

use crate::error::BudgetError;
use crate::models::{Categories, Category, EntryType};

use super::kv::KeyValueStore;

/// Storage key of the categories snapshot
pub const CATEGORIES_KEY: &str = "categories";

/// Repository for category persistence
pub struct CategoryRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Write the bundled defaults if nothing is stored yet
    ///
    /// Returns whether the defaults were written.
    pub fn ensure_defaults(&self) -> Result<bool, BudgetError> {
        if self.store.contains(CATEGORIES_KEY)? {
            return Ok(false);
        }
        self.save(&Categories::bundled())?;
        tracing::info!("stored default categories");
        Ok(true)
    }

    /// Stored categories, falling back to the bundled defaults
    ///
    /// A stored copy that can't be read or decoded is logged and ignored.
    pub fn get(&self) -> Categories {
        let raw = match self.store.get(CATEGORIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Categories::bundled(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored categories, using defaults");
                return Categories::bundled();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "could not parse stored categories, using defaults");
                Categories::bundled()
            }
        }
    }

    /// Overwrite the stored categories
    pub fn save(&self, categories: &Categories) -> Result<(), BudgetError> {
        let json = serde_json::to_string(categories)
            .map_err(|e| BudgetError::Json(format!("Failed to serialize categories: {}", e)))?;
        self.store.set(CATEGORIES_KEY, &json)
    }

    /// Add a category to the stored copy
    pub fn add(&self, entry_type: EntryType, category: Category) -> Result<Categories, BudgetError> {
        let mut categories = self.get();
        categories.add(entry_type, category)?;
        self.save(&categories)?;
        Ok(categories)
    }

    /// Remove a category from the stored copy
    pub fn remove(&self, value: &str) -> Result<(Category, Categories), BudgetError> {
        let mut categories = self.get();
        let removed = categories.remove(value)?;
        self.save(&categories)?;
        Ok((removed, categories))
    }

    /// Replace the stored copy with the bundled defaults
    pub fn reset(&self) -> Result<Categories, BudgetError> {
        let defaults = Categories::bundled();
        self.save(&defaults)?;
        Ok(defaults)
    }
}
