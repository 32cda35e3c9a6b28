//! Ledger snapshot repository
//!
//! The full list of budget items is written as one JSON array under a fixed
//! key after every change. Loading distinguishes "nothing saved yet" from
//! "saved but unreadable" so callers can recover from either.
//!
//! Older snapshots stored items without ids. Those records get an id on load
//! and the loaded ledger is flagged so the caller writes it back, keeping the
//! ids stable across runs.

use serde::Deserialize;

use crate::error::BudgetError;
use crate::models::{BudgetItem, EntryType, ItemId, Money};

use super::kv::KeyValueStore;

/// Storage key of the ledger snapshot
pub const LEDGER_KEY: &str = "ledger";

/// Stored record, tolerating a missing id
#[derive(Deserialize)]
struct StoredItem {
    #[serde(default)]
    id: Option<ItemId>,
    description: String,
    amount: Money,
    category: String,
    #[serde(rename = "type")]
    entry_type: EntryType,
}

/// Items decoded from the stored snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLedger {
    pub items: Vec<BudgetItem>,
    /// Records were given ids or dropped, so the stored copy is out of date
    pub needs_rewrite: bool,
}

/// Reads and writes the ledger snapshot
pub struct LedgerRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> LedgerRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Overwrite the stored snapshot with `items`
    pub fn save(&self, items: &[BudgetItem]) -> Result<(), BudgetError> {
        let json = serde_json::to_string(items)
            .map_err(|e| BudgetError::Json(format!("Failed to serialize ledger: {}", e)))?;
        self.store.set(LEDGER_KEY, &json)?;
        tracing::debug!(items = items.len(), "ledger saved");
        Ok(())
    }

    /// Load the stored snapshot
    ///
    /// Returns `Ok(None)` when nothing has been saved and
    /// `BudgetError::CorruptData` when the stored text does not decode.
    /// Records whose amount is not positive are dropped with a warning.
    pub fn load(&self) -> Result<Option<LoadedLedger>, BudgetError> {
        let Some(raw) = self.store.get(LEDGER_KEY)? else {
            return Ok(None);
        };

        let records: Vec<StoredItem> =
            serde_json::from_str(&raw).map_err(|e| BudgetError::CorruptData {
                key: LEDGER_KEY.to_string(),
                reason: e.to_string(),
            })?;

        let mut needs_rewrite = false;
        let mut items = Vec::with_capacity(records.len());
        for record in records {
            if !record.amount.is_positive() {
                tracing::warn!(
                    description = %record.description,
                    amount = %record.amount,
                    "dropping stored item with a non-positive amount"
                );
                needs_rewrite = true;
                continue;
            }
            let id = record.id.unwrap_or_else(|| {
                needs_rewrite = true;
                ItemId::new()
            });
            items.push(BudgetItem {
                id,
                description: record.description,
                amount: record.amount,
                category: record.category,
                entry_type: record.entry_type,
            });
        }

        if needs_rewrite {
            tracing::debug!(items = items.len(), "stored ledger needs rewriting");
        }
        Ok(Some(LoadedLedger {
            items,
            needs_rewrite,
        }))
    }

    /// Delete the stored snapshot
    pub fn clear(&self) -> Result<bool, BudgetError> {
        self.store.remove(LEDGER_KEY)
    }
}
