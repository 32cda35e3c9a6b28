//! Service layer for the budget tracker
//!
//! Business logic with no storage or terminal dependency: form validation,
//! the ledger and its totals.

pub mod ledger;
pub mod totals;
pub mod validation;

pub use ledger::Ledger;
pub use totals::{compute_totals, BalanceTone, Totals};
pub use validation::{EntryForm, TypeSelector, ValidationReport};
