//! Core data models for the budget tracker
//!
//! Budget items, categories, the category filter, money amounts and
//! identifiers.

pub mod category;
pub mod filter;
pub mod ids;
pub mod item;
pub mod money;

pub use category::{Categories, Category};
pub use filter::{CategoryFilter, SHOW_ALL_VALUE};
pub use ids::ItemId;
pub use item::{BudgetItem, EntryType, NewItem};
pub use money::{Money, MoneyParseError};
