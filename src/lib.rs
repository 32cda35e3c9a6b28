//! Budget tracker - single-page personal budget tracking
//!
//! Income and expense line items with a description, amount and category,
//! persisted as JSON snapshots, rendered as category-filtered lists with a
//! running remaining balance.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: the `BudgetError` type
//! - `models`: items, money, categories and the category filter
//! - `storage`: key-value store and the ledger/category repositories
//! - `services`: validation, the ledger and totals
//! - `display`: list lines, the filter picker, summaries
//! - `app`: `BudgetApp`, the state container both front ends drive
//! - `cli` and `tui`: the two front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::{app::BudgetApp, config::Settings, storage::Storage};
//!
//! let mut app = BudgetApp::start(Storage::in_memory(), Settings::default())?;
//! app.input_description("lön");
//! app.input_amount("20000");
//! app.select_type(EntryType::Income, true);
//! app.submit()?;
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use app::{BudgetApp, BudgetView};
pub use error::{BudgetError, BudgetResult};
