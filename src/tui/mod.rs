//! Terminal User Interface module
//!
//! The budget page in a terminal: entry form, filtered income and expense
//! lists, remaining balance and the transient notification, drawn with
//! ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
