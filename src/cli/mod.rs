//! CLI command handlers
//!
//! Bridges clap argument parsing with `BudgetApp`.

pub mod category;
pub mod item;

pub use category::{handle_category_command, CategoryCommands};
pub use item::{
    handle_add, handle_list, handle_remove, handle_summary, AddArgs, ListArgs, RemoveArgs,
    TypeArgs,
};
