//! Category CLI commands
//!
//! List, add, remove and reset the categories offered by the picker.

use clap::Subcommand;

use crate::app::BudgetApp;
use crate::cli::item::TypeArgs;
use crate::display::format_category_tree;
use crate::error::BudgetResult;
use crate::models::Category;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories, expenses first
    List,

    /// Add a category
    Add {
        /// Identifier stored on items, e.g. "pets"
        value: String,
        /// Display label, e.g. "Husdjur"
        label: String,
        #[command(flatten)]
        entry_type: TypeArgs,
    },

    /// Remove a category (items already using it are kept)
    #[command(alias = "rm")]
    Remove {
        /// Category value
        value: String,
    },

    /// Restore the bundled default categories
    Reset,
}

/// Handle a category command
pub fn handle_category_command(app: &mut BudgetApp, cmd: CategoryCommands) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_tree(app.categories()));
        }

        CategoryCommands::Add {
            value,
            label,
            entry_type,
        } => {
            let category = Category::new(value.trim(), label.trim());
            let entry_type = entry_type.entry_type();
            app.add_category(entry_type, category.clone())?;
            println!(
                "Added {} category: {} ({})",
                entry_type.as_str(),
                category,
                category.value
            );
        }

        CategoryCommands::Remove { value } => {
            let removed = app.remove_category(&value)?;
            println!("Removed category: {}", removed);

            let in_use = app
                .ledger()
                .items()
                .iter()
                .filter(|item| item.category == removed.value)
                .count();
            if in_use > 0 {
                println!("  {} item(s) still reference '{}'", in_use, removed.value);
            }
        }

        CategoryCommands::Reset => {
            app.reset_categories()?;
            println!("Restored {} default categories.", app.categories().len());
        }
    }

    Ok(())
}
