//! Budget item CLI commands
//!
//! `add`, `remove`, `list` and `summary`. Each command goes through the same
//! `BudgetApp` operations the TUI uses, so validation and persistence behave
//! identically on both surfaces.

use clap::{ArgGroup, Args};

use crate::app::BudgetApp;
use crate::display::{format_item_table, format_totals, month_label};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryFilter, EntryType, ItemId, SHOW_ALL_VALUE};

/// Type flags shared by `add` and `remove`
#[derive(Args, Debug, Clone, Copy)]
#[command(group(ArgGroup::new("entry_type").required(true).args(["income", "expense"])))]
pub struct TypeArgs {
    /// Income entry
    #[arg(long)]
    pub income: bool,
    /// Expense entry
    #[arg(long)]
    pub expense: bool,
}

impl TypeArgs {
    pub fn entry_type(&self) -> EntryType {
        if self.income {
            EntryType::Income
        } else {
            EntryType::Expense
        }
    }
}

/// Arguments of `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Description (letters and spaces)
    pub description: String,
    /// Amount, e.g. "8000" or "12.50"
    pub amount: String,
    #[command(flatten)]
    pub entry_type: TypeArgs,
    /// Category value, e.g. "rent"
    #[arg(short, long, default_value = SHOW_ALL_VALUE)]
    pub category: String,
}

/// Arguments of `remove`
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "position"])))]
#[command(group(ArgGroup::new("row_type").args(["income", "expense"])))]
pub struct RemoveArgs {
    /// Item ID, full or the short "itm-" form shown by `list`
    #[arg(long, conflicts_with_all = ["income", "expense", "category"])]
    pub id: Option<String>,
    /// Row number in the list for the chosen type, starting at 1
    #[arg(requires = "row_type")]
    pub position: Option<usize>,
    /// Row is in the income list
    #[arg(long)]
    pub income: bool,
    /// Row is in the expense list
    #[arg(long)]
    pub expense: bool,
    /// Category filter the row numbers refer to
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments of `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show items in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle `add`
pub fn handle_add(app: &mut BudgetApp, args: AddArgs) -> BudgetResult<()> {
    select_category(app, &args.category)?;

    let kept = app.input_description(&args.description).to_string();
    if kept != args.description {
        println!("Note: description stored as '{}'", kept);
    }
    app.input_amount(&args.amount);
    app.select_type(args.entry_type.entry_type(), true);

    let item = app.submit()?;
    let suffix = &app.settings().currency_suffix;
    println!("Added to list!");
    println!(
        "  {} {}: {} [{}]",
        item.entry_type,
        item.description,
        item.amount.format_with_suffix(suffix),
        item.category
    );
    println!("  ID: {}", item.id.short());
    print_remaining(app);
    Ok(())
}

/// Handle `remove`
pub fn handle_remove(app: &mut BudgetApp, args: RemoveArgs) -> BudgetResult<()> {
    let removed = match (args.id, args.position) {
        (Some(id), _) => {
            let id = resolve_id(app, &id)?;
            app.remove(id)?
        }
        (None, Some(position)) => {
            if position == 0 {
                return Err(BudgetError::Validation("Row numbers start at 1".to_string()));
            }
            if let Some(category) = &args.category {
                select_category(app, category)?;
            }
            let entry_type = if args.income {
                EntryType::Income
            } else {
                EntryType::Expense
            };
            app.remove_at(entry_type, position - 1)?
        }
        (None, None) => {
            return Err(BudgetError::Validation(
                "Give either --id or a row number".to_string(),
            ))
        }
    };

    println!(
        "Removed {}: {}",
        removed.entry_type.as_str(),
        removed.amount.format_with_suffix(&app.settings().currency_suffix)
    );
    println!("  {}", removed.description);
    print_remaining(app);
    Ok(())
}

/// Handle `list`
pub fn handle_list(app: &mut BudgetApp, args: ListArgs) -> BudgetResult<()> {
    let filter = match &args.category {
        Some(category) => {
            select_category(app, category)?;
            CategoryFilter::from_value(category)
        }
        None => CategoryFilter::All,
    };
    let suffix = &app.settings().currency_suffix;

    if let CategoryFilter::Only(value) = &filter {
        println!("Category: {}", value);
        println!();
    }
    println!("Incomes");
    print!("{}", format_item_table(app.ledger().incomes(), &filter, suffix));
    println!();
    println!("Expenses");
    print!("{}", format_item_table(app.ledger().expenses(), &filter, suffix));
    println!();
    print_remaining(app);
    Ok(())
}

/// Handle `summary`
pub fn handle_summary(app: &BudgetApp) -> BudgetResult<()> {
    let today = chrono::Local::now().date_naive();
    println!("Budget for {}", month_label(today));
    println!("{}", "=".repeat(30));
    print!(
        "{}",
        format_totals(&app.ledger().totals(), &app.settings().currency_suffix)
    );
    println!("  Items:     {:>14}", app.ledger().len());
    Ok(())
}

fn print_remaining(app: &BudgetApp) {
    let totals = app.ledger().totals();
    println!(
        "Remaining: {}",
        totals
            .remaining
            .format_with_suffix(&app.settings().currency_suffix)
    );
}

fn select_category(app: &mut BudgetApp, value: &str) -> BudgetResult<()> {
    if app.select_category(value) {
        Ok(())
    } else {
        Err(BudgetError::category_not_found(value))
    }
}

/// Resolve a full ID or a unique prefix of one
fn resolve_id(app: &BudgetApp, input: &str) -> BudgetResult<ItemId> {
    if let Ok(id) = input.parse::<ItemId>() {
        return Ok(id);
    }

    let prefix = input.strip_prefix("itm-").unwrap_or(input).to_lowercase();
    if prefix.is_empty() {
        return Err(BudgetError::item_not_found(input));
    }

    let mut matches = app
        .ledger()
        .items()
        .iter()
        .filter(|item| item.id.to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.id),
        (Some(_), Some(_)) => Err(BudgetError::Validation(format!(
            "ID '{}' matches more than one item",
            input
        ))),
        (None, _) => Err(BudgetError::item_not_found(input)),
    }
}
