//! Budget list rendering
//!
//! Turns a type view of the ledger into display lines. Each line carries the
//! item id, so whatever removal control is attached to it deletes exactly
//! that item.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetItem, CategoryFilter, ItemId};

/// One rendered list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine {
    /// Item this row removes
    pub id: ItemId,
    /// Position within the filtered list
    pub position: usize,
    /// "<Description>: <amount> <suffix>"
    pub text: String,
}

/// Format one item as a list line
pub fn format_item_line(item: &BudgetItem, currency_suffix: &str) -> String {
    format!(
        "{}: {}",
        item.description,
        item.amount.format_with_suffix(currency_suffix)
    )
}

/// Render the items matching `filter`, in order
pub fn render_filtered<'a, I>(view: I, filter: &CategoryFilter, currency_suffix: &str) -> Vec<ListLine>
where
    I: IntoIterator<Item = &'a BudgetItem>,
{
    view.into_iter()
        .filter(|item| filter.matches(item))
        .enumerate()
        .map(|(position, item)| ListLine {
            id: item.id,
            position,
            text: format_item_line(item, currency_suffix),
        })
        .collect()
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a filtered view as a terminal table, numbered from 1
pub fn format_item_table<'a, I>(view: I, filter: &CategoryFilter, currency_suffix: &str) -> String
where
    I: IntoIterator<Item = &'a BudgetItem>,
{
    let rows: Vec<ItemRow> = view
        .into_iter()
        .filter(|item| filter.matches(item))
        .enumerate()
        .map(|(position, item)| ItemRow {
            number: position + 1,
            description: item.description.clone(),
            amount: item.amount.format_with_suffix(currency_suffix),
            category: item.category.clone(),
            id: item.id.short(),
        })
        .collect();

    if rows.is_empty() {
        return "  (no items)\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
