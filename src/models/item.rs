//! Budget item model
//!
//! A budget item is one income or expense line: a description, a positive
//! amount and the category picked when it was entered.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;

/// Whether a line adds to or draws from the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    /// Both types, incomes first
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// Lowercase key used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The other type
    pub fn opposite(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Input for a budget item that has not been added yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub entry_type: EntryType,
}

/// A stored budget line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Stable identifier, kept across saves
    pub id: ItemId,

    /// Description, first letter capitalized
    pub description: String,

    /// Positive amount
    pub amount: Money,

    /// Category value selected at entry time
    pub category: String,

    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl BudgetItem {
    /// Create an item from user input, capitalizing the description
    pub fn new(input: NewItem) -> Self {
        Self {
            id: ItemId::new(),
            description: capitalize_first(&input.description),
            amount: input.amount,
            category: input.category,
            entry_type: input.entry_type,
        }
    }

    pub fn is_income(&self) -> bool {
        self.entry_type == EntryType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.amount)
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(description: &str, entry_type: EntryType) -> NewItem {
        NewItem {
            description: description.into(),
            amount: Money::from_cents(2_000_000),
            category: "salary".into(),
            entry_type,
        }
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("lön"), "Lön");
        assert_eq!(capitalize_first("åka buss"), "Åka buss");
        assert_eq!(capitalize_first("mAT"), "MAT");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_new_item_capitalizes_and_assigns_id() {
        let a = BudgetItem::new(new_item("lön", EntryType::Income));
        let b = BudgetItem::new(new_item("lön", EntryType::Income));

        assert_eq!(a.description, "Lön");
        assert!(a.is_income());
        assert!(!a.is_expense());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_type_strings() {
        assert_eq!(EntryType::Income.as_str(), "income");
        assert_eq!(EntryType::Expense.to_string(), "Expense");
        assert_eq!(EntryType::Income.opposite(), EntryType::Expense);
    }

    #[test]
    fn test_serialized_shape() {
        let item = BudgetItem::new(new_item("hyra", EntryType::Expense));
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["type"], "expense");
        assert_eq!(value["description"], "Hyra");
        assert_eq!(value["amount"], 20000.0);
        assert_eq!(value["category"], "salary");
    }

    #[test]
    fn test_deserialize_keeps_id() {
        let item = BudgetItem::new(new_item("mat", EntryType::Expense));
        let json = serde_json::to_string(&item).unwrap();
        let back: BudgetItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);

        let without_id = r#"{"description":"Mat","amount":125.5,"category":"food","type":"expense"}"#;
        assert!(serde_json::from_str::<BudgetItem>(without_id).is_err());
    }
}
