//! Category filter
//!
//! The category picker doubles as the list filter: the synthetic value `all`
//! shows everything, any other value restricts lists to that category.

use std::fmt;

use super::item::BudgetItem;

/// Value of the synthetic "show everything" option
pub const SHOW_ALL_VALUE: &str = "all";

/// Which categories the lists show
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret a picker value
    pub fn from_value(value: &str) -> Self {
        if value == SHOW_ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The picker value this filter corresponds to
    pub fn value(&self) -> &str {
        match self {
            Self::All => SHOW_ALL_VALUE,
            Self::Only(value) => value,
        }
    }

    pub fn matches(&self, item: &BudgetItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => item.category == *value,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryType, Money, NewItem};

    fn item(category: &str) -> BudgetItem {
        BudgetItem::new(NewItem {
            description: "Mat".into(),
            amount: Money::from_cents(100),
            category: category.into(),
            entry_type: EntryType::Expense,
        })
    }

    #[test]
    fn test_from_value() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("rent"),
            CategoryFilter::Only("rent".into())
        );
        assert_eq!(CategoryFilter::Only("rent".into()).value(), "rent");
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn test_matches() {
        assert!(CategoryFilter::All.matches(&item("food")));
        assert!(CategoryFilter::from_value("food").matches(&item("food")));
        assert!(!CategoryFilter::from_value("rent").matches(&item("food")));
    }
}
