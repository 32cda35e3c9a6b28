//! Category models
//!
//! Categories are plain value/label pairs split into an expense list and an
//! income list. A default set is compiled into the binary; users may edit a
//! persisted copy.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::EntryType;
use crate::error::{BudgetError, BudgetResult};

/// Bundled default categories
const DEFAULT_CATEGORIES_JSON: &str = include_str!("../../data/default_categories.json");

/// A selectable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier stored on budget items
    pub value: String,
    /// Display label
    pub text: String,
}

impl Category {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.value.trim().is_empty() {
            return Err(CategoryValidationError::EmptyValue);
        }
        if self.value.eq_ignore_ascii_case(super::filter::SHOW_ALL_VALUE) {
            return Err(CategoryValidationError::ReservedValue(self.value.clone()));
        }
        if self.text.trim().is_empty() {
            return Err(CategoryValidationError::EmptyText);
        }
        if self.text.chars().count() > 50 {
            return Err(CategoryValidationError::TextTooLong(self.text.chars().count()));
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Expense and income categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub expenses: Vec<Category>,
    #[serde(default)]
    pub incomes: Vec<Category>,
}

impl Categories {
    /// The bundled default set
    pub fn bundled() -> Self {
        serde_json::from_str(DEFAULT_CATEGORIES_JSON).unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled default categories are malformed");
            Self::default()
        })
    }

    /// Categories of one type
    pub fn list(&self, entry_type: EntryType) -> &[Category] {
        match entry_type {
            EntryType::Expense => &self.expenses,
            EntryType::Income => &self.incomes,
        }
    }

    fn list_mut(&mut self, entry_type: EntryType) -> &mut Vec<Category> {
        match entry_type {
            EntryType::Expense => &mut self.expenses,
            EntryType::Income => &mut self.incomes,
        }
    }

    /// Every category, expenses first then incomes
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.expenses.iter().chain(self.incomes.iter())
    }

    /// Find a category by value, along with the list it belongs to
    pub fn find(&self, value: &str) -> Option<(EntryType, &Category)> {
        EntryType::all().iter().find_map(|&entry_type| {
            self.list(entry_type)
                .iter()
                .find(|c| c.value == value)
                .map(|c| (entry_type, c))
        })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a category to one list; values are unique across both lists
    pub fn add(&mut self, entry_type: EntryType, category: Category) -> BudgetResult<()> {
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if self.contains(&category.value) {
            return Err(BudgetError::Duplicate {
                entity_type: "Category",
                identifier: category.value,
            });
        }

        self.list_mut(entry_type).push(category);
        Ok(())
    }

    /// Remove a category by value
    pub fn remove(&mut self, value: &str) -> BudgetResult<Category> {
        for &entry_type in EntryType::all() {
            let list = self.list_mut(entry_type);
            if let Some(pos) = list.iter().position(|c| c.value == value) {
                return Ok(list.remove(pos));
            }
        }
        Err(BudgetError::category_not_found(value))
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyValue,
    EmptyText,
    ReservedValue(String),
    TextTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "Category value cannot be empty"),
            Self::EmptyText => write!(f, "Category label cannot be empty"),
            Self::ReservedValue(v) => write!(f, "Category value '{}' is reserved", v),
            Self::TextTooLong(len) => {
                write!(f, "Category label too long ({} characters, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
