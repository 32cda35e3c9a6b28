//! Entry form validation
//!
//! Holds the raw text of the description and amount fields, whether each has
//! been edited, and the income/expense selection. `validate` turns that into
//! a report of which indicators the form should show.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{EntryType, Money};

/// Letters (including å, ä, ö) and whitespace, at least two characters
static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZåäöÅÄÖ\s]{2,}$").expect("valid description pattern"));

/// Characters stripped from the description as it is typed
static DESCRIPTION_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-ZåäöÅÄÖ\s]").expect("valid description filter"));

/// Digits with an optional one- or two-digit fraction
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("valid amount pattern"));

/// Remove every character a description may not contain
pub fn sanitize_description(text: &str) -> String {
    DESCRIPTION_DISALLOWED.replace_all(text, "").into_owned()
}

pub fn is_valid_description(text: &str) -> bool {
    DESCRIPTION_PATTERN.is_match(text)
}

/// Parse an amount field, accepting only positive values with at most two
/// decimals and no larger than `Money::MAX_AMOUNT`
pub fn parse_amount(text: &str) -> Option<Money> {
    if !AMOUNT_PATTERN.is_match(text) {
        return None;
    }
    Money::parse(text)
        .ok()
        .filter(|amount| amount.is_positive() && *amount <= Money::MAX_AMOUNT)
}

pub fn is_valid_amount(text: &str) -> bool {
    parse_amount(text).is_some()
}

/// Income/expense toggle pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeSelector {
    income: bool,
    expense: bool,
}

impl TypeSelector {
    /// Build from raw check flags, as read from an external control
    pub fn from_flags(income: bool, expense: bool) -> Self {
        Self { income, expense }
    }

    /// Check or uncheck one toggle; checking one unchecks the other
    pub fn set(&mut self, entry_type: EntryType, checked: bool) {
        match entry_type {
            EntryType::Income => self.income = checked,
            EntryType::Expense => self.expense = checked,
        }
        if checked {
            match entry_type {
                EntryType::Income => self.expense = false,
                EntryType::Expense => self.income = false,
            }
        }
    }

    /// Flip one toggle
    pub fn toggle(&mut self, entry_type: EntryType) {
        let checked = !self.is_checked(entry_type);
        self.set(entry_type, checked);
    }

    pub fn is_checked(&self, entry_type: EntryType) -> bool {
        match entry_type {
            EntryType::Income => self.income,
            EntryType::Expense => self.expense,
        }
    }

    /// The selected type, if exactly one is checked
    pub fn selected(&self) -> Option<EntryType> {
        match (self.income, self.expense) {
            (true, false) => Some(EntryType::Income),
            (false, true) => Some(EntryType::Expense),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of validating the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub description_valid: bool,
    pub amount_valid: bool,
    pub type_selected: bool,
    pub can_submit: bool,
    /// Show the inline description hint
    pub description_error_visible: bool,
    /// Show the inline amount hint
    pub amount_error_visible: bool,
    /// Show the submit control
    pub submit_visible: bool,
}

/// State of the entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    description: String,
    amount: String,
    description_touched: bool,
    amount_touched: bool,
    selector: TypeSelector,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description text, stripping disallowed characters
    ///
    /// Returns the text actually kept.
    pub fn input_description(&mut self, text: &str) -> &str {
        self.description = sanitize_description(text);
        self.description_touched = true;
        &self.description
    }

    /// Replace the amount text
    pub fn input_amount(&mut self, text: &str) {
        self.amount = text.to_string();
        self.amount_touched = true;
    }

    pub fn select_type(&mut self, entry_type: EntryType, checked: bool) {
        self.selector.set(entry_type, checked);
    }

    pub fn selector(&self) -> &TypeSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut TypeSelector {
        &mut self.selector
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn is_description_touched(&self) -> bool {
        self.description_touched
    }

    pub fn is_amount_touched(&self) -> bool {
        self.amount_touched
    }

    /// Validate all fields
    pub fn validate(&self) -> ValidationReport {
        let description_valid = is_valid_description(&self.description);
        let amount_valid = is_valid_amount(&self.amount);
        let type_selected = self.selector.selected().is_some();
        let can_submit = description_valid && amount_valid && type_selected;

        ValidationReport {
            description_valid,
            amount_valid,
            type_selected,
            can_submit,
            description_error_visible: self.description_touched
                && !self.description.is_empty()
                && !description_valid,
            amount_error_visible: self.amount_touched && !self.amount.is_empty() && !amount_valid,
            submit_visible: can_submit,
        }
    }

    /// Validated values, if the form can be submitted
    pub fn submission(&self) -> Option<(String, Money, EntryType)> {
        if !is_valid_description(&self.description) {
            return None;
        }
        let amount = parse_amount(&self.amount)?;
        let entry_type = self.selector.selected()?;
        Some((self.description.clone(), amount, entry_type))
    }

    /// Clear every field, touched flag and the type selection
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
