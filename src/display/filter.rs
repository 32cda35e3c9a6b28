//! Category filter control
//!
//! Option list for the category picker. Every way of changing the options
//! goes through this type, and each one re-applies the rule that the
//! synthetic "Show all" option sits first and appears exactly once.

use crate::models::{Categories, CategoryFilter, SHOW_ALL_VALUE};

/// One picker option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub text: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    pub fn is_show_all(&self) -> bool {
        self.value == SHOW_ALL_VALUE
    }
}

/// Category picker state: options plus the selected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    options: Vec<FilterOption>,
    selected: String,
    show_all_label: String,
}

impl FilterControl {
    pub fn new(show_all_label: impl Into<String>) -> Self {
        let mut control = Self {
            options: Vec::new(),
            selected: SHOW_ALL_VALUE.to_string(),
            show_all_label: show_all_label.into(),
        };
        control.ensure_show_all();
        control
    }

    /// Rebuild the options from categories, expenses first then incomes
    pub fn populate(&mut self, categories: &Categories) {
        let options = categories
            .iter()
            .map(|c| FilterOption::new(c.value.clone(), c.text.clone()))
            .collect();
        self.replace_options(options);
    }

    /// Replace the option list wholesale
    pub fn replace_options(&mut self, options: Vec<FilterOption>) {
        self.options = options;
        self.ensure_show_all();
    }

    /// Append an option
    pub fn push_option(&mut self, option: FilterOption) {
        self.options.push(option);
        self.ensure_show_all();
    }

    /// Remove every option with `value`, returning whether any was removed
    ///
    /// Removing "Show all" is allowed but it is put straight back.
    pub fn remove_option(&mut self, value: &str) -> bool {
        let before = self.options.len();
        self.options.retain(|o| o.value != value);
        let removed = self.options.len() != before;
        self.ensure_show_all();
        removed
    }

    /// Put "Show all" first, drop any extra copies, and fall back to it if
    /// the selected option is gone
    fn ensure_show_all(&mut self) {
        let existing = self.options.iter().position(FilterOption::is_show_all);
        let show_all = match existing {
            Some(pos) => self.options.remove(pos),
            None => FilterOption::new(SHOW_ALL_VALUE, self.show_all_label.clone()),
        };
        self.options.retain(|o| !o.is_show_all());
        self.options.insert(0, show_all);

        if !self.options.iter().any(|o| o.value == self.selected) {
            self.selected = SHOW_ALL_VALUE.to_string();
        }
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// Select an option by value; unknown values are ignored
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.selected = value.to_string();
            true
        } else {
            false
        }
    }

    /// Move the selection by `delta` options, wrapping around
    pub fn cycle(&mut self, delta: isize) {
        let len = self.options.len() as isize;
        if len == 0 {
            return;
        }
        let current = self
            .options
            .iter()
            .position(|o| o.value == self.selected)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.selected = self.options[next].value.clone();
    }

    pub fn selected_value(&self) -> &str {
        &self.selected
    }

    pub fn selected_option(&self) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.value == self.selected)
    }

    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_value(&self.selected)
    }
}

impl Default for FilterControl {
    fn default() -> Self {
        Self::new("Show all")
    }
}
