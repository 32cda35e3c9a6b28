//! Application state for the TUI
//!
//! Wraps `BudgetApp` with what only the terminal needs: which control has
//! focus, the text inputs with their cursors, and the highlighted list rows.

use std::time::Instant;

use crate::app::{BudgetApp, BudgetView};
use crate::models::EntryType;

use super::widgets::TextInput;

/// Control that receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Description,
    Amount,
    EntryType,
    Category,
    Incomes,
    Expenses,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Description,
        Focus::Amount,
        Focus::EntryType,
        Focus::Category,
        Focus::Incomes,
        Focus::Expenses,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether typed characters go into a text field
    pub fn is_text(self) -> bool {
        matches!(self, Focus::Description | Focus::Amount)
    }

    /// The list this focus points at, if any
    pub fn list(self) -> Option<EntryType> {
        match self {
            Focus::Incomes => Some(EntryType::Income),
            Focus::Expenses => Some(EntryType::Expense),
            _ => None,
        }
    }
}

/// Main TUI state
pub struct App {
    pub budget: BudgetApp,
    pub should_quit: bool,
    pub focus: Focus,
    pub description: TextInput,
    pub amount: TextInput,
    /// Option under the cursor in the income/expense selector
    pub type_cursor: EntryType,
    pub selected_income: usize,
    pub selected_expense: usize,
    /// Status line message, e.g. a failed save
    pub status_message: Option<String>,
}

impl App {
    pub fn new(budget: BudgetApp) -> Self {
        Self {
            budget,
            should_quit: false,
            focus: Focus::default(),
            description: TextInput::new().label("Description"),
            amount: TextInput::new().label("Amount"),
            type_cursor: EntryType::Income,
            selected_income: 0,
            selected_expense: 0,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn view(&self) -> BudgetView {
        self.budget.render(Instant::now())
    }

    /// Push the description field into the form, keeping only allowed
    /// characters in the field itself
    pub fn sync_description(&mut self) {
        let kept = self.budget.input_description(self.description.value()).to_string();
        if kept != self.description.value() {
            self.description.set_value(kept);
        }
    }

    pub fn sync_amount(&mut self) {
        self.budget.input_amount(self.amount.value());
    }

    /// Submit the form; on success the inputs are cleared
    ///
    /// A failed submit leaves the form untouched, so the inputs still show
    /// exactly what will be retried.
    pub fn submit(&mut self) {
        match self.budget.submit() {
            Ok(_) => {
                self.description.clear();
                self.amount.clear();
                self.clear_status();
                self.focus = Focus::Description;
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Highlighted row index for a list
    pub fn selected_row(&self, entry_type: EntryType) -> usize {
        match entry_type {
            EntryType::Income => self.selected_income,
            EntryType::Expense => self.selected_expense,
        }
    }

    fn selected_row_mut(&mut self, entry_type: EntryType) -> &mut usize {
        match entry_type {
            EntryType::Income => &mut self.selected_income,
            EntryType::Expense => &mut self.selected_expense,
        }
    }

    fn row_count(&self, entry_type: EntryType) -> usize {
        let filter = self.budget.filter();
        self.budget
            .ledger()
            .view(entry_type)
            .filter(|item| filter.matches(item))
            .count()
    }

    pub fn move_down(&mut self, entry_type: EntryType) {
        let count = self.row_count(entry_type);
        let row = self.selected_row_mut(entry_type);
        if count > 0 && *row + 1 < count {
            *row += 1;
        }
    }

    pub fn move_up(&mut self, entry_type: EntryType) {
        let row = self.selected_row_mut(entry_type);
        *row = row.saturating_sub(1);
    }

    /// Keep highlighted rows inside the visible lists
    pub fn clamp_selection(&mut self) {
        for entry_type in [EntryType::Income, EntryType::Expense] {
            let count = self.row_count(entry_type);
            let row = self.selected_row_mut(entry_type);
            *row = (*row).min(count.saturating_sub(1));
        }
    }

    /// Remove the highlighted row of a list
    pub fn remove_selected(&mut self, entry_type: EntryType) {
        let position = self.selected_row(entry_type);
        match self.budget.remove_at(entry_type, position) {
            Ok(item) => {
                self.set_status(format!("Removed {}", item.description));
                self.clamp_selection();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Change the category filter, resetting the list highlights
    pub fn cycle_category(&mut self, delta: isize) {
        self.budget.cycle_category(delta);
        self.selected_income = 0;
        self.selected_expense = 0;
    }

    /// Drop the notification once it has expired
    pub fn tick(&mut self) {
        let _ = self.budget.notification_at(Instant::now());
    }
}
