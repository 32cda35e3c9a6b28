//! Application state container
//!
//! `BudgetApp` owns everything the budget page shows: the entry form, the
//! ledger, the category list and its filter picker, and the transient
//! notification. Both the CLI and the TUI drive it; every mutation that
//! changes the ledger is persisted before the call returns.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::display::{
    current_month_label, render_filtered, FilterControl, FilterOption, ListLine, Notification,
    ADDED_MESSAGE,
};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetItem, Categories, Category, CategoryFilter, EntryType, ItemId, NewItem};
use crate::services::{BalanceTone, EntryForm, Ledger, Totals, ValidationReport};
use crate::storage::Storage;

/// Everything needed to draw the page once
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetView {
    pub income_lines: Vec<ListLine>,
    pub expense_lines: Vec<ListLine>,
    pub totals: Totals,
    /// Remaining balance with two decimals, no suffix
    pub remaining_text: String,
    pub tone: BalanceTone,
    pub month_label: String,
    pub notification: Option<String>,
    pub filter_options: Vec<FilterOption>,
    pub selected_category: String,
    pub validation: ValidationReport,
}

/// The budget page state
pub struct BudgetApp {
    storage: Storage,
    settings: Settings,
    ledger: Ledger,
    form: EntryForm,
    categories: Categories,
    filter: FilterControl,
    notification: Option<Notification>,
}

impl BudgetApp {
    /// Load persisted state and prepare the page
    ///
    /// Missing data starts an empty budget. A ledger that cannot be decoded
    /// is logged and replaced by an empty one rather than aborting startup.
    /// Items loaded without an id are given one and written back at once.
    pub fn start(storage: Storage, settings: Settings) -> BudgetResult<Self> {
        storage.categories().ensure_defaults()?;
        let categories = storage.categories().get();

        let mut filter = FilterControl::new(settings.show_all_label.clone());
        filter.populate(&categories);

        let ledger = match storage.ledger().load() {
            Ok(Some(loaded)) => {
                info!(count = loaded.items.len(), "Loaded budget items");
                if loaded.needs_rewrite {
                    match storage.ledger().save(&loaded.items) {
                        Ok(()) => info!("Rewrote budget data with item ids"),
                        Err(e) => warn!(error = %e, "Could not rewrite budget data"),
                    }
                }
                Ledger::from_items(loaded.items)
            }
            Ok(None) => {
                warn!("No saved budget data found, starting with an empty budget");
                Ledger::new()
            }
            Err(e) if e.is_corrupt() => {
                warn!(error = %e, "Ignoring unreadable budget data, starting with an empty budget");
                Ledger::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            storage,
            settings,
            ledger,
            form: EntryForm::new(),
            categories,
            filter,
            notification: None,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn filter_control(&self) -> &FilterControl {
        &self.filter
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter.filter()
    }

    /// Set the description text; returns the sanitized text that was kept
    pub fn input_description(&mut self, text: &str) -> &str {
        self.form.input_description(text)
    }

    pub fn input_amount(&mut self, text: &str) {
        self.form.input_amount(text);
    }

    pub fn select_type(&mut self, entry_type: EntryType, checked: bool) {
        self.form.select_type(entry_type, checked);
    }

    pub fn toggle_type(&mut self, entry_type: EntryType) {
        self.form.selector_mut().toggle(entry_type);
    }

    pub fn validation(&self) -> ValidationReport {
        self.form.validate()
    }

    /// Change the selected category; unknown values are ignored
    pub fn select_category(&mut self, value: &str) -> bool {
        self.filter.select(value)
    }

    /// Move the category selection, wrapping around
    pub fn cycle_category(&mut self, delta: isize) {
        self.filter.cycle(delta);
    }

    /// Add the form contents to the ledger
    ///
    /// The category is whatever the picker shows at the time of submit.
    /// If saving fails the ledger and the form are left as they were.
    pub fn submit(&mut self) -> BudgetResult<BudgetItem> {
        self.submit_at(Instant::now())
    }

    /// `submit` with an explicit clock for the notification
    pub fn submit_at(&mut self, now: Instant) -> BudgetResult<BudgetItem> {
        let report = self.form.validate();
        let Some((description, amount, entry_type)) = self.form.submission() else {
            return Err(BudgetError::Validation(describe_rejection(&report)));
        };

        let item = self
            .ledger
            .add(NewItem {
                description,
                amount,
                category: self.filter.selected_value().to_string(),
                entry_type,
            })
            .clone();

        // Nothing changes unless the new ledger is saved
        if let Err(e) = self.persist() {
            self.ledger.remove(item.id);
            warn!(error = %e, "Could not save new budget item");
            return Err(e);
        }

        self.form.reset();
        self.notification = Some(Notification::posted_at(
            ADDED_MESSAGE,
            Duration::from_secs(self.settings.notification_secs),
            now,
        ));

        info!(id = %item.id, entry_type = %item.entry_type, "Added budget item");
        Ok(item)
    }

    /// Remove an item by id
    pub fn remove(&mut self, id: ItemId) -> BudgetResult<BudgetItem> {
        let removed = self
            .ledger
            .remove(id)
            .ok_or_else(|| BudgetError::item_not_found(id.to_string()))?;
        self.persist()?;
        info!(id = %removed.id, "Removed budget item");
        Ok(removed)
    }

    /// Remove the `position`-th row of the filtered list for `entry_type`
    pub fn remove_at(&mut self, entry_type: EntryType, position: usize) -> BudgetResult<BudgetItem> {
        let filter = self.filter.filter();
        let id = self
            .ledger
            .find_at(entry_type, &filter, position)
            .map(|item| item.id)
            .ok_or_else(|| {
                BudgetError::item_not_found(format!("{} #{}", entry_type, position + 1))
            })?;
        self.remove(id)
    }

    /// Add a category and show it in the picker
    pub fn add_category(&mut self, entry_type: EntryType, category: Category) -> BudgetResult<()> {
        self.categories = self.storage.categories().add(entry_type, category)?;
        self.filter.populate(&self.categories);
        Ok(())
    }

    /// Delete a category; items already using it keep the value
    pub fn remove_category(&mut self, value: &str) -> BudgetResult<Category> {
        let (removed, categories) = self.storage.categories().remove(value)?;
        self.categories = categories;
        self.filter.populate(&self.categories);
        Ok(removed)
    }

    /// Restore the bundled category list
    pub fn reset_categories(&mut self) -> BudgetResult<()> {
        self.categories = self.storage.categories().reset()?;
        self.filter.populate(&self.categories);
        Ok(())
    }

    /// Active notification text, dropping it once expired
    pub fn notification_at(&mut self, now: Instant) -> Option<&str> {
        if self.notification.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.notification = None;
        }
        self.notification.as_ref().map(|n| n.message.as_str())
    }

    /// Project the current state for display
    pub fn render(&self, now: Instant) -> BudgetView {
        let filter = self.filter.filter();
        let suffix = &self.settings.currency_suffix;
        let totals = self.ledger.totals();

        BudgetView {
            income_lines: render_filtered(self.ledger.incomes(), &filter, suffix),
            expense_lines: render_filtered(self.ledger.expenses(), &filter, suffix),
            remaining_text: totals.remaining.to_string(),
            tone: totals.tone(),
            totals,
            month_label: current_month_label(),
            notification: self
                .notification
                .as_ref()
                .and_then(|n| n.visible_at(now))
                .map(str::to_string),
            filter_options: self.filter.options().to_vec(),
            selected_category: self.filter.selected_value().to_string(),
            validation: self.form.validate(),
        }
    }

    fn persist(&self) -> BudgetResult<()> {
        debug!(count = self.ledger.len(), "Persisting ledger");
        self.storage.ledger().save(self.ledger.items())
    }
}

fn describe_rejection(report: &ValidationReport) -> String {
    let mut problems = Vec::new();
    if !report.description_valid {
        problems.push("description must be at least two letters or spaces");
    }
    if !report.amount_valid {
        problems.push(
            "amount must be a positive number up to 1000000000 with at most two decimals",
        );
    }
    if !report.type_selected {
        problems.push("choose exactly one of income or expense");
    }
    if problems.is_empty() {
        "entry cannot be submitted".to_string()
    } else {
        problems.join("; ")
    }
}
