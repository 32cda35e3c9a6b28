//! Budget ledger
//!
//! The ordered list of every budget item. The income and expense lists are
//! views over this one vector, so an item can never be in one list and
//! missing from the other.

use crate::models::{BudgetItem, CategoryFilter, EntryType, ItemId, NewItem};

use super::totals::{compute_totals, Totals};

/// Ordered collection of budget items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    items: Vec<BudgetItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger holding previously stored items, in their stored order
    pub fn from_items(items: Vec<BudgetItem>) -> Self {
        Self { items }
    }

    /// Append a new item and return it
    ///
    /// Identical entries are allowed; each gets its own id.
    pub fn add(&mut self, input: NewItem) -> &BudgetItem {
        let item = BudgetItem::new(input);
        tracing::debug!(id = %item.id, entry_type = %item.entry_type, "item added");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Remove the item with `id`
    pub fn remove(&mut self, id: ItemId) -> Option<BudgetItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Remove the `position`-th item of a filtered type view
    ///
    /// `position` counts only items of `entry_type` matching `filter`, which
    /// is the numbering the rendered lists use.
    pub fn remove_at(
        &mut self,
        entry_type: EntryType,
        filter: &CategoryFilter,
        position: usize,
    ) -> Option<BudgetItem> {
        let id = self.find_at(entry_type, filter, position)?.id;
        self.remove(id)
    }

    /// Look up the `position`-th item of a filtered type view
    pub fn find_at(
        &self,
        entry_type: EntryType,
        filter: &CategoryFilter,
        position: usize,
    ) -> Option<&BudgetItem> {
        self.view(entry_type)
            .filter(|item| filter.matches(item))
            .nth(position)
    }

    pub fn get(&self, id: ItemId) -> Option<&BudgetItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Every item in insertion order
    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    /// Items of one type, in ledger order
    pub fn view(&self, entry_type: EntryType) -> impl Iterator<Item = &BudgetItem> + '_ {
        self.items
            .iter()
            .filter(move |item| item.entry_type == entry_type)
    }

    pub fn incomes(&self) -> impl Iterator<Item = &BudgetItem> + '_ {
        self.view(EntryType::Income)
    }

    pub fn expenses(&self) -> impl Iterator<Item = &BudgetItem> + '_ {
        self.view(EntryType::Expense)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.items)
    }

    pub fn into_items(self) -> Vec<BudgetItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn input(description: &str, cents: i64, category: &str, entry_type: EntryType) -> NewItem {
        NewItem {
            description: description.into(),
            amount: Money::from_cents(cents),
            category: category.into(),
            entry_type,
        }
    }

    #[test]
    fn test_add_appends_and_capitalizes() {
        let mut ledger = Ledger::new();
        let added = ledger
            .add(input("lön", 2_000_000, "salary", EntryType::Income))
            .clone();

        assert_eq!(added.description, "Lön");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0], added);
        assert_eq!(ledger.incomes().count(), 1);
        assert_eq!(ledger.expenses().count(), 0);
    }

    #[test]
    fn test_views_partition_the_ledger() {
        let mut ledger = Ledger::new();
        ledger.add(input("lön", 100, "salary", EntryType::Income));
        ledger.add(input("hyra", 50, "rent", EntryType::Expense));
        ledger.add(input("mat", 20, "food", EntryType::Expense));
        ledger.add(input("bidrag", 10, "benefits", EntryType::Income));

        let incomes: Vec<_> = ledger.incomes().map(|i| i.description.as_str()).collect();
        let expenses: Vec<_> = ledger.expenses().map(|i| i.description.as_str()).collect();

        assert_eq!(incomes, vec!["Lön", "Bidrag"]);
        assert_eq!(expenses, vec!["Hyra", "Mat"]);
        assert_eq!(incomes.len() + expenses.len(), ledger.len());
    }

    #[test]
    fn test_duplicates_coexist_and_remove_exactly_one() {
        let mut ledger = Ledger::new();
        let first = ledger.add(input("hyra", 800_000, "rent", EntryType::Expense)).id;
        let second = ledger.add(input("hyra", 800_000, "rent", EntryType::Expense)).id;
        assert_ne!(first, second);

        let removed = ledger.remove(second).unwrap();
        assert_eq!(removed.id, second);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0].id, first);
    }

    #[test]
    fn test_remove_unknown_id_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.add(input("hyra", 800_000, "rent", EntryType::Expense));
        let before = ledger.clone();

        assert!(ledger.remove(ItemId::new()).is_none());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_at_uses_filtered_positions() {
        let mut ledger = Ledger::new();
        ledger.add(input("mat", 100, "food", EntryType::Expense));
        ledger.add(input("hyra", 200, "rent", EntryType::Expense));
        ledger.add(input("buss", 300, "transport", EntryType::Expense));
        ledger.add(input("lunch", 400, "food", EntryType::Expense));

        let food = CategoryFilter::from_value("food");
        let removed = ledger.remove_at(EntryType::Expense, &food, 1).unwrap();
        assert_eq!(removed.description, "Lunch");

        let removed = ledger
            .remove_at(EntryType::Expense, &CategoryFilter::All, 1)
            .unwrap();
        assert_eq!(removed.description, "Hyra");

        assert!(ledger.remove_at(EntryType::Expense, &food, 5).is_none());
        assert!(ledger.remove_at(EntryType::Income, &CategoryFilter::All, 0).is_none());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_totals_track_adds_and_removes() {
        let mut ledger = Ledger::new();
        ledger.add(input("lön", 2_000_000, "salary", EntryType::Income));
        let rent = ledger.add(input("hyra", 800_000, "rent", EntryType::Expense)).id;
        assert_eq!(ledger.totals().remaining.cents(), 1_200_000);

        ledger.remove(rent);
        let totals = ledger.totals();
        assert_eq!(totals.remaining.cents(), 2_000_000);
        assert_eq!(totals, ledger.totals());
    }

    #[test]
    fn test_from_items_keeps_order() {
        let mut source = Ledger::new();
        source.add(input("a b", 1, "x", EntryType::Income));
        source.add(input("c d", 2, "y", EntryType::Expense));

        let restored = Ledger::from_items(source.items().to_vec());
        assert_eq!(restored, source);
        assert_eq!(restored.into_items().len(), 2);
    }
}
