//! Totals calculation
//!
//! Income sum, expense sum and the remaining balance, plus the colour tone
//! the remaining balance is shown in.

use crate::models::{BudgetItem, EntryType, Money};

/// Summed amounts over a set of budget items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_income: Money,
    pub total_expense: Money,
    pub remaining: Money,
}

impl Totals {
    pub fn tone(&self) -> BalanceTone {
        BalanceTone::of(self.remaining)
    }
}

/// Sum incomes and expenses
pub fn compute_totals<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a BudgetItem>,
{
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for item in items {
        match item.entry_type {
            EntryType::Income => total_income = total_income.saturating_add(item.amount),
            EntryType::Expense => total_expense = total_expense.saturating_add(item.amount),
        }
    }

    Totals {
        total_income,
        total_expense,
        remaining: total_income.saturating_sub(total_expense),
    }
}

/// Colour treatment of the remaining balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    /// Zero or above
    Positive,
    /// Below zero
    Warning,
}

impl BalanceTone {
    pub fn of(remaining: Money) -> Self {
        if remaining.is_negative() {
            Self::Warning
        } else {
            Self::Positive
        }
    }

    /// Hex colour of the remaining-balance text
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Positive => "#95D096",
            Self::Warning => "#F9AEAE",
        }
    }

    /// RGB components of `hex`
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Positive => (0x95, 0xD0, 0x96),
            Self::Warning => (0xF9, 0xAE, 0xAE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewItem;

    fn item(cents: i64, entry_type: EntryType) -> BudgetItem {
        BudgetItem::new(NewItem {
            description: "post".into(),
            amount: Money::from_cents(cents),
            category: "other".into(),
            entry_type,
        })
    }

    #[test]
    fn test_empty_totals() {
        let items: Vec<BudgetItem> = Vec::new();
        let totals = compute_totals(&items);
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.remaining.to_string(), "0.00");
        assert_eq!(totals.tone(), BalanceTone::Positive);
    }

    #[test]
    fn test_remaining_is_income_minus_expense() {
        let items = vec![
            item(2_000_000, EntryType::Income),
            item(800_000, EntryType::Expense),
            item(1, EntryType::Expense),
            item(10, EntryType::Income),
        ];
        let totals = compute_totals(&items);

        assert_eq!(totals.total_income.cents(), 2_000_010);
        assert_eq!(totals.total_expense.cents(), 800_001);
        assert_eq!(totals.remaining.cents(), 1_200_009);
        assert_eq!(compute_totals(&items), totals);
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let items: Vec<_> = (0..10).map(|_| item(10, EntryType::Income)).collect();
        assert_eq!(compute_totals(&items).remaining.to_string(), "1.00");
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let huge = i64::MAX / 2 + 1;
        let items = vec![
            item(huge, EntryType::Income),
            item(huge, EntryType::Income),
            item(huge, EntryType::Expense),
        ];
        let totals = compute_totals(&items);

        assert_eq!(totals.total_income.cents(), i64::MAX);
        assert_eq!(totals.total_expense.cents(), huge);
        assert!(totals.remaining.is_positive());
    }

    #[test]
    fn test_tone() {
        assert_eq!(BalanceTone::of(Money::from_cents(-1)), BalanceTone::Warning);
        assert_eq!(BalanceTone::of(Money::zero()), BalanceTone::Positive);
        assert_eq!(BalanceTone::of(Money::from_cents(1)), BalanceTone::Positive);
        assert_eq!(BalanceTone::Warning.hex(), "#F9AEAE");
        assert_eq!(BalanceTone::Positive.rgb(), (0x95, 0xD0, 0x96));
    }
}
