//! Summary formatting: remaining balance and the month heading

use chrono::{Datelike, Local, NaiveDate};

use crate::services::Totals;

const MONTHS_SV: [&str; 12] = [
    "januari",
    "februari",
    "mars",
    "april",
    "maj",
    "juni",
    "juli",
    "augusti",
    "september",
    "oktober",
    "november",
    "december",
];

/// Swedish month name and year, e.g. "oktober 2026"
pub fn month_label(date: NaiveDate) -> String {
    let name = MONTHS_SV[date.month0() as usize];
    format!("{} {}", name, date.year())
}

/// Month heading for today's date
pub fn current_month_label() -> String {
    month_label(Local::now().date_naive())
}

/// Multi-line totals block for the terminal
pub fn format_totals(totals: &Totals, currency_suffix: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  Income:    {:>14}\n",
        totals.total_income.format_with_suffix(currency_suffix)
    ));
    output.push_str(&format!(
        "  Expenses:  {:>14}\n",
        totals.total_expense.format_with_suffix(currency_suffix)
    ));
    output.push_str(&format!(
        "  Remaining: {:>14}\n",
        totals.remaining.format_with_suffix(currency_suffix)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_month_label() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(month_label(date), "oktober 2026");

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(month_label(date), "januari 2025");
    }

    #[test]
    fn test_current_month_label_has_year() {
        let label = current_month_label();
        let year = Local::now().year().to_string();
        assert!(label.ends_with(&year));
    }

    #[test]
    fn test_format_totals() {
        let totals = Totals {
            total_income: Money::from_cents(2_000_000),
            total_expense: Money::from_cents(800_000),
            remaining: Money::from_cents(1_200_000),
        };
        let output = format_totals(&totals, "SEK");
        assert!(output.contains("20000.00 SEK"));
        assert!(output.contains("8000.00 SEK"));
        assert!(output.contains("Remaining:"));
        assert!(output.contains("12000.00 SEK"));
    }
}
