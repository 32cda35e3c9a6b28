//! Category display formatting
//!
//! Formats the expense and income category lists as a tree.

use crate::models::{Categories, EntryType};

/// Format categories as a tree, expenses first
pub fn format_category_tree(categories: &Categories) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'budget category reset' to restore the defaults.\n"
            .to_string();
    }

    let mut output = String::new();

    for (i, &entry_type) in [EntryType::Expense, EntryType::Income].iter().enumerate() {
        let list = categories.list(entry_type);
        let heading = match entry_type {
            EntryType::Expense => "Expenses",
            EntryType::Income => "Incomes",
        };
        output.push_str(&format!("{}\n", heading));

        if list.is_empty() {
            output.push_str("  (no categories)\n");
        } else {
            let value_width = list.iter().map(|c| c.value.len()).max().unwrap_or(0);
            for (j, category) in list.iter().enumerate() {
                let prefix = if j == list.len() - 1 { "└── " } else { "├── " };
                output.push_str(&format!(
                    "  {}{:<width$}  {}\n",
                    prefix,
                    category.value,
                    category.text,
                    width = value_width
                ));
            }
        }

        if i == 0 {
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_format_empty() {
        let output = format_category_tree(&Categories::default());
        assert!(output.contains("No categories found"));
    }

    #[test]
    fn test_format_tree() {
        let categories = Categories {
            expenses: vec![Category::new("rent", "Hyra"), Category::new("food", "Mat")],
            incomes: vec![],
        };

        let output = format_category_tree(&categories);
        assert!(output.starts_with("Expenses\n"));
        assert!(output.contains("├── rent  Hyra"));
        assert!(output.contains("└── food  Mat"));
        assert!(output.contains("Incomes\n  (no categories)"));
    }
}
