//! Expense display formatting
//!
//! Formats expenses and categories for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Expense;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    symbol: &str,
) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|expense| ExpenseRow {
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.clone(),
            amount: expense.amount.format_with_symbol(symbol),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the category list: categories in use, then unused suggestions
pub fn format_category_list(in_use: &[String], suggestions: &[String]) -> String {
    let mut output = String::new();

    if in_use.is_empty() {
        output.push_str("No categories in use yet.\n");
    } else {
        output.push_str("Categories:\n");
        for category in in_use {
            output.push_str(&format!("  {}\n", category));
        }
    }

    let unused: Vec<String> = suggestions
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| !in_use.contains(s))
        .collect();
    if !unused.is_empty() {
        output.push_str(&format!("\nSuggested: {}\n", unused.join(", ")));
    }

    output
}
