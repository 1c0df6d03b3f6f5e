//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_alerts, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{normalize_category, parse_date, BudgetMonth, Money};
use crate::services::ExpenseStore;
use crate::storage::LedgerStorage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12" or "12.50")
        amount: String,
        /// Category (stored in lowercase)
        category: String,
        /// Description
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, most recently recorded first
    List {
        /// Only show expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete every expense matching all four fields
    Delete {
        /// Expense date (YYYY-MM-DD)
        date: String,
        /// Amount
        amount: String,
        /// Category
        category: String,
        /// Description
        description: String,
    },
}

fn require(field: &str, value: &str) -> TrackerResult<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command<S: LedgerStorage>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = Money::parse(&amount)?;
            require("Category", &category)?;
            require("Description", &description)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let alerts = store.add_expense(amount, &category, &description, date)?;

            println!(
                "Added expense: {} for {} ({})",
                amount.format_with_symbol(symbol),
                normalize_category(&category),
                description
            );
            if !alerts.is_empty() {
                print!("{}", format_alerts(&alerts));
            }
        }

        ExpenseCommands::List {
            month,
            category,
            limit,
        } => {
            let month = month.as_deref().map(BudgetMonth::parse).transpose()?;
            let category = category.as_deref().map(normalize_category);

            let matching: Vec<_> = store
                .expenses_newest_first()
                .filter(|e| month.map_or(true, |m| e.is_in(m)))
                .filter(|e| category.as_ref().map_or(true, |c| &e.category == c))
                .collect();
            let shown = matching.len().min(limit);

            println!("{}", format_expense_table(matching.iter().take(limit).copied(), symbol));
            if shown < matching.len() {
                println!("Showing {} of {} expenses.", shown, matching.len());
            }
        }

        ExpenseCommands::Delete {
            date,
            amount,
            category,
            description,
        } => {
            let date = parse_date(&date)?;
            let amount = Money::parse(&amount)?;

            let removed = store.delete_expense(date, amount, &category, &description)?;
            match removed {
                0 => println!("No matching expense found."),
                1 => println!("Deleted 1 expense."),
                n => println!("Deleted {} expenses.", n),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;

    fn store() -> ExpenseStore<InMemoryStorage> {
        ExpenseStore::load(InMemoryStorage::new()).unwrap()
    }

    fn add(amount: &str, category: &str, description: &str) -> ExpenseCommands {
        ExpenseCommands::Add {
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
            date: Some("2024-05-01".into()),
        }
    }

    #[test]
    fn test_add_and_delete() {
        let mut store = store();
        let settings = Settings::default();

        handle_expense_command(&mut store, &settings, add("12.50", "Food", "Lunch")).unwrap();
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].amount, Money::from_cents(1250));

        handle_expense_command(
            &mut store,
            &settings,
            ExpenseCommands::Delete {
                date: "2024-05-01".into(),
                amount: "$12.50".into(),
                category: "FOOD".into(),
                description: "Lunch".into(),
            },
        )
        .unwrap();
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut store = store();
        let settings = Settings::default();

        let err = handle_expense_command(&mut store, &settings, add("abc", "food", "x")).unwrap_err();
        assert!(err.is_invalid_amount());

        let err = handle_expense_command(&mut store, &settings, add("5", " ", "x")).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        let err = handle_expense_command(&mut store, &settings, add("5", "food", "")).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        let bad_date = ExpenseCommands::Add {
            amount: "5".into(),
            category: "food".into(),
            description: "x".into(),
            date: Some("tomorrow".into()),
        };
        let err = handle_expense_command(&mut store, &settings, bad_date).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDate(_)));

        assert!(store.expenses().is_empty());
        assert_eq!(store.storage().saved(), None);
    }

    #[test]
    fn test_list_rejects_bad_month() {
        let mut store = store();
        let cmd = ExpenseCommands::List {
            month: Some("May".into()),
            category: None,
            limit: 5,
        };
        let err = handle_expense_command(&mut store, &Settings::default(), cmd).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidMonth(_)));
    }
}
