//! Budget CLI commands
//!
//! Implements CLI commands for setting, removing and reviewing the total
//! and per-category monthly budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_overview;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{normalize_category, BudgetMonth, Money};
use crate::services::ExpenseStore;
use crate::storage::LedgerStorage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the total monthly budget, or a category budget with --category
    Set {
        /// Amount (0 means no limit)
        amount: String,
        /// Category to budget
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a category budget, or reset the total budget without --category
    Delete {
        /// Category whose budget to remove
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show budget status for a month
    Overview {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn category_arg(category: Option<String>) -> TrackerResult<Option<String>> {
    match category {
        Some(c) if c.trim().is_empty() => {
            Err(TrackerError::Validation("Category cannot be empty".into()))
        }
        other => Ok(other),
    }
}

/// Handle a budget command
pub fn handle_budget_command<S: LedgerStorage>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount, category } => {
            let amount = Money::parse(&amount)?;
            let category = category_arg(category)?;

            store.set_budget(amount, category.as_deref())?;

            let target = category
                .as_deref()
                .map(normalize_category)
                .unwrap_or_else(|| "total".to_string());
            if amount.is_zero() {
                println!("Budget for {} set to no limit.", target);
            } else {
                println!(
                    "Budget for {} set to {}.",
                    target,
                    amount.format_with_symbol(symbol)
                );
            }
        }

        BudgetCommands::Delete { category } => {
            let category = category_arg(category)?;
            let changed = store.delete_budget(category.as_deref())?;

            match (category, changed) {
                (Some(c), true) => println!("Removed budget for {}.", normalize_category(&c)),
                (Some(c), false) => println!("No budget set for {}.", normalize_category(&c)),
                (None, true) => println!("Total budget reset to no limit."),
                (None, false) => println!("No total budget set."),
            }
        }

        BudgetCommands::Overview { month } => {
            let month = month.as_deref().map(BudgetMonth::parse).transpose()?;
            let summary = store.get_expense_summary(month);
            print!("{}", format_budget_overview(&summary, symbol));

            let unspent: Vec<_> = store
                .budgets()
                .categories
                .keys()
                .filter(|c| !summary.categories.contains_key(*c))
                .map(String::as_str)
                .collect();
            if !unspent.is_empty() {
                println!("No spending yet: {}", unspent.join(", "));
            }
        }
    }

    Ok(())
}
