//! Report CLI commands
//!
//! Implements CLI commands for the monthly summary, the category breakdown
//! and the monthly spending trend.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_overview, format_category_chart, format_trend_chart};
use crate::error::TrackerResult;
use crate::models::BudgetMonth;
use crate::reports::{CategoryBreakdown, SpendingTrend};
use crate::services::ExpenseStore;
use crate::storage::LedgerStorage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending and budget status for a month
    Summary {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spending broken down by category
    Categories {
        /// Month (YYYY-MM, defaults to all time)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Total spending per month
    Trend,
}

/// Handle a report command
pub fn handle_report_command<S: LedgerStorage>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { month, json } => {
            let month = month.as_deref().map(BudgetMonth::parse).transpose()?;
            let summary = store.get_expense_summary(month);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_budget_overview(&summary, symbol));
            }
        }

        ReportCommands::Categories { month } => {
            let month = month.as_deref().map(BudgetMonth::parse).transpose()?;
            let report = CategoryBreakdown::generate(store, month);
            print!(
                "{}",
                format_category_chart(&report, symbol, settings.chart_width)
            );
        }

        ReportCommands::Trend => {
            let trend = SpendingTrend::generate(store);
            print!("{}", format_trend_chart(&trend, symbol, settings.chart_width));
        }
    }

    Ok(())
}
