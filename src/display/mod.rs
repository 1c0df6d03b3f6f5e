//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, budget overviews and charts
//! for terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_category_list, format_expense_table};
pub use report::{
    format_alerts, format_budget_overview, format_category_chart, format_trend_chart,
};
