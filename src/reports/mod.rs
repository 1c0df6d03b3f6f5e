//! Reports for the expense tracker
//!
//! Aggregations behind the charts: the per-category breakdown and the
//! monthly spending trend. The monthly budget summary lives on the store
//! itself (`ExpenseStore::get_expense_summary`).

pub mod breakdown;
pub mod trend;

pub use breakdown::{CategoryBreakdown, CategoryShare};
pub use trend::{MonthlyTotal, SpendingTrend};
