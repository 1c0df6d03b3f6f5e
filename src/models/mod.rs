//! Core data models for the expense tracker
//!
//! This module contains the typed records of the domain: money amounts,
//! budget months, expenses, budgets, the persisted ledger, alerts and
//! summaries.

pub mod alert;
pub mod budget;
pub mod expense;
pub mod ledger;
pub mod money;
pub mod month;
pub mod summary;

pub use alert::{AlertLevel, AlertScope, BudgetAlert};
pub use budget::BudgetSet;
pub use expense::{normalize_category, parse_date, Expense};
pub use ledger::Ledger;
pub use money::Money;
pub use month::BudgetMonth;
pub use summary::{CategorySummary, ExpenseSummary};
