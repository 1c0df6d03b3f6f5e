//! Service layer for the expense tracker
//!
//! The service layer provides the business logic on top of the storage
//! layer: the expense store with its queries and mutations, and budget
//! alert evaluation.

pub mod alerts;
pub mod expense_store;

pub use alerts::{alert_level, evaluate_alerts};
pub use expense_store::ExpenseStore;
