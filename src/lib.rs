//! Expense Tracker - command-line expense tracking with monthly budgets
//!
//! This library provides the core functionality for the expense tracker:
//! recording dated, categorized expenses, keeping an overall monthly budget
//! and per-category budgets, raising alerts as spending approaches or
//! exceeds those budgets, and summarizing a month's spending.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, expenses, budgets, alerts)
//! - `storage`: JSON file storage layer
//! - `services`: The expense store and alert evaluation
//! - `reports`: Category breakdowns and monthly trends
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::TrackerPaths;
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseStore;
//!
//! let paths = TrackerPaths::new()?;
//! let mut store = ExpenseStore::open(&paths)?;
//! let alerts = store.add_expense(Money::from_cents(1250), "Food", "Lunch", None)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
