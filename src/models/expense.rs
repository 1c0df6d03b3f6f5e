//! Expense model
//!
//! A single recorded spending event. Expenses carry no surrogate id: two
//! expenses with the same date, amount, category and description are equal,
//! and deletion matches on all four fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::BudgetMonth;
use crate::error::{TrackerError, TrackerResult};

/// Normalize a category label for storage and lookup
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Parse a calendar day in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TrackerError::InvalidDate(format!("{} (expected YYYY-MM-DD)", s.trim())))
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar day the money was spent
    pub date: NaiveDate,

    /// Amount spent
    pub amount: Money,

    /// Lowercase category label
    #[serde(deserialize_with = "deserialize_category")]
    pub category: String,

    /// Free text description
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense, normalizing the category
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: &str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: normalize_category(category),
            description: description.into(),
        }
    }

    /// The budget month this expense counts against
    pub fn month(&self) -> BudgetMonth {
        BudgetMonth::of(self.date)
    }

    /// Check if the expense falls in the given month
    pub fn is_in(&self, month: BudgetMonth) -> bool {
        month.contains(self.date)
    }

    /// Check whether this expense matches all four identifying fields
    pub fn matches(
        &self,
        date: NaiveDate,
        amount: Money,
        category: &str,
        description: &str,
    ) -> bool {
        self.date == date
            && self.amount == amount
            && self.category == category
            && self.description == description
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Ledger files edited by hand may carry mixed-case categories
fn deserialize_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_category(&raw))
}
