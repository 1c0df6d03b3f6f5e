//! The complete durable state of the tracker
//!
//! A ledger is exactly what lives in the data file: every expense in
//! insertion order plus the configured budgets.

use serde::{Deserialize, Serialize};

use super::budget::BudgetSet;
use super::expense::Expense;

/// All recorded expenses and configured budgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Expenses, oldest first
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub budgets: BudgetSet,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budgets == BudgetSet::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_document_layout() {
        let json = serde_json::to_value(Ledger::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "expenses": [],
                "budgets": {"total": 0.0, "categories": {}}
            })
        );
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut ledger = Ledger::new();
        for (day, amount) in [(3, 500), (1, 250), (2, 125)] {
            ledger.expenses.push(Expense::new(
                NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
                Money::from_cents(amount),
                "food",
                format!("day {}", day),
            ));
        }
        ledger.budgets.set_total(Money::from_cents(20000));
        ledger.budgets.set_category("food", Money::from_cents(9000));

        let json = serde_json::to_string_pretty(&ledger).unwrap();
        let loaded: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, ledger);
        assert!(!loaded.is_empty());
    }

    #[test]
    fn test_reads_document_written_by_other_tools() {
        let json = r#"{
            "expenses": [
                {"date": "2024-05-01", "amount": 20.0, "category": "food", "description": "Groceries"}
            ],
            "budgets": {"total": 0, "categories": {}}
        }"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.expenses.len(), 1);
        assert_eq!(ledger.expenses[0].amount, Money::from_cents(2000));
    }
}
