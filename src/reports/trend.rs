//! Monthly Spending Trend Report
//!
//! Total spending per month, oldest month first.

use crate::models::{BudgetMonth, Money};
use crate::services::ExpenseStore;
use crate::storage::LedgerStorage;

/// Spending total for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: BudgetMonth,
    pub total: Money,
}

#[derive(Debug, Clone)]
pub struct SpendingTrend {
    pub months: Vec<MonthlyTotal>,
}

impl SpendingTrend {
    /// Build the trend from every month that has at least one expense
    pub fn generate<S: LedgerStorage>(store: &ExpenseStore<S>) -> Self {
        let months = store
            .get_monthly_totals()
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect();
        Self { months }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The highest monthly total
    pub fn peak(&self) -> Option<&MonthlyTotal> {
        self.months.iter().max_by_key(|m| m.total)
    }

    /// Average spending over the months that have expenses
    pub fn average(&self) -> Money {
        if self.months.is_empty() {
            return Money::zero();
        }
        let total: Money = self.months.iter().map(|m| m.total).sum();
        Money::from_cents(total.cents() / self.months.len() as i64)
    }
}
