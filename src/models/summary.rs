//! Monthly budget summary model

use serde::Serialize;
use std::collections::BTreeMap;

use super::money::Money;
use super::month::BudgetMonth;

/// Remaining budget, or `None` when no limit is in effect
fn remaining(budget: Money, spent: Money) -> Option<Money> {
    budget.is_positive().then(|| budget - spent)
}

/// Spending and budget status of one category for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub spent: Money,
    /// Configured budget (zero if unset)
    pub budget: Money,
    /// `budget - spent` when a budget is in effect; may be negative
    pub remaining: Option<Money>,
}

impl CategorySummary {
    pub fn new(spent: Money, budget: Money) -> Self {
        Self {
            spent,
            budget,
            remaining: remaining(budget, spent),
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_some_and(|r| r.is_negative())
    }
}

/// Spending and budget status for a month
///
/// Only categories with spending in the month are listed; a category that
/// has a budget but no expenses does not appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    pub month: BudgetMonth,
    pub total_spent: Money,
    /// Raw configured total budget (zero = no limit)
    pub total_budget: Money,
    /// `total_budget - total_spent` when a total budget is in effect
    pub budget_remaining: Option<Money>,
    pub categories: BTreeMap<String, CategorySummary>,
}

impl ExpenseSummary {
    pub fn new(month: BudgetMonth, total_spent: Money, total_budget: Money) -> Self {
        Self {
            month,
            total_spent,
            total_budget,
            budget_remaining: remaining(total_budget, total_spent),
            categories: BTreeMap::new(),
        }
    }

    pub fn add_category(&mut self, category: impl Into<String>, spent: Money, budget: Money) {
        self.categories
            .insert(category.into(), CategorySummary::new(spent, budget));
    }

    pub fn is_over_budget(&self) -> bool {
        self.budget_remaining.is_some_and(|r| r.is_negative())
    }
}
