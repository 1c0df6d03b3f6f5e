//! Category Breakdown Report
//!
//! Share of spending per category, across all time or for one month.

use crate::models::{BudgetMonth, Money};
use crate::services::ExpenseStore;
use crate::storage::LedgerStorage;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub spent: Money,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending broken down by category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// `None` for all-time
    pub month: Option<BudgetMonth>,
    /// Largest spending first
    pub categories: Vec<CategoryShare>,
    pub total: Money,
}

impl CategoryBreakdown {
    pub fn generate<S: LedgerStorage>(store: &ExpenseStore<S>, month: Option<BudgetMonth>) -> Self {
        let spending = store.get_spending_by_category(month);
        let total: Money = spending.values().sum();

        let mut categories: Vec<CategoryShare> = spending
            .into_iter()
            .map(|(category, spent)| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (spent.cents() as f64 / total.cents() as f64) * 100.0
                };
                CategoryShare {
                    category,
                    spent,
                    percentage,
                }
            })
            .collect();

        // Ties keep alphabetical order from the map
        categories.sort_by(|a, b| b.spent.cmp(&a.spent));

        Self {
            month,
            categories,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn largest(&self) -> Option<&CategoryShare> {
        self.categories.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;
    use chrono::NaiveDate;

    fn store_with(expenses: &[(u32, u32, i64, &str)]) -> ExpenseStore<InMemoryStorage> {
        let mut store = ExpenseStore::load(InMemoryStorage::new()).unwrap();
        for (month, day, cents, category) in expenses {
            store
                .add_expense(
                    Money::from_cents(*cents),
                    category,
                    "",
                    NaiveDate::from_ymd_opt(2024, *month, *day),
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn test_breakdown_orders_by_spending() {
        let store = store_with(&[
            (5, 1, 2000, "food"),
            (5, 2, 6000, "rent"),
            (5, 3, 2000, "fun"),
            (4, 1, 9900, "travel"),
        ]);

        let report = CategoryBreakdown::generate(&store, BudgetMonth::new(2024, 5));
        let order: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, ["rent", "food", "fun"]);
        assert_eq!(report.total, Money::from_cents(10000));
        assert!((report.categories[0].percentage - 60.0).abs() < f64::EPSILON);
        assert_eq!(report.largest().unwrap().category, "rent");
    }

    #[test]
    fn test_breakdown_all_time() {
        let store = store_with(&[(5, 1, 2000, "food"), (4, 1, 9900, "travel")]);

        let report = CategoryBreakdown::generate(&store, None);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.total, Money::from_cents(11900));
    }

    #[test]
    fn test_empty_breakdown() {
        let store = store_with(&[]);
        let report = CategoryBreakdown::generate(&store, None);
        assert!(report.is_empty());
        assert!(report.total.is_zero());
        assert!(report.largest().is_none());
    }
}
