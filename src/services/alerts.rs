//! Budget alert evaluation
//!
//! Two independent checks run after an expense is recorded: one against
//! the expense's category budget and one against the total budget. Each
//! check yields at most one alert; exceeded takes precedence over warning.

use crate::models::{AlertLevel, AlertScope, BudgetAlert, BudgetSet, Money};

/// Percentage of a budget at which spending counts as exceeded
pub const EXCEEDED_PERCENT: i64 = 100;

/// Percentage of a budget at which a warning is raised
pub const WARNING_PERCENT: i64 = 80;

/// Check whether `spent` has reached `percent` of `limit`, using exact
/// integer arithmetic on cents.
fn reached(spent: Money, limit: Money, percent: i64) -> bool {
    i128::from(spent.cents()) * 100 >= i128::from(limit.cents()) * i128::from(percent)
}

/// Classify month-to-date spending against a limit
pub fn alert_level(spent: Money, limit: Money) -> Option<AlertLevel> {
    if !limit.is_positive() {
        return None;
    }
    if reached(spent, limit, EXCEEDED_PERCENT) {
        Some(AlertLevel::Exceeded)
    } else if reached(spent, limit, WARNING_PERCENT) {
        Some(AlertLevel::Warning)
    } else {
        None
    }
}

/// Evaluate alerts for a category after an expense was recorded
///
/// `category_spent` and `total_spent` are the month-to-date totals that
/// already include the new expense. Budgets of zero never alert.
pub fn evaluate_alerts(
    budgets: &BudgetSet,
    category: &str,
    category_spent: Money,
    total_spent: Money,
) -> Vec<BudgetAlert> {
    let mut alerts = Vec::with_capacity(2);

    if let Some(limit) = budgets.category_limit(category) {
        if let Some(level) = alert_level(category_spent, limit) {
            alerts.push(BudgetAlert {
                level,
                scope: AlertScope::Category(category.to_string()),
                spent: category_spent,
                limit,
            });
        }
    }

    if let Some(limit) = budgets.total_limit() {
        if let Some(level) = alert_level(total_spent, limit) {
            alerts.push(BudgetAlert {
                level,
                scope: AlertScope::Total,
                spent: total_spent,
                limit,
            });
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    #[test]
    fn test_alert_level_boundaries() {
        let limit = dollars(100);
        assert_eq!(alert_level(Money::from_cents(7999), limit), None);
        assert_eq!(alert_level(dollars(80), limit), Some(AlertLevel::Warning));
        assert_eq!(
            alert_level(Money::from_cents(9999), limit),
            Some(AlertLevel::Warning)
        );
        assert_eq!(alert_level(dollars(100), limit), Some(AlertLevel::Exceeded));
        assert_eq!(alert_level(dollars(250), limit), Some(AlertLevel::Exceeded));
    }

    #[test]
    fn test_zero_limit_never_alerts() {
        assert_eq!(alert_level(dollars(500), Money::zero()), None);
        assert_eq!(alert_level(Money::zero(), Money::zero()), None);
    }

    #[test]
    fn test_category_and_total_are_independent() {
        let mut budgets = BudgetSet::default();
        budgets.set_category("food", dollars(100));
        budgets.set_total(dollars(1000));

        let alerts = evaluate_alerts(&budgets, "food", dollars(105), dollars(850));
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].level, AlertLevel::Exceeded);
        assert_eq!(alerts[0].scope, AlertScope::Category("food".into()));
        assert_eq!(alerts[1].level, AlertLevel::Warning);
        assert_eq!(alerts[1].scope, AlertScope::Total);
    }

    #[test]
    fn test_no_budget_no_alerts() {
        let budgets = BudgetSet::default();
        assert!(evaluate_alerts(&budgets, "food", dollars(10_000), dollars(10_000)).is_empty());
    }

    #[test]
    fn test_other_category_budget_is_ignored() {
        let mut budgets = BudgetSet::default();
        budgets.set_category("rent", dollars(10));

        assert!(evaluate_alerts(&budgets, "food", dollars(50), dollars(50)).is_empty());
    }
}
