//! Budget alert model
//!
//! Alerts are produced when month-to-date spending reaches 80% (warning) or
//! 100% (exceeded) of a budget that is in effect.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// How far spending has progressed against a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Spending reached the warning threshold
    Warning,
    /// Spending reached or passed the budget
    Exceeded,
}

/// Which budget an alert is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertScope {
    Category(String),
    Total,
}

/// A budget alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetAlert {
    pub level: AlertLevel,
    pub scope: AlertScope,
    /// Month-to-date spending that triggered the alert
    pub spent: Money,
    /// The budget it was compared against
    pub limit: Money,
}

impl BudgetAlert {
    /// The user-facing message for this alert
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.level, &self.scope) {
            (AlertLevel::Exceeded, AlertScope::Category(category)) => {
                write!(f, "ALERT: exceeded budget for {}", category)
            }
            (AlertLevel::Warning, AlertScope::Category(category)) => {
                write!(f, "WARNING: 80% used for {}", category)
            }
            (AlertLevel::Exceeded, AlertScope::Total) => {
                write!(f, "ALERT: exceeded total monthly budget")
            }
            (AlertLevel::Warning, AlertScope::Total) => {
                write!(f, "WARNING: 80% used of total monthly budget")
            }
        }
    }
}
