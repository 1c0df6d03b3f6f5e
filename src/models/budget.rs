//! Budget model
//!
//! Monthly spending ceilings: one overall total and any number of
//! per-category limits. A limit of zero means "no limit".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::expense::normalize_category;
use super::money::Money;

/// The configured budgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSet {
    /// Overall monthly budget (zero = no limit)
    #[serde(default)]
    pub total: Money,

    /// Per-category monthly budgets keyed by lowercase category
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub categories: BTreeMap<String, Money>,
}

impl BudgetSet {
    /// The total budget, if one is in effect
    pub fn total_limit(&self) -> Option<Money> {
        Some(self.total).filter(Money::is_positive)
    }

    /// The raw configured budget for a category (zero if unset)
    pub fn category_budget(&self, category: &str) -> Money {
        self.categories
            .get(&normalize_category(category))
            .copied()
            .unwrap_or_default()
    }

    /// The category budget, if one is in effect
    pub fn category_limit(&self, category: &str) -> Option<Money> {
        Some(self.category_budget(category)).filter(Money::is_positive)
    }

    /// Set the total budget
    pub fn set_total(&mut self, amount: Money) {
        self.total = amount;
    }

    /// Set or overwrite a category budget
    pub fn set_category(&mut self, category: &str, amount: Money) {
        self.categories.insert(normalize_category(category), amount);
    }

    /// Reset the total budget to "no limit"
    pub fn clear_total(&mut self) {
        self.total = Money::zero();
    }

    /// Remove a category budget, returning the previous amount if present
    pub fn remove_category(&mut self, category: &str) -> Option<Money> {
        self.categories.remove(&normalize_category(category))
    }
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<BTreeMap<String, Money>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, Money>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(category, amount)| (normalize_category(&category), amount))
        .collect())
}
