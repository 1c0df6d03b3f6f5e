//! Expense store
//!
//! Owns the in-memory ledger and keeps the durable copy in step with it.
//! Every mutation builds the next ledger, saves it through the storage
//! backend, and only then swaps it in, so a failed save leaves the store
//! exactly as it was. Queries are computed on demand from memory.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::alerts::evaluate_alerts;
use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    normalize_category, BudgetAlert, BudgetMonth, BudgetSet, Expense, ExpenseSummary, Ledger,
    Money,
};
use crate::storage::{JsonFileStorage, LedgerStorage};

/// The expense and budget store
pub struct ExpenseStore<S: LedgerStorage = JsonFileStorage> {
    storage: S,
    ledger: Ledger,
}

impl ExpenseStore<JsonFileStorage> {
    /// Open the store backed by the ledger file under `paths`
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        Self::load(JsonFileStorage::new(paths.ledger_file()))
    }
}

impl<S: LedgerStorage> ExpenseStore<S> {
    /// Load the store from its storage backend
    ///
    /// A missing document starts an empty store; a malformed one is an error.
    pub fn load(storage: S) -> TrackerResult<Self> {
        let ledger = storage.load()?;
        debug!(
            expenses = ledger.expenses.len(),
            categories = ledger.budgets.categories.len(),
            "expense store loaded"
        );
        Ok(Self { storage, ledger })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// All expenses in insertion order (oldest first)
    pub fn expenses(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    /// All expenses, most recently recorded first
    pub fn expenses_newest_first(&self) -> impl Iterator<Item = &Expense> {
        self.ledger.expenses.iter().rev()
    }

    pub fn budgets(&self) -> &BudgetSet {
        &self.ledger.budgets
    }

    /// Every category that has an expense or a budget, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut categories: BTreeSet<&str> = self
            .ledger
            .expenses
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        categories.extend(self.ledger.budgets.categories.keys().map(String::as_str));
        categories.into_iter().map(str::to_string).collect()
    }

    fn commit(&mut self, next: Ledger) -> TrackerResult<()> {
        self.storage.save(&next)?;
        self.ledger = next;
        Ok(())
    }

    /// Record a new expense and return the budget alerts it triggers
    ///
    /// `date` defaults to today. Alerts compare month-to-date spending in the
    /// month of the expense's own date.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: &str,
        description: &str,
        date: Option<NaiveDate>,
    ) -> TrackerResult<Vec<BudgetAlert>> {
        if !amount.is_positive() {
            return Err(TrackerError::InvalidAmount(format!(
                "expense amount must be positive, got {}",
                amount
            )));
        }
        if !amount.is_within_limit() {
            return Err(TrackerError::InvalidAmount(format!(
                "expense amount exceeds the maximum of {}, got {}",
                Money::MAX,
                amount
            )));
        }

        let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
        let expense = Expense::new(date, amount, category, description);
        let month = expense.month();
        let category = expense.category.clone();

        let mut next = self.ledger.clone();
        next.expenses.push(expense);
        self.commit(next)?;

        info!(%date, %amount, category = %category, "expense added");

        let alerts = evaluate_alerts(
            &self.ledger.budgets,
            &category,
            self.get_monthly_spending(month, Some(&category)),
            self.get_monthly_spending(month, None),
        );
        for alert in &alerts {
            info!(%month, alert = %alert, "budget alert");
        }
        Ok(alerts)
    }

    /// Remove every expense matching all four fields exactly
    ///
    /// Returns the number of removed expenses; zero matches is not an error
    /// and leaves the stored document untouched.
    pub fn delete_expense(
        &mut self,
        date: NaiveDate,
        amount: Money,
        category: &str,
        description: &str,
    ) -> TrackerResult<usize> {
        let category = normalize_category(category);

        let mut next = self.ledger.clone();
        next.expenses
            .retain(|e| !e.matches(date, amount, &category, description));
        let removed = self.ledger.expenses.len() - next.expenses.len();

        if removed > 0 {
            self.commit(next)?;
            info!(%date, %amount, category = %category, removed, "expenses deleted");
        } else {
            debug!(%date, %amount, category = %category, "no matching expense to delete");
        }
        Ok(removed)
    }

    /// Set the budget for a category, or the total budget when `category` is `None`
    ///
    /// A budget of zero means "no limit".
    pub fn set_budget(&mut self, amount: Money, category: Option<&str>) -> TrackerResult<()> {
        if amount.is_negative() {
            return Err(TrackerError::InvalidAmount(format!(
                "budget cannot be negative, got {}",
                amount
            )));
        }
        if !amount.is_within_limit() {
            return Err(TrackerError::InvalidAmount(format!(
                "budget exceeds the maximum of {}, got {}",
                Money::MAX,
                amount
            )));
        }

        let mut next = self.ledger.clone();
        match category {
            Some(category) => next.budgets.set_category(category, amount),
            None => next.budgets.set_total(amount),
        }
        self.commit(next)?;

        info!(%amount, category = category.unwrap_or("total"), "budget set");
        Ok(())
    }

    /// Remove a category budget, or reset the total budget to "no limit"
    /// when `category` is `None`
    ///
    /// Returns whether anything changed.
    pub fn delete_budget(&mut self, category: Option<&str>) -> TrackerResult<bool> {
        let mut next = self.ledger.clone();
        let changed = match category {
            Some(category) => next.budgets.remove_category(category).is_some(),
            None => {
                let had_total = !next.budgets.total.is_zero();
                next.budgets.clear_total();
                had_total
            }
        };

        if changed {
            self.commit(next)?;
            info!(category = category.unwrap_or("total"), "budget deleted");
        }
        Ok(changed)
    }

    /// Total spent in a month, optionally limited to one category
    pub fn get_monthly_spending(&self, month: BudgetMonth, category: Option<&str>) -> Money {
        let category = category.map(normalize_category);
        self.ledger
            .expenses
            .iter()
            .filter(|e| e.is_in(month))
            .filter(|e| category.as_deref().map_or(true, |c| e.category == c))
            .map(|e| e.amount)
            .sum()
    }

    /// Spending per category, across all time or within one month
    ///
    /// Only categories with at least one matching expense appear.
    pub fn get_spending_by_category(&self, month: Option<BudgetMonth>) -> BTreeMap<String, Money> {
        let mut spending: BTreeMap<String, Money> = BTreeMap::new();
        for expense in self
            .ledger
            .expenses
            .iter()
            .filter(|e| month.map_or(true, |m| e.is_in(m)))
        {
            *spending.entry(expense.category.clone()).or_default() += expense.amount;
        }
        spending
    }

    /// Spending per month with at least one expense, in chronological order
    pub fn get_monthly_totals(&self) -> BTreeMap<BudgetMonth, Money> {
        let mut totals: BTreeMap<BudgetMonth, Money> = BTreeMap::new();
        for expense in &self.ledger.expenses {
            *totals.entry(expense.month()).or_default() += expense.amount;
        }
        totals
    }

    /// Spending and budget status for a month (default: the current month)
    pub fn get_expense_summary(&self, month: Option<BudgetMonth>) -> ExpenseSummary {
        let month = month.unwrap_or_else(BudgetMonth::current);
        let budgets = &self.ledger.budgets;

        let mut summary =
            ExpenseSummary::new(month, self.get_monthly_spending(month, None), budgets.total);
        for (category, spent) in self.get_spending_by_category(Some(month)) {
            let budget = budgets.category_budget(&category);
            summary.add_category(category, spent, budget);
        }
        summary
    }
}
