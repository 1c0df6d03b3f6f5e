//! Report formatting utilities for terminal output
//!
//! Budget overview tables and the bar charts standing in for the
//! category pie chart and the monthly trend line.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetAlert, ExpenseSummary, Money};
use crate::reports::{CategoryBreakdown, SpendingTrend};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format a budget overview: a Total row followed by one row per category
///
/// Remaining is shown as zero when no limit is in effect.
pub fn format_budget_overview(summary: &ExpenseSummary, symbol: &str) -> String {
    let remaining = |r: Option<Money>| r.unwrap_or_default().format_with_symbol(symbol);

    let mut rows = vec![BudgetRow {
        category: "Total".to_string(),
        budget: summary.total_budget.format_with_symbol(symbol),
        spent: summary.total_spent.format_with_symbol(symbol),
        remaining: remaining(summary.budget_remaining),
    }];

    rows.extend(summary.categories.iter().map(|(category, status)| BudgetRow {
        category: category.clone(),
        budget: status.budget.format_with_symbol(symbol),
        spent: status.spent.format_with_symbol(symbol),
        remaining: remaining(status.remaining),
    }));

    let mut output = format!("Budget Overview: {}\n", summary.month.friendly());
    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');

    let overspent: Vec<_> = summary
        .categories
        .iter()
        .filter(|(_, status)| status.is_overspent())
        .map(|(category, _)| category.as_str())
        .collect();
    if summary.is_over_budget() {
        output.push_str("⚠ Total monthly budget exceeded\n");
    }
    if !overspent.is_empty() {
        output.push_str(&format!("⚠ Over budget: {}\n", overspent.join(", ")));
    }

    output
}

/// Format the category breakdown as a horizontal bar chart
pub fn format_category_chart(report: &CategoryBreakdown, symbol: &str, width: usize) -> String {
    let title = match report.month {
        Some(month) => format!("Spending by Category: {}", month.friendly()),
        None => "Spending by Category: all time".to_string(),
    };

    if report.is_empty() {
        return format!("{}\n  No expenses recorded.\n", title);
    }

    let label_width = report
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0)
        .max(8);
    let max = report.largest().map_or(0.0, |c| c.spent.units());

    let mut output = format!("{}\n{}\n", title, separator(label_width + width + 24));
    for share in &report.categories {
        output.push_str(&format!(
            "{} {} {:>12} {:>6}\n",
            left_align(&share.category, label_width),
            format_bar(share.spent.units(), max, width),
            share.spent.format_with_symbol(symbol),
            format_percentage(share.percentage),
        ));
    }
    output.push_str(&format!(
        "{}\n{} {:>w$}\n",
        separator(label_width + width + 24),
        left_align("Total", label_width),
        report.total.format_with_symbol(symbol),
        w = width + 13,
    ));
    output
}

/// Format the monthly spending trend as a horizontal bar chart
pub fn format_trend_chart(trend: &SpendingTrend, symbol: &str, width: usize) -> String {
    let title = "Monthly Spending Trend";
    if trend.is_empty() {
        return format!("{}\n  No expenses recorded.\n", title);
    }

    let max = trend.peak().map_or(0.0, |m| m.total.units());
    let mut output = format!("{}\n{}\n", title, separator(width + 22));
    for point in &trend.months {
        output.push_str(&format!(
            "{} {} {:>12}\n",
            point.month,
            format_bar(point.total.units(), max, width),
            point.total.format_with_symbol(symbol),
        ));
    }
    output.push_str(&format!(
        "{}\nMonthly average: {}\n",
        separator(width + 22),
        trend.average().format_with_symbol(symbol)
    ));
    output
}

/// Format budget alerts, one per line
pub fn format_alerts(alerts: &[BudgetAlert]) -> String {
    alerts
        .iter()
        .map(|alert| format!("{}\n", alert))
        .collect()
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
