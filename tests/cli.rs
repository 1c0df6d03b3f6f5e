//! End-to-end tests for the expense-tracker binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path());
    cmd.env_remove("EXPENSE_TRACKER_LOG");
    cmd
}

fn add_expense(dir: &TempDir, amount: &str, category: &str, description: &str, date: &str) {
    tracker(dir)
        .args(["expense", "add", amount, category, description, "--date", date])
        .assert()
        .success();
}

#[test]
fn test_init_creates_files() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn test_add_prints_budget_alert() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "100", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for food set to $100.00."));

    add_expense(&dir, "60", "food", "Groceries", "2024-05-02");

    tracker(&dir)
        .args(["expense", "add", "25", "FOOD", "Dinner", "--date", "2024-05-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: $25.00 for food (Dinner)"))
        .stdout(predicate::str::contains("WARNING: 80% used for food"));

    tracker(&dir)
        .args(["exp", "add", "20", "food", "Snacks", "--date", "2024-05-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT: exceeded budget for food"));
}

#[test]
fn test_expenses_persist_across_invocations() {
    let dir = TempDir::new().unwrap();

    add_expense(&dir, "12.50", "Food", "Lunch", "2024-05-01");
    add_expense(&dir, "30", "Transport", "Train pass", "2024-05-02");

    tracker(&dir)
        .args(["expense", "list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Train pass"))
        .stdout(predicate::str::contains("$12.50"));

    tracker(&dir)
        .args(["expense", "list", "--category", "transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Train pass"))
        .stdout(predicate::str::contains("Lunch").not());

    tracker(&dir)
        .args(["expense", "delete", "2024-05-01", "12.50", "food", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 expense."));

    tracker(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch").not());
}

#[test]
fn test_summary_json() {
    let dir = TempDir::new().unwrap();

    tracker(&dir).args(["budget", "set", "500"]).assert().success();
    tracker(&dir)
        .args(["budget", "set", "100", "-c", "food"])
        .assert()
        .success();
    add_expense(&dir, "40", "food", "Groceries", "2024-05-02");
    add_expense(&dir, "10", "fun", "Cinema", "2024-04-20");

    let output = tracker(&dir)
        .args(["report", "summary", "--month", "2024-05", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["month"], "2024-05");
    assert_eq!(summary["total_spent"], 40.0);
    assert_eq!(summary["total_budget"], 500.0);
    assert_eq!(summary["budget_remaining"], 460.0);
    assert_eq!(summary["categories"]["food"]["remaining"], 60.0);
    assert!(summary["categories"].get("fun").is_none());
}

#[test]
fn test_budget_overview() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "50", "--category", "food"])
        .assert()
        .success();
    add_expense(&dir, "75", "food", "Party", "2024-05-10");

    tracker(&dir)
        .args(["budget", "overview", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Overview: May 2024"))
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("$75.00"));
}

#[test]
fn test_invalid_amount_rejected() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["expense", "add", "twelve", "food", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    tracker(&dir)
        .args(["expense", "add", "0", "food", "Lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn test_malformed_ledger_fails() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("expenses.json"), "{ not json").unwrap();

    tracker(&dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn test_trend_report() {
    let dir = TempDir::new().unwrap();

    add_expense(&dir, "10", "food", "A", "2024-04-02");
    add_expense(&dir, "30", "food", "B", "2024-05-02");

    tracker(&dir)
        .args(["report", "trend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04"))
        .stdout(predicate::str::contains("$30.00"));
}
