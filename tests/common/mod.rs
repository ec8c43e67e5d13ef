#![allow(dead_code)]

use assert_cmd::Command;
use budget_tracker::ledger::Ledger;
use tempfile::TempDir;

/// Income(100), Income(50), Expense(30) all filed under "x".
pub fn three_record_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.append_income("2024-03-01", 100, "x", "first").unwrap();
    ledger.append_income("2024-03-05", 50, "X ", "second").unwrap();
    ledger
        .append_expense_default("2024-04-02", 30, " x", "third")
        .unwrap();
    ledger
}

/// Script-mode binary invocation isolated in its own config directory.
pub fn script_cmd() -> (Command, TempDir) {
    let home = TempDir::new().expect("create temp home");
    let mut cmd = Command::cargo_bin("budget_tracker").expect("binary builds");
    cmd.env("BUDGET_TRACKER_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    (cmd, home)
}
