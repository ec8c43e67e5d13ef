mod common;

use budget_tracker::{
    errors::LedgerError,
    ledger::{Filter, FilterKind, Ledger, Notice, Outcome, RecordKind, DEFAULT_WARN_THRESHOLD},
};
use common::three_record_ledger;

#[test]
fn appended_income_is_listed_with_plus_sign() {
    let mut ledger = Ledger::new();
    ledger
        .append_income("2024-02-01", "1200.5", "  Salary ", "February")
        .unwrap();

    let records = ledger.list_all().done().expect("listing");
    assert_eq!(records.len(), 1);
    let line = records[0].to_string();
    assert_eq!(line, "[2024-02-01] +$1200.50 | salary | February");
}

#[test]
fn expense_warning_only_above_default_threshold() {
    let mut ledger = Ledger::new();
    let large = ledger
        .append_expense_default("2024-01-01", 1000.01, "rent", "")
        .unwrap();
    let at_limit = ledger
        .append_expense_default("2024-01-02", 1000, "rent", "")
        .unwrap();
    let small = ledger
        .append_expense_default("2024-01-03", 3, "coffee", "")
        .unwrap();

    assert_eq!(
        large.warning,
        Some(Notice::LargeExpense {
            amount: 1000.01,
            threshold: DEFAULT_WARN_THRESHOLD
        })
    );
    assert!(at_limit.warning.is_none());
    assert!(small.warning.is_none());
    assert_eq!(ledger.len(), 3, "warnings never block the append");
}

#[test]
fn category_filter_ignores_case_and_stored_whitespace() {
    let mut ledger = Ledger::new();
    ledger
        .append_expense_default("2024-01-01", 12, " Food ", "lunch")
        .unwrap();

    for value in ["food", "Food", "FOOD"] {
        let matches = ledger.filter(&Filter::by_category(value)).done();
        assert_eq!(matches.map(|m| m.len()), Some(1), "value {value:?}");
    }
}

#[test]
fn month_filter_matches_date_prefix() {
    let mut ledger = Ledger::new();
    ledger
        .append_expense_default("2024-03-15", 8, "misc", "")
        .unwrap();

    assert!(ledger.filter(&Filter::by_month("2024-03")).is_done());
    assert_eq!(
        ledger.filter(&Filter::by_month("2024-04")),
        Outcome::Notice(Notice::NoneFound {
            filter: Filter::new(FilterKind::ByMonth, "2024-04")
        })
    );
}

#[test]
fn summary_totals_and_kind_agnostic_categories() {
    let ledger = three_record_ledger();
    let summary = ledger.summarize().done().expect("summary");

    assert_eq!(summary.total_income, 150.0);
    assert_eq!(summary.total_expense, 30.0);
    assert_eq!(summary.balance, 120.0);
    assert_eq!(summary.by_category.len(), 1);
    assert_eq!(summary.by_category.get("x"), Some(180.0));
}

#[test]
fn summary_categories_follow_first_occurrence() {
    let mut ledger = Ledger::new();
    ledger.append_expense_default("d", 1, "rent", "").unwrap();
    ledger.append_income("d", 2, "salary", "").unwrap();
    ledger.append_expense_default("d", 3, "food", "").unwrap();
    ledger.append_expense_default("d", 4, "rent", "").unwrap();

    let summary = ledger.summarize().done().unwrap();
    let names: Vec<_> = summary.by_category.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["rent", "salary", "food"]);
}

#[test]
fn undo_removes_only_the_tail() {
    let mut ledger = three_record_ledger();
    let before: Vec<_> = ledger.records()[..2].to_vec();

    let receipt = ledger.undo_last().done().expect("something to undo");
    assert_eq!(receipt.record.kind(), RecordKind::Expense);
    assert_eq!(receipt.record.amount(), 30.0);
    assert_eq!(
        receipt.notice(),
        Notice::Undone {
            kind: RecordKind::Expense,
            amount: 30.0
        }
    );
    assert_eq!(ledger.records(), before.as_slice());
}

#[test]
fn reads_are_idempotent() {
    let ledger = three_record_ledger();
    let filter = Filter::by_type("income");

    assert_eq!(ledger.list_all(), ledger.list_all());
    assert_eq!(ledger.filter(&filter), ledger.filter(&filter));
    assert_eq!(ledger.summarize(), ledger.summarize());
    assert_eq!(ledger.len(), 3);
}

#[test]
fn empty_ledger_reports_signals_and_stays_empty() {
    let mut ledger = Ledger::new();

    assert_eq!(ledger.list_all(), Outcome::Notice(Notice::NoTransactions));
    for filter in [
        Filter::by_type("income"),
        Filter::by_category("food"),
        Filter::by_month("2024"),
    ] {
        assert_eq!(
            ledger.filter(&filter),
            Outcome::Notice(Notice::NoneFound {
                filter: filter.clone()
            })
        );
    }
    assert_eq!(ledger.summarize(), Outcome::Notice(Notice::NothingToSummarize));
    assert_eq!(ledger.undo_last(), Outcome::Notice(Notice::NothingToUndo));
    assert!(ledger.is_empty());
}

#[test]
fn invalid_amounts_never_reach_the_ledger() {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger.append_income("2024-01-01", "abc", "pay", ""),
        Err(LedgerError::InvalidAmount("abc".into()))
    );
    assert_eq!(
        ledger.append_expense_default("2024-01-01", 0, "pay", ""),
        Err(LedgerError::NonPositiveAmount(0.0))
    );
    assert!(ledger.is_empty());
}
