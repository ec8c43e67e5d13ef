//! Signals returned by ledger operations in place of printed messages.

use std::fmt;

use serde::Serialize;

use super::filter::Filter;
use super::record::{RecordKind, DEFAULT_CURRENCY_SYMBOL};

/// An acknowledgment, warning, or informational signal for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Notice {
    Recorded { kind: RecordKind, amount: f64 },
    LargeExpense { amount: f64, threshold: f64 },
    NoTransactions,
    NoneFound { filter: Filter },
    NothingToSummarize,
    NothingToUndo,
    Undone { kind: RecordKind, amount: f64 },
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::LargeExpense { .. })
    }

    /// Confirms a completed mutation.
    pub fn is_acknowledgment(&self) -> bool {
        matches!(self, Notice::Recorded { .. } | Notice::Undone { .. })
    }

    /// Human-readable message using the provided currency symbol.
    pub fn message(&self, currency_symbol: &str) -> String {
        match self {
            Notice::Recorded { kind, amount } => {
                format!("{} of {currency_symbol}{amount:.2} added.", kind.label())
            }
            Notice::LargeExpense { amount, threshold } => format!(
                "Large expense of {currency_symbol}{amount:.2} exceeds {currency_symbol}{threshold:.2}."
            ),
            Notice::NoTransactions => "No transactions recorded yet.".into(),
            Notice::NoneFound { filter } => {
                format!("No transactions found for {} `{}`.", filter.kind, filter.value)
            }
            Notice::NothingToSummarize => "Nothing to summarize yet.".into(),
            Notice::NothingToUndo => "Nothing to undo.".into(),
            Notice::Undone { kind, amount } => format!(
                "Removed last transaction: {} of {currency_symbol}{amount:.2}.",
                kind.label()
            ),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// Result of a ledger view: either the requested value or a signal explaining its absence.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    Notice(Notice),
}

impl<T> Outcome<T> {
    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Notice(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Outcome::Done(_) => None,
            Outcome::Notice(notice) => Some(notice),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_large_expenses_are_warnings() {
        let large = Notice::LargeExpense {
            amount: 1500.0,
            threshold: 1000.0,
        };
        let recorded = Notice::Recorded {
            kind: RecordKind::Expense,
            amount: 1500.0,
        };
        assert!(large.is_warning());
        assert!(!large.is_acknowledgment());
        assert!(!recorded.is_warning());
        assert!(recorded.is_acknowledgment());
        assert!(!Notice::NothingToUndo.is_warning());
        assert!(!Notice::NothingToUndo.is_acknowledgment());
    }
}
