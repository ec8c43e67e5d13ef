use tracing::{debug, info, warn};

use crate::errors::LedgerError;

use super::{
    filter::Filter,
    notice::{Notice, Outcome},
    record::{AmountInput, Record, RecordKind},
    summary::{CategorySign, Summary},
};

/// Expense amount above which an append is flagged.
pub const DEFAULT_WARN_THRESHOLD: f64 = 1000.0;

/// Acknowledgment for a successful append.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendReceipt {
    pub kind: RecordKind,
    pub amount: f64,
    pub warning: Option<Notice>,
}

impl AppendReceipt {
    pub fn acknowledgment(&self) -> Notice {
        Notice::Recorded {
            kind: self.kind,
            amount: self.amount,
        }
    }

    /// Acknowledgment followed by the warning, if any.
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = vec![self.acknowledgment()];
        notices.extend(self.warning.clone());
        notices
    }
}

/// The record removed by [`Ledger::undo_last`].
#[derive(Debug, Clone, PartialEq)]
pub struct UndoReceipt {
    pub record: Record,
}

impl UndoReceipt {
    pub fn notice(&self) -> Notice {
        Notice::Undone {
            kind: self.record.kind(),
            amount: self.record.amount(),
        }
    }
}

/// Returns a warning when an expense is strictly above `threshold`.
pub fn large_expense_warning(record: &Record, threshold: f64) -> Option<Notice> {
    if record.kind() == RecordKind::Expense && record.amount() > threshold {
        Some(Notice::LargeExpense {
            amount: record.amount(),
            threshold,
        })
    } else {
        None
    }
}

/// Ordered, in-memory collection of income and expense records.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_income(
        &mut self,
        occurred_on: impl Into<String>,
        amount: impl AmountInput,
        category: &str,
        description: impl Into<String>,
    ) -> Result<AppendReceipt, LedgerError> {
        let record = Record::new(
            occurred_on,
            amount,
            category,
            description,
            RecordKind::Income,
        )?;
        Ok(self.push(record, None))
    }

    pub fn append_expense(
        &mut self,
        occurred_on: impl Into<String>,
        amount: impl AmountInput,
        category: &str,
        description: impl Into<String>,
        warn_threshold: f64,
    ) -> Result<AppendReceipt, LedgerError> {
        let record = Record::new(
            occurred_on,
            amount,
            category,
            description,
            RecordKind::Expense,
        )?;
        let warning = large_expense_warning(&record, warn_threshold);
        if warning.is_some() {
            warn!(
                amount = record.amount(),
                threshold = warn_threshold,
                "large expense recorded"
            );
        }
        Ok(self.push(record, warning))
    }

    /// [`append_expense`](Self::append_expense) with [`DEFAULT_WARN_THRESHOLD`].
    pub fn append_expense_default(
        &mut self,
        occurred_on: impl Into<String>,
        amount: impl AmountInput,
        category: &str,
        description: impl Into<String>,
    ) -> Result<AppendReceipt, LedgerError> {
        self.append_expense(
            occurred_on,
            amount,
            category,
            description,
            DEFAULT_WARN_THRESHOLD,
        )
    }

    fn push(&mut self, record: Record, warning: Option<Notice>) -> AppendReceipt {
        debug!(
            kind = %record.kind(),
            amount = record.amount(),
            category = record.category(),
            "record appended"
        );
        let receipt = AppendReceipt {
            kind: record.kind(),
            amount: record.amount(),
            warning,
        };
        self.records.push(record);
        receipt
    }

    pub fn list_all(&self) -> Outcome<Vec<&Record>> {
        if self.records.is_empty() {
            return Outcome::Notice(Notice::NoTransactions);
        }
        Outcome::Done(self.records.iter().collect())
    }

    pub fn filter(&self, filter: &Filter) -> Outcome<Vec<&Record>> {
        let matches: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .collect();
        if matches.is_empty() {
            Outcome::Notice(Notice::NoneFound {
                filter: filter.clone(),
            })
        } else {
            Outcome::Done(matches)
        }
    }

    /// Totals plus per-category sums that add income and expense amounts together.
    pub fn summarize(&self) -> Outcome<Summary> {
        self.summary_with(CategorySign::Unsigned)
    }

    /// Like [`summarize`](Self::summarize) but expenses reduce their category total.
    pub fn summarize_signed(&self) -> Outcome<Summary> {
        self.summary_with(CategorySign::Signed)
    }

    fn summary_with(&self, sign: CategorySign) -> Outcome<Summary> {
        if self.records.is_empty() {
            return Outcome::Notice(Notice::NothingToSummarize);
        }
        Outcome::Done(Summary::from_records(&self.records, sign))
    }

    /// Removes the most recently appended record. This is the only deletion path.
    pub fn undo_last(&mut self) -> Outcome<UndoReceipt> {
        match self.records.pop() {
            Some(record) => {
                info!(kind = %record.kind(), amount = record.amount(), "last record removed");
                Outcome::Done(UndoReceipt { record })
            }
            None => Outcome::Notice(Notice::NothingToUndo),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
