//! In-memory ledger of income and expense records and the views derived from it.

pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod notice;
pub mod record;
pub mod summary;

pub use filter::{Filter, FilterKind};
pub use ledger::{large_expense_warning, AppendReceipt, Ledger, UndoReceipt, DEFAULT_WARN_THRESHOLD};
pub use notice::{Notice, Outcome};
pub use record::{
    normalize_category, parse_amount, AmountInput, Record, RecordKind, DEFAULT_CURRENCY_SYMBOL,
};
pub use summary::{CategoryTotals, Summary};
