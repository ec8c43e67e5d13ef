use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Currency symbol used when a record is rendered without explicit preferences.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Direction of a ledger record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Lowercase name used by type filters and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            RecordKind::Income => '+',
            RecordKind::Expense => '-',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw amount values accepted by record construction.
///
/// Numbers are taken as-is; text is trimmed and parsed as a decimal.
pub trait AmountInput {
    fn to_amount(&self) -> Result<f64, LedgerError>;
}

impl AmountInput for f64 {
    fn to_amount(&self) -> Result<f64, LedgerError> {
        if self.is_finite() {
            Ok(*self)
        } else {
            Err(LedgerError::InvalidAmount(self.to_string()))
        }
    }
}

impl AmountInput for f32 {
    fn to_amount(&self) -> Result<f64, LedgerError> {
        f64::from(*self).to_amount()
    }
}

macro_rules! integer_amount {
    ($($ty:ty),*) => {
        $(
            impl AmountInput for $ty {
                fn to_amount(&self) -> Result<f64, LedgerError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

integer_amount!(i32, i64, u32, u64, usize);

impl AmountInput for str {
    fn to_amount(&self) -> Result<f64, LedgerError> {
        let trimmed = self.trim();
        trimmed
            .parse::<f64>()
            .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))
            .and_then(|value| {
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(LedgerError::InvalidAmount(trimmed.to_string()))
                }
            })
    }
}

impl AmountInput for String {
    fn to_amount(&self) -> Result<f64, LedgerError> {
        self.as_str().to_amount()
    }
}

impl<T: AmountInput + ?Sized> AmountInput for &T {
    fn to_amount(&self) -> Result<f64, LedgerError> {
        (**self).to_amount()
    }
}

/// Parses and validates an amount without building a record.
///
/// Used by prompts that need to retry until the user supplies something usable.
pub fn parse_amount(input: impl AmountInput) -> Result<f64, LedgerError> {
    let amount = input.to_amount()?;
    if amount <= 0.0 {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Lowercases and trims a category so it can serve as a grouping key.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A single income or expense event. Fields are fixed at construction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    occurred_on: String,
    amount: f64,
    category: String,
    description: String,
    kind: RecordKind,
}

impl Record {
    pub fn new(
        occurred_on: impl Into<String>,
        amount: impl AmountInput,
        category: &str,
        description: impl Into<String>,
        kind: RecordKind,
    ) -> Result<Self, LedgerError> {
        Ok(Self {
            occurred_on: occurred_on.into(),
            amount: parse_amount(amount)?,
            category: normalize_category(category),
            description: description.into(),
            kind,
        })
    }

    pub fn occurred_on(&self) -> &str {
        &self.occurred_on
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    /// Renders `[date] +$12.50 | category | description` with the given symbol.
    pub fn render(&self, currency_symbol: &str) -> String {
        format!(
            "[{}] {}{}{:.2} | {} | {}",
            self.occurred_on,
            self.kind.sign(),
            currency_symbol,
            self.amount,
            self.category,
            self.description
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY_SYMBOL))
    }
}
