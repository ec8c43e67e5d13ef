use std::{fmt, str::FromStr};

use serde::Serialize;

use super::record::Record;

/// Predicate families supported by [`Ledger::filter`](super::Ledger::filter).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    ByType,
    ByCategory,
    ByMonth,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::ByType => "type",
            FilterKind::ByCategory => "category",
            FilterKind::ByMonth => "month",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "type" => Ok(FilterKind::ByType),
            "category" => Ok(FilterKind::ByCategory),
            "month" => Ok(FilterKind::ByMonth),
            other => Err(format!(
                "unknown filter `{other}` (expected type, category, or month)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Filter {
    pub kind: FilterKind,
    pub value: String,
}

impl Filter {
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn by_type(value: impl Into<String>) -> Self {
        Self::new(FilterKind::ByType, value)
    }

    pub fn by_category(value: impl Into<String>) -> Self {
        Self::new(FilterKind::ByCategory, value)
    }

    pub fn by_month(value: impl Into<String>) -> Self {
        Self::new(FilterKind::ByMonth, value)
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self.kind {
            // Case-sensitive: "Income" does not match.
            FilterKind::ByType => record.kind().as_str() == self.value,
            // Only the stored side is trimmed.
            FilterKind::ByCategory => record.category() == self.value.to_lowercase(),
            FilterKind::ByMonth => record.occurred_on().starts_with(self.value.as_str()),
        }
    }
}
