//! Guided prompts for entering a record interactively.

use chrono::Local;
use dialoguer::theme::ColorfulTheme;

use crate::cli::core::CommandError;
use crate::cli::io as cli_io;
use crate::ledger::RecordKind;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field values collected for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub occurred_on: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl RecordDraft {
    /// Builds a draft from positional command arguments:
    /// `<date> <amount> <category> [description...]`.
    pub fn from_args(args: &[&str]) -> Option<Self> {
        match args {
            [date, amount, category, description @ ..] => Some(Self {
                occurred_on: date.to_string(),
                amount: amount.to_string(),
                category: category.to_string(),
                description: description.join(" "),
            }),
            _ => None,
        }
    }
}

pub struct RecordWizard {
    kind: RecordKind,
}

impl RecordWizard {
    pub fn new(kind: RecordKind) -> Self {
        Self { kind }
    }

    pub fn run(&self, theme: &ColorfulTheme) -> Result<RecordDraft, CommandError> {
        cli_io::print_info(format!("New {} (dates default to today).", self.kind.as_str()));
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
        let occurred_on = cli_io::prompt_text(theme, "Date", Some(today), false)?;
        let amount = cli_io::prompt_amount(theme, "Amount")?.to_string();
        let category = cli_io::prompt_text(theme, "Category", None, false)?;
        let description = cli_io::prompt_text(theme, "Description", None, true)?;
        Ok(RecordDraft {
            occurred_on,
            amount,
            category,
            description,
        })
    }
}
