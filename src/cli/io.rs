use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::ledger::{parse_amount, Notice};

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prints a ledger signal with the style matching its meaning.
pub fn print_notice(notice: &Notice, currency_symbol: &str) {
    let message = notice.message(currency_symbol);
    if notice.is_warning() {
        output::warning(message);
    } else if notice.is_acknowledgment() {
        output::success(message);
    } else {
        output::info(message);
    }
}

pub fn confirm_action(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompts for free-form text; `default` is offered and accepted on empty input.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Option<String>,
    allow_empty: bool,
) -> Result<String, CommandError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(allow_empty);
    if let Some(value) = default {
        input = input.default(value);
    }
    input.interact_text().map_err(CommandError::from)
}

/// Keeps asking until the user enters a positive number.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CommandError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_amount(input.as_str())
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;
    Ok(parse_amount(raw.as_str())?)
}

pub fn select(theme: &ColorfulTheme, prompt: &str, items: &[&str]) -> Result<usize, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CommandError::from)
}
