use thiserror::Error;

/// Failures raised while constructing or appending ledger records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Invalid amount `{0}`: expected a number")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),
}

/// Errors produced while loading or saving user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Fatal errors that stop the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}
