//! Shell context, dispatch, and error reporting shared by every command.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::{CliError, ConfigError, LedgerError},
    ledger::{Ledger, Notice, Record},
};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Runtime state for one shell session: the ledger, preferences, and command table.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let config = load_or_default(&config_manager);

        Ok(Self {
            mode,
            registry,
            ledger: Ledger::new(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn prompt(&self) -> String {
        format!("budget [{}]> ", self.ledger.len())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(exit_confirmed(cli_io::confirm_action(
            &self.theme,
            "Exit Budget Tracker?",
            false,
        )))
    }

    /// Reports a failed command; only errors the shell cannot continue past are returned.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }

    pub(crate) fn print_notice(&self, notice: &Notice) {
        cli_io::print_notice(notice, &self.config.currency_symbol);
    }

    pub(crate) fn print_records(&self, records: &[&Record]) {
        for record in records {
            output::plain(record.render(&self.config.currency_symbol));
        }
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        output::money(&self.config.currency_symbol, amount)
    }
}

/// A prompt that cannot be shown counts as confirmation.
fn exit_confirmed(answer: Result<bool, CommandError>) -> bool {
    answer.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "exit confirmation failed; exiting");
        true
    })
}

/// A config file that cannot be read is left untouched and the session runs on defaults.
fn load_or_default(manager: &ConfigManager) -> Config {
    match manager.load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %manager.path().display(), error = %err, "config unreadable");
            output::warning(format!(
                "Could not read {} ({err}); using defaults.",
                manager.path().display()
            ));
            Config::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Script-mode context whose config lives in a throwaway directory.
    pub(crate) fn script_context() -> (ShellContext, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path());
        let context =
            ShellContext::with_config_manager(CliMode::Script, manager).expect("context");
        (context, dir)
    }

    #[test]
    fn unknown_commands_do_not_stop_the_shell() {
        let (mut context, _dir) = script_context();
        let control = context.dispatch("lst", "lst", &[]).unwrap();
        assert_eq!(control, LoopControl::Continue);
    }

    #[test]
    fn failed_exit_prompt_exits() {
        let failure = io::Error::new(io::ErrorKind::Other, "not a terminal");
        assert!(exit_confirmed(Err(CommandError::Io(failure))));
        assert!(!exit_confirmed(Ok(false)));
    }

    #[test]
    fn invalid_config_file_yields_default_preferences() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path());
        std::fs::write(manager.path(), r#"{"warn_threshold": -5}"#).expect("write config");

        let context =
            ShellContext::with_config_manager(CliMode::Script, manager).expect("context");
        assert_eq!(context.config, Config::default());
        assert!(context.config_manager.path().exists());
    }

    #[test]
    fn prompt_shows_record_count() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.prompt(), "budget [0]> ");
        context
            .ledger
            .append_income("2024-01-01", 10, "gift", "")
            .unwrap();
        assert_eq!(context.prompt(), "budget [1]> ");
    }
}
