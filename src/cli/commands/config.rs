use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::parse_amount;

const USAGE: &str = "config [show|threshold <amount>|symbol <text>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View or change the warning threshold and currency symbol",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show(context),
        [action] if action.eq_ignore_ascii_case("show") => show(context),
        [key, value] => set(context, key, value),
        _ => Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    output::plain(format!("  file           : {}", context.config_manager.path().display()));
    output::plain(format!("  currency symbol: {}", context.config.currency_symbol));
    output::plain(format!(
        "  warn threshold : {}",
        context.money(context.config.warn_threshold)
    ));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    match key.to_ascii_lowercase().as_str() {
        "threshold" => {
            updated.warn_threshold = parse_amount(value).map_err(|err| {
                CommandError::InvalidArguments(format!("invalid threshold: {err}"))
            })?;
        }
        "symbol" => {
            let symbol = value.trim();
            if symbol.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "currency symbol cannot be empty".into(),
                ));
            }
            updated.currency_symbol = symbol.to_string();
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{other}` (expected threshold or symbol)"
            )))
        }
    }

    context.config_manager.save(&updated)?;
    context.config = updated;
    tracing::info!(path = %context.config_manager.path().display(), "configuration saved");
    io::print_success(format!("Updated `{key}`."));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::tests::script_context;
    use crate::config::ConfigManager;

    #[test]
    fn threshold_change_is_persisted() {
        let (mut context, dir) = script_context();
        cmd_config(&mut context, &["threshold", "250"]).unwrap();
        assert_eq!(context.config.warn_threshold, 250.0);

        let reloaded = ConfigManager::with_base_dir(dir.path()).load().unwrap();
        assert_eq!(reloaded.warn_threshold, 250.0);
    }

    #[test]
    fn invalid_threshold_keeps_previous_value() {
        let (mut context, _dir) = script_context();
        let before = context.config.clone();
        assert!(cmd_config(&mut context, &["threshold", "-1"]).is_err());
        assert!(cmd_config(&mut context, &["colour", "red"]).is_err());
        assert_eq!(context.config, before);
    }
}
