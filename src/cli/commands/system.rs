use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("menu", "Pick an action from a numbered menu", "menu", cmd_menu),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

const MENU_ITEMS: [(&str, &str); 7] = [
    ("Add income", "income"),
    ("Add expense", "expense"),
    ("View all transactions", "list"),
    ("Filter transactions", "filter"),
    ("View summary", "summary"),
    ("Undo last transaction", "undo"),
    ("Exit", "exit"),
];

const FILTER_CHOICES: [(&str, &str); 3] = [
    ("By type (income/expense)", "type"),
    ("By category", "category"),
    ("By month (YYYY-MM)", "month"),
];

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode() != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "menu is only available in interactive mode".into(),
        ));
    }

    let labels: Vec<&str> = MENU_ITEMS.iter().map(|(label, _)| *label).collect();
    let choice = io::select(&context.theme, "What would you like to do?", &labels)?;
    let command = MENU_ITEMS[choice].1;

    if command == "filter" {
        let labels: Vec<&str> = FILTER_CHOICES.iter().map(|(label, _)| *label).collect();
        let kind = FILTER_CHOICES[io::select(&context.theme, "Filter", &labels)?].1;
        let value = io::prompt_text(&context.theme, "Value", None, false)?;
        return run(context, command, &[kind, value.as_str()]);
    }
    run(context, command, &[])
}

fn run(context: &mut ShellContext, command: &str, args: &[&str]) -> CommandResult {
    match context.registry.handler(command) {
        Some(handler) => handler(context, args),
        None => Err(CommandError::InvalidArguments(format!(
            "unknown command `{command}`"
        ))),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }
    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("{} {}", build_info::APP_NAME, meta.version));
    output::plain(format!("  Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::plain(format!("  Built at   : {}", meta.timestamp));
    output::plain(format!("  Target     : {}", meta.target));
    output::plain(format!("  Profile    : {}", meta.profile));
    output::plain(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
