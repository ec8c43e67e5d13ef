use crate::cli::commands::take_json_flag;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::{Filter, FilterKind, Outcome, Record, Summary};

const FILTER_USAGE: &str = "filter <type|category|month> <value> [--json]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "Show every record in the order it was added",
            "list [--json]",
            cmd_list,
        ),
        CommandEntry::new(
            "filter",
            "Show records matching a type, category, or month prefix",
            FILTER_USAGE,
            cmd_filter,
        ),
        CommandEntry::new(
            "summary",
            "Show income, expense, balance, and per-category totals",
            "summary [--signed] [--json]",
            cmd_summary,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (json, rest) = take_json_flag(args);
    if !rest.is_empty() {
        return Err(CommandError::InvalidArguments("usage: list [--json]".into()));
    }
    let outcome = context.ledger.list_all();
    print_records(context, outcome, json)
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (json, rest) = take_json_flag(args);
    let Some((kind, value)) = rest.split_first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {FILTER_USAGE}")));
    };
    if value.is_empty() {
        return Err(CommandError::InvalidArguments(format!("usage: {FILTER_USAGE}")));
    }
    let kind: FilterKind = kind.parse().map_err(CommandError::InvalidArguments)?;
    let filter = Filter::new(kind, value.join(" "));
    let outcome = context.ledger.filter(&filter);
    print_records(context, outcome, json)
}

fn print_records(
    context: &ShellContext,
    outcome: Outcome<Vec<&Record>>,
    json: bool,
) -> CommandResult {
    match (outcome, json) {
        (Outcome::Done(records), true) => {
            output::plain(serde_json::to_string_pretty(&records)?);
        }
        (Outcome::Done(records), false) => context.print_records(&records),
        (Outcome::Notice(notice), true) => {
            output::plain(serde_json::to_string_pretty(&notice)?);
        }
        (Outcome::Notice(notice), false) => context.print_notice(&notice),
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (json, rest) = take_json_flag(args);
    let signed = match rest.as_slice() {
        [] => false,
        [flag] if flag.eq_ignore_ascii_case("--signed") => true,
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: summary [--signed] [--json]".into(),
            ))
        }
    };

    let outcome = if signed {
        context.ledger.summarize_signed()
    } else {
        context.ledger.summarize()
    };

    match (outcome, json) {
        (Outcome::Done(summary), true) => {
            output::plain(serde_json::to_string_pretty(&summary)?);
        }
        (Outcome::Done(summary), false) => print_summary(context, &summary),
        (Outcome::Notice(notice), true) => {
            output::plain(serde_json::to_string_pretty(&notice)?);
        }
        (Outcome::Notice(notice), false) => context.print_notice(&notice),
    }
    Ok(())
}

fn print_summary(context: &ShellContext, summary: &Summary) {
    output::section("Summary");
    output::plain(format!("Total income:   {}", context.money(summary.total_income)));
    output::plain(format!("Total expenses: {}", context.money(summary.total_expense)));
    output::plain(format!("Balance:        {}", context.money(summary.balance)));
    output::plain("By category:");
    for (category, total) in summary.by_category.iter() {
        output::plain(format!("  {category}: {}", context.money(total)));
    }
}
