use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{RecordDraft, RecordWizard};
use crate::cli::registry::CommandEntry;
use crate::ledger::{Outcome, RecordKind};

const INCOME_USAGE: &str = "income <date> <amount> <category> [description...]";
const EXPENSE_USAGE: &str = "expense <date> <amount> <category> [description...]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("income", "Record money coming in", INCOME_USAGE, cmd_income),
        CommandEntry::new(
            "expense",
            "Record money going out (warns above the configured threshold)",
            EXPENSE_USAGE,
            cmd_expense,
        ),
        CommandEntry::new("undo", "Remove the most recently added record", "undo", cmd_undo),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = collect_draft(context, args, RecordKind::Income, INCOME_USAGE)?;
    let receipt = context.ledger.append_income(
        draft.occurred_on,
        draft.amount.as_str(),
        &draft.category,
        draft.description,
    )?;
    for notice in receipt.notices() {
        context.print_notice(&notice);
    }
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = collect_draft(context, args, RecordKind::Expense, EXPENSE_USAGE)?;
    let threshold = context.config.warn_threshold;
    let receipt = context.ledger.append_expense(
        draft.occurred_on,
        draft.amount.as_str(),
        &draft.category,
        draft.description,
        threshold,
    )?;
    for notice in receipt.notices() {
        context.print_notice(&notice);
    }
    Ok(())
}

fn collect_draft(
    context: &ShellContext,
    args: &[&str],
    kind: RecordKind,
    usage: &str,
) -> Result<RecordDraft, CommandError> {
    if args.is_empty() && context.mode() == CliMode::Interactive {
        return RecordWizard::new(kind).run(&context.theme);
    }
    RecordDraft::from_args(args)
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))
}

fn cmd_undo(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: undo (only the most recent record can be removed)".into(),
        ));
    }
    match context.ledger.undo_last() {
        Outcome::Done(receipt) => context.print_notice(&receipt.notice()),
        Outcome::Notice(notice) => context.print_notice(&notice),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::tests::script_context;

    #[test]
    fn expense_uses_configured_threshold() {
        let (mut context, _dir) = script_context();
        context.config.warn_threshold = 10.0;
        cmd_expense(&mut context, &["2024-01-01", "11", "Fun"]).unwrap();
        let record = context.ledger.last().unwrap();
        assert_eq!(record.kind(), RecordKind::Expense);
        assert_eq!(record.category(), "fun");
        assert_eq!(record.description(), "");
    }

    #[test]
    fn missing_fields_in_script_mode_show_usage() {
        let (mut context, _dir) = script_context();
        let err = cmd_income(&mut context, &[]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(ref msg) if msg.contains("usage")));
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn undo_on_empty_ledger_is_not_an_error() {
        let (mut context, _dir) = script_context();
        cmd_undo(&mut context, &[]).unwrap();
        assert!(cmd_undo(&mut context, &["3"]).is_err());
    }
}
