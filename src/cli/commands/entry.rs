use crate::cli::commands::{expect_args, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::cli::view::format_amount;
use crate::domain::EntryKind;
use crate::errors::LedgerError;

const ADD_USAGE: &str = "add <income|expense> <category> <amount>";
const SAVE_USAGE: &str = "save <income|expense> <category> <amount>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("add", "Record a new income or expense", ADD_USAGE, cmd_add),
        CommandDefinition::new(
            "edit",
            "Start editing a row of the displayed month",
            "edit <row>",
            cmd_edit,
        ),
        CommandDefinition::new("save", "Commit the edit in progress", SAVE_USAGE, cmd_save),
        CommandDefinition::new("cancel", "Discard the edit in progress", "cancel", cmd_cancel),
        CommandDefinition::new(
            "delete",
            "Delete a row of the displayed month",
            "delete <row>",
            cmd_delete,
        ),
    ]
}

struct EntryInput<'a> {
    kind: EntryKind,
    category: &'a str,
    amount: f64,
}

fn parse_entry_args<'a>(args: &[&'a str], usage: &str) -> Result<EntryInput<'a>, CommandError> {
    expect_args(args, 3, 3, usage)?;
    let kind = args[0]
        .parse::<EntryKind>()
        .map_err(CommandError::InvalidArguments)?;
    let amount = args[2].trim().parse::<f64>().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a number", args[2]))
    })?;
    Ok(EntryInput {
        kind,
        category: args[1],
        amount,
    })
}

fn money(context: &ShellContext, amount: f64) -> String {
    format!("{}{}", context.config.currency_symbol, format_amount(amount))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = parse_entry_args(args, ADD_USAGE)?;
    context
        .controller
        .add_or_update(input.category, input.amount, input.kind, None)?;
    output::success(format!(
        "Added {} {} {}.",
        input.kind,
        input.category.trim(),
        money(context, input.amount)
    ));
    context.refresh_view();
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, 1, "edit <row>")?;
    let id = context.resolve_row(args[0])?;
    let entry = context.controller.begin_edit_entry(id)?;
    output::info(format!(
        "Editing row {}: {} {} {}.",
        args[0].trim(),
        entry.kind,
        entry.category,
        money(context, entry.amount)
    ));
    output::info(format!("Use `{SAVE_USAGE}` to commit or `cancel` to discard."));
    Ok(())
}

fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = parse_entry_args(args, SAVE_USAGE)?;
    let Some(index) = context.controller.editing_index() else {
        return Err(CommandError::InvalidArguments(
            "no edit in progress; start one with `edit <row>`".into(),
        ));
    };
    context
        .controller
        .add_or_update(input.category, input.amount, input.kind, Some(index))?;
    output::success("Entry updated.");
    context.refresh_view();
    Ok(())
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.controller.editing_index().is_some() {
        context.controller.cancel_edit();
        output::info("Edit discarded.");
    } else {
        output::info("No edit in progress.");
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, 1, "delete <row>")?;
    let id = context.resolve_row(args[0])?;
    let index = context
        .controller
        .index_of(id)
        .ok_or(LedgerError::EntryNotFound(id))?;
    let (category, amount) = {
        let entry = &context.controller.entries()[index];
        (entry.category.clone(), entry.amount)
    };

    let prompt = format!("Delete {} {}?", category, money(context, amount));
    if !context.confirm(&prompt)? {
        output::info("Delete cancelled.");
        return Ok(());
    }

    context.controller.delete_entry(id)?;
    output::success(format!("Deleted {} {}.", category, money(context, amount)));
    context.refresh_view();
    Ok(())
}
