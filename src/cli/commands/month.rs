use crate::cli::commands::{expect_args, CommandDefinition};
use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("list", "Show the displayed month", "list", cmd_list),
        CommandDefinition::new("show", "Alias for `list`", "show", cmd_list),
        CommandDefinition::new("prev", "Go to the previous month", "prev", cmd_prev),
        CommandDefinition::new("next", "Go to the next month", "next", cmd_next),
        CommandDefinition::new("month", "Print the displayed month", "month", cmd_month),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, 0, "list")?;
    context.refresh_view();
    Ok(())
}

fn cmd_prev(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, 0, "prev")?;
    context.controller.shift_month(-1);
    context.refresh_view();
    Ok(())
}

fn cmd_next(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, 0, "next")?;
    context.controller.shift_month(1);
    context.refresh_view();
    Ok(())
}

fn cmd_month(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(context.controller.current_period());
    Ok(())
}
