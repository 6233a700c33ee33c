use crate::cli::commands::{expect_args, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::config::DarkMode;
use crate::domain::{categories_for, EntryKind};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "categories",
            "List the categories offered for each entry type",
            "categories [income|expense]",
            cmd_categories,
        ),
        CommandDefinition::new(
            "theme",
            "Show or change the dark mode preference",
            "theme [on|off|toggle]",
            cmd_theme,
        ),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandDefinition::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_categories(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, 1, "categories [income|expense]")?;
    let kinds = match args.first() {
        Some(raw) => vec![raw
            .parse::<EntryKind>()
            .map_err(CommandError::InvalidArguments)?],
        None => vec![EntryKind::Income, EntryKind::Expense],
    };
    for kind in kinds {
        output::info(format!("{}: {}", kind, categories_for(kind).join(", ")));
    }
    Ok(())
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 0, 1, "theme [on|off|toggle]")?;
    let Some(action) = args.first() else {
        output::info(format!("Dark mode is {}.", context.dark_mode));
        return Ok(());
    };
    let next = match action.to_ascii_lowercase().as_str() {
        "on" => DarkMode::Enabled,
        "off" => DarkMode::Disabled,
        "toggle" => context.dark_mode.toggled(),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown theme action `{other}`; expected on, off or toggle"
            )))
        }
    };
    context.set_dark_mode(next)?;
    output::success(format!("Dark mode {}.", next));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        let Some(definition) = context.registry.get(&name) else {
            return Err(CommandError::InvalidArguments(format!(
                "no help for unknown command `{name}`"
            )));
        };
        output::info(format!("{}: {}", definition.usage, definition.description));
        return Ok(());
    }

    output::section("Commands");
    for definition in context.registry.iter() {
        output::info(format!("{:<42} {}", definition.usage, definition.description));
    }
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Ok(())
}
