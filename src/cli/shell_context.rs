use std::{path::Path, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use tracing::info;

use crate::{
    config::{Config, ConfigManager, DarkMode},
    core::{LedgerController, SystemClock},
    domain::EntryId,
    storage::{JsonFileStore, LedgerStore},
    utils::paths,
};

use super::{
    commands::{self, CommandRegistry},
    core::{CliError, CommandError, CommandResult, LoopControl},
    output::{self, OutputPreferences},
    view::MonthView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every shell command.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub controller: LedgerController,
    pub store: Arc<JsonFileStore>,
    pub config: Config,
    pub dark_mode: DarkMode,
    pub theme: ColorfulTheme,
    pub view: Option<MonthView>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, &paths::app_data_dir())
    }

    pub fn with_base_dir(mode: CliMode, base: &Path) -> Result<Self, CliError> {
        let config = ConfigManager::with_base_dir(base)?.load()?;
        let store_path = config.resolve_store_file(base);
        let store = Arc::new(JsonFileStore::new(store_path)?);
        let ledger = LedgerStore::open(Box::new(Arc::clone(&store)));
        info!(entries = ledger.len(), store = %store.path().display(), "ledger opened");

        let controller = LedgerController::new(ledger, Box::new(SystemClock));
        let dark_mode = DarkMode::load(store.as_ref());

        let context = Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            controller,
            store,
            config,
            dark_mode,
            theme: ColorfulTheme::default(),
            view: None,
            running: true,
        };
        context.apply_output_preferences();
        Ok(context)
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        let period = self.controller.current_period();
        match self.controller.editing_index() {
            Some(_) => format!("ledger [{period}] (editing)> "),
            None => format!("ledger [{period}]> "),
        }
    }

    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
            dark_mode: self.dark_mode.is_enabled(),
        });
    }

    /// Re-aggregates the current month, replaces the view and prints it.
    pub fn refresh_view(&mut self) {
        let view = MonthView::new(self.controller.aggregate(), self.config.currency_symbol.clone());
        output::print_lines(&view.render());
        self.view = Some(view);
    }

    /// Resolves a 1-based row number from the view on screen to an entry id.
    pub fn resolve_row(&mut self, raw: &str) -> Result<EntryId, CommandError> {
        let row: usize = raw.trim().parse().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a row number"))
        })?;
        if self.view.is_none() {
            self.view = Some(MonthView::new(
                self.controller.aggregate(),
                self.config.currency_symbol.clone(),
            ));
        }
        let view = self
            .view
            .as_ref()
            .ok_or_else(|| CommandError::InvalidArguments("no month is displayed".into()))?;
        view.row_id(row).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "row {row} does not exist; {} has {} row(s)",
                view.period(),
                view.row_count()
            ))
        })
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let Some(definition) = self.registry.get(command).cloned() else {
            return Err(CommandError::InvalidArguments(self.unknown_command(command)));
        };
        (definition.handler)(self, args)?;
        if self.running {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Exit)
        }
    }

    fn unknown_command(&self, command: &str) -> String {
        let suggestion = self
            .registry
            .names()
            .map(|name| (levenshtein(command, name), name))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name);
        match suggestion {
            Some(name) => format!("unknown command `{command}`; did you mean `{name}`?"),
            None => format!("unknown command `{command}`; type `help` for a list"),
        }
    }

    pub fn report_error(&self, err: CommandError) {
        let recoverable = match &err {
            CommandError::InvalidArguments(_) => true,
            CommandError::Core(inner) => inner.is_user_error(),
            CommandError::Prompt(_) => false,
        };
        if recoverable {
            output::warning(err);
        } else {
            output::error(err);
        }
    }

    pub fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub fn confirm_exit(&self) -> bool {
        self.confirm("Exit the ledger shell?").unwrap_or(true)
    }

    /// Updates the stored dark mode preference and the output palette.
    pub fn set_dark_mode(&mut self, mode: DarkMode) -> CommandResult {
        mode.persist(self.store.as_ref())?;
        self.dark_mode = mode;
        self.apply_output_preferences();
        Ok(())
    }
}
