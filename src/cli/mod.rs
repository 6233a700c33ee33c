pub mod commands;
pub mod core;
pub mod output;
mod shell;
pub mod shell_context;
pub mod view;

pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
pub use view::MonthView;
