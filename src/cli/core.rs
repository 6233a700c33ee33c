//! Shared CLI error types and loop control.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single shell command. Reported to the user; the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failure that stops the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
