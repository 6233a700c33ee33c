use thiserror::Error;

use crate::domain::EntryId;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Index {index} is out of range for a ledger of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl LedgerError {
    /// Returns `true` for failures caused by user input rather than program state.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}
