//! Pure domain models for the ledger. No I/O, no CLI, no storage.

pub mod category;
pub mod entry;
pub mod period;

pub use category::{
    canonical_category, categories_for, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
pub use entry::{Entry, EntryId, EntryKind};
pub use period::MonthPeriod;
