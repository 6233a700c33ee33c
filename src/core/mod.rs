//! Business logic over the ledger. Depends on `domain` and `storage`; no terminal I/O.

pub mod aggregator;
pub mod clock;
pub mod controller;

pub use aggregator::{AggregateRow, CategoryTotal, MonthAggregator, MonthlyAggregate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{EditState, LedgerController};
