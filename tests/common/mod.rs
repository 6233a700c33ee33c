#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use pocket_ledger::{
    core::{FixedClock, LedgerController},
    domain::{EntryKind, MonthPeriod},
    storage::{JsonFileStore, LedgerStore, MemoryStore},
};
use tempfile::TempDir;

/// Instant every test controller treats as "now": 20 January 2024, 10:00 UTC.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap()
}

pub fn january_2024() -> MonthPeriod {
    MonthPeriod::new(2024, 0).unwrap()
}

/// Controller over an in-memory store; the store handle is returned for inspection.
pub fn memory_controller() -> (LedgerController<Utc>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let controller = controller_over(Arc::clone(&store));
    (controller, store)
}

/// Controller over a JSON file in a fresh temporary directory.
///
/// The `TempDir` guard must outlive the controller.
pub fn file_controller() -> (LedgerController<Utc>, Arc<JsonFileStore>, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = Arc::new(
        JsonFileStore::new(temp.path().join("storage.json")).expect("create json store"),
    );
    let controller = controller_over(Arc::clone(&store));
    (controller, store, temp)
}

pub fn controller_over<S>(store: Arc<S>) -> LedgerController<Utc>
where
    S: pocket_ledger::storage::KeyValueStore + 'static,
{
    LedgerController::with_time_zone(
        LedgerStore::open(Box::new(store)),
        Box::new(FixedClock(test_now())),
        Utc,
    )
}

/// Seeds the ledger with `Food 50`, `Salary 1000` and `Rent 300`, in that order.
pub fn seed(controller: &mut LedgerController<Utc>) {
    for (category, amount, kind) in [
        ("Food", 50.0, EntryKind::Expense),
        ("Salary", 1000.0, EntryKind::Income),
        ("Rent", 300.0, EntryKind::Expense),
    ] {
        controller
            .add_or_update(category, amount, kind, None)
            .expect("seed entry");
    }
}
