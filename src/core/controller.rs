//! Mutation entry point for the ledger: add, edit, delete and month navigation.

use chrono::{Local, TimeZone};
use tracing::{debug, info};

use crate::{
    core::{
        aggregator::{MonthAggregator, MonthlyAggregate},
        clock::Clock,
    },
    domain::{canonical_category, Entry, EntryId, EntryKind, MonthPeriod},
    errors::{LedgerError, Result},
    storage::LedgerStore,
};

/// Edit cursor for the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(usize),
}

/// Owns the ledger, the edit cursor and the month being viewed.
///
/// Every successful mutation has already been persisted when it returns, and
/// hands back the refreshed aggregate for the current month.
pub struct LedgerController<Tz: TimeZone = Local> {
    store: LedgerStore,
    clock: Box<dyn Clock>,
    zone: Tz,
    period: MonthPeriod,
    edit: EditState,
}

impl LedgerController<Local> {
    /// Builds a controller that reads month boundaries in the local time zone.
    pub fn new(store: LedgerStore, clock: Box<dyn Clock>) -> Self {
        Self::with_time_zone(store, clock, Local)
    }
}

impl<Tz: TimeZone> LedgerController<Tz> {
    /// Builds a controller starting on the month that contains `clock.now()` in `zone`.
    pub fn with_time_zone(store: LedgerStore, clock: Box<dyn Clock>, zone: Tz) -> Self {
        let period = MonthPeriod::containing(&clock.now().with_timezone(&zone));
        Self {
            store,
            clock,
            zone,
            period,
            edit: EditState::Idle,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn current_period(&self) -> MonthPeriod {
        self.period
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self.edit {
            EditState::Idle => None,
            EditState::Editing(index) => Some(index),
        }
    }

    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.store.position(id)
    }

    /// Aggregate for the month currently being viewed.
    pub fn aggregate(&self) -> MonthlyAggregate {
        MonthAggregator::aggregate_in(self.store.entries(), self.period, &self.zone)
    }

    /// Appends a new entry, or replaces the one at `edit_index`, stamped with the current time.
    ///
    /// Input is validated before anything changes. Committing an edit
    /// returns the cursor to [`EditState::Idle`]; a plain add leaves it as is.
    pub fn add_or_update(
        &mut self,
        category: &str,
        amount: f64,
        kind: EntryKind,
        edit_index: Option<usize>,
    ) -> Result<MonthlyAggregate> {
        let category = validate(category, amount, kind)?;
        let date = self.clock.now();

        match edit_index {
            None => {
                let entry = Entry::new(category, amount, kind, date);
                info!(id = %entry.id, %kind, category, amount, "entry added");
                self.store.append(entry)?;
            }
            Some(index) => {
                let existing = self.store.get(index)?;
                let entry = Entry {
                    id: existing.id,
                    category: category.to_string(),
                    amount,
                    kind,
                    date,
                };
                info!(id = %entry.id, index, %kind, category, amount, "entry updated");
                self.store.replace_at(index, entry)?;
                self.edit = EditState::Idle;
            }
        }

        Ok(self.aggregate())
    }

    /// Replaces the entry identified by `id`, wherever it currently sits.
    pub fn update_entry(
        &mut self,
        id: EntryId,
        category: &str,
        amount: f64,
        kind: EntryKind,
    ) -> Result<MonthlyAggregate> {
        let index = self.resolve(id)?;
        self.add_or_update(category, amount, kind, Some(index))
    }

    /// Removes the entry at `index`. Later entries shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<MonthlyAggregate> {
        let removed = self.store.remove_at(index)?;
        info!(id = %removed.id, index, "entry deleted");
        self.edit = match self.edit {
            EditState::Editing(current) if current == index => EditState::Idle,
            EditState::Editing(current) if current > index => EditState::Editing(current - 1),
            other => other,
        };
        Ok(self.aggregate())
    }

    pub fn delete_entry(&mut self, id: EntryId) -> Result<MonthlyAggregate> {
        let index = self.resolve(id)?;
        self.delete(index)
    }

    /// Returns a copy of the entry at `index` for pre-filling the edit form.
    ///
    /// Moves the cursor to `Editing(index)`, replacing any edit already in progress.
    pub fn begin_edit(&mut self, index: usize) -> Result<Entry> {
        let entry = self.store.get(index)?.clone();
        self.edit = EditState::Editing(index);
        Ok(entry)
    }

    pub fn begin_edit_entry(&mut self, id: EntryId) -> Result<Entry> {
        let index = self.resolve(id)?;
        self.begin_edit(index)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Moves the viewed month by `delta` calendar months.
    pub fn shift_month(&mut self, delta: i32) -> MonthPeriod {
        self.period = self.period.shift(delta);
        debug!(period = %self.period, delta, "month changed");
        self.period
    }

    fn resolve(&self, id: EntryId) -> Result<usize> {
        self.store
            .position(id)
            .ok_or(LedgerError::EntryNotFound(id))
    }
}

/// Checks presence, positivity and category/type consistency.
///
/// Returns the canonical spelling of the category.
fn validate(category: &str, amount: f64, kind: EntryKind) -> Result<&'static str> {
    if category.trim().is_empty() {
        return Err(LedgerError::Validation("category is required".into()));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::Validation(
            "amount must be a number greater than zero".into(),
        ));
    }
    canonical_category(kind, category).ok_or_else(|| {
        LedgerError::Validation(format!(
            "`{}` is not an {} category",
            category.trim(),
            kind
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn controller() -> LedgerController<Utc> {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap();
        LedgerController::with_time_zone(
            LedgerStore::open(Box::new(MemoryStore::new())),
            Box::new(FixedClock(now)),
            Utc,
        )
    }

    #[test]
    fn starts_on_the_clock_month() {
        let controller = controller();
        assert_eq!(controller.current_period(), MonthPeriod::new(2024, 0).unwrap());
        assert_eq!(controller.edit_state(), EditState::Idle);
    }

    #[test]
    fn validation_rejects_bad_input() {
        assert!(matches!(
            validate("", 10.0, EntryKind::Expense),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            validate("Food", 0.0, EntryKind::Expense),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            validate("Food", -3.0, EntryKind::Expense),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            validate("Food", f64::NAN, EntryKind::Expense),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            validate("Food", 3.0, EntryKind::Income),
            Err(LedgerError::Validation(_))
        ));
        assert_eq!(validate(" food ", 3.0, EntryKind::Expense).unwrap(), "Food");
    }

    #[test]
    fn an_edit_in_progress_is_replaced_by_a_newer_one() {
        let mut controller = controller();
        controller
            .add_or_update("Food", 5.0, EntryKind::Expense, None)
            .unwrap();
        controller
            .add_or_update("Bills", 9.0, EntryKind::Expense, None)
            .unwrap();

        controller.begin_edit(0).unwrap();
        controller.begin_edit(1).unwrap();
        assert_eq!(controller.edit_state(), EditState::Editing(1));

        controller.cancel_edit();
        assert_eq!(controller.edit_state(), EditState::Idle);
    }

    #[test]
    fn plain_add_does_not_touch_the_edit_cursor() {
        let mut controller = controller();
        controller
            .add_or_update("Food", 5.0, EntryKind::Expense, None)
            .unwrap();
        controller.begin_edit(0).unwrap();
        controller
            .add_or_update("Rent", 500.0, EntryKind::Expense, None)
            .unwrap();
        assert_eq!(controller.edit_state(), EditState::Editing(0));
    }

    #[test]
    fn deleting_before_the_edit_target_keeps_the_cursor_on_it() {
        let mut controller = controller();
        for category in ["Food", "Travel", "Rent"] {
            controller
                .add_or_update(category, 1.0, EntryKind::Expense, None)
                .unwrap();
        }
        controller.begin_edit(2).unwrap();
        controller.delete(0).unwrap();
        assert_eq!(controller.edit_state(), EditState::Editing(1));
        assert_eq!(controller.entries()[1].category, "Rent");

        controller.delete(1).unwrap();
        assert_eq!(controller.edit_state(), EditState::Idle);
    }

    #[test]
    fn shift_month_wraps_and_returns_the_new_period() {
        let mut controller = controller();
        assert_eq!(controller.shift_month(-1), MonthPeriod::new(2023, 11).unwrap());
        assert_eq!(controller.shift_month(1), MonthPeriod::new(2024, 0).unwrap());
    }
}
