//! Monthly aggregation over the full entry list.

use chrono::{Local, TimeZone};

use crate::domain::{Entry, EntryId, EntryKind, MonthPeriod};

/// An entry that passed the month filter, with its position in the backing list.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub index: usize,
    pub entry: Entry,
}

impl AggregateRow {
    pub fn id(&self) -> EntryId {
        self.entry.id
    }
}

/// Summed expenses for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Totals and filtered rows for one calendar month.
///
/// `category_totals` lists expense categories in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub period: MonthPeriod,
    pub filtered: Vec<AggregateRow>,
    pub income_total: f64,
    pub expense_total: f64,
    pub category_totals: Vec<CategoryTotal>,
}

impl MonthlyAggregate {
    /// `true` when no entry falls in the month, regardless of totals.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income_total - self.expense_total
    }

    pub fn category_total(&self, category: &str) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|bucket| bucket.category == category)
            .map(|bucket| bucket.total)
    }
}

/// Filters entries by calendar month and computes the month's totals.
pub struct MonthAggregator;

impl MonthAggregator {
    /// Aggregates `period` with entry dates interpreted in the local time zone.
    pub fn aggregate(entries: &[Entry], period: MonthPeriod) -> MonthlyAggregate {
        Self::aggregate_in(entries, period, &Local)
    }

    /// Aggregates `period` with entry dates interpreted in `tz`.
    ///
    /// Rows keep the backing list's insertion order; no date sort is applied.
    pub fn aggregate_in<Tz: TimeZone>(
        entries: &[Entry],
        period: MonthPeriod,
        tz: &Tz,
    ) -> MonthlyAggregate {
        let mut aggregate = MonthlyAggregate {
            period,
            filtered: Vec::new(),
            income_total: 0.0,
            expense_total: 0.0,
            category_totals: Vec::new(),
        };

        for (index, entry) in entries.iter().enumerate() {
            if !period.contains(&entry.date, tz) {
                continue;
            }
            match entry.kind {
                EntryKind::Income => aggregate.income_total += entry.amount,
                EntryKind::Expense => {
                    aggregate.expense_total += entry.amount;
                    add_to_bucket(&mut aggregate.category_totals, &entry.category, entry.amount);
                }
            }
            aggregate.filtered.push(AggregateRow {
                index,
                entry: entry.clone(),
            });
        }

        aggregate
    }
}

fn add_to_bucket(buckets: &mut Vec<CategoryTotal>, category: &str, amount: f64) {
    match buckets.iter_mut().find(|bucket| bucket.category == category) {
        Some(bucket) => bucket.total += amount,
        None => buckets.push(CategoryTotal {
            category: category.to_string(),
            total: amount,
        }),
    }
}
