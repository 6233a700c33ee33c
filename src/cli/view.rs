//! Text rendering of a monthly aggregate.

use crate::{
    cli::output::ViewLine,
    core::MonthlyAggregate,
    domain::{EntryId, EntryKind, MonthPeriod},
};

const BAR_WIDTH: usize = 20;
const CATEGORY_COLUMN: usize = 14;

/// Rendered snapshot of one month.
///
/// The shell keeps exactly one of these and swaps it on every refresh; row
/// numbers typed by the user are resolved against the snapshot on screen.
#[derive(Debug, Clone)]
pub struct MonthView {
    aggregate: MonthlyAggregate,
    currency: String,
}

impl MonthView {
    pub fn new(aggregate: MonthlyAggregate, currency: impl Into<String>) -> Self {
        Self {
            aggregate,
            currency: currency.into(),
        }
    }

    pub fn period(&self) -> MonthPeriod {
        self.aggregate.period
    }

    pub fn aggregate(&self) -> &MonthlyAggregate {
        &self.aggregate
    }

    /// Entry shown at 1-based `row`.
    pub fn row_id(&self, row: usize) -> Option<EntryId> {
        row.checked_sub(1)
            .and_then(|offset| self.aggregate.filtered.get(offset))
            .map(|row| row.id())
    }

    pub fn row_count(&self) -> usize {
        self.aggregate.len()
    }

    pub fn render(&self) -> Vec<ViewLine> {
        let aggregate = &self.aggregate;
        let mut lines = vec![ViewLine::Heading(format!("=== {} ===", aggregate.period))];
        lines.push(ViewLine::Text(format!(
            "Balance: {}   Income: {}   Expense: {}",
            self.money(aggregate.balance()),
            self.money(aggregate.income_total),
            self.money(aggregate.expense_total),
        )));

        if aggregate.is_empty() {
            lines.push(ViewLine::Muted("No transactions this month.".into()));
            return lines;
        }

        for (offset, row) in aggregate.filtered.iter().enumerate() {
            let entry = &row.entry;
            let text = format!(
                "{:>3}. {:<width$} {}",
                offset + 1,
                entry.category,
                self.signed_money(entry.kind, entry.amount),
                width = CATEGORY_COLUMN,
            );
            lines.push(match entry.kind {
                EntryKind::Income => ViewLine::Income(text),
                EntryKind::Expense => ViewLine::Expense(text),
            });
        }

        if !aggregate.category_totals.is_empty() {
            lines.push(ViewLine::Heading("Expenses by category".into()));
            for bucket in &aggregate.category_totals {
                let share = if aggregate.expense_total > 0.0 {
                    bucket.total / aggregate.expense_total
                } else {
                    0.0
                };
                lines.push(ViewLine::Text(format!(
                    "  {:<width$} {:>10} {:>6.1}% {}",
                    bucket.category,
                    self.money(bucket.total),
                    share * 100.0,
                    bar(share),
                    width = CATEGORY_COLUMN,
                )));
            }
        }

        lines.push(ViewLine::Heading("Income vs expense".into()));
        let peak = aggregate.income_total.max(aggregate.expense_total);
        for (label, value, kind) in [
            ("Income", aggregate.income_total, EntryKind::Income),
            ("Expense", aggregate.expense_total, EntryKind::Expense),
        ] {
            let share = if peak > 0.0 { value / peak } else { 0.0 };
            let text = format!("  {:<8} {:>10} {}", label, self.money(value), bar(share));
            lines.push(match kind {
                EntryKind::Income => ViewLine::Income(text),
                EntryKind::Expense => ViewLine::Expense(text),
            });
        }

        lines
    }

    /// `₹950`, or `-₹50` for negative values.
    pub fn money(&self, value: f64) -> String {
        if value == 0.0 {
            return format!("{}0", self.currency);
        }
        if value < 0.0 {
            format!("-{}{}", self.currency, format_amount(-value))
        } else {
            format!("{}{}", self.currency, format_amount(value))
        }
    }

    /// `+₹1000` for income, `-₹50` for expenses.
    pub fn signed_money(&self, kind: EntryKind, amount: f64) -> String {
        let sign = match kind {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        };
        format!("{sign}{}{}", self.currency, format_amount(amount))
    }
}

/// Whole numbers print without decimals; fractions keep at most two places.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn bar(share: f64) -> String {
    let filled = (share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let filled = if share > 0.0 { filled.max(1) } else { 0 };
    "#".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonthAggregator;
    use crate::domain::Entry;
    use chrono::{TimeZone, Utc};

    fn january_view(entries: &[Entry]) -> MonthView {
        let period = MonthPeriod::new(2024, 0).unwrap();
        MonthView::new(MonthAggregator::aggregate_in(entries, period, &Utc), "₹")
    }

    fn entry(category: &str, amount: f64, kind: EntryKind) -> Entry {
        Entry::new(
            category,
            amount,
            kind,
            Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn formats_amounts_like_plain_numbers() {
        assert_eq!(format_amount(1000.0), "1000");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.25), "0.25");
        assert_eq!(format_amount(3.999), "4");
    }

    #[test]
    fn empty_month_renders_empty_state() {
        let view = january_view(&[]);
        let lines = view.render();
        assert_eq!(lines[0].text(), "=== January 2024 ===");
        assert!(lines
            .iter()
            .any(|line| line.text() == "No transactions this month."));
        assert_eq!(view.row_id(1), None);
    }

    #[test]
    fn rows_are_signed_and_numbered_from_one() {
        let entries = vec![
            entry("Food", 50.0, EntryKind::Expense),
            entry("Salary", 1000.0, EntryKind::Income),
        ];
        let view = january_view(&entries);
        let text: Vec<String> = view.render().iter().map(|l| l.text().to_string()).collect();

        assert!(text.contains(&"Balance: ₹950   Income: ₹1000   Expense: ₹50".to_string()));
        assert!(text.iter().any(|line| line.starts_with("  1. Food") && line.ends_with("-₹50")));
        assert!(text.iter().any(|line| line.starts_with("  2. Salary") && line.ends_with("+₹1000")));
        assert_eq!(view.row_id(2), Some(entries[1].id));
        assert_eq!(view.row_id(0), None);
        assert_eq!(view.row_id(3), None);
    }

    #[test]
    fn negative_balance_puts_sign_before_symbol() {
        let view = january_view(&[entry("Rent", 80.0, EntryKind::Expense)]);
        assert_eq!(view.money(view.aggregate().balance()), "-₹80");
    }
}
