//! Fixed category sets for each entry type.

use crate::domain::EntryKind;

pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Freelance", "Interest", "Other"];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Travel",
    "Shopping",
    "Rent",
    "Bills",
    "Education",
    "Entertainment",
    "Healthcare",
    "Other",
];

/// Returns the categories offered for `kind`, in display order.
pub fn categories_for(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Income => INCOME_CATEGORIES,
        EntryKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Resolves `name` against the set for `kind`, ignoring case and surrounding whitespace.
pub fn canonical_category(kind: EntryKind, name: &str) -> Option<&'static str> {
    let needle = name.trim();
    categories_for(kind)
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_shared_between_kinds() {
        assert_eq!(canonical_category(EntryKind::Income, "other"), Some("Other"));
        assert_eq!(canonical_category(EntryKind::Expense, "OTHER"), Some("Other"));
    }

    #[test]
    fn rejects_category_from_the_wrong_set() {
        assert_eq!(canonical_category(EntryKind::Income, "Food"), None);
        assert_eq!(canonical_category(EntryKind::Expense, "Salary"), None);
    }

    #[test]
    fn empty_name_never_matches() {
        assert_eq!(canonical_category(EntryKind::Expense, "  "), None);
    }
}
