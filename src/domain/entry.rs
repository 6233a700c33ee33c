//! Domain model for a single recorded income or expense.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to an entry when it is first created or loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Direction of money flow for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Applies the direction to `amount`: income positive, expense negative.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            EntryKind::Income => amount,
            EntryKind::Expense => -amount,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(format!(
                "unknown entry type `{other}` (expected `income` or `expense`)"
            )),
        }
    }
}

/// One recorded transaction.
///
/// Serialized as `{id, category, amount, type, date}`. Blobs written without an
/// `id` still deserialize; a fresh identifier is assigned in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: EntryId,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub date: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        category: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            category: category.into(),
            amount,
            kind,
            date,
        }
    }

    /// Amount with the direction applied.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_legacy_blob_without_id() {
        let raw = r#"{"category":"Food","amount":50,"type":"expense","date":"2024-01-10T09:30:00.000Z"}"#;
        let entry: Entry = serde_json::from_str(raw).expect("legacy entry parses");
        assert_eq!(entry.category, "Food");
        assert_eq!(entry.amount, 50.0);
        assert_eq!(entry.kind, EntryKind::Expense);
        assert_eq!(
            entry.date,
            Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn serializes_type_field_in_lowercase() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let entry = Entry::new("Salary", 1000.0, EntryKind::Income, date);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["category"], "Salary");
        assert!(value["date"].as_str().unwrap().starts_with("2024-03-01T12:00:00"));
    }

    #[test]
    fn parses_kind_case_insensitively() {
        assert_eq!("Income".parse::<EntryKind>(), Ok(EntryKind::Income));
        assert_eq!(" EXPENSE ".parse::<EntryKind>(), Ok(EntryKind::Expense));
        assert!("transfer".parse::<EntryKind>().is_err());
    }

    #[test]
    fn signed_amount_follows_kind() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Entry::new("Bonus", 20.0, EntryKind::Income, date).signed_amount(), 20.0);
        assert_eq!(Entry::new("Rent", 20.0, EntryKind::Expense, date).signed_amount(), -20.0);
    }
}
