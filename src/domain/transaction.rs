use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cents, format_cents};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }

    /// Render the ledger line for a completed transaction.
    /// Example: "Withdrawal - Amount: $20.00, Updated Balance: $280.30"
    pub fn describe(&self, amount: Cents, updated_balance: Cents) -> String {
        format!(
            "{} - Amount: ${}, Updated Balance: ${}",
            self.as_str(),
            format_cents(amount),
            format_cents(updated_balance)
        )
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single line in an account's transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// Human-readable description, printed verbatim to the ledger file
    pub description: String,
    /// When the entry was appended. Not part of the printed ledger line; it is carried
    /// in serialized entries and in the `tracing` events emitted when entries are recorded.
    pub recorded_at: DateTime<Utc>,
}

impl TransactionEntry {
    pub fn new(kind: TransactionKind, amount: Cents, updated_balance: Cents) -> Self {
        Self::from_description(kind.describe(amount, updated_balance))
    }

    /// Free-form entry, used when seeding a log.
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Append-only, chronologically ordered history for one account.
/// Only the crate can append; callers get read-only iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<TransactionEntry>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: TransactionEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&TransactionEntry> {
        self.entries.last()
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.description.as_str())
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a TransactionEntry;
    type IntoIter = std::slice::Iter<'a, TransactionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
