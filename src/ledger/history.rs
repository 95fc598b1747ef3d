//! History log
//!
//! Append-only per-account sequences of dated action records. Insertion
//! order is chronological order is display order. Appends never fail; the
//! ledger engine only appends entries for operations that have already
//! validated and committed.

use std::collections::BTreeMap;

use crate::models::{AccountId, HistoryEntry};

/// Per-account history sequences
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: BTreeMap<AccountId, Vec<HistoryEntry>>,
}

impl HistoryLog {
    /// An empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt previously saved sequences
    pub fn from_entries(entries: BTreeMap<AccountId, Vec<HistoryEntry>>) -> Self {
        Self { entries }
    }

    /// Append an entry to the end of an account's sequence
    ///
    /// The sequence is created on demand.
    pub fn append(&mut self, id: &AccountId, entry: HistoryEntry) {
        self.entries.entry(id.clone()).or_default().push(entry);
    }

    /// Read-only view of an account's sequence, oldest first
    pub fn entries(&self, id: &AccountId) -> &[HistoryEntry] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entries recorded for an account
    pub fn len(&self, id: &AccountId) -> usize {
        self.entries(id).len()
    }

    /// Whether an account has any entries
    pub fn is_empty(&self, id: &AccountId) -> bool {
        self.entries(id).is_empty()
    }

    /// A copy of every sequence, for persistence
    pub fn snapshot(&self) -> BTreeMap<AccountId, Vec<HistoryEntry>> {
        self.entries.clone()
    }
}
