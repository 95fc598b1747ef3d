//! History entry model
//!
//! An immutable, dated record of one completed account action. Entries are
//! only ever appended by the ledger engine after an operation has fully
//! validated and committed; they are never edited or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::CatalogItem;
use super::credits::Credits;
use super::ids::EntryId;

/// A single dated action record in an account's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable key for rendered lists; state files written before ids were
    /// introduced load with a fresh one
    #[serde(default)]
    pub id: EntryId,

    /// Calendar date the action occurred (ISO `YYYY-MM-DD` in JSON)
    pub date: NaiveDate,

    /// Human-readable description, including the signed credit delta
    /// where applicable
    pub action: String,
}

impl HistoryEntry {
    /// Create an entry with an arbitrary action text
    pub fn new(date: NaiveDate, action: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            date,
            action: action.into(),
        }
    }

    /// The sender-side record of a transfer
    pub fn sent(date: NaiveDate, amount: Credits, recipient: &str) -> Self {
        Self::new(date, format!("Sent {} to {}", amount, recipient))
    }

    /// The recipient-side record of a transfer
    pub fn received(date: NaiveDate, amount: Credits, sender: &str) -> Self {
        Self::new(date, format!("Received {} from {}", amount, sender))
    }

    /// The record of a store redemption
    pub fn redeemed(date: NaiveDate, item: &CatalogItem) -> Self {
        Self::new(date, format!("Redeemed {} (-{})", item.name, item.cost))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.date, self.action)
    }
}
