//! Ledger state snapshot
//!
//! The serializable view of the ledger's session state: balances and history
//! keyed by account id. A snapshot is what the core loads at session start
//! and what the persistence sink receives after every committed mutation.
//!
//! Loading never fails: an unreadable or malformed state file falls back to
//! the configured defaults (balances) or an empty sequence (history), with a
//! warning. A damaged state file must never keep the kiosk from starting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::KioskPaths;
use crate::ledger::Directory;
use crate::models::{AccountId, Balance, HistoryEntry};

use super::file_io::read_json;

/// Balances and history for every account, as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Balance per account id
    pub balances: BTreeMap<AccountId, Balance>,

    /// History sequence per account id, oldest first
    pub history: BTreeMap<AccountId, Vec<HistoryEntry>>,
}

impl LedgerSnapshot {
    /// Load the session-start state, substituting documented fallbacks for
    /// anything that cannot be read
    pub fn load_or_default(paths: &KioskPaths, directory: &Directory) -> Self {
        let balances = match read_json(paths.balances_file()) {
            Ok(map) => map,
            Err(e) => {
                warn!("falling back to configured initial balances: {}", e);
                BTreeMap::new()
            }
        };

        let history = match read_json(paths.history_file()) {
            Ok(map) => map,
            Err(e) => {
                warn!("falling back to empty history: {}", e);
                BTreeMap::new()
            }
        };

        let mut snapshot = Self { balances, history };
        snapshot.normalize(directory);
        snapshot
    }

    /// Reconcile loaded state with the account directory: fill in missing
    /// accounts from their configured initial balance, reset balances whose
    /// kind contradicts the account's limit flag, and drop ids the
    /// directory does not know
    pub fn normalize(&mut self, directory: &Directory) {
        for profile in directory.iter() {
            match self.balances.get(&profile.id) {
                Some(balance) if balance.is_unlimited() == profile.unlimited => {}
                Some(_) => {
                    warn!(
                        "balance kind for '{}' does not match its limit flag; resetting",
                        profile.id
                    );
                    self.balances
                        .insert(profile.id.clone(), profile.initial_balance);
                }
                None => {
                    self.balances
                        .insert(profile.id.clone(), profile.initial_balance);
                }
            }

            self.history.entry(profile.id.clone()).or_default();
        }

        let known = |id: &AccountId| directory.get(id).is_ok();
        self.balances.retain(|id, _| {
            let keep = known(id);
            if !keep {
                warn!("dropping balance for unknown account '{}'", id);
            }
            keep
        });
        self.history.retain(|id, _| known(id));
    }
}
