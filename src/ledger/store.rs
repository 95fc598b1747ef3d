//! Account store
//!
//! Holds the current balance per account. The store is deliberately dumb:
//! it enforces only its own write contract (an unlimited slot never changes,
//! a slot's balance kind never flips) and leaves operation-level validation
//! to the ledger engine.

use std::collections::BTreeMap;

use crate::error::{KioskError, KioskResult};
use crate::models::{AccountId, Balance};

use super::directory::Directory;

/// Balance per account
#[derive(Debug, Clone)]
pub struct AccountStore {
    balances: BTreeMap<AccountId, Balance>,
}

impl AccountStore {
    /// Build the store for a directory, adopting `seed` balances where
    /// present and falling back to each account's configured initial balance
    ///
    /// A seed whose balance kind contradicts the account's limit flag is
    /// rejected with `InvalidBalance`; callers that load external state
    /// normalize it first, so hitting this is a defensive check.
    pub fn new(
        directory: &Directory,
        seed: &BTreeMap<AccountId, Balance>,
    ) -> KioskResult<Self> {
        let mut balances = BTreeMap::new();

        for profile in directory.iter() {
            let balance = seed
                .get(&profile.id)
                .copied()
                .unwrap_or(profile.initial_balance);

            if balance.is_unlimited() != profile.unlimited {
                return Err(KioskError::InvalidBalance {
                    account: profile.id.to_string(),
                    reason: "balance kind does not match the account's limit flag".into(),
                });
            }

            balances.insert(profile.id.clone(), balance);
        }

        Ok(Self { balances })
    }

    /// Current balance of an account
    pub fn balance(&self, id: &AccountId) -> KioskResult<Balance> {
        self.balances
            .get(id)
            .copied()
            .ok_or_else(|| KioskError::account_not_found(id.as_str()))
    }

    /// Whether an account is unlimited
    pub fn is_unlimited(&self, id: &AccountId) -> KioskResult<bool> {
        Ok(self.balance(id)?.is_unlimited())
    }

    /// Write a new balance
    ///
    /// Writes to an unlimited slot are no-ops: conceptually the balance
    /// never changes. Writing `Unlimited` over a bounded slot fails with
    /// `InvalidBalance` — the limit flag is fixed at account creation.
    pub fn set_balance(&mut self, id: &AccountId, new_balance: Balance) -> KioskResult<()> {
        let slot = self
            .balances
            .get_mut(id)
            .ok_or_else(|| KioskError::account_not_found(id.as_str()))?;

        match (*slot, new_balance) {
            (Balance::Unlimited, _) => Ok(()),
            (Balance::Bounded(_), Balance::Bounded(_)) => {
                *slot = new_balance;
                Ok(())
            }
            (Balance::Bounded(_), Balance::Unlimited) => Err(KioskError::InvalidBalance {
                account: id.to_string(),
                reason: "cannot make a bounded account unlimited".into(),
            }),
        }
    }

    /// A copy of every balance, for persistence
    pub fn snapshot(&self) -> BTreeMap<AccountId, Balance> {
        self.balances.clone()
    }
}
