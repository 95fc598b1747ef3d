//! Account directory
//!
//! The fixed set of accounts the kiosk knows about, injected from static
//! configuration at startup. The directory resolves ids, matches sign-in
//! codes, and names the counterpart account in the two-account case.

use crate::error::{KioskError, KioskResult};
use crate::models::{AccountId, AccountProfile};

/// The fixed account set, in configured order
#[derive(Debug, Clone)]
pub struct Directory {
    accounts: Vec<AccountProfile>,
}

impl Directory {
    /// Build a directory, validating each profile and rejecting duplicate
    /// ids or access codes
    pub fn new(accounts: Vec<AccountProfile>) -> KioskResult<Self> {
        if accounts.is_empty() {
            return Err(KioskError::Config("at least one account is required".into()));
        }

        for (i, profile) in accounts.iter().enumerate() {
            profile
                .validate()
                .map_err(|e| KioskError::Validation(e.to_string()))?;

            for other in &accounts[i + 1..] {
                if other.id == profile.id {
                    return Err(KioskError::Config(format!(
                        "duplicate account id: {}",
                        profile.id
                    )));
                }
                if other.code == profile.code {
                    return Err(KioskError::Config(format!(
                        "accounts '{}' and '{}' share an access code",
                        profile.id, other.id
                    )));
                }
            }
        }

        Ok(Self { accounts })
    }

    /// Resolve an account id
    pub fn get(&self, id: &AccountId) -> KioskResult<&AccountProfile> {
        self.accounts
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| KioskError::account_not_found(id.as_str()))
    }

    /// Match a sign-in code against the account set
    pub fn authenticate(&self, code: &str) -> Option<&AccountProfile> {
        self.accounts.iter().find(|p| p.code == code)
    }

    /// The other account, when the kiosk holds exactly two
    ///
    /// Used to default the transfer recipient: a two-user kiosk always
    /// sends to whichever account is not signed in.
    pub fn counterpart(&self, id: &AccountId) -> Option<&AccountProfile> {
        if self.accounts.len() != 2 {
            return None;
        }
        self.accounts.iter().find(|p| &p.id != id)
    }

    /// All profiles, in configured order
    pub fn iter(&self) -> impl Iterator<Item = &AccountProfile> {
        self.accounts.iter()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
