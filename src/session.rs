//! Kiosk session
//!
//! One signed-in visitor. The session is constructed by matching an access
//! code against the account directory, lives for the duration of the visit,
//! and is discarded afterwards — there is no ambient "current user" state.

use crate::error::{KioskError, KioskResult};
use crate::ledger::Directory;
use crate::models::{AccountId, AccountProfile};

/// A signed-in kiosk visitor
#[derive(Debug, Clone)]
pub struct Session {
    profile: AccountProfile,
}

impl Session {
    /// Sign in with a 4-digit access code
    pub fn sign_in(directory: &Directory, code: &str) -> KioskResult<Self> {
        let profile = directory
            .authenticate(code.trim())
            .ok_or(KioskError::AccessDenied)?;

        Ok(Self {
            profile: profile.clone(),
        })
    }

    /// The signed-in account
    pub fn account_id(&self) -> &AccountId {
        &self.profile.id
    }

    /// The signed-in account's display name
    pub fn display_name(&self) -> &str {
        &self.profile.display_name
    }

    /// Whether the signed-in account is unlimited
    pub fn is_unlimited(&self) -> bool {
        self.profile.unlimited
    }

    /// The full profile
    pub fn profile(&self) -> &AccountProfile {
        &self.profile
    }
}
