//! Account profile model
//!
//! An account's identity, display name, access code, and limit flag are
//! static configuration: loaded once at startup and never mutated. The live
//! balance lives in the account store, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::balance::Balance;
use super::ids::AccountId;

/// Static properties of a kiosk account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Unique identifier, as configured
    pub id: AccountId,

    /// Name shown on screen (e.g. "Kristén")
    pub display_name: String,

    /// 4-digit access code used to sign in
    pub code: String,

    /// Whether the account's balance is unbounded
    ///
    /// Fixed at account creation; never changes during the account's
    /// lifetime. Debits against an unlimited account are no-ops.
    pub unlimited: bool,

    /// Balance the account starts with when no saved state exists
    pub initial_balance: Balance,
}

impl AccountProfile {
    /// Create a bounded account profile
    pub fn bounded(
        id: impl Into<AccountId>,
        display_name: impl Into<String>,
        code: impl Into<String>,
        initial_credits: u64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            code: code.into(),
            unlimited: false,
            initial_balance: Balance::bounded(initial_credits),
        }
    }

    /// Create an unlimited account profile
    pub fn unlimited(
        id: impl Into<AccountId>,
        display_name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            code: code.into(),
            unlimited: true,
            initial_balance: Balance::Unlimited,
        }
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.display_name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }

        if self.code.len() != 4 || !self.code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProfileValidationError::MalformedCode(self.code.clone()));
        }

        if self.initial_balance.is_unlimited() != self.unlimited {
            return Err(ProfileValidationError::BalanceKindMismatch);
        }

        Ok(())
    }
}

impl fmt::Display for AccountProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

/// Validation errors for account profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    MalformedCode(String),
    BalanceKindMismatch,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account display name cannot be empty"),
            Self::MalformedCode(code) => {
                write!(f, "Access code must be exactly 4 digits, got '{}'", code)
            }
            Self::BalanceKindMismatch => {
                write!(f, "Initial balance does not match the unlimited flag")
            }
        }
    }
}

impl std::error::Error for ProfileValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_profile() {
        let profile = AccountProfile::bounded("joe", "Joe", "0824", 260);
        assert_eq!(profile.id.as_str(), "joe");
        assert!(!profile.unlimited);
        assert_eq!(profile.initial_balance, Balance::bounded(260));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_unlimited_profile() {
        let profile = AccountProfile::unlimited("kristen", "Kristén", "0002");
        assert!(profile.unlimited);
        assert_eq!(profile.initial_balance, Balance::Unlimited);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut profile = AccountProfile::bounded("joe", "Joe", "0824", 260);
        profile.display_name = "  ".into();
        assert_eq!(profile.validate(), Err(ProfileValidationError::EmptyName));
    }

    #[test]
    fn test_validate_malformed_code() {
        for code in ["824", "08241", "08a4", "??24"] {
            let mut profile = AccountProfile::bounded("joe", "Joe", "0824", 260);
            profile.code = code.into();
            assert!(matches!(
                profile.validate(),
                Err(ProfileValidationError::MalformedCode(_))
            ));
        }
    }

    #[test]
    fn test_validate_balance_kind_mismatch() {
        let mut profile = AccountProfile::bounded("joe", "Joe", "0824", 260);
        profile.initial_balance = Balance::Unlimited;
        assert_eq!(
            profile.validate(),
            Err(ProfileValidationError::BalanceKindMismatch)
        );
    }

    #[test]
    fn test_serialization() {
        let profile = AccountProfile::unlimited("kristen", "Kristén", "0002");
        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: AccountProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }

    #[test]
    fn test_display() {
        let profile = AccountProfile::bounded("joe", "Joe", "0824", 260);
        assert_eq!(format!("{}", profile), "Joe (joe)");
    }
}
