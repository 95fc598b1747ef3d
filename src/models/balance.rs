//! Account balance representation
//!
//! A balance is either a bounded credit count or unlimited. The unlimited
//! case is an explicit variant rather than a numeric sentinel, so that
//! "debits never reduce an unlimited account" is a matched branch rather
//! than an arithmetic coincidence.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::credits::Credits;

/// The balance of a kiosk account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Unbounded: debits are no-ops and credits are not tracked
    Unlimited,
    /// A concrete, non-negative credit count
    Bounded(Credits),
}

impl Balance {
    /// Convenience constructor for a bounded balance
    pub const fn bounded(count: u64) -> Self {
        Self::Bounded(Credits::new(count))
    }

    /// Whether this balance is the unlimited variant
    pub const fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// The bounded credit count, if any
    pub const fn credits(&self) -> Option<Credits> {
        match self {
            Self::Unlimited => None,
            Self::Bounded(c) => Some(*c),
        }
    }

    /// Remove `amount` from the balance
    ///
    /// Returns `None` when a bounded balance would go below zero. Debiting
    /// an unlimited balance never reduces anything.
    pub const fn debit(self, amount: Credits) -> Option<Self> {
        match self {
            Self::Unlimited => Some(Self::Unlimited),
            Self::Bounded(c) => match c.checked_sub(amount) {
                Some(rest) => Some(Self::Bounded(rest)),
                None => None,
            },
        }
    }

    /// Add `amount` to the balance
    ///
    /// Crediting an unlimited balance is a no-op: there is nothing to track.
    pub const fn credit(self, amount: Credits) -> Self {
        match self {
            Self::Unlimited => Self::Unlimited,
            Self::Bounded(c) => Self::Bounded(c.saturating_add(amount)),
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "∞ credits"),
            Self::Bounded(c) => write!(f, "{}", c),
        }
    }
}

// State files store a bare number or the string "unlimited"; a tagged
// object would be noise for a value this small.

impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unlimited => serializer.serialize_str("unlimited"),
            Self::Bounded(c) => c.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(u64),
            Tag(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Count(n) => Ok(Balance::Bounded(Credits::new(n))),
            Repr::Tag(s) if s == "unlimited" => Ok(Balance::Unlimited),
            Repr::Tag(s) => Err(D::Error::custom(format!(
                "expected a credit count or \"unlimited\", got \"{}\"",
                s
            ))),
        }
    }
}
