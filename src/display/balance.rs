//! Balance display formatting
//!
//! Renders the per-viewer balance rules: an unlimited account sees
//! everyone's balance on one line, a bounded account sees only its own.

use crate::models::{AccountProfile, Balance};

/// Format the balance overview for a viewer
pub fn format_balance_overview(
    viewer: &AccountProfile,
    balances: &[(AccountProfile, Balance)],
) -> String {
    if viewer.unlimited {
        balances
            .iter()
            .map(|(profile, balance)| format!("{}: {}", profile.display_name, balance))
            .collect::<Vec<_>>()
            .join(" | ")
    } else {
        balances
            .iter()
            .find(|(profile, _)| profile.id == viewer.id)
            .map(|(_, balance)| format!("Your Balance: {}", balance))
            .unwrap_or_else(|| "Your Balance: unknown".to_string())
    }
}
