//! Kiosk CLI command handlers
//!
//! Bridges clap argument parsing with the ledger engine. Each handler
//! signs nothing in itself — sessions are established by the caller — and
//! contains no domain logic beyond resolving the default recipient.

use chrono::Utc;

use crate::display::{format_balance_overview, format_catalog, format_history_list};
use crate::error::{KioskError, KioskResult};
use crate::ledger::Ledger;
use crate::models::{AccountId, Catalog, Credits};
use crate::session::Session;

/// Show the store catalog
pub fn handle_store(catalog: &Catalog) {
    print!("{}", format_catalog(catalog));
}

/// Show the balances visible to the signed-in account
pub fn handle_balance(session: &Session, ledger: &Ledger) -> KioskResult<()> {
    let balances: Vec<_> = ledger
        .balances()
        .into_iter()
        .filter_map(|(id, balance)| {
            ledger
                .directory()
                .get(&id)
                .ok()
                .map(|profile| (profile.clone(), balance))
        })
        .collect();

    println!("{}", format_balance_overview(session.profile(), &balances));
    Ok(())
}

/// Send credits from the signed-in account
///
/// With no explicit recipient the credits go to the other account, so a
/// two-user kiosk never needs one spelled out.
pub fn handle_send(
    session: &Session,
    ledger: &mut Ledger,
    to: Option<&str>,
    amount: u64,
) -> KioskResult<()> {
    let recipient = match to {
        Some(id) => ledger.directory().get(&AccountId::new(id))?.clone(),
        None => ledger
            .directory()
            .counterpart(session.account_id())
            .cloned()
            .ok_or_else(|| {
                KioskError::Validation(
                    "A recipient is required when the kiosk has more than two accounts".into(),
                )
            })?,
    };

    let outcome = ledger.transfer(
        session.account_id(),
        &recipient.id,
        Credits::new(amount),
        Utc::now().date_naive(),
    )?;

    println!("Sent {} to {}", outcome.amount, recipient.display_name);
    println!("Your balance: {}", outcome.from_balance);
    Ok(())
}

/// Redeem a store item for the signed-in account
pub fn handle_redeem(session: &Session, ledger: &mut Ledger, item: &str) -> KioskResult<()> {
    let outcome = ledger.redeem(session.account_id(), item, Utc::now().date_naive())?;

    println!("Redeemed {} (-{})", outcome.item.name, outcome.item.cost);
    println!("Your balance: {}", outcome.balance);
    Ok(())
}

/// Show the signed-in account's history
pub fn handle_history(session: &Session, ledger: &Ledger) {
    print!(
        "{}",
        format_history_list(ledger.history(session.account_id()))
    );
}
