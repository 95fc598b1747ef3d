//! Ledger engine
//!
//! The component that owns balances and history and applies the two domain
//! operations, `transfer` and `redeem`. Each operation is one atomic unit of
//! validation, balance mutation, and history append: every fallible check
//! runs before the first write, so a failed call leaves balances and logs
//! exactly as they were.
//!
//! Operations take `&mut self`, which makes the per-operation critical
//! section a borrow-checker guarantee within a process; a deployment serving
//! several sessions at once wraps the engine in a `Mutex`.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{KioskError, KioskResult};
use crate::models::{AccountId, Balance, Catalog, CatalogItem, Credits, HistoryEntry};
use crate::storage::{LedgerSnapshot, PersistenceSink};

use super::directory::Directory;
use super::history::HistoryLog;
use super::store::AccountStore;

/// Updated balances returned by a successful transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Sender account
    pub from: AccountId,
    /// Sender balance after the transfer
    pub from_balance: Balance,
    /// Recipient account
    pub to: AccountId,
    /// Recipient balance after the transfer
    pub to_balance: Balance,
    /// Credits moved
    pub amount: Credits,
    /// Date stamped on both history entries
    pub date: NaiveDate,
}

/// Updated balance returned by a successful redemption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemOutcome {
    /// Redeeming account
    pub account: AccountId,
    /// Balance after the redemption
    pub balance: Balance,
    /// The item redeemed
    pub item: CatalogItem,
    /// Date stamped on the history entry
    pub date: NaiveDate,
}

/// The credit ledger: account balances, per-account history, and the atomic
/// operations that change them
pub struct Ledger {
    directory: Directory,
    catalog: Catalog,
    store: AccountStore,
    history: HistoryLog,
    sink: Box<dyn PersistenceSink>,
}

impl Ledger {
    /// Assemble a ledger from its injected parts
    ///
    /// `state` is the loaded (or fallback) session-start snapshot; balances
    /// it does not cover fall back to each account's configured initial
    /// balance.
    pub fn new(
        directory: Directory,
        catalog: Catalog,
        state: LedgerSnapshot,
        sink: Box<dyn PersistenceSink>,
    ) -> KioskResult<Self> {
        let store = AccountStore::new(&directory, &state.balances)?;
        let history = HistoryLog::from_entries(state.history);

        Ok(Self {
            directory,
            catalog,
            store,
            history,
            sink,
        })
    }

    /// Move `amount` credits from one account to another
    ///
    /// For two bounded accounts the sum of their balances is unchanged by
    /// the call. An unlimited sender is an infinite source (nothing is
    /// reduced); an unlimited recipient absorbs the credits without
    /// tracking them.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Credits,
        date: NaiveDate,
    ) -> KioskResult<TransferOutcome> {
        let sender = self.directory.get(from)?.clone();
        let recipient = self.directory.get(to)?.clone();

        if amount.is_zero() {
            return Err(KioskError::InvalidAmount);
        }
        if from == to {
            return Err(KioskError::Validation(
                "Cannot send credits to the same account".into(),
            ));
        }

        let current = self.store.balance(from)?;
        let debited = current
            .debit(amount)
            .ok_or_else(|| KioskError::InsufficientFunds {
                account: sender.display_name.clone(),
                needed: amount,
                available: current.credits().unwrap_or(Credits::zero()),
            })?;
        let credited = self.store.balance(to)?.credit(amount);

        // All checks passed; commit both sides, then log both sides with
        // one shared date.
        self.store.set_balance(from, debited)?;
        self.store.set_balance(to, credited)?;
        self.history
            .append(from, HistoryEntry::sent(date, amount, &recipient.display_name));
        self.history
            .append(to, HistoryEntry::received(date, amount, &sender.display_name));

        self.persist();

        Ok(TransferOutcome {
            from: from.clone(),
            from_balance: debited,
            to: to.clone(),
            to_balance: credited,
            amount,
            date,
        })
    }

    /// Redeem a store item, debiting its cost from the account
    pub fn redeem(
        &mut self,
        account: &AccountId,
        item_name: &str,
        date: NaiveDate,
    ) -> KioskResult<RedeemOutcome> {
        let profile = self.directory.get(account)?.clone();
        let item = self
            .catalog
            .find(item_name)
            .ok_or_else(|| KioskError::UnknownItem(item_name.to_string()))?
            .clone();

        let current = self.store.balance(account)?;
        let debited = current
            .debit(item.cost)
            .ok_or_else(|| KioskError::InsufficientFunds {
                account: profile.display_name.clone(),
                needed: item.cost,
                available: current.credits().unwrap_or(Credits::zero()),
            })?;

        self.store.set_balance(account, debited)?;
        self.history
            .append(account, HistoryEntry::redeemed(date, &item));

        self.persist();

        Ok(RedeemOutcome {
            account: account.clone(),
            balance: debited,
            item,
            date,
        })
    }

    /// Current balance of an account
    pub fn balance(&self, id: &AccountId) -> KioskResult<Balance> {
        self.store.balance(id)
    }

    /// An account's history, oldest first
    pub fn history(&self, id: &AccountId) -> &[HistoryEntry] {
        self.history.entries(id)
    }

    /// The account directory
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The store catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every account with its current balance, in directory order
    pub fn balances(&self) -> Vec<(AccountId, Balance)> {
        self.directory
            .iter()
            .filter_map(|p| self.store.balance(&p.id).ok().map(|b| (p.id.clone(), b)))
            .collect()
    }

    fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            balances: self.store.snapshot(),
            history: self.history.snapshot(),
        }
    }

    // The in-memory state is already consistent when the sink runs, so a
    // sink failure is reported but never unwinds a committed operation.
    fn persist(&self) {
        if let Err(e) = self.sink.persist(&self.snapshot()) {
            warn!("failed to persist ledger state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountProfile;
    use crate::storage::NullSink;
    use std::cell::Cell;
    use std::rc::Rc;

    fn kristen() -> AccountId {
        AccountId::new("kristen")
    }

    fn joe() -> AccountId {
        AccountId::new("joe")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
    }

    fn stock_directory() -> Directory {
        Directory::new(vec![
            AccountProfile::unlimited("kristen", "Kristén", "0002"),
            AccountProfile::bounded("joe", "Joe", "0824", 260),
        ])
        .unwrap()
    }

    fn stock_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem::new("One hole", 3),
            CatalogItem::new("Two holes", 6),
            CatalogItem::new("Three holes", 12),
        ])
        .unwrap()
    }

    fn stock_ledger() -> Ledger {
        Ledger::new(
            stock_directory(),
            stock_catalog(),
            LedgerSnapshot::default(),
            Box::new(NullSink),
        )
        .unwrap()
    }

    /// Sink that counts how many times it fires
    struct CountingSink(Rc<Cell<usize>>);

    impl PersistenceSink for CountingSink {
        fn persist(&self, _snapshot: &LedgerSnapshot) -> KioskResult<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    fn counting_ledger() -> (Ledger, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let ledger = Ledger::new(
            stock_directory(),
            stock_catalog(),
            LedgerSnapshot::default(),
            Box::new(CountingSink(Rc::clone(&count))),
        )
        .unwrap();
        (ledger, count)
    }

    #[test]
    fn test_redeem_debits_and_logs() {
        let mut ledger = stock_ledger();

        let outcome = ledger.redeem(&joe(), "One hole", date()).unwrap();
        assert_eq!(outcome.balance, Balance::bounded(257));
        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(257));

        let entries = ledger.history(&joe());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "Redeemed One hole (-3 credits)");
        assert_eq!(entries[0].date, date());
    }

    #[test]
    fn test_redeem_by_unlimited_account_is_free() {
        let mut ledger = stock_ledger();

        let outcome = ledger.redeem(&kristen(), "Three holes", date()).unwrap();
        assert_eq!(outcome.balance, Balance::Unlimited);
        assert_eq!(ledger.history(&kristen()).len(), 1);
    }

    #[test]
    fn test_redeem_unknown_item_never_mutates() {
        let mut ledger = stock_ledger();

        for _ in 0..3 {
            let err = ledger.redeem(&joe(), "Nonexistent Item", date()).unwrap_err();
            assert!(matches!(err, KioskError::UnknownItem(_)));
        }

        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(260));
        assert!(ledger.history(&joe()).is_empty());
    }

    #[test]
    fn test_redeem_insufficient_funds() {
        let mut snapshot = LedgerSnapshot::default();
        snapshot.balances.insert(joe(), Balance::bounded(5));
        let mut ledger = Ledger::new(
            stock_directory(),
            stock_catalog(),
            snapshot,
            Box::new(NullSink),
        )
        .unwrap();

        let err = ledger.redeem(&joe(), "Three holes", date()).unwrap_err();
        assert!(matches!(
            err,
            KioskError::InsufficientFunds { needed, available, .. }
                if needed == Credits::new(12) && available == Credits::new(5)
        ));

        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(5));
        assert!(ledger.history(&joe()).is_empty());
    }

    #[test]
    fn test_transfer_to_unlimited_recipient() {
        let mut ledger = stock_ledger();
        ledger.redeem(&joe(), "One hole", date()).unwrap();

        let outcome = ledger
            .transfer(&joe(), &kristen(), Credits::new(50), date())
            .unwrap();
        assert_eq!(outcome.from_balance, Balance::bounded(207));
        assert_eq!(outcome.to_balance, Balance::Unlimited);

        let joe_entries = ledger.history(&joe());
        assert_eq!(joe_entries.last().unwrap().action, "Sent 50 credits to Kristén");

        let kristen_entries = ledger.history(&kristen());
        assert_eq!(kristen_entries.len(), 1);
        assert_eq!(kristen_entries[0].action, "Received 50 credits from Joe");
        assert_eq!(kristen_entries[0].date, joe_entries.last().unwrap().date);
    }

    #[test]
    fn test_transfer_insufficient_funds_never_mutates() {
        let mut ledger = stock_ledger();

        let err = ledger
            .transfer(&joe(), &kristen(), Credits::new(10_000), date())
            .unwrap_err();
        assert!(matches!(err, KioskError::InsufficientFunds { .. }));

        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(260));
        assert!(ledger.history(&joe()).is_empty());
        assert!(ledger.history(&kristen()).is_empty());
    }

    #[test]
    fn test_transfer_from_unlimited_sender() {
        let mut ledger = stock_ledger();

        let outcome = ledger
            .transfer(&kristen(), &joe(), Credits::new(1_000_000), date())
            .unwrap();
        assert_eq!(outcome.from_balance, Balance::Unlimited);
        assert_eq!(outcome.to_balance, Balance::bounded(1_000_260));
        assert_eq!(ledger.balance(&kristen()).unwrap(), Balance::Unlimited);
    }

    #[test]
    fn test_transfer_zero_amount() {
        let mut ledger = stock_ledger();

        let err = ledger
            .transfer(&joe(), &kristen(), Credits::zero(), date())
            .unwrap_err();
        assert!(matches!(err, KioskError::InvalidAmount));
        assert!(ledger.history(&joe()).is_empty());
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        let mut ledger = stock_ledger();

        let err = ledger
            .transfer(&joe(), &joe(), Credits::new(10), date())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(260));
    }

    #[test]
    fn test_transfer_unknown_account() {
        let mut ledger = stock_ledger();

        let err = ledger
            .transfer(&joe(), &AccountId::new("nobody"), Credits::new(10), date())
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(260));
    }

    #[test]
    fn test_conservation_between_bounded_accounts() {
        let directory = Directory::new(vec![
            AccountProfile::bounded("ana", "Ana", "1111", 100),
            AccountProfile::bounded("ben", "Ben", "2222", 40),
        ])
        .unwrap();
        let mut ledger = Ledger::new(
            directory,
            stock_catalog(),
            LedgerSnapshot::default(),
            Box::new(NullSink),
        )
        .unwrap();

        let ana = AccountId::new("ana");
        let ben = AccountId::new("ben");

        let total_before = ledger.balance(&ana).unwrap().credits().unwrap()
            + ledger.balance(&ben).unwrap().credits().unwrap();

        ledger.transfer(&ana, &ben, Credits::new(35), date()).unwrap();

        assert_eq!(ledger.balance(&ana).unwrap(), Balance::bounded(65));
        assert_eq!(ledger.balance(&ben).unwrap(), Balance::bounded(75));

        let total_after = ledger.balance(&ana).unwrap().credits().unwrap()
            + ledger.balance(&ben).unwrap().credits().unwrap();
        assert_eq!(total_before, total_after);
    }

    #[test]
    fn test_transfer_appends_exactly_one_entry_per_side() {
        let mut ledger = stock_ledger();

        ledger
            .transfer(&joe(), &kristen(), Credits::new(50), date())
            .unwrap();

        assert_eq!(ledger.history(&joe()).len(), 1);
        assert_eq!(ledger.history(&kristen()).len(), 1);
    }

    #[test]
    fn test_sink_fires_only_on_success() {
        let (mut ledger, count) = counting_ledger();

        ledger.redeem(&joe(), "One hole", date()).unwrap();
        assert_eq!(count.get(), 1);

        ledger
            .transfer(&joe(), &kristen(), Credits::new(7), date())
            .unwrap();
        assert_eq!(count.get(), 2);

        let _ = ledger.redeem(&joe(), "Nonexistent Item", date());
        let _ = ledger.transfer(&joe(), &kristen(), Credits::new(10_000), date());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_sink_failure_does_not_unwind_commit() {
        struct FailingSink;
        impl PersistenceSink for FailingSink {
            fn persist(&self, _snapshot: &LedgerSnapshot) -> KioskResult<()> {
                Err(KioskError::Storage("disk full".into()))
            }
        }

        let mut ledger = Ledger::new(
            stock_directory(),
            stock_catalog(),
            LedgerSnapshot::default(),
            Box::new(FailingSink),
        )
        .unwrap();

        let outcome = ledger.redeem(&joe(), "One hole", date()).unwrap();
        assert_eq!(outcome.balance, Balance::bounded(257));
        assert_eq!(ledger.balance(&joe()).unwrap(), Balance::bounded(257));
    }

    #[test]
    fn test_balances_in_directory_order() {
        let ledger = stock_ledger();
        let balances = ledger.balances();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0], (kristen(), Balance::Unlimited));
        assert_eq!(balances[1], (joe(), Balance::bounded(260)));
    }
}
