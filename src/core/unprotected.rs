//! Unprotected atomic balances, the intentionally incorrect strategy
//!
//! These implementations use atomic loads and adds for every field, which
//! looks safe at a glance, but `subtract` performs a non-atomic
//! read-check-write sequence: it loads the balance, sleeps for a race
//! window, floor-checks against the *stale* loaded value, then subtracts.
//! Two concurrent subtractors can both pass the check against the same
//! stale value and both commit, driving the balance negative.
//!
//! This lost-update race is the documented defect and the whole point of
//! the variant: it is the negative example the correct strategies are
//! measured against. Do not "fix" it. The race window is configurable so
//! the race reproduces reliably even on fast hardware.

use crate::core::clock::unix_nanos;
use crate::core::traits::Account;
use crate::types::BalanceError;
use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;
use std::time::Duration;

/// Default width of the artificial delay inside `subtract`
///
/// Wide enough for concurrent subtractors to overlap their stale reads on
/// any realistic machine, narrow enough to keep demonstration runs quick.
pub const DEFAULT_RACE_WINDOW: Duration = Duration::from_micros(100);

/// Simple-tier balance with deliberately unprotected subtraction
///
/// Tracks only the balance value. `add` is a single atomic add and is
/// sound; `subtract` is the racy read-check-write described in the module
/// docs.
#[derive(Debug)]
pub struct UnprotectedAccount {
    /// The running balance
    value: AtomicI64,
    /// Artificial delay between the stale load and the floor check
    race_window: Duration,
}

impl UnprotectedAccount {
    /// Create a zeroed account with the default race window
    pub fn new() -> Self {
        Self::with_race_window(DEFAULT_RACE_WINDOW)
    }

    /// Create a zeroed account with a custom race window
    ///
    /// A wider window makes the lost-update race easier to reproduce; a
    /// zero window removes the amplifier but not the race itself.
    pub fn with_race_window(race_window: Duration) -> Self {
        UnprotectedAccount {
            value: AtomicI64::new(0),
            race_window,
        }
    }
}

impl Default for UnprotectedAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl Account for UnprotectedAccount {
    fn balance(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    /// Always zero; the simple tier does not track metadata
    fn transaction_count(&self) -> i64 {
        0
    }

    /// Always zero; the simple tier does not record timestamps
    fn last_updated(&self) -> i64 {
        0
    }

    fn add(&self, amount: i64) {
        self.value.fetch_add(amount, Ordering::SeqCst);
    }

    /// Decrement without protection, leaving room for lost updates
    ///
    /// The floor check validates a snapshot that may be stale by the time
    /// the subtraction commits. Under contention this drives the balance
    /// negative without returning an error. This is the documented defect.
    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        let current = self.value.load(Ordering::SeqCst);
        thread::sleep(self.race_window);
        if current - amount < 0 {
            return Err(BalanceError::InsufficientFunds);
        }

        self.value.fetch_sub(amount, Ordering::SeqCst);
        Ok(())
    }
}

/// Full-tier balance with deliberately unprotected subtraction
///
/// Mirrors the feature set of the other full-tier implementations
/// (transaction count and last-updated timestamp) but keeps the racy
/// subtract so the lost-update failure mode stays observable alongside
/// the metadata.
#[derive(Debug)]
pub struct UnprotectedFullAccount {
    /// The running balance
    value: AtomicI64,
    /// Count of successful mutations
    transactions: AtomicI64,
    /// Unix-epoch nanoseconds of the latest successful mutation
    updated: AtomicI64,
    /// Artificial delay between the stale load and the floor check
    race_window: Duration,
}

impl UnprotectedFullAccount {
    /// Create a zeroed account with the default race window
    pub fn new() -> Self {
        Self::with_race_window(DEFAULT_RACE_WINDOW)
    }

    /// Create a zeroed account with a custom race window
    pub fn with_race_window(race_window: Duration) -> Self {
        UnprotectedFullAccount {
            value: AtomicI64::new(0),
            transactions: AtomicI64::new(0),
            updated: AtomicI64::new(0),
            race_window,
        }
    }
}

impl Default for UnprotectedFullAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl Account for UnprotectedFullAccount {
    fn balance(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    fn transaction_count(&self) -> i64 {
        self.transactions.load(Ordering::SeqCst)
    }

    fn last_updated(&self) -> i64 {
        self.updated.load(Ordering::SeqCst)
    }

    fn add(&self, amount: i64) {
        self.value.fetch_add(amount, Ordering::SeqCst);
        self.transactions.fetch_add(1, Ordering::SeqCst);
        self.updated.store(unix_nanos(), Ordering::SeqCst);
    }

    /// Decrement without protection, leaving room for lost updates
    ///
    /// See [`UnprotectedAccount::subtract`]; this variant additionally
    /// records metadata after the racy subtraction commits.
    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        let current = self.value.load(Ordering::SeqCst);
        thread::sleep(self.race_window);
        if current - amount < 0 {
            return Err(BalanceError::InsufficientFunds);
        }

        self.value.fetch_sub(amount, Ordering::SeqCst);
        self.transactions.fetch_add(1, Ordering::SeqCst);
        self.updated.store(unix_nanos(), Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    #[test]
    fn test_new_account_is_zeroed() {
        let account = UnprotectedAccount::new();
        assert_eq!(account.balance(), 0);
        assert_eq!(account.transaction_count(), 0);
        assert_eq!(account.last_updated(), 0);
    }

    #[test]
    fn test_sequential_add_and_subtract() {
        // Sequential callers never hit the race, so the stale snapshot is
        // always current and the variant behaves like a correct one.
        let account = UnprotectedAccount::with_race_window(Duration::ZERO);
        account.add(1000);
        for _ in 0..500 {
            account.subtract(50).expect("sequential subtract failed");
        }
        assert_eq!(account.balance(), 750);
    }

    #[test]
    fn test_subtract_past_balance_is_rejected() {
        let account = UnprotectedAccount::with_race_window(Duration::ZERO);
        account.add(100);
        assert_eq!(
            account.subtract(101),
            Err(BalanceError::InsufficientFunds)
        );
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn test_simple_tier_suppresses_metadata() {
        let account = UnprotectedAccount::with_race_window(Duration::ZERO);
        account.add(10);
        account.subtract(5).unwrap();
        assert_eq!(account.transaction_count(), 0);
        assert_eq!(account.last_updated(), 0);
    }

    #[test]
    fn test_lost_update_race_goes_negative() {
        // Two subtractors aligned on a barrier both load the same balance,
        // both pass the floor check against it, and both commit.
        let account = UnprotectedAccount::with_race_window(Duration::from_millis(10));
        account.add(25);

        let barrier = Barrier::new(2);
        std::thread::scope(|scope| {
            for _ in 0..2 {
                scope.spawn(|| {
                    barrier.wait();
                    let _ = account.subtract(25);
                });
            }
        });

        assert_eq!(account.balance(), -25);
    }

    #[test]
    fn test_full_tier_records_metadata() {
        let account = UnprotectedFullAccount::with_race_window(Duration::ZERO);

        account.add(1000);
        assert_eq!(account.transaction_count(), 1);
        let after_add = account.last_updated();
        assert!(after_add > 0);

        account.subtract(400).unwrap();
        assert_eq!(account.balance(), 600);
        assert_eq!(account.transaction_count(), 2);
        assert!(account.last_updated() >= after_add);
    }

    #[test]
    fn test_full_tier_rejection_leaves_metadata_untouched() {
        let account = UnprotectedFullAccount::with_race_window(Duration::ZERO);
        account.add(50);
        let transactions = account.transaction_count();
        let updated = account.last_updated();

        assert!(account.subtract(500).is_err());
        assert_eq!(account.balance(), 50);
        assert_eq!(account.transaction_count(), transactions);
        assert_eq!(account.last_updated(), updated);
    }
}
