//! CAS-protected atomic balances
//!
//! These implementations keep subtraction lock-free by validating the
//! floor check against the exact value being replaced: `subtract` loads
//! the balance, computes the candidate, rejects if it would go negative,
//! and then attempts a compare-exchange from the loaded value to the
//! candidate. If another writer got there first the whole
//! read-check-swap is retried from a fresh load, so no subtraction can
//! ever commit against a stale balance.
//!
//! The retry loop has no fixed iteration bound; progress follows from
//! compare-exchange fairness on the underlying platform. Retries are
//! invisible to callers.

use crate::core::clock::unix_nanos;
use crate::core::traits::Account;
use crate::types::BalanceError;
use std::sync::atomic::{AtomicI64, Ordering};

/// Simple-tier balance protected by compare-exchange
///
/// Keeps only the balance value while guaranteeing atomic
/// read-modify-write semantics for subtraction.
#[derive(Debug, Default)]
pub struct CasAccount {
    /// The running balance
    value: AtomicI64,
}

impl CasAccount {
    /// Create a zeroed account
    pub fn new() -> Self {
        Self::default()
    }
}

impl Account for CasAccount {
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

    /// Decrement the balance through a compare-exchange retry loop
    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        loop {
            let current = self.value.load(Ordering::SeqCst);
            let next = current - amount;
            if next < 0 {
                return Err(BalanceError::InsufficientFunds);
            }

            if self
                .value
                .compare_exchange(current, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return Ok(());
            }
        }
    }
}

/// Full-tier balance protected by compare-exchange
///
/// The balance itself carries the same guarantee as [`CasAccount`].
/// Metadata is updated immediately *after* the winning compare-exchange
/// rather than inside it, so a concurrent reader can briefly observe a
/// fresh balance paired with a stale transaction count or timestamp.
/// That relaxation is deliberate: the metadata is observability data,
/// not a transactional ledger, and bundling it would cost the
/// lock-freedom this variant exists to demonstrate.
#[derive(Debug, Default)]
pub struct CasFullAccount {
    /// The running balance
    value: AtomicI64,
    /// Count of successful mutations
    transactions: AtomicI64,
    /// Unix-epoch nanoseconds of the latest successful mutation
    updated: AtomicI64,
}

impl CasFullAccount {
    /// Create a zeroed account
    pub fn new() -> Self {
        Self::default()
    }
}

impl Account for CasFullAccount {
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

    /// Decrement via compare-exchange, then record metadata
    ///
    /// The metadata writes trail the winning swap; see the type-level
    /// docs for the visibility window this opens.
    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        loop {
            let current = self.value.load(Ordering::SeqCst);
            let next = current - amount;
            if next < 0 {
                return Err(BalanceError::InsufficientFunds);
            }

            if self
                .value
                .compare_exchange(current, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                self.transactions.fetch_add(1, Ordering::SeqCst);
                self.updated.store(unix_nanos(), Ordering::SeqCst);
                return Ok(());
            }
        }
    }
}
