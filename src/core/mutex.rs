//! Mutex-guarded balances
//!
//! A single exclusive lock serializes every operation, including reads.
//! This is the simplest strategy to reason about: the floor check and the
//! mutation always see the same value because nothing else can run between
//! them. It also carries the highest contention cost.
//!
//! A poisoned lock means another caller panicked mid-operation; these
//! implementations recover the inner value rather than propagating the
//! poison, matching the contract's promise that reads and `add` cannot
//! fail.

use crate::core::clock::unix_nanos;
use crate::core::traits::Account;
use crate::types::BalanceError;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Simple-tier balance guarded by a standard mutex
#[derive(Debug, Default)]
pub struct MutexAccount {
    /// The running balance
    value: Mutex<i64>,
}

impl MutexAccount {
    /// Create a zeroed account
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, i64> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Account for MutexAccount {
    fn balance(&self) -> i64 {
        *self.lock()
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
        *self.lock() += amount;
    }

    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        let mut value = self.lock();
        if *value - amount < 0 {
            return Err(BalanceError::InsufficientFunds);
        }
        *value -= amount;
        Ok(())
    }
}

/// Balance plus metadata, updated as one unit under the lock
#[derive(Debug, Default)]
struct FullState {
    value: i64,
    transactions: i64,
    updated: i64,
}

/// Full-tier balance guarded by a standard mutex
///
/// Balance, transaction count, and timestamp live behind the same lock,
/// so every mutation updates all three as a single atomic unit relative
/// to any reader, the strongest metadata coupling of the eight variants,
/// shared with [`RwLockFullAccount`](crate::core::rwlock::RwLockFullAccount).
#[derive(Debug, Default)]
pub struct MutexFullAccount {
    state: Mutex<FullState>,
}

impl MutexFullAccount {
    /// Create a zeroed account
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FullState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Account for MutexFullAccount {
    fn balance(&self) -> i64 {
        self.lock().value
    }

    fn transaction_count(&self) -> i64 {
        self.lock().transactions
    }

    fn last_updated(&self) -> i64 {
        self.lock().updated
    }

    fn add(&self, amount: i64) {
        let mut state = self.lock();
        state.value += amount;
        state.transactions += 1;
        state.updated = unix_nanos();
    }

    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        let mut state = self.lock();
        if state.value - amount < 0 {
            return Err(BalanceError::InsufficientFunds);
        }
        state.value -= amount;
        state.transactions += 1;
        state.updated = unix_nanos();
        Ok(())
    }
}
