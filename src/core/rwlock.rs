//! Read/write-lock-guarded balances
//!
//! Readers (`balance`, `transaction_count`, `last_updated`) take the
//! shared lock and may proceed concurrently with each other; `add` and
//! `subtract` take the exclusive lock and serialize against everything.
//! Same correctness argument as the mutex strategy, with cheaper reads
//! under read-heavy workloads.
//!
//! Poisoned locks are recovered via the inner value, as in the mutex
//! strategy.

use crate::core::clock::unix_nanos;
use crate::core::traits::Account;
use crate::types::BalanceError;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Simple-tier balance guarded by a read/write lock
#[derive(Debug, Default)]
pub struct RwLockAccount {
    /// The running balance
    value: RwLock<i64>,
}

impl RwLockAccount {
    /// Create a zeroed account
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, i64> {
        self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, i64> {
        self.value.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Account for RwLockAccount {
    fn balance(&self) -> i64 {
        *self.read()
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
        *self.write() += amount;
    }

    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        let mut value = self.write();
        if *value - amount < 0 {
            return Err(BalanceError::InsufficientFunds);
        }
        *value -= amount;
        Ok(())
    }
}

/// Balance plus metadata, guarded together
#[derive(Debug, Default)]
struct FullState {
    value: i64,
    transactions: i64,
    updated: i64,
}

/// Full-tier balance guarded by a read/write lock
///
/// All three fields live behind the same lock, so readers always observe
/// the balance and its metadata as a consistent pair while still reading
/// concurrently with each other.
#[derive(Debug, Default)]
pub struct RwLockFullAccount {
    state: RwLock<FullState>,
}

impl RwLockFullAccount {
    /// Create a zeroed account
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, FullState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FullState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Account for RwLockFullAccount {
    fn balance(&self) -> i64 {
        self.read().value
    }

    fn transaction_count(&self) -> i64 {
        self.read().transactions
    }

    fn last_updated(&self) -> i64 {
        self.read().updated
    }

    fn add(&self, amount: i64) {
        let mut state = self.write();
        state.value += amount;
        state.transactions += 1;
        state.updated = unix_nanos();
    }

    fn subtract(&self, amount: i64) -> Result<(), BalanceError> {
        let mut state = self.write();
        if state.value - amount < 0 {
            return Err(BalanceError::InsufficientFunds);
        }
        state.value -= amount;
        state.transactions += 1;
        state.updated = unix_nanos();
        Ok(())
    }
}
