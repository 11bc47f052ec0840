//! Core balance implementations
//!
//! This module contains the account contract and its eight implementations:
//! - `traits` - the `Account` contract every strategy satisfies
//! - `clock` - nanosecond timestamp source for full-tier metadata
//! - `unprotected` - unprotected atomics, the intentionally racy strategy
//! - `cas` - compare-exchange protected atomics, lock-free and sound
//! - `mutex` - a single exclusive lock around every operation
//! - `rwlock` - shared reads, exclusive writes

pub mod cas;
pub(crate) mod clock;
pub mod mutex;
pub mod rwlock;
pub mod traits;
pub mod unprotected;

pub use cas::{CasAccount, CasFullAccount};
pub use mutex::{MutexAccount, MutexFullAccount};
pub use rwlock::{RwLockAccount, RwLockFullAccount};
pub use traits::Account;
pub use unprotected::{UnprotectedAccount, UnprotectedFullAccount, DEFAULT_RACE_WINDOW};
