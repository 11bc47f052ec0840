//! Balance Synchronization Lab
//! # Overview
//!
//! This library implements one account contract eight times (four
//! synchronization strategies by two feature tiers) so the correctness and
//! throughput trade-offs between the strategies can be measured against
//! identical semantics.
//!
//! # Architecture
//!
//! The crate is organized into several key components:
//!
//! - [`types`] - Core data types (the error taxonomy)
//! - [`cli`] - CLI argument parsing for the demo binary
//! - [`core`] - The account contract and its implementations:
//!   - [`core::traits`] - the `Account` contract
//!   - [`core::unprotected`] - unprotected atomics (intentionally racy)
//!   - [`core::cas`] - compare-exchange protected atomics
//!   - [`core::mutex`] - a single exclusive lock
//!   - [`core::rwlock`] - shared reads, exclusive writes
//! - [`strategy`] - Runtime strategy selection and the contention driver
//!
//! # Strategies
//!
//! - **Unprotected**: atomic fields, but `subtract` floor-checks a stale
//!   snapshot across an artificial delay. Two concurrent subtractors can
//!   both pass the check and drive the balance negative. This is the documented
//!   lost-update defect this variant exists to demonstrate.
//! - **CAS**: a compare-exchange retry loop validates the floor check
//!   against the exact value being replaced. Sound and lock-free.
//! - **Mutex**: every operation, reads included, takes one exclusive lock.
//!   Sound and fully serialized.
//! - **RwLock**: readers share the lock, writers exclude everyone. Sound,
//!   with cheaper reads under read-heavy load.
//!
//! # Tiers
//!
//! Each strategy comes in two tiers. The **simple** tier tracks only the
//! balance; its metadata accessors always return zero. The **full** tier
//! also maintains a transaction count and a last-updated timestamp under
//! the same concurrency discipline as the balance.

// Module declarations
pub mod cli;
pub mod core;
pub mod strategy;
pub mod types;

pub use crate::core::{
    Account, CasAccount, CasFullAccount, MutexAccount, MutexFullAccount, RwLockAccount,
    RwLockFullAccount, UnprotectedAccount, UnprotectedFullAccount,
};
pub use strategy::{create_account, run_contention, ContentionReport};
pub use types::BalanceError;
