//! Runtime strategy selection
//!
//! This module implements the Strategy pattern for the balance lab: every
//! synchronization strategy and tier combination is selected at
//! construction time through a factory, never via runtime type inspection.
//! Callers interact with the chosen engine exclusively through the
//! [`Account`] contract.

use crate::cli::{StrategyType, Tier};
use crate::core::{
    Account, CasAccount, CasFullAccount, MutexAccount, MutexFullAccount, RwLockAccount,
    RwLockFullAccount, UnprotectedAccount, UnprotectedFullAccount,
};

pub mod contention;

pub use contention::{run_contention, ContentionReport};

/// Create an account using the specified strategy and tier
///
/// This factory function selects and instantiates the matching engine at
/// runtime. Every engine starts zeroed: balance 0, transaction count 0,
/// last-updated 0 ("never updated").
///
/// # Arguments
///
/// * `strategy` - The synchronization strategy to use
/// * `tier` - `Simple` for balance only, `Full` for balance plus metadata
///
/// # Returns
///
/// A boxed trait object implementing the [`Account`] contract
pub fn create_account(strategy: StrategyType, tier: Tier) -> Box<dyn Account> {
    match (strategy, tier) {
        (StrategyType::Unprotected, Tier::Simple) => Box::new(UnprotectedAccount::new()),
        (StrategyType::Unprotected, Tier::Full) => Box::new(UnprotectedFullAccount::new()),
        (StrategyType::Cas, Tier::Simple) => Box::new(CasAccount::new()),
        (StrategyType::Cas, Tier::Full) => Box::new(CasFullAccount::new()),
        (StrategyType::Mutex, Tier::Simple) => Box::new(MutexAccount::new()),
        (StrategyType::Mutex, Tier::Full) => Box::new(MutexFullAccount::new()),
        (StrategyType::Rwlock, Tier::Simple) => Box::new(RwLockAccount::new()),
        (StrategyType::Rwlock, Tier::Full) => Box::new(RwLockFullAccount::new()),
    }
}
