use clap::{Parser, ValueEnum};

/// Drive a shared account balance with concurrent withdrawals
#[derive(Parser, Debug)]
#[command(name = "balance-lab")]
#[command(
    about = "Compare synchronization strategies on a concurrently-mutated account",
    long_about = None
)]
pub struct CliArgs {
    /// Synchronization strategy to exercise
    #[arg(
        value_name = "STRATEGY",
        help = "Strategy: 'unprotected' (intentionally racy), 'cas', 'mutex', or 'rwlock'"
    )]
    pub strategy: StrategyType,

    /// Feature tier of the account
    #[arg(
        long = "tier",
        value_name = "TIER",
        default_value = "full",
        help = "Tier: 'simple' (balance only) or 'full' (balance plus metadata)"
    )]
    pub tier: Tier,

    /// Initial deposit before the withdrawal workers start
    #[arg(
        long = "deposit",
        value_name = "AMOUNT",
        default_value_t = 1000,
        help = "Initial deposit amount"
    )]
    pub deposit: i64,

    /// Amount each withdrawal attempt subtracts
    #[arg(
        long = "withdraw",
        value_name = "AMOUNT",
        default_value_t = 25,
        help = "Amount per withdrawal attempt"
    )]
    pub withdraw: i64,

    /// Number of concurrent withdrawal workers
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of concurrent workers (default: logical CPU count)"
    )]
    pub workers: Option<usize>,

    /// Withdrawal attempts per worker
    #[arg(
        long = "iterations",
        value_name = "COUNT",
        default_value_t = 80,
        help = "Withdrawal attempts per worker"
    )]
    pub iterations: usize,
}

/// Available synchronization strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    /// Atomic operations without read-check-write protection (racy on purpose)
    Unprotected,
    /// Atomic operations with a compare-exchange retry loop
    Cas,
    /// A single exclusive lock around every operation
    Mutex,
    /// Shared reads, exclusive writes
    Rwlock,
}

/// Available feature tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Tier {
    /// Balance only
    Simple,
    /// Balance plus transaction count and last-updated timestamp
    Full,
}

impl CliArgs {
    /// Resolve the worker count, defaulting to the logical CPU count
    ///
    /// A zero value falls back to the default as well, so the contention
    /// run always has at least one worker.
    pub fn worker_count(&self) -> usize {
        match self.workers {
            Some(count) if count > 0 => count,
            _ => num_cpus::get(),
        }
    }
}
