//! Benchmark suite comparing the synchronization strategies
//!
//! This benchmark drives every strategy and tier combination through the
//! three workloads the lab cares about, using the divan benchmarking
//! framework:
//!
//! - `add`: write-only pressure on the balance word
//! - `add_with_read`: a read-before-write cycle, deriving each increment
//!   from the current balance
//! - `read_only`: pure reads, where the rwlock strategy should shine and
//!   the mutex strategy pays for serializing readers
//!
//! Each workload runs single-threaded and contended so the per-operation
//! cost and the contention cost show up separately.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! The unprotected strategy appears here too: its `add` and read paths are
//! plain atomics, so it doubles as the uncontended-atomics baseline. Its
//! artificial subtract delay never runs in these workloads.

use divan::Bencher;
use rust_balance_lab::cli::{StrategyType, Tier};
use rust_balance_lab::strategy::create_account;
use rust_balance_lab::Account;

fn main() {
    divan::main();
}

/// Every strategy and tier combination under test
const VARIANTS: [&str; 8] = [
    "unprotected-simple",
    "unprotected-full",
    "cas-simple",
    "cas-full",
    "mutex-simple",
    "mutex-full",
    "rwlock-simple",
    "rwlock-full",
];

/// Construct a fresh account for the given benchmark variant
///
/// Keeping construction here avoids repeating match logic and ensures each
/// sub-benchmark gets a clean instance.
fn account_for(variant: &str) -> Box<dyn Account> {
    let (strategy, tier) = match variant {
        "unprotected-simple" => (StrategyType::Unprotected, Tier::Simple),
        "unprotected-full" => (StrategyType::Unprotected, Tier::Full),
        "cas-simple" => (StrategyType::Cas, Tier::Simple),
        "cas-full" => (StrategyType::Cas, Tier::Full),
        "mutex-simple" => (StrategyType::Mutex, Tier::Simple),
        "mutex-full" => (StrategyType::Mutex, Tier::Full),
        "rwlock-simple" => (StrategyType::Rwlock, Tier::Simple),
        "rwlock-full" => (StrategyType::Rwlock, Tier::Full),
        _ => (StrategyType::Rwlock, Tier::Simple),
    };
    create_account(strategy, tier)
}

/// Write-only workload: every iteration is a single `add(1)`
#[divan::bench(args = VARIANTS, threads = [1, 4])]
fn add(bencher: Bencher, variant: &str) {
    let account = account_for(variant);

    bencher.bench(|| account.add(1));
}

/// Read-before-write workload: derive each increment from the balance
#[divan::bench(args = VARIANTS, threads = [1, 4])]
fn add_with_read(bencher: Bencher, variant: &str) {
    let account = account_for(variant);

    bencher.bench(|| {
        let current = account.balance();
        let increment = if current > 100 {
            (current / 100) + 1
        } else {
            current + 1
        };
        account.add(increment);
    });
}

/// Read-only workload over a primed account
#[divan::bench(args = VARIANTS, threads = [1, 4])]
fn read_only(bencher: Bencher, variant: &str) {
    let account = account_for(variant);

    // Prime the value so reads do not sit on the zero edge.
    account.add(1);

    bencher.bench(|| divan::black_box(account.balance()));
}
