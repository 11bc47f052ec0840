//! Concurrent withdrawal driver
//!
//! A reusable workload that pressures a shared account with concurrent
//! `subtract` calls, the same shape the throughput benchmarks and the
//! contract tests use. The driver consumes the account purely through the
//! [`Account`] contract; outcomes are tallied with atomics so the tally
//! itself never perturbs the strategy under test with extra locking.

use crate::core::Account;
use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;

/// Outcome of a contention run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentionReport {
    /// Withdrawals that committed
    pub successes: i64,
    /// Withdrawals rejected with insufficient funds
    pub failures: i64,
}

impl ContentionReport {
    /// Total withdrawal attempts; always `workers * iterations`
    pub fn attempts(&self) -> i64 {
        self.successes + self.failures
    }
}

/// Pressure `account` with `workers` threads each issuing `iterations`
/// `subtract(amount)` calls
///
/// Blocks until every worker finishes. On a sound engine the successes
/// are bounded by the available balance; on the unprotected engine the
/// run is expected to drive the balance negative under enough pressure.
pub fn run_contention(
    account: &dyn Account,
    workers: usize,
    iterations: usize,
    amount: i64,
) -> ContentionReport {
    let successes = AtomicI64::new(0);
    let failures = AtomicI64::new(0);

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                for _ in 0..iterations {
                    match account.subtract(amount) {
                        Ok(()) => successes.fetch_add(1, Ordering::Relaxed),
                        Err(_) => failures.fetch_add(1, Ordering::Relaxed),
                    };
                }
            });
        }
    });

    ContentionReport {
        successes: successes.into_inner(),
        failures: failures.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MutexAccount;

    #[test]
    fn test_attempts_always_add_up() {
        let account = MutexAccount::new();
        account.add(1000);

        let report = run_contention(&account, 32, 80, 25);
        assert_eq!(report.attempts(), 32 * 80);
    }

    #[test]
    fn test_sound_engine_exhausts_exactly_the_balance() {
        // 1000 / 25 = 40 withdrawals can succeed; everything else fails.
        let account = MutexAccount::new();
        account.add(1000);

        let report = run_contention(&account, 32, 80, 25);
        assert_eq!(report.successes, 40);
        assert_eq!(report.failures, 32 * 80 - 40);
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_zero_workers_is_a_no_op() {
        let account = MutexAccount::new();
        account.add(100);

        let report = run_contention(&account, 0, 80, 25);
        assert_eq!(report.attempts(), 0);
        assert_eq!(account.balance(), 100);
    }
}
