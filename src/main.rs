//! Balance Lab CLI
//!
//! Command-line demo that pressures one account implementation with
//! concurrent withdrawals and reports the outcome.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- cas
//! cargo run -- mutex --tier simple
//! cargo run -- unprotected --deposit 1000 --withdraw 25 --workers 32 --iterations 80
//! ```
//!
//! The program deposits the initial amount, spawns the requested number of
//! concurrent workers each attempting the configured number of
//! withdrawals, and prints the final balance together with the
//! success/failure tally. Running the `unprotected` strategy under enough
//! pressure prints a negative final balance, the lost-update race it
//! exists to demonstrate.

use rust_balance_lab::cli;
use rust_balance_lab::strategy;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let workers = args.worker_count();

    // Build the selected engine and seed it through the public contract
    let account = strategy::create_account(args.strategy, args.tier);
    account.add(args.deposit);

    // Drive it with concurrent withdrawal workers
    let report = strategy::run_contention(account.as_ref(), workers, args.iterations, args.withdraw);

    println!(
        "strategy: {:?} ({:?} tier), {} workers x {} iterations",
        args.strategy, args.tier, workers, args.iterations
    );
    println!(
        "deposited {}, attempted {} withdrawals of {}",
        args.deposit,
        report.attempts(),
        args.withdraw
    );
    println!(
        "successes: {}, failures: {}",
        report.successes, report.failures
    );
    println!(
        "final balance: {}, transactions: {}, last updated: {}",
        account.balance(),
        account.transaction_count(),
        account.last_updated()
    );

    if account.balance() < 0 {
        eprintln!("warning: balance went negative, the lost-update race fired");
    }
}
