//! The account contract shared by every synchronization strategy
//!
//! This module defines the trait abstraction that allows the eight balance
//! implementations (four strategies by two tiers) to be used
//! interchangeably. Callers hold exactly one concrete engine through this
//! trait and invoke operations directly; engines never call each other or
//! share state.

use crate::types::BalanceError;

/// A concurrently-mutated account balance
///
/// Implementations differ only in the concurrency discipline used to
/// preserve (or, for the unprotected strategy, deliberately fail to
/// preserve) the invariant that the balance never goes negative, and in
/// the consistency guarantees between the balance and its metadata.
///
/// All methods take `&self`; interior mutability is each implementation's
/// concern. Every implementation is safe to share across threads.
///
/// # Tiers
///
/// Full-tier implementations track a transaction count and a last-updated
/// timestamp alongside the balance, maintained under the same discipline
/// as the balance itself. Simple-tier implementations track only the
/// balance and report zero for both metadata accessors.
pub trait Account: Send + Sync {
    /// Return the current balance
    ///
    /// Has no side effects and reflects a value that was valid at some
    /// point no earlier than the start of the call. Under the unprotected
    /// strategy the source of truth itself may be transiently inconsistent.
    fn balance(&self) -> i64;

    /// Report how many mutating operations have completed successfully
    ///
    /// Simple-tier implementations always return zero because metadata is
    /// not tracked.
    fn transaction_count(&self) -> i64;

    /// Return the Unix-epoch nanosecond timestamp of the latest successful
    /// mutation, or zero if none has occurred
    ///
    /// Simple-tier implementations always return zero because timestamps
    /// are not recorded.
    fn last_updated(&self) -> i64;

    /// Increase the balance by `amount`
    ///
    /// Always succeeds. Full-tier implementations also increment the
    /// transaction count and refresh the last-updated timestamp.
    /// Implementations treat negative amounts as undefined behavior;
    /// callers must not rely on any particular outcome.
    fn add(&self, amount: i64);

    /// Decrease the balance by `amount`, or fail if the result would be
    /// negative
    ///
    /// On success full-tier implementations also update their metadata.
    /// On rejection all state (balance, transaction count, and
    /// last-updated timestamp) is left untouched. Negative amounts are
    /// undefined behavior.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InsufficientFunds`] when the post-subtract
    /// balance would fall below zero.
    fn subtract(&self, amount: i64) -> Result<(), BalanceError>;
}
