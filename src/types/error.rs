//! Error types for the balance lab
//!
//! The account contract has exactly one failure mode: a `subtract` whose
//! result would drop the balance below zero. It is a pure validation
//! failure, not a transient condition; callers should treat it as final
//! for that attempt. No other operation can fail.

use thiserror::Error;

/// Error type shared by every balance implementation
///
/// The single variant identifies the condition and nothing more; the
/// contract attaches no payload to it. The core performs no logging,
/// wrapping, or retry: the error is returned synchronously to the
/// immediate caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The requested subtraction would push the balance below zero
    ///
    /// The account state (balance and, on full-tier variants, transaction
    /// count and last-updated timestamp) is left untouched when this is
    /// returned.
    #[error("insufficient funds")]
    InsufficientFunds,
}
