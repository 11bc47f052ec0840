//! Types module
//!
//! Contains core data structures shared throughout the crate:
//! - `error`: the account error taxonomy

pub mod error;

pub use error::BalanceError;
