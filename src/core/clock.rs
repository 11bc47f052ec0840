//! Timestamp source for full-tier metadata
//!
//! Full-tier implementations record the wall-clock time of the latest
//! successful mutation as Unix-epoch nanoseconds. Zero is reserved to mean
//! "never updated", matching the initial account state.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as Unix-epoch nanoseconds
///
/// A clock reading before the epoch collapses to zero rather than going
/// negative, keeping zero's "never updated" meaning unambiguous.
pub(crate) fn unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_nanos_is_positive_and_advances() {
        let first = unix_nanos();
        assert!(first > 0);

        // Successive readings never move backward.
        let second = unix_nanos();
        assert!(second >= first);
    }
}
