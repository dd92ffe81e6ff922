//! Error types for the bucketq library.
//!
//! ## Key Components
//!
//! - [`StaleKeyError`]: Returned when a strict removal or re-prioritization
//!   names a `(node, weight)` pair that is not a current membership.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use bucketq::ds::WeightBuckets;
//!
//! let mut queue = WeightBuckets::new();
//! queue.insert(7, 5);
//!
//! // Re-prioritizing a node at a weight it does not occupy is rejected
//! // instead of silently duplicating the node across two buckets.
//! let err = queue.update(7, 9, 3).unwrap_err();
//! assert!(err.to_string().contains("not queued"));
//! assert_eq!(queue.len(), 1);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// StaleKeyError
// ---------------------------------------------------------------------------

/// Error returned when a `(node, weight)` membership does not exist.
///
/// Produced by [`WeightBuckets::remove`](crate::ds::WeightBuckets::remove) and
/// [`WeightBuckets::update`](crate::ds::WeightBuckets::update) when the caller
/// passes a weight the node does not currently occupy. Carries the offending
/// pair so callers can report which bookkeeping went stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleKeyError {
    node: i32,
    weight: i32,
}

impl StaleKeyError {
    /// Creates a new `StaleKeyError` for the given pair.
    #[inline]
    pub fn new(node: i32, weight: i32) -> Self {
        Self { node, weight }
    }

    /// Returns the node identifier that was named.
    #[inline]
    pub fn node(&self) -> i32 {
        self.node
    }

    /// Returns the weight the node was claimed to occupy.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }
}

impl fmt::Display for StaleKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {} is not queued at weight {}", self.node, self.weight)
    }
}

impl std::error::Error for StaleKeyError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal queue invariants are violated.
///
/// Produced by the debug-only
/// [`WeightBuckets::check_invariants`](crate::ds::WeightBuckets::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- StaleKeyError ----------------------------------------------------

    #[test]
    fn stale_key_display_names_the_pair() {
        let err = StaleKeyError::new(7, 5);
        assert_eq!(err.to_string(), "node 7 is not queued at weight 5");
    }

    #[test]
    fn stale_key_accessors() {
        let err = StaleKeyError::new(-3, 42);
        assert_eq!(err.node(), -3);
        assert_eq!(err.weight(), 42);
    }

    #[test]
    fn stale_key_copy_and_eq() {
        let a = StaleKeyError::new(1, 2);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn stale_key_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<StaleKeyError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("membership count mismatch");
        assert_eq!(err.to_string(), "membership count mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
