//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single immutable cache entry.
///
/// Entries are never mutated in place: overwriting a key constructs a new
/// entry and swaps it into storage wholesale, so a reader holding a clone of
/// an entry always sees an internally consistent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The stored value
    value: V,
    /// Expiration deadline, None = no expiration
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry with an optional expiration deadline.
    pub fn new(value: V, expires_at: Option<Instant>) -> Self {
        Self { value, expires_at }
    }

    /// Returns a reference to the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry and returns the stored value.
    pub(crate) fn into_value(self) -> V {
        self.value
    }

    /// Returns the expiration deadline, if any.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    // == Is Expired ==
    /// Checks whether the entry is expired relative to `now`.
    ///
    /// Boundary condition: an entry is expired only when `now` is *strictly
    /// after* its deadline. At the exact deadline instant the entry is still
    /// live, so a zero TTL stays readable until the clock moves at all.
    ///
    /// # Returns
    /// - `true` if a deadline is set and `now` is past it
    /// - `false` if there is no deadline (never expires) or it has not passed
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now > deadline,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining TTL relative to `now`, or None if the entry has
    /// no deadline.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` once the deadline has passed
    /// - `Some(remaining)` while the deadline is still ahead
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
