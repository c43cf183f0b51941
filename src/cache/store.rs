//! Cache Store Module
//!
//! Main cache engine combining sharded concurrent storage with lazy TTL
//! expiration. Reads are purely observational; stale entries are only
//! reclaimed by an explicit [`TtlCache::cleanup`] sweep, a targeted
//! [`TtlCache::remove`], or an overwrite.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use crate::cache::{Entry, Lookup};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;

// == TTL Cache ==
/// Concurrency-safe key/value cache with optional per-entry TTL.
///
/// Storage is a sharded [`DashMap`], so operations on unrelated keys do not
/// contend on a single lock. Operations on the same key are linearizable;
/// full-structure scans (`cleanup`, `clear`, `len`) proceed shard by shard
/// and observe each entry atomically, without whole-map isolation.
///
/// Values are cloned out on read: callers never hold references into
/// cache-internal storage.
pub struct TtlCache<K, V> {
    /// Key-value storage
    entries: DashMap<K, Entry<V>>,
    /// Time source for expiration decisions
    clock: Arc<dyn Clock>,
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for TtlCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
{
    // == Constructors ==
    /// Creates an empty cache driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache with storage pre-sized per `config`.
    pub fn with_config(config: &CacheConfig) -> Self {
        Self {
            entries: DashMap::with_capacity(config.initial_capacity),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates an empty cache reading time from the given clock.
    ///
    /// Intended for tests that drive expiration with a
    /// [`ManualClock`](crate::clock::ManualClock).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    // == Put ==
    /// Stores a key-value pair, unconditionally overwriting any existing
    /// entry for the key.
    ///
    /// With a TTL the entry expires once the clock moves strictly past
    /// `now + ttl`; without one it never expires. Always succeeds.
    pub fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| self.clock.now() + ttl);
        self.entries.insert(key, Entry::new(value, expires_at));
    }

    // == Get ==
    /// Looks up a key, distinguishing absence from staleness.
    ///
    /// This never mutates the cache: an expired entry is reported as
    /// [`Lookup::Expired`] but stays in storage (and keeps counting toward
    /// [`len`](Self::len)) until `cleanup` or `remove` reclaims it. A
    /// read-heavy workload therefore never pays for removal on its hot path.
    pub fn get(&self, key: &K) -> Lookup<V>
    where
        V: Clone,
    {
        match self.entries.get(key) {
            None => Lookup::Miss,
            Some(entry) => {
                if entry.is_expired_at(self.clock.now()) {
                    Lookup::Expired
                } else {
                    Lookup::Hit(entry.value().value().clone())
                }
            }
        }
    }

    /// Looks up a key, collapsing `Miss` and `Expired` to `None`.
    pub fn get_or_null(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.get(key).into_value()
    }

    /// Looks up a key, falling back to `default_fn` on a non-hit.
    ///
    /// `default_fn` is invoked lazily and its result is *not* stored.
    pub fn get_or_default(&self, key: &K, default_fn: impl FnOnce() -> V) -> V
    where
        V: Clone,
    {
        self.get_or_null(key).unwrap_or_else(default_fn)
    }

    // == Remove ==
    /// Deletes the entry for `key` if present.
    ///
    /// Returns the previous value only when that entry was still live at
    /// removal time. An expired entry is physically removed as a side
    /// effect, but its stale value is never surfaced; the return is `None`
    /// both for absent and for present-but-expired keys.
    pub fn remove(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let (_, entry) = self.entries.remove(key)?;
        if entry.is_expired_at(now) {
            None
        } else {
            Some(entry.into_value())
        }
    }

    // == Cleanup ==
    /// Removes every expired entry and returns how many were removed.
    ///
    /// The expiration boundary is a single timestamp captured once before
    /// the scan, so entries that reach their deadline mid-scan are treated
    /// as not yet expired. This is the cache's only O(n) operation and is
    /// never triggered implicitly; schedule it from outside, e.g. via
    /// [`spawn_cleanup_task`](crate::tasks::spawn_cleanup_task).
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let expired = entry.is_expired_at(now);
            if expired {
                removed += 1;
            }
            !expired
        });
        removed
    }

    // == Clear ==
    /// Removes all entries, live and expired alike.
    pub fn clear(&self) {
        self.entries.clear();
    }

    // == Length ==
    /// Returns the total entry count, live and expired combined, in O(1).
    ///
    /// Call [`cleanup`](Self::cleanup) first if only live entries should be
    /// counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is physically present, expired or not.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Get Or Compute ==
    /// Returns the live value for `key`, computing and caching it on a miss
    /// or on an expired entry.
    ///
    /// Fast path: a hit returns the existing value without invoking
    /// `compute_fn`. Slow path: `compute_fn` runs once, its result is stored
    /// under `ttl` and returned.
    ///
    /// The check-then-act is not atomic under concurrent access: two
    /// callers racing on the same absent key may both compute, and the later
    /// `put` wins. Callers needing at-most-once computation per key must
    /// layer their own per-key synchronization on top.
    pub fn get_or_compute(&self, key: K, ttl: Option<Duration>, compute_fn: impl FnOnce() -> V) -> V
    where
        V: Clone,
    {
        if let Some(value) = self.get_or_null(&key) {
            return value;
        }
        let value = compute_fn();
        self.put(key, value.clone(), ttl);
        value
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// A failing `compute_fn` propagates its error unchanged and caches
    /// nothing. The same non-atomicity caveat applies.
    pub fn try_get_or_compute<E>(
        &self,
        key: K,
        ttl: Option<Duration>,
        compute_fn: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E>
    where
        V: Clone,
    {
        if let Some(value) = self.get_or_null(&key) {
            return Ok(value);
        }
        let value = compute_fn()?;
        self.put(key, value.clone(), ttl);
        Ok(value)
    }
}
