//! Configuration Module
//!
//! Tunables for cache construction and for the periodic cleanup task.

use std::time::Duration;

/// Cache configuration parameters.
///
/// # Example
/// ```
/// use mini_cache::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::new()
///     .with_initial_capacity(1024)
///     .with_cleanup_interval(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Capacity hint for the underlying storage (0 = no preallocation)
    pub initial_capacity: usize,
    /// Interval between runs of the periodic cleanup task
    pub cleanup_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            cleanup_interval: Duration::from_secs(60),
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage capacity hint.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the interval between cleanup runs.
    ///
    /// Only consulted by
    /// [`spawn_cleanup_task`](crate::tasks::spawn_cleanup_task); the cache
    /// core itself never sweeps on its own.
    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }
}
