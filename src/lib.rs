//! Mini Cache - a lightweight concurrent in-memory cache
//!
//! Provides generic key/value storage with optional per-entry TTL and lazy
//! (on-read) expiration. Reads never mutate the cache; expired entries stay
//! in storage until an explicit [`TtlCache::cleanup`] sweep or a targeted
//! removal touches them.
//!
//! # Example
//! ```
//! use mini_cache::{Lookup, TtlCache};
//! use std::time::Duration;
//!
//! let cache: TtlCache<String, u32> = TtlCache::new();
//!
//! cache.put("answer".to_string(), 42, None);
//! cache.put("session".to_string(), 7, Some(Duration::from_secs(60)));
//!
//! assert_eq!(cache.get(&"answer".to_string()), Lookup::Hit(42));
//! assert_eq!(cache.get(&"missing".to_string()), Lookup::Miss);
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod tasks;

pub use cache::{Entry, Lookup, TtlCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use tasks::spawn_cleanup_task;
