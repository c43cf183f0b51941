//! Background Tasks Module
//!
//! Optional caller-owned maintenance tasks. The cache core never spawns
//! threads or timers on its own; expired entries accumulate until something
//! calls [`TtlCache::cleanup`](crate::TtlCache::cleanup), and this module
//! provides the periodic driver for callers that want one.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
