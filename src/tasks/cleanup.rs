//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps. The cache
/// is sharded internally, so a sweep never blocks readers of unaffected
/// shards.
///
/// # Arguments
/// * `cache` - shared cache instance to sweep
/// * `interval` - time between cleanup runs (see
///   [`CacheConfig::cleanup_interval`](crate::CacheConfig))
///
/// # Returns
/// A `JoinHandle` for the spawned task; abort it during shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(TtlCache::<String, String>::new());
/// let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V>(cache: Arc<TtlCache<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
