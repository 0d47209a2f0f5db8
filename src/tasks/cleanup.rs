//! TTL Cleanup Task
//!
//! Background task that periodically removes expired in-memory cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::InMemoryCache;

/// Spawns a background task that periodically purges expired entries.
///
/// Expired entries are already invisible to reads; this only reclaims their
/// memory. The returned handle is aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = InMemoryCache::new(10_000);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: InMemoryCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheClient;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = InMemoryCache::new(100);
        cache
            .set_ex("valExpireKey", "SomeValue", Duration::from_secs(1))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(cache.len().await, 0, "Expired entry should have been purged");
        assert_eq!(cache.stats().await.expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = InMemoryCache::new(100);
        cache
            .set_ex("long_lived", "SomeValue", Duration::from_secs(3600))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.len().await, 1, "Valid entry should not be removed");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = InMemoryCache::new(100);

        let handle = spawn_cleanup_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
