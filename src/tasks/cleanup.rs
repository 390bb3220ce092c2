//! Expiry Sweep Task
//!
//! Periodically drops viewport entries whose TTL has passed. Lookups already
//! evict lazily; the sweep reclaims entries for viewports nobody revisits.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ViewportCache;

/// Spawns the sweep loop. Abort the returned handle on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(ViewportCache::<Pin>::default()));
/// let sweep = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep.abort();
/// ```
pub fn spawn_cleanup_task<P>(
    cache: Arc<RwLock<ViewportCache<P>>>,
    every: Duration,
) -> JoinHandle<()>
where
    P: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = every.as_millis() as u64, "starting viewport expiry sweep");

        loop {
            tokio::time::sleep(every).await;

            let (removed, remaining) = {
                let mut guard = cache.write().await;
                let removed = guard.cleanup_expired();
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "expired viewports swept");
            } else {
                debug!(remaining, "expiry sweep found nothing stale");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{BoundingBox, ZoomLevel};

    fn shared(ttl: Duration) -> Arc<RwLock<ViewportCache<u32>>> {
        Arc::new(RwLock::new(ViewportCache::new(ttl)))
    }

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = shared(Duration::from_millis(50));
        cache
            .write()
            .await
            .set(&BoundingBox::new(41.0, 41.1, 29.0, 29.1), ZoomLevel(13.0), vec![1]);

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(100));
        tokio::time::sleep(Duration::from_millis(350)).await;

        // gone without any lookup
        assert_eq!(cache.read().await.len(), 0);
        assert_eq!(cache.read().await.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_valid_entries() {
        let cache = shared(Duration::from_secs(3600));
        let bounds = BoundingBox::new(41.0, 41.1, 29.0, 29.1);
        cache.write().await.set(&bounds, ZoomLevel(13.0), vec![7]);

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(
            cache.write().await.get(&bounds, ZoomLevel(13.0)),
            Some(vec![7])
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_can_be_aborted() {
        let handle = spawn_cleanup_task(shared(Duration::from_secs(1)), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
