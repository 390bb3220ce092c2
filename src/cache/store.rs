//! Viewport Cache Module
//!
//! Main cache engine: grid-keyed HashMap storage with lazy TTL expiry and an
//! optional LRU capacity bound.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{
    viewport_key, BoundingBox, CacheEntry, CacheStats, LruTracker, ViewportKey, ZoomLevel,
    DEFAULT_TTL,
};

// == Viewport Cache ==
/// Maps viewports to previously fetched point sequences.
///
/// Every operation that may drop entries, `get` included, takes `&mut self`.
/// Share it across threads behind a lock.
#[derive(Debug)]
pub struct ViewportCache<P> {
    entries: HashMap<ViewportKey, CacheEntry<P>>,
    /// Recency order, kept only when the cache is bounded
    lru: Option<LruTracker>,
    stats: CacheStats,
    ttl: Duration,
    /// `None` = unbounded
    max_entries: Option<usize>,
}

impl<P: Clone> Default for ViewportCache<P> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<P: Clone> ViewportCache<P> {
    // == Constructors ==
    /// Unbounded cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, None)
    }

    /// Cache with the given TTL and an optional entry limit. A limit of
    /// `Some(0)` is treated as unbounded.
    pub fn with_capacity(ttl: Duration, max_entries: Option<usize>) -> Self {
        let max_entries = max_entries.filter(|&max| max > 0);
        Self {
            entries: HashMap::new(),
            lru: max_entries.map(|_| LruTracker::new()),
            stats: CacheStats::new(),
            ttl,
            max_entries,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Key the cache would use for this viewport.
    pub fn peek_key(&self, bounds: &BoundingBox, zoom: ZoomLevel) -> ViewportKey {
        viewport_key(bounds, zoom)
    }

    // == Get ==
    /// Returns a snapshot of the points cached for this viewport.
    ///
    /// An entry older than the TTL is removed and reported as absent.
    pub fn get(&mut self, bounds: &BoundingBox, zoom: ZoomLevel) -> Option<Vec<P>> {
        let key = viewport_key(bounds, zoom);

        let expired = match self.entries.get(&key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired(self.ttl),
        };

        if expired {
            self.remove_key(&key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            debug!(key = %key, "viewport entry expired");
            return None;
        }

        self.stats.record_hit();
        if let Some(lru) = self.lru.as_mut() {
            lru.touch(&key);
        }
        self.entries.get(&key).map(|entry| entry.points.clone())
    }

    // == Set ==
    /// Stores `points` for this viewport, replacing whatever was there.
    pub fn set(&mut self, bounds: &BoundingBox, zoom: ZoomLevel, points: Vec<P>) -> ViewportKey {
        let key = viewport_key(bounds, zoom);

        if !self.entries.contains_key(&key) {
            self.evict_to_fit();
        }

        debug!(key = %key, count = points.len(), "caching viewport");
        self.entries
            .insert(key.clone(), CacheEntry::new(*bounds, zoom, points));
        if let Some(lru) = self.lru.as_mut() {
            lru.touch(&key);
        }
        self.stats.set_total_entries(self.entries.len());
        key
    }

    // == Get Or Fetch ==
    /// Read-through lookup. Calls `fetch` only on a miss and caches its
    /// result when it succeeds. A failed fetch leaves the cache untouched.
    pub fn get_or_fetch<F, E>(
        &mut self,
        bounds: &BoundingBox,
        zoom: ZoomLevel,
        fetch: F,
    ) -> Result<Vec<P>, E>
    where
        F: FnOnce() -> Result<Vec<P>, E>,
    {
        if let Some(points) = self.get(bounds, zoom) {
            return Ok(points);
        }
        let points = fetch()?;
        self.set(bounds, zoom, points.clone());
        Ok(points)
    }

    // == Clear ==
    /// Drops every entry. Returns how many were held.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        if let Some(lru) = self.lru.as_mut() {
            lru.clear();
        }
        self.stats.set_total_entries(0);
        debug!(count, "viewport cache cleared");
        count
    }

    // == Clear Area ==
    /// Drops the single entry for this viewport's key, if any.
    pub fn clear_area(&mut self, bounds: &BoundingBox, zoom: ZoomLevel) -> bool {
        let key = viewport_key(bounds, zoom);
        let removed = self.remove_key(&key);
        if removed {
            debug!(key = %key, "viewport area invalidated");
        }
        removed
    }

    // == Cleanup Expired ==
    /// Removes every entry past the TTL. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let expired: Vec<ViewportKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(ttl))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_key(key);
        }
        self.stats.record_expirations(expired.len());
        expired.len()
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_key(&mut self, key: &ViewportKey) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            if let Some(lru) = self.lru.as_mut() {
                lru.remove(key);
            }
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    /// Makes room for one new key under the capacity bound.
    fn evict_to_fit(&mut self) {
        let (Some(max), Some(lru)) = (self.max_entries, self.lru.as_mut()) else {
            return;
        };
        while self.entries.len() >= max {
            let Some(oldest) = lru.evict_oldest() else {
                break;
            };
            if self.entries.remove(&oldest).is_some() {
                self.stats.record_eviction();
                debug!(key = %oldest, "evicted least recently used viewport");
            }
        }
    }
}
