//! Cache Entry Module
//!
//! Defines a cached viewport result and its age check.

use std::time::{Duration, Instant};

use crate::cache::{BoundingBox, ZoomLevel};

// == Cache Entry ==
/// Points fetched for one viewport, plus the metadata needed to expire them.
#[derive(Debug, Clone)]
pub struct CacheEntry<P> {
    /// Viewport the points were fetched for
    pub bounds: BoundingBox,
    /// Fetched points, in fetch order
    pub points: Vec<P>,
    /// Monotonic creation time, used for TTL checks
    pub created_at: Instant,
    /// Zoom level the entry was created at
    pub zoom: ZoomLevel,
}

impl<P> CacheEntry<P> {
    // == Constructor ==
    pub fn new(bounds: BoundingBox, zoom: ZoomLevel, points: Vec<P>) -> Self {
        Self {
            bounds,
            points,
            created_at: Instant::now(),
            zoom,
        }
    }

    // == Age ==
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// An entry is stale once its age is strictly greater than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// Remaining lifetime, saturating at zero.
    pub fn ttl_remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.age())
    }
}
