//! Cache Module
//!
//! Viewport-keyed geospatial result cache with TTL expiry and an optional
//! LRU capacity bound.

mod entry;
mod key;
mod lru;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use key::{grid_bucket, grid_size, viewport_key, BoundingBox, ViewportKey, ZoomLevel};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::ViewportCache;

// == Public Constants ==
/// Default entry lifetime: 10 minutes
pub const DEFAULT_TTL: Duration = Duration::from_millis(600_000);
