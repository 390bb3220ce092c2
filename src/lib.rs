//! oPINion viewport cache
//!
//! Caches map pins per viewport. Nearby viewports collapse onto one grid
//! key, entries expire after a fixed TTL, and an optional LRU bound caps
//! memory. A small axum service hosts one cache per process.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{BoundingBox, ViewportCache, ZoomLevel};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
