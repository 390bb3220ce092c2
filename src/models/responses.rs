//! Response DTOs for the viewport cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, ViewportKey, ZoomLevel};
use crate::models::Pin;

/// Response body for GET /viewport
#[derive(Debug, Clone, Serialize)]
pub struct ViewportResponse {
    pub key: ViewportKey,
    pub zoom: ZoomLevel,
    pub count: usize,
    pub pins: Vec<Pin>,
}

impl ViewportResponse {
    pub fn new(key: ViewportKey, zoom: ZoomLevel, pins: Vec<Pin>) -> Self {
        Self {
            key,
            zoom,
            count: pins.len(),
            pins,
        }
    }
}

/// Response body for PUT /viewport
#[derive(Debug, Clone, Serialize)]
pub struct SetViewportResponse {
    pub message: String,
    pub key: ViewportKey,
    pub count: usize,
}

impl SetViewportResponse {
    pub fn new(key: ViewportKey, count: usize) -> Self {
        Self {
            message: format!("Cached {} pins for viewport '{}'", count, key),
            key,
            count,
        }
    }
}

/// Response body for DELETE /viewport
#[derive(Debug, Clone, Serialize)]
pub struct ClearAreaResponse {
    pub message: String,
    pub key: ViewportKey,
    pub removed: bool,
}

impl ClearAreaResponse {
    pub fn new(key: ViewportKey, removed: bool) -> Self {
        let message = if removed {
            format!("Viewport '{}' invalidated", key)
        } else {
            format!("Viewport '{}' was not cached", key)
        };
        Self {
            message,
            key,
            removed,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached viewports", cleared),
            cleared,
        }
    }
}

/// Response body for GET /viewport/key
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    pub key: ViewportKey,
    pub grid_size: f64,
    pub lat_bucket: i64,
    pub lng_bucket: i64,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    pub ttl_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl_ms: u64, max_entries: Option<usize>) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_ms,
            max_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{viewport_key, BoundingBox};

    fn key() -> ViewportKey {
        viewport_key(
            &BoundingBox::new(41.0072, 41.0092, 29.0312, 29.0332),
            ZoomLevel(16.0),
        )
    }

    #[test]
    fn test_viewport_response_counts_pins() {
        let resp = ViewportResponse::new(key(), ZoomLevel(16.0), Vec::new());
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["key"], "4100:2903:16");
        assert_eq!(json["zoom"], 16.0);
        assert_eq!(json["count"], 0);
    }

    #[test]
    fn test_set_response_message() {
        let resp = SetViewportResponse::new(key(), 3);
        assert!(resp.message.contains("3 pins"));
        assert!(resp.message.contains("4100:2903:16"));
    }

    #[test]
    fn test_clear_area_response_messages() {
        assert!(ClearAreaResponse::new(key(), true).message.contains("invalidated"));
        assert!(ClearAreaResponse::new(key(), false).message.contains("not cached"));
    }

    #[test]
    fn test_stats_response_from_stats() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        let resp = StatsResponse::new(&stats, 600_000, None);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["hit_rate"], 0.5);
        assert_eq!(json["ttl_ms"], 600_000);
        assert!(json.get("max_entries").is_none());
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&ErrorResponse::new("Something went wrong")).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
