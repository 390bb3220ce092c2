//! API Handlers
//!
//! HTTP request handlers for each viewport cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::cache::{grid_bucket, grid_size, viewport_key, ViewportCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearAreaResponse, ClearResponse, HealthResponse, KeyResponse, Pin, SetViewportRequest,
    SetViewportResponse, StatsResponse, ViewportQuery, ViewportResponse,
};

/// Application state shared across all handlers.
///
/// Holds the one cache instance for this process.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<ViewportCache<Pin>>>,
}

impl AppState {
    pub fn new(cache: ViewportCache<Pin>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ViewportCache::with_capacity(
            config.cache_ttl(),
            config.capacity(),
        ))
    }
}

fn validated(query: ViewportQuery) -> Result<ViewportQuery> {
    match query.validate() {
        Some(msg) => Err(ApiError::InvalidRequest(msg)),
        None => Ok(query),
    }
}

/// Handler for GET /viewport
///
/// Write lock: a lookup may evict an expired entry.
pub async fn get_viewport_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Result<Json<ViewportResponse>> {
    let query = validated(query)?;
    let (bounds, zoom) = (query.bounds(), query.zoom());

    let mut cache = state.cache.write().await;
    let key = cache.peek_key(&bounds, zoom);
    let pins = cache
        .get(&bounds, zoom)
        .ok_or_else(|| ApiError::NotFound(key.to_string()))?;

    Ok(Json(ViewportResponse::new(key, zoom, pins)))
}

/// Handler for PUT /viewport
pub async fn set_viewport_handler(
    State(state): State<AppState>,
    Json(req): Json<SetViewportRequest>,
) -> Result<Json<SetViewportResponse>> {
    if let Some(msg) = req.validate() {
        return Err(ApiError::InvalidRequest(msg));
    }

    let count = req.pins.len();
    let mut cache = state.cache.write().await;
    let key = cache.set(&req.bounds, req.zoom, req.pins);

    Ok(Json(SetViewportResponse::new(key, count)))
}

/// Handler for DELETE /viewport
///
/// Called after a pin is created or deleted inside the viewport.
pub async fn clear_area_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Result<Json<ClearAreaResponse>> {
    let query = validated(query)?;
    let (bounds, zoom) = (query.bounds(), query.zoom());

    let mut cache = state.cache.write().await;
    let key = cache.peek_key(&bounds, zoom);
    let removed = cache.clear_area(&bounds, zoom);

    Ok(Json(ClearAreaResponse::new(key, removed)))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.write().await.clear();
    info!(cleared, "viewport cache cleared on request");
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /viewport/key
///
/// Never touches the cache.
pub async fn key_handler(Query(query): Query<ViewportQuery>) -> Result<Json<KeyResponse>> {
    let query = validated(query)?;
    let (bounds, zoom) = (query.bounds(), query.zoom());
    let (lat_bucket, lng_bucket) = grid_bucket(&bounds, zoom);

    Ok(Json(KeyResponse {
        key: viewport_key(&bounds, zoom),
        grid_size: grid_size(zoom),
        lat_bucket,
        lng_bucket,
    }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let ttl_ms = u64::try_from(cache.ttl().as_millis()).unwrap_or(u64::MAX);

    Json(StatsResponse::new(
        &cache.stats(),
        ttl_ms,
        cache.max_entries(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
