//! API Routes
//!
//! Configures the Axum router with all viewport cache endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_area_handler, clear_handler, get_viewport_handler, health_handler, key_handler,
    set_viewport_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// The map client runs in a browser on another origin, so CORS is open.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/viewport",
            get(get_viewport_handler)
                .put(set_viewport_handler)
                .delete(clear_area_handler),
        )
        .route("/viewport/key", get(key_handler))
        .route("/cache", delete(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
