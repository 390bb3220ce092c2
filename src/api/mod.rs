//! API Module
//!
//! HTTP handlers and routing for the viewport cache service.
//!
//! # Endpoints
//! - `GET /viewport` - Cached pins for a viewport
//! - `PUT /viewport` - Cache pins fetched for a viewport
//! - `DELETE /viewport` - Invalidate one viewport bucket
//! - `GET /viewport/key` - Show the derived key for a viewport
//! - `DELETE /cache` - Drop every cached viewport
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
