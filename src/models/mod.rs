//! Request and response models for the viewport cache API
//!
//! DTOs for serializing/deserializing HTTP bodies and query strings,
//! plus the `Pin` record the service caches.

pub mod pin;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use pin::Pin;
pub use requests::{SetViewportRequest, ViewportQuery};
pub use responses::{
    ClearAreaResponse, ClearResponse, ErrorResponse, HealthResponse, KeyResponse,
    SetViewportResponse, StatsResponse, ViewportResponse,
};
