//! Request DTOs for the viewport cache API
//!
//! Defines query strings and incoming bodies.

use serde::Deserialize;

use crate::cache::{BoundingBox, ZoomLevel};
use crate::models::Pin;

/// Viewport given in a query string:
/// `?south=..&north=..&west=..&east=..&zoom=..`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportQuery {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
    pub zoom: f64,
}

impl ViewportQuery {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.south, self.north, self.west, self.east)
    }

    pub fn zoom(&self) -> ZoomLevel {
        ZoomLevel(self.zoom)
    }

    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_viewport(&self.bounds(), self.zoom())
    }
}

/// Request body for PUT /viewport
#[derive(Debug, Clone, Deserialize)]
pub struct SetViewportRequest {
    pub bounds: BoundingBox,
    pub zoom: ZoomLevel,
    #[serde(default)]
    pub pins: Vec<Pin>,
}

impl SetViewportRequest {
    pub fn validate(&self) -> Option<String> {
        validate_viewport(&self.bounds, self.zoom)
    }
}

/// Rejects values that cannot describe a map view. Inverted boxes are let
/// through; the cache keys them like any other box.
fn validate_viewport(bounds: &BoundingBox, zoom: ZoomLevel) -> Option<String> {
    if !bounds.is_finite() {
        return Some("Viewport bounds must be finite numbers".to_string());
    }
    if !zoom.value().is_finite() || zoom.value() < 0.0 {
        return Some("Zoom must be a non-negative number".to_string());
    }
    None
}
