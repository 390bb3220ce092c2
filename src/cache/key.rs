//! Viewport Key Module
//!
//! Quantizes a map viewport onto a lat/lng grid so that small pans and zooms
//! inside one grid cell resolve to the same cache key.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Bounding Box ==
/// Visible geographic extent of a map view, in degrees.
///
/// `south <= north` and `west <= east` are expected but not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    pub const fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    /// Midpoint of the box as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.south.is_finite()
            && self.north.is_finite()
            && self.west.is_finite()
            && self.east.is_finite()
    }
}

// == Zoom Level ==
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoomLevel(pub f64);

impl ZoomLevel {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for ZoomLevel {
    fn from(zoom: f64) -> Self {
        Self(zoom)
    }
}

impl From<u8> for ZoomLevel {
    fn from(zoom: u8) -> Self {
        Self(f64::from(zoom))
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// == Viewport Key ==
/// Derived cache key: `"{lat_bucket}:{lng_bucket}:{zoom}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ViewportKey(String);

impl ViewportKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Grid Size ==
/// Grid cell size in degrees for a zoom level. Thresholds are inclusive
/// lower bounds: finer cells at higher zoom.
pub fn grid_size(zoom: ZoomLevel) -> f64 {
    let z = zoom.value();
    if z >= 15.0 {
        0.01
    } else if z >= 12.0 {
        0.05
    } else if z >= 10.0 {
        0.1
    } else {
        0.5
    }
}

/// Grid cell indices of the box center at the given zoom.
pub fn grid_bucket(bounds: &BoundingBox, zoom: ZoomLevel) -> (i64, i64) {
    let grid = grid_size(zoom);
    let (lat, lng) = bounds.center();
    // float -> int casts saturate, NaN maps to 0
    ((lat / grid).floor() as i64, (lng / grid).floor() as i64)
}

// == Key Derivation ==
/// Derives the cache key for a viewport. Pure; never touches cache storage.
pub fn viewport_key(bounds: &BoundingBox, zoom: ZoomLevel) -> ViewportKey {
    let (lat_bucket, lng_bucket) = grid_bucket(bounds, zoom);
    // -0.0 + 0.0 == +0.0, so both zero signs format as "0"
    let zoom = zoom.value() + 0.0;
    ViewportKey(format!("{}:{}:{}", lat_bucket, lng_bucket, zoom))
}
