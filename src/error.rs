//! Error types for the HTTP service
//!
//! The cache itself never fails; these errors exist only at the request edge.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use thiserror::Error;

// == Api Error Enum ==
#[derive(Error, Debug)]
pub enum ApiError {
    /// Nothing cached for the viewport, or the entry expired
    #[error("No cached pins for viewport {0}")]
    NotFound(String),

    /// Request failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, ApiError>;
