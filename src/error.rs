//! Error types for the flight processor
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Processor Error Enum ==
/// Unified error type for the flight processor and its cache backends.
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Cache operation failed (connectivity, timeout, serialization)
    #[error("Cache operation failed: {0}")]
    Cache(String),

    /// In-memory cache reached capacity
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),
}

impl From<redis::RedisError> for ProcessorError {
    fn from(err: redis::RedisError) -> Self {
        ProcessorError::Cache(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProcessorError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProcessorError::Cache(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProcessorError::CacheFull(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProcessorError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProcessorError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the flight processor.
pub type Result<T> = std::result::Result<T, ProcessorError>;
