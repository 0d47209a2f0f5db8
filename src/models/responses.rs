//! Response DTOs for the flight processor API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for POST /flights
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    /// Processing status (always "processed")
    pub status: String,
    /// The flight that was processed
    pub flight_id: String,
    /// The cache key written during processing
    pub key: String,
}

impl ProcessResponse {
    /// Creates a new ProcessResponse
    pub fn new(flight_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            status: "processed".to_string(),
            flight_id: flight_id.into(),
            key: key.into(),
        }
    }
}

/// Response body for GET /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct CacheValueResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl CacheValueResponse {
    /// Creates a new CacheValueResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Cache backend in use ("redis" or "memory")
    pub backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: backend.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_response_serialize() {
        let resp = ProcessResponse::new("AB123", "valExpireKey");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"processed\""));
        assert!(json.contains("AB123"));
        assert!(json.contains("valExpireKey"));
    }

    #[test]
    fn test_cache_value_response_serialize() {
        let resp = CacheValueResponse::new("valExpireKey", "SomeValue");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("valExpireKey"));
        assert!(json.contains("SomeValue"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("memory");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("memory"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
