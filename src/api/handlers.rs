//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheClient;
use crate::error::{ProcessorError, Result};
use crate::models::{CacheValueResponse, Flight, HealthResponse, ProcessResponse};
use crate::processor::{FlightProcessor, CACHE_KEY};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Processor bound to the configured cache backend
    pub processor: FlightProcessor,
}

impl AppState {
    /// Creates a new AppState writing to the given cache client.
    pub fn new(cache: Arc<dyn CacheClient>) -> Self {
        Self {
            processor: FlightProcessor::new(cache),
        }
    }
}

/// Handler for POST /flights
///
/// Runs the flight through the processor. Cache failures surface as 503.
pub async fn process_flight_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Flight>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessResponse>)> {
    let Json(flight) = payload.map_err(|e| ProcessorError::InvalidRequest(e.body_text()))?;

    if let Some(error_msg) = flight.validate() {
        return Err(ProcessorError::InvalidRequest(error_msg));
    }

    state.processor.process(&flight).await?;

    Ok((
        StatusCode::OK,
        Json(ProcessResponse::new(flight.id, CACHE_KEY)),
    ))
}

/// Handler for GET /cache/:key
///
/// Returns the live value stored under `key`.
pub async fn get_cache_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheValueResponse>> {
    match state.processor.cache().get(&key).await? {
        Some(value) => Ok(Json(CacheValueResponse::new(key, value))),
        None => Err(ProcessorError::NotFound(key)),
    }
}

/// Handler for GET /health
///
/// Healthy only while the cache backend answers a ping.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let cache = state.processor.cache();
    cache.ping().await?;
    Ok(Json(HealthResponse::healthy(cache.backend())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use crate::processor::CACHE_VALUE;

    fn memory_state() -> AppState {
        AppState::new(Arc::new(InMemoryCache::new(100)))
    }

    #[tokio::test]
    async fn test_process_then_read_back() {
        let state = memory_state();

        let (status, response) =
            process_flight_handler(State(state.clone()), Ok(Json(Flight::new("AB123"))))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.flight_id, "AB123");
        assert_eq!(response.key, CACHE_KEY);

        let response = get_cache_handler(State(state), Path(CACHE_KEY.to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, CACHE_VALUE);
    }

    #[tokio::test]
    async fn test_process_rejects_empty_id() {
        let state = memory_state();

        let result = process_flight_handler(State(state), Ok(Json(Flight::new("")))).await;
        assert!(matches!(result, Err(ProcessorError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let state = memory_state();

        let result = get_cache_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(ProcessorError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(memory_state())).await.unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.backend, "memory");
    }
}
