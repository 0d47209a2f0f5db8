//! Flight Processor
//!
//! Handles one flight message: logs it, annotates a trace span and writes an
//! expiring marker key to the cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::{field::Empty, info, info_span, Instrument, Span};

use crate::cache::CacheClient;
use crate::error::Result;
use crate::models::Flight;
use crate::telemetry::SpanExt;

/// Key written on every processed flight.
pub const CACHE_KEY: &str = "valExpireKey";

/// Value stored under [`CACHE_KEY`].
pub const CACHE_VALUE: &str = "SomeValue";

/// Lifetime of the marker key.
pub const CACHE_TTL: Duration = Duration::from_secs(1);

/// Value of the `attribute.process` span attribute.
pub const PROCESS_ATTRIBUTE: &str = "I would like to write redis";

/// Processes flight messages against a shared cache client.
///
/// Holds no per-message state, so one instance serves concurrent calls.
#[derive(Clone)]
pub struct FlightProcessor {
    cache: Arc<dyn CacheClient>,
}

impl FlightProcessor {
    pub fn new(cache: Arc<dyn CacheClient>) -> Self {
        Self { cache }
    }

    /// The cache client this processor writes to.
    pub fn cache(&self) -> &Arc<dyn CacheClient> {
        &self.cache
    }

    /// Processes one flight.
    ///
    /// Runs inside a `process` span carrying `attribute.process`. Cache
    /// failures are returned unchanged and mark the span as failed.
    pub async fn process(&self, flight: &Flight) -> Result<()> {
        let span = info_span!(
            "process",
            attribute.process = Empty,
            otel.status_code = Empty,
            error.message = Empty,
        );

        let result = async {
            info!("Processing : {}", flight);
            Span::current().record("attribute.process", PROCESS_ATTRIBUTE);

            self.cache_expire(CACHE_KEY).await
        }
        .instrument(span.clone())
        .await;

        span.record_result(&result);
        result
    }

    async fn cache_expire(&self, key: &str) -> Result<()> {
        let span = info_span!(
            "cache_expire",
            attribute.key = Empty,
            otel.status_code = Empty,
            error.message = Empty,
        );

        let result = async {
            info!("Redis set key : {}", key);
            Span::current().record("attribute.key", key);

            self.cache.set_ex(key, CACHE_VALUE, CACHE_TTL).await
        }
        .instrument(span.clone())
        .await;

        span.record_result(&result);
        result
    }
}
