//! Telemetry Module
//!
//! Global tracing subscriber setup and span helpers.

use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "flight_processor=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Filtering honours `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    let _ = match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init(),
    };
}

/// Marks a span with the outcome of the work it wrapped.
///
/// The span must declare `otel.status_code` and `error.message` as
/// `tracing::field::Empty` for the values to be kept.
pub trait SpanExt {
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display;
}

impl SpanExt for Span {
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display,
    {
        match result {
            Ok(_) => {
                self.record("otel.status_code", "OK");
            }
            Err(e) => {
                self.record("otel.status_code", "ERROR");
                self.record("error.message", e.to_string().as_str());
            }
        }
    }
}
