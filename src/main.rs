//! Flight Processor - handles flight messages against a cache
//!
//! Serves the HTTP ingest surface and wires the configured cache backend.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use flight_processor::api::{create_router, AppState};
use flight_processor::cache::{CacheClient, InMemoryCache, RedisCache};
use flight_processor::telemetry::init_tracing;
use flight_processor::{spawn_cleanup_task, Config};

/// Main entry point for the flight processor.
///
/// # Startup Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize tracing subscriber
/// 3. Connect to Redis, or fall back to the in-memory cache plus cleanup task
/// 4. Start HTTP server on configured port
/// 5. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    info!("Starting Flight Processor");
    info!(
        "Configuration loaded: redis={}, port={}, max_entries={}, cleanup_interval={}s",
        config.redis_url.is_some(),
        config.server_port,
        config.max_entries,
        config.cleanup_interval
    );

    let (cache, cleanup_handle) = build_cache(&config).await?;
    info!("Cache backend initialized: {}", cache.backend());

    let app = create_router(AppState::new(cache));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Picks the cache backend from configuration.
///
/// The in-memory backend comes with its cleanup task handle.
async fn build_cache(
    config: &Config,
) -> anyhow::Result<(Arc<dyn CacheClient>, Option<JoinHandle<()>>)> {
    match &config.redis_url {
        Some(url) => {
            let cache = RedisCache::connect(url)
                .await
                .context("failed to connect to Redis")?;
            Ok((Arc::new(cache), None))
        }
        None => {
            warn!("REDIS_URL not set, using in-memory cache");
            let cache = InMemoryCache::new(config.max_entries);
            let handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
            Ok((Arc::new(cache), Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
