//! Flight Processor - handles flight messages against a cache
//!
//! Each flight is logged, traced and marks the cache with a short-lived key.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod processor;
pub mod tasks;
pub mod telemetry;

pub use api::AppState;
pub use config::Config;
pub use processor::FlightProcessor;
pub use tasks::spawn_cleanup_task;
