//! API Module
//!
//! HTTP ingest surface for the flight processor.
//!
//! # Endpoints
//! - `POST /flights` - Process a flight message
//! - `GET /cache/:key` - Read a cache value
//! - `GET /health` - Health check including cache backend reachability

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
