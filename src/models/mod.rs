//! Data models for the flight processor
//!
//! The `Flight` domain record plus the DTOs used for
//! serializing HTTP response bodies.

pub mod flight;
pub mod responses;

// Re-export commonly used types
pub use flight::Flight;
pub use responses::{CacheValueResponse, ErrorResponse, HealthResponse, ProcessResponse};
