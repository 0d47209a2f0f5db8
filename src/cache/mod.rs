//! Cache Module
//!
//! The cache capability handed to the processor, with a Redis backend and an
//! in-memory TTL backend.

mod entry;
mod memory;
mod redis_cache;
mod stats;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::{InMemoryCache, TtlStore};
pub use redis_cache::RedisCache;
pub use stats::CacheStats;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Cache Client ==
/// Key-value store with expiring writes.
///
/// Implementations own their synchronization; callers share them behind an
/// `Arc<dyn CacheClient>`.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value and resetting
    /// the expiry to `ttl` (whole seconds, at least one).
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Returns the live value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<()>;

    /// Short backend name used in health output.
    fn backend(&self) -> &'static str;
}

/// Converts a TTL into the whole seconds accepted by `SET ... EX`.
pub(crate) fn ttl_seconds(ttl: Duration) -> Result<u64> {
    let secs = ttl.as_secs();
    if secs == 0 || ttl.subsec_nanos() != 0 {
        return Err(crate::error::ProcessorError::InvalidRequest(format!(
            "TTL must be a whole number of seconds >= 1, got {:?}",
            ttl
        )));
    }
    Ok(secs)
}
