//! In-memory Cache Backend
//!
//! HashMap storage with per-entry TTL, used when no Redis URL is configured.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{ttl_seconds, CacheClient, CacheEntry, CacheStats, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{ProcessorError, Result};

// == TTL Store ==
/// Single-threaded TTL storage. Wrapped by [`InMemoryCache`] for shared use.
#[derive(Debug)]
pub struct TtlStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl TtlStore {
    // == Constructor ==
    /// Creates a new TtlStore holding at most `max_entries` live entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Set ==
    /// Stores a key-value pair expiring after `ttl`.
    ///
    /// If the key already exists, the value is overwritten and the TTL is
    /// reset. A new key is refused once the store is at capacity, after
    /// expired entries have been purged.
    pub fn set(&mut self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        if key.is_empty() {
            return Err(ProcessorError::InvalidRequest("Key cannot be empty".to_string()));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(ProcessorError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(ProcessorError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let is_overwrite = self.entries.contains_key(key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.cleanup_expired();
            if self.entries.len() >= self.max_entries {
                return Err(ProcessorError::CacheFull(format!(
                    "Cache holds the maximum of {} entries",
                    self.max_entries
                )));
            }
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(value.to_string(), ttl));

        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == TTL ==
    /// Remaining lifetime of a live key.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let count = before - self.entries.len();

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    /// Returns the current number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == In-memory Cache ==
/// Shared handle over a [`TtlStore`].
#[derive(Debug, Clone)]
pub struct InMemoryCache {
    store: Arc<RwLock<TtlStore>>,
}

impl InMemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(TtlStore::new(max_entries))),
        }
    }

    /// Remaining lifetime of a live key.
    pub async fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.store.read().await.ttl_remaining(key)
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl CacheClient for InMemoryCache {
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let secs = ttl_seconds(ttl)?;
        self.store
            .write()
            .await
            .set(key, value, Duration::from_secs(secs))
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        // write lock: expired entries are dropped on read
        Ok(self.store.write().await.get(key))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
