//! Cache Statistics Module
//!
//! Counters kept by the in-memory backend.

use serde::Serialize;

// == Cache Stats ==
/// Tracks in-memory cache activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of SET operations accepted
    pub writes: u64,
    /// Number of reads that found a live entry
    pub hits: u64,
    /// Number of reads that found nothing (absent or expired)
    pub misses: u64,
    /// Number of entries dropped because their TTL elapsed
    pub expirations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
