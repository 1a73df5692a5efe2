//! Relay Statistics Module
//!
//! Tracks mapping-cache behavior: fresh hits, refreshes, failures, stale serves.

use serde::Serialize;

// == Relay Stats ==
/// Counters describing how the mapping cache has behaved since startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelayStats {
    /// Requests answered from a fresh cached table, no fetch attempted
    pub fresh_hits: u64,
    /// Successful refresh fetches of the mapping table
    pub refreshes: u64,
    /// Refresh fetches that failed (network error or non-2xx)
    pub refresh_failures: u64,
    /// Requests answered from a stale table after a failed refresh
    pub stale_serves: u64,
    /// Number of filenames in the current table (0 before the first fetch)
    pub mapped_files: usize,
    /// Age of the current table in seconds, None before the first fetch
    pub cache_age_seconds: Option<u64>,
}

impl RelayStats {
    // == Constructor ==
    /// Creates a new RelayStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Fresh Hit ==
    /// Increments the fresh-hit counter.
    pub fn record_fresh_hit(&mut self) {
        self.fresh_hits += 1;
    }

    // == Record Refresh ==
    /// Increments the successful-refresh counter.
    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    // == Record Refresh Failure ==
    /// Increments the failed-refresh counter.
    pub fn record_refresh_failure(&mut self) {
        self.refresh_failures += 1;
    }

    // == Record Stale Serve ==
    /// Increments the stale-serve counter.
    pub fn record_stale_serve(&mut self) {
        self.stale_serves += 1;
    }

    // == Update Snapshot Fields ==
    /// Sets the current table size.
    pub fn set_mapped_files(&mut self, count: usize) {
        self.mapped_files = count;
    }

    /// Sets the current table age.
    pub fn set_cache_age_seconds(&mut self, age: Option<u64>) {
        self.cache_age_seconds = age;
    }
}
