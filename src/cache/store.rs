//! Mapping Cache Module
//!
//! Single-entry cache for the mapping table with time-based staleness and
//! stale-fallback on refresh failure.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CachedMapping, MappingTable, RelayStats};

// == Mapping Cache ==
/// Holds the last successfully fetched mapping table, if any.
///
/// The cache never mutates a table in place: a refresh replaces the whole
/// entry, so concurrent readers keep whichever `Arc` they already resolved.
#[derive(Debug, Default)]
pub struct MappingCache {
    /// The most recent successful fetch, None before the first success
    current: Option<CachedMapping>,
    /// Cache behavior counters
    stats: RelayStats,
}

impl MappingCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Fresh ==
    /// Returns the cached table if it is within the freshness window.
    ///
    /// A hit here means no upstream fetch is needed for this request.
    pub fn fresh(&mut self, max_age: Duration) -> Option<Arc<MappingTable>> {
        match &self.current {
            Some(entry) if !entry.is_stale(max_age) => {
                self.stats.record_fresh_hit();
                Some(entry.table())
            }
            _ => None,
        }
    }

    // == Replace ==
    /// Installs a freshly fetched table, wholesale, and resets its timestamp.
    ///
    /// Returns a handle to the new table for the request that fetched it.
    pub fn replace(&mut self, table: MappingTable) -> Arc<MappingTable> {
        let entry = CachedMapping::new(table);
        let handle = entry.table();
        self.current = Some(entry);
        self.stats.record_refresh();
        handle
    }

    // == Stale Fallback ==
    /// Called when a refresh fetch has failed: records the failure and
    /// returns the previous table regardless of its age, if one exists.
    ///
    /// None means cold start with no prior success; the caller has nothing
    /// to serve from.
    pub fn stale_fallback(&mut self) -> Option<Arc<MappingTable>> {
        self.stats.record_refresh_failure();
        match &self.current {
            Some(entry) => {
                self.stats.record_stale_serve();
                Some(entry.table())
            }
            None => None,
        }
    }

    // == Has Mapping ==
    /// Returns true if any fetch has ever succeeded.
    pub fn has_mapping(&self) -> bool {
        self.current.is_some()
    }

    // == Age ==
    /// Age of the current table in milliseconds, None before the first fetch.
    pub fn age_ms(&self) -> Option<u64> {
        self.current.as_ref().map(CachedMapping::age_ms)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters with the derived fields set.
    pub fn stats(&self) -> RelayStats {
        let mut stats = self.stats.clone();
        stats.set_mapped_files(
            self.current
                .as_ref()
                .map_or(0, |entry| entry.table().len()),
        );
        stats.set_cache_age_seconds(self.age_ms().map(|ms| ms / 1000));
        stats
    }

    /// Rewinds the current entry's fetch timestamp.
    #[cfg(test)]
    pub fn backdate(&mut self, ms: u64) {
        if let Some(entry) = self.current.as_mut() {
            entry.backdate(ms);
        }
    }
}
