//! Response DTOs for the relay API
//!
//! Defines the structure of outgoing JSON response bodies for the stats and
//! health endpoints. The resolve endpoint itself answers with verbatim JSON,
//! a redirect, or plain-text error bodies, so it has no DTO here.

use serde::Serialize;

use crate::cache::RelayStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Requests answered from a fresh cached table
    pub fresh_hits: u64,
    /// Successful mapping refreshes
    pub refreshes: u64,
    /// Failed mapping refreshes
    pub refresh_failures: u64,
    /// Requests answered from a stale table after a failed refresh
    pub stale_serves: u64,
    /// Number of filenames in the current table
    pub mapped_files: usize,
    /// Age of the current table in seconds, null before the first fetch
    pub cache_age_seconds: Option<u64>,
}

impl StatsResponse {
    /// Creates a StatsResponse from a cache counter snapshot.
    pub fn new(stats: RelayStats) -> Self {
        Self {
            fresh_hits: stats.fresh_hits,
            refreshes: stats.refreshes,
            refresh_failures: stats.refresh_failures,
            stale_serves: stats.stale_serves,
            mapped_files: stats.mapped_files,
            cache_age_seconds: stats.cache_age_seconds,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_serialize() {
        let mut stats = RelayStats::new();
        stats.record_refresh();
        stats.record_fresh_hit();
        stats.set_mapped_files(2);

        let resp = StatsResponse::new(stats);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"refreshes\":1"));
        assert!(json.contains("\"fresh_hits\":1"));
        assert!(json.contains("\"mapped_files\":2"));
        assert!(json.contains("\"cache_age_seconds\":null"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
