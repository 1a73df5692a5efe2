//! Resolver Module
//!
//! The core of the relay: routes a requested filename to the auxiliary
//! document proxy, a mapping-table redirect, or not-found, applying the
//! cache-refresh policy for the mapping path.
//!
//! # Refresh policy
//! The mapping table favors availability over freshness: a refresh is only
//! attempted once the cached table has outlived its window, and a failed
//! refresh falls back to the stale table whenever a prior fetch succeeded.
//! Only a cold start with no successful fetch at all is an error.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::cache::{MappingCache, MappingTable, RelayStats};
use crate::error::{RelayError, Result};
use crate::upstream::Upstream;

// == Public Constants ==
/// Reserved filename served by direct proxy instead of lookup/redirect.
pub const DOCUMENT_NAME: &str = "leanback.json";

/// Suffix of filenames resolved through the mapping table.
pub const APK_EXTENSION: &str = ".apk";

// == Resolution ==
/// Successful outcome of a resolve call.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Auxiliary document body, to be served verbatim as JSON
    Document(String),
    /// Redirect target URL from the mapping table
    Redirect(String),
}

// == Resolver ==
/// Resolves filenames against the upstream host and the mapping cache.
///
/// Constructed once at startup and shared across all requests; the cache
/// lives exactly as long as the process.
pub struct Resolver {
    upstream: Arc<dyn Upstream>,
    cache: Arc<RwLock<MappingCache>>,
    cache_duration: Duration,
}

impl Resolver {
    // == Constructor ==
    /// Creates a resolver with an empty cache.
    ///
    /// # Arguments
    /// * `upstream` - Source of the auxiliary document and mapping table
    /// * `cache_duration` - How long a fetched mapping table stays fresh
    pub fn new(upstream: Arc<dyn Upstream>, cache_duration: Duration) -> Self {
        Self {
            upstream,
            cache: Arc::new(RwLock::new(MappingCache::new())),
            cache_duration,
        }
    }

    // == Resolve ==
    /// Resolves `filename` to a [`Resolution`] or an error response.
    ///
    /// - empty -> `MissingFilename`
    /// - the reserved document name -> fetched fresh on every call, no cache
    /// - `*.apk` -> looked up in the (possibly refreshed) mapping table
    /// - anything else -> `NotFound`
    pub async fn resolve(&self, filename: &str) -> Result<Resolution> {
        if filename.is_empty() {
            return Err(RelayError::MissingFilename);
        }

        info!("Received request for filename: {}", filename);

        if filename == DOCUMENT_NAME {
            let body = self.upstream.fetch_document().await?;
            info!("Serving {} by direct proxy", DOCUMENT_NAME);
            return Ok(Resolution::Document(body));
        }

        if filename.ends_with(APK_EXTENSION) {
            let table = self.mapping().await?;
            return match table.lookup(filename) {
                Some(target) => {
                    info!("Redirecting {} to {}", filename, target);
                    Ok(Resolution::Redirect(target.to_string()))
                }
                None => {
                    warn!("Filename not present in mapping table: {}", filename);
                    Err(RelayError::NotFound(filename.to_string()))
                }
            };
        }

        warn!("Unsupported filename requested: {}", filename);
        Err(RelayError::NotFound(filename.to_string()))
    }

    // == Mapping ==
    /// Returns the mapping table to resolve this request against, applying
    /// the refresh policy.
    async fn mapping(&self) -> Result<Arc<MappingTable>> {
        // Fast path: fresh table, no fetch.
        {
            let mut cache = self.cache.write().await;
            if let Some(table) = cache.fresh(self.cache_duration) {
                return Ok(table);
            }
        }

        // Cache empty or stale. Fetch with the lock released; concurrent
        // requests on a stale cache may each fetch redundantly, which is
        // harmless since the table is replaced as a whole value.
        match self.upstream.fetch_mapping().await {
            Ok(table) => Ok(self.cache.write().await.replace(table)),
            Err(err) => {
                let mut cache = self.cache.write().await;
                match cache.stale_fallback() {
                    Some(stale) => {
                        warn!("Mapping refresh failed ({}), serving stale table", err);
                        Ok(stale)
                    }
                    None => {
                        error!("Mapping refresh failed with no cached table: {}", err);
                        Err(RelayError::MappingUnavailable)
                    }
                }
            }
        }
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> RelayStats {
        self.cache.read().await.stats()
    }
}
