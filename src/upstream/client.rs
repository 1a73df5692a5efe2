//! HTTP upstream client.
//!
//! Fetches the auxiliary document and the mapping table over HTTPS using
//! reqwest. No retries and no explicit timeout; the transport defaults apply.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::cache::MappingTable;
use crate::config::Config;
use crate::error::{RelayError, Result};
use crate::upstream::Upstream;

// == HTTP Upstream ==
/// Production [`Upstream`] implementation backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    document_url: String,
    mapping_url: String,
}

impl HttpUpstream {
    /// Creates a client fetching from the given URLs.
    pub fn new(mapping_url: impl Into<String>, document_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            mapping_url: mapping_url.into(),
            document_url: document_url.into(),
        }
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.mapping_url, &config.document_url)
    }

    /// GETs `url` and returns the body text, converting non-2xx statuses
    /// into typed errors.
    async fn get_text(&self, url: &str, what: &str) -> Result<String> {
        debug!("Fetching {} from {}", what, url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned HTTP {} for the {}", status, what);
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                message: format!("Failed to fetch the {} from upstream: {}", what, status),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_document(&self) -> Result<String> {
        self.get_text(&self.document_url, "auxiliary document").await
    }

    async fn fetch_mapping(&self) -> Result<MappingTable> {
        let body = self.get_text(&self.mapping_url, "mapping table").await?;
        let table: MappingTable = serde_json::from_str(&body)?;
        debug!("Fetched mapping table with {} entries", table.len());
        Ok(table)
    }
}
