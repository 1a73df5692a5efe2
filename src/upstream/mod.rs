//! Upstream Module
//!
//! Outbound fetches against the remote host serving the auxiliary document
//! and the mapping table. The [`Upstream`] trait is the seam tests use to
//! substitute a scripted fake for the real HTTP client.

mod client;

pub use client::HttpUpstream;

use async_trait::async_trait;

use crate::cache::MappingTable;
use crate::error::Result;

// == Upstream Trait ==
/// Source of the two remote documents the relay depends on.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetches the auxiliary document body verbatim.
    ///
    /// Non-2xx statuses surface as [`crate::error::RelayError::UpstreamStatus`]
    /// so the handler can propagate them to the caller.
    async fn fetch_document(&self) -> Result<String>;

    /// Fetches and parses the filename -> URL mapping table.
    async fn fetch_mapping(&self) -> Result<MappingTable>;
}
