//! APK Relay - a redirect gateway for APK release downloads
//!
//! Resolves a requested filename to proxied JSON content or a redirect
//! looked up from a remotely fetched mapping table, with a time-based
//! cache that prefers stale data over failing.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use resolver::Resolver;
