//! Request DTOs for the relay API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the resolve endpoint (GET /?filename=...)
///
/// The parameter is modeled as optional so that an absent and an empty
/// filename produce the same 400 response rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveParams {
    /// The requested filename
    #[serde(default)]
    pub filename: Option<String>,
}

impl ResolveParams {
    /// Returns the filename, treating absent as empty.
    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or("")
    }
}
