//! Error types for the relay
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Relay Error Enum ==
/// Unified error type for the relay.
///
/// Every variant resolves to an HTTP response; nothing here is fatal to
/// the process.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The `filename` query parameter was absent or empty
    #[error("Bad Request: Missing filename")]
    MissingFilename,

    /// Filename not present in the mapping table, or unrecognized pattern
    #[error("Not Found")]
    NotFound(String),

    /// Upstream answered with a non-2xx status
    #[error("{message}")]
    UpstreamStatus { status: u16, message: String },

    /// Outbound request failed before a status was received
    #[error("Internal Server Error: upstream fetch failed: {0}")]
    Fetch(String),

    /// Upstream body was not the expected JSON
    #[error("Internal Server Error: upstream returned malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Mapping table could not be obtained: refresh failed and no prior
    /// fetch ever succeeded
    #[error("Internal Server Error: Could not load APK URL data.")]
    MappingUnavailable,
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Fetch(err.to_string())
    }
}

// == IntoResponse Implementation ==
// Bodies are plain text: the original responses are fixed strings and the
// redirect path never carries a JSON envelope.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::MissingFilename => StatusCode::BAD_REQUEST,
            RelayError::NotFound(_) => StatusCode::NOT_FOUND,
            RelayError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Fetch(_) | RelayError::Parse(_) | RelayError::MappingUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the relay.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_filename_message() {
        let err = RelayError::MissingFilename;
        assert_eq!(err.to_string(), "Bad Request: Missing filename");
    }

    #[test]
    fn test_not_found_message_is_fixed() {
        // The filename is kept for logging only; the body never varies.
        let err = RelayError::NotFound("app-v2.apk".to_string());
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn test_mapping_unavailable_message() {
        let err = RelayError::MappingUnavailable;
        assert_eq!(
            err.to_string(),
            "Internal Server Error: Could not load APK URL data."
        );
    }

    #[test]
    fn test_upstream_status_passthrough() {
        let err = RelayError::UpstreamStatus {
            status: 503,
            message: "Failed to fetch leanback.json from upstream: 503".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_upstream_status_falls_back() {
        let err = RelayError::UpstreamStatus {
            status: 99,
            message: "bogus".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
