//! API Handlers
//!
//! HTTP request handlers for the relay endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, ResolveParams, StatsResponse};
use crate::resolver::{Resolution, Resolver};
use crate::upstream::HttpUpstream;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The resolver owning the mapping cache and the upstream client
    pub resolver: Arc<Resolver>,
}

impl AppState {
    /// Creates a new AppState around the given resolver.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the real HTTP upstream into the resolver.
    pub fn from_config(config: &Config) -> Self {
        let upstream = Arc::new(HttpUpstream::from_config(config));
        Self::new(Resolver::new(
            upstream,
            Duration::from_secs(config.cache_duration),
        ))
    }
}

/// Handler for GET /?filename=...
///
/// Answers with the auxiliary document (verbatim JSON), a 302 redirect from
/// the mapping table, or one of the plain-text error responses.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<Response> {
    match state.resolver.resolve(params.filename()).await? {
        Resolution::Document(body) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()),
        Resolution::Redirect(target) => {
            Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
        }
    }
}

/// Handler for GET /stats
///
/// Returns the mapping-cache counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.resolver.stats().await))
}

/// Handler for GET /health
///
/// Returns health status of the relay.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
