//! API Module
//!
//! HTTP handlers and routing for the relay.
//!
//! # Endpoints
//! - `GET /?filename=...` - Resolve a filename to proxied JSON or a redirect
//! - `GET /stats` - Mapping-cache counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
