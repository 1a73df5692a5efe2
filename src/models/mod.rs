//! Models Module
//!
//! Request and response DTOs for the relay HTTP API.

pub mod requests;
pub mod responses;

pub use requests::ResolveParams;
pub use responses::{HealthResponse, StatsResponse};
