//! Health check endpoint for service monitoring.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,
}

/// Health check handler.
///
/// Needs no API key and has no failure modes.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "Up"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "Up" })
}
