//! Service info and health check endpoints.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "Pocket Guardian API";

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Service name.
    pub message: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Root handler.
///
/// ```text
/// GET /
///
/// Response: 200 OK
/// {
///   "message": "Pocket Guardian API",
///   "version": "0.1.0"
/// }
/// ```
pub async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check handler.
pub async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}
