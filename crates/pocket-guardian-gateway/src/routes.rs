//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use pocket_guardian_control::Checklist;

use crate::handlers::{health, history, modes, objects, scan};
use crate::state::GatewayState;

/// Methods a browser client may use in cross-origin requests.
const CORS_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Service name and version
/// - `GET /health` - Health check
///
/// ## Scans
/// - `GET /scan?mode=` - Scan a mode's items
/// - `POST /scan` - Scan a mode or a custom item list
/// - `GET /modes` - List modes and their items
///
/// ## History
/// - `GET /history` - List missing-item events, newest first
/// - `POST /history` - Record a missing-item event
/// - `DELETE /history` - Clear all events
///
/// ## BLE objects
/// - `POST /register_ble` - Register an object
/// - `DELETE /register_ble/:object_name` - Unregister an object
/// - `GET /objects` - List registered objects
/// - `POST /scan/ble` - Check presence against submitted identifiers
pub fn create_router<C>(state: GatewayState<C>) -> Router
where
    C: Checklist + 'static,
{
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Service
        .route("/", get(health::service_info))
        .route("/health", get(health::health))
        // Scans
        .route(
            "/scan",
            get(scan::scan_mode::<C>).post(scan::scan_custom::<C>),
        )
        .route("/modes", get(modes::list_modes::<C>))
        // History
        .route(
            "/history",
            get(history::list_history::<C>)
                .post(history::add_history::<C>)
                .delete(history::clear_history::<C>),
        )
        // BLE objects
        .route("/register_ble", post(objects::register_object::<C>))
        .route(
            "/register_ble/:object_name",
            delete(objects::unregister_object::<C>),
        )
        .route("/objects", get(objects::list_objects::<C>))
        .route("/scan/ble", post(objects::scan_objects::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(CORS_METHODS)
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(origins)
    }
}
