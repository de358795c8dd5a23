//! Scan endpoints.
//!
//! Both `GET /scan` and `POST /scan` record every missing item in the
//! history.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use pocket_guardian_control::{Checklist, ScanItem, ScanOutcome, ScanRequest};
use pocket_guardian_core::DEFAULT_MODE;

use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::state::GatewayState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query parameters for `GET /scan`.
#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    /// Mode to scan (default: `Daily`).
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

/// Response for a scan.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    /// Mode the scan ran under.
    pub mode: String,
    /// Per-item results in scan order.
    pub items: Vec<ScanItem>,
    /// True if nothing is missing.
    pub all_detected: bool,
    /// Names of the missing items.
    pub missing_items: Vec<String>,
}

impl From<ScanOutcome> for ScanResponse {
    fn from(outcome: ScanOutcome) -> Self {
        Self {
            all_detected: outcome.all_detected(),
            missing_items: outcome.missing_items(),
            mode: outcome.mode,
            items: outcome.items,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Scan the catalog items of a mode.
///
/// # Errors
///
/// Returns `400 Bad Request` if the mode is unknown or the query string is
/// malformed.
pub async fn scan_mode<C>(
    State(state): State<Arc<GatewayState<C>>>,
    ValidatedQuery(query): ValidatedQuery<ScanQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let outcome = state.checklist.scan(ScanRequest::new(query.mode)).await?;
    Ok(Json(ScanResponse::from(outcome)))
}

/// Scan a mode, or a custom item list when one is supplied.
///
/// # Errors
///
/// Returns `400 Bad Request` if no items can be resolved and `422` if the
/// body is malformed.
pub async fn scan_custom<C>(
    State(state): State<Arc<GatewayState<C>>>,
    ValidatedJson(request): ValidatedJson<ScanRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let outcome = state.checklist.scan(request).await?;
    Ok(Json(ScanResponse::from(outcome)))
}
