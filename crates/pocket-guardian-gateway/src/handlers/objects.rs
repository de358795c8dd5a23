//! BLE object endpoints.
//!
//! Objects are registered by name against a BLE identifier. A BLE scan
//! submits the identifiers currently in range and gets back, for every
//! registered object, whether it is present.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use pocket_guardian_control::{Checklist, Presence};

use crate::error::ApiError;
use crate::extract::{require_non_blank, ValidatedJson};
use crate::state::GatewayState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body for `POST /register_ble`.
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    /// Name of the object.
    pub object_name: String,
    /// BLE identifier of its tag.
    pub ble_uuid: String,
}

/// Response for `POST /register_ble`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message.
    pub message: String,
    /// Stored object name.
    pub object_name: String,
    /// Stored identifier.
    pub ble_uuid: String,
}

/// Generic confirmation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Confirmation message.
    pub message: String,
}

/// Body for `POST /scan/ble`.
#[derive(Debug, Deserialize)]
pub struct BleScanBody {
    /// Identifiers currently in range.
    pub ble_uuids: Vec<String>,
}

/// Response for `POST /scan/ble`.
#[derive(Debug, Serialize)]
pub struct BleScanResponse {
    /// Object name to presence.
    pub results: BTreeMap<String, Presence>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Register or re-register a BLE object.
///
/// # Errors
///
/// Returns `422` if either field is missing or blank.
pub async fn register_object<C>(
    State(state): State<Arc<GatewayState<C>>>,
    ValidatedJson(body): ValidatedJson<RegisterBody>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    require_non_blank("object_name", &body.object_name)?;
    require_non_blank("ble_uuid", &body.ble_uuid)?;

    state
        .checklist
        .register_object(&body.object_name, &body.ble_uuid)
        .await?;

    Ok(Json(RegisterResponse {
        message: format!("Object '{}' registered successfully", body.object_name),
        object_name: body.object_name,
        ble_uuid: body.ble_uuid,
    }))
}

/// Remove a BLE object.
///
/// # Errors
///
/// Returns `404 Not Found` if the object is not registered.
pub async fn unregister_object<C>(
    State(state): State<Arc<GatewayState<C>>>,
    Path(object_name): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    state.checklist.unregister_object(&object_name).await?;

    Ok(Json(MessageResponse {
        message: format!("Object '{object_name}' unregistered successfully"),
    }))
}

/// List every registered object.
///
/// # Errors
///
/// Returns `500` if the registry cannot be read.
pub async fn list_objects<C>(
    State(state): State<Arc<GatewayState<C>>>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let listing = state.checklist.list_objects().await?;
    Ok(Json(listing))
}

/// Check which registered objects are in range.
///
/// # Errors
///
/// Returns `422` if the body is malformed.
pub async fn scan_objects<C>(
    State(state): State<Arc<GatewayState<C>>>,
    ValidatedJson(body): ValidatedJson<BleScanBody>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let results = state.checklist.check_presence(&body.ble_uuids).await?;
    Ok(Json(BleScanResponse { results }))
}
