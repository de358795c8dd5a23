//! History endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use pocket_guardian_control::{Checklist, HistoryEntry, NewHistoryEntry};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::GatewayState;

/// Body for `POST /history`.
#[derive(Debug, Deserialize)]
pub struct HistoryBody {
    /// Name of the missing item.
    pub item_name: String,
    /// Mode the item belongs to.
    pub mode: String,
    /// ISO-8601 timestamp of the event.
    pub timestamp: String,
}

/// Response for `POST /history`.
#[derive(Debug, Serialize)]
pub struct HistoryAdded {
    /// Confirmation message.
    pub message: &'static str,
    /// The stored entry.
    pub entry: HistoryEntry,
}

/// Response for `DELETE /history`.
#[derive(Debug, Serialize)]
pub struct HistoryCleared {
    /// Confirmation message.
    pub message: &'static str,
    /// Number of entries removed.
    pub removed: usize,
}

/// List all history entries, most recent first.
///
/// # Errors
///
/// Returns `500` if the history cannot be read.
pub async fn list_history<C>(
    State(state): State<Arc<GatewayState<C>>>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let entries = state.checklist.list_history().await?;
    Ok(Json(entries))
}

/// Record a missing-item event.
///
/// # Errors
///
/// Returns `422` if the body is malformed and `500` if the entry cannot be
/// stored.
pub async fn add_history<C>(
    State(state): State<Arc<GatewayState<C>>>,
    ValidatedJson(body): ValidatedJson<HistoryBody>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let entry = state
        .checklist
        .record_missing(NewHistoryEntry::new(body.item_name, body.mode, body.timestamp))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to add history item");
            ApiError::Internal(format!("failed to add history item: {e}"))
        })?;

    Ok(Json(HistoryAdded {
        message: "History item added successfully",
        entry,
    }))
}

/// Remove all history entries.
///
/// # Errors
///
/// Returns `500` if the history cannot be cleared.
pub async fn clear_history<C>(
    State(state): State<Arc<GatewayState<C>>>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Checklist + 'static,
{
    let removed = state.checklist.clear_history().await?;
    Ok(Json(HistoryCleared {
        message: "History cleared successfully",
        removed,
    }))
}
