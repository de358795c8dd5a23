//! Mode catalog endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use pocket_guardian_control::Checklist;

use crate::state::GatewayState;

/// Response for the mode listing.
#[derive(Debug, Serialize)]
pub struct ModesResponse {
    /// Mode name to expected items.
    pub modes: BTreeMap<String, Vec<String>>,
}

/// List every mode and its items.
pub async fn list_modes<C>(State(state): State<Arc<GatewayState<C>>>) -> impl IntoResponse
where
    C: Checklist + 'static,
{
    Json(ModesResponse {
        modes: state.checklist.list_modes().await,
    })
}
