//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use pocket_guardian_control::Checklist;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// Handlers reach the history log and BLE registry only through the
/// checklist service held here.
pub struct GatewayState<C>
where
    C: Checklist,
{
    /// The checklist service.
    pub checklist: Arc<C>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<C> GatewayState<C>
where
    C: Checklist,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(checklist: Arc<C>, config: GatewayConfig) -> Self {
        Self { checklist, config }
    }
}

impl<C> Clone for GatewayState<C>
where
    C: Checklist,
{
    fn clone(&self) -> Self {
        Self {
            checklist: Arc::clone(&self.checklist),
            config: self.config.clone(),
        }
    }
}
