//! HTTP gateway for the pocket-guardian item checklist service.
//!
//! This crate exposes the checklist service over plain JSON/HTTP:
//!
//! - Simulated scans of a mode's expected items
//! - The missing-item history log
//! - BLE object registration and presence checks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Clients                             │
//! │                      (HTTP / JSON)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  pocket-guardian-gateway                    │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │   CORS /    │ │   Router    │ │   ValidatedJson     │   │
//! │  │   Tracing   │ │  + Handlers │ │   Extractor         │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                    ┌──────────────────┐
//!                    │ ChecklistService │
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pocket_guardian_control::ChecklistService;
//! use pocket_guardian_gateway::{create_router, GatewayConfig, GatewayState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let checklist = Arc::new(ChecklistService::with_defaults());
//!
//! let config = GatewayConfig::default();
//! let listen_addr = config.listen_addr();
//! let app = create_router(GatewayState::new(checklist, config));
//!
//! let listener = tokio::net::TcpListener::bind(listen_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;
