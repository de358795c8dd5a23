//! Checklist service for pocket-guardian.
//!
//! This crate provides the business logic behind the HTTP API. It resolves
//! mode item lists, runs simulated scans, records missing items, and manages
//! BLE object registrations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Gateway (HTTP)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ChecklistService                        │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │   Mode      │ │    Scan     │ │   Random            │   │
//! │  │   Catalog   │ │  Simulator  │ │   Source            │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                     ┌────────┴────────┐
//!                     ▼                 ▼
//!              ┌──────────────┐  ┌──────────────┐
//!              │ HistoryStore │  │ BleRegistry  │
//!              └──────────────┘  └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use pocket_guardian_control::{Checklist, ChecklistService, ScanRequest};
//! use pocket_guardian_core::FixedRandom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ChecklistService::with_random(Arc::new(FixedRandom::new(0.0)));
//!
//! let outcome = service.scan(ScanRequest::new("Gym")).await?;
//! assert_eq!(outcome.missing_items(), ["Wallet", "Bottle", "Towel"]);
//!
//! // Every missing item was logged.
//! assert_eq!(service.list_history().await?.len(), 3);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod service;
pub mod types;

pub use error::{ControlError, Result};
pub use service::{Checklist, ChecklistService};
pub use types::{ChecklistConfig, ObjectListing, ScanOutcome, ScanRequest};

// Re-export commonly used types from dependencies for convenience
pub use pocket_guardian_core::{HistoryEntry, ItemStatus, NewHistoryEntry, Presence, ScanItem};
