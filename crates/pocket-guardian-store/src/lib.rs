//! In-memory storage for pocket-guardian.
//!
//! This crate holds the two pieces of process-wide mutable state:
//!
//! - [`HistoryStore`]: append-only log of missing-item events
//! - [`BleRegistry`]: object name to BLE identifier mapping
//!
//! Each store guards its collection behind a single `RwLock`. Writers are
//! mutually exclusive and readers never observe a half-applied write.
//! Nothing is persisted; a restart starts from empty stores.
//!
//! # Example
//!
//! ```
//! use pocket_guardian_core::NewHistoryEntry;
//! use pocket_guardian_store::{BleRegistry, HistoryStore};
//!
//! let history = HistoryStore::new();
//! let entry = history.append(NewHistoryEntry::new("Keys", "Daily", "2024-05-01T08:30:00.000000"));
//! assert_eq!(entry.id, 1);
//!
//! let registry = BleRegistry::new();
//! registry.register("Wallet", "UUID-A");
//! assert_eq!(registry.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ble;
pub mod error;
pub mod history;

pub use ble::BleRegistry;
pub use error::{Result, StoreError};
pub use history::HistoryStore;
