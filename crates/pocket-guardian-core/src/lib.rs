//! Core types and utilities for pocket-guardian.
//!
//! This crate provides the building blocks shared by every other crate:
//!
//! - **Mode catalog**: the fixed mapping from a mode name to the items a user
//!   is expected to carry
//! - **Scan simulation**: per-item detected/missing draws from an injectable
//!   [`RandomSource`]
//! - **Domain types**: scan items, history entries, presence results
//! - **Timestamps**: the fixed-precision UTC format used for history ordering
//!
//! # Example
//!
//! ```
//! use pocket_guardian_core::{scan, FixedRandom, ItemStatus, ModeCatalog};
//!
//! let catalog = ModeCatalog::default();
//! let items = catalog.items_for("Gym").unwrap();
//!
//! // A draw of 0.9 is above the miss threshold, so every item is detected.
//! let results = scan(items, &FixedRandom::new(0.9));
//! assert!(results.iter().all(|i| i.status == ItemStatus::Detected));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod scan;
pub mod time;
pub mod types;

pub use catalog::{ModeCatalog, DEFAULT_MODE};
pub use error::{CoreError, Result};
pub use scan::{
    resolve_items, scan, status_for, FixedRandom, RandomSource, SeededRandom, SequenceRandom,
    ThreadRandom, MISS_THRESHOLD,
};
pub use time::{normalize_timestamp, now_timestamp, TIMESTAMP_FORMAT};
pub use types::{HistoryEntry, ItemStatus, NewHistoryEntry, Presence, ScanItem};
