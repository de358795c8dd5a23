//! Domain types shared across crates.
//!
//! These types describe scan results, history records, and BLE presence
//! results as they appear on the wire.

use serde::{Deserialize, Serialize};

/// Detection status of a single scanned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// The item was seen by the scan.
    Detected,
    /// The item was not seen by the scan.
    Missing,
}

/// One item in a scan result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanItem {
    /// Item name.
    pub name: String,
    /// Detection status.
    pub status: ItemStatus,
}

impl ScanItem {
    /// Returns true if the scan did not detect this item.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.status == ItemStatus::Missing
    }
}

/// A missing-item event to be appended to the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHistoryEntry {
    /// Name of the missing item.
    pub item_name: String,
    /// Mode the scan ran under.
    pub mode: String,
    /// ISO-8601 timestamp of the event.
    pub timestamp: String,
}

impl NewHistoryEntry {
    /// Create a new history event.
    #[must_use]
    pub fn new(
        item_name: impl Into<String>,
        mode: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            mode: mode.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// A stored missing-item event.
///
/// Entries are immutable once stored. `status` is always
/// [`ItemStatus::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based identifier, unique within the current history.
    pub id: u64,
    /// Name of the missing item.
    pub item_name: String,
    /// Mode the scan ran under.
    pub mode: String,
    /// ISO-8601 timestamp of the event.
    pub timestamp: String,
    /// Always `missing`.
    pub status: ItemStatus,
}

impl HistoryEntry {
    /// Build a stored entry from a new event and its assigned id.
    #[must_use]
    pub fn from_new(id: u64, entry: NewHistoryEntry) -> Self {
        Self {
            id,
            item_name: entry.item_name,
            mode: entry.mode,
            timestamp: entry.timestamp,
            status: ItemStatus::Missing,
        }
    }
}

/// Presence of a registered BLE object in a submitted identifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// The object's identifier was submitted.
    Present,
    /// The object's identifier was not submitted.
    Missing,
}
