//! Request and result types for checklist operations.

use std::collections::BTreeMap;

use pocket_guardian_core::{HistoryEntry, ScanItem};
use serde::{Deserialize, Serialize};

/// Request to scan the items of a mode.
///
/// Also the body of `POST /scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    /// Mode to scan.
    pub mode: String,
    /// Items to scan instead of the mode's catalog list.
    #[serde(default)]
    pub custom_items: Option<Vec<String>>,
}

impl ScanRequest {
    /// Scan the catalog items of `mode`.
    #[must_use]
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            custom_items: None,
        }
    }

    /// Scan `items` under the label `mode`.
    #[must_use]
    pub fn with_items(mode: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            mode: mode.into(),
            custom_items: Some(items),
        }
    }

    /// Returns true if a non-empty custom list replaces the catalog list.
    #[must_use]
    pub fn uses_custom_items(&self) -> bool {
        self.custom_items.as_ref().is_some_and(|items| !items.is_empty())
    }
}

/// Result of a scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Mode the scan ran under.
    pub mode: String,
    /// Per-item results in scan order.
    pub items: Vec<ScanItem>,
    /// History entries written for the missing items.
    pub logged: Vec<HistoryEntry>,
}

impl ScanOutcome {
    /// Returns true if no item is missing.
    #[must_use]
    pub fn all_detected(&self) -> bool {
        !self.items.iter().any(ScanItem::is_missing)
    }

    /// Names of the missing items in scan order.
    #[must_use]
    pub fn missing_items(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.is_missing())
            .map(|i| i.name.clone())
            .collect()
    }
}

/// Snapshot of the BLE registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectListing {
    /// Object name to BLE identifier.
    pub objects: BTreeMap<String, String>,
    /// Number of registered objects.
    pub count: usize,
}

/// Configuration for the checklist service.
#[derive(Debug, Clone)]
pub struct ChecklistConfig {
    /// Write a history entry for every item a scan reports missing.
    pub log_missing_items: bool,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            log_missing_items: true,
        }
    }
}
