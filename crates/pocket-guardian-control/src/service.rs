//! Checklist service implementation.
//!
//! This module provides the `Checklist` trait and `ChecklistService`
//! implementation that coordinates the mode catalog, the scan simulator, and
//! the two in-memory stores.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use pocket_guardian_core::{
    normalize_timestamp, now_timestamp, resolve_items, scan, HistoryEntry, ModeCatalog,
    NewHistoryEntry, Presence, RandomSource, ThreadRandom,
};
use pocket_guardian_store::{BleRegistry, HistoryStore};

use crate::error::Result;
use crate::types::{ChecklistConfig, ObjectListing, ScanOutcome, ScanRequest};

/// Trait defining the checklist operations.
///
/// Implementations own all mutable state. Callers only see results and
/// errors.
#[async_trait]
pub trait Checklist: Send + Sync {
    // =========================================================================
    // Modes & Scans
    // =========================================================================

    /// All modes and their expected items.
    async fn list_modes(&self) -> BTreeMap<String, Vec<String>>;

    /// Scan the items of a mode, or a custom item list.
    ///
    /// Missing items are appended to the history with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::InvalidMode` if no items can be resolved. No
    /// history is written in that case.
    async fn scan(&self, request: ScanRequest) -> Result<ScanOutcome>;

    // =========================================================================
    // History
    // =========================================================================

    /// All history entries, most recent first.
    async fn list_history(&self) -> Result<Vec<HistoryEntry>>;

    /// Record a missing-item event submitted by a client.
    async fn record_missing(&self, entry: NewHistoryEntry) -> Result<HistoryEntry>;

    /// Remove all history entries and return how many were removed.
    async fn clear_history(&self) -> Result<usize>;

    // =========================================================================
    // BLE Objects
    // =========================================================================

    /// Register or re-register a BLE object.
    ///
    /// Returns the previous identifier if the name was already registered.
    async fn register_object(&self, object_name: &str, ble_uuid: &str) -> Result<Option<String>>;

    /// Remove a BLE object.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::ObjectNotFound` if the name is not registered.
    async fn unregister_object(&self, object_name: &str) -> Result<()>;

    /// All registered objects.
    async fn list_objects(&self) -> Result<ObjectListing>;

    /// Presence of every registered object in the submitted identifiers.
    async fn check_presence(&self, ble_uuids: &[String]) -> Result<BTreeMap<String, Presence>>;
}

/// The main checklist service implementation.
pub struct ChecklistService {
    catalog: ModeCatalog,
    rng: Arc<dyn RandomSource>,
    history: Arc<HistoryStore>,
    registry: Arc<BleRegistry>,
    config: ChecklistConfig,
}

impl ChecklistService {
    /// Create a new checklist service.
    #[must_use]
    pub fn new(
        catalog: ModeCatalog,
        rng: Arc<dyn RandomSource>,
        history: Arc<HistoryStore>,
        registry: Arc<BleRegistry>,
        config: ChecklistConfig,
    ) -> Self {
        Self {
            catalog,
            rng,
            history,
            registry,
            config,
        }
    }

    /// Create with the seeded catalog, empty stores, and the given random
    /// source.
    #[must_use]
    pub fn with_random(rng: Arc<dyn RandomSource>) -> Self {
        Self::new(
            ModeCatalog::default(),
            rng,
            Arc::new(HistoryStore::new()),
            Arc::new(BleRegistry::new()),
            ChecklistConfig::default(),
        )
    }

    /// Create with default configuration and the thread RNG.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::with_random(Arc::new(ThreadRandom))
    }

    /// Get the mode catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ModeCatalog {
        &self.catalog
    }

}

#[async_trait]
impl Checklist for ChecklistService {
    // =========================================================================
    // Modes & Scans
    // =========================================================================

    async fn list_modes(&self) -> BTreeMap<String, Vec<String>> {
        self.catalog.list_modes().clone()
    }

    async fn scan(&self, request: ScanRequest) -> Result<ScanOutcome> {
        let custom = request.uses_custom_items();
        let ScanRequest { mode, custom_items } = request;

        let items = resolve_items(&self.catalog, &mode, custom_items)?;
        let results = scan(&items, self.rng.as_ref());

        let logged = if self.config.log_missing_items {
            let timestamp = now_timestamp();
            let missing = results
                .iter()
                .filter(|i| i.is_missing())
                .map(|i| NewHistoryEntry::new(i.name.clone(), mode.clone(), timestamp.clone()))
                .collect();
            self.history.append_all(missing)
        } else {
            Vec::new()
        };

        tracing::info!(
            mode = %mode,
            custom,
            scanned = results.len(),
            missing = results.iter().filter(|i| i.is_missing()).count(),
            logged = logged.len(),
            "Scan completed"
        );

        Ok(ScanOutcome {
            mode,
            items: results,
            logged,
        })
    }

    // =========================================================================
    // History
    // =========================================================================

    async fn list_history(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self.history.list_all();
        tracing::debug!(count = entries.len(), "Listed history");
        Ok(entries)
    }

    async fn record_missing(&self, entry: NewHistoryEntry) -> Result<HistoryEntry> {
        let entry = NewHistoryEntry {
            timestamp: normalize_timestamp(&entry.timestamp),
            ..entry
        };
        let stored = self.history.append(entry);

        tracing::info!(
            id = stored.id,
            item_name = %stored.item_name,
            mode = %stored.mode,
            "Recorded missing item"
        );

        Ok(stored)
    }

    async fn clear_history(&self) -> Result<usize> {
        let removed = self.history.clear();
        tracing::info!(removed, "Cleared history");
        Ok(removed)
    }

    // =========================================================================
    // BLE Objects
    // =========================================================================

    async fn register_object(&self, object_name: &str, ble_uuid: &str) -> Result<Option<String>> {
        let previous = self.registry.register(object_name, ble_uuid);

        tracing::info!(
            object_name = %object_name,
            ble_uuid = %ble_uuid,
            replaced = previous.is_some(),
            "Registered BLE object"
        );

        Ok(previous)
    }

    async fn unregister_object(&self, object_name: &str) -> Result<()> {
        let ble_uuid = self.registry.unregister(object_name)?;
        tracing::info!(object_name = %object_name, ble_uuid = %ble_uuid, "Unregistered BLE object");
        Ok(())
    }

    async fn list_objects(&self) -> Result<ObjectListing> {
        let objects = self.registry.list_all();
        Ok(ObjectListing {
            count: objects.len(),
            objects,
        })
    }

    async fn check_presence(&self, ble_uuids: &[String]) -> Result<BTreeMap<String, Presence>> {
        let results = self.registry.check_presence(ble_uuids);

        tracing::debug!(
            submitted = ble_uuids.len(),
            registered = results.len(),
            present = results.values().filter(|p| **p == Presence::Present).count(),
            "Checked BLE presence"
        );

        Ok(results)
    }
}
