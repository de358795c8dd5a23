//! BLE object registry.
//!
//! Maps a user-chosen object name to the BLE identifier of the tag attached
//! to it. Names are unique; identifiers are not.

use std::collections::{BTreeMap, HashSet};

use parking_lot::RwLock;

use pocket_guardian_core::Presence;

use crate::error::{Result, StoreError};

/// Registry of named BLE objects.
#[derive(Debug, Default)]
pub struct BleRegistry {
    objects: RwLock<BTreeMap<String, String>>,
}

impl BleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the identifier for an object.
    ///
    /// Returns the previous identifier if the object was already registered.
    pub fn register(
        &self,
        object_name: impl Into<String>,
        ble_uuid: impl Into<String>,
    ) -> Option<String> {
        self.objects
            .write()
            .insert(object_name.into(), ble_uuid.into())
    }

    /// Remove an object and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ObjectNotFound` if the name is not registered.
    pub fn unregister(&self, object_name: &str) -> Result<String> {
        self.objects
            .write()
            .remove(object_name)
            .ok_or_else(|| StoreError::ObjectNotFound(object_name.to_string()))
    }

    /// Snapshot of every registration, sorted by name.
    #[must_use]
    pub fn list_all(&self) -> BTreeMap<String, String> {
        self.objects.read().clone()
    }

    /// Report every registered object as present or missing.
    ///
    /// An object is present when its identifier is in `ble_uuids`. Submitted
    /// identifiers that match no object are ignored.
    pub fn check_presence<I, S>(&self, ble_uuids: I) -> BTreeMap<String, Presence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seen: HashSet<String> = ble_uuids
            .into_iter()
            .map(|u| u.as_ref().to_string())
            .collect();

        self.objects
            .read()
            .iter()
            .map(|(name, uuid)| {
                let presence = if seen.contains(uuid) {
                    Presence::Present
                } else {
                    Presence::Missing
                };
                (name.clone(), presence)
            })
            .collect()
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}
