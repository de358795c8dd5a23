//! Mode catalog.
//!
//! A mode names a profile of items the user is expected to carry. The catalog
//! is built once at startup and never mutated afterwards.

use std::collections::BTreeMap;

use crate::error::{CoreError, Result};

/// Mode used when a scan request names none.
pub const DEFAULT_MODE: &str = "Daily";

const SEED: &[(&str, &[&str])] = &[
    ("Daily", &["Wallet", "Keys"]),
    ("College", &["Wallet", "ID", "Earbuds"]),
    ("Gym", &["Wallet", "Bottle", "Towel"]),
    ("Trip", &["Wallet", "Charger", "Powerbank"]),
];

/// Read-only mapping from mode name to its ordered item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeCatalog {
    modes: BTreeMap<String, Vec<String>>,
}

impl ModeCatalog {
    /// Build a catalog from `(mode, items)` pairs.
    ///
    /// A later pair with the same mode name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyMode` if any mode has no items.
    pub fn new<I, M, S>(modes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (M, Vec<S>)>,
        M: Into<String>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (mode, items) in modes {
            let mode = mode.into();
            if items.is_empty() {
                return Err(CoreError::EmptyMode(mode));
            }
            map.insert(mode, items.into_iter().map(Into::into).collect());
        }
        Ok(Self { modes: map })
    }

    /// All modes and their items.
    #[must_use]
    pub const fn list_modes(&self) -> &BTreeMap<String, Vec<String>> {
        &self.modes
    }

    /// Items for a mode, or `None` if the mode is unknown.
    #[must_use]
    pub fn items_for(&self, mode: &str) -> Option<&[String]> {
        self.modes.get(mode).map(Vec::as_slice)
    }

    /// Number of modes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Returns true if the catalog has no modes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Default for ModeCatalog {
    fn default() -> Self {
        let modes = SEED
            .iter()
            .map(|(mode, items)| {
                (
                    (*mode).to_string(),
                    items.iter().map(|i| (*i).to_string()).collect(),
                )
            })
            .collect();
        Self { modes }
    }
}
