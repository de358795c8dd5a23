//! Scan simulation.
//!
//! Every item gets an independent uniform draw in `[0, 1)`. Draws strictly
//! above [`MISS_THRESHOLD`] mean the item was detected, giving roughly a
//! 70/30 detected/missing split.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::ModeCatalog;
use crate::error::{CoreError, Result};
use crate::types::{ItemStatus, ScanItem};

/// Draws at or below this value report the item as missing.
pub const MISS_THRESHOLD: f64 = 0.3;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Next draw in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible draws from a seeded `StdRng`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.lock().gen::<f64>()
    }
}

/// Returns the same value for every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(f64);

impl FixedRandom {
    /// Create a source that always returns `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of values.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Create a source cycling through `values`.
    ///
    /// An empty list behaves like a constant `0.0`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[idx % self.values.len()]
    }
}

/// Status for a single draw.
#[must_use]
pub fn status_for(draw: f64) -> ItemStatus {
    if draw > MISS_THRESHOLD {
        ItemStatus::Detected
    } else {
        ItemStatus::Missing
    }
}

/// Scan `items` in order, one independent draw per item.
pub fn scan<S, R>(items: &[S], rng: &R) -> Vec<ScanItem>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    items
        .iter()
        .map(|name| ScanItem {
            name: name.as_ref().to_string(),
            status: status_for(rng.next_unit()),
        })
        .collect()
}

/// Resolve the item list for a scan.
///
/// A non-empty `custom_items` list is used verbatim. Otherwise the catalog
/// list for `mode` is used.
///
/// # Errors
///
/// Returns `CoreError::InvalidMode` if neither yields any items.
pub fn resolve_items(
    catalog: &ModeCatalog,
    mode: &str,
    custom_items: Option<Vec<String>>,
) -> Result<Vec<String>> {
    match custom_items {
        Some(items) if !items.is_empty() => Ok(items),
        _ => catalog
            .items_for(mode)
            .map(<[String]>::to_vec)
            .ok_or_else(|| CoreError::InvalidMode(mode.to_string())),
    }
}
