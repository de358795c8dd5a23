//! Missing-item history log.

use parking_lot::RwLock;

use pocket_guardian_core::{HistoryEntry, NewHistoryEntry};

/// Append-only log of missing-item events.
///
/// A new entry's id is the log length plus one, assigned under the write
/// lock, so ids stay dense and unique under concurrent appends.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryStore {
    /// Create a new empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event and return the stored entry.
    pub fn append(&self, entry: NewHistoryEntry) -> HistoryEntry {
        let mut entries = self.entries.write();
        let stored = HistoryEntry::from_new(entries.len() as u64 + 1, entry);
        entries.push(stored.clone());
        stored
    }

    /// Append several events under one lock acquisition.
    ///
    /// The returned entries have consecutive ids in input order.
    pub fn append_all(&self, new_entries: Vec<NewHistoryEntry>) -> Vec<HistoryEntry> {
        if new_entries.is_empty() {
            return Vec::new();
        }

        let mut entries = self.entries.write();
        let first_id = entries.len() as u64 + 1;
        let stored: Vec<HistoryEntry> = new_entries
            .into_iter()
            .zip(first_id..)
            .map(|(entry, id)| HistoryEntry::from_new(id, entry))
            .collect();
        entries.extend(stored.iter().cloned());
        stored
    }

    /// All entries, most recent timestamp first.
    ///
    /// Timestamps are compared as strings. The sort is stable, so entries
    /// with equal timestamps keep insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<HistoryEntry> {
        let mut entries = self.entries.read().clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Remove every entry and return how many were removed.
    ///
    /// The next append starts again at id 1.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        tracing::debug!(removed, "History store cleared");
        removed
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pocket_guardian_core::ItemStatus;

    use super::*;

    fn event(item: &str, timestamp: &str) -> NewHistoryEntry {
        NewHistoryEntry::new(item, "Gym", timestamp)
    }

    #[test]
    fn ids_start_at_one_and_ascend() {
        let store = HistoryStore::new();

        let first = store.append(event("Wallet", "2024-05-01T08:00:00.000000"));
        let second = store.append(event("Towel", "2024-05-01T09:00:00.000000"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.status, ItemStatus::Missing);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn list_is_timestamp_descending() {
        let store = HistoryStore::new();
        store.append(event("T1", "2024-05-01T08:00:00.000000"));
        store.append(event("T3", "2024-05-03T08:00:00.000000"));
        store.append(event("T2", "2024-05-02T08:00:00.000000"));

        let names: Vec<_> = store
            .list_all()
            .into_iter()
            .map(|e| e.item_name)
            .collect();
        assert_eq!(names, ["T3", "T2", "T1"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let store = HistoryStore::new();
        let ts = "2024-05-01T08:00:00.000000";
        store.append_all(vec![event("Wallet", ts), event("Bottle", ts)]);

        let ids: Vec<_> = store.list_all().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn append_all_assigns_consecutive_ids() {
        let store = HistoryStore::new();
        store.append(event("Keys", "2024-05-01T08:00:00.000000"));

        let stored = store.append_all(vec![
            event("Wallet", "2024-05-02T08:00:00.000000"),
            event("Towel", "2024-05-02T08:00:00.000000"),
        ]);
        assert_eq!(stored.iter().map(|e| e.id).collect::<Vec<_>>(), [2, 3]);
        assert!(store.append_all(Vec::new()).is_empty());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn clear_restarts_ids() {
        let store = HistoryStore::new();
        store.append(event("Wallet", "2024-05-01T08:00:00.000000"));
        store.append(event("Keys", "2024-05-01T08:00:00.000000"));

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());

        let entry = store.append(event("Towel", "2024-05-01T09:00:00.000000"));
        assert_eq!(entry.id, 1);
    }

    #[test]
    fn concurrent_appends_get_distinct_ids() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 50;

        let store = HistoryStore::new();
        std::thread::scope(|s| {
            for t in 0..THREADS {
                let store = &store;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        store.append(event(&format!("item-{t}-{i}"), "2024-05-01T08:00:00.000000"));
                    }
                });
            }
        });

        let ids: HashSet<u64> = store.list_all().into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), THREADS * PER_THREAD);
        assert_eq!(ids.iter().max().copied(), Some((THREADS * PER_THREAD) as u64));
    }
}
