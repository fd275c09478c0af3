//! In-memory record collection with auto-incrementing ids

use chrono::{DateTime, Utc};

/// A record stored in a [`Collection`]
pub trait Record: Clone {
    /// Collection-unique id
    fn id(&self) -> u64;
    /// Date used for newest-first listing
    fn sort_key(&self) -> DateTime<Utc>;
}

/// Ordered records plus the highest id ever seen
///
/// Ids come from the high-water mark, so deleting the newest record never
/// frees its id for reuse.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    high_water: u64,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            high_water: 0,
        }
    }

    /// Seed from existing records, keeping their order
    pub fn from_records(records: Vec<T>) -> Self {
        let high_water = records.iter().map(Record::id).max().unwrap_or(0);
        Self {
            records,
            high_water,
        }
    }

    /// Snapshot sorted newest first; ties keep insertion order
    pub fn list(&self) -> Vec<T> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        records
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Id the next insert will receive
    pub fn next_id(&self) -> u64 {
        self.high_water + 1
    }

    /// Build a record with the next id and prepend it
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let id = self.next_id();
        let record = build(id);
        self.high_water = self.high_water.max(record.id());
        self.records.insert(0, record.clone());
        record
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Drop every record; returns how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u64,
        at: DateTime<Utc>,
    }

    impl Record for Note {
        fn id(&self) -> u64 {
            self.id
        }

        fn sort_key(&self) -> DateTime<Utc> {
            self.at
        }
    }

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
    }

    #[test]
    fn test_list_newest_first() {
        let collection = Collection::from_records(vec![
            Note { id: 1, at: day(1) },
            Note { id: 2, at: day(5) },
            Note { id: 3, at: day(3) },
        ]);

        let ids: Vec<u64> = collection.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut collection = Collection::new();

        let first = collection.insert_with(|id| Note { id, at: day(0) });
        assert_eq!(first.id, 1);

        assert!(collection.remove(1).is_some());
        let second = collection.insert_with(|id| Note { id, at: day(0) });
        assert_eq!(second.id, 2);

        collection.clear();
        let third = collection.insert_with(|id| Note { id, at: day(0) });
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_seeded_ids_continue_from_max() {
        let mut collection = Collection::from_records(vec![
            Note { id: 7, at: day(1) },
            Note { id: 3, at: day(2) },
        ]);
        assert_eq!(collection.next_id(), 8);

        collection.remove(7);
        assert_eq!(collection.next_id(), 8);
    }

    #[test]
    fn test_remove_missing() {
        let mut collection: Collection<Note> = Collection::new();
        assert!(collection.remove(42).is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_equal_dates_keep_insert_order() {
        let mut collection = Collection::new();
        collection.insert_with(|id| Note { id, at: day(0) });
        collection.insert_with(|id| Note { id, at: day(0) });

        let ids: Vec<u64> = collection.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(collection.len(), 2);
    }
}
