//! redb-based storage for the saved delivery location and order counter
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `location` | `"current"` | `SavedLocation` | Single saved delivery city |
//! | `counters` | `"order_count"` | `u64` | Monotonic order number |
//!
//! The location slot is last-write-wins: a new pick or a new detection simply
//! replaces whatever was saved before. Reads tolerate a missing or unreadable
//! value and report it as "no saved location".

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::SavedLocation;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Saved location slot: key = "current", value = JSON-serialized SavedLocation
const LOCATION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("location");

/// Counters: key = counter name, value = u64
const COUNTER_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const LOCATION_KEY: &str = "current";
const ORDER_COUNT_KEY: &str = "order_count";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Location and counter storage backed by redb
#[derive(Clone)]
pub struct LocationStore {
    db: Arc<Database>,
}

impl LocationStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCATION_TABLE)?;
            let mut counters = write_txn.open_table(COUNTER_TABLE)?;
            if counters.get(ORDER_COUNT_KEY)?.is_none() {
                counters.insert(ORDER_COUNT_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCATION_TABLE)?;
            let mut counters = write_txn.open_table(COUNTER_TABLE)?;
            counters.insert(ORDER_COUNT_KEY, 0u64)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Saved Location ==========

    /// Read the saved location, if any
    pub fn get(&self) -> StoreResult<Option<SavedLocation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LOCATION_TABLE)?;
        match table.get(LOCATION_KEY)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Read the saved location, treating any storage failure as "none saved"
    ///
    /// Consumers that only need a display default (e.g. the order wizard
    /// pre-fill) should not fail because the store is unreadable.
    pub fn get_or_none(&self) -> Option<SavedLocation> {
        match self.get() {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("failed to read saved location, treating as absent: {}", e);
                None
            }
        }
    }

    /// Save the location, replacing any previous value
    pub fn set(&self, location: &SavedLocation) -> StoreResult<()> {
        let bytes = serde_json::to_vec(location)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCATION_TABLE)?;
            table.insert(LOCATION_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove the saved location
    pub fn clear(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCATION_TABLE)?;
            table.remove(LOCATION_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Order Counter ==========

    /// Increment the order counter and return the next order id ("ORD-{n}")
    pub fn next_order_id(&self) -> StoreResult<String> {
        let write_txn = self.db.begin_write()?;
        let next = {
            let mut table = write_txn.open_table(COUNTER_TABLE)?;
            let current = table
                .get(ORDER_COUNT_KEY)?
                .map(|g| g.value())
                .unwrap_or(0);
            let next = current + 1;
            table.insert(ORDER_COUNT_KEY, next)?;
            next
        };
        write_txn.commit()?;
        Ok(format!("ORD-{}", next))
    }

    /// Current order count (without incrementing)
    pub fn order_count(&self) -> StoreResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COUNTER_TABLE)?;
        Ok(table
            .get(ORDER_COUNT_KEY)?
            .map(|g| g.value())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::LocationSource;

    #[test]
    fn round_trips_saved_location() {
        let store = LocationStore::open_in_memory().unwrap();
        assert!(store.get().unwrap().is_none());

        let saved = SavedLocation::picked("Hyderabad");
        store.set(&saved).unwrap();

        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded.city, "Hyderabad");
        assert_eq!(loaded.source, LocationSource::Picker);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = LocationStore::open_in_memory().unwrap();
        store.set(&SavedLocation::picked("Chennai")).unwrap();
        store.set(&SavedLocation::detected("Warangal")).unwrap();

        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded.city, "Warangal");
        assert_eq!(loaded.source, LocationSource::Detected);
    }

    #[test]
    fn clear_removes_saved_location() {
        let store = LocationStore::open_in_memory().unwrap();
        store.set(&SavedLocation::picked("Vijayawada")).unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());

        // Clearing an already-empty slot is fine
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn order_ids_are_sequential() {
        let store = LocationStore::open_in_memory().unwrap();
        assert_eq!(store.next_order_id().unwrap(), "ORD-1");
        assert_eq!(store.next_order_id().unwrap(), "ORD-2");
        assert_eq!(store.next_order_id().unwrap(), "ORD-3");
        assert_eq!(store.order_count().unwrap(), 3);
    }

    #[test]
    fn counter_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aquavita.redb");

        {
            let store = LocationStore::open(&path).unwrap();
            store.next_order_id().unwrap();
            store.next_order_id().unwrap();
            store.set(&SavedLocation::picked("Bengaluru")).unwrap();
        }

        let store = LocationStore::open(&path).unwrap();
        assert_eq!(store.next_order_id().unwrap(), "ORD-3");
        assert_eq!(store.get().unwrap().unwrap().city, "Bengaluru");
    }
}
