//! In-Memory Order Store Adapter
//!
//! Implements `OrderStore` over a hash map.

use crate::domain::{OrderKey, OrderRecord, OrderStatus, StorageError};
use crate::ports::outbound::OrderStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory order store.
#[derive(Default)]
pub struct InMemoryOrderStore {
    records: RwLock<HashMap<OrderKey, OrderRecord>>,
}

impl InMemoryOrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Number of records in `status`.
    pub fn count(&self, status: OrderStatus) -> usize {
        self.records
            .read()
            .values()
            .filter(|r| r.status == status)
            .count()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, key: &OrderKey) -> Result<Option<OrderRecord>, StorageError> {
        Ok(self.records.read().get(key).copied())
    }

    fn put(&self, key: OrderKey, record: OrderRecord) -> Result<(), StorageError> {
        self.records.write().insert(key, record);
        Ok(())
    }

    fn remove(&self, key: &OrderKey) -> Result<(), StorageError> {
        self.records.write().remove(key);
        Ok(())
    }
}
