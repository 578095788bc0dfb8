//! In-memory record store.
//!
//! Uses the `Arc<RwLock<T>>` pattern for shared state: many readers for
//! lookups and listings, a single writer for inserts and deletes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use strand_core::{AnalyzedRecord, Error, FilterSet, RecordStore, Result};

/// Shared record map plus the creation order of its ids.
type SharedRecords = Arc<RwLock<StoreInner>>;

#[derive(Debug, Default)]
struct StoreInner {
    records: HashMap<String, AnalyzedRecord>,
    /// Ids in insertion order, so listings stay deterministic.
    order: Vec<String>,
}

/// Thread-safe in-memory store keyed by record id.
///
/// The duplicate check and the write of `insert` run under one write
/// lock, which makes the conditional insert atomic: of two concurrent
/// inserts of the same value exactly one succeeds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: SharedRecords,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> Error {
    Error::Storage("record store lock is poisoned".to_string())
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn exists(&self, id: &str) -> Result<bool> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.records.contains_key(id))
    }

    async fn insert(&self, record: &AnalyzedRecord) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.records.contains_key(&record.id) {
            return Err(Error::Duplicate(record.id.clone()));
        }
        inner.order.push(record.id.clone());
        inner.records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedRecord>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .records
            .values()
            .find(|record| record.value == value)
            .cloned())
    }

    async fn delete_by_value(&self, value: &str) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let Some(id) = inner
            .records
            .values()
            .find(|record| record.value == value)
            .map(|record| record.id.clone())
        else {
            return Err(Error::NotFound);
        };
        inner.records.remove(&id);
        inner.order.retain(|stored| *stored != id);
        Ok(())
    }

    async fn list(&self, filters: &FilterSet) -> Result<Vec<AnalyzedRecord>> {
        let snapshot: Vec<AnalyzedRecord> = {
            let inner = self.inner.read().map_err(|_| poisoned())?;
            inner
                .order
                .iter()
                .filter_map(|id| inner.records.get(id).cloned())
                .collect()
        };
        Ok(filters.apply(snapshot))
    }
}
