//! Store contract for analyzed records.

use async_trait::async_trait;

use crate::error::Result;
use crate::query::filter::FilterSet;
use crate::record::AnalyzedRecord;

/// Storage backend for analyzed records, keyed by id (the content hash).
///
/// `insert` must be atomic: the duplicate check and the write happen as
/// one operation, so two concurrent inserts of the same value can never
/// both succeed.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Whether a record with this id is stored.
    async fn exists(&self, id: &str) -> Result<bool>;

    /// Insert a record, failing with `Error::Duplicate` when the id is
    /// already taken.
    async fn insert(&self, record: &AnalyzedRecord) -> Result<()>;

    /// Look up a record by its exact stored value.
    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedRecord>>;

    /// Delete the record holding this exact value, failing with
    /// `Error::NotFound` when absent.
    async fn delete_by_value(&self, value: &str) -> Result<()>;

    /// All records satisfying the filters, in creation order.
    async fn list(&self, filters: &FilterSet) -> Result<Vec<AnalyzedRecord>>;
}
