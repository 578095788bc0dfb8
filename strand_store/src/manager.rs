use std::sync::Arc;

use tracing::{debug, info};

use strand_core::{
    AnalyzedRecord, DEFAULT_MAX_VALUE_LENGTH, Error, FilterParams, FilterSet, QueryTranslator,
    RecordStore, Result,
};

use crate::response::{InterpretedQuery, ListResponse, QueryResponse, RecordResponse};

/// Service facade over a record store.
///
/// Owns the translator and the boundary validation; every operation
/// maps one-to-one onto the public surface of the service.
pub struct AnalysisManager {
    store: Arc<dyn RecordStore>,
    translator: QueryTranslator,
    max_value_length: usize,
}

impl AnalysisManager {
    /// Create a manager over the given store with default limits.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            translator: QueryTranslator::new(),
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }

    /// Override the maximum accepted value length.
    #[must_use]
    pub fn with_max_value_length(mut self, max_value_length: usize) -> Self {
        self.max_value_length = max_value_length;
        self
    }

    /// Analyze a value and store it.
    ///
    /// The full property set is computed before any persistence attempt,
    /// and the insert itself is atomic, so creation is all-or-nothing.
    /// Storing the same value twice fails with `Error::Duplicate`.
    pub async fn create(&self, value: &str) -> Result<RecordResponse> {
        if value.chars().count() > self.max_value_length {
            return Err(Error::InvalidInput(format!(
                "value must be at most {} characters",
                self.max_value_length
            )));
        }

        let record = AnalyzedRecord::from_value(value);
        self.store.insert(&record).await?;
        info!("Stored analyzed string: {}", record.id);
        Ok(record.into())
    }

    /// Fetch the record holding this exact value.
    pub async fn get(&self, value: &str) -> Result<RecordResponse> {
        let record = self
            .store
            .find_by_value(value)
            .await?
            .ok_or(Error::NotFound)?;
        Ok(record.into())
    }

    /// Delete the record holding this exact value.
    pub async fn delete(&self, value: &str) -> Result<()> {
        self.store.delete_by_value(value).await?;
        info!("Deleted stored string");
        Ok(())
    }

    /// List records matching validated structured filters, in creation
    /// order, echoing the applied filter set.
    pub async fn list(&self, params: &FilterParams) -> Result<ListResponse> {
        let filters = params.parse()?;
        let records = self.store.list(&filters).await?;
        debug!("Listed {} records", records.len());

        let data: Vec<RecordResponse> = records.into_iter().map(Into::into).collect();
        Ok(ListResponse {
            count: data.len(),
            data,
            filters_applied: filters,
        })
    }

    /// Translate a natural-language phrase and list the matching records.
    ///
    /// The phrase must be non-empty; whitespace-only phrases are allowed
    /// and simply translate to the empty filter set.
    pub async fn query(&self, query: &str) -> Result<QueryResponse> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let filters = self.translator.translate(query);
        let records = self.store.list(&filters).await?;
        info!("Query matched {} records", records.len());

        let data: Vec<RecordResponse> = records.into_iter().map(Into::into).collect();
        Ok(QueryResponse {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: query.to_lowercase(),
                parsed_filters: filters,
            },
        })
    }

    /// Count of stored records, unfiltered.
    pub async fn record_count(&self) -> Result<usize> {
        Ok(self.store.list(&FilterSet::default()).await?.len())
    }
}
