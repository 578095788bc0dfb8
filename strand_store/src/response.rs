//! Response shapes returned by the service facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use strand_core::{AnalyzedRecord, FilterSet, StringProperties};

/// A single stored string with its analysis nested under `properties`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordResponse {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl From<AnalyzedRecord> for RecordResponse {
    fn from(record: AnalyzedRecord) -> Self {
        let properties = record.properties();
        Self {
            id: record.id,
            value: record.value,
            properties,
            created_at: record.created_at,
        }
    }
}

/// Envelope for structured listings: the matching records, their count,
/// and an echo of the filters that were applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<RecordResponse>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// How a natural-language phrase was understood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretedQuery {
    /// The phrase as matched, lowercased.
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Envelope for natural-language queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Vec<RecordResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}
