//! The stored record: a value plus its flattened analysis.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{self, StringProperties};

/// A stored string together with every derived property.
///
/// The id is the SHA-256 hex digest of the value, so identity follows
/// content: analyzing the same string twice addresses the same record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzedRecord {
    pub id: String,
    pub value: String,
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub character_frequency_map: HashMap<char, usize>,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    /// Analyze `value` and build the record that stores it, stamped
    /// with the current time.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let props = analysis::analyze(value);
        Self {
            id: props.sha256_hash,
            value: value.to_string(),
            length: props.length,
            is_palindrome: props.is_palindrome,
            unique_characters: props.unique_characters,
            word_count: props.word_count,
            character_frequency_map: props.character_frequency_map,
            created_at: Utc::now(),
        }
    }

    /// Property view of the record. The id doubles as the hash, so no
    /// recomputation happens here.
    #[must_use]
    pub fn properties(&self) -> StringProperties {
        StringProperties {
            length: self.length,
            is_palindrome: self.is_palindrome,
            unique_characters: self.unique_characters,
            word_count: self.word_count,
            sha256_hash: self.id.clone(),
            character_frequency_map: self.character_frequency_map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_the_content_hash() {
        let record = AnalyzedRecord::from_value("hello world");
        assert_eq!(record.id, analysis::content_hash("hello world"));
        assert_eq!(record.id.len(), 64);
    }

    #[test]
    fn properties_round_trip_the_analysis() {
        let record = AnalyzedRecord::from_value("A man a plan a canal Panama");
        assert_eq!(record.properties(), analysis::analyze(record.value.as_str()));
    }

    #[test]
    fn same_value_same_identity() {
        let a = AnalyzedRecord::from_value("twin");
        let b = AnalyzedRecord::from_value("twin");
        assert_eq!(a.id, b.id);
    }
}
