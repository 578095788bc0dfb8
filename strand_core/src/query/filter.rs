//! Typed filters and their application to record lists.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::AnalyzedRecord;

/// A validated set of filter conditions combined with AND semantics.
///
/// Absent keys impose no constraint, so the default (empty) set matches
/// every record. Serializes with absent keys omitted, which is exactly
/// the `filters_applied` / `parsed_filters` echo shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Whether no condition is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count.is_none()
            && self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.contains_character.is_none()
    }

    /// Whether a record satisfies every present condition.
    ///
    /// `contains_character` is a case-sensitive substring check against
    /// the original value.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let length = record.length as i64;
        self.word_count
            .is_none_or(|n| record.word_count as i64 == n)
            && self.is_palindrome.is_none_or(|p| record.is_palindrome == p)
            && self.min_length.is_none_or(|min| length >= min)
            && self.max_length.is_none_or(|max| length <= max)
            && self
                .contains_character
                .is_none_or(|ch| record.value.contains(ch))
    }

    /// Filter a record list, preserving the input order.
    #[must_use]
    pub fn apply(&self, mut records: Vec<AnalyzedRecord>) -> Vec<AnalyzedRecord> {
        records.retain(|record| self.matches(record));
        records
    }
}

/// Raw filter parameters exactly as received at the boundary, before
/// any validation.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub is_palindrome: Option<String>,
    pub contains_character: Option<String>,
}

impl FilterParams {
    /// Validate and convert into a typed [`FilterSet`].
    ///
    /// Numeric parameters must parse as integers and `contains_character`
    /// must be exactly one character; violations fail with
    /// `Error::InvalidFilter`. `is_palindrome` accepts `true` / `false`
    /// in any casing and silently ignores anything else.
    pub fn parse(&self) -> Result<FilterSet> {
        let mut filters = FilterSet::default();

        if let Some(raw) = &self.min_length {
            filters.min_length = Some(parse_integer("min_length", raw)?);
        }
        if let Some(raw) = &self.max_length {
            filters.max_length = Some(parse_integer("max_length", raw)?);
        }
        if let Some(raw) = &self.word_count {
            filters.word_count = Some(parse_integer("word_count", raw)?);
        }
        if let Some(raw) = &self.is_palindrome {
            match raw.to_lowercase().as_str() {
                "true" => filters.is_palindrome = Some(true),
                "false" => filters.is_palindrome = Some(false),
                _ => {}
            }
        }
        if let Some(raw) = &self.contains_character {
            filters.contains_character = Some(parse_single_character(raw)?);
        }

        Ok(filters)
    }
}

fn parse_integer(name: &str, raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::InvalidFilter(format!("{name} must be an integer")))
}

fn parse_single_character(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::InvalidFilter(
            "contains_character must be a single character".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: &str) -> AnalyzedRecord {
        AnalyzedRecord::from_value(value)
    }

    #[test]
    fn empty_set_matches_everything() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&record("anything")));
        assert!(filters.matches(&record("")));
    }

    #[test]
    fn conditions_combine_with_and() {
        let filters = FilterSet {
            word_count: Some(1),
            is_palindrome: Some(true),
            ..FilterSet::default()
        };
        assert!(filters.matches(&record("racecar")));
        assert!(!filters.matches(&record("racecar racecar"))); // two words
        assert!(!filters.matches(&record("rust"))); // not a palindrome
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let filters = FilterSet {
            min_length: Some(4),
            max_length: Some(4),
            ..FilterSet::default()
        };
        assert!(filters.matches(&record("rust")));
        assert!(!filters.matches(&record("oak")));
        assert!(!filters.matches(&record("ferris")));
    }

    #[test]
    fn contains_character_is_case_sensitive() {
        let filters = FilterSet {
            contains_character: Some('R'),
            ..FilterSet::default()
        };
        assert!(filters.matches(&record("Rust")));
        assert!(!filters.matches(&record("rust")));
    }

    #[test]
    fn apply_preserves_input_order() {
        let records = vec![record("bb"), record("a"), record("ccc"), record("d")];
        let filters = FilterSet {
            max_length: Some(1),
            ..FilterSet::default()
        };
        let kept = filters.apply(records);
        let values: Vec<&str> = kept.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["a", "d"]);
    }

    #[test]
    fn negative_min_length_matches_everything() {
        let filters = FilterSet {
            min_length: Some(-5),
            ..FilterSet::default()
        };
        assert!(filters.matches(&record("")));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn params_parse_valid_values() {
        let params = FilterParams {
            min_length: Some("3".to_string()),
            is_palindrome: Some("TRUE".to_string()),
            contains_character: Some("x".to_string()),
            ..FilterParams::default()
        };
        let filters = params.parse().expect("valid params should parse");
        assert_eq!(filters.min_length, Some(3));
        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.contains_character, Some('x'));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn malformed_integer_is_rejected() {
        let params = FilterParams {
            word_count: Some("two".to_string()),
            ..FilterParams::default()
        };
        let err = params.parse().expect_err("non-integer must be rejected");
        assert!(matches!(err, Error::InvalidFilter(_)));
        assert!(err.to_string().contains("word_count must be an integer"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn malformed_boolean_is_silently_ignored() {
        let params = FilterParams {
            is_palindrome: Some("yes".to_string()),
            ..FilterParams::default()
        };
        let filters = params.parse().expect("bad boolean must not error");
        assert_eq!(filters.is_palindrome, None);
    }

    #[test]
    fn multi_character_contains_is_rejected() {
        for raw in ["ab", ""] {
            let params = FilterParams {
                contains_character: Some(raw.to_string()),
                ..FilterParams::default()
            };
            assert!(matches!(
                params.parse(),
                Err(Error::InvalidFilter(ref msg)) if msg.contains("single character")
            ));
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn serialization_omits_absent_keys() {
        let filters = FilterSet {
            word_count: Some(1),
            min_length: Some(6),
            ..FilterSet::default()
        };
        let json = serde_json::to_value(&filters).expect("filters should serialize");
        assert_eq!(json, serde_json::json!({"word_count": 1, "min_length": 6}));
        assert_eq!(
            serde_json::to_value(FilterSet::default()).expect("empty set should serialize"),
            serde_json::json!({})
        );
    }
}
