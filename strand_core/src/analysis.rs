//! Deterministic single-pass analysis of stored strings.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Every derived property of a stored string.
///
/// All counts are in Unicode scalar values (code points), never bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: HashMap<char, usize>,
}

/// Analyze a value and compute its full property set.
///
/// Pure and deterministic: the same input always yields the same
/// properties, including the identity hash. The empty string is a valid
/// input (zero length, zero words, vacuously a palindrome).
#[must_use]
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_characters(value),
        word_count: value.split_whitespace().count(),
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequency(value),
    }
}

/// Compute the SHA-256 identity hash of the original value.
///
/// The lowercase hex digest doubles as the record id, so identity
/// follows content exactly (case- and whitespace-sensitive).
#[must_use]
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Case-insensitive palindrome test over the value with all whitespace
/// removed. Punctuation stays in place and can defeat the mirror check.
fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Count of distinct characters, case-sensitive, whitespace included.
fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

fn character_frequency(value: &str) -> HashMap<char, usize> {
    let mut frequency = HashMap::new();
    for ch in value.chars() {
        *frequency.entry(ch).or_insert(0) += 1;
    }
    frequency
}
