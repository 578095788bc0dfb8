use strand_core::FilterParams;

/// Input parameters for the List command strategy.
///
/// Filters arrive as raw strings; the service validates them and rejects
/// malformed values as filter errors.
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    /// Exact number of words
    pub word_count: Option<String>,
    /// Palindrome flag, "true" or "false"
    pub is_palindrome: Option<String>,
    /// Minimum length, inclusive
    pub min_length: Option<String>,
    /// Maximum length, inclusive
    pub max_length: Option<String>,
    /// Single character the string must contain
    pub contains_character: Option<String>,
}

/// Strategy for listing stored strings with optional filters.
///
/// All supplied filters must hold at once; the response echoes the parsed
/// filters alongside the matching records.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = super::open_manager().await?;
        let params = FilterParams {
            min_length: input.min_length,
            max_length: input.max_length,
            word_count: input.word_count,
            is_palindrome: input.is_palindrome,
            contains_character: input.contains_character,
        };
        let response = manager.list(&params).await?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
