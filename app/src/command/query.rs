/// Input parameters for the Query command strategy.
#[derive(Debug, Clone)]
pub struct QueryInput {
    /// Natural-language phrase to translate into filters
    pub phrase: String,
}

/// Strategy for searching stored strings with a natural-language phrase.
///
/// The phrase is translated into structured filters by keyword rules; the
/// response echoes the interpretation so the caller can see what matched.
#[derive(Debug, Clone, Copy)]
pub struct QueryStrategy;

impl super::CommandStrategy for QueryStrategy {
    type Input = QueryInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = super::open_manager().await?;
        let response = manager.query(&input.phrase).await?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
