/// Input parameters for the Get command strategy.
#[derive(Debug, Clone)]
pub struct GetInput {
    /// Exact string value to look up
    pub value: String,
}

/// Strategy for looking up a stored string by exact value.
///
/// The lookup is case-sensitive; a miss reports that no stored string
/// matches.
#[derive(Debug, Clone, Copy)]
pub struct GetStrategy;

impl super::CommandStrategy for GetStrategy {
    type Input = GetInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = super::open_manager().await?;
        let response = manager.get(&input.value).await?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
