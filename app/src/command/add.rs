/// Input parameters for the Add command strategy.
#[derive(Debug, Clone)]
pub struct AddInput {
    /// String to analyze and store
    pub value: String,
}

/// Strategy for analyzing a string and storing the result.
///
/// Rejects values longer than the configured maximum and values that are
/// already stored. Prints the stored record as pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = AddInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = super::open_manager().await?;
        let response = manager.create(&input.value).await?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
