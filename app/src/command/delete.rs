/// Input parameters for the Delete command strategy.
#[derive(Debug, Clone)]
pub struct DeleteInput {
    /// Exact string value to delete
    pub value: String,
}

/// Strategy for deleting a stored string by exact value.
#[derive(Debug, Clone, Copy)]
pub struct DeleteStrategy;

impl super::CommandStrategy for DeleteStrategy {
    type Input = DeleteInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let manager = super::open_manager().await?;
        manager.delete(&input.value).await?;

        println!("Deleted: {}", input.value);
        Ok(())
    }
}
