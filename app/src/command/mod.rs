//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main` without boxing. Strategies that touch storage share
//! [`open_manager`] so every command sees the same configured database.

use std::sync::Arc;

use strand_config::Config;
use strand_store::{AnalysisManager, SqliteStore};
use tracing::info;

mod add;
mod delete;
mod get;
mod info;
mod init;
mod list;
mod query;
mod version;

/// Open the configured SQLite store and wrap it in the service facade.
async fn open_manager() -> anyhow::Result<AnalysisManager> {
    let config = Config::load()?;
    let db_path = config.database_path()?;

    info!("Database path: {}", db_path.display());

    let store = SqliteStore::new(&db_path).await?;
    let manager = AnalysisManager::new(Arc::new(store))
        .with_max_value_length(config.service.max_value_length);

    Ok(manager)
}

pub use add::{AddInput, AddStrategy};
pub use delete::{DeleteInput, DeleteStrategy};
pub use get::{GetInput, GetStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use query::{QueryInput, QueryStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters pass type-safely without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
