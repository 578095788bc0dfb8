use std::sync::Arc;

use strand_config::Config;
use strand_store::{AnalysisManager, SqliteStore};
use tracing::info;

/// Strategy for displaying configuration and storage status.
///
/// Outputs the database location, whether it can be opened, how many
/// strings are stored, the service limits in effect, and the command
/// catalog.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== strand Configuration ===\n");

        println!("Storage:");
        let db_path = config.database_path()?;
        println!("  Path: {}", db_path.display());

        info!("Testing database connection");
        match SqliteStore::new(&db_path).await {
            Ok(store) => {
                println!("  Status: Connected");
                let manager = AnalysisManager::new(Arc::new(store));
                match manager.record_count().await {
                    Ok(count) => println!("  Stored strings: {count}"),
                    Err(e) => println!("  Stored strings: unavailable ({e})"),
                }
            }
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Service:");
        println!("  Max value length: {}", config.service.max_value_length);
        println!();

        println!("Commands:");
        println!("  strand add <value>        Create and analyze a string");
        println!("  strand get <value>        Get a specific string");
        println!("  strand list [filters]     Get all strings with filtering");
        println!("  strand query <phrase>     Natural language filtering");
        println!("  strand delete <value>     Delete a string");

        Ok(())
    }
}
