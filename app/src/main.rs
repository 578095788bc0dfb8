#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    AddInput, AddStrategy, CommandStrategy, DeleteInput, DeleteStrategy, GetInput, GetStrategy,
    InfoStrategy, InitStrategy, ListInput, ListStrategy, QueryInput, QueryStrategy, VersionStrategy,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "strand")]
#[command(about = "String analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a string and store the result
    Add {
        /// String to analyze
        value: String,
    },
    /// Look up a stored string by exact value
    Get {
        /// Exact string value to look up
        value: String,
    },
    /// Delete a stored string by exact value
    Delete {
        /// Exact string value to delete
        value: String,
    },
    /// List stored strings, optionally filtered
    List {
        /// Exact number of words
        #[arg(long)]
        word_count: Option<String>,

        /// Palindrome flag, "true" or "false"
        #[arg(long)]
        is_palindrome: Option<String>,

        /// Minimum length, inclusive
        #[arg(long)]
        min_length: Option<String>,

        /// Maximum length, inclusive
        #[arg(long)]
        max_length: Option<String>,

        /// Single character the string must contain
        #[arg(long)]
        contains_character: Option<String>,
    },
    /// Search stored strings with a natural-language phrase
    Query {
        /// Phrase such as "single word palindromes longer than 5"
        phrase: String,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and storage status
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { value } => AddStrategy.execute(AddInput { value }).await?,
        Commands::Get { value } => GetStrategy.execute(GetInput { value }).await?,
        Commands::Delete { value } => DeleteStrategy.execute(DeleteInput { value }).await?,
        Commands::List {
            word_count,
            is_palindrome,
            min_length,
            max_length,
            contains_character,
        } => {
            ListStrategy
                .execute(ListInput {
                    word_count,
                    is_palindrome,
                    min_length,
                    max_length,
                    contains_character,
                })
                .await?;
        }
        Commands::Query { phrase } => QueryStrategy.execute(QueryInput { phrase }).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
