#![warn(
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
    clippy::missing_errors_doc,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

mod manager;
pub mod memory;
pub mod response;
pub mod sqlite;

pub use manager::AnalysisManager;
pub use memory::MemoryStore;
pub use response::{InterpretedQuery, ListResponse, QueryResponse, RecordResponse};
pub use sqlite::SqliteStore;
