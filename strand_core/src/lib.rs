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

pub mod analysis;
pub mod error;
pub mod query;
pub mod record;
pub mod repository;

pub use analysis::{StringProperties, analyze, content_hash};
pub use error::{Error, Result};
pub use query::{FilterParams, FilterSet, QueryTranslator};
pub use record::AnalyzedRecord;
pub use repository::RecordStore;

/// Longest value the service accepts, in characters.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 1000;
