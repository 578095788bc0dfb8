//! Error taxonomy shared by every operation of the service.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The submitted value failed boundary validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The content hash is already stored.
    #[error("String already exists in the system (id: {0})")]
    Duplicate(String),

    /// Lookup or delete addressed a value that is not stored.
    #[error("No stored string matches the requested value")]
    NotFound,

    /// A structured filter parameter failed validation.
    #[error("Invalid filter parameter: {0}")]
    InvalidFilter(String),

    /// The free-text query was missing or empty.
    #[error("Query parameter is required")]
    EmptyQuery,

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}
