//! Filter types and the natural-language translator.

pub mod filter;
pub mod translate;

pub use filter::{FilterParams, FilterSet};
pub use translate::QueryTranslator;
