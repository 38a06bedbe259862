//! LEGO set catalog data model types, JSON I/O, and in-memory queries.
//!
//! This crate defines the set data model without any storage dependencies.
//! The full collection is loaded once from a JSON data file and is read-only
//! for the lifetime of the process; consumers query it through [`SetCatalog`].

pub mod json;
pub mod query;
pub mod types;

pub use json::{load_sets, parse_sets, DataError};
pub use query::SetCatalog;
pub use types::{Dimensions, LegoSet, PackagingType, PackagingTypeParseError};
