use brickset_catalog::{DataError, PackagingTypeParseError};
use thiserror::Error;

/// Errors that can occur while running the demonstration queries.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Bundled data failed to load
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Caller-supplied packaging name did not parse
    #[error("{0}")]
    Packaging(#[from] PackagingTypeParseError),
}
