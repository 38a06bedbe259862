//! JSON loading for the set collection.
//!
//! The data file is a single JSON array of set records, read once at startup.
//! Loading is the only I/O in this crate; queries never touch the disk.

use crate::types::LegoSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load the full set collection from a JSON data file.
///
/// The file must contain a JSON array of set records. Order is preserved.
pub fn load_sets(path: &Path) -> Result<Vec<LegoSet>, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| DataError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse a set collection from in-memory JSON.
///
/// Used for data bundled into the binary with `include_str!`.
pub fn parse_sets(json: &str) -> Result<Vec<LegoSet>, DataError> {
    serde_json::from_str(json).map_err(|e| DataError::Parse {
        path: "<embedded>".to_string(),
        source: e,
    })
}
