//! Import failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a single result import.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid packing result: {0}")]
    Parse(#[from] serde_json::Error),
}
