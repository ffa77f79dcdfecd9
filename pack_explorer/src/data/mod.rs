mod channel;
mod error;
mod model;

use std::path::Path;

pub use channel::{spawn_import, ImportChannel, ImportOutcome};
pub use error::LoadError;
pub use model::{Block, Container, Packing, PackingResult, SelectorOption, UnpackedBlock};

/// Parse a result document from its JSON text.
pub fn parse_result(json: &str) -> Result<PackingResult, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a result file.
pub fn read_result(path: &Path) -> Result<PackingResult, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_result(&json)
}
