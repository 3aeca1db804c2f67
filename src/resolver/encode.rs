//! Content encoding for file-backed credential leaves.

use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::resolver::error::{ResolveError, ResolveResult};

/// Read a file and return its bytes as standard base64. Identical file
/// content always yields identical output.
pub fn encode_file(path: &str) -> ResolveResult<String> {
    let content = fs::read(path).map_err(|source| ResolveError::FileRead {
        path: path.to_string(),
        source,
    })?;

    Ok(STANDARD.encode(content))
}
