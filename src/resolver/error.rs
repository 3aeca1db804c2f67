//! Resolution error definitions.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while resolving a document into store writes.
///
/// Every variant carries the key or path that triggered it; all of them
/// are terminal for the current pass.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A referenced top- or second-level key is absent from the document.
    #[error("specified key '{0}' does not exist")]
    KeyNotFound(String),

    /// A two-segment path's first segment does not lead into the root
    /// shape that branch expects.
    #[error("specified key '{key}' is not under '{root}' root level")]
    NotUnderRoot { key: String, root: String },

    /// A node does not have the shape a derivation rule requires.
    #[error("invalid structure at '{path}': {reason}")]
    InvalidStructure { path: String, reason: String },

    /// A credential leaf references a file that cannot be read.
    #[error("unable to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A payload cannot be serialized before writing.
    #[error("unable to serialize payload for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The backend rejected or timed out a write.
    #[error("store write for '{key}' failed: {source}")]
    Store {
        key: String,
        #[source]
        source: StoreError,
    },

    /// The manifest cannot be persisted.
    #[error("unable to write manifest to '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
