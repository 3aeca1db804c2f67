//! Key-value store seam.
//!
//! # Design Decisions
//! - The resolvers depend on the `Store` trait, never on the etcd client
//!   directly; tests drive them against `MemoryStore`
//! - One operation only: `put`. The tool never reads from the backend
//! - Writes are strictly sequential; each call carries its own deadline

pub mod etcd;
pub mod memory;

pub use etcd::EtcdStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection to the backend could not be established.
    #[error("unable to connect to backend: {0}")]
    Connect(String),

    /// TLS material for the backend connection could not be read.
    #[error("unable to read TLS material '{path}': {source}")]
    TlsMaterial {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend rejected the write.
    #[error("backend rejected the write: {0}")]
    Backend(String),

    /// The write did not complete within the per-call deadline.
    #[error("write timed out after {0} seconds")]
    Timeout(u64),
}

/// Write access to the path-addressed backend namespace.
#[async_trait]
pub trait Store: Send + Sync {
    /// Write one serialized payload under one key.
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
