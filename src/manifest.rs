//! Manifest produced after a full resolution.
//!
//! The serialized layout is consumed by downstream services as-is, so
//! field names are load-bearing:
//!
//! ```yaml
//! etcd:
//!   hosts: [..]
//!   prefix: string
//!   keys:
//!     configurations: { <logicalName>: <keyPath>, .. }
//!     tls: { <logicalName>: <keyPath>, .. }
//!   tls:
//!     enabled: bool
//!     ca: <base64>
//!     cert: <base64>
//!     key: <base64>
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::resolver::error::{ResolveError, ResolveResult};

/// Summary of where every leaf landed, plus how to reach the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub etcd: EtcdManifest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtcdManifest {
    /// Backend endpoints the keys were written to.
    pub hosts: Vec<String>,

    /// Store key prefix shared by every derived key.
    pub prefix: String,

    /// Logical name → key mappings, sorted so two runs over the same
    /// document emit byte-identical manifests.
    pub keys: ManifestKeys,

    /// The backend's own connection credentials, encoded the same way as
    /// credential-subtree leaves. Distinct from any credentials found
    /// inside the document.
    pub tls: ManifestTls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestKeys {
    /// Generic and grouped-subtree leaves.
    pub configurations: BTreeMap<String, String>,

    /// Credential-subtree leaves.
    pub tls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestTls {
    pub enabled: bool,
    pub ca: String,
    pub cert: String,
    pub key: String,
}

impl Manifest {
    /// Serialize to YAML and persist at `path`.
    pub fn write_yaml(&self, path: &Path) -> ResolveResult<()> {
        let content = serde_yaml::to_string(self).map_err(|e| ResolveError::OutputWrite {
            path: path.display().to_string(),
            source: std::io::Error::other(e),
        })?;

        fs::write(path, content).map_err(|source| ResolveError::OutputWrite {
            path: path.display().to_string(),
            source,
        })
    }
}
