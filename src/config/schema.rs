//! Settings schema definitions.
//!
//! These are the resolver inputs: where the document lives, which
//! top-level keys designate the credential and grouped subtrees, how to
//! reach etcd, and which mode to run in. All types derive Serde traits
//! so an optional YAML settings file can stand in for the flag surface.

use serde::{Deserialize, Serialize};

/// Root settings for one resolution run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the YAML document to flatten.
    pub yaml_path: String,

    /// Top-level key designating the credential subtree. Leaf values
    /// under it are file paths, read and inlined as base64 in full mode.
    pub tls_root: String,

    /// Top-level key designating the grouped subtree. Its second-level
    /// entries are each written as independent leaves.
    pub db_root: String,

    /// Run in update mode: rewrite only the keys listed in
    /// `update_keys` instead of the whole document.
    pub update: bool,

    /// Dotted update specs (e.g. `databases.mariadb`), one store write
    /// each. Only read when `update` is set.
    pub update_keys: Vec<String>,

    /// Emit the manifest after a full resolution. Ignored in update mode.
    pub output: bool,

    /// Where the manifest is written when `output` is set.
    pub output_path: String,

    /// Backend connection settings.
    pub etcd: EtcdSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            yaml_path: String::new(),
            tls_root: String::new(),
            db_root: String::new(),
            update: false,
            update_keys: Vec::new(),
            output: false,
            output_path: "etcd-config.yaml".to_string(),
            etcd: EtcdSettings::default(),
        }
    }
}

/// etcd connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EtcdSettings {
    /// Backend endpoints (e.g. "http://localhost:2379").
    pub hosts: Vec<String>,

    /// Store key prefix, used verbatim as the first path segment.
    pub prefix: String,

    /// Whether the backend connection uses TLS.
    pub tls_enabled: bool,

    /// Path to the backend CA certificate (required when TLS is enabled).
    pub ca_path: String,

    /// Path to the backend client certificate (required when TLS is enabled).
    pub cert_path: String,

    /// Path to the backend client key (required when TLS is enabled).
    pub key_path: String,
}

impl Default for EtcdSettings {
    fn default() -> Self {
        Self {
            hosts: Vec::new(),
            prefix: "config".to_string(),
            tls_enabled: false,
            ca_path: String::new(),
            cert_path: String::new(),
            key_path: String::new(),
        }
    }
}
