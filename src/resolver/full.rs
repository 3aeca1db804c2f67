//! Full-tree resolution.
//!
//! # Responsibilities
//! - Walk every top-level entry of the document exactly once
//! - Classify each entry as generic, grouped or credential and write
//!   every resulting leaf to the store, one put per leaf
//! - Accumulate logical name → key records and assemble the manifest
//!
//! # Design Decisions
//! - Credential leaf values are substituted in place with their encoded
//!   form; the document is discarded after the pass anyway
//! - The first encode or write failure aborts the walk; keys already
//!   written stay in the store, nothing is rolled back or retried
//! - The backend's own CA/cert/key are encoded separately from the walk,
//!   only when the backend connection actually uses TLS

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::config::Settings;
use crate::manifest::{EtcdManifest, Manifest, ManifestKeys, ManifestTls};
use crate::resolver::encode::encode_file;
use crate::resolver::error::{ResolveError, ResolveResult};
use crate::resolver::path;
use crate::store::Store;

pub struct FullResolver<'a, S: Store> {
    settings: &'a Settings,
    store: &'a S,
}

impl<'a, S: Store> FullResolver<'a, S> {
    pub fn new(settings: &'a Settings, store: &'a S) -> Self {
        Self { settings, store }
    }

    /// Resolve the whole document into store writes and a manifest.
    pub async fn resolve_all(&self, document: &mut Mapping) -> ResolveResult<Manifest> {
        let mut configurations = BTreeMap::new();
        let mut tls = BTreeMap::new();

        for (key, value) in document.iter_mut() {
            let name = path::key_str(key, "top level")?.to_string();

            if name == self.settings.tls_root {
                self.resolve_credentials(&name, value, &mut tls).await?;
            } else if name == self.settings.db_root {
                self.resolve_grouped(&name, value, &mut configurations)
                    .await?;
            } else {
                let etcd_key = path::top_level_key(&self.settings.etcd.prefix, &name);
                self.write_leaf(&etcd_key, &name, value).await?;
                configurations.insert(name, etcd_key);
            }
        }

        Ok(Manifest {
            etcd: EtcdManifest {
                hosts: self.settings.etcd.hosts.clone(),
                prefix: self.settings.etcd.prefix.clone(),
                keys: ManifestKeys {
                    configurations,
                    tls,
                },
                tls: self.backend_tls()?,
            },
        })
    }

    /// Credential subtree: one write per service, leaf file paths read
    /// and inlined as base64 first. Service names keep source casing.
    async fn resolve_credentials(
        &self,
        root: &str,
        value: &mut Value,
        records: &mut BTreeMap<String, String>,
    ) -> ResolveResult<()> {
        let Some(services) = value.as_mapping_mut() else {
            tracing::warn!(root = %root, "credential root is not a mapping, skipping");
            return Ok(());
        };

        for (service, paths) in services.iter_mut() {
            let service_name = path::key_str(service, root)?.to_string();
            let etcd_key =
                path::credential_key(&self.settings.etcd.prefix, root, &service_name);

            encode_leaves_in_place(&etcd_key, paths)?;
            self.write_leaf(&etcd_key, &service_name, paths).await?;
            records.insert(service_name, etcd_key);
        }

        Ok(())
    }

    /// Grouped subtree: one write per second-level entry, no aggregate
    /// write for the subtree itself.
    async fn resolve_grouped(
        &self,
        root: &str,
        value: &Value,
        records: &mut BTreeMap<String, String>,
    ) -> ResolveResult<()> {
        let Some(entries) = value.as_mapping() else {
            tracing::warn!(root = %root, "grouped root is not a mapping, skipping");
            return Ok(());
        };

        for (leaf, leaf_value) in entries {
            let leaf_name = path::key_str(leaf, root)?;
            let etcd_key = path::nested_key(&self.settings.etcd.prefix, root, leaf_name);
            self.write_leaf(&etcd_key, leaf_name, leaf_value).await?;
            records.insert(leaf_name.to_string(), etcd_key);
        }

        Ok(())
    }

    async fn write_leaf(&self, etcd_key: &str, name: &str, value: &Value) -> ResolveResult<()> {
        let payload = path::payload(etcd_key, name, value)?;
        self.store
            .put(etcd_key, &payload)
            .await
            .map_err(|source| ResolveError::Store {
                key: etcd_key.to_string(),
                source,
            })?;

        tracing::info!(key = %etcd_key, name = %name, "stored configuration leaf");
        Ok(())
    }

    fn backend_tls(&self) -> ResolveResult<ManifestTls> {
        let etcd = &self.settings.etcd;
        if !etcd.tls_enabled {
            return Ok(ManifestTls {
                enabled: false,
                ca: String::new(),
                cert: String::new(),
                key: String::new(),
            });
        }

        Ok(ManifestTls {
            enabled: true,
            ca: encode_file(&etcd.ca_path)?,
            cert: encode_file(&etcd.cert_path)?,
            key: encode_file(&etcd.key_path)?,
        })
    }
}

/// Replace every scalar leaf of a credential service mapping with the
/// base64 content of the file it points to.
fn encode_leaves_in_place(etcd_key: &str, paths: &mut Value) -> ResolveResult<()> {
    let Some(entries) = paths.as_mapping_mut() else {
        return Err(ResolveError::InvalidStructure {
            path: etcd_key.to_string(),
            reason: "credential service entry is not a mapping".to_string(),
        });
    };

    for (leaf, leaf_value) in entries.iter_mut() {
        let Some(file_path) = leaf_value.as_str() else {
            return Err(ResolveError::InvalidStructure {
                path: format!("{}/{}", etcd_key, leaf.as_str().unwrap_or("?")),
                reason: "credential leaf is not a path string".to_string(),
            });
        };

        *leaf_value = Value::String(encode_file(file_path)?);
    }

    Ok(())
}
