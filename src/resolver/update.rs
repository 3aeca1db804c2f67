//! Selective update resolution.
//!
//! # Responsibilities
//! - Parse dotted update specs (one or two segments)
//! - Resolve each spec independently against the document and perform
//!   exactly one store write for it
//!
//! # Design Decisions
//! - Specs are processed in the order given; the first failure aborts
//!   the remaining specs, writes already performed stay in the store
//! - The document is never mutated and no file content is re-encoded:
//!   whatever value the document holds is written verbatim, including
//!   under the credential root
//! - Deeper nesting than two segments is rejected outright rather than
//!   silently truncated

use serde_yaml::{Mapping, Value};

use crate::config::Settings;
use crate::resolver::error::{ResolveError, ResolveResult};
use crate::resolver::path;
use crate::store::Store;

/// A parsed dotted update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateSpec {
    /// `foo`: one top-level entry.
    Flat(String),
    /// `a.b`: one second-level entry.
    Nested(String, String),
}

impl UpdateSpec {
    pub fn parse(raw: &str) -> ResolveResult<Self> {
        let segments: Vec<&str> = raw.split('.').collect();
        match segments.as_slice() {
            [one] if !one.is_empty() => Ok(Self::Flat(one.to_string())),
            [a, b] if !a.is_empty() && !b.is_empty() => {
                Ok(Self::Nested(a.to_string(), b.to_string()))
            }
            _ => Err(ResolveError::InvalidStructure {
                path: raw.to_string(),
                reason: "update keys must have one or two non-empty dotted segments".to_string(),
            }),
        }
    }

    fn root(&self) -> &str {
        match self {
            Self::Flat(name) => name,
            Self::Nested(root, _) => root,
        }
    }
}

pub struct UpdateResolver<'a, S: Store> {
    settings: &'a Settings,
    store: &'a S,
}

impl<'a, S: Store> UpdateResolver<'a, S> {
    pub fn new(settings: &'a Settings, store: &'a S) -> Self {
        Self { settings, store }
    }

    /// Resolve every spec in order, one write each, failing fast.
    pub async fn resolve_updates(&self, document: &Mapping, specs: &[String]) -> ResolveResult<()> {
        for raw in specs {
            let spec = UpdateSpec::parse(raw)?;
            self.resolve_one(document, raw, &spec).await?;
        }

        Ok(())
    }

    async fn resolve_one(
        &self,
        document: &Mapping,
        raw: &str,
        spec: &UpdateSpec,
    ) -> ResolveResult<()> {
        let root_value = document
            .get(spec.root())
            .ok_or_else(|| ResolveError::KeyNotFound(raw.to_string()))?;

        match spec {
            UpdateSpec::Flat(name) => {
                let etcd_key = path::top_level_key(&self.settings.etcd.prefix, name);
                self.write_leaf(&etcd_key, name, root_value).await
            }
            UpdateSpec::Nested(root, leaf) => {
                let entries =
                    root_value
                        .as_mapping()
                        .ok_or_else(|| ResolveError::NotUnderRoot {
                            key: raw.to_string(),
                            root: root.clone(),
                        })?;
                let leaf_value = entries
                    .get(leaf.as_str())
                    .ok_or_else(|| ResolveError::KeyNotFound(raw.to_string()))?;

                let etcd_key = path::nested_key(&self.settings.etcd.prefix, root, leaf);
                self.write_leaf(&etcd_key, root, leaf_value).await
            }
        }
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

        tracing::info!(key = %etcd_key, name = %name, "updated configuration leaf");
        Ok(())
    }
}
