//! Store-key and payload derivation.
//!
//! # Responsibilities
//! - Derive the `/`-delimited store key for every document position
//! - Serialize the single-entry `{name: value}` payload written under it
//!
//! # Design Decisions
//! - The prefix is used verbatim; every document-derived segment is
//!   lower-cased, except credential service names, which keep their
//!   source casing (downstream consumers depend on both behaviors)
//! - Derivation is pure: a key depends only on the prefix, the root
//!   designator or key name, and the leaf name

use serde_yaml::{Mapping, Value};

use crate::resolver::error::{ResolveError, ResolveResult};

/// Key for a generic top-level entry: `prefix/lower(name)`.
pub fn top_level_key(prefix: &str, name: &str) -> String {
    format!("{}/{}", prefix, name.to_lowercase())
}

/// Key for a grouped-subtree leaf or a two-segment update:
/// `prefix/lower(root)/lower(leaf)`.
pub fn nested_key(prefix: &str, root: &str, leaf: &str) -> String {
    format!("{}/{}/{}", prefix, root.to_lowercase(), leaf.to_lowercase())
}

/// Key for a credential-subtree leaf in full mode:
/// `prefix/lower(root)/service`. The service segment keeps its source
/// casing, unlike every other derived segment.
pub fn credential_key(prefix: &str, root: &str, service: &str) -> String {
    format!("{}/{}/{}", prefix, root.to_lowercase(), service)
}

/// Serialize the `{name: value}` payload stored under a derived key.
pub fn payload(key: &str, name: &str, value: &Value) -> ResolveResult<String> {
    let mut entry = Mapping::new();
    entry.insert(Value::String(name.to_string()), value.clone());
    serde_yaml::to_string(&entry).map_err(|source| ResolveError::Serialization {
        key: key.to_string(),
        source,
    })
}

/// Mapping keys must be strings to become path segments.
pub fn key_str<'a>(key: &'a Value, context: &str) -> ResolveResult<&'a str> {
    key.as_str().ok_or_else(|| ResolveError::InvalidStructure {
        path: context.to_string(),
        reason: "mapping key is not a string".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_key_lowercases_the_name() {
        assert_eq!(top_level_key("config", "Region"), "config/region");
    }

    #[test]
    fn nested_key_lowercases_both_segments() {
        assert_eq!(
            nested_key("config", "Databases", "MariaDB"),
            "config/databases/mariadb"
        );
    }

    #[test]
    fn credential_key_preserves_service_casing() {
        assert_eq!(credential_key("config", "TLS", "Kafka"), "config/tls/Kafka");
    }

    #[test]
    fn prefix_is_used_verbatim() {
        assert_eq!(top_level_key("My/Prefix", "app"), "My/Prefix/app");
    }

    #[test]
    fn payload_is_a_single_entry_mapping() {
        let value = Value::String("us-east".to_string());
        let payload = payload("config/region", "region", &value).unwrap();
        assert_eq!(payload, "region: us-east\n");
    }

    #[test]
    fn non_string_mapping_key_is_rejected() {
        let key = Value::Number(7.into());
        let err = key_str(&key, "top level").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidStructure { .. }));
    }
}
