//! Shared fixtures for resolver integration tests.

use confsync::config::{EtcdSettings, Settings};
use serde_yaml::Mapping;

/// Settings pointing at the standard test roots and prefix.
pub fn settings(tls_root: &str, db_root: &str) -> Settings {
    Settings {
        yaml_path: "app.yaml".to_string(),
        tls_root: tls_root.to_string(),
        db_root: db_root.to_string(),
        etcd: EtcdSettings {
            hosts: vec!["http://localhost:2379".to_string()],
            ..EtcdSettings::default()
        },
        ..Settings::default()
    }
}

/// Parse an inline YAML document, which must be a mapping.
pub fn document(yaml: &str) -> Mapping {
    match serde_yaml::from_str(yaml).unwrap() {
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => panic!("test document is not a mapping: {:?}", other),
    }
}

/// Parse a stored payload back into a value for structural assertions.
#[allow(dead_code)]
pub fn payload(raw: &str) -> serde_yaml::Value {
    serde_yaml::from_str(raw).unwrap()
}
