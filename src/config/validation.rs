//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Required-field checks that depend on the selected mode
//! - TLS material completeness when the backend connection uses TLS
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Settings → Result<(), Vec<ValidationError>>
//! - Runs before settings are accepted into the system

use thiserror::Error;

use crate::config::schema::Settings;

/// A single settings problem, phrased in terms of the flag surface.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("--yaml-file is required")]
    MissingYamlPath,

    #[error("--tls-root-level is required")]
    MissingTlsRoot,

    #[error("--db-root-level is required")]
    MissingDbRoot,

    #[error("--etcd-hosts requires at least one endpoint")]
    MissingHosts,

    #[error("--etcd-ca-cert, --etcd-cert and --etcd-key are required when --etcd-tls-enabled is set")]
    MissingTlsMaterial,

    #[error("--update-keys is required when --update is set")]
    MissingUpdateKeys,
}

/// Check a settings value for completeness, collecting every problem.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.yaml_path.is_empty() {
        errors.push(ValidationError::MissingYamlPath);
    }
    if settings.tls_root.is_empty() {
        errors.push(ValidationError::MissingTlsRoot);
    }
    if settings.db_root.is_empty() {
        errors.push(ValidationError::MissingDbRoot);
    }
    if settings.etcd.hosts.is_empty() || settings.etcd.hosts.iter().all(|h| h.is_empty()) {
        errors.push(ValidationError::MissingHosts);
    }

    if settings.etcd.tls_enabled
        && (settings.etcd.ca_path.is_empty()
            || settings.etcd.cert_path.is_empty()
            || settings.etcd.key_path.is_empty())
    {
        errors.push(ValidationError::MissingTlsMaterial);
    }

    if settings.update && settings.update_keys.iter().all(|k| k.is_empty()) {
        errors.push(ValidationError::MissingUpdateKeys);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EtcdSettings;

    fn minimal() -> Settings {
        Settings {
            yaml_path: "app.yaml".to_string(),
            tls_root: "tls".to_string(),
            db_root: "databases".to_string(),
            etcd: EtcdSettings {
                hosts: vec!["http://localhost:2379".to_string()],
                ..EtcdSettings::default()
            },
            ..Settings::default()
        }
    }

    #[test]
    fn minimal_settings_pass() {
        assert!(validate_settings(&minimal()).is_ok());
    }

    #[test]
    fn empty_settings_collect_all_errors() {
        let errors = validate_settings(&Settings::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn tls_enabled_requires_material() {
        let mut settings = minimal();
        settings.etcd.tls_enabled = true;
        let errors = validate_settings(&settings).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MissingTlsMaterial));
    }

    #[test]
    fn update_requires_keys() {
        let mut settings = minimal();
        settings.update = true;
        let errors = validate_settings(&settings).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MissingUpdateKeys));

        settings.update_keys = vec!["databases.mariadb".to_string()];
        assert!(validate_settings(&settings).is_ok());
    }
}
