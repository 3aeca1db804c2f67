//! Command-line flag surface.
//!
//! One flag per resolver input; `--config-file` loads the same fields
//! from a YAML settings file instead (and then wins wholesale). The
//! comma-separated list flags are split here so the resolvers only ever
//! see pre-split sequences.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{EtcdSettings, Settings};

#[derive(Debug, Parser)]
#[command(name = "confsync")]
#[command(about = "Flatten a nested YAML configuration into etcd", long_about = None)]
pub struct Cli {
    /// Path to a YAML settings file; replaces the other flags when given.
    #[arg(long = "config-file")]
    pub config_file: Option<PathBuf>,

    /// Path to the YAML document to flatten.
    #[arg(long = "yaml-file", default_value = "")]
    pub yaml_file: String,

    /// Top-level key of the credential subtree (leaf values are file
    /// paths, inlined as base64).
    #[arg(long = "tls-root-level", default_value = "")]
    pub tls_root_level: String,

    /// Top-level key of the grouped subtree (second-level entries become
    /// independent store keys).
    #[arg(long = "db-root-level", default_value = "")]
    pub db_root_level: String,

    /// etcd endpoints, comma separated,
    /// e.g. http://localhost:2379,http://localhost:2380.
    #[arg(long = "etcd-hosts", default_value = "")]
    pub etcd_hosts: String,

    /// Whether the etcd connection uses TLS.
    #[arg(long = "etcd-tls-enabled")]
    pub etcd_tls_enabled: bool,

    /// Path to the etcd CA certificate file.
    #[arg(long = "etcd-ca-cert", default_value = "")]
    pub etcd_ca_cert: String,

    /// Path to the etcd client certificate file.
    #[arg(long = "etcd-cert", default_value = "")]
    pub etcd_cert: String,

    /// Path to the etcd client key file.
    #[arg(long = "etcd-key", default_value = "")]
    pub etcd_key: String,

    /// Store key prefix; keys come out as e.g. config/databases/redis.
    #[arg(long = "etcd-prefix", default_value = "config")]
    pub etcd_prefix: String,

    /// Update only the keys given in --update-keys.
    #[arg(long)]
    pub update: bool,

    /// Dotted update specs, comma separated,
    /// e.g. databases.mariadb,tls.kafka.
    #[arg(long = "update-keys", default_value = "")]
    pub update_keys: String,

    /// Emit the manifest after a full resolution (no effect with --update).
    #[arg(long)]
    pub output: bool,

    /// Where the manifest is written when --output is set.
    #[arg(long = "output-file-path", default_value = "etcd-config.yaml")]
    pub output_file_path: String,
}

impl Cli {
    /// Assemble settings from the flag values, splitting the list flags.
    pub fn into_settings(self) -> Settings {
        Settings {
            yaml_path: self.yaml_file,
            tls_root: self.tls_root_level,
            db_root: self.db_root_level,
            update: self.update,
            update_keys: split_list(&self.update_keys),
            output: self.output,
            output_path: self.output_file_path,
            etcd: EtcdSettings {
                hosts: split_list(&self.etcd_hosts),
                prefix: self.etcd_prefix,
                tls_enabled: self.etcd_tls_enabled,
                ca_path: self.etcd_ca_cert,
                cert_path: self.etcd_cert,
                key_path: self.etcd_key,
            },
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_settings() {
        let cli = Cli::parse_from([
            "confsync",
            "--yaml-file",
            "app.yaml",
            "--tls-root-level",
            "tls",
            "--db-root-level",
            "databases",
            "--etcd-hosts",
            "http://a:2379,http://b:2379",
            "--update",
            "--update-keys",
            "databases.mariadb, tls.kafka",
        ]);

        let settings = cli.into_settings();
        assert_eq!(settings.etcd.hosts, ["http://a:2379", "http://b:2379"]);
        assert_eq!(settings.etcd.prefix, "config");
        assert_eq!(settings.update_keys, ["databases.mariadb", "tls.kafka"]);
        assert!(settings.update);
    }

    #[test]
    fn empty_list_flags_split_to_nothing() {
        let cli = Cli::parse_from(["confsync"]);
        let settings = cli.into_settings();
        assert!(settings.etcd.hosts.is_empty());
        assert!(settings.update_keys.is_empty());
    }
}
