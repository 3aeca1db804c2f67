//! confsync: flatten a nested YAML configuration into etcd.
//!
//! One-shot CLI: load settings, connect to the backend, parse the
//! document, then run either a full resolution (every leaf, optional
//! manifest) or a selective update (one write per dotted spec).

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confsync::cli::Cli;
use confsync::config::{self, Settings, SettingsError};
use confsync::document;
use confsync::resolver::{FullResolver, UpdateResolver};
use confsync::store::EtcdStore;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confsync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = match load(cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error occurred when validating flags: {}", err);
            eprintln!("try --help to see more information");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&settings).await {
        tracing::error!(error = %err, "resolution failed");
        std::process::exit(1);
    }
}

fn load(cli: Cli) -> Result<Settings, SettingsError> {
    match cli.config_file.clone() {
        Some(path) => config::load_settings(&path),
        None => {
            let settings = cli.into_settings();
            config::validate_settings(&settings).map_err(SettingsError::Validation)?;
            Ok(settings)
        }
    }
}

async fn run(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        document = %settings.yaml_path,
        hosts = ?settings.etcd.hosts,
        prefix = %settings.etcd.prefix,
        update = settings.update,
        "settings loaded"
    );

    let store = EtcdStore::connect(&settings.etcd).await?;
    let mut document = document::load_document(&settings.yaml_path)?;

    if settings.update {
        let resolver = UpdateResolver::new(settings, &store);
        resolver
            .resolve_updates(&document, &settings.update_keys)
            .await?;
        tracing::info!("configuration updated in etcd");
        return Ok(());
    }

    let resolver = FullResolver::new(settings, &store);
    let manifest = resolver.resolve_all(&mut document).await?;

    if settings.output {
        manifest.write_yaml(Path::new(&settings.output_path))?;
        tracing::info!(path = %settings.output_path, "manifest written");
    }

    tracing::info!("configuration uploaded to etcd");
    Ok(())
}
