//! etcd-backed store.

use std::time::Duration;

use async_trait::async_trait;
use etcd_client::{Certificate, Client, ConnectOptions, Identity, TlsOptions};
use tokio::time::timeout;

use crate::config::EtcdSettings;
use crate::store::{Store, StoreError};

const DIAL_TIMEOUT: Duration = Duration::from_secs(10);
const PUT_TIMEOUT: Duration = Duration::from_secs(15);

/// Store implementation over a pre-established etcd v3 connection.
pub struct EtcdStore {
    client: Client,
}

impl EtcdStore {
    /// Connect to the configured endpoints, loading client TLS material
    /// when the backend requires it.
    pub async fn connect(settings: &EtcdSettings) -> Result<Self, StoreError> {
        let mut options = ConnectOptions::new().with_connect_timeout(DIAL_TIMEOUT);

        if settings.tls_enabled {
            options = options.with_tls(tls_options(settings).await?);
        }

        let client = Client::connect(&settings.hosts, Some(options))
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        tracing::debug!(hosts = ?settings.hosts, tls = settings.tls_enabled, "connected to etcd");
        Ok(Self { client })
    }
}

async fn tls_options(settings: &EtcdSettings) -> Result<TlsOptions, StoreError> {
    let ca = read_material(&settings.ca_path).await?;
    let cert = read_material(&settings.cert_path).await?;
    let key = read_material(&settings.key_path).await?;

    Ok(TlsOptions::new()
        .ca_certificate(Certificate::from_pem(ca))
        .identity(Identity::from_pem(cert, key)))
}

async fn read_material(path: &str) -> Result<Vec<u8>, StoreError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| StoreError::TlsMaterial {
            path: path.to_string(),
            source,
        })
}

#[async_trait]
impl Store for EtcdStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut kv = self.client.kv_client();

        match timeout(PUT_TIMEOUT, kv.put(key, value, None)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(StoreError::Backend(e.to_string())),
            Err(_) => Err(StoreError::Timeout(PUT_TIMEOUT.as_secs())),
        }
    }
}
