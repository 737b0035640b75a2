use std::time::{Duration, Instant};

use alloy::primitives::Address;
use async_trait::async_trait;
use ocean_observability::record_service_call;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::{Result, ServiceError, ServicesConfig};

const SERVICE: &str = "provider";
const ENCRYPT_ENDPOINT: &str = "/api/services/encrypt";

/// A file reference handed to the provider for encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileObject {
    Url { url: String, method: String },
}

impl FileObject {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url {
            url: url.into(),
            method: "GET".to_string(),
        }
    }
}

/// Encrypts documents so that only the provider can read them back.
#[async_trait]
pub trait Encryptor: Send + Sync {
    /// Base URL written on-chain as the metadata decryptor.
    fn url(&self) -> &str;

    /// Address of the provider's signer on `chain_id`.
    async fn provider_address(&self, chain_id: u64) -> Result<Address>;

    /// Encrypts `data` and returns the provider's hex-encoded ciphertext.
    async fn encrypt(&self, data: &[u8], chain_id: u64) -> Result<String>;

    /// Encrypts a file list for a service's `files` field.
    async fn encrypt_files(&self, files: &[FileObject], chain_id: u64) -> Result<String> {
        let document = serde_json::to_vec(files).map_err(|e| ServiceError::ParseError {
            service: SERVICE,
            reason: e.to_string(),
        })?;
        self.encrypt(&document, chain_id).await
    }
}

/// HTTP client for an Ocean data service provider.
pub struct DataServiceProvider {
    client: Client,
    base_url: String,
}

impl DataServiceProvider {
    pub fn new(config: &ServicesConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.provider_url.clone(),
        })
    }

    async fn check(
        response: reqwest::Response,
        endpoint: &str,
        started: Instant,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            record_service_call(SERVICE, endpoint, "ok", started.elapsed());
            return Ok(response);
        }

        record_service_call(SERVICE, endpoint, "error", started.elapsed());
        let message = response.text().await.unwrap_or_default();
        Err(ServiceError::Backend {
            service: SERVICE,
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Encryptor for DataServiceProvider {
    fn url(&self) -> &str {
        &self.base_url
    }

    async fn provider_address(&self, chain_id: u64) -> Result<Address> {
        let started = Instant::now();
        let response = self.client.get(format!("{}/", self.base_url)).send().await?;
        let root: serde_json::Value = Self::check(response, "/", started).await?.json().await?;

        provider_address_from_root(&root, chain_id)
    }

    async fn encrypt(&self, data: &[u8], chain_id: u64) -> Result<String> {
        let started = Instant::now();
        let response = self
            .client
            .post(format!("{}{}", self.base_url, ENCRYPT_ENDPOINT))
            .query(&[("chainId", chain_id)])
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data.to_vec())
            .send()
            .await?;

        let encrypted = Self::check(response, ENCRYPT_ENDPOINT, started)
            .await?
            .text()
            .await?;

        tracing::trace!(bytes = data.len(), "Document encrypted by provider");
        Ok(encrypted.trim().to_string())
    }
}

/// Picks the signer address from the provider's root document. Multi-chain
/// providers list one address per chain under `providerAddresses`.
fn provider_address_from_root(root: &serde_json::Value, chain_id: u64) -> Result<Address> {
    let address = root
        .get("providerAddresses")
        .and_then(|addresses| addresses.get(chain_id.to_string()))
        .or_else(|| root.get("providerAddress"))
        .and_then(serde_json::Value::as_str)
        .ok_or(ServiceError::MissingProviderAddress { chain_id })?;

    address.parse().map_err(|_| ServiceError::ParseError {
        service: SERVICE,
        reason: format!("invalid provider address '{}'", address),
    })
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use serde_json::json;

    use super::*;

    #[test]
    fn prefers_per_chain_provider_address() {
        let root = json!({
            "providerAddress": "0x00000000000000000000000000000000000000a1",
            "providerAddresses": {
                "8996": "0x00000000000000000000000000000000000000a2"
            }
        });

        assert_eq!(
            provider_address_from_root(&root, 8996).unwrap(),
            address!("0x00000000000000000000000000000000000000a2")
        );
        assert_eq!(
            provider_address_from_root(&root, 137).unwrap(),
            address!("0x00000000000000000000000000000000000000a1")
        );
    }

    #[test]
    fn reports_missing_provider_address() {
        let err = provider_address_from_root(&json!({"version": "1.0"}), 8996).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::MissingProviderAddress { chain_id: 8996 }
        ));
    }

    #[test]
    fn serializes_url_file_objects() {
        let files = vec![FileObject::url(
            "https://raw.githubusercontent.com/trentmc/branin/main/branin.arff",
        )];
        assert_eq!(
            serde_json::to_value(&files).unwrap(),
            json!([{
                "type": "url",
                "url": "https://raw.githubusercontent.com/trentmc/branin/main/branin.arff",
                "method": "GET"
            }])
        );
    }
}
