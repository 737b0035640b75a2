use std::time::{Duration, Instant};

use async_trait::async_trait;
use ocean_domain::Ddo;
use ocean_observability::record_service_call;
use reqwest::{Client, StatusCode};

use crate::{Result, ServiceError, ServicesConfig};

const SERVICE: &str = "aquarius";
const DDO_ENDPOINT: &str = "/api/aquarius/assets/ddo";

/// Read access to published DDOs indexed from chain.
#[async_trait]
pub trait MetadataCache: Send + Sync {
    /// The indexed DDO, or `None` while the asset is not (yet) known.
    async fn get_ddo(&self, did: &str) -> Result<Option<Ddo>>;

    /// Polls until the asset is indexed or `timeout` elapses.
    async fn wait_for_ddo(
        &self,
        did: &str,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<Ddo> {
        let started = Instant::now();
        loop {
            if let Some(ddo) = self.get_ddo(did).await? {
                tracing::debug!(did, waited_ms = started.elapsed().as_millis(), "Asset indexed");
                return Ok(ddo);
            }

            if started.elapsed() >= timeout {
                return Err(ServiceError::Timeout {
                    did: did.to_string(),
                    waited: started.elapsed(),
                });
            }
            tokio::time::sleep(poll_interval).await;
        }
    }
}

/// HTTP client for the Aquarius metadata cache.
pub struct Aquarius {
    client: Client,
    base_url: String,
}

impl Aquarius {
    pub fn new(base_url: &str, config: &ServicesConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Built from the configured cache URI, if any.
    pub fn from_config(config: &ServicesConfig) -> Result<Option<Self>> {
        config
            .metadata_cache_uri
            .as_deref()
            .map(|uri| Self::new(uri, config))
            .transpose()
    }

    fn ddo_url(&self, did: &str) -> String {
        format!("{}{}/{}", self.base_url, DDO_ENDPOINT, did)
    }
}

#[async_trait]
impl MetadataCache for Aquarius {
    async fn get_ddo(&self, did: &str) -> Result<Option<Ddo>> {
        let started = Instant::now();
        let response = self.client.get(self.ddo_url(did)).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            record_service_call(SERVICE, DDO_ENDPOINT, "not_found", started.elapsed());
            return Ok(None);
        }

        if !status.is_success() {
            record_service_call(SERVICE, DDO_ENDPOINT, "error", started.elapsed());
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Backend {
                service: SERVICE,
                status: status.as_u16(),
                message,
            });
        }

        record_service_call(SERVICE, DDO_ENDPOINT, "ok", started.elapsed());
        let body = response.bytes().await?;
        let ddo = serde_json::from_slice(&body).map_err(|e| ServiceError::ParseError {
            service: SERVICE,
            reason: e.to_string(),
        })?;
        Ok(Some(ddo))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alloy::primitives::Address;
    use ocean_domain::{AssetMetadata, Credentials};

    use super::*;

    /// Cache that indexes the asset after a number of lookups.
    struct DelayedCache {
        lookups: AtomicUsize,
        ready_after: usize,
    }

    #[async_trait]
    impl MetadataCache for DelayedCache {
        async fn get_ddo(&self, did: &str) -> Result<Option<Ddo>> {
            let seen = self.lookups.fetch_add(1, Ordering::SeqCst) + 1;
            if seen < self.ready_after {
                return Ok(None);
            }
            Ok(Some(Ddo::new(
                did.to_string(),
                8996,
                Address::ZERO,
                AssetMetadata {
                    created: "2020-11-15T12:27:48Z".to_string(),
                    updated: "2020-11-15T12:27:48Z".to_string(),
                    description: "Sample description".to_string(),
                    name: "Sample asset".to_string(),
                    asset_type: "dataset".to_string(),
                    author: "OPF".to_string(),
                    license: "https://market.oceanprotocol.com/terms".to_string(),
                    tags: Vec::new(),
                    links: Vec::new(),
                    content_language: None,
                    algorithm: None,
                    additional_information: None,
                },
                Vec::new(),
                Credentials::default(),
            )))
        }
    }

    #[tokio::test]
    async fn waits_until_asset_is_indexed() {
        let cache = DelayedCache {
            lookups: AtomicUsize::new(0),
            ready_after: 3,
        };

        let ddo = cache
            .wait_for_ddo("did:op:abc", Duration::from_millis(1), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(ddo.id, "did:op:abc");
        assert_eq!(cache.lookups.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn times_out_when_asset_never_appears() {
        let cache = DelayedCache {
            lookups: AtomicUsize::new(0),
            ready_after: usize::MAX,
        };

        let err = cache
            .wait_for_ddo("did:op:abc", Duration::from_millis(1), Duration::from_millis(5))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Timeout { .. }));
    }

    #[test]
    fn builds_ddo_url() {
        let config = crate::ServicesConfigRaw {
            provider_url: "http://localhost:8030".to_string(),
            metadata_cache_uri: Some("http://localhost:5000/".to_string()),
            request_timeout_ms: 1_000,
            ddo_poll_interval_ms: 100,
            ddo_wait_timeout_ms: 1_000,
        }
        .resolve()
        .unwrap();

        let aquarius = Aquarius::from_config(&config).unwrap().unwrap();
        assert_eq!(
            aquarius.ddo_url("did:op:abc"),
            "http://localhost:5000/api/aquarius/assets/ddo/did:op:abc"
        );
    }
}
