use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Off-chain service endpoints used when publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesConfigRaw {
    /// Base URL of the data service provider (encryption, file access).
    pub provider_url: String,

    /// Base URL of the Aquarius metadata cache. When unset, published assets
    /// are assembled locally instead of being fetched back from the cache.
    #[serde(default)]
    pub metadata_cache_uri: Option<String>,

    /// Timeout for a single HTTP request in milliseconds.
    pub request_timeout_ms: u64,

    /// Interval between metadata cache lookups while waiting for a new asset.
    pub ddo_poll_interval_ms: u64,

    /// How long to wait for a new asset to be indexed by the metadata cache.
    pub ddo_wait_timeout_ms: u64,
}

impl ServicesConfigRaw {
    pub fn ensure_urls(&self) -> Result<(), ServiceError> {
        ensure_http_url(&self.provider_url)?;
        if let Some(uri) = &self.metadata_cache_uri {
            ensure_http_url(uri)?;
        }
        Ok(())
    }

    pub fn resolve(self) -> Result<ServicesConfig, ServiceError> {
        self.ensure_urls()?;

        Ok(ServicesConfig {
            provider_url: self.provider_url.trim_end_matches('/').to_string(),
            metadata_cache_uri: self
                .metadata_cache_uri
                .map(|uri| uri.trim_end_matches('/').to_string()),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            ddo_poll_interval: Duration::from_millis(self.ddo_poll_interval_ms.max(1)),
            ddo_wait_timeout: Duration::from_millis(self.ddo_wait_timeout_ms),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServicesConfig {
    pub provider_url: String,
    pub metadata_cache_uri: Option<String>,
    pub request_timeout: Duration,
    pub ddo_poll_interval: Duration,
    pub ddo_wait_timeout: Duration,
}

fn ensure_http_url(url: &str) -> Result<(), ServiceError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ServiceError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ServiceError::InvalidUrl {
            url: url.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }
    Ok(())
}
