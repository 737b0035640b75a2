use std::{path::PathBuf, time::Duration};

use ocean_domain::NetworkId;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Connection settings for one EVM network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfigRaw {
    /// Network identifier in `name:chainid` form (e.g. "development:8996").
    /// The name selects the section of the address file.
    pub network_id: NetworkId,

    /// RPC endpoints for EVM JSON-RPC calls (supports HTTP and WebSocket).
    /// Multiple endpoints enable fallback if the primary fails.
    #[serde(default)]
    pub rpc_endpoints: Vec<String>,

    /// Path to the deployed contracts' `address.json`.
    pub address_file: PathBuf,

    /// Number of confirmations to wait for when fetching transaction receipts.
    pub block_confirmations: u64,

    /// Timeout for waiting on transaction receipts in milliseconds.
    /// Set to 0 to disable the timeout.
    pub transaction_timeout_ms: u64,
}

impl NetworkConfigRaw {
    /// Ensures at least one RPC endpoint is configured.
    pub fn ensure_rpc_endpoints(&self) -> Result<(), ConfigError> {
        if self.rpc_endpoints.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "rpc_endpoints must include at least one endpoint".to_string(),
            ));
        }
        Ok(())
    }

    pub fn ensure_network_id(&self) -> Result<(), ConfigError> {
        self.network_id
            .validate()
            .map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }

    pub fn ensure_address_file(&self) -> Result<(), ConfigError> {
        if self.address_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "address_file must point to the deployed contracts' address.json".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolve(self) -> Result<NetworkConfig, ConfigError> {
        self.ensure_network_id()?;
        self.ensure_rpc_endpoints()?;
        self.ensure_address_file()?;

        Ok(NetworkConfig {
            network_id: self.network_id,
            rpc_endpoints: self.rpc_endpoints,
            address_file: self.address_file,
            block_confirmations: self.block_confirmations,
            transaction_timeout_ms: self.transaction_timeout_ms,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub network_id: NetworkId,
    pub rpc_endpoints: Vec<String>,
    pub address_file: PathBuf,
    pub block_confirmations: u64,
    pub transaction_timeout_ms: u64,
}

impl NetworkConfig {
    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }

    pub fn network_name(&self) -> &str {
        self.network_id.name()
    }

    pub fn rpc_endpoints(&self) -> &[String] {
        &self.rpc_endpoints
    }

    pub fn address_file(&self) -> &PathBuf {
        &self.address_file
    }

    pub fn confirmation_policy(&self) -> ConfirmationPolicy {
        ConfirmationPolicy {
            block_confirmations: self.block_confirmations,
            transaction_timeout: (self.transaction_timeout_ms > 0)
                .then(|| Duration::from_millis(self.transaction_timeout_ms)),
        }
    }
}

/// How long a wallet waits for its transactions to be mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    pub block_confirmations: u64,
    pub transaction_timeout: Option<Duration>,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            block_confirmations: 1,
            transaction_timeout: Some(Duration::from_secs(600)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> NetworkConfigRaw {
        NetworkConfigRaw {
            network_id: NetworkId::from("development:8996"),
            rpc_endpoints: vec!["http://127.0.0.1:8545".to_string()],
            address_file: PathBuf::from("address.json"),
            block_confirmations: 0,
            transaction_timeout_ms: 0,
        }
    }

    #[test]
    fn resolves_and_disables_zero_timeout() {
        let config = raw().resolve().unwrap();
        assert_eq!(config.network_name(), "development");
        assert_eq!(
            config.confirmation_policy(),
            ConfirmationPolicy {
                block_confirmations: 0,
                transaction_timeout: None,
            }
        );
    }

    #[test]
    fn rejects_missing_endpoints_and_bad_network_id() {
        let mut no_endpoints = raw();
        no_endpoints.rpc_endpoints.clear();
        assert!(matches!(
            no_endpoints.resolve(),
            Err(ConfigError::InvalidConfig(_))
        ));

        let mut bad_id = raw();
        bad_id.network_id = NetworkId::from("development");
        assert!(bad_id.resolve().is_err());
    }
}
