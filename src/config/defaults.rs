//! Typed default configurations for each supported network.
//!
//! Each environment (development, mainnet, polygon, mumbai) gets a fully
//! constructed [`ConfigRaw`] via [`config_for`]. User TOML files and `OCEAN_`
//! environment variables are merged on top.

use std::path::PathBuf;

use ocean_contracts::NetworkConfigRaw;
use ocean_domain::NetworkId;
use ocean_services::ServicesConfigRaw;

use super::{ConfigError, ConfigRaw};
use crate::logger::{LogFormat, LoggerConfig, TelemetryConfig};

pub const ENVIRONMENTS: [&str; 4] = ["development", "mainnet", "polygon", "mumbai"];

/// Returns the default [`ConfigRaw`] for the given environment name.
pub fn config_for(environment: &str) -> Result<ConfigRaw, ConfigError> {
    match environment {
        "development" => Ok(development()),
        "mainnet" => Ok(mainnet()),
        "polygon" => Ok(polygon()),
        "mumbai" => Ok(mumbai()),
        _ => Err(ConfigError::UnknownEnvironment(environment.to_string())),
    }
}

// ── Shared defaults ─────────────────────────────────────────────

fn address_file() -> PathBuf {
    PathBuf::from("~/.ocean/ocean-contracts/artifacts/address.json")
}

fn telemetry() -> TelemetryConfig {
    TelemetryConfig {
        metrics_enabled: false,
        metrics_bind_address: "127.0.0.1:9464".to_string(),
    }
}

fn remote_network(name: &str, chain_id: u64, rpc: &str) -> NetworkConfigRaw {
    NetworkConfigRaw {
        network_id: NetworkId::new(name, chain_id),
        rpc_endpoints: vec![rpc.to_string()],
        address_file: address_file(),
        block_confirmations: 1,
        transaction_timeout_ms: 600_000,
    }
}

fn remote_services(provider_url: &str) -> ServicesConfigRaw {
    ServicesConfigRaw {
        provider_url: provider_url.to_string(),
        metadata_cache_uri: Some("https://v4.aquarius.oceanprotocol.com".to_string()),
        request_timeout_ms: 30_000,
        ddo_poll_interval_ms: 1_000,
        ddo_wait_timeout_ms: 300_000,
    }
}

fn logger(level: &str) -> LoggerConfig {
    LoggerConfig {
        level: level.to_string(),
        format: LogFormat::Pretty,
    }
}

// ── Environments ────────────────────────────────────────────────

/// Local barge deployment (ganache on 8545, provider and Aquarius in docker).
fn development() -> ConfigRaw {
    ConfigRaw {
        environment: "development".to_string(),
        network: NetworkConfigRaw {
            network_id: NetworkId::new("development", 8996),
            rpc_endpoints: vec!["http://127.0.0.1:8545".to_string()],
            address_file: address_file(),
            block_confirmations: 0,
            transaction_timeout_ms: 60_000,
        },
        services: ServicesConfigRaw {
            provider_url: "http://172.15.0.4:8030".to_string(),
            metadata_cache_uri: Some("http://172.15.0.5:5000".to_string()),
            request_timeout_ms: 30_000,
            ddo_poll_interval_ms: 500,
            ddo_wait_timeout_ms: 60_000,
        },
        logger: logger("ocean_sdk=debug,ocean_contracts=debug,ocean_services=info"),
        telemetry: telemetry(),
    }
}

fn mainnet() -> ConfigRaw {
    ConfigRaw {
        environment: "mainnet".to_string(),
        network: remote_network("mainnet", 1, "https://rpc.ankr.com/eth"),
        services: remote_services("https://v4.provider.mainnet.oceanprotocol.com"),
        logger: logger("ocean_sdk=info"),
        telemetry: telemetry(),
    }
}

fn polygon() -> ConfigRaw {
    ConfigRaw {
        environment: "polygon".to_string(),
        network: remote_network("polygon", 137, "https://polygon-rpc.com"),
        services: remote_services("https://v4.provider.polygon.oceanprotocol.com"),
        logger: logger("ocean_sdk=info"),
        telemetry: telemetry(),
    }
}

fn mumbai() -> ConfigRaw {
    ConfigRaw {
        environment: "mumbai".to_string(),
        network: remote_network("mumbai", 80001, "https://rpc-mumbai.maticvigil.com"),
        services: remote_services("https://v4.provider.mumbai.oceanprotocol.com"),
        logger: logger("ocean_sdk=info"),
        telemetry: telemetry(),
    }
}
