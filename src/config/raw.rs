use std::path::PathBuf;

use ocean_contracts::{NetworkConfig, NetworkConfigRaw};
use ocean_services::{ServicesConfig, ServicesConfigRaw};
use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigError,
    logger::{LoggerConfig, TelemetryConfig},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigRaw {
    pub environment: String,
    pub network: NetworkConfigRaw,
    pub services: ServicesConfigRaw,
    pub logger: LoggerConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub network: NetworkConfig,
    pub services: ServicesConfig,
    pub logger: LoggerConfig,
    pub telemetry: TelemetryConfig,
}

impl ConfigRaw {
    pub fn resolve(mut self) -> Result<Config, ConfigError> {
        self.network.address_file = expand_home(self.network.address_file);

        Ok(Config {
            environment: self.environment,
            network: self.network.resolve()?,
            services: self.services.resolve()?,
            logger: self.logger,
            telemetry: self.telemetry,
        })
    }
}

/// Expands a leading `~/` using `$HOME`.
fn expand_home(path: PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path,
    }
}
