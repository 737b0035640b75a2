use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use super::{Config, ConfigRaw, defaults};
use crate::config::ConfigError;

const ENV_PREFIX: &str = "OCEAN_";
const ENVIRONMENT_VAR: &str = "OCEAN_ENVIRONMENT";
const CONFIG_FILE_VAR: &str = "OCEAN_CONFIG_FILE";

/// Loads configuration for the environment named by `OCEAN_ENVIRONMENT`
/// (default "development"), merging the TOML file named by
/// `OCEAN_CONFIG_FILE` when set.
pub fn load_from_env() -> Result<Config, ConfigError> {
    let environment = std::env::var(ENVIRONMENT_VAR)
        .map(|env| env.trim().to_lowercase())
        .unwrap_or_else(|_| "development".to_string());
    let config_file = std::env::var_os(CONFIG_FILE_VAR).map(PathBuf::from);

    load_configuration(&environment, config_file.as_deref())
}

/// Builds configuration with layered sources (priority: lowest to highest):
/// typed defaults for `environment`, the optional TOML file, then `OCEAN_*`
/// environment variables (nested keys separated by `__`, e.g.
/// `OCEAN_NETWORK__RPC_ENDPOINTS`).
pub fn load_configuration(
    environment: &str,
    config_file: Option<&Path>,
) -> Result<Config, ConfigError> {
    tracing::debug!("Loading configuration for environment: {}", environment);

    let mut figment = Figment::from(Serialized::defaults(defaults::config_for(environment)?));

    if let Some(path) = config_file {
        if !path.exists() {
            return Err(ConfigError::MissingConfig(path.display().to_string()));
        }
        tracing::debug!("Loading config file: {}", path.display());
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .split("__")
            .ignore(&["config_file"]),
    );

    let config: ConfigRaw = figment.extract().map_err(Box::new)?;
    if config.environment != environment {
        return Err(ConfigError::UnknownEnvironment(format!(
            "config environment '{}' does not match selected '{}'",
            config.environment, environment
        )));
    }

    config.resolve()
}
