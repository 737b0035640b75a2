use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] Box<figment::Error>),

    #[error("Missing required config file: {0}")]
    MissingConfig(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Invalid network configuration: {0}")]
    Network(#[from] ocean_contracts::ConfigError),

    #[error("Invalid services configuration: {0}")]
    Services(#[from] ocean_services::ServiceError),
}
