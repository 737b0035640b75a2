mod defaults;
mod error;
mod loader;
mod raw;

pub use defaults::{ENVIRONMENTS, config_for};
pub use error::ConfigError;
pub use loader::{load_configuration, load_from_env};
pub use raw::{Config, ConfigRaw};
