//! Logger initialization.
//!
//! Configures tracing-based logging with pretty or JSON output. The `RUST_LOG`
//! environment variable takes precedence over the configured level.
//! Initialization is idempotent, so tests and embedding applications can call
//! it freely; the first subscriber installed wins.

mod config;

use std::net::SocketAddr;

pub use config::{LogFormat, LoggerConfig, TelemetryConfig};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn initialize(logger_config: &LoggerConfig, telemetry_config: &TelemetryConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logger_config.level));

    initialize_logger(logger_config, filter);

    initialize_metrics(telemetry_config);
}

fn initialize_logger(logger_config: &LoggerConfig, filter: EnvFilter) {
    let result = match logger_config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed; keeping it");
    }
}

fn initialize_metrics(telemetry_config: &TelemetryConfig) {
    if !telemetry_config.metrics_enabled {
        return;
    }

    let bind_address: SocketAddr = match telemetry_config.metrics_bind_address.parse() {
        Ok(address) => address,
        Err(error) => {
            tracing::warn!(
                bind_address = %telemetry_config.metrics_bind_address,
                error = %error,
                "Invalid metrics bind address; metrics exporter disabled"
            );
            return;
        }
    };

    match PrometheusBuilder::new()
        .with_http_listener(bind_address)
        .install()
    {
        Ok(_) => tracing::info!(
            bind_address = %bind_address,
            "Prometheus metrics exporter enabled"
        ),
        Err(error) => tracing::warn!(
            bind_address = %bind_address,
            error = %error,
            "Failed to initialize Prometheus metrics exporter"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        let logger = LoggerConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
        };
        let telemetry = TelemetryConfig {
            metrics_enabled: false,
            metrics_bind_address: "127.0.0.1:9464".to_string(),
        };

        initialize(&logger, &telemetry);
        initialize(&logger, &telemetry);
    }

    #[test]
    fn log_format_is_lowercase_in_config() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
