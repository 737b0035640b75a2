use serde::{Deserialize, Serialize};

/// Logger configuration for tracing output.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Log level filter (e.g., "info", "debug", or module-specific like
    /// "ocean_sdk=debug,ocean_contracts=trace")
    pub level: String,
    /// Output format: "pretty" for human-readable, "json" for structured JSON logs
    pub format: LogFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Whether to expose Prometheus metrics.
    pub metrics_enabled: bool,
    /// Bind address for the Prometheus metrics endpoint.
    pub metrics_bind_address: String,
}
