use std::time::Duration;

use thiserror::Error;

/// Errors returned by the off-chain service clients.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("{service} error (status {status}): {message}")]
    Backend {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse {service} response: {reason}")]
    ParseError {
        service: &'static str,
        reason: String,
    },

    #[error("Provider has no signer address for chain {chain_id}")]
    MissingProviderAddress { chain_id: u64 },

    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Asset {did} did not appear in the metadata cache within {waited:?}")]
    Timeout { did: String, waited: Duration },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
