use thiserror::Error;

/// Errors raised while wiring an [`crate::Ocean`] instance together.
#[derive(Error, Debug)]
pub enum OceanError {
    /// Configuration could not be loaded or resolved
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// RPC connection, address book or contract errors
    #[error("Blockchain error: {0}")]
    Blockchain(#[from] ocean_contracts::BlockchainError),

    /// Data service provider or metadata cache errors
    #[error("Service error: {0}")]
    Service(#[from] ocean_services::ServiceError),

    #[error(
        "Address book entry '{network}' is for chain {book_chain_id}, but the node reports {chain_id}"
    )]
    AddressBookChainMismatch {
        network: String,
        book_chain_id: u64,
        chain_id: u64,
    },
}
