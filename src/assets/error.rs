use ocean_contracts::BlockchainError;
use ocean_domain::DdoValidationError;
use ocean_services::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(#[from] DdoValidationError),

    #[error("An asset needs at least one datatoken: deploy new ones or pass deployed addresses")]
    NoDatatokens,

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Failed to serialize DDO: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to compress DDO: {0}")]
    Compression(#[source] std::io::Error),

    #[error("Provider returned an invalid encrypted document: {reason}")]
    InvalidEncryptedDocument { reason: String },
}
