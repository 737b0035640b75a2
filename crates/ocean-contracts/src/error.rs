use alloy::{
    contract::Error as ContractError,
    primitives::B256,
    signers::local::LocalSignerError,
    transports::{RpcError, TransportErrorKind},
};

#[derive(Debug, thiserror::Error)]
pub enum BlockchainError {
    #[error("Call {contract}::{function} failed: {reason}")]
    CallFailed {
        contract: String,
        function: String,
        reason: String,
        #[source]
        source: ContractError,
    },

    #[error("Transaction failed: {contract}::{function} - {reason}")]
    TransactionFailed {
        contract: String,
        function: String,
        reason: String,
        #[source]
        source: ContractError,
    },

    #[error("Sending transaction failed: {reason}")]
    SendFailed {
        reason: String,
        #[source]
        source: RpcError<TransportErrorKind>,
    },

    #[error("Transaction {tx_hash} reverted: {contract}::{function}")]
    Reverted {
        contract: String,
        function: String,
        tx_hash: B256,
    },

    #[error("Transaction receipt failed: {reason}")]
    ReceiptFailed { reason: String },

    #[error("Event {event} not found in transaction {tx_hash}")]
    MissingEvent { event: &'static str, tx_hash: B256 },

    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("Invalid private key (length: {key_length})")]
    InvalidPrivateKey {
        key_length: usize,
        #[source]
        source: LocalSignerError,
    },

    #[error("RPC connection failed after trying {attempts} endpoint(s)")]
    RpcConnectionFailed { attempts: usize },

    #[error("Chain id mismatch: network expects {expected}, node reports {actual}")]
    ChainIdMismatch { expected: u64, actual: u64 },

    #[error("Failed to get logs: {reason}")]
    GetLogs {
        reason: String,
        #[source]
        source: Option<RpcError<TransportErrorKind>>,
    },

    #[error("Failed to get block number: {reason}")]
    GetBlockNumber {
        reason: String,
        #[source]
        source: Option<RpcError<TransportErrorKind>>,
    },

    #[error("Failed to get balance: {reason}")]
    GetBalance {
        reason: String,
        #[source]
        source: Option<RpcError<TransportErrorKind>>,
    },

    #[error("Address book error: {reason}")]
    AddressBook { reason: String },

    #[error("Contract '{contract}' has no address on network '{network}'")]
    UnknownContract { network: String, contract: String },

    #[error("{0}")]
    Custom(String),
}

impl BlockchainError {
    pub(crate) fn get_logs(err: RpcError<TransportErrorKind>) -> Self {
        Self::GetLogs {
            reason: err.to_string(),
            source: Some(err),
        }
    }

    pub(crate) fn get_block_number(err: RpcError<TransportErrorKind>) -> Self {
        Self::GetBlockNumber {
            reason: err.to_string(),
            source: Some(err),
        }
    }

    pub(crate) fn get_balance(err: RpcError<TransportErrorKind>) -> Self {
        Self::GetBalance {
            reason: err.to_string(),
            source: Some(err),
        }
    }

    /// Revert reason or custom error carried by this error, if any.
    pub fn revert_reason(&self) -> Option<String> {
        match self {
            Self::CallFailed { source, .. } | Self::TransactionFailed { source, .. } => {
                crate::error_decode::decode_contract_error(source)
            }
            _ => None,
        }
    }
}
