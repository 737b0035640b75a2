use alloy::primitives::{Address, hex};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const DID_PREFIX: &str = "did:op:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DidError {
    #[error("DID must start with '{DID_PREFIX}': {0}")]
    Prefix(String),
    #[error("DID checksum must be 64 hex characters: {0}")]
    Checksum(String),
}

/// Hex SHA-256 of `text`, as used for DID derivation and DDO hashes.
pub fn did_checksum(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derive the DID of an asset from its data NFT and chain.
///
/// `did:op:` + sha256(checksummed NFT address + decimal chain id)
pub fn derive_did(nft_address: Address, chain_id: u64) -> String {
    let seed = format!("{}{}", nft_address.to_checksum(None), chain_id);
    format!("{}{}", DID_PREFIX, did_checksum(&seed))
}

/// Check that `did` has the `did:op:<64 hex>` shape.
pub fn validate_did(did: &str) -> Result<(), DidError> {
    let checksum = did
        .strip_prefix(DID_PREFIX)
        .ok_or_else(|| DidError::Prefix(did.to_string()))?;

    if checksum.len() != 64 || !checksum.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DidError::Checksum(did.to_string()));
    }
    Ok(())
}
