use alloy::primitives::{
    U256,
    utils::{format_ether, parse_ether},
};

use crate::error::BlockchainError;

/// Converts a decimal token amount ("0.5") to wei, assuming 18 decimals.
pub fn to_wei(amount: &str) -> Result<U256, BlockchainError> {
    parse_ether(amount)
        .map_err(|e| BlockchainError::Custom(format!("invalid amount '{}': {}", amount, e)))
}

pub fn from_wei(amount: U256) -> String {
    format_ether(amount)
}
