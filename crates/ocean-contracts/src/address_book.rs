//! Contract addresses per network, read from the `address.json` artifact
//! written by the Ocean contracts deployment.
//!
//! ```json
//! {
//!   "development": {
//!     "chainId": 8996,
//!     "Router": "0x...",
//!     "ERC721Factory": "0x...",
//!     "ERC721Template": { "1": "0x..." },
//!     "Ocean": "0x..."
//!   }
//! }
//! ```

use std::{collections::HashMap, path::Path};

use alloy::primitives::Address;
use serde_json::{Map, Value};

use crate::{ContractName, error::BlockchainError};

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    networks: HashMap<String, NetworkAddresses>,
}

#[derive(Debug, Clone)]
pub struct NetworkAddresses {
    network: String,
    chain_id: Option<u64>,
    entries: Map<String, Value>,
}

impl AddressBook {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BlockchainError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| BlockchainError::AddressBook {
                reason: format!("failed to read {}: {}", path.display(), e),
            })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, BlockchainError> {
        let root: Map<String, Value> =
            serde_json::from_str(contents).map_err(|e| BlockchainError::AddressBook {
                reason: format!("invalid address file: {}", e),
            })?;

        let mut networks = HashMap::with_capacity(root.len());
        for (network, value) in root {
            let Value::Object(entries) = value else {
                continue;
            };
            let chain_id = entries.get("chainId").and_then(Value::as_u64);
            networks.insert(
                network.clone(),
                NetworkAddresses {
                    network,
                    chain_id,
                    entries,
                },
            );
        }

        Ok(Self { networks })
    }

    pub fn network(&self, name: &str) -> Result<&NetworkAddresses, BlockchainError> {
        self.networks
            .get(name)
            .ok_or_else(|| BlockchainError::AddressBook {
                reason: format!("network '{}' not found in address file", name),
            })
    }

    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }
}

impl NetworkAddresses {
    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn address(&self, contract: ContractName) -> Result<Address, BlockchainError> {
        let value = self
            .entries
            .get(contract.address_key())
            .and_then(Value::as_str)
            .ok_or_else(|| self.unknown(contract))?;
        parse_address(value)
    }

    /// Address of a numbered template (`"ERC20Template": {"1": "0x..."}`).
    pub fn template(&self, contract: ContractName, index: u32) -> Result<Address, BlockchainError> {
        let value = self
            .entries
            .get(contract.address_key())
            .and_then(|templates| templates.get(index.to_string()))
            .and_then(Value::as_str)
            .ok_or_else(|| self.unknown(contract))?;
        parse_address(value)
    }

    fn unknown(&self, contract: ContractName) -> BlockchainError {
        BlockchainError::UnknownContract {
            network: self.network.clone(),
            contract: contract.as_str().to_string(),
        }
    }
}

fn parse_address(value: &str) -> Result<Address, BlockchainError> {
    value.parse().map_err(|_| BlockchainError::InvalidAddress {
        address: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use alloy::primitives::address;

    use super::*;

    const ADDRESSES: &str = r#"{
        "development": {
            "chainId": 8996,
            "Router": "0x0000000000000000000000000000000000000001",
            "ERC721Factory": "0x0000000000000000000000000000000000000002",
            "Ocean": "0x0000000000000000000000000000000000000003",
            "ERC20Template": {"1": "0x0000000000000000000000000000000000000004"},
            "startBlock": 0
        },
        "mumbai": {
            "chainId": 80001,
            "Ocean": "not-an-address"
        }
    }"#;

    #[test]
    fn resolves_contract_addresses() {
        let book = AddressBook::from_json(ADDRESSES).unwrap();
        let development = book.network("development").unwrap();

        assert_eq!(development.chain_id(), Some(8996));
        assert_eq!(
            development.address(ContractName::FactoryRouter).unwrap(),
            address!("0x0000000000000000000000000000000000000001")
        );
        assert_eq!(
            development.template(ContractName::ERC20Template, 1).unwrap(),
            address!("0x0000000000000000000000000000000000000004")
        );
    }

    #[test]
    fn reports_missing_network_and_contract() {
        let book = AddressBook::from_json(ADDRESSES).unwrap();
        assert!(matches!(
            book.network("mainnet"),
            Err(BlockchainError::AddressBook { .. })
        ));

        let development = book.network("development").unwrap();
        assert!(matches!(
            development.address(ContractName::Dispenser),
            Err(BlockchainError::UnknownContract { .. })
        ));
        assert!(matches!(
            book.network("mumbai").unwrap().address(ContractName::Ocean),
            Err(BlockchainError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ADDRESSES.as_bytes()).unwrap();

        let book = AddressBook::load(file.path()).unwrap();
        let mut networks: Vec<_> = book.networks().collect();
        networks.sort_unstable();
        assert_eq!(networks, vec!["development", "mumbai"]);
    }
}
