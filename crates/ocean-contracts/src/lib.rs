mod address_book;
mod bindings;
mod chain;
mod config;
mod config_error;
mod contract_name;
mod error;
mod error_decode;
mod provider;
mod proxies;
mod utils;
mod wallet;

pub use address_book::{AddressBook, NetworkAddresses};
pub use chain::ChainClient;
pub use config::{ConfirmationPolicy, NetworkConfig, NetworkConfigRaw};
pub use config_error::ConfigError;
pub use contract_name::ContractName;
pub use error::BlockchainError;
pub use error_decode::decode_revert_data;
pub use provider::connect_rpc_client;
pub use proxies::{
    ContractBinding, CreateDatatokenRequest, DataNft, Datatoken, DeployNftRequest, ERC721Factory,
    FactoryRouter, MetadataState, NewPoolEvent, NftMetadata, Operation, OperationType,
    SetMetadataRequest,
};
pub use utils::{from_wei, to_wei};
pub use wallet::Wallet;

pub use alloy::{
    primitives::{Address, B256, Bytes, U256},
    rpc::types::{Log, TransactionReceipt},
};
