//! Rust SDK for the Ocean Protocol contracts.
//!
//! [`Ocean`] ties a network connection, the contract address book and the
//! off-chain services together. Contract proxies live in `ocean_contracts`,
//! DDO types in `ocean_domain` and the HTTP clients in `ocean_services`.

pub mod assets;
pub mod config;
pub mod dev;
mod error;
pub mod logger;

use std::sync::Arc;

pub use error::OceanError;
use ocean_contracts::{
    AddressBook, BlockchainError, ChainClient, Datatoken, ERC721Factory, FactoryRouter,
    NetworkAddresses, Wallet,
};
use ocean_services::{Aquarius, DataServiceProvider, Encryptor, MetadataCache};

use crate::{assets::Assets, config::Config};

/// Entry point: one network, its contracts and its services.
pub struct Ocean {
    chain: Arc<ChainClient>,
    addresses: NetworkAddresses,
    encryptor: Arc<dyn Encryptor>,
    assets: Assets,
}

impl Ocean {
    /// Connects to the configured network and loads its contract addresses.
    pub async fn connect(config: &Config) -> Result<Self, OceanError> {
        let chain = Arc::new(ChainClient::connect(config.network.clone()).await?);

        let address_book = AddressBook::load(config.network.address_file())?;
        let addresses = address_book
            .network(config.network.network_name())?
            .clone();
        if let Some(book_chain_id) = addresses.chain_id()
            && book_chain_id != chain.chain_id()
        {
            return Err(OceanError::AddressBookChainMismatch {
                network: addresses.network().to_string(),
                book_chain_id,
                chain_id: chain.chain_id(),
            });
        }

        let encryptor: Arc<dyn Encryptor> = Arc::new(DataServiceProvider::new(&config.services)?);
        let metadata_cache = Aquarius::from_config(&config.services)?
            .map(|aquarius| Arc::new(aquarius) as Arc<dyn MetadataCache>);
        if metadata_cache.is_none() {
            tracing::warn!("No metadata cache configured, DDOs will be assembled locally");
        }

        let assets = Assets::new(
            Arc::clone(&chain),
            addresses.clone(),
            Arc::clone(&encryptor),
            metadata_cache,
            config.services.clone(),
        );

        tracing::info!(
            environment = %config.environment,
            network = %chain.network_id(),
            provider = %encryptor.url(),
            "Ocean SDK ready"
        );

        Ok(Self {
            chain,
            addresses,
            encryptor,
            assets,
        })
    }

    pub fn chain(&self) -> &ChainClient {
        &self.chain
    }

    pub fn addresses(&self) -> &NetworkAddresses {
        &self.addresses
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn data_provider(&self) -> &dyn Encryptor {
        self.encryptor.as_ref()
    }

    pub fn factory_router(&self) -> Result<FactoryRouter, BlockchainError> {
        self.chain.factory_router(&self.addresses)
    }

    pub fn erc721_factory(&self) -> Result<ERC721Factory, BlockchainError> {
        self.chain.erc721_factory(&self.addresses)
    }

    pub fn ocean_token(&self) -> Result<Datatoken, BlockchainError> {
        self.chain.ocean_token(&self.addresses)
    }

    /// Wallet for `private_key` using the network's confirmation policy.
    pub fn wallet(&self, private_key: &str) -> Result<Wallet, BlockchainError> {
        self.chain.wallet(private_key)
    }
}
