use std::time::Instant;

use alloy::{
    primitives::{Address, U256},
    providers::{DynProvider, Provider},
    rpc::{
        client::RpcClient,
        types::{Filter, Log},
    },
};
use ocean_domain::NetworkId;
use ocean_observability::record_rpc_call;

use crate::{
    ContractName, NetworkAddresses, NetworkConfig, Wallet,
    error::BlockchainError,
    provider::{connect_rpc_client, read_only_provider, verify_chain_id},
    proxies::{ContractBinding, DataNft, Datatoken, ERC721Factory, FactoryRouter},
};

/// Connection to one EVM network.
///
/// Holds the shared RPC client and a read-only provider. Wallets created from
/// a client reuse its transport; proxies created from it read through the
/// read-only provider.
pub struct ChainClient {
    config: NetworkConfig,
    chain_id: u64,
    rpc_client: RpcClient,
    provider: DynProvider,
}

impl ChainClient {
    pub async fn connect(config: NetworkConfig) -> Result<Self, BlockchainError> {
        let chain_id = config_chain_id(&config)?;

        let rpc_client = connect_rpc_client(config.rpc_endpoints()).await?;
        let provider = read_only_provider(rpc_client.clone());
        verify_chain_id(&provider, chain_id, config.rpc_endpoints().len()).await?;

        tracing::info!(
            network = %config.network_id(),
            endpoints = config.rpc_endpoints().len(),
            "Connected to network"
        );

        Ok(Self {
            config,
            chain_id,
            rpc_client,
            provider,
        })
    }

    /// Client over an already-built transport. `provider` serves reads; the
    /// chain id is taken from the config and not checked against the node.
    pub fn with_transport(
        config: NetworkConfig,
        rpc_client: RpcClient,
        provider: DynProvider,
    ) -> Result<Self, BlockchainError> {
        let chain_id = config_chain_id(&config)?;
        Ok(Self {
            config,
            chain_id,
            rpc_client,
            provider,
        })
    }

    pub fn network_id(&self) -> &NetworkId {
        self.config.network_id()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Wallet signing with `private_key` over this network's transport, using
    /// the configured confirmation policy.
    pub fn wallet(&self, private_key: &str) -> Result<Wallet, BlockchainError> {
        Wallet::from_private_key(
            private_key,
            self.rpc_client.clone(),
            self.config.confirmation_policy(),
        )
    }

    pub async fn block_number(&self) -> Result<u64, BlockchainError> {
        let started = Instant::now();
        let result = self.provider.get_block_number().await;
        self.record("eth_blockNumber", result.is_ok(), started);
        result.map_err(BlockchainError::get_block_number)
    }

    pub async fn get_balance(&self, address: Address) -> Result<U256, BlockchainError> {
        let started = Instant::now();
        let result = self.provider.get_balance(address).await;
        self.record("eth_getBalance", result.is_ok(), started);
        result.map_err(BlockchainError::get_balance)
    }

    pub async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>, BlockchainError> {
        let started = Instant::now();
        let result = self.provider.get_logs(filter).await;
        self.record("eth_getLogs", result.is_ok(), started);
        result.map_err(BlockchainError::get_logs)
    }

    pub fn factory_router(
        &self,
        addresses: &NetworkAddresses,
    ) -> Result<FactoryRouter, BlockchainError> {
        let address = addresses.address(ContractName::FactoryRouter)?;
        Ok(FactoryRouter::new(address, self.provider.clone()))
    }

    pub fn erc721_factory(
        &self,
        addresses: &NetworkAddresses,
    ) -> Result<ERC721Factory, BlockchainError> {
        let address = addresses.address(ContractName::ERC721Factory)?;
        Ok(ERC721Factory::new(address, self.provider.clone()))
    }

    pub fn ocean_token(&self, addresses: &NetworkAddresses) -> Result<Datatoken, BlockchainError> {
        let address = addresses.address(ContractName::Ocean)?;
        Ok(Datatoken::with_binding(
            ContractBinding::new(ContractName::Ocean, address),
            self.provider.clone(),
        ))
    }

    pub fn data_nft(&self, address: Address) -> DataNft {
        DataNft::new(address, self.provider.clone())
    }

    pub fn datatoken(&self, address: Address) -> Datatoken {
        Datatoken::new(address, self.provider.clone())
    }

    fn record(&self, operation: &str, ok: bool, started: Instant) {
        let status = if ok { "ok" } else { "error" };
        record_rpc_call(
            self.network_id().as_str(),
            operation,
            status,
            started.elapsed(),
        );
    }
}

fn config_chain_id(config: &NetworkConfig) -> Result<u64, BlockchainError> {
    config.network_id().chain_id().ok_or_else(|| {
        BlockchainError::Custom(format!(
            "network id '{}' has no chain id",
            config.network_id()
        ))
    })
}
