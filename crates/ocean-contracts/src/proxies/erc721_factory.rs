use alloy::{
    primitives::{Address, U256},
    providers::DynProvider,
    rpc::types::TransactionReceipt,
};

use super::{ContractBinding, missing_event, read, receipt_event};
use crate::{
    ContractName, Wallet,
    bindings::{
        ERC721Factory::{self as ERC721FactoryContract, NFTCreated},
        ERC721Template::Transfer,
    },
    error::BlockchainError,
};

/// Arguments of `deployERC721Contract`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployNftRequest {
    pub name: String,
    pub symbol: String,
    /// Index of the ERC721 template registered in the factory (starts at 1).
    pub template_index: u64,
    pub additional_erc20_deployer: Address,
    pub additional_metadata_updater: Address,
    pub token_uri: String,
}

impl DeployNftRequest {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            template_index: 1,
            additional_erc20_deployer: Address::ZERO,
            additional_metadata_updater: Address::ZERO,
            token_uri: String::new(),
        }
    }

    pub fn with_token_uri(mut self, token_uri: impl Into<String>) -> Self {
        self.token_uri = token_uri.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ERC721Factory {
    binding: ContractBinding,
    provider: DynProvider,
}

impl ERC721Factory {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            binding: ContractBinding::new(ContractName::ERC721Factory, address),
            provider,
        }
    }

    pub fn binding(&self) -> &ContractBinding {
        &self.binding
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    fn contract(&self) -> ERC721FactoryContract::ERC721FactoryInstance<DynProvider> {
        ERC721FactoryContract::new(self.address(), self.provider.clone())
    }

    /// Deploys a data NFT and returns its address, read from `NFTCreated`.
    ///
    /// Factories whose `NFTCreated` layout differs are handled through the
    /// mint of token 1 that every new data NFT emits.
    pub async fn deploy_erc721_contract(
        &self,
        request: DeployNftRequest,
        wallet: &Wallet,
    ) -> Result<Address, BlockchainError> {
        let contract = ERC721FactoryContract::new(self.address(), wallet.provider());
        let call = contract.deployERC721Contract(
            request.name,
            request.symbol,
            U256::from(request.template_index),
            request.additional_erc20_deployer,
            request.additional_metadata_updater,
            request.token_uri,
        );
        let receipt = wallet
            .transact(&self.binding, "deployERC721Contract", call)
            .await?;

        if let Some(created) = receipt_event::<NFTCreated>(&receipt, Some(self.address())) {
            tracing::debug!(
                nft = %created.newTokenAddress,
                admin = %created.admin,
                "Data NFT deployed"
            );
            return Ok(created.newTokenAddress);
        }

        let nft = minted_nft(&receipt).ok_or_else(|| missing_event("NFTCreated", &receipt))?;
        tracing::debug!(nft = %nft, "Data NFT deployed");
        Ok(nft)
    }

    pub async fn get_current_nft_count(&self) -> Result<U256, BlockchainError> {
        read(
            &self.binding,
            "getCurrentNFTCount",
            self.contract().getCurrentNFTCount(),
        )
        .await
    }

    pub async fn get_current_token_count(&self) -> Result<U256, BlockchainError> {
        read(
            &self.binding,
            "getCurrentTokenCount",
            self.contract().getCurrentTokenCount(),
        )
        .await
    }
}

/// Emitter of the first ERC721 mint (`Transfer` from the zero address).
fn minted_nft(receipt: &TransactionReceipt) -> Option<Address> {
    receipt.inner.logs().iter().find_map(|log| {
        let transfer = log.log_decode::<Transfer>().ok()?;
        (transfer.inner.data.from == Address::ZERO).then(|| log.address())
    })
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Bytes, address},
        sol_types::SolValue,
    };

    use super::*;
    use crate::proxies::test_support::mocked_provider;

    #[test]
    fn deploy_request_defaults_to_first_template() {
        let request =
            DeployNftRequest::new("NFT", "NFTSYMBOL").with_token_uri("https://oceanprotocol.com/nft/");
        assert_eq!(request.template_index, 1);
        assert_eq!(request.additional_erc20_deployer, Address::ZERO);
        assert_eq!(request.token_uri, "https://oceanprotocol.com/nft/");
    }

    #[tokio::test]
    async fn reads_deployment_counters() {
        let (provider, asserter) = mocked_provider();
        let factory = ERC721Factory::new(
            address!("0x0000000000000000000000000000000000000f01"),
            provider,
        );

        asserter.push_success(&Bytes::from(U256::from(7).abi_encode()));
        asserter.push_success(&Bytes::from(U256::from(11).abi_encode()));

        assert_eq!(factory.get_current_nft_count().await.unwrap(), U256::from(7));
        assert_eq!(
            factory.get_current_token_count().await.unwrap(),
            U256::from(11)
        );
    }
}
