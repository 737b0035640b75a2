use alloy::{
    primitives::{Address, B256, Bytes, U256},
    providers::DynProvider,
    rpc::types::TransactionReceipt,
};
use ocean_domain::MetadataFlags;

use super::{ContractBinding, missing_event, read, receipt_event};
use crate::{
    ContractName, Wallet,
    bindings::{
        ERC721Factory::TokenCreated,
        ERC721Template::{self as ERC721TemplateContract, metaDataProof},
    },
    error::BlockchainError,
};

/// Lifecycle state stored next to an asset's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MetadataState {
    Active = 0,
    EndOfLife = 1,
    Deprecated = 2,
    Revoked = 3,
    OrderingDisabled = 4,
    Unlisted = 5,
}

/// Arguments of `createERC20`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatatokenRequest {
    /// Index of the ERC20 template registered in the factory (starts at 1).
    pub template_index: u64,
    pub name: String,
    pub symbol: String,
    pub minter: Address,
    pub fee_manager: Address,
    pub publish_market_order_fee_address: Address,
    pub publish_market_order_fee_token: Address,
    pub cap: U256,
    pub publish_market_order_fee_amount: U256,
    pub bytess: Vec<Bytes>,
}

impl CreateDatatokenRequest {
    /// Uncapped datatoken where `minter` also manages fees.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, minter: Address) -> Self {
        Self {
            template_index: 1,
            name: name.into(),
            symbol: symbol.into(),
            minter,
            fee_manager: minter,
            publish_market_order_fee_address: Address::ZERO,
            publish_market_order_fee_token: Address::ZERO,
            cap: U256::MAX,
            publish_market_order_fee_amount: U256::ZERO,
            bytess: Vec::new(),
        }
    }

    pub fn with_cap(mut self, cap: U256) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_publish_market_fee(
        mut self,
        fee_address: Address,
        fee_token: Address,
        amount: U256,
    ) -> Self {
        self.publish_market_order_fee_address = fee_address;
        self.publish_market_order_fee_token = fee_token;
        self.publish_market_order_fee_amount = amount;
        self
    }
}

/// Arguments of `setMetaData`. Validator proofs are not supported and are
/// always sent empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMetadataRequest {
    pub state: MetadataState,
    pub decryptor_url: String,
    pub decryptor_address: String,
    pub flags: MetadataFlags,
    pub data: Bytes,
    pub data_hash: B256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftMetadata {
    pub decryptor_url: String,
    pub decryptor_address: String,
    pub state: u8,
    pub has_metadata: bool,
}

/// Proxy for a deployed data NFT (ERC721 template).
#[derive(Debug, Clone)]
pub struct DataNft {
    binding: ContractBinding,
    provider: DynProvider,
}

impl DataNft {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            binding: ContractBinding::new(ContractName::ERC721Template, address),
            provider,
        }
    }

    pub fn binding(&self) -> &ContractBinding {
        &self.binding
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    fn contract(&self) -> ERC721TemplateContract::ERC721TemplateInstance<DynProvider> {
        ERC721TemplateContract::new(self.address(), self.provider.clone())
    }

    pub async fn name(&self) -> Result<String, BlockchainError> {
        read(&self.binding, "name", self.contract().name()).await
    }

    pub async fn symbol(&self) -> Result<String, BlockchainError> {
        read(&self.binding, "symbol", self.contract().symbol()).await
    }

    pub async fn owner_of(&self, token_id: U256) -> Result<Address, BlockchainError> {
        read(&self.binding, "ownerOf", self.contract().ownerOf(token_id)).await
    }

    pub async fn token_uri(&self, token_id: U256) -> Result<String, BlockchainError> {
        read(&self.binding, "tokenURI", self.contract().tokenURI(token_id)).await
    }

    /// Datatokens deployed from this NFT.
    pub async fn get_tokens_list(&self) -> Result<Vec<Address>, BlockchainError> {
        read(&self.binding, "getTokensList", self.contract().getTokensList()).await
    }

    pub async fn get_metadata(&self) -> Result<NftMetadata, BlockchainError> {
        let metadata = read(&self.binding, "getMetaData", self.contract().getMetaData()).await?;
        Ok(NftMetadata {
            decryptor_url: metadata.decryptorUrl,
            decryptor_address: metadata.decryptorAddress,
            state: metadata.state,
            has_metadata: metadata.hasMetadata,
        })
    }

    /// Deploys a datatoken from this NFT and returns its address, read from
    /// the factory's `TokenCreated` event when present.
    pub async fn create_erc20(
        &self,
        request: CreateDatatokenRequest,
        wallet: &Wallet,
    ) -> Result<Address, BlockchainError> {
        let contract = ERC721TemplateContract::new(self.address(), wallet.provider());
        let call = contract.createERC20(
            U256::from(request.template_index),
            vec![request.name, request.symbol],
            vec![
                request.minter,
                request.fee_manager,
                request.publish_market_order_fee_address,
                request.publish_market_order_fee_token,
            ],
            vec![request.cap, request.publish_market_order_fee_amount],
            request.bytess,
        );
        let receipt = wallet.transact(&self.binding, "createERC20", call).await?;

        let datatoken = match receipt_event::<TokenCreated>(&receipt, None) {
            Some(created) => created.newTokenAddress,
            // The newest datatoken is last in the NFT's own list.
            None => self
                .get_tokens_list()
                .await?
                .last()
                .copied()
                .ok_or_else(|| missing_event("TokenCreated", &receipt))?,
        };

        tracing::debug!(nft = %self.address(), datatoken = %datatoken, "Datatoken deployed");
        Ok(datatoken)
    }

    pub async fn set_metadata(
        &self,
        request: SetMetadataRequest,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let contract = ERC721TemplateContract::new(self.address(), wallet.provider());
        let call = contract.setMetaData(
            request.state as u8,
            request.decryptor_url,
            request.decryptor_address,
            Bytes::from(request.flags.to_bytes()),
            request.data,
            request.data_hash,
            Vec::<metaDataProof>::new(),
        );
        wallet.transact(&self.binding, "setMetaData", call).await
    }
}
