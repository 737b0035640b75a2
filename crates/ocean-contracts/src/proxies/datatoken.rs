use alloy::{
    primitives::{Address, U256},
    providers::DynProvider,
    rpc::types::TransactionReceipt,
};

use super::{ContractBinding, read};
use crate::{
    ContractName, Wallet, bindings::ERC20Template as ERC20TemplateContract,
    error::BlockchainError,
};

/// Proxy for an ERC20 datatoken. Also used for the OCEAN token, which
/// exposes the same ERC20 surface.
#[derive(Debug, Clone)]
pub struct Datatoken {
    binding: ContractBinding,
    provider: DynProvider,
}

impl Datatoken {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self::with_binding(
            ContractBinding::new(ContractName::ERC20Template, address),
            provider,
        )
    }

    pub fn with_binding(binding: ContractBinding, provider: DynProvider) -> Self {
        Self { binding, provider }
    }

    pub fn binding(&self) -> &ContractBinding {
        &self.binding
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    fn contract(&self) -> ERC20TemplateContract::ERC20TemplateInstance<DynProvider> {
        ERC20TemplateContract::new(self.address(), self.provider.clone())
    }

    pub async fn name(&self) -> Result<String, BlockchainError> {
        read(&self.binding, "name", self.contract().name()).await
    }

    pub async fn symbol(&self) -> Result<String, BlockchainError> {
        read(&self.binding, "symbol", self.contract().symbol()).await
    }

    pub async fn decimals(&self) -> Result<u8, BlockchainError> {
        read(&self.binding, "decimals", self.contract().decimals()).await
    }

    pub async fn cap(&self) -> Result<U256, BlockchainError> {
        read(&self.binding, "cap", self.contract().cap()).await
    }

    pub async fn total_supply(&self) -> Result<U256, BlockchainError> {
        read(&self.binding, "totalSupply", self.contract().totalSupply()).await
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, BlockchainError> {
        read(&self.binding, "balanceOf", self.contract().balanceOf(account)).await
    }

    /// Data NFT this datatoken was deployed from.
    pub async fn get_erc721_address(&self) -> Result<Address, BlockchainError> {
        read(
            &self.binding,
            "getERC721Address",
            self.contract().getERC721Address(),
        )
        .await
    }

    pub async fn is_minter(&self, account: Address) -> Result<bool, BlockchainError> {
        read(&self.binding, "isMinter", self.contract().isMinter(account)).await
    }

    pub async fn mint(
        &self,
        to: Address,
        amount: U256,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let contract = ERC20TemplateContract::new(self.address(), wallet.provider());
        wallet
            .transact(&self.binding, "mint", contract.mint(to, amount))
            .await
    }

    pub async fn approve(
        &self,
        spender: Address,
        amount: U256,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let contract = ERC20TemplateContract::new(self.address(), wallet.provider());
        wallet
            .transact(&self.binding, "approve", contract.approve(spender, amount))
            .await
    }

    pub async fn transfer(
        &self,
        to: Address,
        amount: U256,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let contract = ERC20TemplateContract::new(self.address(), wallet.provider());
        wallet
            .transact(&self.binding, "transfer", contract.transfer(to, amount))
            .await
    }
}
