use alloy::{
    primitives::{Address, B256, U256},
    providers::{DynProvider, Provider},
    rpc::types::{Filter, Log, TransactionReceipt},
    sol_types::SolEvent,
};

use super::{ContractBinding, read};
use crate::{
    ContractName, Wallet,
    bindings::FactoryRouter::{self as FactoryRouterContract, NewPool, Operations},
    error::BlockchainError,
};

/// Kind of step executed by `buyDTBatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OperationType {
    SwapExactIn = 0,
    SwapExactOut = 1,
    FixedRate = 2,
    Dispenser = 3,
}

/// One step of a batched datatoken purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Fixed-rate exchange id; zero for pool and dispenser operations.
    pub exchange_id: B256,
    /// Pool, fixed-rate exchange or dispenser contract.
    pub source: Address,
    pub operation: OperationType,
    pub token_in: Address,
    pub amount_in: U256,
    pub token_out: Address,
    pub amount_out: U256,
    pub max_price: U256,
    pub swap_market_fee: U256,
    pub market_fee_address: Address,
}

impl From<Operation> for Operations {
    fn from(operation: Operation) -> Self {
        Operations {
            exchangeIds: operation.exchange_id,
            source: operation.source,
            operation: operation.operation as u8,
            tokenIn: operation.token_in,
            amountsIn: operation.amount_in,
            tokenOut: operation.token_out,
            amountsOut: operation.amount_out,
            maxPrice: operation.max_price,
            swapMarketFee: operation.swap_market_fee,
            marketFeeAddress: operation.market_fee_address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoolEvent {
    pub pool_address: Address,
    pub is_ocean: bool,
    pub block_number: Option<u64>,
    pub transaction_hash: Option<B256>,
}

/// Proxy for the Ocean factory router (pool templates, fees, batch buys).
#[derive(Debug, Clone)]
pub struct FactoryRouter {
    binding: ContractBinding,
    provider: DynProvider,
}

impl FactoryRouter {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            binding: ContractBinding::new(ContractName::FactoryRouter, address),
            provider,
        }
    }

    pub fn binding(&self) -> &ContractBinding {
        &self.binding
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    fn contract(&self) -> FactoryRouterContract::FactoryRouterInstance<DynProvider> {
        FactoryRouterContract::new(self.address(), self.provider.clone())
    }

    pub async fn router_owner(&self) -> Result<Address, BlockchainError> {
        read(&self.binding, "routerOwner", self.contract().routerOwner()).await
    }

    pub async fn is_pool_template(&self, address: Address) -> Result<bool, BlockchainError> {
        read(&self.binding, "isPoolTemplate", self.contract().isPoolTemplate(address)).await
    }

    pub async fn is_fixed_rate_contract(&self, address: Address) -> Result<bool, BlockchainError> {
        read(
            &self.binding,
            "isFixedRateContract",
            self.contract().isFixedRateContract(address),
        )
        .await
    }

    /// Address of the ERC721 factory this router serves.
    pub async fn factory(&self) -> Result<Address, BlockchainError> {
        read(&self.binding, "factory", self.contract().factory()).await
    }

    pub async fn is_ss_contract(&self, address: Address) -> Result<bool, BlockchainError> {
        read(&self.binding, "isSSContract", self.contract().isSSContract(address)).await
    }

    /// Protocol fee charged on swaps against `base_token`.
    pub async fn get_opf_fee(&self, base_token: Address) -> Result<U256, BlockchainError> {
        read(&self.binding, "getOPFFee", self.contract().getOPFFee(base_token)).await
    }

    pub async fn swap_ocean_fee(&self) -> Result<U256, BlockchainError> {
        read(&self.binding, "swapOceanFee", self.contract().swapOceanFee()).await
    }

    pub async fn is_ocean_token(&self, address: Address) -> Result<bool, BlockchainError> {
        read(&self.binding, "isOceanToken", self.contract().isOceanToken(address)).await
    }

    /// Executes the operations in order within one transaction.
    pub async fn buy_dt_batch(
        &self,
        operations: Vec<Operation>,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let operations: Vec<Operations> = operations.into_iter().map(Operations::from).collect();
        let contract = FactoryRouterContract::new(self.address(), wallet.provider());
        wallet
            .transact(&self.binding, "buyDTBatch", contract.buyDTBatch(operations))
            .await
    }

    /// `NewPool` events emitted by the router in the given block range.
    pub async fn new_pool_events(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<NewPoolEvent>, BlockchainError> {
        let filter = Filter::new()
            .address(self.address())
            .event_signature(NewPool::SIGNATURE_HASH)
            .from_block(from_block)
            .to_block(to_block);

        let logs = self
            .provider
            .get_logs(&filter)
            .await
            .map_err(BlockchainError::get_logs)?;

        Ok(logs
            .iter()
            .filter_map(decode_new_pool)
            .collect())
    }

    /// `NewPool` events emitted by the router within a mined transaction.
    pub fn new_pool_events_in(&self, receipt: &TransactionReceipt) -> Vec<NewPoolEvent> {
        receipt
            .inner
            .logs()
            .iter()
            .filter(|log| log.address() == self.address())
            .filter_map(decode_new_pool)
            .collect()
    }
}

fn decode_new_pool(log: &Log) -> Option<NewPoolEvent> {
    let decoded = log.log_decode::<NewPool>().ok()?;
    Some(NewPoolEvent {
        pool_address: decoded.inner.data.poolAddress,
        is_ocean: decoded.inner.data.isOcean,
        block_number: log.block_number,
        transaction_hash: log.transaction_hash,
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

    const ROUTER: Address = address!("0x0000000000000000000000000000000000000a01");
    const OCEAN: Address = address!("0x0000000000000000000000000000000000000c0e");

    #[tokio::test]
    async fn reads_fees_without_a_wallet() {
        let (provider, asserter) = mocked_provider();
        let router = FactoryRouter::new(ROUTER, provider);

        asserter.push_success(&Bytes::from(U256::ZERO.abi_encode()));
        asserter.push_success(&Bytes::from(U256::from(1_000_000_000_000_000u64).abi_encode()));

        assert_eq!(router.get_opf_fee(OCEAN).await.unwrap(), U256::ZERO);
        assert_eq!(
            router.swap_ocean_fee().await.unwrap(),
            U256::from(1_000_000_000_000_000u64)
        );
    }

    #[tokio::test]
    async fn reads_owner_and_token_checks() {
        let (provider, asserter) = mocked_provider();
        let router = FactoryRouter::new(ROUTER, provider);
        let owner = address!("0x00000000000000000000000000000000000000aa");

        asserter.push_success(&Bytes::from(owner.abi_encode()));
        asserter.push_success(&Bytes::from(true.abi_encode()));
        asserter.push_success(&Bytes::from(false.abi_encode()));

        assert_eq!(router.router_owner().await.unwrap(), owner);
        assert!(router.is_ocean_token(OCEAN).await.unwrap());
        assert!(!router.is_pool_template(OCEAN).await.unwrap());
    }

    #[tokio::test]
    async fn surfaces_node_errors_as_call_failures() {
        let (provider, asserter) = mocked_provider();
        let router = FactoryRouter::new(ROUTER, provider);

        asserter.push_failure_msg("connection reset");

        let err = router.factory().await.unwrap_err();
        match err {
            BlockchainError::CallFailed {
                contract, function, ..
            } => {
                assert_eq!(contract, "FactoryRouter");
                assert_eq!(function, "factory");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn converts_operation_to_call_struct() {
        let operation = Operation {
            exchange_id: B256::ZERO,
            source: address!("0x0000000000000000000000000000000000000d15"),
            operation: OperationType::Dispenser,
            token_in: OCEAN,
            amount_in: U256::from(1),
            token_out: address!("0x0000000000000000000000000000000000000d7a"),
            amount_out: U256::from(2),
            max_price: U256::from(3),
            swap_market_fee: U256::ZERO,
            market_fee_address: Address::ZERO,
        };

        let encoded: Operations = operation.into();
        assert_eq!(encoded.operation, 3);
        assert_eq!(encoded.tokenIn, OCEAN);
        assert_eq!(encoded.amountsOut, U256::from(2));
    }
}
