//! Typed proxies over the deployed Ocean contracts.
//!
//! Read-only methods go through the proxy's own provider and need no wallet.
//! State-changing methods take the [`Wallet`](crate::Wallet) that signs them
//! and return the mined receipt, or a decoded value read from its logs.

mod data_nft;
mod datatoken;
mod erc721_factory;
mod factory_router;

use std::time::Instant;

use alloy::{
    contract::{CallBuilder, CallDecoder},
    primitives::Address,
    providers::Provider,
    rpc::types::TransactionReceipt,
    sol_types::SolEvent,
};
pub use data_nft::{CreateDatatokenRequest, DataNft, MetadataState, NftMetadata, SetMetadataRequest};
pub use datatoken::Datatoken;
pub use erc721_factory::{DeployNftRequest, ERC721Factory};
pub use factory_router::{FactoryRouter, NewPoolEvent, Operation, OperationType};
use ocean_observability::record_contract_call;

use crate::{ContractName, error::BlockchainError, error_decode::describe_contract_error};

/// A contract name paired with its deployed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractBinding {
    name: ContractName,
    address: Address,
}

impl ContractBinding {
    pub fn new(name: ContractName, address: Address) -> Self {
        Self { name, address }
    }

    pub fn name(&self) -> ContractName {
        self.name
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

/// Executes an `eth_call` and decodes its return data.
pub(crate) async fn read<P: Provider, D: CallDecoder>(
    binding: &ContractBinding,
    function: &'static str,
    call: CallBuilder<P, D>,
) -> Result<D::CallOutput, BlockchainError> {
    let contract = binding.name().as_str();
    let started = Instant::now();

    match call.call().await {
        Ok(output) => {
            record_contract_call(contract, function, "ok", started.elapsed());
            Ok(output)
        }
        Err(err) => {
            record_contract_call(contract, function, "error", started.elapsed());
            let reason = describe_contract_error(&err);
            tracing::debug!(contract, function, reason = %reason, "Contract call failed");
            Err(BlockchainError::CallFailed {
                contract: contract.to_string(),
                function: function.to_string(),
                reason,
                source: err,
            })
        }
    }
}

/// First `E` event in the receipt, optionally restricted to one emitter.
pub(crate) fn receipt_event<E: SolEvent>(
    receipt: &TransactionReceipt,
    emitter: Option<Address>,
) -> Option<E> {
    receipt
        .inner
        .logs()
        .iter()
        .filter(|log| emitter.is_none_or(|emitter| log.address() == emitter))
        .find_map(|log| log.log_decode::<E>().ok())
        .map(|decoded| decoded.inner.data)
}

pub(crate) fn missing_event(event: &'static str, receipt: &TransactionReceipt) -> BlockchainError {
    BlockchainError::MissingEvent {
        event,
        tx_hash: receipt.transaction_hash,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use alloy::{
        providers::{DynProvider, Provider, ProviderBuilder},
        transports::mock::Asserter,
    };

    /// Provider answering from a queue of canned JSON-RPC responses.
    pub(crate) fn mocked_provider() -> (DynProvider, Asserter) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::default()
            .connect_mocked_client(asserter.clone())
            .erased();
        (provider, asserter)
    }
}
