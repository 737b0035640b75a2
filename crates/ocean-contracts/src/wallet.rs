use std::time::Instant;

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::{Ethereum, EthereumWallet, TransactionBuilder},
    primitives::{Address, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::{
        client::RpcClient,
        types::{TransactionReceipt, TransactionRequest},
    },
    signers::local::{LocalSignerError, PrivateKeySigner},
};
use ocean_observability::record_tx_stage;
use tokio::sync::Mutex;

use crate::{
    ConfirmationPolicy, error::BlockchainError, error_decode::describe_contract_error,
    proxies::ContractBinding,
};

const NATIVE: &str = "native";

pub(crate) fn signer_from_private_key(
    private_key: &str,
) -> Result<PrivateKeySigner, BlockchainError> {
    private_key
        .parse()
        .map_err(|e: LocalSignerError| BlockchainError::InvalidPrivateKey {
            key_length: private_key.len(),
            source: e,
        })
}

/// Signing identity used for state-changing calls.
///
/// A wallet owns a provider that signs with its key and serializes its own
/// submissions, so nonces are never handed out twice. It is not `Clone`;
/// share it behind an `Arc` if several tasks need it.
pub struct Wallet {
    address: Address,
    provider: DynProvider,
    policy: ConfirmationPolicy,
    tx_mutex: Mutex<()>,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Wallet {
    pub fn from_private_key(
        private_key: &str,
        client: RpcClient,
        policy: ConfirmationPolicy,
    ) -> Result<Self, BlockchainError> {
        let signer = signer_from_private_key(private_key)?;
        let address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(client)
            .erased();

        Ok(Self {
            address,
            provider,
            policy,
            tx_mutex: Mutex::new(()),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn policy(&self) -> ConfirmationPolicy {
        self.policy
    }

    /// Provider that signs with this wallet. Contract instances used for
    /// [`Wallet::transact`] must be built on it.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub async fn native_balance(&self) -> Result<U256, BlockchainError> {
        self.provider
            .get_balance(self.address)
            .await
            .map_err(BlockchainError::get_balance)
    }

    /// Sends a state-changing call and waits for its receipt according to the
    /// wallet's confirmation policy. A mined transaction with a failed status
    /// is returned as [`BlockchainError::Reverted`].
    pub async fn transact<P: Provider, D: CallDecoder>(
        &self,
        binding: &ContractBinding,
        function: &'static str,
        call: CallBuilder<P, D>,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let contract = binding.name().as_str();

        let guard = self.tx_mutex.lock().await;
        let started = Instant::now();
        let pending = match call.send().await {
            Ok(pending) => {
                record_tx_stage(contract, function, "send", "ok", started.elapsed());
                pending
            }
            Err(err) => {
                record_tx_stage(contract, function, "send", "error", started.elapsed());
                let reason = describe_contract_error(&err);
                tracing::error!(
                    contract,
                    function,
                    wallet = %self.address,
                    reason = %reason,
                    "Transaction submission failed"
                );
                return Err(BlockchainError::TransactionFailed {
                    contract: contract.to_string(),
                    function: function.to_string(),
                    reason,
                    source: err,
                });
            }
        };
        drop(guard);

        self.confirm(pending, contract, function).await
    }

    /// Transfers native currency (ETH on development networks).
    pub async fn send_native(
        &self,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let tx = TransactionRequest::default()
            .with_from(self.address)
            .with_to(to)
            .with_value(amount);

        let guard = self.tx_mutex.lock().await;
        let started = Instant::now();
        let pending = match self.provider.send_transaction(tx).await {
            Ok(pending) => {
                record_tx_stage(NATIVE, "transfer", "send", "ok", started.elapsed());
                pending
            }
            Err(err) => {
                record_tx_stage(NATIVE, "transfer", "send", "error", started.elapsed());
                tracing::error!(wallet = %self.address, %to, "Native transfer failed: {}", err);
                return Err(BlockchainError::SendFailed {
                    reason: err.to_string(),
                    source: err,
                });
            }
        };
        drop(guard);

        self.confirm(pending, NATIVE, "transfer").await
    }

    async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
        contract: &str,
        function: &str,
    ) -> Result<TransactionReceipt, BlockchainError> {
        let tx_hash = *pending.tx_hash();
        let started = Instant::now();
        let receipt = pending
            .with_required_confirmations(self.policy.block_confirmations.max(1))
            .with_timeout(self.policy.transaction_timeout)
            .get_receipt()
            .await
            .map_err(|err| {
                record_tx_stage(contract, function, "receipt", "error", started.elapsed());
                tracing::error!(%tx_hash, "Failed to retrieve transaction receipt: {:?}", err);
                BlockchainError::ReceiptFailed {
                    reason: err.to_string(),
                }
            })?;

        if !receipt.status() {
            record_tx_stage(contract, function, "receipt", "reverted", started.elapsed());
            return Err(BlockchainError::Reverted {
                contract: contract.to_string(),
                function: function.to_string(),
                tx_hash,
            });
        }

        record_tx_stage(contract, function, "receipt", "ok", started.elapsed());
        tracing::debug!(
            contract,
            function,
            %tx_hash,
            block_number = ?receipt.block_number,
            "Transaction mined"
        );
        Ok(receipt)
    }
}
