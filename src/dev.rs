//! Funding helpers for local development networks.

use alloy::primitives::Address;
use ocean_contracts::{BlockchainError, ChainClient, NetworkAddresses, Wallet, to_wei};

/// OCEAN minted to the deployer on every call.
const DEPLOYER_OCEAN: &str = "20000";
/// Recipients below this OCEAN balance get topped up by the same amount.
const RECIPIENT_OCEAN: &str = "2000";
/// Recipients below this native balance receive [`NATIVE_TOP_UP`].
const MIN_NATIVE: &str = "2";
const NATIVE_TOP_UP: &str = "4";

/// Mints the development OCEAN token to `deployer` and funds `recipients`
/// with OCEAN and native currency.
///
/// Only works where `deployer` is an OCEAN minter, which on the barge
/// development network is the factory deployer account.
pub async fn mint_fake_ocean(
    chain: &ChainClient,
    addresses: &NetworkAddresses,
    deployer: &Wallet,
    recipients: &[Address],
) -> Result<(), BlockchainError> {
    let ocean = chain.ocean_token(addresses)?;
    let ocean_top_up = to_wei(RECIPIENT_OCEAN)?;
    let min_native = to_wei(MIN_NATIVE)?;
    let native_top_up = to_wei(NATIVE_TOP_UP)?;

    ocean
        .mint(deployer.address(), to_wei(DEPLOYER_OCEAN)?, deployer)
        .await?;

    for recipient in recipients {
        if ocean.balance_of(*recipient).await? < ocean_top_up {
            ocean.mint(*recipient, ocean_top_up, deployer).await?;
        }

        if chain.get_balance(*recipient).await? < min_native {
            deployer.send_native(*recipient, native_top_up).await?;
        }

        tracing::debug!(recipient = %recipient, "Funded development account");
    }

    tracing::info!(
        deployer = %deployer.address(),
        recipients = recipients.len(),
        "Minted development OCEAN"
    );
    Ok(())
}

