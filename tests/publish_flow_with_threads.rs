#![allow(clippy::unwrap_used)]

//! Three publishers hammering `Assets::create` concurrently.
//!
//! Needs a local Ocean network; see `tests/support`. Run with
//! `cargo test --test publish_flow_with_threads -- --ignored`. The number of
//! publishes per worker defaults to 1000 and can be lowered with
//! `TEST_PUBLISH_ITERATIONS`.

mod support;

use std::sync::Arc;

use ocean_contracts::{Address, ContractName, CreateDatatokenRequest, U256, Wallet, to_wei};
use ocean_domain::{Credentials, Ddo};
use ocean_sdk::{Ocean, assets::CreateAssetRequest, dev::mint_fake_ocean};
use support::{
    DATATOKEN_NAME, DATATOKEN_SYMBOL, NFT_NAME, NFT_SYMBOL, TestCredentials, create_basics,
    deploy_erc721_erc20,
};

const DEFAULT_ITERATIONS: usize = 1000;

fn iterations() -> usize {
    std::env::var("TEST_PUBLISH_ITERATIONS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
}

fn assert_nft(ddo: &Ddo, nft_address: Address, wallet: &Wallet) {
    let nft = ddo.nft.as_ref().expect("DDO has an nft section");
    assert_eq!(nft.name, NFT_NAME);
    assert_eq!(nft.symbol, NFT_SYMBOL);
    assert_eq!(nft.address, nft_address);
    assert_eq!(nft.owner, wallet.address());
}

/// Deploys datatokens as part of `create`.
async fn publish_with_new_datatoken(ocean: Arc<Ocean>, wallet: Arc<Wallet>, iterations: usize) {
    let ocean_address = ocean.addresses().address(ContractName::Ocean).unwrap();

    for _ in 0..iterations {
        let (nft_address, _) = deploy_erc721_erc20(&ocean, &wallet).await;
        let (metadata, encrypted_files) = create_basics(&ocean).await;

        let datatoken = CreateDatatokenRequest::new("Datatoken 1", "DT1", wallet.address())
            .with_cap(to_wei("0.5").unwrap())
            .with_publish_market_fee(Address::ZERO, ocean_address, U256::ZERO);
        let request = CreateAssetRequest::new(metadata, encrypted_files)
            .with_nft(nft_address)
            .deploy_datatokens(vec![datatoken]);

        let ddo = ocean.assets().create(request, &wallet).await.unwrap();

        assert_nft(&ddo, nft_address, &wallet);
        assert_eq!(ddo.datatokens[0].name, "Datatoken 1");
        assert_eq!(ddo.datatokens[0].symbol, "DT1");
        assert_eq!(ddo.credentials, Credentials::default());
    }
}

/// Reuses the datatoken deployed alongside the NFT.
async fn publish_with_deployed_datatoken(
    ocean: Arc<Ocean>,
    wallet: Arc<Wallet>,
    iterations: usize,
    compress: bool,
) {
    for _ in 0..iterations {
        let (nft_address, datatoken_address) = deploy_erc721_erc20(&ocean, &wallet).await;
        let (metadata, encrypted_files) = create_basics(&ocean).await;

        let request = CreateAssetRequest::new(metadata, encrypted_files)
            .with_nft(nft_address)
            .with_datatokens(vec![datatoken_address])
            .encrypted(true)
            .compressed(compress);

        let ddo = ocean.assets().create(request, &wallet).await.unwrap();

        assert_nft(&ddo, nft_address, &wallet);
        assert_eq!(ddo.datatokens[0].name, DATATOKEN_NAME);
        assert_eq!(ddo.datatokens[0].symbol, DATATOKEN_SYMBOL);
        assert_eq!(ddo.datatokens[0].address, datatoken_address);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 3)]
#[ignore = "requires a local Ocean network"]
async fn publish_flow_with_threads() {
    let Some(credentials) = TestCredentials::from_env() else {
        return;
    };
    let Some(config) = support::development_config() else {
        return;
    };
    ocean_sdk::logger::initialize(&config.logger, &config.telemetry);
    let Some(ocean) = support::connect(&config).await else {
        return;
    };

    let wallets: Vec<Arc<Wallet>> = credentials
        .publishers
        .iter()
        .map(|key| Arc::new(ocean.wallet(key).unwrap()))
        .collect();
    let deployer = ocean.wallet(&credentials.factory_deployer).unwrap();

    let recipients: Vec<Address> = wallets.iter().map(|wallet| wallet.address()).collect();
    mint_fake_ocean(ocean.chain(), ocean.addresses(), &deployer, &recipients)
        .await
        .unwrap();
    for wallet in &wallets {
        assert!(wallet.native_balance().await.unwrap() > U256::ZERO, "need ETH");
    }

    let ocean = Arc::new(ocean);
    let iterations = iterations();
    let handles = vec![
        tokio::spawn(publish_with_new_datatoken(
            Arc::clone(&ocean),
            Arc::clone(&wallets[0]),
            iterations,
        )),
        tokio::spawn(publish_with_deployed_datatoken(
            Arc::clone(&ocean),
            Arc::clone(&wallets[1]),
            iterations,
            false,
        )),
        tokio::spawn(publish_with_deployed_datatoken(
            Arc::clone(&ocean),
            Arc::clone(&wallets[2]),
            iterations,
            true,
        )),
    ];

    for (index, handle) in handles.into_iter().enumerate() {
        handle.await.unwrap();
        eprintln!("publisher {} done", index + 1);
    }
}
