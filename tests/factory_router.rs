#![allow(clippy::unwrap_used)]

//! Read-only router calls against a local Ocean network.
//!
//! Run with `cargo test --test factory_router -- --ignored`.

mod support;

use ocean_contracts::{Address, BlockchainError, ContractName};

#[tokio::test]
#[ignore = "requires a local Ocean network"]
async fn router_reads_need_no_wallet() {
    let Some(config) = support::development_config() else {
        return;
    };
    let Some(ocean) = support::connect(&config).await else {
        return;
    };

    let router = ocean.factory_router().unwrap();
    let ocean_token = ocean.addresses().address(ContractName::Ocean).unwrap();
    let erc721_factory = ocean.addresses().address(ContractName::ERC721Factory).unwrap();

    assert_eq!(router.factory().await.unwrap(), erc721_factory);
    assert!(router.is_ocean_token(ocean_token).await.unwrap());
    assert!(!router.is_ocean_token(Address::ZERO).await.unwrap());
    assert_ne!(router.router_owner().await.unwrap(), Address::ZERO);

    let ocean_fee = router.get_opf_fee(ocean_token).await.unwrap();
    let other_fee = router.get_opf_fee(Address::ZERO).await.unwrap();
    assert!(ocean_fee <= other_fee);
    router.swap_ocean_fee().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Ocean network"]
async fn wallet_needs_a_valid_key() {
    let Some(config) = support::development_config() else {
        return;
    };
    let Some(ocean) = support::connect(&config).await else {
        return;
    };

    let err = ocean.wallet("0x1234").unwrap_err();
    assert!(matches!(err, BlockchainError::InvalidPrivateKey { .. }));
}
