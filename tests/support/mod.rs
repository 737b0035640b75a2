#![allow(clippy::unwrap_used, dead_code)]

//! Shared setup for tests that run against a local Ocean network.
//!
//! These tests need the barge stack (ganache with the Ocean contracts, a data
//! service provider and Aquarius) and the accounts below in the environment
//! or a `.env` file. Start it with `./start_ocean.sh` from the barge repo.

use ocean_contracts::{Address, CreateDatatokenRequest, DeployNftRequest, Wallet, to_wei};
use ocean_domain::AssetMetadata;
use ocean_sdk::{
    Ocean,
    config::{self, Config},
};
use ocean_services::FileObject;

pub const NFT_NAME: &str = "NFT";
pub const NFT_SYMBOL: &str = "NFTSYMBOL";
pub const NFT_TOKEN_URI: &str = "https://oceanprotocol.com/nft/";
pub const DATATOKEN_NAME: &str = "ERC20DT1";
pub const DATATOKEN_SYMBOL: &str = "ERC20DT1Symbol";
const SAMPLE_FILE_URL: &str = "https://raw.githubusercontent.com/trentmc/branin/main/branin.arff";

/// Private keys of the funded development accounts.
pub struct TestCredentials {
    pub publishers: [String; 3],
    pub factory_deployer: String,
}

impl TestCredentials {
    /// Reads `TEST_PRIVATE_KEY1..3` and `FACTORY_DEPLOYER_PRIVATE_KEY`.
    /// Returns `None` (and the test should skip) when any is missing.
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();

        let read = |name: &str| match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
            _ => {
                eprintln!("Skipping Ocean network test ({name} is not set)");
                None
            }
        };

        Some(Self {
            publishers: [
                read("TEST_PRIVATE_KEY1")?,
                read("TEST_PRIVATE_KEY2")?,
                read("TEST_PRIVATE_KEY3")?,
            ],
            factory_deployer: read("FACTORY_DEPLOYER_PRIVATE_KEY")?,
        })
    }
}

/// Development configuration, or `None` when it can't be loaded.
pub fn development_config() -> Option<Config> {
    match config::load_from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Skipping Ocean network test - configuration unavailable: {e}");
            None
        }
    }
}

/// Connected SDK, or `None` when the local network is not running.
pub async fn connect(config: &Config) -> Option<Ocean> {
    match Ocean::connect(config).await {
        Ok(ocean) => Some(ocean),
        Err(e) => {
            eprintln!("Skipping Ocean network test - network not available: {e}");
            None
        }
    }
}

/// Deploys a data NFT and one datatoken owned by `wallet`.
pub async fn deploy_erc721_erc20(ocean: &Ocean, wallet: &Wallet) -> (Address, Address) {
    let nft_address = ocean
        .erc721_factory()
        .unwrap()
        .deploy_erc721_contract(
            DeployNftRequest::new(NFT_NAME, NFT_SYMBOL).with_token_uri(NFT_TOKEN_URI),
            wallet,
        )
        .await
        .unwrap();

    let datatoken_address = ocean
        .chain()
        .data_nft(nft_address)
        .create_erc20(
            CreateDatatokenRequest::new(DATATOKEN_NAME, DATATOKEN_SYMBOL, wallet.address())
                .with_cap(to_wei("0.5").unwrap()),
            wallet,
        )
        .await
        .unwrap();

    (nft_address, datatoken_address)
}

/// Sample dataset metadata and its file list encrypted by the provider.
pub async fn create_basics(ocean: &Ocean) -> (AssetMetadata, String) {
    let metadata = AssetMetadata {
        created: "2020-11-15T12:27:48Z".to_string(),
        updated: "2021-05-17T21:58:02Z".to_string(),
        description: "Sample description".to_string(),
        name: "Sample asset".to_string(),
        asset_type: "dataset".to_string(),
        author: "OPF".to_string(),
        license: "https://market.oceanprotocol.com/terms".to_string(),
        tags: Vec::new(),
        links: Vec::new(),
        content_language: None,
        algorithm: None,
        additional_information: None,
    };

    let encrypted_files = ocean
        .data_provider()
        .encrypt_files(&[FileObject::url(SAMPLE_FILE_URL)], ocean.chain().chain_id())
        .await
        .unwrap();

    (metadata, encrypted_files)
}
