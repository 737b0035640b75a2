//! Asset publishing: data NFT + datatokens + DDO written on-chain.

mod compression;
mod error;
mod request;

use std::{sync::Arc, time::Instant};

use alloy::{
    hex,
    primitives::{Address, B256, Bytes, U256},
};
use ocean_contracts::{
    ChainClient, DataNft, MetadataState, NetworkAddresses, SetMetadataRequest, Wallet,
};
use ocean_domain::{DatatokenInfo, Ddo, MetadataFlags, NftInfo, Service, derive_did};
use ocean_observability::record_publish;
use ocean_services::{Encryptor, MetadataCache, ServicesConfig};
use sha2::{Digest, Sha256};

pub use error::PublishError;
pub use request::{CreateAssetRequest, DatatokenSource, NftSource};

/// The NFT minted to the publisher when a data NFT is deployed.
const OWNER_TOKEN_ID: u64 = 1;

/// Publishes assets on one network.
pub struct Assets {
    chain: Arc<ChainClient>,
    addresses: NetworkAddresses,
    encryptor: Arc<dyn Encryptor>,
    metadata_cache: Option<Arc<dyn MetadataCache>>,
    services: ServicesConfig,
}

impl Assets {
    pub fn new(
        chain: Arc<ChainClient>,
        addresses: NetworkAddresses,
        encryptor: Arc<dyn Encryptor>,
        metadata_cache: Option<Arc<dyn MetadataCache>>,
        services: ServicesConfig,
    ) -> Self {
        Self {
            chain,
            addresses,
            encryptor,
            metadata_cache,
            services,
        }
    }

    /// Publishes an asset and returns its DDO.
    ///
    /// When a metadata cache is configured the DDO is the one it indexed from
    /// chain; otherwise it is assembled locally with the `nft` and
    /// `datatokens` sections read back from the contracts.
    pub async fn create(
        &self,
        request: CreateAssetRequest,
        wallet: &Wallet,
    ) -> Result<Ddo, PublishError> {
        let started = Instant::now();
        let (compress, encrypt) = (request.compress, request.encrypt);

        let result = self.publish(request, wallet).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        record_publish(status, compress, encrypt, started.elapsed());
        if let Err(error) = &result {
            tracing::error!(publisher = %wallet.address(), error = %error, "Publish failed");
        }
        result
    }

    async fn publish(
        &self,
        request: CreateAssetRequest,
        wallet: &Wallet,
    ) -> Result<Ddo, PublishError> {
        request.metadata.validate()?;
        if request.datatokens.is_empty() {
            return Err(PublishError::NoDatatokens);
        }

        let chain_id = self.chain.chain_id();

        let nft_address = match request.nft {
            NftSource::Existing(address) => address,
            NftSource::Deploy(deploy) => {
                self.chain
                    .erc721_factory(&self.addresses)?
                    .deploy_erc721_contract(deploy, wallet)
                    .await?
            }
        };
        let nft = self.chain.data_nft(nft_address);
        let did = derive_did(nft_address, chain_id);

        let datatokens = match request.datatokens {
            DatatokenSource::Existing(addresses) => addresses,
            DatatokenSource::Deploy(requests) => {
                let mut addresses = Vec::with_capacity(requests.len());
                for create in requests {
                    addresses.push(nft.create_erc20(create, wallet).await?);
                }
                addresses
            }
        };

        let services = access_services(
            &datatokens,
            &request.encrypted_files,
            self.encryptor.url(),
            request.service_timeout,
        );
        let ddo = Ddo::new(
            did,
            chain_id,
            nft_address,
            request.metadata,
            services,
            request.credentials,
        );

        let metadata = self
            .metadata_request(&ddo, request.compress, request.encrypt)
            .await?;
        let flags = metadata.flags;
        nft.set_metadata(metadata, wallet).await?;

        tracing::info!(
            did = %ddo.id,
            nft = %nft_address,
            datatokens = datatokens.len(),
            compressed = flags.is_compressed(),
            encrypted = flags.is_encrypted(),
            "Asset published"
        );

        match &self.metadata_cache {
            Some(cache) => Ok(cache
                .wait_for_ddo(
                    &ddo.id,
                    self.services.ddo_poll_interval,
                    self.services.ddo_wait_timeout,
                )
                .await?),
            None => self.attach_chain_sections(ddo, &nft, &datatokens).await,
        }
    }

    /// `setMetaData` arguments for `ddo`. The hash covers the plain document,
    /// before compression or encryption.
    async fn metadata_request(
        &self,
        ddo: &Ddo,
        compress: bool,
        encrypt: bool,
    ) -> Result<SetMetadataRequest, PublishError> {
        let document = ddo.to_document_bytes()?;
        let data_hash = B256::from_slice(&Sha256::digest(&document));
        let (flags, data) = encode_document(
            document,
            compress,
            encrypt,
            self.encryptor.as_ref(),
            ddo.chain_id,
        )
        .await?;

        let provider_address = self.encryptor.provider_address(ddo.chain_id).await?;
        Ok(SetMetadataRequest {
            state: MetadataState::Active,
            decryptor_url: self.encryptor.url().to_string(),
            decryptor_address: provider_address.to_checksum(None),
            flags,
            data,
            data_hash,
        })
    }

    async fn attach_chain_sections(
        &self,
        mut ddo: Ddo,
        nft: &DataNft,
        datatokens: &[Address],
    ) -> Result<Ddo, PublishError> {
        let token_id = U256::from(OWNER_TOKEN_ID);
        let metadata = nft.get_metadata().await?;

        ddo.nft = Some(NftInfo {
            address: nft.address(),
            name: nft.name().await?,
            symbol: nft.symbol().await?,
            owner: nft.owner_of(token_id).await?,
            state: metadata.state,
            token_uri: nft.token_uri(token_id).await?,
            created: Some(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()),
        });

        for (index, address) in datatokens.iter().enumerate() {
            let datatoken = self.chain.datatoken(*address);
            ddo.datatokens.push(DatatokenInfo {
                address: *address,
                name: datatoken.name().await?,
                symbol: datatoken.symbol().await?,
                service_id: index.to_string(),
            });
        }

        Ok(ddo)
    }
}

/// One access service per datatoken; service ids are the datatoken indices.
fn access_services(
    datatokens: &[Address],
    encrypted_files: &str,
    service_endpoint: &str,
    timeout: u64,
) -> Vec<Service> {
    datatokens
        .iter()
        .enumerate()
        .map(|(index, datatoken)| {
            let mut service = Service::access(
                index.to_string(),
                encrypted_files.to_string(),
                *datatoken,
                service_endpoint.to_string(),
            );
            service.timeout = timeout;
            service
        })
        .collect()
}

/// Applies compression, then encryption, to the serialized DDO.
async fn encode_document(
    document: Vec<u8>,
    compress: bool,
    encrypt: bool,
    encryptor: &dyn Encryptor,
    chain_id: u64,
) -> Result<(MetadataFlags, Bytes), PublishError> {
    let mut data = document;

    if compress {
        data = compression::xz_compress(&data).map_err(PublishError::Compression)?;
    }

    if encrypt {
        let encrypted = encryptor.encrypt(&data, chain_id).await?;
        data = hex::decode(encrypted.trim()).map_err(|e| {
            PublishError::InvalidEncryptedDocument {
                reason: e.to_string(),
            }
        })?;
    }

    Ok((MetadataFlags::new(compress, encrypt), Bytes::from(data)))
}
