//! DDO (decentralized data document) types.
//!
//! The on-chain document holds `@context`, `id`, `version`, `chainId`,
//! `nftAddress`, `metadata`, `services` and `credentials`. The metadata cache
//! adds the `nft`, `datatokens`, `event` and `stats` sections when it indexes
//! the asset, so those are optional here and never written on-chain.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DDO_CONTEXT: &str = "https://w3id.org/did/v1";
pub const DDO_VERSION: &str = "4.0.0";

const ASSET_TYPES: [&str; 2] = ["dataset", "algorithm"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DdoValidationError {
    #[error("Metadata field '{0}' is required")]
    MissingField(&'static str),
    #[error("Metadata type must be 'dataset' or 'algorithm', got '{0}'")]
    InvalidType(String),
    #[error("Algorithm metadata requires an 'algorithm' section with a container")]
    MissingAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ddo {
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    pub id: String,
    pub version: String,
    pub chain_id: u64,
    pub nft_address: Address,
    pub metadata: AssetMetadata,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft: Option<NftInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datatokens: Vec<DatatokenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
}

/// The subset of a DDO that is serialized and written on-chain.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OnChainDocument<'a> {
    #[serde(rename = "@context")]
    context: &'a [String],
    id: &'a str,
    version: &'a str,
    chain_id: u64,
    nft_address: &'a Address,
    metadata: &'a AssetMetadata,
    services: &'a [Service],
    credentials: &'a Credentials,
}

impl Ddo {
    pub fn new(
        did: String,
        chain_id: u64,
        nft_address: Address,
        metadata: AssetMetadata,
        services: Vec<Service>,
        credentials: Credentials,
    ) -> Self {
        Self {
            context: vec![DDO_CONTEXT.to_string()],
            id: did,
            version: DDO_VERSION.to_string(),
            chain_id,
            nft_address,
            metadata,
            services,
            credentials,
            nft: None,
            datatokens: Vec::new(),
            event: None,
            stats: None,
        }
    }

    /// Compact JSON of the on-chain part of the document.
    pub fn to_document_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&OnChainDocument {
            context: &self.context,
            id: &self.id,
            version: &self.version,
            chain_id: self.chain_id,
            nft_address: &self.nft_address,
            metadata: &self.metadata,
            services: &self.services,
            credentials: &self.credentials,
        })
    }

    pub fn service_by_datatoken(&self, datatoken: &Address) -> Option<&Service> {
        self.services
            .iter()
            .find(|service| &service.datatoken_address == datatoken)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub created: String,
    pub updated: String,
    pub description: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub author: String,
    pub license: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<serde_json::Value>,
}

impl AssetMetadata {
    pub fn validate(&self) -> Result<(), DdoValidationError> {
        let required = [
            ("created", &self.created),
            ("updated", &self.updated),
            ("description", &self.description),
            ("name", &self.name),
            ("type", &self.asset_type),
            ("author", &self.author),
            ("license", &self.license),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DdoValidationError::MissingField(field));
            }
        }

        if !ASSET_TYPES.contains(&self.asset_type.as_str()) {
            return Err(DdoValidationError::InvalidType(self.asset_type.clone()));
        }

        if self.asset_type == "algorithm" {
            let has_container = self
                .algorithm
                .as_ref()
                .and_then(|algorithm| algorithm.get("container"))
                .is_some();
            if !has_container {
                return Err(DdoValidationError::MissingAlgorithm);
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Access,
    Compute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    /// Encrypted file list, as returned by the data service provider.
    pub files: String,
    pub datatoken_address: Address,
    pub service_endpoint: String,
    pub timeout: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Service {
    pub fn access(
        id: impl Into<String>,
        files: String,
        datatoken_address: Address,
        service_endpoint: String,
    ) -> Self {
        Self {
            id: id.into(),
            service_type: ServiceType::Access,
            files,
            datatoken_address,
            service_endpoint,
            timeout: 0,
            name: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRule {
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<String>,
}

/// Allow/deny lists consulted by the data service provider. Empty means open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub allow: Vec<CredentialRule>,
    #[serde(default)]
    pub deny: Vec<CredentialRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftInfo {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub owner: Address,
    #[serde(default)]
    pub state: u8,
    #[serde(rename = "tokenURI", default)]
    pub token_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatatokenInfo {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub service_id: String,
}
