mod ddo;
mod did;
mod metadata_flags;
mod network_id;

pub use ddo::{
    AssetMetadata, CredentialRule, Credentials, DDO_CONTEXT, DDO_VERSION, DatatokenInfo, Ddo,
    DdoValidationError, NftInfo, Service, ServiceType,
};
pub use did::{DID_PREFIX, DidError, derive_did, did_checksum, validate_did};
pub use metadata_flags::MetadataFlags;
pub use network_id::{NetworkId, NetworkIdError};
