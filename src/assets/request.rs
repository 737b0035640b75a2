use ocean_contracts::{Address, CreateDatatokenRequest, DeployNftRequest};
use ocean_domain::{AssetMetadata, Credentials};

/// Where the asset's data NFT comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NftSource {
    Existing(Address),
    Deploy(DeployNftRequest),
}

/// Where the asset's datatokens come from. Each datatoken backs one access
/// service, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatatokenSource {
    Existing(Vec<Address>),
    Deploy(Vec<CreateDatatokenRequest>),
}

impl DatatokenSource {
    pub fn is_empty(&self) -> bool {
        match self {
            DatatokenSource::Existing(addresses) => addresses.is_empty(),
            DatatokenSource::Deploy(requests) => requests.is_empty(),
        }
    }
}

/// Everything needed to publish one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAssetRequest {
    pub metadata: AssetMetadata,
    /// File list already encrypted by the data service provider.
    pub encrypted_files: String,
    pub nft: NftSource,
    pub datatokens: DatatokenSource,
    pub credentials: Credentials,
    pub encrypt: bool,
    pub compress: bool,
    /// Access service timeout in seconds; 0 means no expiry.
    pub service_timeout: u64,
}

impl CreateAssetRequest {
    /// Publishes on a freshly deployed "Data NFT" unless configured otherwise.
    pub fn new(metadata: AssetMetadata, encrypted_files: impl Into<String>) -> Self {
        Self {
            metadata,
            encrypted_files: encrypted_files.into(),
            nft: NftSource::Deploy(DeployNftRequest::new("Data NFT", "DATA-NFT")),
            datatokens: DatatokenSource::Deploy(Vec::new()),
            credentials: Credentials::default(),
            encrypt: false,
            compress: false,
            service_timeout: 0,
        }
    }

    pub fn with_nft(mut self, address: Address) -> Self {
        self.nft = NftSource::Existing(address);
        self
    }

    pub fn deploy_nft(mut self, request: DeployNftRequest) -> Self {
        self.nft = NftSource::Deploy(request);
        self
    }

    pub fn with_datatokens(mut self, addresses: Vec<Address>) -> Self {
        self.datatokens = DatatokenSource::Existing(addresses);
        self
    }

    pub fn deploy_datatokens(mut self, requests: Vec<CreateDatatokenRequest>) -> Self {
        self.datatokens = DatatokenSource::Deploy(requests);
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn encrypted(mut self, encrypt: bool) -> Self {
        self.encrypt = encrypt;
        self
    }

    pub fn compressed(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
