use alloy::sol;

sol! {
    #[derive(Debug)]
    #[sol(rpc)]
    interface ERC721Template {
        struct metaDataProof {
            address validatorAddress;
            uint8 v;
            bytes32 r;
            bytes32 s;
        }

        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);

        event MetadataCreated(
            address indexed createdBy,
            uint8 state,
            string decryptorUrl,
            bytes flags,
            bytes data,
            bytes32 metaDataHash,
            uint256 timestamp,
            uint256 blockNumber
        );

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function ownerOf(uint256 tokenId) external view returns (address owner);
        function tokenURI(uint256 tokenId) external view returns (string memory);
        function getTokensList() external view returns (address[] memory);
        function getMetaData() external view returns (
            string memory decryptorUrl,
            string memory decryptorAddress,
            uint8 state,
            bool hasMetadata
        );

        function createERC20(
            uint256 _templateIndex,
            string[] calldata strings,
            address[] calldata addresses,
            uint256[] calldata uints,
            bytes[] calldata bytess
        ) external returns (address);

        function setMetaData(
            uint8 _metaDataState,
            string calldata _metaDataDecryptorUrl,
            string calldata _metaDataDecryptorAddress,
            bytes calldata flags,
            bytes calldata data,
            bytes32 _metaDataHash,
            metaDataProof[] memory _metadataProofs
        ) external;
    }
}
