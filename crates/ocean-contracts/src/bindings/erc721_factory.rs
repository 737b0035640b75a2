use alloy::sol;

sol! {
    #[derive(Debug)]
    #[sol(rpc)]
    interface ERC721Factory {
        event NFTCreated(
            address newTokenAddress,
            address indexed templateAddress,
            string tokenName,
            address admin,
            string symbol,
            string tokenURI
        );

        // Emitted by the factory when a data NFT deploys a datatoken through it.
        event TokenCreated(
            address indexed newTokenAddress,
            address indexed templateAddress,
            string name,
            string symbol,
            uint256 cap,
            address creator
        );

        function deployERC721Contract(
            string memory name,
            string memory symbol,
            uint256 _templateIndex,
            address additionalERC20Deployer,
            address additionalMetaDataUpdater,
            string memory tokenURI
        ) external returns (address token);

        function getCurrentNFTCount() external view returns (uint256);
        function getCurrentTokenCount() external view returns (uint256);
    }
}
