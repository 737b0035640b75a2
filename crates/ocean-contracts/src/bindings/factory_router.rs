use alloy::sol;

sol! {
    #[derive(Debug)]
    #[sol(rpc)]
    interface FactoryRouter {
        struct Operations {
            bytes32 exchangeIds;
            address source;
            uint8 operation;
            address tokenIn;
            uint256 amountsIn;
            address tokenOut;
            uint256 amountsOut;
            uint256 maxPrice;
            uint256 swapMarketFee;
            address marketFeeAddress;
        }

        event NewPool(address indexed poolAddress, bool isOcean);

        function routerOwner() external view returns (address);
        function isPoolTemplate(address poolTemplate) external view returns (bool);
        function isFixedRateContract(address contractAddress) external view returns (bool);
        function factory() external view returns (address);
        function isSSContract(address contractAddress) external view returns (bool);
        function getOPFFee(address baseToken) external view returns (uint256);
        function swapOceanFee() external view returns (uint256);
        function isOceanToken(address oceanToken) external view returns (bool);
        function buyDTBatch(Operations[] calldata _operations) external;
    }
}
