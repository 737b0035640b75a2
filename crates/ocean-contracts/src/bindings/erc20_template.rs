use alloy::sol;

// The same surface is implemented by the OCEAN token on development networks.
sol! {
    #[derive(Debug)]
    #[sol(rpc)]
    interface ERC20Template {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function cap() external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function getERC721Address() external view returns (address);
        function isMinter(address account) external view returns (bool);

        function mint(address account, uint256 value) external;
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}
