//! Contract interfaces used by the tasks. Every call site goes through these
//! bindings so selectors and argument types are defined exactly once.

use alloy::primitives::U256;
use alloy::sol;

use crate::model::TreasuryAssetConfig;

// ── Dryp token ─────────────────────────────────────────────────────

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IDryp {
        function initialize(string memory tokenName, string memory tokenSymbol) external;
        function whiteListContract(address account) external;
        function treasuryAddress() external view returns (address);
        function totalSupply() external view returns (uint256);
    }
}

// ── Treasury ───────────────────────────────────────────────────────

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract ITreasury {
        struct TreasuryAsset {
            bool isSupported;
            uint8 decimals;
            uint16 allocatedPercentage;
            uint256 priceInUsdt;
            uint256 amount;
        }

        function initialize(
            address drypToken,
            address drypPool,
            address treasuryManager,
            address usdt
        ) external;

        function startTreasury(
            address[] calldata assets,
            uint8[] calldata decimals,
            uint16[] calldata allocatedPercentages,
            uint32[] calldata prices,
            uint256[] calldata amounts
        ) external payable;

        function mint(
            address asset,
            uint256 amount,
            uint256 minimumDrypAmount,
            address recipient
        ) external payable;

        function isTreasuryStarted() external view returns (bool);
        function getAllAssets() external view returns (address[] memory);
        function getAllMinitingAssets() external view returns (address[] memory);
        function checkBalance(address asset) external view returns (uint256);
        function _toUnitsPrice(uint256 decimals, uint256 amount) external pure returns (uint256);
        function getRedeemAssetConfig(address asset) external view returns (TreasuryAsset memory config);
        function getUnRedeemAssetConfig(address asset) external view returns (TreasuryAsset memory config);
        function totalValueLockedInRedeemBasket() external view returns (uint256);
        function totalValueLockedInNonRedeemBasket() external view returns (uint256);
        function totalValueLockedInRevenue() external view returns (uint256);
        function calculateRedeemOutputs(uint256 amount) external view returns (uint256[] memory);
        function _getDrypDollar(uint256 inAmount, address from) external view returns (uint256);
        function _usdt() external view returns (address);
        function _drypPoolPositionManager() external view returns (address);
    }
}

impl From<ITreasury::TreasuryAsset> for TreasuryAssetConfig {
    fn from(asset: ITreasury::TreasuryAsset) -> Self {
        TreasuryAssetConfig {
            is_supported: asset.isSupported,
            decimals: asset.decimals,
            allocated_percentage: asset.allocatedPercentage,
            price: asset.priceInUsdt,
            amount: asset.amount,
        }
    }
}

// ── ERC20 ──────────────────────────────────────────────────────────

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
    }
}

// ── Constant-product pool ──────────────────────────────────────────

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IUniswapV2Pair {
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
        function token0() external view returns (address);
        function token1() external view returns (address);
    }
}

/// Widen a `uint112` reserve to `U256`.
pub fn reserve_to_u256(reserve: alloy::primitives::Uint<112, 2>) -> U256 {
    U256::from(reserve.to::<u128>())
}
