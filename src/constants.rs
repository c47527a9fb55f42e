//! Names and fixed values shared by the operational tasks.

use alloy::primitives::{B256, b256};

/// Environment key used when `ENV` is unset.
pub const DEFAULT_ENV: &str = "dev";

/// Ledger key of the Dryp token implementation.
pub const TOKEN_CONTRACT_KEY: &str = "Dryp";

/// Ledger key of the Dryp token proxy.
pub const TOKEN_PROXY_CONTRACT_KEY: &str = "DrypProxy";

/// Ledger key of the treasury implementation.
pub const TREASURY_CONTRACT_KEY: &str = "Treasury";

/// Ledger key of the treasury proxy.
pub const TREASURY_PROXY_CONTRACT_KEY: &str = "TreasuryProxy";

/// Name passed to the token's initializer.
pub const TOKEN_NAME: &str = "DRYP";

/// Symbol passed to the token's initializer.
pub const TOKEN_SYMBOL: &str = "dryp";

/// Total basket value split across assets when starting the treasury.
pub const DEFAULT_TREASURY_SEED_VALUE: u64 = 1000;

/// Hardhat artifacts directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Artifact path of the OpenZeppelin proxy, relative to the artifacts dir.
pub const ERC1967_PROXY_ARTIFACT: &str =
    "@openzeppelin/contracts/proxy/ERC1967/ERC1967Proxy.sol/ERC1967Proxy.json";

/// The storage slot holding a proxy's implementation address.
///
/// This is specified in EIP-1967: `bytes32(uint256(keccak256('eip1967.proxy.implementation')) - 1)`
pub const IMPLEMENTATION_STORAGE_SLOT: B256 =
    b256!("0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// Etherscan multichain API endpoint.
pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";
