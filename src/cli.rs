use std::path::PathBuf;

use alloy::primitives::{Address, U256};
use clap::{Args, Parser, Subcommand};

use crate::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_ENV, DEFAULT_ETHERSCAN_API_URL};
use crate::ledger::{DEFAULT_LEDGER_PATH, LedgerMode};
use crate::model::basket::DEFAULT_BASKET_PATH;

/// Deployment and operations tool for the Dryp token and its treasury.
#[derive(Parser, Debug)]
#[command(name = "treasury-ops", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command. Each falls back to an environment
/// variable, which may come from a `.env` file.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Deployment environment key in the ledger
    #[arg(long = "env", env = "ENV", default_value = DEFAULT_ENV, global = true)]
    pub environment: String,

    /// JSON-RPC endpoint
    #[arg(long, env = "SEPOLIA_URL", global = true)]
    pub rpc_url: Option<String>,

    /// Hex private key used to sign transactions
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true, global = true)]
    pub private_key: Option<String>,

    /// Etherscan API key; verification is skipped without one
    #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true, global = true)]
    pub etherscan_api_key: Option<String>,

    /// Etherscan API endpoint
    #[arg(long, env = "ETHERSCAN_API_URL", default_value = DEFAULT_ETHERSCAN_API_URL, global = true)]
    pub etherscan_api_url: String,

    /// Spender approved by `initialize-treasury --approve` (default: the treasury)
    #[arg(long, env = "OWNER", global = true)]
    pub owner: Option<Address>,

    /// Deployment ledger file
    #[arg(long = "ledger", default_value = DEFAULT_LEDGER_PATH, global = true)]
    pub ledger_path: PathBuf,

    /// Bucket shape of the ledger file
    #[arg(long, value_enum, default_value_t = LedgerMode::List, global = true)]
    pub ledger_mode: LedgerMode,

    /// Treasury basket definition file
    #[arg(long = "basket", default_value = DEFAULT_BASKET_PATH, global = true)]
    pub basket_path: PathBuf,

    /// Hardhat artifacts directory
    #[arg(long = "artifacts", default_value = DEFAULT_ARTIFACTS_DIR, global = true)]
    pub artifacts_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deploy the Dryp token behind an ERC-1967 proxy
    DeployToken {
        /// Submit the implementation for explorer verification
        #[arg(long)]
        verify: bool,
    },

    /// Verify the Dryp token implementation on the explorer
    VerifyToken,

    /// Deploy the treasury behind an ERC-1967 proxy
    DeployTreasury {
        /// Submit the implementation for explorer verification
        #[arg(long)]
        verify: bool,

        /// Dryp token (default: ledger's DrypProxy)
        #[arg(long)]
        dryp: Option<Address>,

        /// Dryp liquidity pool position manager
        #[arg(long)]
        pool: Address,

        /// Treasury manager (default: the signer)
        #[arg(long)]
        manager: Option<Address>,

        /// Reference stablecoin
        #[arg(long)]
        usdt: Address,
    },

    /// Verify the treasury implementation on the explorer
    VerifyTreasury,

    /// Whitelist the treasury on the Dryp token
    Whitelist {
        /// Dryp token (default: ledger's DrypProxy)
        #[arg(long)]
        token: Option<Address>,

        /// Treasury (default: ledger's TreasuryProxy)
        #[arg(long)]
        treasury: Option<Address>,
    },

    /// Seed the treasury with the configured basket and start it
    InitializeTreasury {
        /// Treasury (default: ledger's TreasuryProxy)
        #[arg(long)]
        treasury: Option<Address>,

        /// Total reference value split across the basket
        #[arg(long)]
        total_value: Option<U256>,

        /// Approve each basket asset before starting
        #[arg(long)]
        approve: bool,
    },

    /// Print treasury state and basket valuations
    GetDetails {
        /// Treasury (default: ledger's TreasuryProxy)
        #[arg(long)]
        treasury: Option<Address>,
    },

    /// Mint Dryp by depositing a basket asset
    Mint {
        /// Treasury (default: ledger's TreasuryProxy)
        #[arg(long)]
        treasury: Option<Address>,

        /// Asset deposited
        #[arg(long)]
        asset: Address,

        /// Deposit in the asset's smallest units
        #[arg(long)]
        amount: U256,

        /// Minimum Dryp accepted
        #[arg(long, default_value_t = U256::ZERO)]
        min_out: U256,

        /// Receiver of the minted Dryp (default: the signer)
        #[arg(long)]
        recipient: Option<Address>,
    },

    /// Quote an amount through a pool into the other asset
    GetDollarValue {
        /// Treasury (default: ledger's TreasuryProxy)
        #[arg(long)]
        treasury: Option<Address>,

        /// Input amount in smallest units
        #[arg(long)]
        amount: U256,

        /// Input token
        #[arg(long)]
        from: Address,

        /// Constant-product pool (default: the treasury's Dryp pool)
        #[arg(long)]
        pool: Option<Address>,
    },

    /// Split a reference value across the redeem basket
    CalculateRedemptionValue {
        /// Treasury (default: ledger's TreasuryProxy)
        #[arg(long)]
        treasury: Option<Address>,

        /// Reference value to redeem
        #[arg(long)]
        amount: U256,
    },
}
