use std::path::PathBuf;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result, bail};

use crate::cli::GlobalArgs;
use crate::ledger::LedgerMode;

/// Resolved settings for one task run, assembled once from flags and the
/// environment and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub rpc_url: String,
    pub signer: Option<PrivateKeySigner>,
    pub etherscan_api_key: Option<String>,
    pub etherscan_api_url: String,
    pub owner: Option<Address>,
    pub ledger_path: PathBuf,
    pub ledger_mode: LedgerMode,
    pub basket_path: PathBuf,
    pub artifacts_dir: PathBuf,
}

impl Config {
    pub fn from_cli(args: &GlobalArgs) -> Result<Self> {
        let rpc_url = match args.rpc_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => bail!("no RPC endpoint configured; set SEPOLIA_URL or pass --rpc-url"),
        };
        let environment = args.environment.trim();
        if environment.is_empty() {
            bail!("environment key must not be empty");
        }

        let signer = args
            .private_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| {
                k.parse::<PrivateKeySigner>()
                    .context("PRIVATE_KEY is not a valid secp256k1 key")
            })
            .transpose()?;

        let etherscan_api_key = args
            .etherscan_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Ok(Self {
            environment: environment.to_string(),
            rpc_url,
            signer,
            etherscan_api_key,
            etherscan_api_url: args.etherscan_api_url.clone(),
            owner: args.owner,
            ledger_path: args.ledger_path.clone(),
            ledger_mode: args.ledger_mode,
            basket_path: args.basket_path.clone(),
            artifacts_dir: args.artifacts_dir.clone(),
        })
    }

    /// Address of the configured signer.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer.as_ref().map(|s| s.address())
    }
}
