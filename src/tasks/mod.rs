//! Operational tasks. Each command in [`crate::cli::Command`] maps to one
//! function here, all sharing a [`TaskContext`].

pub mod config;
mod deploy;
mod mint;
mod treasury;
mod value;
mod verify;
mod whitelist;

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::chain::{self, artifact::Artifacts};
use crate::cli::Command;
use crate::explorer::EtherscanVerifier;
use crate::ledger::DeploymentStore;

pub use config::Config;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("no `{name}` deployment recorded for env `{env}` on chain {chain_id}")]
    MissingDeployment {
        name: String,
        env: String,
        chain_id: u64,
    },

    #[error("basket has no tokens for chain {chain_id}")]
    EmptyBasket { chain_id: u64 },

    #[error("`{task}` sends transactions and needs PRIVATE_KEY")]
    MissingSigner { task: &'static str },
}

/// Everything a task needs: settings, the ledger, and a connected provider.
pub struct TaskContext {
    pub config: Config,
    pub store: DeploymentStore,
    pub artifacts: Artifacts,
    pub provider: DynProvider,
    pub chain_id: u64,
}

impl TaskContext {
    pub async fn connect(config: Config) -> Result<Self> {
        let provider = chain::connect(&config.rpc_url, config.signer.clone())?;
        let chain_id = provider
            .get_chain_id()
            .await
            .with_context(|| format!("querying chain id from {}", config.rpc_url))?;
        info!(chain_id, env = %config.environment, "connected");

        Ok(Self {
            store: DeploymentStore::new(&config.ledger_path, config.ledger_mode),
            artifacts: Artifacts::new(&config.artifacts_dir),
            config,
            provider,
            chain_id,
        })
    }

    /// Chain id as used for ledger and basket keys.
    pub fn chain_key(&self) -> String {
        self.chain_id.to_string()
    }

    /// Upsert `name -> address` in the current bucket and write the ledger.
    pub fn record(&self, name: &str, address: Address) -> Result<()> {
        let ledger = self.store.record(
            &self.config.environment,
            &self.chain_key(),
            name,
            &address.to_string(),
        )?;
        self.store.persist(&ledger)?;
        info!(%name, %address, ledger = %self.store.path().display(), "deployment recorded");
        Ok(())
    }

    /// Address recorded under `name`, if any.
    pub fn lookup(&self, name: &str) -> Result<Option<Address>> {
        let Some(raw) = self
            .store
            .lookup(&self.config.environment, &self.chain_key(), name)?
        else {
            return Ok(None);
        };
        let address = raw
            .parse::<Address>()
            .with_context(|| format!("ledger entry `{name}` holds invalid address `{raw}`"))?;
        Ok(Some(address))
    }

    /// An explicitly given address, else the one recorded under `name`.
    pub fn resolve(&self, explicit: Option<Address>, name: &str) -> Result<Address> {
        if let Some(address) = explicit {
            debug!(%name, %address, "using address from command line");
            return Ok(address);
        }
        self.lookup(name)?.ok_or_else(|| {
            TaskError::MissingDeployment {
                name: name.to_string(),
                env: self.config.environment.clone(),
                chain_id: self.chain_id,
            }
            .into()
        })
    }

    /// The signing account; fails for tasks run without a private key.
    pub fn signer_address(&self, task: &'static str) -> Result<Address> {
        Ok(self
            .config
            .signer_address()
            .ok_or(TaskError::MissingSigner { task })?)
    }

    /// The explorer client, or `None` when verification cannot run.
    pub fn verifier(&self) -> Option<EtherscanVerifier> {
        let Some(api_key) = self.config.etherscan_api_key.as_deref() else {
            warn!("ETHERSCAN_API_KEY not set, skipping verification");
            return None;
        };
        match EtherscanVerifier::new(&self.config.etherscan_api_url, api_key, self.chain_id) {
            Ok(verifier) => Some(verifier),
            Err(e) => {
                warn!("cannot build explorer client, skipping verification: {e}");
                None
            }
        }
    }
}

/// Run one command to completion.
pub async fn run(command: Command, config: Config) -> Result<()> {
    let ctx = TaskContext::connect(config).await?;

    match command {
        Command::DeployToken { verify } => deploy::deploy_token(&ctx, verify).await,
        Command::VerifyToken => verify::verify_token(&ctx).await,
        Command::DeployTreasury {
            verify,
            dryp,
            pool,
            manager,
            usdt,
        } => {
            let args = deploy::TreasuryInit {
                dryp,
                pool,
                manager,
                usdt,
            };
            deploy::deploy_treasury(&ctx, &args, verify).await
        }
        Command::VerifyTreasury => verify::verify_treasury(&ctx).await,
        Command::Whitelist { token, treasury } => {
            whitelist::whitelist(&ctx, token, treasury).await
        }
        Command::InitializeTreasury {
            treasury,
            total_value,
            approve,
        } => treasury::initialize_treasury(&ctx, treasury, total_value, approve).await,
        Command::GetDetails { treasury } => treasury::get_details(&ctx, treasury).await,
        Command::Mint {
            treasury,
            asset,
            amount,
            min_out,
            recipient,
        } => {
            let order = mint::MintOrder {
                asset,
                amount,
                min_out,
                recipient,
            };
            mint::mint(&ctx, treasury, &order).await
        }
        Command::GetDollarValue {
            treasury,
            amount,
            from,
            pool,
        } => value::get_dollar_value(&ctx, treasury, amount, from, pool).await,
        Command::CalculateRedemptionValue { treasury, amount } => {
            value::calculate_redemption_value(&ctx, treasury, amount).await
        }
    }
}
