use alloy::primitives::Address;
use alloy::sol_types::SolCall;
use anyhow::{Context, Result};
use tracing::info;

use crate::chain::abi::{IDryp, ITreasury};
use crate::chain::proxy::deploy_proxy;
use crate::constants::{
    TOKEN_CONTRACT_KEY, TOKEN_NAME, TOKEN_PROXY_CONTRACT_KEY, TOKEN_SYMBOL, TREASURY_CONTRACT_KEY,
    TREASURY_PROXY_CONTRACT_KEY,
};

use super::{TaskContext, verify};

/// Treasury initializer arguments; `None` fields fall back to the ledger or
/// the signer.
#[derive(Debug, Clone)]
pub struct TreasuryInit {
    pub dryp: Option<Address>,
    pub pool: Address,
    pub manager: Option<Address>,
    pub usdt: Address,
}

pub async fn deploy_token(ctx: &TaskContext, verify: bool) -> Result<()> {
    ctx.signer_address("deploy-token")?;
    info!(chain_id = ctx.chain_id, "deploying {TOKEN_CONTRACT_KEY}");

    let init = IDryp::initializeCall {
        tokenName: TOKEN_NAME.to_string(),
        tokenSymbol: TOKEN_SYMBOL.to_string(),
    }
    .abi_encode();
    deploy_and_record(
        ctx,
        TOKEN_CONTRACT_KEY,
        TOKEN_PROXY_CONTRACT_KEY,
        init,
    )
    .await?;

    if verify {
        verify::verify_token(ctx).await?;
    }
    Ok(())
}

pub async fn deploy_treasury(ctx: &TaskContext, args: &TreasuryInit, verify: bool) -> Result<()> {
    let signer = ctx.signer_address("deploy-treasury")?;
    let dryp = ctx.resolve(args.dryp, TOKEN_PROXY_CONTRACT_KEY)?;
    let manager = args.manager.unwrap_or(signer);
    info!(
        chain_id = ctx.chain_id,
        %dryp,
        pool = %args.pool,
        %manager,
        usdt = %args.usdt,
        "deploying {TREASURY_CONTRACT_KEY}"
    );

    let init = ITreasury::initializeCall {
        drypToken: dryp,
        drypPool: args.pool,
        treasuryManager: manager,
        usdt: args.usdt,
    }
    .abi_encode();
    deploy_and_record(
        ctx,
        TREASURY_CONTRACT_KEY,
        TREASURY_PROXY_CONTRACT_KEY,
        init,
    )
    .await?;

    if verify {
        verify::verify_treasury(ctx).await?;
    }
    Ok(())
}

/// Deploy `contract` behind a proxy and record both addresses, proxy first.
async fn deploy_and_record(
    ctx: &TaskContext,
    contract: &str,
    proxy_key: &str,
    init_calldata: Vec<u8>,
) -> Result<()> {
    let implementation = ctx
        .artifacts
        .contract(contract)
        .with_context(|| format!("loading {contract} artifact"))?;
    let proxy_artifact = ctx
        .artifacts
        .erc1967_proxy()
        .context("loading ERC1967Proxy artifact")?;

    let deployment = deploy_proxy(
        &ctx.provider,
        &implementation,
        &proxy_artifact,
        init_calldata.into(),
    )
    .await?;
    ctx.record(proxy_key, deployment.proxy)?;
    ctx.record(contract, deployment.implementation)?;
    Ok(())
}
