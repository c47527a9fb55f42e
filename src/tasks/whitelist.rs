use alloy::primitives::Address;
use anyhow::Result;
use tracing::info;

use crate::chain::abi::IDryp;
use crate::chain::{ChainCallError, submit};
use crate::constants::{TOKEN_PROXY_CONTRACT_KEY, TREASURY_PROXY_CONTRACT_KEY};

use super::TaskContext;

/// Allow the treasury to mint and burn Dryp.
pub async fn whitelist(
    ctx: &TaskContext,
    token: Option<Address>,
    treasury: Option<Address>,
) -> Result<()> {
    ctx.signer_address("whitelist")?;
    let token = ctx.resolve(token, TOKEN_PROXY_CONTRACT_KEY)?;
    let treasury = ctx.resolve(treasury, TREASURY_PROXY_CONTRACT_KEY)?;
    info!(%token, %treasury, "whitelisting treasury");

    let dryp = IDryp::new(token, &ctx.provider);
    submit(dryp.whiteListContract(treasury), "whiteListContract").await?;

    let current = dryp
        .treasuryAddress()
        .call()
        .await
        .map_err(ChainCallError::contract("treasuryAddress"))?;
    info!(%token, treasury = %current, "token treasury address");
    Ok(())
}
