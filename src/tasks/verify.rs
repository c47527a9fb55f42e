use anyhow::Result;
use tracing::info;

use crate::constants::{
    TOKEN_CONTRACT_KEY, TOKEN_PROXY_CONTRACT_KEY, TREASURY_CONTRACT_KEY,
    TREASURY_PROXY_CONTRACT_KEY,
};
use crate::explorer::verify_proxy;

use super::TaskContext;

pub async fn verify_token(ctx: &TaskContext) -> Result<()> {
    verify_recorded(ctx, TOKEN_CONTRACT_KEY, TOKEN_PROXY_CONTRACT_KEY).await
}

pub async fn verify_treasury(ctx: &TaskContext) -> Result<()> {
    verify_recorded(ctx, TREASURY_CONTRACT_KEY, TREASURY_PROXY_CONTRACT_KEY).await
}

/// Verify the implementation behind the proxy recorded as `proxy_key`.
async fn verify_recorded(ctx: &TaskContext, contract: &str, proxy_key: &str) -> Result<()> {
    let proxy = ctx.resolve(None, proxy_key)?;
    let Some(verifier) = ctx.verifier() else {
        return Ok(());
    };

    info!(%contract, %proxy, "verifying {contract}");
    if let Some(guid) =
        verify_proxy(&ctx.provider, &verifier, &ctx.artifacts, contract, proxy).await?
    {
        info!(%contract, %guid, "verification queued");
    }
    Ok(())
}
