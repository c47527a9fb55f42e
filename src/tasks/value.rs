use alloy::primitives::{Address, U256};
use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::calc::allocate_redemption;
use crate::chain::abi::{ITreasury, IUniswapV2Pair, reserve_to_u256};
use crate::chain::{ChainCallError, short_addr};
use crate::constants::TREASURY_PROXY_CONTRACT_KEY;
use crate::model::{PoolReserves, TreasuryAssetConfig};

use super::TaskContext;

/// Quote `amount` of `from` through a pool, alongside the treasury's own
/// valuation.
pub async fn get_dollar_value(
    ctx: &TaskContext,
    treasury: Option<Address>,
    amount: U256,
    from: Address,
    pool: Option<Address>,
) -> Result<()> {
    let treasury = ctx.resolve(treasury, TREASURY_PROXY_CONTRACT_KEY)?;
    let contract = ITreasury::new(treasury, &ctx.provider);

    let pool = match pool {
        Some(pool) => pool,
        None => contract
            ._drypPoolPositionManager()
            .call()
            .await
            .map_err(ChainCallError::contract("_drypPoolPositionManager"))?,
    };
    let reserves = read_reserves(ctx, pool, from).await?;
    let local = reserves
        .quote(amount, from)
        .with_context(|| format!("quoting through pool {}", short_addr(&pool)))?;
    info!(
        %pool,
        reserve0 = %reserves.reserve0,
        reserve1 = %reserves.reserve1,
        %amount,
        value = %local,
        "spot quote"
    );

    match contract._getDrypDollar(amount, from).call().await {
        Ok(onchain) => info!(%treasury, value = %onchain, "treasury valuation"),
        Err(e) => warn!(%treasury, "_getDrypDollar failed: {e}"),
    }
    Ok(())
}

/// Allocate `amount` across the redeem basket locally and on the treasury.
pub async fn calculate_redemption_value(
    ctx: &TaskContext,
    treasury: Option<Address>,
    amount: U256,
) -> Result<()> {
    let treasury = ctx.resolve(treasury, TREASURY_PROXY_CONTRACT_KEY)?;
    let contract = ITreasury::new(treasury, &ctx.provider);

    let assets = contract
        .getAllAssets()
        .call()
        .await
        .map_err(ChainCallError::contract("getAllAssets"))?;
    let mut configs: Vec<TreasuryAssetConfig> = Vec::with_capacity(assets.len());
    for asset in &assets {
        let config = contract
            .getRedeemAssetConfig(*asset)
            .call()
            .await
            .map_err(ChainCallError::contract("getRedeemAssetConfig"))?;
        configs.push(config.into());
    }

    let local = allocate_redemption(amount, &configs).context("allocating redemption")?;
    let onchain = match contract.calculateRedeemOutputs(amount).call().await {
        Ok(outputs) => Some(outputs),
        Err(e) => {
            warn!(%treasury, "calculateRedeemOutputs failed: {e}");
            None
        }
    };

    for (i, (asset, value)) in assets.iter().zip(&local).enumerate() {
        let onchain = onchain.as_ref().and_then(|o| o.get(i));
        info!(%asset, local = %value, onchain = ?onchain, "redemption output");
    }
    Ok(())
}

async fn read_reserves(ctx: &TaskContext, pool: Address, from: Address) -> Result<PoolReserves> {
    let pair = IUniswapV2Pair::new(pool, &ctx.provider);
    let token0 = pair
        .token0()
        .call()
        .await
        .map_err(ChainCallError::contract("token0"))?;
    let token1 = pair
        .token1()
        .call()
        .await
        .map_err(ChainCallError::contract("token1"))?;
    if from != token0 && from != token1 {
        bail!("{from} is not traded by pool {pool} ({token0}/{token1})");
    }

    let reserves = pair
        .getReserves()
        .call()
        .await
        .map_err(ChainCallError::contract("getReserves"))?;
    Ok(PoolReserves {
        reserve0: reserve_to_u256(reserves.reserve0),
        reserve1: reserve_to_u256(reserves.reserve1),
        token0,
    })
}
