use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::calc::{allocate_redemption, total_basket_value};
use crate::chain::abi::{IDryp, IERC20, ITreasury};
use crate::chain::{ChainCallError, short_addr, submit};
use crate::constants::{
    DEFAULT_TREASURY_SEED_VALUE, TOKEN_PROXY_CONTRACT_KEY, TREASURY_PROXY_CONTRACT_KEY,
};
use crate::model::{Basket, TreasuryAssetConfig};

use super::{TaskContext, TaskError};

/// Seed the treasury with the basket for this chain and start it.
pub async fn initialize_treasury(
    ctx: &TaskContext,
    treasury: Option<Address>,
    total_value: Option<U256>,
    approve: bool,
) -> Result<()> {
    ctx.signer_address("initialize-treasury")?;
    let treasury = ctx.resolve(treasury, TREASURY_PROXY_CONTRACT_KEY)?;

    let basket = Basket::load(&ctx.config.basket_path)?;
    let tokens = basket.tokens(&ctx.chain_key());
    if tokens.is_empty() {
        return Err(TaskError::EmptyBasket {
            chain_id: ctx.chain_id,
        }
        .into());
    }

    let total = total_value.unwrap_or(U256::from(DEFAULT_TREASURY_SEED_VALUE));
    let configs: Vec<TreasuryAssetConfig> = tokens.iter().map(|t| t.asset_config()).collect();
    let amounts = allocate_redemption(total, &configs).context("allocating basket amounts")?;

    for (token, amount) in tokens.iter().zip(&amounts) {
        info!(
            symbol = %token.symbol,
            address = %token.address,
            decimals = token.decimals,
            allocated_percentage = token.allocated_percentage,
            price = token.price,
            %amount,
            "basket asset"
        );
    }

    if approve {
        let spender = ctx.config.owner.unwrap_or(treasury);
        for (token, amount) in tokens.iter().zip(&amounts) {
            let erc20 = IERC20::new(token.address, &ctx.provider);
            let label = format!("approve {}", token.symbol);
            submit(erc20.approve(spender, *amount), &label).await?;
        }
        info!(%spender, "basket assets approved");
    }

    let contract = ITreasury::new(treasury, &ctx.provider);
    let call = contract.startTreasury(
        tokens.iter().map(|t| t.address).collect(),
        tokens.iter().map(|t| t.decimals).collect(),
        tokens.iter().map(|t| t.allocated_percentage).collect(),
        tokens.iter().map(|t| t.price).collect(),
        amounts,
    );
    let receipt = submit(call, "startTreasury").await?;
    info!(%treasury, tx = %receipt.transaction_hash, %total, "treasury started");
    Ok(())
}

/// Report the treasury's state, per-asset holdings and basket values.
pub async fn get_details(ctx: &TaskContext, treasury: Option<Address>) -> Result<()> {
    let treasury = ctx.resolve(treasury, TREASURY_PROXY_CONTRACT_KEY)?;
    let contract = ITreasury::new(treasury, &ctx.provider);

    for entry in ctx
        .store
        .load()?
        .entries(&ctx.config.environment, &ctx.chain_key())
    {
        info!(name = %entry.name, address = %entry.address, "recorded deployment");
    }

    let started = contract
        .isTreasuryStarted()
        .call()
        .await
        .map_err(ChainCallError::contract("isTreasuryStarted"))?;
    info!(%treasury, started, "treasury");

    let assets = contract
        .getAllAssets()
        .call()
        .await
        .map_err(ChainCallError::contract("getAllAssets"))?;
    let minting = contract
        .getAllMinitingAssets()
        .call()
        .await
        .map_err(ChainCallError::contract("getAllMinitingAssets"))?;
    info!(assets = ?assets, minting = ?minting, "basket assets");

    let mut redeem_configs = Vec::with_capacity(assets.len());
    for asset in &assets {
        let erc20 = IERC20::new(*asset, &ctx.provider);
        let symbol = match erc20.symbol().call().await {
            Ok(symbol) => symbol,
            Err(_) => short_addr(asset),
        };
        let decimals = erc20
            .decimals()
            .call()
            .await
            .map_err(ChainCallError::contract("decimals"))?;

        let balance = contract
            .checkBalance(*asset)
            .call()
            .await
            .map_err(ChainCallError::contract("checkBalance"))?;
        let reference_value = contract
            ._toUnitsPrice(U256::from(decimals), balance)
            .call()
            .await
            .map_err(ChainCallError::contract("_toUnitsPrice"))?;
        let redeem: TreasuryAssetConfig = contract
            .getRedeemAssetConfig(*asset)
            .call()
            .await
            .map_err(ChainCallError::contract("getRedeemAssetConfig"))?
            .into();
        let unredeem: TreasuryAssetConfig = contract
            .getUnRedeemAssetConfig(*asset)
            .call()
            .await
            .map_err(ChainCallError::contract("getUnRedeemAssetConfig"))?
            .into();

        info!(%symbol, %balance, %reference_value, "asset balance");
        info!(%symbol, config = ?redeem, "redeem basket config");
        info!(%symbol, config = ?unredeem, "unredeem basket config");
        redeem_configs.push(redeem);
    }

    let redeem_tvl = contract
        .totalValueLockedInRedeemBasket()
        .call()
        .await
        .map_err(ChainCallError::contract("totalValueLockedInRedeemBasket"))?;
    let unredeem_tvl = contract
        .totalValueLockedInNonRedeemBasket()
        .call()
        .await
        .map_err(ChainCallError::contract("totalValueLockedInNonRedeemBasket"))?;
    let revenue_tvl = contract
        .totalValueLockedInRevenue()
        .call()
        .await
        .map_err(ChainCallError::contract("totalValueLockedInRevenue"))?;
    info!(redeem = %redeem_tvl, unredeem = %unredeem_tvl, revenue = %revenue_tvl, "value locked");

    let ref_decimals = reference_decimals(ctx, &contract).await?;
    let local = total_basket_value(&redeem_configs, ref_decimals)
        .context("summing redeem basket")?;
    if local == redeem_tvl {
        info!(value = %local, "redeem basket value matches");
    } else {
        warn!(local = %local, onchain = %redeem_tvl, "redeem basket value differs");
    }

    if let Some(token) = ctx.lookup(TOKEN_PROXY_CONTRACT_KEY)? {
        let supply = IDryp::new(token, &ctx.provider)
            .totalSupply()
            .call()
            .await
            .map_err(ChainCallError::contract("totalSupply"))?;
        info!(%token, %supply, "dryp supply");
    }
    Ok(())
}

/// Decimals of the treasury's reference stablecoin.
async fn reference_decimals<P: alloy::providers::Provider>(
    ctx: &TaskContext,
    treasury: &ITreasury::ITreasuryInstance<P>,
) -> Result<u8> {
    let usdt = treasury
        ._usdt()
        .call()
        .await
        .map_err(ChainCallError::contract("_usdt"))?;
    let decimals = IERC20::new(usdt, &ctx.provider)
        .decimals()
        .call()
        .await
        .map_err(ChainCallError::contract("decimals"))?;
    Ok(decimals)
}
