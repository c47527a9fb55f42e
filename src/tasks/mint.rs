use alloy::primitives::{Address, U256};
use anyhow::Result;
use tracing::{info, warn};

use crate::chain::abi::{IERC20, ITreasury};
use crate::chain::{ChainCallError, submit};
use crate::constants::TREASURY_PROXY_CONTRACT_KEY;

use super::TaskContext;

#[derive(Debug, Clone)]
pub struct MintOrder {
    pub asset: Address,
    pub amount: U256,
    pub min_out: U256,
    pub recipient: Option<Address>,
}

/// Deposit `order.amount` of a basket asset and mint Dryp for it.
pub async fn mint(ctx: &TaskContext, treasury: Option<Address>, order: &MintOrder) -> Result<()> {
    let signer = ctx.signer_address("mint")?;
    let treasury = ctx.resolve(treasury, TREASURY_PROXY_CONTRACT_KEY)?;
    let recipient = order.recipient.unwrap_or(signer);

    let erc20 = IERC20::new(order.asset, &ctx.provider);
    let balance = erc20
        .balanceOf(signer)
        .call()
        .await
        .map_err(ChainCallError::contract("balanceOf"))?;
    if balance < order.amount {
        warn!(asset = %order.asset, %balance, amount = %order.amount, "balance below deposit");
    }

    let allowance = erc20
        .allowance(signer, treasury)
        .call()
        .await
        .map_err(ChainCallError::contract("allowance"))?;
    if allowance < order.amount {
        info!(asset = %order.asset, %allowance, amount = %order.amount, "approving treasury");
        submit(erc20.approve(treasury, order.amount), "approve").await?;
    }

    let contract = ITreasury::new(treasury, &ctx.provider);
    let receipt = submit(
        contract.mint(order.asset, order.amount, order.min_out, recipient),
        "mint",
    )
    .await?;
    info!(
        asset = %order.asset,
        amount = %order.amount,
        %recipient,
        tx = %receipt.transaction_hash,
        "minted"
    );
    Ok(())
}
