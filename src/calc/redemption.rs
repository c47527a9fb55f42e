use alloy::primitives::U256;

use crate::model::TreasuryAssetConfig;

use super::{ArithmeticError, PERCENT_DENOMINATOR, checked_mul, div_round_half_up, pow10};

/// Split `total_reference_value` across the basket by allocation percentage
/// and convert each share into asset smallest units.
///
/// Output is index-aligned with `assets`; unsupported assets get zero. Each
/// amount is `total * pct / 100 * 10^decimals / price`, evaluated as a
/// single fraction and rounded half-up to an integer.
pub fn allocate_redemption(
    total_reference_value: U256,
    assets: &[TreasuryAssetConfig],
) -> Result<Vec<U256>, ArithmeticError> {
    assets
        .iter()
        .map(|asset| {
            if !asset.is_supported {
                return Ok(U256::ZERO);
            }
            let share = checked_mul(
                total_reference_value,
                U256::from(asset.allocated_percentage),
            )?;
            let numerator = checked_mul(share, pow10(asset.decimals)?)?;
            let denominator = checked_mul(U256::from(PERCENT_DENOMINATOR), asset.price)?;
            div_round_half_up(numerator, denominator)
        })
        .collect()
}

/// Reference-currency value of the supported assets in a basket.
///
/// Holdings whose decimals already match `reference_decimals` are summed
/// as-is; any other asset is converted through its price first.
pub fn total_basket_value(
    assets: &[TreasuryAssetConfig],
    reference_decimals: u8,
) -> Result<U256, ArithmeticError> {
    assets
        .iter()
        .filter(|asset| asset.is_supported)
        .try_fold(U256::ZERO, |total, asset| {
            let value = if asset.decimals == reference_decimals {
                asset.amount
            } else {
                checked_mul(asset.amount, asset.price)?
            };
            total.checked_add(value).ok_or(ArithmeticError::Overflow)
        })
}
