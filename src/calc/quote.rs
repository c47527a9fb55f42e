use alloy::primitives::U256;

use crate::model::PoolReserves;

use super::{ArithmeticError, checked_mul, div_floor};

/// Spot-price quote of `in_amount` through a constant-product pool.
///
/// token0 in: `in * reserve1 / reserve0`; token1 in: `in * reserve0 / reserve1`.
/// Fees and slippage are ignored. A pool with an empty side has no price, so
/// a zero reserve on either side is `DivisionByZero`. That includes
/// `reserve1 = 0` with token0 input, where the formula alone would give 0.
pub fn quote_via_reserves(
    in_amount: U256,
    reserves: &PoolReserves,
    input_is_token0: bool,
) -> Result<U256, ArithmeticError> {
    if reserves.reserve0.is_zero() || reserves.reserve1.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let (reserve_in, reserve_out) = if input_is_token0 {
        (reserves.reserve0, reserves.reserve1)
    } else {
        (reserves.reserve1, reserves.reserve0)
    };
    div_floor(checked_mul(in_amount, reserve_out)?, reserve_in)
}
