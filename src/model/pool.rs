use alloy::primitives::{Address, U256};

use crate::calc::{self, ArithmeticError};

/// Reserves of a two-asset constant-product pool, read at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    pub reserve0: U256,
    pub reserve1: U256,
    /// Token whose balance is `reserve0`.
    pub token0: Address,
}

impl PoolReserves {
    /// Spot quote of `in_amount` of `input_token` in the other pool asset.
    pub fn quote(&self, in_amount: U256, input_token: Address) -> Result<U256, ArithmeticError> {
        calc::quote_via_reserves(in_amount, self, input_token == self.token0)
    }
}
