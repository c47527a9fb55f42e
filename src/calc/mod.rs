//! Value and allocation arithmetic over already-fetched on-chain state.
//!
//! Everything here is pure and works on `U256` so pool- and token-sized
//! magnitudes never pass through floating point. Division truncates unless
//! stated otherwise, matching the contracts' integer semantics.

mod quote;
mod redemption;

use alloy::primitives::U256;
use thiserror::Error;

pub use quote::quote_via_reserves;
pub use redemption::{allocate_redemption, total_basket_value};

/// Allocation percentages are expressed out of this denominator.
pub const PERCENT_DENOMINATOR: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,
}

pub(crate) fn checked_mul(a: U256, b: U256) -> Result<U256, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow)
}

pub(crate) fn div_floor(numerator: U256, denominator: U256) -> Result<U256, ArithmeticError> {
    numerator
        .checked_div(denominator)
        .ok_or(ArithmeticError::DivisionByZero)
}

/// `numerator / denominator` rounded to the nearest integer, halves rounding
/// up (away from zero for the non-negative domain).
pub(crate) fn div_round_half_up(
    numerator: U256,
    denominator: U256,
) -> Result<U256, ArithmeticError> {
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder >= denominator - remainder {
        Ok(quotient + U256::from(1))
    } else {
        Ok(quotient)
    }
}

/// `10^exp`, failing past 256 bits.
pub(crate) fn pow10(exp: u8) -> Result<U256, ArithmeticError> {
    U256::from(10)
        .checked_pow(U256::from(exp))
        .ok_or(ArithmeticError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        let d = U256::from(4);
        assert_eq!(div_round_half_up(U256::from(9), d).unwrap(), U256::from(2)); // 2.25
        assert_eq!(div_round_half_up(U256::from(10), d).unwrap(), U256::from(3)); // 2.5
        assert_eq!(div_round_half_up(U256::from(11), d).unwrap(), U256::from(3)); // 2.75
        assert_eq!(div_round_half_up(U256::from(8), d).unwrap(), U256::from(2));
        assert_eq!(
            div_round_half_up(U256::from(1), U256::ZERO),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow10_bounds() {
        assert_eq!(pow10(0).unwrap(), U256::from(1));
        assert_eq!(pow10(18).unwrap(), U256::from(1_000_000_000_000_000_000u128));
        assert!(pow10(77).is_ok());
        assert_eq!(pow10(78), Err(ArithmeticError::Overflow));
    }
}
