use alloy::primitives::{Address, U256, address};

use treasury_ops::calc::{
    ArithmeticError, allocate_redemption, quote_via_reserves, total_basket_value,
};
use treasury_ops::model::{PoolReserves, TreasuryAssetConfig};

const DRYP: Address = address!("A4ea74A4880cF488D2361cbB6f065d2030F0bB7E");
const USDT: Address = address!("2321362De9777fA03591b3eBDa28E589C1d8cb29");

fn u(n: u64) -> U256 {
    U256::from(n)
}

fn reserves(reserve0: u64, reserve1: u64) -> PoolReserves {
    PoolReserves {
        reserve0: u(reserve0),
        reserve1: u(reserve1),
        token0: DRYP,
    }
}

fn unsupported() -> TreasuryAssetConfig {
    TreasuryAssetConfig {
        is_supported: false,
        ..TreasuryAssetConfig::supported(18, 50, u(1))
    }
}

// ── Spot quotes ─────────────────────────────────────────────────────

#[test]
fn test_quote_token0_in() {
    let pool = reserves(500_000_000, 250_000_000);
    assert_eq!(quote_via_reserves(u(1_000_000), &pool, true), Ok(u(500_000)));
}

#[test]
fn test_quote_token1_in() {
    let pool = reserves(500_000_000, 250_000_000);
    assert_eq!(quote_via_reserves(u(1_000_000), &pool, false), Ok(u(2_000_000)));
}

#[test]
fn test_quote_truncates() {
    let pool = reserves(3, 1);
    assert_eq!(quote_via_reserves(u(10), &pool, true), Ok(u(3)));
}

#[test]
fn test_quote_empty_reserve() {
    assert_eq!(
        quote_via_reserves(u(1_000), &reserves(0, 250), false),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        quote_via_reserves(u(1_000), &reserves(0, 250), true),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        quote_via_reserves(u(1_000), &reserves(250, 0), true),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        quote_via_reserves(u(1_000), &reserves(250, 0), false),
        Err(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn test_quote_by_input_token() {
    let pool = reserves(500_000_000, 250_000_000);
    assert_eq!(pool.quote(u(1_000_000), DRYP), Ok(u(500_000)));
    assert_eq!(pool.quote(u(1_000_000), USDT), Ok(u(2_000_000)));
}

#[test]
fn test_quote_overflow() {
    let pool = PoolReserves {
        reserve0: u(1),
        reserve1: U256::MAX,
        token0: DRYP,
    };
    assert_eq!(
        quote_via_reserves(u(2), &pool, true),
        Err(ArithmeticError::Overflow)
    );
}

// ── Redemption allocation ───────────────────────────────────────────

#[test]
fn test_allocate_single_asset() {
    let assets = [TreasuryAssetConfig::supported(6, 40, u(1))];
    assert_eq!(allocate_redemption(u(1000), &assets), Ok(vec![u(400_000_000)]));
}

#[test]
fn test_allocate_basket() {
    let assets = [
        TreasuryAssetConfig::supported(6, 50, u(1)),
        TreasuryAssetConfig::supported(18, 30, u(2500)),
        TreasuryAssetConfig::supported(8, 20, u(60_000)),
    ];
    let amounts = allocate_redemption(u(1000), &assets).unwrap();
    // 500 USDT, 0.12 ETH, 1/300 BTC
    assert_eq!(amounts[0], u(500_000_000));
    assert_eq!(amounts[1], U256::from(120_000_000_000_000_000u128));
    assert_eq!(amounts[2], u(333_333));
}

#[test]
fn test_allocate_rounds_half_up() {
    // 1 * 50 * 10^0 / (100 * 4) = 0.125 -> 0; 3 * 50 / 100 = 1.5 -> 2
    let assets = [TreasuryAssetConfig::supported(0, 50, u(4))];
    assert_eq!(allocate_redemption(u(1), &assets), Ok(vec![u(0)]));
    let assets = [TreasuryAssetConfig::supported(0, 50, u(1))];
    assert_eq!(allocate_redemption(u(3), &assets), Ok(vec![u(2)]));
    // 2 / 3 = 0.666.. -> 1
    let assets = [TreasuryAssetConfig::supported(0, 100, u(3))];
    assert_eq!(allocate_redemption(u(2), &assets), Ok(vec![u(1)]));
}

#[test]
fn test_allocate_unsupported_keeps_position() {
    let assets = [
        TreasuryAssetConfig::supported(6, 40, u(1)),
        unsupported(),
        TreasuryAssetConfig::supported(6, 60, u(1)),
    ];
    assert_eq!(
        allocate_redemption(u(1000), &assets),
        Ok(vec![u(400_000_000), U256::ZERO, u(600_000_000)])
    );
}

#[test]
fn test_allocate_zero_price() {
    let assets = [TreasuryAssetConfig::supported(6, 40, U256::ZERO)];
    assert_eq!(
        allocate_redemption(u(1000), &assets),
        Err(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn test_allocate_overflow() {
    let assets = [TreasuryAssetConfig::supported(77, 100, u(1))];
    assert_eq!(
        allocate_redemption(u(1000), &assets),
        Err(ArithmeticError::Overflow)
    );
}

#[test]
fn test_allocate_empty_basket() {
    assert_eq!(allocate_redemption(u(1000), &[]), Ok(vec![]));
}

// ── Basket value ────────────────────────────────────────────────────

#[test]
fn test_basket_value_same_decimals() {
    let assets = [TreasuryAssetConfig::supported(6, 100, u(1)).with_amount(u(5_000_000))];
    assert_eq!(total_basket_value(&assets, 6), Ok(u(5_000_000)));
}

#[test]
fn test_basket_value_converts_by_price() {
    let assets = [TreasuryAssetConfig::supported(18, 100, u(2500)).with_amount(u(3))];
    assert_eq!(total_basket_value(&assets, 6), Ok(u(7500)));
}

#[test]
fn test_basket_value_mixed() {
    let assets = [
        TreasuryAssetConfig::supported(6, 50, u(1)).with_amount(u(1_000)),
        TreasuryAssetConfig::supported(18, 30, u(2500)).with_amount(u(2)),
        unsupported().with_amount(u(999_999)),
    ];
    assert_eq!(total_basket_value(&assets, 6), Ok(u(6_000)));
}

#[test]
fn test_basket_value_overflow() {
    let assets = [
        TreasuryAssetConfig::supported(6, 50, u(1)).with_amount(U256::MAX),
        TreasuryAssetConfig::supported(6, 50, u(1)).with_amount(u(1)),
    ];
    assert_eq!(total_basket_value(&assets, 6), Err(ArithmeticError::Overflow));
}
