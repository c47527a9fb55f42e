use std::path::PathBuf;

use alloy::primitives::{U256, address};

use treasury_ops::calc::allocate_redemption;
use treasury_ops::model::{Basket, TreasuryAssetConfig};

const BASKET: &str = r#"{
  "11155111": [
    { "symbol": "WETH", "address": "0x7b79995e5f793A07Bc00c21412e50Ecae098E7f9", "decimals": 18, "allocatedPercentage": 30, "price": 2500 },
    { "symbol": "USDT", "address": "0xaA8E23Fb1079EA71e0a56F48a2aA51851D8433D0", "decimals": 6, "allocatedPercentage": 50, "price": 1 },
    { "symbol": "WBTC", "address": "0x29f2D40B0605204364af54EC677bD022dA425d03", "decimals": 8, "allocatedPercentage": 20, "price": 60000 }
  ]
}"#;

fn write_basket(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "treasury-ops-basket-{}-{name}.json",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_basket_keeps_file_order() {
    let basket = Basket::load(&write_basket("order", BASKET)).unwrap();
    let symbols: Vec<&str> = basket
        .tokens("11155111")
        .iter()
        .map(|t| t.symbol.as_str())
        .collect();
    assert_eq!(symbols, ["WETH", "USDT", "WBTC"]);
    assert_eq!(
        basket.tokens("11155111")[0].address,
        address!("7b79995e5f793A07Bc00c21412e50Ecae098E7f9")
    );
}

#[test]
fn test_basket_unknown_chain_is_empty() {
    let basket = Basket::load(&write_basket("unknown", BASKET)).unwrap();
    assert!(basket.tokens("1").is_empty());
}

#[test]
fn test_basket_asset_configs() {
    let basket = Basket::load(&write_basket("configs", BASKET)).unwrap();
    let configs: Vec<TreasuryAssetConfig> = basket
        .tokens("11155111")
        .iter()
        .map(|t| t.asset_config())
        .collect();

    assert!(configs.iter().all(|c| c.is_supported && c.amount.is_zero()));
    assert_eq!(configs[1], TreasuryAssetConfig::supported(6, 50, U256::from(1)));

    let amounts = allocate_redemption(U256::from(1000), &configs).unwrap();
    assert_eq!(amounts[1], U256::from(500_000_000u64));
}

#[test]
fn test_basket_errors_name_the_file() {
    let path = write_basket("malformed", "[1, 2");
    let err = Basket::load(&path).unwrap_err();
    assert!(format!("{err}").contains(&path.display().to_string()));

    let missing = std::env::temp_dir().join("treasury-ops-no-such-basket.json");
    assert!(Basket::load(&missing).is_err());
}
