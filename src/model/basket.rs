use std::collections::BTreeMap;
use std::path::Path;

use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::TreasuryAssetConfig;

/// Default basket definition location, relative to the working directory.
pub const DEFAULT_BASKET_PATH: &str = "deployment/basket.json";

/// One token of the treasury's initial basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketToken {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
    /// Percentage of the basket (0–100).
    pub allocated_percentage: u16,
    /// Unit price in whole reference-currency units.
    pub price: u32,
}

impl BasketToken {
    pub fn asset_config(&self) -> TreasuryAssetConfig {
        TreasuryAssetConfig::supported(
            self.decimals,
            self.allocated_percentage,
            U256::from(self.price),
        )
    }
}

/// Basket definitions keyed by chain id, tokens in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Basket {
    chains: BTreeMap<String, Vec<BasketToken>>,
}

impl Basket {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading basket at {}", path.display()))?;
        let basket: Basket = serde_json::from_str(&contents)
            .with_context(|| format!("parsing basket at {}", path.display()))?;
        Ok(basket)
    }

    /// Tokens configured for `chain_id`; empty when the chain is unknown.
    pub fn tokens(&self, chain_id: &str) -> &[BasketToken] {
        self.chains
            .get(chain_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
