use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Per-asset basket configuration as stored by the treasury contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryAssetConfig {
    pub is_supported: bool,
    /// Smallest-unit exponent of the asset token.
    pub decimals: u8,
    /// Share of the basket, as a percentage (0–100).
    pub allocated_percentage: u16,
    /// Unit price in the reference currency's smallest units.
    pub price: U256,
    /// Current holdings in the asset's smallest units.
    pub amount: U256,
}

impl TreasuryAssetConfig {
    /// A supported asset with no holdings yet.
    pub fn supported(decimals: u8, allocated_percentage: u16, price: U256) -> Self {
        Self {
            is_supported: true,
            decimals,
            allocated_percentage,
            price,
            amount: U256::ZERO,
        }
    }

    pub fn with_amount(mut self, amount: U256) -> Self {
        self.amount = amount;
        self
    }
}
