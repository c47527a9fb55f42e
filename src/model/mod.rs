pub mod asset;
pub mod basket;
pub mod pool;

pub use asset::TreasuryAssetConfig;
pub use basket::{Basket, BasketToken};
pub use pool::PoolReserves;
