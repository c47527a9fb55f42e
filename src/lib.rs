pub mod calc;
pub mod chain;
pub mod cli;
pub mod constants;
pub mod explorer;
pub mod ledger;
pub mod model;
pub mod tasks;
