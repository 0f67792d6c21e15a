pub mod balance;
pub mod parse;
pub mod rebalance;
pub mod swap;
