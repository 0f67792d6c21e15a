pub mod api;
pub mod config;
pub mod error;
pub mod mutation;
pub mod optimizer;
pub mod parser;
pub mod player;
pub mod rank;
pub mod roster;
pub mod scorer;
pub mod store;
pub mod team;
// cmd and reports are binary modules (declared in main.rs).

pub use error::{TeamForgeError, TfResult};
pub use mutation::swap;
pub use optimizer::runner::run_balance;
