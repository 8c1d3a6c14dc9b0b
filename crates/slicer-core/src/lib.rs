pub mod collect;
pub mod config;
pub mod cut;
pub mod error;
pub mod naming;
pub mod types;
pub mod units;
