pub mod analyzer;
pub mod config;
pub mod etherscan;
pub mod models;
