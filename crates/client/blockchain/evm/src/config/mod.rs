//! EVM network configuration and deployment loading.

pub mod deployment;
pub mod network;

// Re-export commonly used items
pub use deployment::{builtin_chain_config, load_chain_config};
pub use network::{EvmConfig, EvmNetwork};
