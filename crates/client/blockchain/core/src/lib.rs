//! Blockchain abstraction layer for the guess-the-number client.
//!
//! This crate provides the wallet and contract capabilities the game
//! controller is written against, plus the pure network bookkeeping built on
//! top of them.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: NetworkValidator (WalletProvider + ChainConfig)
//!
//! Layer 1: ContractGateway / GatewayFactory (game contract concepts)
//!
//! Layer 0: WalletProvider (injected wallet capability)
//!          ChainConfig    (static chain id → deployment mapping)
//! ```
//!
//! # Design Philosophy
//!
//! - **Layer 0**: Capabilities, no game knowledge. The wallet is always passed
//!   explicitly, never reached through ambient globals.
//! - **Layer 1**: Typed reads/writes of the deployed game contract.
//! - **Layer 2**: Supported-network resolution and the switch/add flow.
//!
//! Provider-specific error shapes never cross this crate's boundary: backends
//! translate them into [`WalletError`] and [`ContractError`].
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_core::{ChainConfig, NetworkValidator};
//!
//! let validator = NetworkValidator::new(wallet.clone(), chains.clone());
//! let context = validator.resolve().await?;
//! if let Some(entry) = validator.entry_for(&context) {
//!     let gateway = factory.bind(entry);
//!     let target = gateway.read_secret().await?;
//! }
//! ```

pub mod config;
pub mod network;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export all traits
pub use traits::{ContractError, ContractGateway, GatewayFactory, WalletError, WalletProvider};

// Re-export all types
pub use types::{
    Address, ChainId, InvalidChainId, NativeCurrency, NetworkDescriptor, TransactionReceipt,
    TxHash, WalletEvent,
};

pub use config::{ChainConfig, ChainConfigEntry, ConfigError};
pub use network::{NetworkContext, NetworkError, NetworkValidator};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockGatewayFactory, MockGuessGame, MockWallet};
