//! EVM wallet and contract integration for the guess-the-number client.
//!
//! This crate implements the capabilities from `client-blockchain-core` on top
//! of an EIP-1193 provider:
//! - Wallet requests (`eth_requestAccounts`, `wallet_switchEthereumChain`, ...)
//! - Provider error-code translation (4001, 4902, reverts)
//! - `GuessGame` contract reads and writes with receipt polling
//!
//! # Architecture
//!
//! ```text
//! Eip1193Transport (HTTP JSON-RPC, browser bridge, ...)
//!        ├─→ Eip1193Wallet      (WalletProvider)
//!        └─→ GuessGameContract  (ContractGateway, one per chain)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_evm::{EvmConfig, Eip1193Wallet, EvmGatewayFactory, HttpTransport};
//!
//! let config = EvmConfig::from_env()?;
//! let transport = Arc::new(HttpTransport::new(config.get_rpc_url()));
//! let wallet = Arc::new(Eip1193Wallet::new(transport.clone()));
//! let gateways = EvmGatewayFactory::new(transport, config.receipt_poll_interval);
//! ```

pub mod config;
pub mod contracts;
pub mod core;
pub mod provider;
pub mod transport;
pub mod utils;

pub use config::{EvmConfig, EvmNetwork, builtin_chain_config, load_chain_config};
pub use contracts::{EvmGatewayFactory, GuessGameContract};
pub use crate::core::{ProviderError, codes};
pub use provider::Eip1193Wallet;
pub use transport::{Eip1193Transport, HttpTransport};
