//! Wallet and contract abstraction traits.
//!
//! This module defines a layered abstraction:
//! - Layer 0: WalletProvider (injected wallet capability)
//! - Layer 1: ContractGateway, GatewayFactory (guess-game contract)

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::config::ChainConfigEntry;
use crate::types::{Address, ChainId, NetworkDescriptor, TransactionReceipt, WalletEvent};

// ============================================================================
// Error Types
// ============================================================================

/// Wallet capability errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("No wallet provider available")]
    Unavailable,

    #[error("Request rejected by user")]
    UserRejected,

    #[error("Chain {0} has not been added to the wallet")]
    UnknownChain(ChainId),

    #[error("Provider error {code}: {message}")]
    Provider { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Game contract errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("Transaction rejected by user")]
    TransactionRejected,

    #[error("Transaction reverted: {0}")]
    TransactionReverted(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Read call failed: {0}")]
    ReadFailure(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

// ============================================================================
// Layer 0: Wallet Capability
// ============================================================================

/// Capability interface over an injected wallet.
///
/// Implementations relay to the wallet and translate its error shapes; they
/// never retry.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether a wallet is present in the host environment.
    fn is_available(&self) -> bool;

    /// Chain the wallet is currently connected to.
    async fn current_network(&self) -> Result<ChainId, WalletError>;

    /// Ask the user to expose accounts. Suspends on wallet approval.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Ask the wallet to move to `chain_id`.
    ///
    /// Fails with [`WalletError::UnknownChain`] when the wallet has never seen
    /// the chain.
    async fn switch_network(&self, chain_id: ChainId) -> Result<(), WalletError>;

    /// Ask the wallet to register a new network.
    async fn add_network(&self, descriptor: &NetworkDescriptor) -> Result<(), WalletError>;

    /// Receiver for `chainChanged` / `accountsChanged` notifications.
    fn subscribe(&self) -> broadcast::Receiver<WalletEvent>;
}

// ============================================================================
// Layer 1: Game Contract
// ============================================================================

/// Typed access to one deployed guess-game contract on one chain.
///
/// A gateway is only valid for the network it was built for; callers drop it
/// whenever the wallet's network changes.
#[async_trait]
pub trait ContractGateway: Send + Sync {
    /// Deployed contract address.
    fn address(&self) -> Address;

    /// Chain this binding targets.
    fn chain_id(&self) -> ChainId;

    /// Current secret target (`secret()`).
    async fn read_secret(&self) -> Result<u64, ContractError>;

    /// Guesses made by `account` since the last reset (`getAttempts(address)`).
    async fn read_attempts(&self, account: Address) -> Result<u64, ContractError>;

    /// Send `makeGuess(value)` from `account` and wait for confirmation.
    async fn submit_guess(
        &self,
        account: Address,
        value: u64,
    ) -> Result<TransactionReceipt, ContractError>;

    /// Send `resetGame()` from `account` and wait for confirmation.
    async fn reset_game(&self, account: Address) -> Result<TransactionReceipt, ContractError>;
}

/// Builds gateways for resolved chain config entries.
pub trait GatewayFactory: Send + Sync {
    type Gateway: ContractGateway;

    fn bind(&self, entry: &ChainConfigEntry) -> Self::Gateway;
}
