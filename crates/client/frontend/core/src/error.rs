//! Controller error taxonomy.

use client_blockchain_core::{ChainId, ContractError, WalletError};

use crate::state::Phase;

/// Everything a controller operation can fail with. Each failure also leaves a
/// player-facing message in the controller's log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("No wallet provider available")]
    ProviderUnavailable,

    #[error("Request rejected by the user")]
    UserRejected,

    #[error("Unsupported network: chain {0}")]
    UnsupportedNetwork(ChainId),

    #[error("Network switch failed: {0}")]
    NetworkSwitchFailed(WalletError),

    #[error("Transaction rejected by the user")]
    TransactionRejected,

    #[error("Transaction reverted: {0}")]
    TransactionReverted(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Contract read failed: {0}")]
    ReadFailure(String),

    #[error("Invalid guess: {0:?}")]
    InvalidGuess(String),

    #[error("Wallet not connected")]
    NotConnected,

    #[error("Not ready (phase {0})")]
    NotReady(Phase),

    #[error("Another operation is in progress (phase {0})")]
    Busy(Phase),

    #[error("Wallet error: {0}")]
    Wallet(WalletError),
}

impl From<ContractError> for GameError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::TransactionRejected => GameError::TransactionRejected,
            ContractError::TransactionReverted(reason) => GameError::TransactionReverted(reason),
            ContractError::NetworkError(message) | ContractError::Encoding(message) => {
                GameError::TransactionFailed(message)
            }
            ContractError::ReadFailure(message) => GameError::ReadFailure(message),
        }
    }
}

impl From<WalletError> for GameError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::Unavailable => GameError::ProviderUnavailable,
            WalletError::UserRejected => GameError::UserRejected,
            other => GameError::Wallet(other),
        }
    }
}
