//! Error types for EIP-1193 provider operations.
//!
//! Provider errors carry wallet-specific numeric codes. They are translated
//! here, at the adapter boundary, into [`WalletError`] and [`ContractError`]
//! so nothing above this crate inspects raw codes.

use client_blockchain_core::{ChainId, ContractError, WalletError};
use thiserror::Error;

/// EIP-1193 / EIP-1474 error codes.
pub mod codes {
    /// User rejected the request.
    pub const USER_REJECTED: i64 = 4001;
    /// Provider is disconnected from all chains.
    pub const DISCONNECTED: i64 = 4900;
    /// Provider is not connected to the requested chain.
    pub const CHAIN_DISCONNECTED: i64 = 4901;
    /// Chain has not been added to the wallet.
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;
    /// Node-side `execution reverted`.
    pub const EXECUTION_REVERTED: i64 = 3;
}

/// Errors returned by an [`Eip1193Transport`](crate::Eip1193Transport).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No EIP-1193 provider available")]
    Unavailable,

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code() == Some(codes::USER_REJECTED)
    }

    /// Pre-flight reverts come back as code 3 from most nodes, or as a
    /// generic server error whose message mentions the revert.
    pub fn is_revert(&self) -> bool {
        match self {
            Self::Rpc { code, message } => {
                *code == codes::EXECUTION_REVERTED || message.to_lowercase().contains("revert")
            }
            _ => false,
        }
    }

    /// Translate for a wallet request. `requested_chain` is the chain a
    /// switch was asked for, used to build [`WalletError::UnknownChain`].
    pub fn into_wallet_error(self, requested_chain: Option<ChainId>) -> WalletError {
        match self {
            Self::Unavailable => WalletError::Unavailable,
            Self::Rpc { code, .. } if code == codes::USER_REJECTED => WalletError::UserRejected,
            Self::Rpc { code, message } if code == codes::UNRECOGNIZED_CHAIN => {
                match requested_chain {
                    Some(chain) => WalletError::UnknownChain(chain),
                    None => WalletError::Provider { code, message },
                }
            }
            Self::Rpc { code, message }
                if code == codes::DISCONNECTED || code == codes::CHAIN_DISCONNECTED =>
            {
                WalletError::Transport(message)
            }
            Self::Rpc { code, message } => WalletError::Provider { code, message },
            Self::Http(e) => WalletError::Transport(e.to_string()),
            Self::InvalidResponse(msg) => WalletError::InvalidResponse(msg),
        }
    }

    /// Translate for a transaction submission.
    pub fn into_write_error(self) -> ContractError {
        if self.is_user_rejection() {
            return ContractError::TransactionRejected;
        }
        if self.is_revert() {
            return ContractError::TransactionReverted(self.to_string());
        }
        ContractError::NetworkError(self.to_string())
    }

    /// Translate for a read-only call.
    pub fn into_read_error(self) -> ContractError {
        ContractError::ReadFailure(self.to_string())
    }
}
