//! Session state owned by the controller.

use client_blockchain_core::Address;

/// Controller lifecycle.
///
/// `Connecting`, `NetworkCheck`, `Submitting` and `Resetting` are transient;
/// the rest are where the controller rests between operations. `LoadFailed`
/// is where a connected session rests after the network or game could not be
/// read; connecting again retries the load.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::IntoStaticStr,
)]
pub enum Phase {
    #[default]
    Disconnected,
    Connecting,
    NetworkCheck,
    Unsupported,
    Idle,
    LoadFailed,
    Submitting,
    Resetting,
}

impl Phase {
    /// True while a wallet or contract request is in flight.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            Phase::Connecting | Phase::NetworkCheck | Phase::Submitting | Phase::Resetting
        )
    }
}

/// Account the player authorised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalletSession {
    pub account: Address,
}

/// Game data read back from the contract.
///
/// `target` and `attempts` are only ever replaced together, from reads that
/// all succeeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSession {
    pub target: u64,
    pub attempts: u64,
    /// Raw text of the guess being typed.
    pub pending_guess: String,
}

impl GameSession {
    pub fn new(target: u64, attempts: u64) -> Self {
        Self {
            target,
            attempts,
            pending_guess: String::new(),
        }
    }
}
