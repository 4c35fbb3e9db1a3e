//! Render-ready snapshot of the controller.

use client_blockchain_core::{Address, ChainId};

use crate::state::Phase;

/// Everything a frontend needs to draw one frame. Built by
/// [`GameController::view`](crate::GameController::view); frontends never read
/// controller state directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub phase: Phase,
    pub connected: bool,
    pub account: Option<Address>,
    /// `0x1234...abcd` form of `account`.
    pub account_label: Option<String>,
    pub chain_id: Option<ChainId>,
    pub supported: Option<bool>,
    /// Name of the network players are sent to when unsupported.
    pub target_network: String,
    pub attempts: Option<u64>,
    pub pending_guess: String,
    pub message: String,
    /// Log position of `message`; changes even when the text repeats.
    pub message_seq: u64,
    pub guess_min: u64,
    pub guess_max: u64,
    pub can_connect: bool,
    pub can_switch: bool,
    pub can_guess: bool,
    pub can_reset: bool,
}

impl GameView {
    /// Status line for the top of the screen.
    pub fn status_line(&self) -> String {
        match (&self.account_label, self.chain_id) {
            (Some(account), Some(chain)) => format!("{} on chain {}", account, chain),
            (Some(account), None) => account.clone(),
            (None, Some(chain)) => format!("Not connected (chain {})", chain),
            (None, None) => "Not connected".to_string(),
        }
    }
}

/// Abbreviate an address as `0x1234...abcd`.
pub fn short_address(address: &Address) -> String {
    let full = address.to_string();
    if full.len() <= 12 {
        return full;
    }
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_addresses() {
        let address: Address = "0x1234567890abcdef1234567890abcdef12347890"
            .parse()
            .unwrap();
        assert_eq!(short_address(&address), "0x1234...7890");
    }
}
