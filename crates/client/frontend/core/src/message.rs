//! Player-facing messages and the bounded message history.
use std::collections::VecDeque;

/// Severity level for player-facing messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    /// Monotonic position in the log, so renderers can tell new entries apart.
    pub seq: u64,
    pub text: String,
    pub level: MessageLevel,
}

/// Circular buffer of messages shown to the player. The newest entry is the
/// current status line.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    next_seq: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_seq: 0,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, level: MessageLevel) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            seq: self.next_seq,
            text: text.into(),
            level,
        });
        self.next_seq += 1;
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Message texts.
pub mod texts {
    pub const CONNECT_PROMPT: &str = "Connect your wallet to play!";
    pub const INSTALL_WALLET: &str = "Please install MetaMask or another browser wallet!";
    pub const CONNECT_REJECTED: &str = "Wallet connection was rejected. Connect again to play.";
    pub const NO_ACCOUNTS: &str = "The wallet did not expose any account.";
    pub const NETWORK_UNREADABLE: &str = "Could not read the wallet's network, try again.";
    pub const LOAD_FAILED: &str = "Could not load the game from the contract, try again.";
    pub const RESET_FAILED: &str = "Error resetting game.";

    pub fn guess_prompt(min: u64, max: u64) -> String {
        format!("Guess a number between {} and {}!", min, max)
    }

    pub fn unsupported_network(target: &str) -> String {
        format!("Unsupported network. Please switch to {}.", target)
    }

    pub fn switch_failed(target: &str) -> String {
        format!("Failed to switch to {}.", target)
    }

    pub fn guess_failed(min: u64, max: u64) -> String {
        format!(
            "Error submitting guess, try again. Guess should be between {} - {}.",
            min, max
        )
    }

    pub fn connect_failed(reason: &str) -> String {
        format!("Failed to connect wallet: {}", reason)
    }
}
