//! Solidity contract integrations.
//!
//! Each contract is represented as a struct with methods corresponding to
//! on-chain function calls.

pub mod guess_game;

// Re-export contract types
pub use guess_game::{EvmGatewayFactory, GuessGameContract, IGuessGame};
