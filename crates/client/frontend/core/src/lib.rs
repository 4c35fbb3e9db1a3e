//! Cross-frontend game orchestration.
//!
//! Houses the [`GameController`] state machine, the message log and the
//! view-model snapshot that both the terminal client and any future graphical
//! client render from. Frontends only render [`GameView`]s and forward
//! [`UserIntent`]s; every wallet and contract call happens in here.
pub mod config;
pub mod controller;
pub mod error;
pub mod frontend;
pub mod message;
pub mod outcome;
pub mod state;
pub mod view_model;

pub use config::{GameConfig, MessageConfig};
pub use controller::GameController;
pub use error::GameError;
pub use frontend::{Frontend, UserIntent};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use outcome::GuessOutcome;
pub use state::{GameSession, Phase, WalletSession};
pub use view_model::GameView;
