//! Line-oriented terminal frontend for the guessing game.
//!
//! Reads one command per line, hands the decoded [`UserIntent`]s to the client
//! and prints whatever changed in the [`GameView`] afterwards. Logs go to a
//! file so they never interleave with the game output.
//!
//! [`UserIntent`]: client_frontend_core::UserIntent
//! [`GameView`]: client_frontend_core::GameView

mod app;
mod command;
mod config;
pub mod logging;
mod render;

pub use app::CliFrontend;
pub use command::{Command, CommandError, parse_command};
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::GameConfig;
