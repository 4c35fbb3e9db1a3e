//! Trait describing a pluggable client front-end.
use async_trait::async_trait;

use crate::error::GameError;
use crate::view_model::GameView;

/// Player input, already decoded by the frontend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserIntent {
    Connect,
    SwitchNetwork,
    /// Replace the pending guess text.
    SetGuess(String),
    SubmitGuess,
    Reset,
    Quit,
}

/// Frontend abstraction for UI layers.
///
/// Frontends never touch the wallet or the contract. They turn input into
/// [`UserIntent`]s and draw whatever [`GameView`] the controller hands back.
///
/// # Implementations
///
/// - `CliFrontend`: line-oriented terminal UI
#[async_trait]
pub trait Frontend: Send {
    /// Wait for the next player input. `None` means input is exhausted and the
    /// client should shut down.
    async fn next_intent(&mut self) -> Option<UserIntent>;

    /// Draw the current state.
    fn render(&mut self, view: &GameView);

    /// Surface a failed operation. The controller has already set a
    /// player-facing message, so the default does nothing.
    fn report(&mut self, _error: &GameError) {}
}
