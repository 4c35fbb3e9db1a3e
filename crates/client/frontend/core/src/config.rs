//! Game configuration structures and loaders.
//!
//! Shared by every frontend; only affects what the player is told, never what
//! the contract accepts.

use std::env;

/// Frontend-facing game configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Lowest guess the contract accepts (used in prompts and hints).
    pub guess_min: u64,
    /// Highest guess the contract accepts (used in prompts and hints).
    pub guess_max: u64,
    pub messages: MessageConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            guess_min: 1,
            guess_max: 100,
            messages: MessageConfig::default(),
        }
    }
}

impl GameConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GUESS_MIN` - Lowest valid guess (default: 1)
    /// - `GUESS_MAX` - Highest valid guess (default: 100)
    /// - `GUESS_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(min) = read_env::<u64>("GUESS_MIN") {
            config.guess_min = min;
        }
        if let Some(max) = read_env::<u64>("GUESS_MAX") {
            config.guess_max = max;
        }
        if config.guess_max < config.guess_min {
            tracing::warn!(
                "GUESS_MAX ({}) below GUESS_MIN ({}), using defaults",
                config.guess_max,
                config.guess_min
            );
            config.guess_min = 1;
            config.guess_max = 100;
        }

        if let Some(capacity) = read_env::<usize>("GUESS_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
